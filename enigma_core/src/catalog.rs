//! Named hardware constants: the historical rotor and reflector catalog.
//!
//! Wirings are immutable static data. Components built from the same
//! id share the spec but never any mutable state, so two machines can
//! safely mount the "same" rotor type.

/// Identifies one of the historical rotor wirings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RotorId {
    I,
    II,
    III,
    IV,
    V,
    VI,
    VII,
    VIII,
}

/// Wiring and notch data for one rotor type.
#[derive(Debug)]
pub struct RotorSpec {
    pub id: RotorId,
    pub name: &'static str,
    /// Forward substitution: entry `i` holds the letter contact `i`
    /// wires to.
    pub wiring: &'static [u8; 26],
    /// Turnover letters: stepping onto one of these carries into the
    /// next rotor.
    pub notches: &'static [u8],
}

const ROTOR_I: RotorSpec = RotorSpec {
    id: RotorId::I,
    name: "I",
    wiring: b"EKMFLGDQVZNTOWYHXUSPAIBRCJ",
    notches: b"Q",
};

const ROTOR_II: RotorSpec = RotorSpec {
    id: RotorId::II,
    name: "II",
    wiring: b"AJDKSIRUXBLHWTMCQGZNPYFVOE",
    notches: b"E",
};

const ROTOR_III: RotorSpec = RotorSpec {
    id: RotorId::III,
    name: "III",
    wiring: b"BDFHJLCPRTXVZNYEIWGAKMUSQO",
    notches: b"V",
};

const ROTOR_IV: RotorSpec = RotorSpec {
    id: RotorId::IV,
    name: "IV",
    wiring: b"ESOVPZJAYQUIRHXLNFTGKDCMWB",
    notches: b"J",
};

const ROTOR_V: RotorSpec = RotorSpec {
    id: RotorId::V,
    name: "V",
    wiring: b"VZBRGITYUPSDNHLXAWMJQOFECK",
    notches: b"Z",
};

const ROTOR_VI: RotorSpec = RotorSpec {
    id: RotorId::VI,
    name: "VI",
    wiring: b"JPGVOUMFYQBENHZRDKASXLICTW",
    notches: b"ZM",
};

const ROTOR_VII: RotorSpec = RotorSpec {
    id: RotorId::VII,
    name: "VII",
    wiring: b"NZJHGRCXMYSWBOUFAIVLPEKQDT",
    notches: b"ZM",
};

const ROTOR_VIII: RotorSpec = RotorSpec {
    id: RotorId::VIII,
    name: "VIII",
    wiring: b"FKQHTLXOCBJSPDZRAMEWNIUYGV",
    notches: b"ZM",
};

impl RotorId {
    /// Every rotor type in the catalog.
    pub const ALL: [RotorId; 8] = [
        RotorId::I,
        RotorId::II,
        RotorId::III,
        RotorId::IV,
        RotorId::V,
        RotorId::VI,
        RotorId::VII,
        RotorId::VIII,
    ];

    pub fn spec(self) -> &'static RotorSpec {
        match self {
            RotorId::I => &ROTOR_I,
            RotorId::II => &ROTOR_II,
            RotorId::III => &ROTOR_III,
            RotorId::IV => &ROTOR_IV,
            RotorId::V => &ROTOR_V,
            RotorId::VI => &ROTOR_VI,
            RotorId::VII => &ROTOR_VII,
            RotorId::VIII => &ROTOR_VIII,
        }
    }

    pub fn name(self) -> &'static str {
        self.spec().name
    }
}

/// Identifies one of the historical reflector wirings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReflectorId {
    A,
    B,
    C,
}

/// Wiring data for one reflector type.
#[derive(Debug)]
pub struct ReflectorSpec {
    pub id: ReflectorId,
    pub name: &'static str,
    pub wiring: &'static [u8; 26],
}

const REFLECTOR_A: ReflectorSpec = ReflectorSpec {
    id: ReflectorId::A,
    name: "A",
    wiring: b"EJMZALYXVBWFCRQUONTSPIKHGD",
};

const REFLECTOR_B: ReflectorSpec = ReflectorSpec {
    id: ReflectorId::B,
    name: "B",
    wiring: b"YRUHQSLDPXNGOKMIEBFZCWVJAT",
};

const REFLECTOR_C: ReflectorSpec = ReflectorSpec {
    id: ReflectorId::C,
    name: "C",
    wiring: b"FVPJIAOYEDRZXWGCTKUQSBNMHL",
};

impl ReflectorId {
    /// Every reflector type in the catalog.
    pub const ALL: [ReflectorId; 3] = [ReflectorId::A, ReflectorId::B, ReflectorId::C];

    pub fn spec(self) -> &'static ReflectorSpec {
        match self {
            ReflectorId::A => &REFLECTOR_A,
            ReflectorId::B => &REFLECTOR_B,
            ReflectorId::C => &REFLECTOR_C,
        }
    }

    pub fn name(self) -> &'static str {
        self.spec().name
    }
}

impl Default for ReflectorId {
    fn default() -> Self {
        ReflectorId::B
    }
}
