//! The reflector: a fixed involutive permutation closing the rotor
//! stack into a round-trip path.

use std::fmt;

use crate::catalog::{ReflectorId, ReflectorSpec};

/// Fixed-point-free involution selected from the catalog at
/// construction and never mutated afterwards.
#[derive(Clone, Debug)]
pub struct Reflector {
    spec: &'static ReflectorSpec,
    wiring: [u8; 26],
}

impl Reflector {
    pub fn new(id: ReflectorId) -> Self {
        let spec = id.spec();
        let mut wiring = [0u8; 26];
        for (index, &letter) in spec.wiring.iter().enumerate() {
            wiring[index] = letter - b'A';
        }
        Self { spec, wiring }
    }

    pub fn id(&self) -> ReflectorId {
        self.spec.id
    }

    /// Returns the fixed partner of `index`.
    pub fn reflect(&self, index: u8) -> u8 {
        self.wiring[index as usize]
    }
}

impl Default for Reflector {
    fn default() -> Self {
        Self::new(ReflectorId::default())
    }
}

impl fmt::Display for Reflector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "reflector {}", self.spec.name)
    }
}
