//! The rotor: a rotating substitution wheel with notch-driven carry.

use std::fmt;

use crate::alphabet;
use crate::catalog::{RotorId, RotorSpec};

/// One substitution wheel in the stack.
///
/// Observable state is the rotation `position`, cycling modulo 26.
/// The ring setting offsets the wiring relative to that position
/// without moving the wheel itself; it is applied identically inside
/// the forward and backward passes.
#[derive(Clone, Debug)]
pub struct Rotor {
    spec: &'static RotorSpec,
    forward: [u8; 26],
    inverse: [u8; 26],
    position: u8,
    // 0-based internally; the public API uses the historical 1..=26
    // scale.
    ring: u8,
}

impl Rotor {
    /// Mounts a rotor of the given type at position `A`, ring
    /// setting 1.
    pub fn new(id: RotorId) -> Self {
        let spec = id.spec();
        let mut forward = [0u8; 26];
        let mut inverse = [0u8; 26];
        for (contact, &letter) in spec.wiring.iter().enumerate() {
            let mapped = letter - b'A';
            forward[contact] = mapped;
            inverse[mapped as usize] = contact as u8;
        }
        Self {
            spec,
            forward,
            inverse,
            position: 0,
            ring: 0,
        }
    }

    pub fn id(&self) -> RotorId {
        self.spec.id
    }

    /// Current rotation as an alphabet symbol.
    pub fn position(&self) -> char {
        alphabet::symbol_at(self.position)
    }

    /// Sets the rotation directly from a symbol; used at
    /// configuration time, not during processing.
    ///
    /// # Panics
    /// When `symbol` is not an alphabet member.
    pub fn set_position(&mut self, symbol: char) {
        let Some(index) = alphabet::index_of(symbol) else {
            panic!("rotor position must be an alphabet symbol");
        };
        self.position = index;
    }

    /// Ring setting on the 1..=26 scale.
    pub fn ring_setting(&self) -> u8 {
        self.ring + 1
    }

    /// Sets the ring on the 1..=26 scale; out-of-range values wrap
    /// around the alphabet.
    pub fn set_ring_setting(&mut self, setting: u8) {
        self.ring = ((u16::from(setting) + 25) % 26) as u8;
    }

    // Net offset between the wiring and the entry contacts at the
    // current state.
    fn shift(&self) -> u8 {
        alphabet::wrap_sub(self.position, self.ring)
    }

    /// Forward substitution (entry side). Pure at fixed state.
    pub fn forward(&self, index: u8) -> u8 {
        let shift = self.shift();
        let contact = alphabet::wrap_add(index, shift);
        alphabet::wrap_sub(self.forward[contact as usize], shift)
    }

    /// Backward substitution (return side); the exact inverse of
    /// [`Rotor::forward`] at the same state.
    pub fn backward(&self, index: u8) -> u8 {
        let shift = self.shift();
        let contact = alphabet::wrap_add(index, shift);
        alphabet::wrap_sub(self.inverse[contact as usize], shift)
    }

    /// Advances the wheel one step. Returns true when the new
    /// position sits on a notch, meaning the next rotor in the stack
    /// must step as well.
    pub fn step(&mut self) -> bool {
        self.position = alphabet::wrap_add(self.position, 1);
        self.spec.notches.contains(&(b'A' + self.position))
    }
}

impl fmt::Display for Rotor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rotor {} at {} (ring {})",
            self.spec.name,
            self.position(),
            self.ring_setting()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn fresh_rotor_starts_at_a_with_ring_one() {
        let rotor = Rotor::new(RotorId::I);
        assert_eq!(rotor.position(), 'A');
        assert_eq!(rotor.ring_setting(), 1);
    }

    #[test]
    fn forward_and_backward_invert_each_other_at_rest() {
        for id in RotorId::ALL {
            let rotor = Rotor::new(id);
            for index in 0..alphabet::LEN {
                assert_eq!(rotor.backward(rotor.forward(index)), index);
            }
        }
    }

    #[test]
    fn ring_setting_round_trips_on_the_one_based_scale() {
        let mut rotor = Rotor::new(RotorId::III);
        for setting in 1..=26 {
            rotor.set_ring_setting(setting);
            assert_eq!(rotor.ring_setting(), setting);
        }
    }

    #[test]
    fn ring_setting_offsets_the_substitution() {
        let mut rotor = Rotor::new(RotorId::I);
        let plain = rotor.forward(0);
        rotor.set_ring_setting(2);
        assert_ne!(rotor.forward(0), plain);
    }

    #[test]
    fn twenty_six_steps_return_to_start() {
        for id in RotorId::ALL {
            let mut rotor = Rotor::new(id);
            rotor.set_position('M');
            for _ in 0..26 {
                rotor.step();
            }
            assert_eq!(rotor.position(), 'M');
        }
    }

    #[test]
    fn carries_per_revolution_match_the_notch_count() {
        for id in RotorId::ALL {
            let mut rotor = Rotor::new(id);
            let carries = (0..26).filter(|_| rotor.step()).count();
            assert_eq!(carries, id.spec().notches.len(), "rotor {}", id.name());
        }
    }

    #[test]
    fn carry_fires_exactly_on_the_notch() {
        let mut rotor = Rotor::new(RotorId::I);
        rotor.set_position('P');
        assert!(rotor.step(), "landing on Q must carry");
        assert_eq!(rotor.position(), 'Q');
        assert!(!rotor.step());
    }

    #[test]
    #[should_panic(expected = "alphabet symbol")]
    fn position_rejects_non_alphabet_symbols() {
        Rotor::new(RotorId::II).set_position('7');
    }

    proptest! {
        #[test]
        fn round_trip_holds_at_every_state(
            rotor_index in 0usize..8,
            position in 0u8..26,
            ring in 1u8..=26,
            index in 0u8..26,
        ) {
            let mut rotor = Rotor::new(RotorId::ALL[rotor_index]);
            rotor.set_position(alphabet::symbol_at(position));
            rotor.set_ring_setting(ring);
            prop_assert_eq!(rotor.backward(rotor.forward(index)), index);
            prop_assert_eq!(rotor.forward(rotor.backward(index)), index);
        }
    }
}
