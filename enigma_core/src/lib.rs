//! Emulator for an electromechanical rotor cipher machine.
//!
//! A fixed 26-symbol alphabet is transformed character by character
//! through a reconfigurable signal path: plugboard, a stack of 3 or 5
//! rotating substitution rotors, and a fixed reflector. The plugboard
//! and reflector are involutions and every rotor pass is undone on the
//! return path, so two machines sharing the same configuration and
//! starting positions decrypt each other's output.

pub mod alphabet;
pub mod catalog;
pub mod machine;
pub mod plugboard;
pub mod reflector;
pub mod rotor;

pub use crate::catalog::{ReflectorId, RotorId};
pub use crate::machine::{Enigma, MachineError, DEFAULT_SPACE_SYMBOL};
pub use crate::plugboard::PlugBoard;
pub use crate::reflector::Reflector;
pub use crate::rotor::Rotor;
