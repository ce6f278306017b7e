//! The assembled machine: plugboard, rotor stack, reflector, and the
//! per-keypress signal path.

use std::fmt;

use log::{debug, trace};
use thiserror::Error;

use crate::alphabet;
use crate::catalog::{ReflectorId, RotorId};
use crate::plugboard::PlugBoard;
use crate::reflector::Reflector;
use crate::rotor::Rotor;

/// Symbol substituted for spaces during message normalization.
pub const DEFAULT_SPACE_SYMBOL: char = 'X';

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MachineError {
    /// The rotor stack was not exactly 3 or 5 rotors. Supplying a 4th
    /// rotor without a 5th lands here.
    #[error("rotor stack must hold exactly 3 or 5 rotors, got {count}")]
    InvalidRotorCount { count: usize },
}

/// A complete machine.
///
/// Index 0 of the rotor stack is the rightmost (fastest) rotor: the
/// first one a signal enters and the only one guaranteed to step on
/// every keypress. The reflector is fixed at construction and never
/// exposed for mutation; the plugboard and the rotors' positions and
/// ring settings remain operator-adjustable.
pub struct Enigma {
    plugboard: PlugBoard,
    rotors: Vec<Rotor>,
    reflector: Reflector,
    space_symbol: char,
}

impl Enigma {
    /// Assembles a machine from 3 or 5 rotor choices with the default
    /// reflector. Rotors start at position `A`, ring setting 1.
    pub fn new(rotors: &[RotorId]) -> Result<Self, MachineError> {
        if rotors.len() != 3 && rotors.len() != 5 {
            return Err(MachineError::InvalidRotorCount {
                count: rotors.len(),
            });
        }
        Ok(Self {
            plugboard: PlugBoard::new(),
            rotors: rotors.iter().map(|&id| Rotor::new(id)).collect(),
            reflector: Reflector::default(),
            space_symbol: DEFAULT_SPACE_SYMBOL,
        })
    }

    /// Replaces the default reflector; construction-time only.
    pub fn with_reflector(mut self, id: ReflectorId) -> Self {
        self.reflector = Reflector::new(id);
        self
    }

    /// Replaces the default space-encoding symbol.
    pub fn with_space_symbol(mut self, symbol: char) -> Self {
        self.space_symbol = symbol;
        self
    }

    pub fn plugboard(&self) -> &PlugBoard {
        &self.plugboard
    }

    pub fn plugboard_mut(&mut self) -> &mut PlugBoard {
        &mut self.plugboard
    }

    pub fn rotors(&self) -> &[Rotor] {
        &self.rotors
    }

    pub fn rotors_mut(&mut self) -> &mut [Rotor] {
        &mut self.rotors
    }

    pub fn reflector_id(&self) -> ReflectorId {
        self.reflector.id()
    }

    pub fn space_symbol(&self) -> char {
        self.space_symbol
    }

    /// Emulates one keypress.
    ///
    /// Non-alphabet input passes through unchanged and does not move
    /// the rotors. Alphabet input runs plugboard, rotors forward,
    /// reflector, rotors backward, plugboard, and then advances the
    /// stack.
    pub fn process_char(&mut self, input: char) -> char {
        let Some(mut signal) = alphabet::index_of(input) else {
            return input;
        };
        signal = self.plugboard.apply(signal);
        for rotor in &self.rotors {
            signal = rotor.forward(signal);
        }
        signal = self.reflector.reflect(signal);
        for rotor in self.rotors.iter().rev() {
            signal = rotor.backward(signal);
        }
        signal = self.plugboard.apply(signal);
        self.advance_rotors();
        let output = alphabet::symbol_at(signal);
        trace!("keypress {input} -> {output}");
        output
    }

    /// Encrypts or decrypts a whole message.
    ///
    /// The input is upper-cased and spaces are replaced with the
    /// space symbol before processing; anything still outside the
    /// alphabet passes through per [`Enigma::process_char`].
    pub fn process_message(&mut self, message: &str) -> String {
        let space = self.space_symbol;
        let output: String = message
            .chars()
            .map(|c| c.to_ascii_uppercase())
            .map(|c| if c == ' ' { space } else { c })
            .map(|c| self.process_char(c))
            .collect();
        debug!(
            "processed {} symbols, rotors now at {}",
            output.chars().count(),
            self.rotors
                .iter()
                .map(Rotor::position)
                .collect::<String>()
        );
        output
    }

    // Carry chain: rotor 0 always steps; each carry ripples left and
    // the chain stops at the first rotor that reports none.
    fn advance_rotors(&mut self) {
        for rotor in &mut self.rotors {
            if !rotor.step() {
                break;
            }
        }
    }
}

impl fmt::Display for Enigma {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "enigma machine:")?;
        writeln!(f, "  {}", self.plugboard)?;
        for rotor in &self.rotors {
            writeln!(f, "  {rotor}")?;
        }
        write!(f, "  {}", self.reflector)
    }
}
