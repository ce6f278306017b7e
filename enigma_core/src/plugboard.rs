//! The plugboard: a user-configurable symmetric pairing permutation.

use std::fmt;

use crate::alphabet;

/// Symmetric pairing swap applied twice per character, on entry and
/// on exit of the rotor stack.
///
/// The mapping is always its own inverse: pairing `a` with `b` makes
/// both lookups resolve to the partner, and unpaired symbols map to
/// themselves. Pairs are never removed, only overwritten.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlugBoard {
    map: [u8; 26],
}

impl Default for PlugBoard {
    fn default() -> Self {
        let mut map = [0u8; 26];
        for (index, slot) in map.iter_mut().enumerate() {
            *slot = index as u8;
        }
        Self { map }
    }
}

impl PlugBoard {
    /// An empty board where every symbol maps to itself.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pairs `a` with `b`. A previous pairing involving either symbol
    /// is overwritten and its stale partner reverts to identity, so
    /// the mapping stays an involution at every step.
    ///
    /// # Panics
    /// When `a` and `b` are equal or not alphabet symbols.
    pub fn plug(&mut self, a: char, b: char) {
        let (Some(a), Some(b)) = (alphabet::index_of(a), alphabet::index_of(b)) else {
            panic!("plug symbols must be alphabet members");
        };
        assert!(a != b, "cannot plug a symbol to itself");
        let old_a = self.map[a as usize];
        let old_b = self.map[b as usize];
        self.map[old_a as usize] = old_a;
        self.map[old_b as usize] = old_b;
        self.map[a as usize] = b;
        self.map[b as usize] = a;
    }

    /// Looks up the partner of `index`; identity when unpaired.
    pub fn apply(&self, index: u8) -> u8 {
        self.map[index as usize]
    }

    /// Active pairs in alphabet order, each reported once.
    pub fn pairs(&self) -> Vec<(char, char)> {
        let mut pairs = Vec::new();
        for index in 0..alphabet::LEN {
            let partner = self.map[index as usize];
            if partner > index {
                pairs.push((alphabet::symbol_at(index), alphabet::symbol_at(partner)));
            }
        }
        pairs
    }
}

impl fmt::Display for PlugBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pairs = self.pairs();
        if pairs.is_empty() {
            return write!(f, "plugboard: (no pairs)");
        }
        write!(f, "plugboard:")?;
        for (a, b) in pairs {
            write!(f, " {a}{b}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index(symbol: char) -> u8 {
        alphabet::index_of(symbol).unwrap()
    }

    #[test]
    fn empty_board_is_identity() {
        let board = PlugBoard::new();
        for i in 0..alphabet::LEN {
            assert_eq!(board.apply(i), i);
        }
        assert!(board.pairs().is_empty());
    }

    #[test]
    fn pairing_is_symmetric() {
        let mut board = PlugBoard::new();
        board.plug('A', 'T');
        assert_eq!(board.apply(index('A')), index('T'));
        assert_eq!(board.apply(index('T')), index('A'));
        assert_eq!(board.apply(index('B')), index('B'));
        assert_eq!(board.pairs(), vec![('A', 'T')]);
    }

    #[test]
    fn replugging_overwrites_and_releases_stale_partners() {
        let mut board = PlugBoard::new();
        board.plug('A', 'B');
        board.plug('A', 'C');
        assert_eq!(board.apply(index('A')), index('C'));
        assert_eq!(board.apply(index('C')), index('A'));
        assert_eq!(board.apply(index('B')), index('B'));
        assert_eq!(board.pairs(), vec![('A', 'C')]);
    }

    #[test]
    fn mapping_stays_an_involution_under_mutation() {
        let mut board = PlugBoard::new();
        for (a, b) in [('A', 'T'), ('E', 'Y'), ('K', 'O'), ('N', 'P'), ('T', 'E')] {
            board.plug(a, b);
            for i in 0..alphabet::LEN {
                assert_eq!(board.apply(board.apply(i)), i);
            }
        }
    }

    #[test]
    #[should_panic(expected = "cannot plug a symbol to itself")]
    fn self_pairing_is_rejected() {
        PlugBoard::new().plug('Q', 'Q');
    }

    #[test]
    #[should_panic(expected = "alphabet members")]
    fn non_alphabet_symbols_are_rejected() {
        PlugBoard::new().plug('a', '!');
    }
}
