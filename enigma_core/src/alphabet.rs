//! The fixed 26-symbol alphabet and its index arithmetic.

/// Number of symbols on the machine.
pub const LEN: u8 = 26;

/// Returns the alphabet index of `symbol`, or `None` for anything
/// outside `A..=Z`.
pub fn index_of(symbol: char) -> Option<u8> {
    if symbol.is_ascii_uppercase() {
        Some(symbol as u8 - b'A')
    } else {
        None
    }
}

/// Returns the symbol at `index`.
///
/// # Panics
/// When `index` is outside `0..26`.
pub fn symbol_at(index: u8) -> char {
    assert!(index < LEN, "alphabet index out of range: {index}");
    (b'A' + index) as char
}

/// Whether `symbol` is a member of the alphabet.
pub fn contains(symbol: char) -> bool {
    index_of(symbol).is_some()
}

/// Adds `offset` to `index`, wrapping around the alphabet.
pub(crate) fn wrap_add(index: u8, offset: u8) -> u8 {
    (index + offset) % LEN
}

/// Subtracts `offset` from `index`, wrapping around the alphabet.
pub(crate) fn wrap_sub(index: u8, offset: u8) -> u8 {
    (index + LEN - offset) % LEN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_and_indices_round_trip() {
        for index in 0..LEN {
            let symbol = symbol_at(index);
            assert_eq!(index_of(symbol), Some(index));
        }
    }

    #[test]
    fn non_members_have_no_index() {
        for symbol in ['a', 'z', '3', '.', ' ', 'Ä'] {
            assert_eq!(index_of(symbol), None);
            assert!(!contains(symbol));
        }
    }

    #[test]
    fn wrapping_arithmetic_stays_in_range() {
        assert_eq!(wrap_add(25, 1), 0);
        assert_eq!(wrap_sub(0, 1), 25);
        for index in 0..LEN {
            for offset in 0..LEN {
                assert_eq!(wrap_sub(wrap_add(index, offset), offset), index);
            }
        }
    }
}
