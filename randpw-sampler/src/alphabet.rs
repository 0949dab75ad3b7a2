use std::str::FromStr;

use crate::error::{AlphabetProblem, ValidationError};

/// Ordered list of display characters that passwords are drawn from.
///
/// Each entry is a whole Unicode scalar value, so characters outside the
/// Basic Multilingual Plane (which take two UTF-16 units or four UTF-8 bytes)
/// can never be split when one is picked at random. Repeats are kept: a
/// character listed twice is twice as likely to be drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// Decodes alphabet text into whole characters, in order.
    pub fn decode(text: &str) -> Result<Self, ValidationError> {
        Self::from_symbols(text.chars().collect())
    }

    /// Decodes a UTF-16 buffer, joining surrogate pairs into one character.
    ///
    /// An unpaired surrogate is rejected instead of being passed through as a
    /// half character.
    pub fn from_utf16(units: &[u16]) -> Result<Self, ValidationError> {
        let mut symbols = Vec::with_capacity(units.len());
        let mut position = 0usize;
        for decoded in char::decode_utf16(units.iter().copied()) {
            match decoded {
                Ok(c) => {
                    position += c.len_utf16();
                    symbols.push(c);
                }
                Err(e) => {
                    return Err(ValidationError::InvalidAlphabet {
                        reason: AlphabetProblem::UnpairedSurrogate {
                            unit: e.unpaired_surrogate(),
                            position,
                        },
                    });
                }
            }
        }
        Self::from_symbols(symbols)
    }

    fn from_symbols(symbols: Vec<char>) -> Result<Self, ValidationError> {
        if symbols.is_empty() {
            return Err(ValidationError::InvalidAlphabet { reason: AlphabetProblem::Empty });
        }
        Ok(Self { symbols })
    }

    /// Number of display characters, counting repeats.
    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false; an empty alphabet can not be constructed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<char> {
        self.symbols.get(index).copied()
    }

    #[inline]
    pub fn contains(&self, c: char) -> bool {
        self.symbols.contains(&c)
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Bytes needed to hold `length` characters of this alphabet as UTF-8.
    pub(crate) fn max_utf8_len(&self, length: usize) -> usize {
        let widest = self.symbols.iter().map(|c| c.len_utf8()).max().unwrap_or(1);
        widest * length
    }
}

impl FromStr for Alphabet {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_ascii() {
        let alphabet = Alphabet::decode("AB").unwrap();
        assert_eq!(alphabet.len(), 2);
        assert_eq!(alphabet.symbols(), &['A', 'B']);
    }

    #[test]
    fn test_decode_empty() {
        assert_eq!(
            Alphabet::decode(""),
            Err(ValidationError::InvalidAlphabet { reason: AlphabetProblem::Empty })
        );
        assert!(Alphabet::from_utf16(&[]).is_err());
    }

    #[test]
    fn test_decode_keeps_repeats_in_order() {
        let alphabet = Alphabet::decode("aab").unwrap();
        assert_eq!(alphabet.symbols(), &['a', 'a', 'b']);
    }

    #[test]
    fn test_decode_is_idempotent() {
        let text = "x\u{1D11E}y\u{1F600}z";
        assert_eq!(Alphabet::decode(text).unwrap(), Alphabet::decode(text).unwrap());
    }

    #[test]
    fn test_decode_counts_whole_characters() {
        // U+1D11E MUSICAL SYMBOL G CLEF: 2 UTF-16 units, 4 UTF-8 bytes
        let text = "a\u{1D11E}b";
        assert_eq!(text.encode_utf16().count(), 4);

        let alphabet = Alphabet::decode(text).unwrap();
        assert_eq!(alphabet.len(), 3);
        assert_eq!(alphabet.get(1), Some('\u{1D11E}'));
    }

    #[test]
    fn test_from_utf16_joins_surrogate_pairs() {
        let units: Vec<u16> = "\u{1F600}!".encode_utf16().collect();
        assert_eq!(units.len(), 3);

        let alphabet = Alphabet::from_utf16(&units).unwrap();
        assert_eq!(alphabet.symbols(), &['\u{1F600}', '!']);
        assert_eq!(alphabet, Alphabet::decode("\u{1F600}!").unwrap());
    }

    #[test]
    fn test_from_utf16_rejects_lone_surrogate() {
        // high surrogate of U+1F600 without its low half
        let units = [0x0041, 0xD83D, 0x0042];
        assert_eq!(
            Alphabet::from_utf16(&units),
            Err(ValidationError::InvalidAlphabet {
                reason: AlphabetProblem::UnpairedSurrogate { unit: 0xD83D, position: 1 },
            })
        );

        let trailing = [0xDE00];
        assert!(Alphabet::from_utf16(&trailing).is_err());
    }

    #[test]
    fn test_max_utf8_len() {
        assert_eq!(Alphabet::decode("AB").unwrap().max_utf8_len(10), 10);
        assert_eq!(Alphabet::decode("A\u{1F600}").unwrap().max_utf8_len(10), 40);
    }
}
