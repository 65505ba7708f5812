// File:    alphabet.rs
// Author:  apezoo
// Date:    2025-07-17
//
// Description: The fixed bijection between the lowercase letters a-z and contact positions 0..26.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Every internal value in the machine is a contact position in `0..LETTERS`.
//! Letters only exist at the edges: input text, start positions and the
//! letter form of wiring tables.

use crate::error::{Error, Result};

/// Number of letters, and therefore contacts on every rotor and the reflector.
pub const LETTERS: usize = 26;

const ALPHABET: &[u8; LETTERS] = b"abcdefghijklmnopqrstuvwxyz";

/// Returns the contact position of a lowercase letter, or `None` for anything else.
#[must_use]
pub const fn position_of(letter: char) -> Option<u8> {
    if letter.is_ascii_lowercase() {
        Some(letter as u8 - b'a')
    } else {
        None
    }
}

/// Returns the letter for a contact position.
///
/// # Panics
///
/// Panics if `position` is not in `0..26`.
#[must_use]
pub const fn letter_at(position: u8) -> char {
    assert!((position as usize) < LETTERS, "contact position out of range");
    ALPHABET[position as usize] as char
}

/// Converts a single letter setting (a start position or notch) into a position.
///
/// # Errors
///
/// Returns [`Error::InvalidCharacter`] with index 0 if `letter` is not in `a..=z`.
pub const fn setting(letter: char) -> Result<u8> {
    match position_of(letter) {
        Some(position) => Ok(position),
        None => Err(Error::InvalidCharacter {
            character: letter,
            index: 0,
        }),
    }
}

/// Converts a text into contact positions, rejecting it whole on the first bad character.
///
/// # Errors
///
/// Returns [`Error::InvalidCharacter`] naming the first character outside `a..=z`
/// and its index.
pub fn positions(text: &str) -> Result<Vec<u8>> {
    text.chars()
        .enumerate()
        .map(|(index, character)| {
            position_of(character).ok_or(Error::InvalidCharacter { character, index })
        })
        .collect()
}

/// Parses a wiring written as letters, e.g. `"ekmflgdqvzntowyhxuspaibrcj"`,
/// into contact numbers. The result still needs permutation checks.
///
/// # Errors
///
/// Returns [`Error::WiringLetter`] for any character outside `a..=z`.
pub fn parse_wiring(letters: &str) -> Result<Vec<u8>> {
    letters
        .chars()
        .enumerate()
        .map(|(contact, character)| {
            position_of(character).ok_or(Error::WiringLetter { character, contact })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_is_a_bijection() {
        for position in 0..LETTERS as u8 {
            assert_eq!(position_of(letter_at(position)), Some(position));
        }
        assert_eq!(position_of('a'), Some(0));
        assert_eq!(position_of('z'), Some(25));
    }

    #[test]
    fn test_rejects_characters_outside_lowercase_letters() {
        for character in ['A', 'Z', ' ', '1', '{', '`', 'é'] {
            assert_eq!(position_of(character), None);
        }
    }

    #[test]
    fn test_positions_reports_first_bad_character() {
        assert_eq!(positions("abc").unwrap(), vec![0, 1, 2]);
        assert_eq!(
            positions("héllo wörld"),
            Err(Error::InvalidCharacter {
                character: 'é',
                index: 1
            })
        );
    }

    #[test]
    fn test_parse_wiring() {
        let wiring = parse_wiring("ekmflgdqvzntowyhxuspaibrcj").unwrap();
        assert_eq!(wiring[..4], [4, 10, 12, 5]);
        assert_eq!(
            parse_wiring("ekmf-gdq"),
            Err(Error::WiringLetter {
                character: '-',
                contact: 4
            })
        );
    }

    #[test]
    #[should_panic(expected = "contact position out of range")]
    fn test_letter_at_rejects_out_of_range_position() {
        let _ = letter_at(26);
    }

    #[test]
    fn test_setting() {
        assert_eq!(setting('m'), Ok(12));
        assert!(setting('M').is_err());
    }
}
