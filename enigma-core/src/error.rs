// File:    error.rs
// Author:  apezoo
// Date:    2025-07-17
//
// Description: Error type for machine construction and encoding.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use thiserror::Error;

/// Errors produced while building or driving a machine.
///
/// Wiring, notch and catalog errors are only raised at construction time;
/// `InvalidCharacter` is the only error `encode` can return.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A wiring table does not have one entry per letter.
    #[error("wiring must have 26 contacts, got {actual}")]
    WiringLength {
        /// Number of entries supplied.
        actual: usize,
    },
    /// A wiring entry points outside the alphabet.
    #[error("contact {contact} is wired to {value}, which is outside 0..26")]
    ContactOutOfRange {
        /// Input contact holding the bad entry.
        contact: usize,
        /// The offending entry.
        value: u8,
    },
    /// Two contacts are wired to the same output, so the table is not a permutation.
    #[error("contacts {first} and {second} are both wired to {value}")]
    DuplicateContact {
        /// The output contact used twice.
        value: u8,
        /// First input contact wired to `value`.
        first: usize,
        /// Second input contact wired to `value`.
        second: usize,
    },
    /// A reflector pair is not symmetric.
    #[error("reflector wires {contact} to {target} but {target} back to {back}")]
    NotInvolution {
        /// Contact whose pair is broken.
        contact: usize,
        /// Where `contact` is reflected to.
        target: u8,
        /// Where `target` is reflected to.
        back: u8,
    },
    /// A reflector contact is wired to itself.
    #[error("reflector wires contact {contact} to itself")]
    FixedPoint {
        /// The self-wired contact.
        contact: usize,
    },
    /// A notch lies outside the alphabet.
    #[error("notch {notch} is outside 0..26")]
    NotchOutOfRange {
        /// The offending notch.
        notch: u8,
    },
    /// A character outside `a..=z` was supplied.
    #[error("invalid character {character:?} at index {index}, expected a lowercase letter a-z")]
    InvalidCharacter {
        /// The rejected character.
        character: char,
        /// Index of the character in its input, counted in characters.
        index: usize,
    },
    /// A wiring written as letters contains a character outside `a..=z`.
    #[error("invalid wiring letter {character:?} for contact {contact}")]
    WiringLetter {
        /// The rejected character.
        character: char,
        /// Contact the character was meant to wire.
        contact: usize,
    },
    /// The start position string does not name one letter per rotor.
    #[error("expected 3 rotor positions, got {actual}")]
    PositionCount {
        /// Number of positions supplied.
        actual: usize,
    },
    /// No rotor with this name exists in the catalog.
    #[error("unknown rotor '{name}'")]
    UnknownRotor {
        /// The requested name.
        name: String,
    },
    /// No reflector with this name exists in the catalog.
    #[error("unknown reflector '{name}'")]
    UnknownReflector {
        /// The requested name.
        name: String,
    },
}

/// Shorthand for results carrying an [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
