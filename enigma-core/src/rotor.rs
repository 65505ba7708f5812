// File:    rotor.rs
// Author:  apezoo
// Date:    2025-07-17
//
// Description: A single rotor: a fixed wiring read through a rotating offset, with a turnover notch.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use crate::alphabet::{self, LETTERS};
use crate::error::{Error, Result};
use crate::wiring::Wiring;

const RADIUS: u8 = LETTERS as u8;

/// A stepping rotor.
///
/// The wiring never moves; rotation is modelled purely by `offset`, which is
/// added on the way in and subtracted on the way out of every pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
    wiring: Wiring,
    notch: u8,
    offset: u8,
}

impl Rotor {
    /// Builds a rotor from a contact table, a notch position and a start letter.
    ///
    /// # Errors
    ///
    /// * Any [`Wiring::new`] error if `wiring` is not a permutation.
    /// * [`Error::NotchOutOfRange`] if `notch` is not in `0..26`.
    /// * [`Error::InvalidCharacter`] if `start` is not in `a..=z`.
    pub fn new(wiring: &[u8], notch: u8, start: char) -> Result<Self> {
        let wiring = Wiring::new(wiring)?;
        if notch >= RADIUS {
            return Err(Error::NotchOutOfRange { notch });
        }
        let offset = alphabet::setting(start)?;
        Ok(Self {
            wiring,
            notch,
            offset,
        })
    }

    /// Builds a rotor from a wiring written as letters and a notch letter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::WiringLetter`] for a non-letter in `wiring`,
    /// [`Error::InvalidCharacter`] for a bad `notch` or `start`, or any error
    /// [`Rotor::new`] returns.
    pub fn from_letters(wiring: &str, notch: char, start: char) -> Result<Self> {
        let table = alphabet::parse_wiring(wiring)?;
        Self::new(&table, alphabet::setting(notch)?, start)
    }

    /// Passes a signal from the keyboard side towards the reflector.
    ///
    /// # Panics
    ///
    /// Panics if `position` is not a contact in `0..26`.
    #[must_use]
    pub const fn forward_pass(&self, position: u8) -> u8 {
        assert!(position < RADIUS, "contact position out of range");
        let rotated = (position + self.offset) % RADIUS;
        (self.wiring.forward(rotated) + RADIUS - self.offset) % RADIUS
    }

    /// Passes a signal from the reflector side back towards the keyboard.
    ///
    /// This is the inverse of [`Rotor::forward_pass`] at the same offset.
    ///
    /// # Panics
    ///
    /// Panics if `position` is not a contact in `0..26`.
    #[must_use]
    pub const fn reverse_pass(&self, position: u8) -> u8 {
        assert!(position < RADIUS, "contact position out of range");
        let rotated = (position + self.offset) % RADIUS;
        (self.wiring.inverse(rotated) + RADIUS - self.offset) % RADIUS
    }

    /// Turns the rotor by one position.
    pub const fn step(&mut self) {
        self.offset = (self.offset + 1) % RADIUS;
    }

    /// Whether the rotor currently sits at its notch.
    #[must_use]
    pub const fn at_notch(&self) -> bool {
        self.offset == self.notch
    }

    /// Current offset from the zero position.
    #[must_use]
    pub const fn offset(&self) -> u8 {
        self.offset
    }

    /// The notch position.
    #[must_use]
    pub const fn notch(&self) -> u8 {
        self.notch
    }

    /// The letter showing in the machine window.
    #[must_use]
    pub const fn window(&self) -> char {
        alphabet::letter_at(self.offset)
    }
}
