// File:    machine.rs
// Author:  apezoo
// Date:    2025-07-17
//
// Description: The three-rotor machine: stepping mechanism and the signal path through rotors and reflector.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use log::{debug, trace};

use crate::alphabet;
use crate::catalog;
use crate::error::{Error, Result};
use crate::reflector::Reflector;
use crate::rotor::Rotor;

/// A three-rotor machine with a fixed reflector.
///
/// Rotors are held leftmost first: index 0 sits next to the reflector, index
/// 2 next to the keyboard. The only state is the three rotor offsets, which
/// advance once per encoded letter and are never reset, so one machine used
/// for two messages continues from where the first one ended.
///
/// `encode` takes `&mut self`; one machine must not be shared between two
/// messages being encoded at the same time, as their key presses would
/// interleave on the same rotors. Build one machine per message stream, or
/// [`Clone`] it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Machine {
    rotors: [Rotor; 3],
    reflector: Reflector,
}

impl Machine {
    /// Assembles a machine from three rotors, leftmost first, and a reflector.
    #[must_use]
    pub fn new(rotors: [Rotor; 3], reflector: Reflector) -> Self {
        let machine = Self { rotors, reflector };
        debug!("Assembled machine at positions '{}'", machine.positions());
        machine
    }

    /// Assembles a machine from catalog names.
    ///
    /// `rotors` and `positions` are both given leftmost first, e.g.
    /// `from_catalog(["I", "II", "III"], "B", "mck")`.
    ///
    /// # Errors
    ///
    /// * [`Error::PositionCount`] if `positions` is not exactly three characters.
    /// * [`Error::UnknownRotor`] or [`Error::UnknownReflector`] for a name not in the catalog.
    /// * [`Error::InvalidCharacter`] if a position is not a lowercase letter.
    pub fn from_catalog(rotors: [&str; 3], reflector: &str, positions: &str) -> Result<Self> {
        let starts: Vec<char> = positions.chars().collect();
        let &[left_start, middle_start, right_start] = starts.as_slice() else {
            return Err(Error::PositionCount {
                actual: starts.len(),
            });
        };
        alphabet::positions(positions)?;
        let [left, middle, right] = rotors;
        Ok(Self::new(
            [
                catalog::rotor(left, left_start)?,
                catalog::rotor(middle, middle_start)?,
                catalog::rotor(right, right_start)?,
            ],
            catalog::reflector(reflector)?,
        ))
    }

    /// Encodes `text`, one key press per letter.
    ///
    /// The whole input is checked before any rotor moves, so a rejected call
    /// leaves the machine exactly as it was. An empty input returns an empty
    /// string and does not move the rotors.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCharacter`] naming the first character outside
    /// `a..=z` and its index.
    pub fn encode(&mut self, text: &str) -> Result<String> {
        let input = alphabet::positions(text)?;
        debug!(
            "Encoding {} letters from positions '{}'",
            input.len(),
            self.positions()
        );

        let output: String = input
            .into_iter()
            .map(|position| {
                self.press_key();
                alphabet::letter_at(self.substitute(position))
            })
            .collect();

        debug!("Finished at positions '{}'", self.positions());
        Ok(output)
    }

    /// Decodes `text`. The machine is reciprocal, so this is [`Machine::encode`].
    ///
    /// # Errors
    ///
    /// Same as [`Machine::encode`].
    pub fn decode(&mut self, text: &str) -> Result<String> {
        self.encode(text)
    }

    /// Current rotor offsets, leftmost first.
    #[must_use]
    pub fn offsets(&self) -> [u8; 3] {
        self.rotors.each_ref().map(Rotor::offset)
    }

    /// Letters showing in the windows, leftmost first.
    #[must_use]
    pub fn positions(&self) -> String {
        self.rotors.iter().map(Rotor::window).collect()
    }

    /// The window positions after each future key press, computed on a copy.
    ///
    /// The sequence is infinite and does not affect this machine; clone the
    /// iterator to replay it from any point.
    #[must_use]
    pub fn upcoming_positions(&self) -> UpcomingPositions {
        UpcomingPositions {
            machine: self.clone(),
        }
    }

    /// Moves the rotors for one key press.
    ///
    /// The right rotor always turns. A rotor carries into its left neighbour
    /// when its own turn brings it onto its notch. A rotor that is already at
    /// its notch when the key goes down turns again, which is the double step.
    fn press_key(&mut self) {
        let [left, middle, right] = &mut self.rotors;
        let left_at_notch = left.at_notch();
        let middle_at_notch = middle.at_notch();

        right.step();
        let middle_turns = right.at_notch() || middle_at_notch;
        let mut left_turns = left_at_notch;
        if middle_turns {
            middle.step();
            left_turns |= middle.at_notch();
        }
        if left_turns {
            left.step();
        }

        if middle_turns {
            trace!(
                "Turnover to '{}{}{}' (double step: {})",
                left.window(),
                middle.window(),
                right.window(),
                middle_at_notch
            );
        }
    }

    /// Sends one contact through the rotors, the reflector and back.
    fn substitute(&self, position: u8) -> u8 {
        let inward = self
            .rotors
            .iter()
            .rev()
            .fold(position, |signal, rotor| rotor.forward_pass(signal));
        let reflected = self.reflector.reflect(inward);
        self.rotors
            .iter()
            .fold(reflected, |signal, rotor| rotor.reverse_pass(signal))
    }
}

/// Iterator returned by [`Machine::upcoming_positions`].
#[derive(Debug, Clone)]
pub struct UpcomingPositions {
    machine: Machine,
}

impl Iterator for UpcomingPositions {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.machine.press_key();
        Some(self.machine.positions())
    }
}
