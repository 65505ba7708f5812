// File:    reflector.rs
// Author:  apezoo
// Date:    2025-07-17
//
// Description: The fixed reflector that pairs contacts and sends the signal back through the rotors.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use crate::alphabet;
use crate::error::{Error, Result};
use crate::wiring::Wiring;

/// A non-rotating reflector.
///
/// Its wiring pairs contacts: `reflect(reflect(p)) == p` and `reflect(p) != p`
/// for every contact. The second property is why the machine never encodes a
/// letter to itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reflector {
    wiring: Wiring,
}

impl Reflector {
    /// Validates `table` as a fixed-point-free involution.
    ///
    /// # Errors
    ///
    /// * Any [`Wiring::new`] error if `table` is not a permutation.
    /// * [`Error::FixedPoint`] if a contact is wired to itself.
    /// * [`Error::NotInvolution`] if a pair is not symmetric.
    pub fn new(table: &[u8]) -> Result<Self> {
        let wiring = Wiring::new(table)?;
        for (contact, &target) in table.iter().enumerate() {
            if usize::from(target) == contact {
                return Err(Error::FixedPoint { contact });
            }
            let back = wiring.forward(target);
            if usize::from(back) != contact {
                return Err(Error::NotInvolution {
                    contact,
                    target,
                    back,
                });
            }
        }
        Ok(Self { wiring })
    }

    /// Builds a reflector from a wiring written as letters.
    ///
    /// # Errors
    ///
    /// Returns [`Error::WiringLetter`] for a non-letter, or any error
    /// [`Reflector::new`] returns.
    pub fn from_letters(wiring: &str) -> Result<Self> {
        Self::new(&alphabet::parse_wiring(wiring)?)
    }

    /// Reflects a signal. No offset is involved; the reflector never turns.
    #[must_use]
    pub const fn reflect(&self, position: u8) -> u8 {
        self.wiring.forward(position)
    }
}
