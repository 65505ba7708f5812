// File:    wiring.rs
// Author:  apezoo
// Date:    2025-07-17
//
// Description: Validated permutations of the 26 contacts, shared by rotors and the reflector.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use crate::alphabet::LETTERS;
use crate::error::{Error, Result};

/// A permutation of the contacts `0..26` together with its inverse.
///
/// A `Wiring` can only be obtained through [`Wiring::new`], so holding one
/// means the table is a bijection. It is never modified after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wiring {
    forward: [u8; LETTERS],
    inverse: [u8; LETTERS],
}

impl Wiring {
    /// Validates `table` as a permutation and builds its inverse.
    ///
    /// # Errors
    ///
    /// * [`Error::WiringLength`] if `table` does not have 26 entries.
    /// * [`Error::ContactOutOfRange`] if an entry is not in `0..26`.
    /// * [`Error::DuplicateContact`] if two contacts share an output.
    pub fn new(table: &[u8]) -> Result<Self> {
        if table.len() != LETTERS {
            return Err(Error::WiringLength {
                actual: table.len(),
            });
        }

        let mut forward = [0; LETTERS];
        let mut seen: [Option<usize>; LETTERS] = [None; LETTERS];
        let mut inverse = [0; LETTERS];
        for (contact, &value) in (0u8..).zip(table) {
            let index = usize::from(contact);
            let slot = seen
                .get_mut(usize::from(value))
                .ok_or(Error::ContactOutOfRange {
                    contact: index,
                    value,
                })?;
            if let Some(first) = *slot {
                return Err(Error::DuplicateContact {
                    value,
                    first,
                    second: index,
                });
            }
            *slot = Some(index);
            forward[index] = value;
            inverse[usize::from(value)] = contact;
        }

        Ok(Self { forward, inverse })
    }

    /// Output contact for `contact` entering from the input side.
    #[must_use]
    pub const fn forward(&self, contact: u8) -> u8 {
        self.forward[contact as usize]
    }

    /// Input contact that is wired to `contact` on the output side.
    #[must_use]
    pub const fn inverse(&self, contact: u8) -> u8 {
        self.inverse[contact as usize]
    }
}
