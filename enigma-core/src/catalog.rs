// File:    catalog.rs
// Author:  apezoo
// Date:    2025-07-17
//
// Description: Named historical rotor and reflector wirings.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! The catalog only supplies data. Every machine is still assembled from
//! explicit wirings, notches and start positions; this module just saves the
//! caller from typing the well-known tables.

use crate::error::{Error, Result};
use crate::reflector::Reflector;
use crate::rotor::Rotor;

/// A rotor wiring known by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotorSpec {
    /// Catalog name, e.g. `"III"`.
    pub name: &'static str,
    /// Wiring as letters; contact `i` is wired to the `i`-th letter.
    pub wiring: &'static str,
    /// Window letter at which this rotor carries into its left neighbour.
    pub notch: char,
}

/// A reflector wiring known by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReflectorSpec {
    /// Catalog name, e.g. `"B"`.
    pub name: &'static str,
    /// Wiring as letters.
    pub wiring: &'static str,
}

/// Rotors I to V.
pub const ROTORS: [RotorSpec; 5] = [
    RotorSpec {
        name: "I",
        wiring: "ekmflgdqvzntowyhxuspaibrcj",
        notch: 'q',
    },
    RotorSpec {
        name: "II",
        wiring: "ajdksiruxblhwtmcqgznpyfvoe",
        notch: 'e',
    },
    RotorSpec {
        name: "III",
        wiring: "bdfhjlcprtxvznyeiwgakmusqo",
        notch: 'v',
    },
    RotorSpec {
        name: "IV",
        wiring: "esovpzjayquirhxlnftgkdcmwb",
        notch: 'j',
    },
    RotorSpec {
        name: "V",
        wiring: "vzbrgityupsdnhlxawmjqofeck",
        notch: 'z',
    },
];

/// Reflectors B and C.
pub const REFLECTORS: [ReflectorSpec; 2] = [
    ReflectorSpec {
        name: "B",
        wiring: "yruhqsldpxngokmiebfzcwvjat",
    },
    ReflectorSpec {
        name: "C",
        wiring: "fvpjiaoyedrzxwgctkuqsbnmhl",
    },
];

/// Looks up a rotor by name (case-insensitive) and sets it to `start`.
///
/// # Errors
///
/// Returns [`Error::UnknownRotor`] if the name is not in [`ROTORS`], or
/// [`Error::InvalidCharacter`] if `start` is not a lowercase letter.
pub fn rotor(name: &str, start: char) -> Result<Rotor> {
    let spec = ROTORS
        .iter()
        .find(|spec| spec.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| Error::UnknownRotor {
            name: name.to_string(),
        })?;
    Rotor::from_letters(spec.wiring, spec.notch, start)
}

/// Looks up a reflector by name (case-insensitive).
///
/// # Errors
///
/// Returns [`Error::UnknownReflector`] if the name is not in [`REFLECTORS`].
pub fn reflector(name: &str) -> Result<Reflector> {
    let spec = REFLECTORS
        .iter()
        .find(|spec| spec.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| Error::UnknownReflector {
            name: name.to_string(),
        })?;
    Reflector::from_letters(spec.wiring)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_catalog_entry_is_valid() {
        for spec in ROTORS {
            assert!(rotor(spec.name, 'a').is_ok(), "rotor {}", spec.name);
        }
        for spec in REFLECTORS {
            assert!(reflector(spec.name).is_ok(), "reflector {}", spec.name);
        }
    }

    #[test]
    fn test_lookup_ignores_case() {
        assert_eq!(rotor("iii", 'k').unwrap(), rotor("III", 'k').unwrap());
        assert_eq!(reflector("b").unwrap(), reflector("B").unwrap());
    }

    #[test]
    fn test_catalog_notches() {
        let notches: Vec<u8> = ["I", "II", "III"]
            .iter()
            .map(|name| rotor(name, 'a').unwrap().notch())
            .collect();
        assert_eq!(notches, vec![16, 4, 21]);
    }

    #[test]
    fn test_unknown_names() {
        assert_eq!(
            rotor("VI", 'a'),
            Err(Error::UnknownRotor {
                name: "VI".to_string()
            })
        );
        assert_eq!(
            reflector("A"),
            Err(Error::UnknownReflector {
                name: "A".to_string()
            })
        );
    }
}
