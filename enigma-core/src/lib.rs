// File:    lib.rs
// Author:  apezoo
// Date:    2025-07-17
//
// Description: The main library crate for enigma-core, wiring together the alphabet, rotors, reflector and machine.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! # Enigma Core Library
//!
//! This library emulates a three-rotor Enigma-style cipher machine: a chain of
//! rotating substitution wheels, a fixed reflector, and the stepping mechanism
//! (including the double-step anomaly) that turns the rotors between letters.
//!
//! ```
//! use enigma_core::Machine;
//!
//! let mut machine = Machine::from_catalog(["I", "II", "III"], "B", "mck")?;
//! assert_eq!(machine.encode("enigmarevealed")?, "qmjidomzwzsfjr");
//!
//! let mut receiver = Machine::from_catalog(["I", "II", "III"], "B", "mck")?;
//! assert_eq!(receiver.decode("qmjidomzwzsfjr")?, "enigmarevealed");
//! # Ok::<(), enigma_core::Error>(())
//! ```

/// Conversion between letters and contact positions.
pub mod alphabet;
/// Named historical rotor and reflector wirings.
pub mod catalog;
/// The error type shared by every fallible operation.
pub mod error;
/// The three-rotor machine and its stepping mechanism.
pub mod machine;
/// The fixed reflector at the end of the rotor chain.
pub mod reflector;
/// A single stepping rotor.
pub mod rotor;
/// Validated contact permutations.
pub mod wiring;

pub use error::{Error, Result};
pub use machine::Machine;
pub use reflector::Reflector;
pub use rotor::Rotor;
