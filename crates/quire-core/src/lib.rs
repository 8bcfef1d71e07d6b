// SPDX-FileCopyrightText: 2026 Quire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Quire plugin system.
//!
//! Holds the types shared by every other crate in the workspace: the error
//! type plugin setup routines return, and the opaque [`Integration`] record
//! plugins hand back to the host framework.

pub mod error;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::QuireError;
pub use types::Integration;
