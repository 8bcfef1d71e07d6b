// SPDX-FileCopyrightText: 2026 Quire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Quire plugin tests.
//!
//! Provides scripted plugins, a capturing logger and a harness for fast,
//! deterministic pipeline tests.
//!
//! # Components
//!
//! - [`ScriptedPlugin`] - Plugin replaying a fixed list of steps
//! - [`SpyPlugin`] - Plugin counting how often its setup ran
//! - [`CaptureLogger`] - Logger recording every message with its label
//! - [`TestHarness`] - Runner wired with the site schema and a capture logger

pub mod capture_logger;
pub mod harness;
pub mod mock_plugin;

pub use capture_logger::{CaptureLogger, LogRecord};
pub use harness::{raw_config, TestHarness};
pub use mock_plugin::{Journal, ScriptedPlugin, SpyPlugin, Step};
