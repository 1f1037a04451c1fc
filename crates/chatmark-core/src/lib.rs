//! Chatmark Core
//!
//! This crate provides core types, the segmenter's scan state machine,
//! and error definitions shared by the chatmark crates.
//!
//! # Overview
//!
//! The core crate contains:
//! - [`ScanState`], [`ScanMode`] - The explicit state machine driven by the block segmenter
//! - [`BlockKind`], [`ListKind`] - Classification enums
//! - [`select_first_wins`] - Greedy overlap resolution shared by inline parsing and highlighting
//! - [`ChatmarkError`] - Error types
//! - [`LineRange`], [`Located`] - Source location types

pub mod enums;
pub mod error;
pub mod overlap;
pub mod state;
pub mod types;

pub use enums::{BlockKind, ListKind};
pub use error::{ChatmarkError, Result};
pub use overlap::{select_first_wins, Ranged};
pub use state::{ScanMode, ScanState};
pub use types::{LineRange, Located};
