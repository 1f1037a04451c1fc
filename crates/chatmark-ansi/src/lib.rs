//! Chatmark ANSI
//!
//! ANSI escape code helpers for chatmark's terminal output.
//!
//! # Overview
//!
//! - [`codes`] - Escape code constants and 24-bit color builders
//! - [`style`] - On/off pairs for toggleable formatting
//! - [`color`] - Hex color parsing
//! - [`utils`] - Visible width of styled text, padding
//! - [`sanitize`] - Stripping control characters from untrusted text
//!
//! # Example
//!
//! ```
//! use chatmark_ansi::{style, utils};
//!
//! let text = style::BOLD.wrap("bold text");
//! assert_eq!(utils::visible_length(&text), 9);
//! ```

pub mod codes;
pub mod color;
pub mod sanitize;
pub mod style;
pub mod utils;

pub use codes::*;
pub use color::*;
pub use sanitize::*;
pub use style::*;
pub use utils::*;
