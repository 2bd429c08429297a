//! Helper functions for presenting content
//!
//! Date parsing/formatting and the list ordering every post listing uses.

mod date;
mod list;

pub use date::*;
pub use list::*;
