//! Source cursors that synthesize their elements
//!
//! - [`Range`]: inclusive arithmetic progression, constructed with
//!   validation or through the panicking [`range!`](crate::range) macro
//! - [`Repeat`]: values pulled from a supplier, bounded or unbounded

mod range;
mod repeat;

pub use range::Range;
pub use repeat::{Repeat, repeat_value};
