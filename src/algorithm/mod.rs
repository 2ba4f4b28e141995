//! Algorithm drivers
//!
//! Three surfaces share one set of driver bodies:
//!
//! - [`slice`]: ordered sequences, locations are indices
//! - [`map`]: keyed collections, locations are keys
//! - [`iter`]: any cursor, locations are the cursor's ordinals
//!
//! Every driver separates an input with no elements ([`Error::EmptyInput`])
//! from one that was scanned without success ([`Error::ElementNotFound`])
//! and stops at the first error.
//!
//! [`Error::EmptyInput`]: crate::util::Error::EmptyInput
//! [`Error::ElementNotFound`]: crate::util::Error::ElementNotFound

mod cursor;
pub mod iter;
pub mod map;
pub mod slice;

pub use iter::{materialize, try_materialize};
