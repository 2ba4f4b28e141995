//! STL-style algorithms over positional cursors, with lazy cursor adapters
//!
//! ```ignore
//! use cursorkit::prelude::*;
//!
//! let picked = range!(1, 20)
//!     .take_if(|x| x % 3 == 0)
//!     .drop_n(1)
//!     .take_n(3)
//!     .materialize();
//! assert_eq!(picked, vec![6, 9, 12]);
//!
//! let v = vec![1, 2, 2, 3];
//! assert_eq!(slice::adjacent_find(&v, eq)?, 1);
//! ```

pub mod adapter;
pub mod algorithm;
pub mod functional;
pub mod generator;
pub mod iterator;
pub mod util;

pub use algorithm::{iter, map, slice};
pub use generator::{Range, Repeat, repeat_value};
pub use iterator::{
    Entries, Forward, ForwardExt, Indexed, Keyed, MapIterator, Position, Readable, SliceIterator,
    StdIterator, Values,
};
pub use util::{BoxError, Error, Fault, Location, RangeError, Result};

/// Traits and constructors most callers want in scope
pub mod prelude {
    pub use crate::{
        Error, Location, Range, Repeat,
        algorithm::{iter, map, slice},
        functional::*,
        iterator::{Forward, ForwardExt, Indexed, Keyed, MapIterator, Readable, SliceIterator, StdIterator},
        range, repeat_value,
    };
}
