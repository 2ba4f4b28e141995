pub mod numeric;
pub mod status;

pub use numeric::Numeric;
pub use status::{BoxError, Error, Fault, Location, RangeError, Result};
