//! Small functions for building predicates, comparators and transforms
//!
//! ```ignore
//! let found = slice::find_if(&v, greater_than(3))?;
//! let doubled = Range::to(4)?.transform_infallible(mul_by(2)).materialize();
//! let pos = slice::adjacent_find(&v, eq)?;
//! ```

mod arithmetic;
mod constant;
mod length;
mod relational;

pub use arithmetic::{
    add, add_by, bit_and, bit_and_by, bit_or, bit_or_by, bit_xor, bit_xor_by, div, div_by, modulo,
    modulo_by, mul, mul_by, shl, shl_by, shr, shr_by, sub, sub_by,
};
pub use constant::{is_false, is_nil, is_true, is_zero, zero};
pub use length::{HasLength, has_length, length_of};
pub use relational::{
    eq, eq_to, ge, greater_equal, greater_than, gt, le, less_equal, less_than, lt, ne, ne_to, not,
};
