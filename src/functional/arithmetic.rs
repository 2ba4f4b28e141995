//! Arithmetic and bitwise operations as functions
//!
//! The `*_by` forms bind the right-hand operand, so `sub_by(1)` computes
//! `x - 1`. Integer division and remainder by zero panic, as the operators
//! do.

use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Rem, Shl, Shr, Sub};

macro_rules! binary_ops {
    ($($(#[$doc:meta])* $name:ident, $by:ident, $trait:ident, $op:tt;)*) => {$(
        $(#[$doc])*
        pub fn $name<T: $trait<Output = T>>(a: T, b: T) -> T {
            a $op b
        }

        pub fn $by<T: $trait<Output = T> + Clone>(rhs: T) -> impl Fn(T) -> T {
            move |x| x $op rhs.clone()
        }
    )*};
}

binary_ops! {
    add, add_by, Add, +;
    sub, sub_by, Sub, -;
    mul, mul_by, Mul, *;
    div, div_by, Div, /;
    /// Remainder, `a % b`
    modulo, modulo_by, Rem, %;
    bit_and, bit_and_by, BitAnd, &;
    bit_or, bit_or_by, BitOr, |;
    bit_xor, bit_xor_by, BitXor, ^;
    shl, shl_by, Shl, <<;
    shr, shr_by, Shr, >>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic() {
        assert_eq!(add(2, 3), 5);
        assert_eq!(sub(2, 3), -1);
        assert_eq!(mul(2, 3), 6);
        assert_eq!(div(7, 2), 3);
        assert_eq!(modulo(7, 2), 1);
        assert_eq!(div(1.0, 4.0), 0.25);
    }

    #[test]
    fn test_bitwise() {
        assert_eq!(bit_and(0b1100, 0b1010), 0b1000);
        assert_eq!(bit_or(0b1100, 0b1010), 0b1110);
        assert_eq!(bit_xor(0b1100, 0b1010), 0b0110);
        assert_eq!(shl(1u32, 4), 16);
        assert_eq!(shr(16u32, 2), 4);
        assert!(!bit_xor(true, true));
    }

    #[test]
    fn test_partials_bind_right_operand() {
        assert_eq!(sub_by(1)(10), 9);
        assert_eq!(div_by(2)(10), 5);
        assert_eq!(modulo_by(3)(10), 1);
        assert_eq!(shl_by(2)(1), 4);
        assert_eq!(mul_by(0.5)(3.0), 1.5);
    }

    #[test]
    #[should_panic]
    fn test_integer_division_by_zero_panics() {
        let zero = std::hint::black_box(0);
        let _ = div(1, zero);
    }
}
