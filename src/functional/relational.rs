//! Comparisons
//!
//! The binary forms take both operands by reference so they can be passed
//! straight to drivers as `cmp` arguments. The partial forms bind the
//! right-hand operand: `greater_than(5)` tests `x > 5`.

pub fn eq<T: PartialEq + ?Sized>(a: &T, b: &T) -> bool {
    a == b
}

pub fn ne<T: PartialEq + ?Sized>(a: &T, b: &T) -> bool {
    a != b
}

pub fn lt<T: PartialOrd + ?Sized>(a: &T, b: &T) -> bool {
    a < b
}

pub fn le<T: PartialOrd + ?Sized>(a: &T, b: &T) -> bool {
    a <= b
}

pub fn gt<T: PartialOrd + ?Sized>(a: &T, b: &T) -> bool {
    a > b
}

pub fn ge<T: PartialOrd + ?Sized>(a: &T, b: &T) -> bool {
    a >= b
}

pub fn eq_to<T: PartialEq>(rhs: T) -> impl Fn(&T) -> bool {
    move |x| *x == rhs
}

pub fn ne_to<T: PartialEq>(rhs: T) -> impl Fn(&T) -> bool {
    move |x| *x != rhs
}

pub fn less_than<T: PartialOrd>(rhs: T) -> impl Fn(&T) -> bool {
    move |x| *x < rhs
}

pub fn less_equal<T: PartialOrd>(rhs: T) -> impl Fn(&T) -> bool {
    move |x| *x <= rhs
}

pub fn greater_than<T: PartialOrd>(rhs: T) -> impl Fn(&T) -> bool {
    move |x| *x > rhs
}

pub fn greater_equal<T: PartialOrd>(rhs: T) -> impl Fn(&T) -> bool {
    move |x| *x >= rhs
}

/// Negate a predicate
pub fn not<T: ?Sized, P: Fn(&T) -> bool>(pred: P) -> impl Fn(&T) -> bool {
    move |x| !pred(x)
}
