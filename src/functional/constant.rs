//! Nullary constants and unary tests against them

/// The type's zero value, `T::default()`
pub fn zero<T: Default>() -> T {
    T::default()
}

pub fn is_true(v: &bool) -> bool {
    *v
}

pub fn is_false(v: &bool) -> bool {
    !*v
}

/// Whether an optional value is absent
pub fn is_nil<T>(v: &Option<T>) -> bool {
    v.is_none()
}

pub fn is_zero<T: Default + PartialEq>(v: &T) -> bool {
    *v == T::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        assert_eq!(zero::<i64>(), 0);
        assert_eq!(zero::<f32>(), 0.0);
        assert_eq!(zero::<String>(), "");
    }

    #[test]
    fn test_predicates() {
        assert!(is_true(&true));
        assert!(!is_true(&false));
        assert!(is_false(&false));
        assert!(is_nil::<u8>(&None));
        assert!(!is_nil(&Some(0)));
        assert!(is_zero(&0u32));
        assert!(!is_zero(&-1));
        assert!(is_zero(&String::new()));
    }
}
