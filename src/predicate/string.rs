//! String predicates

use super::combinators::Predicate;

/// Predicate that checks if a string is not empty.
#[derive(Clone, Copy, Default, Debug)]
pub struct NotEmpty;

impl Predicate<str> for NotEmpty {
    #[inline]
    fn check(&self, value: &str) -> bool {
        !value.is_empty()
    }
}

impl Predicate<String> for NotEmpty {
    #[inline]
    fn check(&self, value: &String) -> bool {
        !value.is_empty()
    }
}

/// Create a predicate that checks if a string is not empty.
pub fn not_empty() -> NotEmpty {
    NotEmpty
}

/// Predicate that checks string length (in bytes) is in range.
#[derive(Clone, Copy, Debug)]
pub struct LenBetween {
    min: usize,
    max: usize,
}

impl LenBetween {
    #[inline]
    fn accepts(&self, len: usize) -> bool {
        len >= self.min && len <= self.max
    }
}

impl Predicate<str> for LenBetween {
    #[inline]
    fn check(&self, value: &str) -> bool {
        self.accepts(value.len())
    }
}

impl Predicate<String> for LenBetween {
    #[inline]
    fn check(&self, value: &String) -> bool {
        self.accepts(value.len())
    }
}

/// Create a predicate that checks string length is between min and max (inclusive).
pub fn len_between(min: usize, max: usize) -> LenBetween {
    LenBetween { min, max }
}

/// Create a predicate that checks string length is at least `min`.
///
/// # Example
///
/// ```rust
/// use cohort::predicate::*;
///
/// assert!(len_min(2).check("ab"));
/// assert!(!len_min(2).check("a"));
/// ```
pub fn len_min(min: usize) -> LenBetween {
    LenBetween {
        min,
        max: usize::MAX,
    }
}

/// Create a predicate that checks string length is at most `max`.
pub fn len_max(max: usize) -> LenBetween {
    LenBetween { min: 0, max }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_empty() {
        assert!(not_empty().check("x"));
        assert!(!not_empty().check(""));
        assert!(not_empty().check(&String::from("x")));
    }

    #[test]
    fn test_len_bounds() {
        assert!(len_between(1, 3).check("abc"));
        assert!(!len_between(1, 3).check("abcd"));
        assert!(len_max(2).check(""));
        assert!(!len_min(1).check(&String::new()));
    }
}
