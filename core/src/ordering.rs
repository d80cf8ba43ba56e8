//! Ordering capability for possibly move-only elements.

/// Strict "less than" over borrowed values.
///
/// Comparison only ever borrows, so implementors do not need to be `Clone`.
/// Every `Ord` type gets this for free; other element types implement it
/// themselves:
///
/// ```
/// use marrow_core::Ordered;
///
/// struct Deadline {
///     at_ms: u64,
///     label: String,
/// }
///
/// impl Ordered for Deadline {
///     fn is_less_than(lhs: &Self, rhs: &Self) -> bool {
///         lhs.at_ms < rhs.at_ms
///     }
/// }
///
/// let soon = Deadline { at_ms: 5, label: "soon".into() };
/// let late = Deadline { at_ms: 9, label: "late".into() };
/// assert!(Deadline::is_less_than(&soon, &late));
/// assert_eq!(late.label, "late");
/// ```
pub trait Ordered {
    fn is_less_than(lhs: &Self, rhs: &Self) -> bool;
}

impl<T: Ord + ?Sized> Ordered for T {
    #[inline(always)]
    fn is_less_than(lhs: &Self, rhs: &Self) -> bool {
        lhs < rhs
    }
}

#[cfg(test)]
mod tests {
    use super::Ordered;

    #[test]
    fn natural_ordering() {
        assert!(i64::is_less_than(&-1, &0));
        assert!(!i64::is_less_than(&3, &3));
        assert!(str::is_less_than("apple", "banana"));
    }

    #[test]
    fn custom_ordering_reversed() {
        struct Priority(u8);

        impl Ordered for Priority {
            fn is_less_than(lhs: &Self, rhs: &Self) -> bool {
                lhs.0 > rhs.0
            }
        }

        assert!(Priority::is_less_than(&Priority(9), &Priority(1)));
        assert!(!Priority::is_less_than(&Priority(1), &Priority(9)));
    }
}
