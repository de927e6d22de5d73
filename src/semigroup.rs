//! Semigroup trait for accumulating violations
//!
//! A Semigroup is a type with an associative binary operation. Schema checks
//! use it to merge the violations of independent checks instead of stopping at
//! the first one.
//!
//! For a valid instance, `combine` must be associative:
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```
//! use framecheck::Semigroup;
//!
//! let first = vec!["missing column a"];
//! let second = vec!["prohibited column b"];
//! assert_eq!(
//!     first.combine(second),
//!     vec!["missing column a", "prohibited column b"]
//! );
//! ```

/// A type that supports an associative binary operation
///
/// `combine` takes `self` by value; clone first if the original is still needed.
pub trait Semigroup: Sized {
    /// Combine this value with another value associatively
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ContractViolation, SchemaError};
    use proptest::prelude::*;

    #[test]
    fn test_vec_semigroup() {
        assert_eq!(vec![1, 2].combine(vec![3]), vec![1, 2, 3]);
    }

    #[test]
    fn test_vec_semigroup_empty() {
        let empty: Vec<i32> = vec![];
        assert_eq!(empty.clone().combine(vec![1]), vec![1]);
        assert_eq!(vec![1].combine(empty), vec![1]);
    }

    #[test]
    fn test_contract_violation_combine_keeps_order() {
        let left = ContractViolation::from_errors(vec![SchemaError::missing_column(
            vec!["a".into()],
            vec![],
        )])
        .unwrap();
        let right = ContractViolation::from_errors(vec![SchemaError::prohibited_column(
            vec!["b".into()],
            vec!["b".into()],
        )])
        .unwrap();

        let merged = left.combine(right);
        assert_eq!(merged.len(), 2);
        assert!(merged.errors()[0].is_missing_column());
        assert!(merged.errors()[1].is_prohibited_column());
    }

    proptest! {
        #[test]
        fn prop_vec_associative(
            a in prop::collection::vec(any::<u8>(), 0..10),
            b in prop::collection::vec(any::<u8>(), 0..10),
            c in prop::collection::vec(any::<u8>(), 0..10),
        ) {
            let left = a.clone().combine(b.clone()).combine(c.clone());
            let right = a.combine(b.combine(c));
            prop_assert_eq!(left, right);
        }
    }
}
