//! Testing utilities for schema checks
//!
//! Assertion macros for validator results, plus (behind the `proptest`
//! feature) `Arbitrary` implementations and strategies for schema types.
//!
//! # Examples
//!
//! ```rust
//! use framecheck::{assert_schema_ok, assert_schema_violation};
//! use framecheck::{validate_presence_of_columns, DataType, Field, Schema, SchemaErrorKind};
//!
//! let schema = Schema::new(vec![Field::nullable("a", DataType::String)]);
//!
//! assert_schema_ok!(validate_presence_of_columns(&schema, &["a"]));
//! assert_schema_violation!(
//!     validate_presence_of_columns(&schema, &["a", "z"]),
//!     SchemaErrorKind::MissingColumn,
//!     ["z"]
//! );
//! ```

/// Assert that a schema check passed.
///
/// Accepts a `Result<(), E>` and panics with the error's `Display` output if
/// it is `Err`.
#[macro_export]
macro_rules! assert_schema_ok {
    ($result:expr) => {
        match $result {
            ::std::result::Result::Ok(()) => {}
            ::std::result::Result::Err(e) => {
                panic!("Expected schema check to pass, got: {}", e);
            }
        }
    };
}

/// Assert that a schema check failed with a given kind and offending names.
///
/// The offending names are compared in order, so this also checks that the
/// validator preserved requirement order.
#[macro_export]
macro_rules! assert_schema_violation {
    ($result:expr, $kind:expr, [$($name:expr),* $(,)?]) => {
        match $result {
            ::std::result::Result::Err(e) => {
                let err: $crate::SchemaError = e;
                assert_eq!(err.kind(), $kind, "unexpected violation kind: {}", err);
                let expected: ::std::vec::Vec<&str> = vec![$($name),*];
                assert_eq!(err.offending_names(), expected);
            }
            ::std::result::Result::Ok(()) => {
                panic!("Expected {} violation, got Ok", $kind);
            }
        }
    };
}

#[cfg(feature = "proptest")]
pub use self::strategies::{column_name, schema};

#[cfg(feature = "proptest")]
mod strategies {
    use proptest::prelude::*;

    use crate::schema::{DataType, Field, Schema};

    /// Lower-case identifier-like column names.
    pub fn column_name() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9_]{0,7}"
    }

    /// Schemas with up to `max_fields` fields.
    pub fn schema(max_fields: usize) -> impl Strategy<Value = Schema> {
        prop::collection::vec(any::<Field>(), 0..=max_fields).prop_map(Schema::new)
    }

    fn primitive() -> impl Strategy<Value = DataType> {
        prop_oneof![
            4 => prop::sample::select(vec![
                DataType::Null,
                DataType::Boolean,
                DataType::Byte,
                DataType::Short,
                DataType::Integer,
                DataType::Long,
                DataType::Float,
                DataType::Double,
                DataType::String,
                DataType::Binary,
                DataType::Date,
                DataType::Timestamp,
            ]),
            1 => (1u8..=38)
                .prop_flat_map(|p| (Just(p), 0..=p))
                .prop_map(|(p, s)| DataType::decimal(p, s)),
        ]
    }

    impl Arbitrary for DataType {
        type Parameters = ();
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
            primitive()
                .prop_recursive(3, 16, 4, |inner| {
                    prop_oneof![
                        (inner.clone(), any::<bool>())
                            .prop_map(|(element, nulls)| DataType::array(element, nulls)),
                        (inner.clone(), inner.clone(), any::<bool>())
                            .prop_map(|(k, v, nulls)| DataType::map(k, v, nulls)),
                        prop::collection::vec(
                            (column_name(), inner, any::<bool>())
                                .prop_map(|(name, t, nullable)| Field::new(name, t, nullable)),
                            0..4
                        )
                        .prop_map(DataType::Struct),
                    ]
                })
                .boxed()
        }
    }

    impl Arbitrary for Field {
        type Parameters = ();
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
            (column_name(), any::<DataType>(), any::<bool>())
                .prop_map(|(name, data_type, nullable)| Field::new(name, data_type, nullable))
                .boxed()
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::SchemaErrorKind;
    use crate::schema::{DataType, Field, Schema};
    use crate::validator::{validate_absence_of_columns, validate_presence_of_fields};

    fn schema() -> Schema {
        Schema::new(vec![
            Field::required("a", DataType::Integer),
            Field::nullable("b", DataType::String),
        ])
    }

    #[test]
    fn assert_schema_ok_macro() {
        assert_schema_ok!(validate_absence_of_columns(&schema(), &["z"]));
    }

    #[test]
    fn assert_schema_violation_macro() {
        assert_schema_violation!(
            validate_presence_of_fields(&schema(), &[Field::required("b", DataType::String)]),
            SchemaErrorKind::MissingStructField,
            ["b"]
        );
    }

    #[test]
    #[should_panic(expected = "Expected schema check to pass")]
    fn assert_schema_ok_panics_on_violation() {
        assert_schema_ok!(validate_absence_of_columns(&schema(), &["a"]));
    }

    #[test]
    #[should_panic(expected = "Expected prohibited column violation, got Ok")]
    fn assert_schema_violation_panics_on_ok() {
        assert_schema_violation!(
            validate_absence_of_columns(&schema(), &["z"]),
            SchemaErrorKind::ProhibitedColumn,
            ["z"]
        );
    }

    #[test]
    #[should_panic(expected = "unexpected violation kind")]
    fn assert_schema_violation_panics_on_wrong_kind() {
        assert_schema_violation!(
            validate_absence_of_columns(&schema(), &["a"]),
            SchemaErrorKind::MissingColumn,
            ["a"]
        );
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use super::super::*;
        use crate::schema::{DataType, Field};
        use crate::validator::validate_presence_of_fields;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn generated_schema_contains_its_own_fields(s in schema(6)) {
                prop_assert!(validate_presence_of_fields(&s, s.fields()).is_ok());
            }

            #[test]
            fn generated_names_are_lowercase(name in column_name()) {
                prop_assert!(name.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'));
            }

            #[test]
            fn generated_types_render(t in any::<DataType>()) {
                prop_assert!(!t.to_string().is_empty());
            }

            #[test]
            fn generated_fields_equal_their_clones(f in any::<Field>()) {
                prop_assert_eq!(f.clone(), f);
            }
        }
    }
}
