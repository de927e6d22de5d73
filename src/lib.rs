//! # Framecheck
//!
//! > *"Check the frame before you fill it"*
//!
//! Schema contracts for tabular datasets.
//!
//! ## Philosophy
//!
//! Validation is a **pure core**: every check is a function of a dataset's
//! schema and a requirement list, with no state and no I/O. Whatever reads or
//! writes the data is the **imperative shell**; it calls these checks before
//! doing any work and decides what to do when one fails.
//!
//! Three checks are provided:
//!
//! - [`validate_presence_of_columns`]: required column names must exist
//! - [`validate_presence_of_fields`]: required (name, type, nullable) fields
//!   must exist exactly
//! - [`validate_absence_of_columns`]: prohibited column names must not exist
//!
//! Each failure is a [`SchemaError`] naming every offending item alongside the
//! dataset's full schema. [`SchemaContract`] runs all three and reports every
//! violation at once.
//!
//! ## Quick Example
//!
//! ```rust
//! use framecheck::{
//!     validate_absence_of_columns, validate_presence_of_columns, DataType, Field, Schema,
//!     SchemaError,
//! };
//!
//! let schema = Schema::new(vec![
//!     Field::required("id", DataType::Long),
//!     Field::nullable("email", DataType::String),
//!     Field::nullable("ssn", DataType::String),
//! ]);
//!
//! assert!(validate_presence_of_columns(&schema, &["id", "email"]).is_ok());
//!
//! match validate_absence_of_columns(&schema, &["ssn"]) {
//!     Err(SchemaError::ProhibitedColumn { prohibited, .. }) => {
//!         assert_eq!(prohibited, vec!["ssn"]);
//!     }
//!     other => panic!("Expected prohibited column, got {:?}", other),
//! }
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit a `debug` event for every passing check and a `warn`
//!   event for every failing one
//! - `serde`: `Serialize`/`Deserialize` for schema types and contracts
//! - `proptest`: `Arbitrary` for [`DataType`] and [`Field`], plus strategies
//!   in [`testing`]

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod contract;
pub mod error;
pub mod schema;
pub mod semigroup;
pub mod source;
pub mod testing;
pub mod validation;
pub mod validator;

// Re-exports
pub use contract::SchemaContract;
pub use error::{ContractViolation, SchemaError, SchemaErrorKind};
pub use schema::{DataType, Field, Schema};
pub use semigroup::Semigroup;
pub use source::SchemaSource;
pub use validation::Validation;
pub use validator::{
    check_absence_of_columns, check_presence_of_columns, check_presence_of_fields,
    validate_absence_of_columns, validate_presence_of_columns, validate_presence_of_fields,
    validate_presence_of_fields_with, FieldMatch,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::contract::SchemaContract;
    pub use crate::error::{ContractViolation, SchemaError, SchemaErrorKind};
    pub use crate::schema::{DataType, Field, Schema};
    pub use crate::semigroup::Semigroup;
    pub use crate::source::SchemaSource;
    pub use crate::validation::Validation;
    pub use crate::validator::{
        validate_absence_of_columns, validate_presence_of_columns, validate_presence_of_fields,
        validate_presence_of_fields_with, FieldMatch,
    };
}
