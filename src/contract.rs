//! Declarative schema contracts
//!
//! A [`SchemaContract`] bundles required columns, required fields, and
//! prohibited columns, then runs every check against a dataset and reports
//! every violation in one go. With the `serde` feature, contracts deserialize
//! from configuration; absent keys default to empty lists.
//!
//! # Examples
//!
//! ```
//! use framecheck::{DataType, Field, Schema, SchemaContract, SchemaErrorKind};
//!
//! let contract = SchemaContract::new()
//!     .require_columns(["id", "email"])
//!     .require_fields([Field::required("id", DataType::Long)])
//!     .prohibit_columns(["password"]);
//!
//! let schema = Schema::new(vec![
//!     Field::required("id", DataType::Long),
//!     Field::nullable("password", DataType::String),
//! ]);
//!
//! let violation = contract.validate(&schema).unwrap_err();
//! assert_eq!(violation.len(), 2);
//! assert!(violation.contains(SchemaErrorKind::MissingColumn));
//! assert!(violation.contains(SchemaErrorKind::ProhibitedColumn));
//! ```

use crate::error::{ContractViolation, SchemaError};
use crate::schema::Field;
use crate::source::SchemaSource;
use crate::validation::Validation;
use crate::validator::{
    check_absence_of_columns, check_presence_of_columns, check_presence_of_fields, FieldMatch,
};

/// Requirements a dataset schema must satisfy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SchemaContract {
    /// Column names that must be present.
    pub required_columns: Vec<String>,
    /// Field descriptors that must be present.
    pub required_fields: Vec<Field>,
    /// Column names that must be absent.
    pub prohibited_columns: Vec<String>,
    /// How `required_fields` are compared.
    pub field_match: FieldMatch,
}

impl SchemaContract {
    /// Create a contract with no requirements.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add required column names.
    pub fn require_columns<I>(mut self, names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.required_columns.extend(names.into_iter().map(Into::into));
        self
    }

    /// Add required field descriptors.
    pub fn require_fields(mut self, fields: impl IntoIterator<Item = Field>) -> Self {
        self.required_fields.extend(fields);
        self
    }

    /// Add prohibited column names.
    pub fn prohibit_columns<I>(mut self, names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.prohibited_columns.extend(names.into_iter().map(Into::into));
        self
    }

    /// Set the field comparison mode.
    pub fn with_field_match(mut self, mode: FieldMatch) -> Self {
        self.field_match = mode;
        self
    }

    /// Compare required fields by name and type only.
    pub fn ignore_nullable(self) -> Self {
        self.with_field_match(FieldMatch::IgnoreNullable)
    }

    /// Returns true if the contract has no requirements.
    pub fn is_empty(&self) -> bool {
        self.required_columns.is_empty()
            && self.required_fields.is_empty()
            && self.prohibited_columns.is_empty()
    }

    /// Run every check, accumulating all violations.
    ///
    /// Errors appear in check order: missing columns, missing fields,
    /// prohibited columns. At most one error of each kind is reported.
    pub fn check<S>(&self, source: &S) -> Validation<(), Vec<SchemaError>>
    where
        S: SchemaSource + ?Sized,
    {
        Validation::all([
            check_presence_of_columns(source, &self.required_columns),
            check_presence_of_fields(source, &self.required_fields, self.field_match),
            check_absence_of_columns(source, &self.prohibited_columns),
        ])
        .map(|_| ())
    }

    /// Run every check, failing with all violations at once.
    ///
    /// # Errors
    ///
    /// Returns a [`ContractViolation`] holding one [`SchemaError`] per failed
    /// check.
    pub fn validate<S>(&self, source: &S) -> Result<(), ContractViolation>
    where
        S: SchemaSource + ?Sized,
    {
        match self.check(source) {
            Validation::Success(()) => Ok(()),
            Validation::Failure(errors) => match ContractViolation::from_errors(errors) {
                Some(violation) => Err(violation),
                None => Ok(()),
            },
        }
    }

    /// Validate a source against several contracts at once.
    ///
    /// Every contract is checked; their violations are merged into one
    /// [`ContractViolation`], in contract order.
    ///
    /// # Errors
    ///
    /// Returns a [`ContractViolation`] holding the errors of every failing
    /// contract.
    ///
    /// # Examples
    ///
    /// ```
    /// use framecheck::{DataType, Field, Schema, SchemaContract};
    ///
    /// let base = SchemaContract::new().require_columns(["id"]);
    /// let privacy = SchemaContract::new().prohibit_columns(["ssn"]);
    ///
    /// let schema = Schema::new(vec![Field::nullable("ssn", DataType::String)]);
    /// let violation = SchemaContract::validate_all([&base, &privacy], &schema).unwrap_err();
    /// assert_eq!(violation.len(), 2);
    /// ```
    pub fn validate_all<'a, I, S>(contracts: I, source: &S) -> Result<(), ContractViolation>
    where
        I: IntoIterator<Item = &'a SchemaContract>,
        S: SchemaSource + ?Sized,
    {
        Validation::all(
            contracts
                .into_iter()
                .map(|contract| Validation::from_result(contract.validate(source))),
        )
        .map(|_| ())
        .into_result()
    }
}
