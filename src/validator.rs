//! Schema validators
//!
//! Three independent checks, each a pure function of a [`SchemaSource`] and a
//! requirement sequence:
//!
//! - [`validate_presence_of_columns`]: every required name is a column
//! - [`validate_presence_of_fields`]: every required field has a structurally
//!   equal counterpart (name, type, and nullability)
//! - [`validate_absence_of_columns`]: no prohibited name is a column
//!
//! A failing check reports every offending item, in requirement order, next to
//! the dataset's full schema. Requirements are not de-duplicated, and an empty
//! requirement always passes.
//!
//! The `check_*` variants have the same semantics but return a [`Validation`]
//! so their failures can be accumulated with [`Validation::and`].
//!
//! # Examples
//!
//! ```
//! use framecheck::{
//!     validate_absence_of_columns, validate_presence_of_columns, validate_presence_of_fields,
//!     DataType, Field, Schema,
//! };
//!
//! let schema = Schema::new(vec![
//!     Field::required("id", DataType::Long),
//!     Field::nullable("email", DataType::String),
//! ]);
//!
//! assert!(validate_presence_of_columns(&schema, &["id", "email"]).is_ok());
//! assert!(validate_absence_of_columns(&schema, &["ssn"]).is_ok());
//!
//! // Right name, wrong nullability
//! let err = validate_presence_of_fields(&schema, &[Field::required("email", DataType::String)])
//!     .unwrap_err();
//! assert!(err.is_missing_struct_field());
//! ```

use std::borrow::Borrow;

use crate::error::SchemaError;
use crate::schema::Field;
use crate::source::SchemaSource;
use crate::validation::Validation;

/// How required fields are compared against the dataset's fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FieldMatch {
    /// Name, type and nullability must all be equal.
    #[default]
    Exact,
    /// Name and type must be equal; the field's own nullability is ignored.
    ///
    /// Nullability nested inside array, map and struct types is still compared.
    IgnoreNullable,
}

impl FieldMatch {
    /// Returns true if `actual` satisfies `required` under this mode.
    ///
    /// ```
    /// use framecheck::{DataType, Field, FieldMatch};
    ///
    /// let required = Field::required("a", DataType::Integer);
    /// let actual = Field::nullable("a", DataType::Integer);
    ///
    /// assert!(!FieldMatch::Exact.matches(&required, &actual));
    /// assert!(FieldMatch::IgnoreNullable.matches(&required, &actual));
    /// ```
    pub fn matches(self, required: &Field, actual: &Field) -> bool {
        match self {
            FieldMatch::Exact => required == actual,
            FieldMatch::IgnoreNullable => {
                required.name == actual.name && required.data_type == actual.data_type
            }
        }
    }
}

/// Validate that every required column name is present.
///
/// Names are checked in order and duplicates are reported once per
/// occurrence.
///
/// # Errors
///
/// Returns [`SchemaError::MissingColumn`] listing every absent name, in the
/// order given, along with all columns of the dataset.
///
/// # Examples
///
/// ```
/// use framecheck::{validate_presence_of_columns, DataType, Field, Schema};
///
/// let schema: Schema = ["a", "b", "c"]
///     .into_iter()
///     .map(|n| Field::nullable(n, DataType::String))
///     .collect();
///
/// assert!(validate_presence_of_columns(&schema, &["a", "b"]).is_ok());
///
/// let err = validate_presence_of_columns(&schema, &["a", "z"]).unwrap_err();
/// assert_eq!(err.offending_names(), vec!["z"]);
/// ```
pub fn validate_presence_of_columns<S, I>(source: &S, required: I) -> Result<(), SchemaError>
where
    S: SchemaSource + ?Sized,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let actual = source.column_names();
    let missing: Vec<String> = required
        .into_iter()
        .filter(|name| !actual.contains(&name.as_ref()))
        .map(|name| name.as_ref().to_string())
        .collect();

    if missing.is_empty() {
        return report("presence_of_columns", Ok(()));
    }
    report(
        "presence_of_columns",
        Err(SchemaError::missing_column(missing, owned_names(&actual))),
    )
}

/// Validate that every required field descriptor is present.
///
/// Equivalent to [`validate_presence_of_fields_with`] using
/// [`FieldMatch::Exact`]: a field that exists by name but differs in type or
/// nullability counts as missing.
///
/// # Errors
///
/// Returns [`SchemaError::MissingStructField`] listing every unmatched
/// descriptor along with all fields of the dataset.
///
/// # Examples
///
/// ```
/// use framecheck::{validate_presence_of_fields, DataType, Field, Schema};
///
/// let schema = Schema::new(vec![Field::required("a", DataType::Integer)]);
///
/// assert!(validate_presence_of_fields(&schema, &[Field::required("a", DataType::Integer)]).is_ok());
/// assert!(validate_presence_of_fields(&schema, &[Field::required("a", DataType::String)]).is_err());
/// ```
pub fn validate_presence_of_fields<S, I>(source: &S, required: I) -> Result<(), SchemaError>
where
    S: SchemaSource + ?Sized,
    I: IntoIterator,
    I::Item: Borrow<Field>,
{
    validate_presence_of_fields_with(source, required, FieldMatch::Exact)
}

/// Validate that every required field descriptor is present, comparing with
/// the given [`FieldMatch`] mode.
///
/// # Errors
///
/// Returns [`SchemaError::MissingStructField`] listing every unmatched
/// descriptor along with all fields of the dataset.
pub fn validate_presence_of_fields_with<S, I>(
    source: &S,
    required: I,
    mode: FieldMatch,
) -> Result<(), SchemaError>
where
    S: SchemaSource + ?Sized,
    I: IntoIterator,
    I::Item: Borrow<Field>,
{
    let actual = source.fields();
    let missing: Vec<Field> = required
        .into_iter()
        .filter(|field| {
            !actual
                .iter()
                .any(|candidate| mode.matches(field.borrow(), candidate))
        })
        .map(|field| field.borrow().clone())
        .collect();

    if missing.is_empty() {
        return report("presence_of_fields", Ok(()));
    }
    report(
        "presence_of_fields",
        Err(SchemaError::missing_struct_field(missing, actual.to_vec())),
    )
}

/// Validate that no prohibited column name is present.
///
/// # Errors
///
/// Returns [`SchemaError::ProhibitedColumn`] listing every prohibited name
/// that is present, in the order given, along with all columns of the dataset.
///
/// # Examples
///
/// ```
/// use framecheck::{validate_absence_of_columns, DataType, Field, Schema};
///
/// let schema: Schema = ["a", "b", "secret"]
///     .into_iter()
///     .map(|n| Field::nullable(n, DataType::String))
///     .collect();
///
/// assert!(validate_absence_of_columns(&schema, &["c"]).is_ok());
///
/// let err = validate_absence_of_columns(&schema, &["secret"]).unwrap_err();
/// assert_eq!(err.offending_names(), vec!["secret"]);
/// ```
pub fn validate_absence_of_columns<S, I>(source: &S, prohibited: I) -> Result<(), SchemaError>
where
    S: SchemaSource + ?Sized,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let actual = source.column_names();
    let present: Vec<String> = prohibited
        .into_iter()
        .filter(|name| actual.contains(&name.as_ref()))
        .map(|name| name.as_ref().to_string())
        .collect();

    if present.is_empty() {
        return report("absence_of_columns", Ok(()));
    }
    report(
        "absence_of_columns",
        Err(SchemaError::prohibited_column(present, owned_names(&actual))),
    )
}

/// [`validate_presence_of_columns`], returning an accumulating [`Validation`].
pub fn check_presence_of_columns<S, I>(source: &S, required: I) -> Validation<(), Vec<SchemaError>>
where
    S: SchemaSource + ?Sized,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    Validation::from_result(validate_presence_of_columns(source, required)).map_err(|e| vec![e])
}

/// [`validate_presence_of_fields_with`], returning an accumulating [`Validation`].
pub fn check_presence_of_fields<S, I>(
    source: &S,
    required: I,
    mode: FieldMatch,
) -> Validation<(), Vec<SchemaError>>
where
    S: SchemaSource + ?Sized,
    I: IntoIterator,
    I::Item: Borrow<Field>,
{
    Validation::from_result(validate_presence_of_fields_with(source, required, mode))
        .map_err(|e| vec![e])
}

/// [`validate_absence_of_columns`], returning an accumulating [`Validation`].
pub fn check_absence_of_columns<S, I>(source: &S, prohibited: I) -> Validation<(), Vec<SchemaError>>
where
    S: SchemaSource + ?Sized,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    Validation::from_result(validate_absence_of_columns(source, prohibited)).map_err(|e| vec![e])
}

fn owned_names(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn report(check: &'static str, result: Result<(), SchemaError>) -> Result<(), SchemaError> {
    #[cfg(feature = "tracing")]
    log_outcome(check, &result);
    result
}

#[cfg(feature = "tracing")]
fn log_outcome(check: &'static str, result: &Result<(), SchemaError>) {
    match result {
        Ok(()) => tracing::debug!(check, "schema check passed"),
        Err(err) => tracing::warn!(
            check,
            kind = %err.kind(),
            offending = ?err.offending_names(),
            "schema check failed: {}",
            err
        ),
    }
}
