//! Error types for schema validation.
//!
//! Every failed check produces a [`SchemaError`] that carries both the
//! offending items and the dataset's actual schema, so the message alone is
//! enough to diagnose the mismatch.

use std::fmt;

use crate::schema::Field;
use crate::Semigroup;

/// The three kinds of contract violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaErrorKind {
    /// One or more required column names are absent
    MissingColumn,
    /// One or more required field descriptors are absent
    MissingStructField,
    /// One or more prohibited column names are present
    ProhibitedColumn,
}

impl fmt::Display for SchemaErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaErrorKind::MissingColumn => write!(f, "missing column"),
            SchemaErrorKind::MissingStructField => write!(f, "missing struct field"),
            SchemaErrorKind::ProhibitedColumn => write!(f, "prohibited column"),
        }
    }
}

/// A schema that does not satisfy a requirement.
///
/// # Examples
///
/// ```rust
/// use framecheck::{validate_presence_of_columns, DataType, Field, Schema, SchemaError};
///
/// let schema = Schema::new(vec![
///     Field::nullable("a", DataType::String),
///     Field::nullable("b", DataType::String),
/// ]);
///
/// match validate_presence_of_columns(&schema, &["a", "z"]) {
///     Err(SchemaError::MissingColumn { missing, actual }) => {
///         assert_eq!(missing, vec!["z"]);
///         assert_eq!(actual, vec!["a", "b"]);
///     }
///     other => panic!("Expected missing column, got {:?}", other),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// Required columns absent from the dataset.
    MissingColumn {
        /// Absent names, in requirement order.
        missing: Vec<String>,
        /// Every column of the dataset.
        actual: Vec<String>,
    },
    /// Required field descriptors with no structurally equal counterpart.
    MissingStructField {
        /// Absent descriptors, in requirement order.
        missing: Vec<Field>,
        /// Every field of the dataset.
        actual: Vec<Field>,
    },
    /// Prohibited columns present in the dataset.
    ProhibitedColumn {
        /// Present names, in prohibition order.
        prohibited: Vec<String>,
        /// Every column of the dataset.
        actual: Vec<String>,
    },
}

impl SchemaError {
    /// Create a missing column error.
    pub fn missing_column(missing: Vec<String>, actual: Vec<String>) -> Self {
        Self::MissingColumn { missing, actual }
    }

    /// Create a missing struct field error.
    pub fn missing_struct_field(missing: Vec<Field>, actual: Vec<Field>) -> Self {
        Self::MissingStructField { missing, actual }
    }

    /// Create a prohibited column error.
    pub fn prohibited_column(prohibited: Vec<String>, actual: Vec<String>) -> Self {
        Self::ProhibitedColumn { prohibited, actual }
    }

    /// The kind of violation.
    pub fn kind(&self) -> SchemaErrorKind {
        match self {
            Self::MissingColumn { .. } => SchemaErrorKind::MissingColumn,
            Self::MissingStructField { .. } => SchemaErrorKind::MissingStructField,
            Self::ProhibitedColumn { .. } => SchemaErrorKind::ProhibitedColumn,
        }
    }

    /// Names of the offending columns or fields, in requirement order.
    pub fn offending_names(&self) -> Vec<&str> {
        match self {
            Self::MissingColumn { missing, .. } => missing.iter().map(String::as_str).collect(),
            Self::MissingStructField { missing, .. } => {
                missing.iter().map(|f| f.name.as_str()).collect()
            }
            Self::ProhibitedColumn { prohibited, .. } => {
                prohibited.iter().map(String::as_str).collect()
            }
        }
    }

    /// Returns true if required columns are missing.
    pub fn is_missing_column(&self) -> bool {
        matches!(self, Self::MissingColumn { .. })
    }

    /// Returns true if required fields are missing.
    pub fn is_missing_struct_field(&self) -> bool {
        matches!(self, Self::MissingStructField { .. })
    }

    /// Returns true if prohibited columns are present.
    pub fn is_prohibited_column(&self) -> bool {
        matches!(self, Self::ProhibitedColumn { .. })
    }
}

struct FieldList<'a>(&'a [Field]);

impl fmt::Display for FieldList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, field) in self.0.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", field)?;
        }
        write!(f, "]")
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingColumn { missing, actual } => write!(
                f,
                "the {:?} columns are not included in the dataset with the following columns {:?}",
                missing, actual
            ),
            Self::MissingStructField { missing, actual } => write!(
                f,
                "the {} struct fields are not included in the dataset with the following struct fields {}",
                FieldList(missing),
                FieldList(actual)
            ),
            Self::ProhibitedColumn { prohibited, actual } => write!(
                f,
                "the {:?} columns are prohibited but included in the dataset with the following columns {:?}",
                prohibited, actual
            ),
        }
    }
}

impl std::error::Error for SchemaError {}

/// Every violation found when checking a [`SchemaContract`](crate::SchemaContract).
///
/// Never empty: a contract that finds nothing to report returns `Ok`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractViolation {
    errors: Vec<SchemaError>,
}

impl ContractViolation {
    /// Wrap a list of errors, returning `None` when it is empty.
    pub fn from_errors(errors: Vec<SchemaError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self { errors })
        }
    }

    /// The individual violations, in check order.
    pub fn errors(&self) -> &[SchemaError] {
        &self.errors
    }

    /// Consume and return the individual violations.
    pub fn into_errors(self) -> Vec<SchemaError> {
        self.errors
    }

    /// Number of violations.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if there are no violations; never the case for a value built by `from_errors`.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns true if any violation has the given kind.
    pub fn contains(&self, kind: SchemaErrorKind) -> bool {
        self.errors.iter().any(|e| e.kind() == kind)
    }
}

impl fmt::Display for ContractViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "schema contract violated ({} errors)", self.errors.len())?;
        for error in &self.errors {
            write!(f, "\n  - {}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ContractViolation {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.errors.first().map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// Violations from two contracts read as one report, left contract first.
impl Semigroup for ContractViolation {
    fn combine(mut self, other: Self) -> Self {
        self.errors.extend(other.errors);
        self
    }
}
