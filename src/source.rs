//! The read-only view of a dataset that validators consume
//!
//! Validators never touch rows or trigger execution. All they need from a
//! dataset is its ordered column names and its ordered field descriptors, so
//! any tabular type becomes validatable by implementing [`SchemaSource`].
//!
//! # Examples
//!
//! ```
//! use framecheck::{validate_presence_of_columns, DataType, Field, SchemaSource};
//!
//! struct Frame {
//!     fields: Vec<Field>,
//! }
//!
//! impl SchemaSource for Frame {
//!     fn fields(&self) -> &[Field] {
//!         &self.fields
//!     }
//! }
//!
//! let frame = Frame {
//!     fields: vec![Field::required("id", DataType::Long)],
//! };
//! assert!(validate_presence_of_columns(&frame, &["id"]).is_ok());
//! ```

use crate::schema::{Field, Schema};

/// A dataset handle exposing its schema.
///
/// `column_names` defaults to the names of `fields`, in order. Override it for
/// sources that track their column list separately from typed fields (a CSV
/// header, for instance, has names but no types).
pub trait SchemaSource {
    /// Structured field descriptors, in column order.
    fn fields(&self) -> &[Field];

    /// Column names, in column order.
    fn column_names(&self) -> Vec<&str> {
        self.fields().iter().map(|f| f.name.as_str()).collect()
    }
}

impl SchemaSource for Schema {
    fn fields(&self) -> &[Field] {
        Schema::fields(self)
    }
}

impl SchemaSource for [Field] {
    fn fields(&self) -> &[Field] {
        self
    }
}

impl SchemaSource for Vec<Field> {
    fn fields(&self) -> &[Field] {
        self.as_slice()
    }
}

impl<S: SchemaSource + ?Sized> SchemaSource for &S {
    fn fields(&self) -> &[Field] {
        (**self).fields()
    }

    fn column_names(&self) -> Vec<&str> {
        (**self).column_names()
    }
}

impl<S: SchemaSource + ?Sized> SchemaSource for Box<S> {
    fn fields(&self) -> &[Field] {
        (**self).fields()
    }

    fn column_names(&self) -> Vec<&str> {
        (**self).column_names()
    }
}
