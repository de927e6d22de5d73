//! Schema model: field descriptors and their data types
//!
//! A [`Field`] is the (name, type, nullable) triple describing one column of a
//! tabular dataset. Two fields are equal only when all three components are
//! equal, and [`DataType`] equality recurses through nested arrays, maps, and
//! structs. That structural equality is what the field validators compare.
//!
//! # Examples
//!
//! ```
//! use framecheck::{DataType, Field, Schema};
//!
//! let schema = Schema::empty()
//!     .with_field(Field::new("id", DataType::Long, false))
//!     .with_field(Field::new("tags", DataType::array(DataType::String, true), true));
//!
//! assert_eq!(schema.len(), 2);
//! assert_eq!(schema.field("id").map(|f| f.nullable), Some(false));
//! assert_eq!(schema.to_string(), "struct<id:bigint not null,tags:array<string>>");
//! ```

use std::fmt;

/// The type identifier of a column.
///
/// Each variant renders to a compact, deterministic name through `Display`
/// (`int`, `bigint`, `decimal(10,2)`, `array<string>`, `struct<a:int>`), which
/// is what error messages show. Nested elements, map values and struct fields
/// that may not hold nulls carry a ` not null` suffix, so types that differ
/// only in nested nullability render differently.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DataType {
    /// Column holding only nulls
    Null,
    /// `true` / `false`
    Boolean,
    /// 8-bit signed integer
    Byte,
    /// 16-bit signed integer
    Short,
    /// 32-bit signed integer
    Integer,
    /// 64-bit signed integer
    Long,
    /// 32-bit float
    Float,
    /// 64-bit float
    Double,
    /// Fixed-point decimal
    Decimal {
        /// Total number of digits
        precision: u8,
        /// Digits after the decimal point
        scale: u8,
    },
    /// UTF-8 string
    String,
    /// Raw bytes
    Binary,
    /// Calendar date
    Date,
    /// Timestamp with time zone
    Timestamp,
    /// Variable-length list of a single element type
    Array {
        /// Element type
        element: Box<DataType>,
        /// Whether elements may be null
        contains_null: bool,
    },
    /// Key/value map
    Map {
        /// Key type
        key: Box<DataType>,
        /// Value type
        value: Box<DataType>,
        /// Whether values may be null
        value_contains_null: bool,
    },
    /// Nested struct with its own ordered fields
    Struct(Vec<Field>),
}

impl DataType {
    /// Build an array type.
    ///
    /// ```
    /// use framecheck::DataType;
    ///
    /// let t = DataType::array(DataType::Integer, true);
    /// assert_eq!(t.to_string(), "array<int>");
    ///
    /// let strict = DataType::array(DataType::Integer, false);
    /// assert_eq!(strict.to_string(), "array<int not null>");
    /// ```
    pub fn array(element: DataType, contains_null: bool) -> Self {
        DataType::Array {
            element: Box::new(element),
            contains_null,
        }
    }

    /// Build a map type.
    pub fn map(key: DataType, value: DataType, value_contains_null: bool) -> Self {
        DataType::Map {
            key: Box::new(key),
            value: Box::new(value),
            value_contains_null,
        }
    }

    /// Build a decimal type.
    pub fn decimal(precision: u8, scale: u8) -> Self {
        DataType::Decimal { precision, scale }
    }

    /// Build a struct type from its fields.
    pub fn structure(fields: impl IntoIterator<Item = Field>) -> Self {
        DataType::Struct(fields.into_iter().collect())
    }

    /// Returns true for array, map and struct types.
    pub fn is_nested(&self) -> bool {
        matches!(
            self,
            DataType::Array { .. } | DataType::Map { .. } | DataType::Struct(_)
        )
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataType::Null => write!(f, "void"),
            DataType::Boolean => write!(f, "boolean"),
            DataType::Byte => write!(f, "tinyint"),
            DataType::Short => write!(f, "smallint"),
            DataType::Integer => write!(f, "int"),
            DataType::Long => write!(f, "bigint"),
            DataType::Float => write!(f, "float"),
            DataType::Double => write!(f, "double"),
            DataType::Decimal { precision, scale } => write!(f, "decimal({},{})", precision, scale),
            DataType::String => write!(f, "string"),
            DataType::Binary => write!(f, "binary"),
            DataType::Date => write!(f, "date"),
            DataType::Timestamp => write!(f, "timestamp"),
            DataType::Array {
                element,
                contains_null,
            } => {
                write!(f, "array<{}", element)?;
                write_not_null(f, *contains_null)?;
                write!(f, ">")
            }
            DataType::Map {
                key,
                value,
                value_contains_null,
            } => {
                write!(f, "map<{},{}", key, value)?;
                write_not_null(f, *value_contains_null)?;
                write!(f, ">")
            }
            DataType::Struct(fields) => write_struct(f, fields),
        }
    }
}

fn write_struct(f: &mut fmt::Formatter<'_>, fields: &[Field]) -> fmt::Result {
    write!(f, "struct<")?;
    for (idx, field) in fields.iter().enumerate() {
        if idx > 0 {
            write!(f, ",")?;
        }
        write!(f, "{}:{}", field.name, field.data_type)?;
        write_not_null(f, field.nullable)?;
    }
    write!(f, ">")
}

fn write_not_null(f: &mut fmt::Formatter<'_>, nullable: bool) -> fmt::Result {
    if nullable {
        Ok(())
    } else {
        write!(f, " not null")
    }
}

/// One structured-schema entry: a column name, its type, and whether it may hold nulls.
///
/// # Examples
///
/// ```
/// use framecheck::{DataType, Field};
///
/// let a = Field::new("a", DataType::Integer, false);
/// assert_eq!(a.to_string(), r#""a": int not null"#);
///
/// // Same name, different nullability: not the same field
/// assert_ne!(a, Field::new("a", DataType::Integer, true));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Field {
    /// Column name
    pub name: String,
    /// Column type
    pub data_type: DataType,
    /// Whether the column may contain nulls
    pub nullable: bool,
}

impl Field {
    /// Create a field descriptor.
    pub fn new(name: impl Into<String>, data_type: DataType, nullable: bool) -> Self {
        Self {
            name: name.into(),
            data_type,
            nullable,
        }
    }

    /// Create a nullable field.
    pub fn nullable(name: impl Into<String>, data_type: DataType) -> Self {
        Self::new(name, data_type, true)
    }

    /// Create a non-nullable field.
    pub fn required(name: impl Into<String>, data_type: DataType) -> Self {
        Self::new(name, data_type, false)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.name, self.data_type)?;
        write_not_null(f, self.nullable)
    }
}

/// An ordered list of fields.
///
/// `Schema` is the simplest [`SchemaSource`](crate::SchemaSource): its column
/// names are its field names, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Schema {
    fields: Vec<Field>,
}

impl Schema {
    /// Create a schema from fields, keeping their order.
    pub fn new(fields: impl IntoIterator<Item = Field>) -> Self {
        Self {
            fields: fields.into_iter().collect(),
        }
    }

    /// Create a schema with no fields.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Append a field.
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// First field with the given name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Column names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the schema has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Consume the schema, returning its fields.
    pub fn into_fields(self) -> Vec<Field> {
        self.fields
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_struct(f, &self.fields)
    }
}

impl FromIterator<Field> for Schema {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl From<Vec<Field>> for Schema {
    fn from(fields: Vec<Field>) -> Self {
        Self { fields }
    }
}
