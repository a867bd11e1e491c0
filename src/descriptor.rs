//! Version-agnostic column descriptor.
//!
//! One descriptor is produced per result column per statement execution by
//! [`describe`](crate::mirror::describe). It owns every text field outright
//! and is immutable after construction; nothing in it refers back to native
//! memory.

use crate::cci_type::CciType;

/// Normalized metadata for one result column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDescriptor {
    pub(crate) type_code: u32,
    pub(crate) nullable: bool,
    pub(crate) scale: i16,
    pub(crate) precision: i32,
    pub(crate) name: String,
    pub(crate) real_attribute_name: String,
    pub(crate) owning_class_name: String,
    pub(crate) default_value: Option<String>,
    pub(crate) is_auto_increment: bool,
    pub(crate) is_unique_key: bool,
    pub(crate) is_primary_key: bool,
    pub(crate) is_foreign_key: bool,
    pub(crate) has_reverse_index: bool,
    pub(crate) reverse_index_is_unique: bool,
    pub(crate) is_shared_attribute: bool,
}

impl ColumnDescriptor {
    /// The widened, unsigned native type tag.
    ///
    /// Both the 9.x signed enumerated tag and the 10+ unsigned byte land
    /// here without truncation or sign-extension.
    pub fn type_code(&self) -> u32 {
        self.type_code
    }

    /// The recognized [`CciType`] for this column, if the tag is one this
    /// crate enumerates.
    pub fn cci_type(&self) -> Option<CciType> {
        CciType::from_code(self.type_code)
    }

    /// Whether the column accepts NULL values.
    pub fn nullable(&self) -> bool {
        self.nullable
    }

    /// Scale; meaningful only for fixed-point numeric types, zero otherwise.
    pub fn scale(&self) -> i16 {
        self.scale
    }

    /// Precision, passed through from the native struct unmodified; its
    /// meaning is type-dependent.
    pub fn precision(&self) -> i32 {
        self.precision
    }

    /// Column name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Underlying attribute name, when the column aliases one.
    pub fn real_attribute_name(&self) -> &str {
        &self.real_attribute_name
    }

    /// Name of the class (table) the column belongs to.
    pub fn owning_class_name(&self) -> &str {
        &self.owning_class_name
    }

    /// Declared default value. `None` means the column has no default,
    /// which is distinct from a default of the empty string.
    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    /// Whether the column is auto-incremented.
    pub fn is_auto_increment(&self) -> bool {
        self.is_auto_increment
    }

    /// Whether the column is part of a unique key.
    pub fn is_unique_key(&self) -> bool {
        self.is_unique_key
    }

    /// Whether the column is part of the primary key.
    pub fn is_primary_key(&self) -> bool {
        self.is_primary_key
    }

    /// Whether the column is part of a foreign key.
    pub fn is_foreign_key(&self) -> bool {
        self.is_foreign_key
    }

    /// Whether a reverse index exists on the column.
    pub fn has_reverse_index(&self) -> bool {
        self.has_reverse_index
    }

    /// Whether that reverse index is unique.
    pub fn reverse_index_is_unique(&self) -> bool {
        self.reverse_index_is_unique
    }

    /// Whether the column is a shared attribute.
    pub fn is_shared_attribute(&self) -> bool {
        self.is_shared_attribute
    }
}
