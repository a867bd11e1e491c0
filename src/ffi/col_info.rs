//! ABI mirrors of the CCI column-info struct (`T_CCI_COL_INFO`).
//!
//! The CCI client library changed the width of the type-tag field between
//! the 9.x and 10+ releases (signed enumerated value vs. unsigned byte) and
//! kept every other field and its declaration order stable. One `#[repr(C)]`
//! struct per layout keeps the mirror bit-exact with whichever library is
//! actually loaded; a mismatch in field order or width here is silent memory
//! misinterpretation, not a visible error, so field order in these structs
//! must never be rearranged.

use std::ffi::{c_char, c_int, c_short, c_uchar};

/// Column-info layout used by CCI 9.x clients.
///
/// `ext_type` carries the `T_CCI_U_TYPE` enumerated tag at the width the C
/// compiler gives the enum (historically a signed `int`).
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct TCciCol9xInfo {
    pub ext_type: c_int,
    pub is_non_null: c_char,
    pub scale: c_short,
    pub precision: c_int,
    pub col_name: *const c_char,
    pub real_attr: *const c_char,
    pub class_name: *const c_char,
    pub default_value: *const c_char,
    pub is_auto_increment: c_char,
    pub is_unique_key: c_char,
    pub is_primary_key: c_char,
    pub is_foreign_key: c_char,
    pub is_reverse_index: c_char,
    pub is_reverse_unique: c_char,
    pub is_shared: c_char,
}

/// Column-info layout used by CCI 10+ clients.
///
/// Identical to [`TCciCol9xInfo`] except that `ext_type` was widened to an
/// unsigned 8-bit tag.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct TCciCol10Info {
    pub ext_type: c_uchar,
    pub is_non_null: c_char,
    pub scale: c_short,
    pub precision: c_int,
    pub col_name: *const c_char,
    pub real_attr: *const c_char,
    pub class_name: *const c_char,
    pub default_value: *const c_char,
    pub is_auto_increment: c_char,
    pub is_unique_key: c_char,
    pub is_primary_key: c_char,
    pub is_foreign_key: c_char,
    pub is_reverse_index: c_char,
    pub is_reverse_unique: c_char,
    pub is_shared: c_char,
}
