//! Owned copies of native text and flag fields.
//!
//! Every dereference of a foreign pointer in this crate goes through this
//! module. Each helper copies the referenced bytes into owned storage
//! immediately, so nothing downstream ever holds a reference into
//! CCI-managed memory (the library frees those buffers when the statement
//! handle is closed or re-executed).

use std::ffi::{c_char, CStr};

/// Copy a C string the native library guarantees non-null.
///
/// A null pointer is still tolerated and yields an empty string; names are
/// never "absent" at the descriptor level.
///
/// # Safety
///
/// `ptr`, when non-null, must point to a valid NUL-terminated C string that
/// stays valid for the duration of the call.
pub(crate) unsafe fn required_text(ptr: *const c_char) -> String {
    if ptr.is_null() {
        return String::new();
    }
    CStr::from_ptr(ptr).to_string_lossy().into_owned()
}

/// Copy a nullable C string, preserving absence.
///
/// Null maps to `None`; an empty string maps to `Some("")` — the two are
/// distinct (a column with no default vs. a default of the empty string).
///
/// # Safety
///
/// Same contract as [`required_text`].
pub(crate) unsafe fn optional_text(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    Some(CStr::from_ptr(ptr).to_string_lossy().into_owned())
}

/// Normalize a boolean-as-byte flag field: any nonzero byte is true.
pub(crate) fn flag(byte: c_char) -> bool {
    byte != 0
}
