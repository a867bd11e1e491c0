//! CUBRID CCI column-metadata mirror for Rust
//!
//! A byte-layout-compatible mirror of the CCI client library's column-info
//! struct (`T_CCI_COL_INFO`) across the 9.x and 10+ client releases, plus
//! the conversion from a native struct instance into an owned,
//! version-agnostic [`ColumnDescriptor`].
//!
//! The native library changed the width of the type-tag field between
//! releases; everything else stayed put. Callers detect which client is
//! loaded (by handshake, `cci_get_version`, or the sizeof probe offered by
//! [`CciVersion::from_col_info_size`]), then hand each raw column-info
//! pointer to [`describe`].
//!
//! # Example
//!
//! ```
//! use std::ffi::{c_void, CString};
//! use cubrid_cci_rs::{describe, CciVersion, TCciCol10Info};
//!
//! # fn main() -> cubrid_cci_rs::Result<()> {
//! // In a real driver this struct comes from cci_get_result_info; the
//! // caller owns the text buffers for the duration of the call.
//! let col_name = CString::new("NAME").unwrap();
//! let empty = CString::new("").unwrap();
//! let info = TCciCol10Info {
//!     ext_type: 2, // VARCHAR
//!     is_non_null: 1,
//!     scale: 0,
//!     precision: 50,
//!     col_name: col_name.as_ptr(),
//!     real_attr: empty.as_ptr(),
//!     class_name: empty.as_ptr(),
//!     default_value: std::ptr::null(),
//!     is_auto_increment: 0,
//!     is_unique_key: 0,
//!     is_primary_key: 0,
//!     is_foreign_key: 0,
//!     is_reverse_index: 0,
//!     is_reverse_unique: 0,
//!     is_shared: 0,
//! };
//!
//! let descriptor = unsafe {
//!     describe(&info as *const TCciCol10Info as *const c_void, CciVersion::V10Plus)?
//! };
//!
//! assert_eq!(descriptor.name(), "NAME");
//! assert!(!descriptor.nullable());
//! assert_eq!(descriptor.default_value(), None);
//! # Ok(())
//! # }
//! ```

pub mod cci_type;
pub mod descriptor;
pub mod error;
pub mod ffi;
pub mod mirror;
pub mod version;

// Re-export main types
pub use cci_type::CciType;
pub use descriptor::ColumnDescriptor;
pub use error::{Error, Result};
pub use ffi::{TCciCol10Info, TCciCol9xInfo};
pub use mirror::{describe, describe_columns};
pub use version::CciVersion;
