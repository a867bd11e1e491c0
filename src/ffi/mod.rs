//! Raw CCI interop surface.
//!
//! `col_info` declares the per-version `#[repr(C)]` column-info layouts;
//! `text` is the single adapter through which native text pointers are
//! copied into owned storage. Code outside this module never touches a
//! foreign pointer directly.

pub mod col_info;
pub(crate) mod text;

pub use col_info::{TCciCol10Info, TCciCol9xInfo};
