//! Conversion from native column-info structs to [`ColumnDescriptor`]s.
//!
//! `describe` is the only entry point through which the rest of a driver
//! sees CCI column metadata. It selects the `#[repr(C)]` shape matching the
//! detected client version, reads the type tag at that version's exact
//! width and signedness, and copies everything else into owned storage, so
//! the version-specific layouts never leak past this module.
//!
//! The conversion is pure and synchronous; it holds no state of its own and
//! may run concurrently as long as each call is given a distinct, valid
//! native instance.

use std::ffi::c_void;

use crate::descriptor::ColumnDescriptor;
use crate::error::{Error, Result};
use crate::ffi::text;
use crate::ffi::{TCciCol10Info, TCciCol9xInfo};
use crate::version::CciVersion;

/// Translate one native column-info struct into an owned descriptor.
///
/// `raw` is the pointer the native library handed back (one element of the
/// `cci_get_result_info` array), tagged with the externally detected
/// `version`. A null pointer fails with [`Error::InvalidNativeHandle`]
/// before anything is allocated. The native struct is only read, never
/// modified, and no reference into native memory survives the call.
///
/// # Safety
///
/// When non-null, `raw` must point to a validly-initialized column-info
/// struct of exactly the layout `version` names, and that memory (including
/// the text buffers it points to) must stay valid and unmutated for the
/// duration of the call. Passing a struct of the wrong version reads
/// misaligned fields; that is undefined behavior this layer cannot detect.
pub unsafe fn describe(raw: *const c_void, version: CciVersion) -> Result<ColumnDescriptor> {
    if raw.is_null() {
        return Err(Error::InvalidNativeHandle);
    }

    let descriptor = match version {
        CciVersion::V9x => read_v9(&*(raw as *const TCciCol9xInfo)),
        CciVersion::V10Plus => read_v10(&*(raw as *const TCciCol10Info)),
    };

    tracing::trace!(
        column = %descriptor.name(),
        %version,
        type_code = descriptor.type_code(),
        "described native column"
    );

    Ok(descriptor)
}

/// Translate a contiguous array of `count` native column-info structs, as
/// returned by `cci_get_result_info` for a prepared statement.
///
/// Each element becomes one independent descriptor; the result vector is in
/// column order.
///
/// # Safety
///
/// Same contract as [`describe`], extended to `count` consecutive elements
/// of the version's layout starting at `raw`.
pub unsafe fn describe_columns(
    raw: *const c_void,
    count: usize,
    version: CciVersion,
) -> Result<Vec<ColumnDescriptor>> {
    if raw.is_null() {
        return Err(Error::InvalidNativeHandle);
    }

    let mut columns = Vec::with_capacity(count);
    match version {
        CciVersion::V9x => {
            let base = raw as *const TCciCol9xInfo;
            for i in 0..count {
                columns.push(read_v9(&*base.add(i)));
            }
        }
        CciVersion::V10Plus => {
            let base = raw as *const TCciCol10Info;
            for i in 0..count {
                columns.push(read_v10(&*base.add(i)));
            }
        }
    }

    tracing::debug!(columns = columns.len(), %version, "described result set");

    Ok(columns)
}

/// Read the 9.x layout. The enumerated tag is reinterpreted bit-for-bit
/// into the unsigned code, so legal (non-negative) tags are never seen as
/// negative and nothing is truncated.
unsafe fn read_v9(info: &TCciCol9xInfo) -> ColumnDescriptor {
    ColumnDescriptor {
        type_code: info.ext_type as u32,
        nullable: !text::flag(info.is_non_null),
        scale: info.scale as i16,
        precision: info.precision as i32,
        name: text::required_text(info.col_name),
        real_attribute_name: text::required_text(info.real_attr),
        owning_class_name: text::required_text(info.class_name),
        default_value: text::optional_text(info.default_value),
        is_auto_increment: text::flag(info.is_auto_increment),
        is_unique_key: text::flag(info.is_unique_key),
        is_primary_key: text::flag(info.is_primary_key),
        is_foreign_key: text::flag(info.is_foreign_key),
        has_reverse_index: text::flag(info.is_reverse_index),
        reverse_index_is_unique: text::flag(info.is_reverse_unique),
        is_shared_attribute: text::flag(info.is_shared),
    }
}

/// Read the 10+ layout; the unsigned byte tag widens losslessly.
unsafe fn read_v10(info: &TCciCol10Info) -> ColumnDescriptor {
    ColumnDescriptor {
        type_code: u32::from(info.ext_type),
        nullable: !text::flag(info.is_non_null),
        scale: info.scale as i16,
        precision: info.precision as i32,
        name: text::required_text(info.col_name),
        real_attribute_name: text::required_text(info.real_attr),
        owning_class_name: text::required_text(info.class_name),
        default_value: text::optional_text(info.default_value),
        is_auto_increment: text::flag(info.is_auto_increment),
        is_unique_key: text::flag(info.is_unique_key),
        is_primary_key: text::flag(info.is_primary_key),
        is_foreign_key: text::flag(info.is_foreign_key),
        has_reverse_index: text::flag(info.is_reverse_index),
        reverse_index_is_unique: text::flag(info.is_reverse_unique),
        is_shared_attribute: text::flag(info.is_shared),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::{c_char, CString};
    use std::ptr;

    /// Owns the text buffers a native struct points at, standing in for the
    /// statement handle that owns them in the real library.
    struct NativeText {
        col_name: CString,
        real_attr: CString,
        class_name: CString,
        default_value: Option<CString>,
    }

    impl NativeText {
        fn new(name: &str, default: Option<&str>) -> Self {
            Self {
                col_name: CString::new(name).unwrap(),
                real_attr: CString::new(name.to_lowercase()).unwrap(),
                class_name: CString::new("athlete").unwrap(),
                default_value: default.map(|d| CString::new(d).unwrap()),
            }
        }

        fn default_ptr(&self) -> *const c_char {
            self.default_value
                .as_ref()
                .map_or(ptr::null(), |d| d.as_ptr())
        }

        fn v10(&self, ext_type: u8) -> TCciCol10Info {
            TCciCol10Info {
                ext_type,
                is_non_null: 0,
                scale: 0,
                precision: 0,
                col_name: self.col_name.as_ptr(),
                real_attr: self.real_attr.as_ptr(),
                class_name: self.class_name.as_ptr(),
                default_value: self.default_ptr(),
                is_auto_increment: 0,
                is_unique_key: 0,
                is_primary_key: 0,
                is_foreign_key: 0,
                is_reverse_index: 0,
                is_reverse_unique: 0,
                is_shared: 0,
            }
        }

        fn v9(&self, ext_type: i32) -> TCciCol9xInfo {
            TCciCol9xInfo {
                ext_type,
                is_non_null: 0,
                scale: 0,
                precision: 0,
                col_name: self.col_name.as_ptr(),
                real_attr: self.real_attr.as_ptr(),
                class_name: self.class_name.as_ptr(),
                default_value: self.default_ptr(),
                is_auto_increment: 0,
                is_unique_key: 0,
                is_primary_key: 0,
                is_foreign_key: 0,
                is_reverse_index: 0,
                is_reverse_unique: 0,
                is_shared: 0,
            }
        }
    }

    fn describe_v10(info: &TCciCol10Info) -> ColumnDescriptor {
        unsafe { describe(info as *const TCciCol10Info as *const c_void, CciVersion::V10Plus) }
            .unwrap()
    }

    fn describe_v9(info: &TCciCol9xInfo) -> ColumnDescriptor {
        unsafe { describe(info as *const TCciCol9xInfo as *const c_void, CciVersion::V9x) }
            .unwrap()
    }

    #[test]
    fn test_v10_character_column() {
        let text = NativeText::new("NAME", None);
        let mut info = text.v10(4);
        info.is_non_null = 1;
        info.precision = 50;

        let d = describe_v10(&info);
        assert_eq!(d.type_code(), 4);
        assert!(!d.nullable());
        assert_eq!(d.scale(), 0);
        assert_eq!(d.precision(), 50);
        assert_eq!(d.name(), "NAME");
        assert_eq!(d.default_value(), None);
        assert!(!d.is_auto_increment());
        assert!(!d.is_primary_key());
        assert!(!d.has_reverse_index());
    }

    #[test]
    fn test_v10_tag_maps_entire_byte_range() {
        let text = NativeText::new("C", None);
        for tag in 0..=255u8 {
            let info = text.v10(tag);
            assert_eq!(describe_v10(&info).type_code(), u32::from(tag));
        }
    }

    #[test]
    fn test_v9_tag_widens_without_sign_extension() {
        let text = NativeText::new("ID", None);
        let info = text.v9(21); // BIGINT
        let d = describe_v9(&info);
        assert_eq!(d.type_code(), 21);
        assert_eq!(d.cci_type(), Some(crate::cci_type::CciType::Bigint));
    }

    #[test]
    fn test_numeric_metadata_passes_through() {
        let text = NativeText::new("PRICE", Some("0.00"));
        let mut info = text.v9(7);
        info.scale = 2;
        info.precision = 10;

        let d = describe_v9(&info);
        assert_eq!(d.scale(), 2);
        assert_eq!(d.precision(), 10);
        assert_eq!(d.default_value(), Some("0.00"));
        assert_eq!(d.real_attribute_name(), "price");
        assert_eq!(d.owning_class_name(), "athlete");
    }

    #[test]
    fn test_empty_default_differs_from_null_default() {
        let with_empty = NativeText::new("A", Some(""));
        let without = NativeText::new("A", None);

        assert_eq!(describe_v10(&with_empty.v10(2)).default_value(), Some(""));
        assert_eq!(describe_v10(&without.v10(2)).default_value(), None);
    }

    #[test]
    fn test_any_nonzero_flag_byte_is_true() {
        let text = NativeText::new("K", None);
        for byte in [1u8, 2, 0xFF] {
            let mut info = text.v10(8);
            info.is_non_null = byte as c_char;
            info.is_auto_increment = byte as c_char;
            info.is_unique_key = byte as c_char;
            info.is_primary_key = byte as c_char;
            info.is_foreign_key = byte as c_char;
            info.is_reverse_index = byte as c_char;
            info.is_reverse_unique = byte as c_char;
            info.is_shared = byte as c_char;

            let d = describe_v10(&info);
            assert!(!d.nullable());
            assert!(d.is_auto_increment());
            assert!(d.is_unique_key());
            assert!(d.is_primary_key());
            assert!(d.is_foreign_key());
            assert!(d.has_reverse_index());
            assert!(d.reverse_index_is_unique());
            assert!(d.is_shared_attribute());
        }
    }

    #[test]
    fn test_all_zero_flags_are_false() {
        let text = NativeText::new("K", None);
        let d = describe_v10(&text.v10(8));
        assert!(d.nullable());
        assert!(!d.is_auto_increment());
        assert!(!d.is_unique_key());
        assert!(!d.is_primary_key());
        assert!(!d.is_foreign_key());
        assert!(!d.has_reverse_index());
        assert!(!d.reverse_index_is_unique());
        assert!(!d.is_shared_attribute());
    }

    #[test]
    fn test_descriptor_outlives_native_text() {
        let text = NativeText::new("KEPT", Some("dflt"));
        let info = text.v10(2);
        let d = describe_v10(&info);
        drop(text);

        assert_eq!(d.name(), "KEPT");
        assert_eq!(d.default_value(), Some("dflt"));
    }

    #[test]
    fn test_null_handle_rejected() {
        for version in CciVersion::ALL {
            let err = unsafe { describe(ptr::null(), version) }.unwrap_err();
            assert_eq!(err, Error::InvalidNativeHandle);
        }
        let err = unsafe { describe_columns(ptr::null(), 3, CciVersion::V10Plus) }.unwrap_err();
        assert_eq!(err, Error::InvalidNativeHandle);
    }

    #[test]
    fn test_describe_columns_walks_array() {
        let id_text = NativeText::new("ID", None);
        let name_text = NativeText::new("NAME", Some("anonymous"));

        let mut id = id_text.v10(8);
        id.is_non_null = 1;
        id.is_primary_key = 1;
        let name = name_text.v10(2);

        let array = [id, name];
        let columns = unsafe {
            describe_columns(
                array.as_ptr() as *const c_void,
                array.len(),
                CciVersion::V10Plus,
            )
        }
        .unwrap();

        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].name(), "ID");
        assert!(columns[0].is_primary_key());
        assert_eq!(columns[1].name(), "NAME");
        assert_eq!(columns[1].default_value(), Some("anonymous"));
    }

    #[test]
    fn test_describe_columns_empty_result_set() {
        let text = NativeText::new("X", None);
        let info = text.v9(2);
        let columns = unsafe {
            describe_columns(&info as *const TCciCol9xInfo as *const c_void, 0, CciVersion::V9x)
        }
        .unwrap();
        assert!(columns.is_empty());
    }
}
