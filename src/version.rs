//! Closed set of CCI client-library versions with known column-info shapes.
//!
//! Version detection itself lives outside this crate (connection handshake,
//! `cci_get_version`, or a sizeof probe against the loaded library); this
//! module is the boundary where whatever the detector produced is narrowed
//! into one of the shapes the mirror knows how to read. Unknown versions are
//! rejected here, before any native memory is touched.

use std::fmt;
use std::mem::size_of;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::ffi::{TCciCol10Info, TCciCol9xInfo};

/// A CCI client-library version with a known column-info layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CciVersion {
    /// 9.x clients: `ext_type` is a signed enumerated tag.
    V9x,
    /// 10+ clients: `ext_type` is an unsigned byte.
    V10Plus,
}

impl CciVersion {
    /// Every supported version, in release order.
    pub const ALL: [CciVersion; 2] = [CciVersion::V9x, CciVersion::V10Plus];

    /// Resolve a numeric major version detected by the caller.
    ///
    /// Returns `Err(Error::UnsupportedVersion)` for majors older than 9.
    pub fn from_major(major: u32) -> Result<Self> {
        match major {
            9 => Ok(CciVersion::V9x),
            10.. => Ok(CciVersion::V10Plus),
            _ => Err(Error::unsupported_version(major.to_string())),
        }
    }

    /// Size in bytes of this version's column-info struct.
    pub fn col_info_size(self) -> usize {
        match self {
            CciVersion::V9x => size_of::<TCciCol9xInfo>(),
            CciVersion::V10Plus => size_of::<TCciCol10Info>(),
        }
    }

    /// Resolve a version from the size of the loaded library's
    /// `T_CCI_COL_INFO`, the probe the original driver used: compare
    /// `sizeof` against each known shape and take the one that matches.
    pub fn from_col_info_size(size: usize) -> Result<Self> {
        CciVersion::ALL
            .into_iter()
            .find(|v| v.col_info_size() == size)
            .ok_or_else(|| Error::unsupported_version(format!("sizeof {size}")))
    }
}

impl fmt::Display for CciVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CciVersion::V9x => write!(f, "9.x"),
            CciVersion::V10Plus => write!(f, "10+"),
        }
    }
}

impl FromStr for CciVersion {
    type Err = Error;

    /// Parse a version tag (`"9.x"`, `"10+"`) or a dotted client version
    /// string such as `"9.3.0"` or `"10.2.1"`.
    fn from_str(s: &str) -> Result<Self> {
        let tag = s.trim();
        match tag {
            "9.x" => return Ok(CciVersion::V9x),
            "10+" => return Ok(CciVersion::V10Plus),
            _ => {}
        }

        let major = tag
            .split('.')
            .next()
            .and_then(|m| m.parse::<u32>().ok())
            .ok_or_else(|| Error::unsupported_version(tag))?;

        CciVersion::from_major(major).map_err(|_| Error::unsupported_version(tag))
    }
}
