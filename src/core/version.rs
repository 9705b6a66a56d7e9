//! Compile-time version constants and build placeholders.
//! This includes the generated version.rs from the build script into a core module,
//! providing a single source of truth.

include!(concat!(env!("OUT_DIR"), "/version.rs"));

/// Release version of the product, taken from the package version.
pub const VERSION: VersionTriple = VersionTriple {
    major: parse_component(env!("CARGO_PKG_VERSION_MAJOR")),
    minor: parse_component(env!("CARGO_PKG_VERSION_MINOR")),
    patch: parse_component(env!("CARGO_PKG_VERSION_PATCH")),
};

/// A (major, minor, patch) release identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionTriple {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl VersionTriple {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// `"major.minor"`, or `"major.minor.patch"` when `include_patch` is set
    pub fn to_version_string(&self, include_patch: bool) -> String {
        if include_patch {
            format!("{}.{}.{}", self.major, self.minor, self.patch)
        } else {
            format!("{}.{}", self.major, self.minor)
        }
    }
}

/// Product name from `[package.metadata] product_name`
pub fn product_name() -> &'static str {
    PRODUCT_NAME
}

// Cargo guarantees these are plain decimal integers.
const fn parse_component(s: &str) -> u32 {
    let bytes = s.as_bytes();
    let mut value: u32 = 0;
    let mut i = 0;
    while i < bytes.len() {
        value = value * 10 + (bytes[i] - b'0') as u32;
        i += 1;
    }
    value
}
