//! Version and build-info strings
//!
//! `build_info_string` only touches the property registry when asked for
//! verbose output, so the short form never triggers its construction.

use super::properties::{build_properties, BuildProperties};
use super::version::{product_name, VersionTriple, VERSION};

/// Dotted release version, with or without the patch component.
pub fn version_string(include_patch: bool) -> String {
    VERSION.to_version_string(include_patch)
}

/// `"{program} ({product}) {major.minor.patch}"`, followed by one
/// indented `name: value` line per build property when `verbose` is set.
pub fn build_info_string(program: &str, verbose: bool) -> String {
    let properties = if verbose {
        Some(build_properties())
    } else {
        None
    };
    format_build_info(program, product_name(), &VERSION, properties)
}

pub fn format_build_info(
    program: &str,
    product: &str,
    version: &VersionTriple,
    properties: Option<&BuildProperties>,
) -> String {
    let mut info = format!(
        "{} ({}) {}",
        program,
        product,
        version.to_version_string(true)
    );
    if let Some(properties) = properties {
        for (name, value) in properties {
            info.push_str("\n    ");
            info.push_str(name);
            info.push_str(": ");
            info.push_str(value);
        }
    }
    info
}
