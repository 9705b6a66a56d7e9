pub mod app;
pub mod core;

pub use crate::core::build_info::{build_info_string, format_build_info, version_string};
pub use crate::core::properties::{
    build_properties, extract_property, get_build_properties, BuildProperties,
};
pub use crate::core::version::{product_name, VersionTriple, PRODUCT_NAME, VERSION};
