//! Core services: build properties, version formatting and shared infrastructure

pub mod build_info;
pub mod error_handling;
pub mod logging;
pub mod properties;
pub mod version;
