//! Rendering of the requested report as text or JSON

use serde::Serialize;
use std::collections::BTreeMap;

use super::cli::args::OutputFormat;
use super::cli::config::{Report, Settings};
use super::error::{AppError, AppResult};
use crate::core::build_info::{build_info_string, version_string};
use crate::core::properties::build_properties;
use crate::core::version::product_name;

#[derive(Debug, Serialize)]
struct BuildInfoDocument<'a> {
    program: &'a str,
    product: &'a str,
    version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    properties: Option<BTreeMap<&'a str, &'a str>>,
}

#[derive(Debug, Serialize)]
struct VersionDocument {
    version: String,
}

#[derive(Debug, Serialize)]
struct PropertyDocument<'a> {
    name: &'a str,
    value: &'a str,
}

/// Produce the text written to stdout for `settings`
pub fn render(settings: &Settings) -> AppResult<String> {
    match (&settings.report, settings.output_format) {
        (Report::BuildInfo { verbose }, OutputFormat::Text) => {
            Ok(build_info_string(&settings.program, *verbose))
        }
        (Report::BuildInfo { verbose }, OutputFormat::Json) => {
            let properties = verbose.then(|| {
                build_properties()
                    .iter()
                    .map(|(name, value)| (name.as_str(), value.as_str()))
                    .collect()
            });
            let doc = BuildInfoDocument {
                program: &settings.program,
                product: product_name(),
                version: version_string(true),
                properties,
            };
            Ok(serde_json::to_string_pretty(&doc)?)
        }
        (Report::ShortVersion, OutputFormat::Text) => Ok(version_string(false)),
        (Report::ShortVersion, OutputFormat::Json) => {
            let doc = VersionDocument {
                version: version_string(false),
            };
            Ok(serde_json::to_string_pretty(&doc)?)
        }
        (Report::Property(name), format) => {
            let value = build_properties()
                .get(name)
                .ok_or_else(|| AppError::PropertyNotFound { name: name.clone() })?;
            match format {
                OutputFormat::Text => Ok(value.to_string()),
                OutputFormat::Json => Ok(serde_json::to_string_pretty(&PropertyDocument {
                    name,
                    value,
                })?),
            }
        }
    }
}
