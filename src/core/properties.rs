//! Build property registry
//!
//! Parses the `name:value` placeholders written by the build script and keeps
//! the successfully substituted ones as a read-only name → value mapping.
//! A placeholder whose value starts with `@` (`name:@MARKER@`) marks a
//! substitution the build step attempted and failed; those are skipped.

use std::collections::hash_map;
use std::collections::HashMap;
use std::sync::OnceLock;

use super::version::RAW_BUILD_PLACEHOLDERS;

pub const GIT_SHA_PROPERTY: &str = "rocksdb_build_git_sha";
pub const GIT_TAG_PROPERTY: &str = "rocksdb_build_git_tag";
pub const BUILD_DATE_PROPERTY: &str = "rocksdb_build_date";

/// Split a raw placeholder into `(name, value)`.
///
/// Returns `None` when there is no colon, when either side of the first colon
/// is empty, or when the value begins with the `@` failure marker. Only the
/// first colon delimits, so values may contain further colons.
pub fn extract_property(raw: &str) -> Option<(String, String)> {
    let colon = raw.find(':')?;
    if colon == 0 || colon + 1 >= raw.len() {
        return None;
    }
    if raw[colon..].find('@').map(|at| colon + at) == Some(colon + 1) {
        return None;
    }
    Some((raw[..colon].to_string(), raw[colon + 1..].to_string()))
}

/// Immutable set of build properties.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildProperties {
    entries: HashMap<String, String>,
}

impl BuildProperties {
    /// Build from raw placeholders; later names overwrite earlier ones.
    pub fn from_placeholders<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries = HashMap::new();
        for placeholder in raw {
            if let Some((name, value)) = extract_property(placeholder.as_ref()) {
                entries.insert(name, value);
            }
        }
        Self { entries }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn git_sha(&self) -> Option<&str> {
        self.get(GIT_SHA_PROPERTY)
    }

    pub fn git_tag(&self) -> Option<&str> {
        self.get(GIT_TAG_PROPERTY)
    }

    pub fn build_date(&self) -> Option<&str> {
        self.get(BUILD_DATE_PROPERTY)
    }

    /// Entries in unspecified order
    pub fn iter(&self) -> hash_map::Iter<'_, String, String> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn as_map(&self) -> &HashMap<String, String> {
        &self.entries
    }
}

impl<'a> IntoIterator for &'a BuildProperties {
    type Item = (&'a String, &'a String);
    type IntoIter = hash_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

static BUILD_PROPERTIES: OnceLock<BuildProperties> = OnceLock::new();

/// Process-wide registry, built from the compiled-in placeholders on first use.
pub fn build_properties() -> &'static BuildProperties {
    BUILD_PROPERTIES.get_or_init(|| BuildProperties::from_placeholders(RAW_BUILD_PLACEHOLDERS))
}

/// Raw name → value mapping of the process-wide registry.
pub fn get_build_properties() -> &'static HashMap<String, String> {
    build_properties().as_map()
}

/// True once the process-wide registry has been constructed
pub fn is_initialized() -> bool {
    BUILD_PROPERTIES.get().is_some()
}
