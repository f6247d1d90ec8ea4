//! Append-only registration of features in the index generator config.
//!
//! The config file is treated as opaque, line-oriented text. A feature is
//! "registered" when the text contains `<base_path>/<snake>` anywhere; the
//! only mutation ever performed is appending one block at the end.

use std::fmt;

use serde::Serialize;

use crate::domain::value_objects::FeatureName;

/// Default file name of the index generator config, at the project root.
pub const INDEX_CONFIG_FILE: &str = "index_generator.yaml";

/// In-memory text of the index generator config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigDocument(String);

impl ConfigDocument {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Plain substring containment; no YAML structure is considered.
    pub fn contains_marker(&self, marker: &str) -> bool {
        self.0.contains(marker)
    }
}

impl fmt::Display for ConfigDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Outcome of [`register_feature`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Registration {
    /// The feature was absent; this is the document with the block appended.
    Updated(ConfigDocument),
    /// The marker was already present; nothing should be written.
    Unchanged,
}

/// Serializable summary of a registration, for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationStatus {
    Registered,
    AlreadyRegistered,
}

impl Registration {
    pub fn status(&self) -> RegistrationStatus {
        match self {
            Self::Updated(_) => RegistrationStatus::Registered,
            Self::Unchanged => RegistrationStatus::AlreadyRegistered,
        }
    }
}

/// Register `name` under `base_path`.
///
/// Returns [`Registration::Unchanged`] when `"<base_path>/<snake>"` already
/// occurs in the document. Otherwise the trailing whitespace of the document
/// is trimmed and `"\n" + block` is appended; every earlier byte is kept.
pub fn register_feature(
    document: &ConfigDocument,
    name: &FeatureName,
    base_path: &str,
) -> Registration {
    let base_path = base_path.trim_end_matches('/');
    let marker = format!("{}/{}", base_path, name.snake_case());

    if document.contains_marker(&marker) {
        return Registration::Unchanged;
    }

    let mut text = document.as_str().trim_end().to_string();
    text.push('\n');
    text.push_str(&feature_block(name, base_path));

    Registration::Updated(ConfigDocument(text))
}

/// The block appended for one feature, ending with a newline.
///
/// Mirrors the `libraries:` entry convention of `index_generator.yaml`: three
/// layer barrels plus a root barrel restricted to those three files.
pub fn feature_block(name: &FeatureName, base_path: &str) -> String {
    let root = format!("{}/{}", base_path.trim_end_matches('/'), name.snake_case());
    let snake = name.snake_case();

    format!(
        "    # FEATURE : {upper}\n\
         \x20   - directory_path: {root}/data\n\
         \x20     file_name: data\n\
         \x20   - directory_path: {root}/domain\n\
         \x20     file_name: domain\n\
         \x20   - directory_path: {root}/presentation\n\
         \x20     file_name: presentation\n\
         \x20   - directory_path: {root}\n\
         \x20     file_name: {snake}\n\
         \x20     include:\n\
         \x20       - data/data.dart\n\
         \x20       - domain/domain.dart\n\
         \x20       - presentation/presentation.dart\n",
        upper = name.screaming_snake_case(),
    )
}
