//! Template roles and rendering.
//!
//! A feature is generated from a fixed set of file templates. Each template
//! is identified by a [`TemplateRole`] and described exactly once by a
//! [`TemplateDef`] in `catalog::TEMPLATE_REGISTRY`. Rendering is plain
//! placeholder substitution through [`RenderContext`].
//!
//! ```text
//! TemplateRole ──lookup──▶ TemplateDef { path, source }
//!                                │
//!                 RenderContext ─┴─▶ (relative path, content)
//! ```

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::domain::value_objects::FeatureName;

/// Architectural layer a template belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    Data,
    Domain,
    Presentation,
    /// The feature root itself (the top-level barrel).
    Feature,
}

impl Layer {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Data => "data",
            Self::Domain => "domain",
            Self::Presentation => "presentation",
            Self::Feature => "feature",
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Logical role of a generated file.
///
/// Adding a role: add the variant here and to [`TemplateRole::ALL`], then add
/// one `TemplateDef` to the registry. Nothing else changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateRole {
    DataBarrel,
    DataModel,
    LocalDataSource,
    RemoteDataSource,
    DomainBarrel,
    Entity,
    Repository,
    PresentationBarrel,
    FeatureBarrel,
    Page,
    Bloc,
    Event,
    State,
}

impl TemplateRole {
    /// Every role, in generation order.
    pub const ALL: [TemplateRole; 13] = [
        Self::DataBarrel,
        Self::DataModel,
        Self::LocalDataSource,
        Self::RemoteDataSource,
        Self::DomainBarrel,
        Self::Entity,
        Self::Repository,
        Self::PresentationBarrel,
        Self::FeatureBarrel,
        Self::Page,
        Self::Bloc,
        Self::Event,
        Self::State,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::DataBarrel => "data-barrel",
            Self::DataModel => "model",
            Self::LocalDataSource => "local-data-source",
            Self::RemoteDataSource => "remote-data-source",
            Self::DomainBarrel => "domain-barrel",
            Self::Entity => "entity",
            Self::Repository => "repository",
            Self::PresentationBarrel => "presentation-barrel",
            Self::FeatureBarrel => "feature-barrel",
            Self::Page => "page",
            Self::Bloc => "bloc",
            Self::Event => "event",
            Self::State => "state",
        }
    }

    /// The registry entry for this role.
    pub fn def(self) -> &'static TemplateDef {
        crate::domain::catalog::lookup(self)
    }

    /// Path of the generated file, relative to the feature root.
    pub fn relative_path(self, name: &FeatureName) -> PathBuf {
        PathBuf::from(RenderContext::new(name).render(self.def().path))
    }

    /// Generate the file content for `name`.
    pub fn render(self, name: &FeatureName) -> String {
        RenderContext::new(name).render(self.def().source)
    }
}

impl fmt::Display for TemplateRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static description of one template.
#[derive(Debug, Clone, Copy)]
pub struct TemplateDef {
    pub role: TemplateRole,
    pub layer: Layer,
    /// Short human-readable summary, shown by `--list-templates`.
    pub description: &'static str,
    /// Path pattern relative to the feature root, `/`-separated.
    pub path: &'static str,
    /// File body with `{{...}}` placeholders.
    pub source: &'static str,
}

/// Variables available to templates.
///
/// | Placeholder          | Example          |
/// |----------------------|------------------|
/// | `{{FEATURE_NAME}}`   | `Order History`  |
/// | `{{FEATURE_SNAKE}}`  | `order_history`  |
/// | `{{FEATURE_PASCAL}}` | `OrderHistory`   |
/// | `{{FEATURE_UPPER}}`  | `ORDER_HISTORY`  |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    variables: Vec<(&'static str, String)>,
}

impl RenderContext {
    pub fn new(name: &FeatureName) -> Self {
        Self {
            variables: vec![
                ("FEATURE_NAME", name.original().to_string()),
                ("FEATURE_SNAKE", name.snake_case().to_string()),
                ("FEATURE_PASCAL", name.pascal_case().to_string()),
                ("FEATURE_UPPER", name.screaming_snake_case()),
            ],
        }
    }

    /// Substitute every `{{KEY}}` placeholder. Unknown placeholders are left
    /// untouched.
    pub fn render(&self, template: &str) -> String {
        let mut result = template.to_string();

        for (key, value) in &self.variables {
            let placeholder = format!("{{{{{key}}}}}");
            result = result.replace(&placeholder, value);
        }

        result
    }
}
