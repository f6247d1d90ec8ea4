//! The scaffold plan: every directory and file one feature needs.
//!
//! Planning is pure and deterministic. The same name and layout always give
//! the same ordered lists, and nothing touches the disk until a run executes
//! the plan.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::{
    entities::template::TemplateRole,
    error::DomainError,
    value_objects::{FeatureLayout, FeatureName},
};

/// Subdirectories created under both the production and the test root of a
/// feature, in creation order. The root itself is created first.
pub const FEATURE_SUBDIRECTORIES: [&str; 14] = [
    "data",
    "data/datasources",
    "data/datasources/local",
    "data/datasources/remote",
    "data/models",
    "data/repositories",
    "domain",
    "domain/entities",
    "domain/repositories",
    "domain/usecases",
    "presentation",
    "presentation/bloc",
    "presentation/pages",
    "presentation/widgets",
];

/// Everything one feature needs on disk, ready for materialization.
///
/// Paths are relative to the project root. Building a plan never touches the
/// filesystem, and the same `FeatureName` + `FeatureLayout` always yields the
/// same plan in the same order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldPlan {
    pub(crate) feature: FeatureName,
    pub(crate) directories: Vec<PathBuf>,
    pub(crate) files: Vec<PlannedFile>,
}

/// One file to write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedFile {
    pub role: TemplateRole,
    pub path: PathBuf,
    pub content: String,
}

impl PlannedFile {
    pub fn size(&self) -> usize {
        self.content.len()
    }
}

impl ScaffoldPlan {
    /// Plan a feature using the default `lib/src/features` layout.
    pub fn build(name: &FeatureName) -> Self {
        Self::build_with_layout(name, &FeatureLayout::default())
    }

    pub fn build_with_layout(name: &FeatureName, layout: &FeatureLayout) -> Self {
        let feature_root = layout.feature_root(name);
        let test_root = layout.test_root(name);

        let directories = [&feature_root, &test_root]
            .into_iter()
            .flat_map(|root| {
                std::iter::once(root.clone())
                    .chain(FEATURE_SUBDIRECTORIES.iter().map(move |sub| root.join(sub)))
            })
            .collect();

        // Test files are deliberately not generated; only the mirrored
        // directory skeleton exists under the test root.
        let files = TemplateRole::ALL
            .into_iter()
            .map(|role| PlannedFile {
                role,
                path: feature_root.join(role.relative_path(name)),
                content: role.render(name),
            })
            .collect();

        Self {
            feature: name.clone(),
            directories,
            files,
        }
    }

    pub fn feature(&self) -> &FeatureName {
        &self.feature
    }

    pub fn directories(&self) -> &[PathBuf] {
        &self.directories
    }

    pub fn files(&self) -> &[PlannedFile] {
        &self.files
    }

    pub fn file(&self, path: impl AsRef<Path>) -> Option<&PlannedFile> {
        let path = path.as_ref();
        self.files.iter().find(|f| f.path == path)
    }

    pub fn file_for(&self, role: TemplateRole) -> Option<&PlannedFile> {
        self.files.iter().find(|f| f.role == role)
    }

    /// Reject plans that would write outside the project root or hit the same
    /// path twice.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.files.is_empty() {
            return Err(DomainError::EmptyPlan {
                feature: self.feature.original().to_string(),
            });
        }

        let mut seen = HashSet::new();
        let paths = self
            .directories
            .iter()
            .chain(self.files.iter().map(|f| &f.path));

        for path in paths {
            let path_str = path.display().to_string();

            if path.is_absolute() {
                return Err(DomainError::AbsolutePathNotAllowed { path: path_str });
            }

            if !seen.insert(path_str.clone()) {
                return Err(DomainError::DuplicatePath { path: path_str });
            }
        }

        Ok(())
    }
}
