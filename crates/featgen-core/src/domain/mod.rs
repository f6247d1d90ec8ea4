//! Core domain layer for featgen.
//!
//! This module contains pure logic with no I/O. Filesystem and process
//! concerns are handled via ports (traits) defined in the application layer.
//!
//! - **value_objects**: `FeatureName` normalization and `FeatureLayout`
//! - **catalog**: the static template registry
//! - **entities**: template roles, the scaffold plan, and config registration
//!
// Public API - what the world sees
pub mod catalog;
pub mod entities;
pub mod error;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    index_config::{
        ConfigDocument, INDEX_CONFIG_FILE, Registration, RegistrationStatus, feature_block,
        register_feature,
    },
    scaffold_plan::{FEATURE_SUBDIRECTORIES, PlannedFile, ScaffoldPlan},
    template::{Layer, RenderContext, TemplateDef, TemplateRole},
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{FeatureLayout, FeatureName};

pub use validation::DomainValidator;
