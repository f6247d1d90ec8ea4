use std::path::Path;

use crate::domain::{
    entities::ScaffoldPlan, error::DomainError, value_objects::FeatureLayout,
};

/// Centralized domain validation.
///
/// Checks that would otherwise be scattered across the planner and the
/// service live here.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_plan(plan: &ScaffoldPlan) -> Result<(), DomainError> {
        plan.validate()
    }

    /// Both roots must be relative and distinct, otherwise every planned
    /// directory would collide with its mirror.
    pub fn validate_layout(layout: &FeatureLayout) -> Result<(), DomainError> {
        for root in [&layout.base_path, &layout.test_base_path] {
            if Path::new(root).is_absolute() {
                return Err(DomainError::AbsolutePathNotAllowed { path: root.clone() });
            }
        }

        if layout.base_path == layout.test_base_path {
            return Err(DomainError::DuplicatePath {
                path: layout.base_path.clone(),
            });
        }

        Ok(())
    }
}
