pub mod index_config;
pub mod scaffold_plan;
pub mod template;

pub use crate::domain::DomainError;
pub use index_config::{ConfigDocument, Registration};
pub use scaffold_plan::{PlannedFile, ScaffoldPlan};
pub use template::{TemplateDef, TemplateRole};
