//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "scaffold a feature" or "list templates".

pub mod scaffold_service;
pub mod template_service;

pub use scaffold_service::{
    RunFailure, RunReport, RunState, ScaffoldRun, ScaffoldService, StageReport,
};
pub use template_service::{TemplateInfo, TemplateService};
