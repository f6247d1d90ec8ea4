//! featgen core - feature scaffolding for layered Flutter projects.
//!
//! This crate provides the domain and application layers, following
//! hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           featgen-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (ScaffoldService, TemplateService)    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │        (Filesystem, Indexer)            │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     featgen-adapters (Infrastructure)   │
//! │ (LocalFilesystem, ProcessIndexer, etc)  │
//! └─────────────────────────────────────────┘
//!
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (FeatureName, ScaffoldPlan, catalog,   │
//! │   index config registration)            │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use featgen_core::prelude::*;
//!
//! // 1. Normalize the user's input
//! let name = FeatureName::new("Order History");
//!
//! // 2. Run the pipeline with injected adapters
//! let service = ScaffoldService::new(filesystem, indexer).with_project_root(".");
//! let report = service.scaffold(name).unwrap();
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        RunFailure, RunReport, RunState, ScaffoldService, StageReport, TemplateService,
        ports::{Filesystem, Indexer, IndexerOutcome},
    };
    pub use crate::domain::{
        FeatureLayout, FeatureName, RegistrationStatus, ScaffoldPlan, TemplateRole,
    };
    pub use crate::error::{FeatgenError, FeatgenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
