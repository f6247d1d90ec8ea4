//! Template Service - read-only queries over the template catalog.
//!
//! Separated from ScaffoldService so listing templates needs no adapters.

use serde::Serialize;

use crate::domain::{
    Layer, TemplateDef, TemplateRole,
    catalog::{self, TEMPLATE_REGISTRY},
};

/// Template metadata for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateInfo {
    pub role: TemplateRole,
    pub layer: Layer,
    /// Path pattern, with placeholders left in.
    pub path: &'static str,
    pub description: &'static str,
}

/// Service for template queries.
#[derive(Debug, Default, Clone, Copy)]
pub struct TemplateService;

impl TemplateService {
    pub fn new() -> Self {
        Self
    }

    /// Every template, in generation order.
    pub fn list(&self) -> Vec<TemplateInfo> {
        TEMPLATE_REGISTRY.iter().map(TemplateInfo::from).collect()
    }

    /// Templates belonging to one layer, in generation order.
    pub fn list_layer(&self, layer: Layer) -> Vec<TemplateInfo> {
        catalog::by_layer(layer).map(TemplateInfo::from).collect()
    }
}

impl From<&TemplateDef> for TemplateInfo {
    fn from(def: &TemplateDef) -> Self {
        Self {
            role: def.role,
            layer: def.layer,
            path: def.path,
            description: def.description,
        }
    }
}
