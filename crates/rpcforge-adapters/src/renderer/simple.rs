//! Simple variable substitution renderer.

use std::sync::Arc;

use rpcforge_core::{
    application::ports::{TemplateRenderer, TemplateStore},
    domain::TemplateContext,
    error::ForgeResult,
};
use tracing::{debug, instrument};

/// Renders stored templates by substituting `{{key}}` placeholders.
///
/// Unknown keys are left in place so a typo in an override template shows up
/// in the generated file instead of vanishing.
#[derive(Clone)]
pub struct SimpleRenderer {
    store: Arc<dyn TemplateStore>,
}

impl SimpleRenderer {
    pub fn new(store: Arc<dyn TemplateStore>) -> Self {
        Self { store }
    }
}

impl TemplateRenderer for SimpleRenderer {
    #[instrument(skip(self, context))]
    fn render(&self, template_id: &str, context: &TemplateContext) -> ForgeResult<String> {
        let source = self.store.get(template_id)?;
        let rendered = context.render(&source);
        debug!(bytes = rendered.len(), "rendered template");
        Ok(rendered)
    }
}
