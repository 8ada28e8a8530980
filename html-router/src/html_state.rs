use std::sync::Arc;

use common::create_template_engine;
use common::search::SearchStore;
use common::utils::template_engine::{ProvidesTemplateEngine, TemplateEngine};

#[derive(Clone)]
pub struct HtmlState {
    pub search: SearchStore,
    pub templates: Arc<TemplateEngine>,
}

impl HtmlState {
    /// Builds the router state around the shared search store. Tests can
    /// inject their own engine; by default the crate's own template
    /// directory is used.
    pub fn new(search: SearchStore, template_engine: Option<Arc<TemplateEngine>>) -> Self {
        let templates =
            template_engine.unwrap_or_else(|| Arc::new(create_template_engine!("templates")));

        Self { search, templates }
    }
}

impl ProvidesTemplateEngine for HtmlState {
    fn template_engine(&self) -> &Arc<TemplateEngine> {
        &self.templates
    }
}
