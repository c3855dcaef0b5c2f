use std::sync::Arc;

use tera::Tera;

use crate::analyzer::SymptomAnalyzer;
use crate::templates;

pub struct WebState {
    pub analyzer: Arc<dyn SymptomAnalyzer>,
    pub templates: Tera,
}

impl WebState {
    pub fn new(analyzer: Arc<dyn SymptomAnalyzer>) -> tera::Result<Self> {
        Ok(Self {
            analyzer,
            templates: templates::load()?,
        })
    }
}
