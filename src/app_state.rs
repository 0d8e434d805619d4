use std::sync::Arc;

use crate::services::{analysis::AnalysisSettings, vision::VisionProvider};

/// Shared application state passed to all route handlers.
///
/// Immutable after start-up; requests never coordinate through it.
#[derive(Clone)]
pub struct AppState {
    pub vision: Arc<dyn VisionProvider>,
    pub settings: Arc<AnalysisSettings>,
}

impl AppState {
    pub fn new(vision: impl VisionProvider + 'static, settings: AnalysisSettings) -> Self {
        Self {
            vision: Arc::new(vision),
            settings: Arc::new(settings),
        }
    }
}
