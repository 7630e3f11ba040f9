use std::sync::Arc;

/// Application state shared across handlers.
///
/// The site is fully static, so the index document is rendered once at
/// startup and shared here.
#[derive(Clone)]
pub struct AppState {
    pub index_html: Arc<String>,
}

impl AppState {
    #[must_use]
    pub fn new(index_html: String) -> Self {
        Self {
            index_html: Arc::new(index_html),
        }
    }
}
