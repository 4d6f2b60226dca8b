//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::Resolver;

/// Application state shared by both listeners.
///
/// Cheap to clone: holds only an `Arc` to the resolver.
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<Resolver>,
}

impl AppState {
    pub fn new(resolver: Arc<Resolver>) -> Self {
        Self { resolver }
    }
}
