// src/state.rs
use std::sync::Arc;

use crate::services::model::TextModel;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub model: Arc<dyn TextModel>,
}

impl AppState {
    pub fn new(model: Arc<dyn TextModel>) -> Self {
        Self { model }
    }
}
