use std::sync::Arc;

use crate::assistant::AssistantClient;
use crate::config::Config;
use crate::feed::PostStore;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Loaded once at startup; read-only for the process lifetime.
    pub store: Arc<PostStore>,
    pub assistant: Arc<AssistantClient>,
}

impl AppState {
    pub fn new(config: Config, store: PostStore) -> Self {
        let assistant = AssistantClient::new(&config.assistant);
        Self {
            config,
            store: Arc::new(store),
            assistant: Arc::new(assistant),
        }
    }
}
