use std::sync::Arc;

use crate::api::ApiClient;
use crate::config::Config;
use crate::store::FileStore;

/// Shared application state handed to every CLI command.
#[derive(Clone)]
pub struct AppState {
    pub api: ApiClient,
    pub store: Arc<FileStore>,
    pub config: Config,
}
