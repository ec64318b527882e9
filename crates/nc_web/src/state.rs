use std::sync::Arc;

use nc_inference::ChatService;

pub struct AppState {
    pub chat: Arc<dyn ChatService>,
}
