use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::Player;

/// Client-held cache of the most recently fetched roster data. Passed
/// explicitly to the services that read and write it, there is no
/// module-level singleton. Reflects the last successful fetch only, never
/// guaranteed consistent with the server at any instant.
#[derive(Debug, Default)]
pub struct AppState {
    pub all_players: Vec<Player>,
    pub single_player: Option<Player>,
}

pub type SafeAppState = Arc<RwLock<AppState>>;

impl AppState {
    pub fn new() -> SafeAppState {
        Arc::new(RwLock::new(AppState::default()))
    }
}
