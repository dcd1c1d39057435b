use crate::app_state::SafeAppState;
use crate::models::{NewPlayer, Player};
use crate::renderer::{self, Surface};
use crate::roster_client::RosterClient;

/// The data-synchronization cycle: fetch from the roster API, store into the
/// application state, render the result. Every mutation is followed by a
/// full collection re-fetch rather than an optimistic local patch, so the
/// view eventually reflects server state after the next successful list
/// call.
pub struct RosterService {
    client: RosterClient,
    state: SafeAppState,
}

impl RosterService {
    pub fn new(client: RosterClient, state: SafeAppState) -> RosterService {
        RosterService { client, state }
    }

    pub fn state(&self) -> SafeAppState {
        self.state.clone()
    }

    /// List call. On success the fetched roster replaces the cached one and
    /// list mode is rendered. On failure the state and view are left
    /// untouched.
    pub async fn fetch_all_players<S: Surface>(&self, surface: &mut S) -> Option<Vec<Player>> {
        let players = self.client.list_players().await?;
        self.state.write().await.all_players = players.clone();
        surface.replace_main(renderer::render_all_players(&players));
        Some(players)
    }

    /// Get-one call for the given id, rendering detail mode on success.
    pub async fn fetch_single_player<S: Surface>(&self, player_id: i64, surface: &mut S) -> Option<Player> {
        let player = self.client.get_player(player_id).await?;
        self.state.write().await.single_player = Some(player.clone());
        surface.replace_main(renderer::render_single_player(&player));
        Some(player)
    }

    /// Create call, followed by a full list refresh on success. Returns the
    /// created record as echoed by the server.
    pub async fn add_new_player<S: Surface>(&self, payload: &NewPlayer, surface: &mut S) -> Option<Player> {
        let created = self.client.create_player(payload).await?;
        _ = self.fetch_all_players(surface).await;
        Some(created)
    }

    /// Delete call. An OK response triggers a full list refresh; a failed
    /// delete leaves the view unchanged.
    pub async fn remove_player<S: Surface>(&self, player_id: i64, surface: &mut S) {
        if self.client.delete_player(player_id).await {
            _ = self.fetch_all_players(surface).await;
        }
    }
}
