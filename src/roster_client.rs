use std::time::Instant;

use serde::de::DeserializeOwned;
use tracing::log;

use crate::models::{NewPlayer, Player, PlayerRsp, PlayersRsp};
use crate::LogResult;

/// The four HTTP operations against the roster API. Every call catches
/// transport and parse failures at this boundary: the error is logged and
/// the caller sees `None` (or `false` for delete), nothing is re-raised.
/// `None` means failure, `Some(vec![])` means a successful empty fetch.
pub struct RosterClient {
    players_url: String,
}

impl RosterClient {
    pub fn new(players_url: &str) -> RosterClient {
        RosterClient { players_url: players_url.to_string() }
    }

    pub async fn list_players(&self) -> Option<Vec<Player>> {
        let rsp: Option<PlayersRsp> = get_call(&self.players_url).await;
        rsp.map(|e| e.data.players)
    }

    pub async fn get_player(&self, player_id: i64) -> Option<Player> {
        let url = format!("{}/{}", self.players_url, player_id);
        let rsp: Option<PlayerRsp> = get_call(&url).await;
        rsp.map(|e| e.data.player)
    }

    pub async fn create_player(&self, payload: &NewPlayer) -> Option<Player> {
        let before = Instant::now();
        let rsp = reqwest::Client::new()
            .post(&self.players_url)
            .json(payload)
            .send()
            .await
            .ok_log("[API] Create call failed")?;
        let res = rsp.json().await.ok_log("[API] Create parse failed");
        log::info!("[REST] POST {} {:.2?}", self.players_url, before.elapsed());
        res
    }

    /// `true` iff the server answered with an OK status. Non-OK and network
    /// failures both log and produce `false`.
    pub async fn delete_player(&self, player_id: i64) -> bool {
        let url = format!("{}/{}", self.players_url, player_id);
        let before = Instant::now();
        match reqwest::Client::new().delete(&url).send().await {
            Ok(rsp) if rsp.status().is_success() => {
                log::info!("[REST] DELETE {url} {:.2?}", before.elapsed());
                true
            }
            Ok(rsp) => {
                log::error!("[API] Failed to remove player #{player_id}: {}", rsp.status());
                false
            }
            Err(e) => {
                log::error!("[API] Failed to remove player #{player_id}: {e}");
                false
            }
        }
    }
}

async fn get_call<T: DeserializeOwned>(url: &str) -> Option<T> {
    let before = Instant::now();
    if let Some(rsp) = reqwest::get(url).await.ok_log("[API] Call failed") {
        let res = rsp.json().await.ok_log("[API] Parse failed");
        log::info!("[REST] Call {url} {:.2?}", before.elapsed());
        res
    } else {
        None
    }
}
