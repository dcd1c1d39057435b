use std::{net::SocketAddr, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use puppy_bowl_rs::models::{NewPlayer, Player, Team};
use serde_json::json;
use tokio::{sync::RwLock, task::JoinHandle};

/// In-memory stand-in for the remote Puppy Bowl API. Records every call per
/// operation so tests can assert on call counts and ordering.
#[derive(Default)]
pub struct ApiState {
    pub players: Vec<Player>,
    pub next_id: i64,
    pub call_log: Vec<String>,
}

impl ApiState {
    fn log_call(&mut self, op: &str) {
        self.call_log.push(op.to_string());
    }
}

pub struct PuppyBowlServer {
    port: u16,
    handle: Option<JoinHandle<()>>,
    pub api_state: Arc<RwLock<ApiState>>,
}

impl Drop for PuppyBowlServer {
    fn drop(&mut self) {
        if let Some(handle) = &self.handle {
            handle.abort();
        }
    }
}

impl PuppyBowlServer {
    pub fn new(port: u16) -> PuppyBowlServer {
        PuppyBowlServer {
            port,
            handle: None,
            api_state: Arc::new(RwLock::new(ApiState { next_id: 1, ..Default::default() })),
        }
    }

    pub async fn start(&mut self) {
        let state = self.api_state.clone();
        let port = self.port;
        self.handle = Some(tokio::spawn(async move {
            PuppyBowlServer::serve(state, port).await
        }));
        tokio::time::sleep(std::time::Duration::from_millis(200)).await; // wait for mock to start
    }

    pub fn players_url(&self, cohort: &str) -> String {
        format!("http://localhost:{}/api/{}/players", self.port, cohort)
    }

    pub async fn add_player(&self, name: &str, breed: &str, team: Option<&str>) -> i64 {
        let mut state = self.api_state.write().await;
        let id = state.next_id;
        state.next_id += 1;
        state.players.push(Player {
            id,
            name: name.to_string(),
            breed: breed.to_string(),
            imageUrl: format!("http://img/{id}.jpg"),
            team: team.map(|name| Team { name: name.to_string() }),
        });
        id
    }

    pub async fn call_count(&self, op: &str) -> usize {
        self.api_state.read().await.call_log.iter().filter(|e| e.as_str() == op).count()
    }

    pub async fn clear_call_log(&self) {
        self.api_state.write().await.call_log.clear();
    }

    async fn serve(state: Arc<RwLock<ApiState>>, port: u16) {
        let addr = SocketAddr::from(([127, 0, 0, 1], port));
        let app = Router::new()
            .route("/api/:cohort/players", get(PuppyBowlServer::list_players).post(PuppyBowlServer::create_player))
            .route("/api/:cohort/players/:id", get(PuppyBowlServer::get_player).delete(PuppyBowlServer::delete_player))
            .with_state(state);

        axum::Server::bind(&addr)
            .serve(app.into_make_service())
            .await
            .unwrap();
    }

    async fn list_players(State(state): State<Arc<RwLock<ApiState>>>) -> impl IntoResponse {
        let mut state = state.write().await;
        state.log_call("list");
        Json(json!({ "success": true, "data": { "players": &state.players } }))
    }

    async fn get_player(
        Path((_cohort, id)): Path<(String, i64)>,
        State(state): State<Arc<RwLock<ApiState>>>,
    ) -> impl IntoResponse {
        let mut state = state.write().await;
        state.log_call("get");
        match state.players.iter().find(|e| e.id == id) {
            Some(player) => Json(json!({ "success": true, "data": { "player": player } })).into_response(),
            None => (StatusCode::NOT_FOUND, format!("No player with id {id}")).into_response(),
        }
    }

    async fn create_player(
        Path(_cohort): Path<String>,
        State(state): State<Arc<RwLock<ApiState>>>,
        Json(payload): Json<NewPlayer>,
    ) -> impl IntoResponse {
        let mut state = state.write().await;
        state.log_call("create");
        let id = state.next_id;
        state.next_id += 1;
        let player = Player {
            id,
            name: payload.name,
            breed: payload.breed,
            imageUrl: payload.imageUrl,
            team: payload.team,
        };
        state.players.push(player.clone());
        Json(player)
    }

    async fn delete_player(
        Path((_cohort, id)): Path<(String, i64)>,
        State(state): State<Arc<RwLock<ApiState>>>,
    ) -> impl IntoResponse {
        let mut state = state.write().await;
        state.log_call("delete");
        let before = state.players.len();
        state.players.retain(|e| e.id != id);
        if state.players.len() < before {
            Json(json!({ "ok": true })).into_response()
        } else {
            (StatusCode::NOT_FOUND, Json(json!({ "ok": false }))).into_response()
        }
    }
}
