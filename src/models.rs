use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub name: String,
}

/// A roster entry as returned by the remote API. Field names follow the wire
/// format.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub breed: String,
    #[serde(default)]
    pub imageUrl: String,
    #[serde(default)]
    pub team: Option<Team>,
}

/// Create payload, the id is assigned server-side.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct NewPlayer {
    pub name: String,
    pub breed: String,
    pub imageUrl: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<Team>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PlayersData {
    pub players: Vec<Player>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PlayersRsp {
    pub data: PlayersData,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PlayerData {
    pub player: Player,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PlayerRsp {
    pub data: PlayerData,
}
