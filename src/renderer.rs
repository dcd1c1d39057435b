use crate::models::Player;

/// Host display abstraction: one main content target and one form container
/// target. Both are replace-only, prior content never survives a render.
pub trait Surface {
    fn replace_main(&mut self, html: String);
    fn replace_form(&mut self, html: String);
}

#[derive(Debug, Default)]
pub struct InMemorySurface {
    pub main: String,
    pub form: String,
}

impl Surface for InMemorySurface {
    fn replace_main(&mut self, html: String) {
        self.main = html;
    }

    fn replace_form(&mut self, html: String) {
        self.form = html;
    }
}

/// List mode. An empty roster is a terminal rendering state, not an error.
pub fn render_all_players(players: &[Player]) -> String {
    if players.is_empty() {
        return "<p>No players were found. Try again.</p>".to_string();
    }
    players.iter()
        .map(render_player_card)
        .collect::<Vec<String>>()
        .join("\n")
}

fn render_player_card(player: &Player) -> String {
    format!(r#"<div class="player-card">
  <h2>{name}</h2>
  <p>ID: {id}</p>
  <img src="{image}" alt="{name}">
  <button class="details-button" data-id="{id}">See details</button>
  <button class="remove-button" data-id="{id}">Remove from roster</button>
</div>"#,
        name = player.name,
        id = player.id,
        image = player.imageUrl,
    )
}

/// Detail mode. An absent team renders as text, not omitted.
pub fn render_single_player(player: &Player) -> String {
    let team_name = player.team.as_ref()
        .map(|t| t.name.as_str())
        .unwrap_or("Unassigned");
    format!(r#"<div class="player-card">
  <h2>{name}</h2>
  <p>ID: {id}</p>
  <p>Breed: {breed}</p>
  <img src="{image}" alt="{name}">
  <p>Team: {team}</p>
  <button id="back-button">Back to all players</button>
</div>"#,
        name = player.name,
        id = player.id,
        breed = player.breed,
        image = player.imageUrl,
        team = team_name,
    )
}
