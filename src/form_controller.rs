use crate::models::{NewPlayer, Team};

/// The raw field values of a submitted creation form, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub breed: String,
    pub imageUrl: String,
    pub team: String,
}

impl FormFields {
    /// Required-field presence is the only validation. The team field is
    /// wrapped as `Team { name }` only when non-empty, else left absent.
    pub fn to_payload(&self) -> Option<NewPlayer> {
        if self.name.trim().is_empty()
            || self.breed.trim().is_empty()
            || self.imageUrl.trim().is_empty() {
            return None;
        }
        let team = match self.team.trim() {
            "" => None,
            name => Some(Team { name: name.to_string() }),
        };
        Some(NewPlayer {
            name: self.name.trim().to_string(),
            breed: self.breed.trim().to_string(),
            imageUrl: self.imageUrl.trim().to_string(),
            team,
        })
    }

    pub fn clear(&mut self) {
        *self = FormFields::default();
    }
}

pub fn render_new_player_form() -> String {
    r#"<form id="new-player-form">
  <input type="text" name="name" placeholder="Player Name" required>
  <input type="text" name="breed" placeholder="Breed" required>
  <input type="url" name="imageUrl" placeholder="Image URL" required>
  <input type="text" name="team" placeholder="Team Name">
  <button type="submit">Add Player</button>
</form>"#.to_string()
}
