use tokio::sync::mpsc::Receiver;
use tracing::log;

use crate::form_controller::{self, FormFields};
use crate::renderer::Surface;
use crate::roster_service::RosterService;
use crate::LogResult;

/// User interactions arriving from the rendered surface. Identifiers carry
/// the raw data-attribute strings and are parsed at this boundary.
#[derive(Debug, Clone)]
pub enum UiEvent {
    Details { player_id: String },
    Remove { player_id: String },
    Back,
    Submit { fields: FormFields },
}

pub struct UiService;

impl UiService {
    /// Single event loop, one interaction at a time. In-flight requests have
    /// no ordering guarantee, de-duplication or cancellation.
    pub async fn run<S: Surface>(
        mut receiver: Receiver<UiEvent>,
        service: &RosterService,
        surface: &mut S,
    ) {
        while let Some(event) = receiver.recv().await {
            UiService::handle(event, service, surface).await;
        }
        log::info!("[UI] Event channel closed");
    }

    pub async fn handle<S: Surface>(event: UiEvent, service: &RosterService, surface: &mut S) {
        match event {
            UiEvent::Details { player_id } => {
                if let Some(id) = parse_player_id(&player_id) {
                    _ = service.fetch_single_player(id, surface).await;
                }
            }
            UiEvent::Remove { player_id } => {
                if let Some(id) = parse_player_id(&player_id) {
                    service.remove_player(id, surface).await;
                }
            }
            UiEvent::Back => {
                _ = service.fetch_all_players(surface).await;
            }
            UiEvent::Submit { mut fields } => match fields.to_payload() {
                Some(payload) => {
                    _ = service.add_new_player(&payload, surface).await;
                    fields.clear();
                    surface.replace_form(form_controller::render_new_player_form());
                }
                None => log::error!("[FORM] Submit rejected, missing required fields"),
            },
        }
    }
}

/// Surface ids are untyped input. Unparseable ids are logged and dropped.
pub fn parse_player_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok_log("[UI] Invalid player id")
}
