use puppy_bowl_rs::app_state::AppState;
use puppy_bowl_rs::form_controller::{self, FormFields};
use puppy_bowl_rs::renderer::Surface;
use puppy_bowl_rs::roster_client::RosterClient;
use puppy_bowl_rs::roster_service::RosterService;
use puppy_bowl_rs::ui_service::{UiEvent, UiService};
use puppy_bowl_rs::config_handler;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::{self, Sender};
use tracing::log;

/// Terminal host: the replacement targets are printed to stdout.
struct TerminalSurface;

impl Surface for TerminalSurface {
    fn replace_main(&mut self, html: String) {
        println!("{html}");
    }

    fn replace_form(&mut self, html: String) {
        println!("{html}");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        // Set the RUST_LOG, if it hasn't been explicitly defined
        std::env::set_var("RUST_LOG", "info")
    }

    // Configure a custom event formatter
    let format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_target(false)
        .with_ansi(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .compact();
    tracing_subscriber::fmt()
        .event_format(format)
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = config_handler::get_config()?;
    let client = RosterClient::new(&config.players_url());
    let service = RosterService::new(client, AppState::new());
    let mut surface = TerminalSurface;

    _ = service.fetch_all_players(&mut surface).await;
    surface.replace_form(form_controller::render_new_player_form());

    let (sender, receiver) = mpsc::channel(100);
    let input = tokio::spawn(async move { read_commands(sender).await });
    UiService::run(receiver, &service, &mut surface).await;
    input.abort();
    Ok(())
}

/// Reads interactions from stdin until EOF or `quit`. Dropping the sender
/// ends the UI event loop.
async fn read_commands(sender: Sender<UiEvent>) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        let line = line.trim();
        if line == "quit" {
            break;
        }
        match parse_command(line) {
            Some(event) => {
                if sender.send(event).await.is_err() {
                    break;
                }
            }
            None => log::error!("[UI] Unknown command: {line}"),
        }
    }
}

/// Commands: `details <id>`, `remove <id>`, `back`,
/// `add <name>;<breed>;<imageUrl>[;<team>]`.
fn parse_command(line: &str) -> Option<UiEvent> {
    match line.split_once(' ') {
        None if line == "back" => Some(UiEvent::Back),
        Some(("details", id)) => Some(UiEvent::Details { player_id: id.to_string() }),
        Some(("remove", id)) => Some(UiEvent::Remove { player_id: id.to_string() }),
        Some(("add", rest)) => {
            let mut parts = rest.split(';').map(str::trim);
            let fields = FormFields {
                name: parts.next().unwrap_or_default().to_string(),
                breed: parts.next().unwrap_or_default().to_string(),
                imageUrl: parts.next().unwrap_or_default().to_string(),
                team: parts.next().unwrap_or_default().to_string(),
            };
            Some(UiEvent::Submit { fields })
        }
        _ => None,
    }
}
