use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use speaker_client::HttpSpeakerClient;
use speaker_config::AppConfig;
use std::io;
use std::sync::Arc;
use std::time::Duration;

mod actions;
mod dispatcher;
mod keymap;
mod logger;
mod middleware;
mod reducers;
mod session;
mod state;
mod store;
#[cfg(test)]
mod test_fixtures;
mod view_models;
mod views;

use keymap::Keymap;
use session::SpeakerSession;
use view_models::SpeakerTableViewModel;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before anything reads the environment
    dotenvy::dotenv().ok();

    let log_file = logger::init()?;
    log::info!("Starting speaker-directory (log file {})", log_file.display());

    let config = AppConfig::load();
    let client = HttpSpeakerClient::new(config.api_base_url.clone(), config.request_timeout())?;
    log::info!("Using speakers API at {}", client.base_url());

    let mut session = SpeakerSession::new(&config, Arc::new(client));
    session.start();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut session, &keymap::default_keymap());

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        log::error!("Exiting with error: {}", err);
    }

    log::info!("Exiting speaker-directory");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    session: &mut SpeakerSession,
    keymap: &Keymap,
) -> anyhow::Result<()> {
    loop {
        // Pick up results of background fetches and updates
        session.process_pending();

        let visible = session.visible_speakers();
        let vm = SpeakerTableViewModel::from_state(session.state(), &visible);
        terminal.draw(|frame| {
            let area = frame.area();
            views::render(&vm, area, frame);
        })?;

        if !session.state().ui.running {
            break;
        }

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                let action = keymap
                    .command_for(&key)
                    .and_then(|command| command.to_action(session.state(), &visible));
                if let Some(action) = action {
                    session.dispatch(action);
                }
            }
        }
    }

    Ok(())
}
