// ============================================================================
// OnyxTrading - Point d'entrée
// ============================================================================
// Programme TUI : portefeuille crypto, watchlist, actions rapides, news
// Toutes les données viennent des services mock (aucun appel réseau)
//
// CONCEPTS RUST CLÉS :
// 1. Terminal raw mode : contrôle total du terminal
// 2. Event loop : boucle qui gère événements et rendering
// 3. Un seul thread : chaque touche modifie l'état puis on redessine tout
// ============================================================================

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{debug, error, info, warn};

use onyxtrading::app::App;
use onyxtrading::config::{Config, APP_DIR};
use onyxtrading::handler::handle_event;
use onyxtrading::services::Services;
use onyxtrading::ui::{render, EventHandler};

// ============================================================================
// Initialisation du logging
// ============================================================================
// CONCEPT : Logging dans une app TUI
// - Les println! ne fonctionnent pas une fois le TUI lancé
// - On log vers un fichier à la place
// - Rotation quotidienne automatique des logs
// ============================================================================

/// Dossier des logs
///
/// - Linux/WSL : ~/.local/share/onyxtrading/logs/
/// - macOS : ~/Library/Application Support/onyxtrading/logs/
/// - Sinon : ./logs
fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join(APP_DIR).join("logs"))
        .unwrap_or_else(|| PathBuf::from("./logs"))
}

/// Initialise le système de logging vers fichier
///
/// CONCEPT RUST : Tracing subscriber
/// - Registry : point central des logs
/// - Layer : transforme et route les logs
/// - EnvFilter : filtre par niveau (RUST_LOG, sinon `default_filter`)
/// - RollingFileAppender : rotation automatique
fn init_logging(default_filter: &str) -> Result<()> {
    use tracing_appender::rolling::{RollingFileAppender, Rotation};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let log_dir = log_dir();
    std::fs::create_dir_all(&log_dir).context("Échec de la création du répertoire de logs")?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir.clone(), "onyxtrading.log");

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false) // Pas de codes couleur dans le fichier
                .with_target(true)
                .with_thread_ids(true)
                .with_line_number(true),
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .try_init()
        .context("Échec de l'initialisation du subscriber tracing")?;

    info!(?log_dir, "Logging initialisé");
    Ok(())
}

// ============================================================================
// Point d'entrée du programme
// ============================================================================

fn main() -> Result<()> {
    // La config est lue avant le logging (elle fournit le filtre par défaut) ;
    // son éventuelle erreur est rapportée une fois le logging en place.
    let (config, config_error) = Config::load();

    match init_logging(&config.log_filter) {
        Ok(()) => {
            if let Some(e) = &config_error {
                warn!(error = ?e, "Failed to load config, using defaults");
            }
        }
        Err(e) => {
            eprintln!("⚠️  Warning: Failed to initialize logging: {:#}", e);
            eprintln!("   Continuing without logging...");
            if let Some(e) = &config_error {
                eprintln!("⚠️  Warning: {:#} (using defaults)", e);
            }
        }
    }

    info!(
        tick_rate_ms = config.tick_rate_ms,
        timeframe = %config.default_timeframe,
        watchlist = config.watchlist.len(),
        "OnyxTrading starting up"
    );

    let mut app = App::new(Services::mock(), config.screen_settings());
    let events = EventHandler::new(config.tick_rate());

    debug!("Setting up terminal");
    let mut terminal = setup_terminal()?;

    info!("Starting event loop");
    let result = run(&mut terminal, &mut app, &events);

    // Restaure le terminal (même en cas d'erreur)
    debug!("Restoring terminal");
    restore_terminal(&mut terminal)?;

    match &result {
        Ok(_) => info!("Application exited normally"),
        Err(e) => error!(error = ?e, "Application exited with error"),
    }

    result
}

// ============================================================================
// Event Loop Principal
// ============================================================================
// CONCEPT : Event Loop Pattern
// - À chaque itération :
//   1. Dessiner l'interface à partir de l'état (render)
//   2. Attendre un événement et l'appliquer à l'état (input)
// - Aucun état n'est modifié ailleurs que dans handle_event
// ============================================================================

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    while app.is_running() {
        terminal
            .draw(|frame| render(frame, app))
            .context("Échec du rendu")?;

        let event = events.next().context("Échec de lecture des événements")?;
        handle_event(app, &event);
    }

    Ok(())
}

// ============================================================================
// Setup et restauration du terminal
// ============================================================================
// IMPORTANT : Toujours restaurer le terminal avant de quitter !
// ============================================================================

/// Configure le terminal en mode TUI
fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Impossible d'activer le raw mode")?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).context("Impossible de créer le terminal")
}

/// Restaure le terminal à son état normal
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}
