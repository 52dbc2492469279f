// ============================================================================
// QuoteFinder - Point d'entrée
// ============================================================================
// Sans sous-commande : dashboard TUI (recherche, analyses, favoris)
// Avec sous-commande : sortie texte/JSON sur stdout puis fin du programme
//
// CONCEPTS RUST CLÉS :
// 1. Terminal raw mode : contrôle total du terminal
// 2. Event loop : boucle qui gère rendu, événements et mise à jour
// 3. Restauration du terminal même quand la boucle échoue
// ============================================================================

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{debug, error, info};

use quotefinder::app::{App, Mode, Tab};
use quotefinder::cli::{run_command, Cli};
use quotefinder::data::sample_corpus;
use quotefinder::engine::QuoteFilterEngine;
use quotefinder::ui::{events::EventHandler, render, Event};

// ============================================================================
// Logging
// ============================================================================

/// Répertoire de logs par défaut : ~/.local/share/quotefinder/logs, sinon ./logs
fn default_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join("quotefinder").join("logs"))
        .unwrap_or_else(|| PathBuf::from("./logs"))
}

/// Initialise le logging dans un fichier à rotation quotidienne
///
/// Le TUI occupe stdout : les logs vont uniquement dans le fichier.
fn init_logging(log_dir: &Path) -> Result<()> {
    use tracing_appender::rolling::{RollingFileAppender, Rotation};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    std::fs::create_dir_all(log_dir).context("Échec de la création du répertoire de logs")?;

    // Rotation::DAILY : quotefinder.log.2024-01-15, quotefinder.log.2024-01-16...
    let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, "quotefinder.log");

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false) // Pas de codes couleur dans le fichier
                .with_target(true)
                .with_line_number(true),
        )
        .with(
            // RUST_LOG=quotefinder=trace pour plus de détails
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quotefinder=debug,info".into()),
        )
        .try_init()
        .context("Échec de l'initialisation du subscriber tracing")?;

    info!(?log_dir, "Logging initialisé");
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logging avant tout le reste ; en cas d'échec on continue sans logs
    let log_dir = cli.log_dir.clone().unwrap_or_else(default_log_dir);
    init_logging(&log_dir).unwrap_or_else(|e| {
        eprintln!("⚠️  Warning: Failed to initialize logging: {}", e);
        eprintln!("   Continuing without logging...");
    });

    let corpus = sample_corpus();
    info!(quotes = corpus.len(), "QuoteFinder starting up");
    let engine = QuoteFilterEngine::new(corpus);

    // Mode ligne de commande : une sortie puis on termine
    if let Some(command) = &cli.command {
        debug!(?command, "Running command");
        let output = run_command(&engine, command)?;
        println!("{output}");
        return Ok(());
    }

    debug!("Setting up terminal");
    let mut terminal = setup_terminal()?;

    let mut app = App::new(engine);
    let events = EventHandler::new();

    info!("Starting event loop");
    let result = run(&mut terminal, &mut app, &events);

    // Restaure le terminal (même en cas d'erreur)
    debug!("Restoring terminal");
    restore_terminal(&mut terminal)?;

    match &result {
        Ok(_) => info!(
            favorites = app.favorites.len(),
            searches = app.history.len(),
            "Application exited normally"
        ),
        Err(e) => error!(error = ?e, "Application exited with error"),
    }

    result
}

// ============================================================================
// Event loop
// ============================================================================

/// Boucle principale : render → input → update, jusqu'à app.quit()
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    while app.is_running() {
        // 1. RENDER
        terminal.draw(|frame| render(frame, app))?;

        // 2. INPUT
        let event = events.next().context("Échec de la lecture des événements")?;
        handle_event(app, event);

        // 3. UPDATE
        app.tick();
    }

    Ok(())
}

// ============================================================================
// Gestion des événements
// ============================================================================

/// Traite un événement et met à jour l'état de l'application
///
/// CONCEPT RUST : Pattern matching avec guards
/// - L'ordre des branches compte : les modes (édition, popup) passent
///   avant les raccourcis globaux, sinon 'q' tapé dans la recherche quitterait
/// - Les raccourcis d'onglet sont filtrés par `app.current_tab`
fn handle_event(app: &mut App, event: Event) {
    use quotefinder::ui::events::{
        get_char_from_event, is_backspace_event, is_context_event, is_delete_event,
        is_down_event, is_enter_event, is_escape_event, is_favorite_event, is_left_event,
        is_next_field_event, is_next_tab_event, is_popular_event, is_previous_tab_event,
        is_quit_event, is_right_event, is_search_event, is_space_event, is_up_event,
    };

    // Les ticks ne touchent ni aux modes ni aux confirmations
    if matches!(event, Event::Tick) {
        return;
    }

    match app.mode {
        // ========================================
        // Mode édition : saisie du texte de recherche
        // ========================================
        Mode::Editing => {
            if is_escape_event(&event) {
                app.cancel_editing();
            } else if is_enter_event(&event) {
                app.submit_editing();
            } else if is_backspace_event(&event) {
                app.backspace();
            } else if let Some(c) = get_char_from_event(&event) {
                app.append_char(c);
            }
            return;
        }

        // ========================================
        // Popup de contexte : seule la fermeture est possible
        // ========================================
        Mode::Context => {
            if is_escape_event(&event) || is_space_event(&event) || is_enter_event(&event) {
                app.close_context();
            }
            return;
        }

        Mode::Normal => {}
    }

    match event {
        // 'q' : quit confirmation two-step
        Event::Key(_) if is_quit_event(&event) => {
            if app.is_awaiting_quit_confirmation() {
                info!("Quit confirmed");
                app.quit();
            } else {
                app.request_quit();
                app.cancel_delete();
            }
        }

        // 'd' dans Favorites : delete confirmation two-step
        Event::Key(_) if is_delete_event(&event) && app.is_on(Tab::Favorites) => {
            app.cancel_quit();
            if app.is_awaiting_delete_confirmation() {
                app.delete_selected_favorite();
            } else if app.selected_favorite().is_some() {
                app.request_delete();
            }
        }

        // Toute autre touche annule les confirmations en attente
        Event::Key(_)
            if app.is_awaiting_quit_confirmation() || app.is_awaiting_delete_confirmation() =>
        {
            app.cancel_quit();
            app.cancel_delete();
        }

        // ========================================
        // Navigation entre onglets
        // ========================================
        Event::Key(_) if is_next_tab_event(&event) => app.next_tab(),
        Event::Key(_) if is_previous_tab_event(&event) => app.previous_tab(),

        // ========================================
        // Listes (résultats ou favoris selon l'onglet)
        // ========================================
        Event::Key(_) if is_up_event(&event) => app.navigate_up(),
        Event::Key(_) if is_down_event(&event) => app.navigate_down(),

        // ========================================
        // Onglet Search
        // ========================================
        Event::Key(_) if is_search_event(&event) && app.is_on(Tab::Search) => app.start_editing(),
        Event::Key(_) if is_enter_event(&event) && app.is_on(Tab::Search) => app.run_search(),
        Event::Key(_) if is_next_field_event(&event) && app.is_on(Tab::Search) => {
            app.focus_next_field()
        }
        Event::Key(_) if is_right_event(&event) && app.is_on(Tab::Search) => app.increase_field(),
        Event::Key(_) if is_left_event(&event) && app.is_on(Tab::Search) => app.decrease_field(),
        Event::Key(_) if is_popular_event(&event) && app.is_on(Tab::Search) => {
            app.next_popular_search()
        }
        Event::Key(_) if is_favorite_event(&event) && app.is_on(Tab::Search) => {
            app.favorite_selected()
        }
        Event::Key(_) if is_context_event(&event) && app.is_on(Tab::Search) => app.show_context(),

        // ========================================
        // Onglet Analysis
        // ========================================
        Event::Key(_) if is_right_event(&event) && app.is_on(Tab::Analysis) => app.next_analysis(),
        Event::Key(_) if is_left_event(&event) && app.is_on(Tab::Analysis) => {
            app.previous_analysis()
        }

        // ========================================
        // Onglet Favorites
        // ========================================
        Event::Key(_)
            if (is_enter_event(&event) || is_context_event(&event)) && app.is_on(Tab::Favorites) =>
        {
            app.show_context()
        }

        _ => {}
    }
}

// ============================================================================
// Terminal
// ============================================================================

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Raw mode : pas d'écho, pas de buffering ligne par ligne
    enable_raw_mode()?;

    // Alternate screen : l'écran précédent est restauré en sortie
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).map_err(|e| e.into())
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
