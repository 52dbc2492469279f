// ============================================================================
// Gestion des événements
// ============================================================================
// Gère les événements clavier et les ticks de l'application
//
// CONCEPTS RUST :
// 1. Enums avec variants : représenter différents types d'événements
// 2. Pattern matching : associer une touche à une action
// 3. Error handling avec Result
// ============================================================================

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind};

/// Délai maximum d'attente d'un événement avant de produire un Tick
const POLL_TIMEOUT: Duration = Duration::from_millis(250);

/// Événements de l'application
#[derive(Debug, Clone)]
pub enum Event {
    /// Touche pressée
    Key(KeyEvent),

    /// Tick régulier (pas d'entrée pendant POLL_TIMEOUT)
    Tick,
}

/// Gestionnaire d'événements
pub struct EventHandler;

impl EventHandler {
    pub fn new() -> Self {
        Self
    }

    /// Lit le prochain événement (bloquant avec timeout)
    ///
    /// CONCEPT : Non-blocking I/O avec timeout
    /// - poll(timeout) attend max 250ms
    /// - Si pas d'événement, retourne Ok(Event::Tick)
    pub fn next(&self) -> Result<Event> {
        if !event::poll(POLL_TIMEOUT)? {
            return Ok(Event::Tick);
        }

        match event::read()? {
            // Sur certains OS, on reçoit Press ET Release : on ne garde que Press
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Ok(Event::Key(key)),
            // Autres événements (resize, mouse, release...) : le prochain rendu suffit
            _ => Ok(Event::Tick),
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Helpers : Convertir KeyEvent en action
// ============================================================================

/// Vérifie si le code de touche de l'événement satisfait le prédicat
fn key_matches(event: &Event, predicate: impl Fn(KeyCode) -> bool) -> bool {
    if let Event::Key(key) = event {
        predicate(key.code)
    } else {
        false
    }
}

/// 'q' : quitter (two-step)
pub fn is_quit_event(event: &Event) -> bool {
    key_matches(event, |code| matches!(code, KeyCode::Char('q') | KeyCode::Char('Q')))
}

pub fn is_escape_event(event: &Event) -> bool {
    key_matches(event, |code| matches!(code, KeyCode::Esc))
}

pub fn is_space_event(event: &Event) -> bool {
    key_matches(event, |code| matches!(code, KeyCode::Char(' ')))
}

pub fn is_enter_event(event: &Event) -> bool {
    key_matches(event, |code| matches!(code, KeyCode::Enter))
}

/// Tab : onglet suivant
pub fn is_next_tab_event(event: &Event) -> bool {
    key_matches(event, |code| matches!(code, KeyCode::Tab))
}

/// Shift+Tab : onglet précédent
pub fn is_previous_tab_event(event: &Event) -> bool {
    key_matches(event, |code| matches!(code, KeyCode::BackTab))
}

/// Flèche vers le haut ou 'k' (vim)
pub fn is_up_event(event: &Event) -> bool {
    key_matches(event, |code| matches!(code, KeyCode::Up | KeyCode::Char('k')))
}

/// Flèche vers le bas ou 'j' (vim)
pub fn is_down_event(event: &Event) -> bool {
    key_matches(event, |code| matches!(code, KeyCode::Down | KeyCode::Char('j')))
}

/// Flèche gauche ou 'h' : valeur précédente
pub fn is_left_event(event: &Event) -> bool {
    key_matches(event, |code| matches!(code, KeyCode::Left | KeyCode::Char('h')))
}

/// Flèche droite ou 'l' : valeur suivante
pub fn is_right_event(event: &Event) -> bool {
    key_matches(event, |code| matches!(code, KeyCode::Right | KeyCode::Char('l')))
}

/// '/' : éditer le texte de recherche (comme dans vim/less)
pub fn is_search_event(event: &Event) -> bool {
    key_matches(event, |code| matches!(code, KeyCode::Char('/')))
}

/// 'n' : champ suivant du formulaire
pub fn is_next_field_event(event: &Event) -> bool {
    key_matches(event, |code| matches!(code, KeyCode::Char('n')))
}

/// 'p' : suggestion de recherche populaire
pub fn is_popular_event(event: &Event) -> bool {
    key_matches(event, |code| matches!(code, KeyCode::Char('p')))
}

/// 'f' : ajouter aux favoris
pub fn is_favorite_event(event: &Event) -> bool {
    key_matches(event, |code| matches!(code, KeyCode::Char('f') | KeyCode::Char('F')))
}

/// 'c' : afficher le contexte de la réplique
pub fn is_context_event(event: &Event) -> bool {
    key_matches(event, |code| matches!(code, KeyCode::Char('c') | KeyCode::Char('C')))
}

/// 'd' : supprimer un favori (two-step)
pub fn is_delete_event(event: &Event) -> bool {
    key_matches(event, |code| matches!(code, KeyCode::Char('d') | KeyCode::Char('D')))
}

pub fn is_backspace_event(event: &Event) -> bool {
    key_matches(event, |code| matches!(code, KeyCode::Backspace))
}

/// Extrait le caractère d'un événement clavier si c'est un caractère
pub fn get_char_from_event(event: &Event) -> Option<char> {
    match event {
        Event::Key(KeyEvent {
            code: KeyCode::Char(c),
            ..
        }) => Some(*c),
        _ => None,
    }
}

// ============================================================================
// Tests
// ============================================================================
