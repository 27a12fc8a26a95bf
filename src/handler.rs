// ============================================================================
// Gestion des événements : clavier -> état
// ============================================================================
// CONCEPT : Event Handler Pattern
// - Sépare la logique de gestion des événements de la boucle principale
// - Modifie l'état de App selon l'événement, de façon synchrone
// - Le rendu suivant relit simplement l'état (pas d'observateur caché)
//
// Priorités :
// 1. 'q' : quit en deux temps (toute autre touche annule)
// 2. Onglets : '1'..'5', Tab, Shift+Tab (toujours actifs)
// 3. Modal ouvert : seul Esc/Enter le ferme, le reste est ignoré
// 4. Accueil : période, ajout, actions rapides, défilement
// ============================================================================

use tracing::{debug, info};

use crate::app::App;
use crate::screens::HomeAction;
use crate::ui::events::{
    is_add_event, is_down_event, is_enter_event, is_escape_event, is_next_tab_event,
    is_next_timeframe_event, is_previous_tab_event, is_previous_timeframe_event, is_quit_event,
    is_up_event, order_action_from_event, tab_index_from_event, Event,
};

/// Traite un événement et met à jour l'état de l'application
pub fn handle_event(app: &mut App, event: &Event) {
    if let Event::Tick = event {
        return;
    }

    // Touche 'q' : confirmation en deux temps
    if is_quit_event(event) {
        if app.is_awaiting_quit_confirmation() {
            info!("User confirmed quit");
            app.quit();
        } else {
            info!("User requested quit (awaiting confirmation)");
            app.request_quit();
        }
        return;
    }

    // Toute autre touche annule une demande de quit en attente
    app.cancel_quit();

    // Navigation entre onglets
    if let Some(index) = tab_index_from_event(event) {
        app.select_tab_index(index);
        return;
    }
    if is_next_tab_event(event) {
        app.next_tab();
        return;
    }
    if is_previous_tab_event(event) {
        app.previous_tab();
        return;
    }

    // Le modal capture toutes les autres touches
    if app.is_modal_open() {
        if is_escape_event(event) || is_enter_event(event) {
            debug!("User dismissed add modal");
            app.dispatch_home(HomeAction::CloseAddModal);
        }
        return;
    }

    if !app.is_on_home() {
        return;
    }

    if let Some(action) = home_action(event) {
        app.dispatch_home(action);
    }
}

/// Traduit une touche en action de l'écran d'accueil
fn home_action(event: &Event) -> Option<HomeAction> {
    if is_next_timeframe_event(event) {
        Some(HomeAction::NextTimeframe)
    } else if is_previous_timeframe_event(event) {
        Some(HomeAction::PreviousTimeframe)
    } else if is_add_event(event) {
        info!("User opened add modal");
        Some(HomeAction::OpenAddModal)
    } else if is_up_event(event) {
        Some(HomeAction::ScrollUp)
    } else if is_down_event(event) {
        Some(HomeAction::ScrollDown)
    } else {
        order_action_from_event(event).map(HomeAction::QuickAction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Timeframe;
    use crate::screens::Tab;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, &Event::Key(KeyEvent::new(code, KeyModifiers::empty())));
    }

    #[test]
    fn test_two_step_quit() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.is_running());
        assert!(app.is_awaiting_quit_confirmation());

        press(&mut app, KeyCode::Char('q'));
        assert!(!app.is_running());
    }

    #[test]
    fn test_other_key_cancels_quit() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('q'));
        press(&mut app, KeyCode::Char('j'));
        assert!(!app.is_awaiting_quit_confirmation());
        press(&mut app, KeyCode::Char('q'));
        assert!(app.is_running());
    }

    #[test]
    fn test_tick_changes_nothing() {
        let mut app = App::default();
        app.request_quit();
        handle_event(&mut app, &Event::Tick);
        assert!(app.is_awaiting_quit_confirmation());
    }

    #[test]
    fn test_digit_selects_tab() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.selected_tab(), Tab::Wallet);
        assert_eq!(app.screen().name(), "Wallet");

        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.selected_tab(), Tab::Trade);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.selected_tab(), Tab::Wallet);
    }

    #[test]
    fn test_timeframe_keys() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('l'));
        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.home().unwrap().selected_timeframe, Timeframe::OneMonth);

        press(&mut app, KeyCode::Char('h'));
        assert_eq!(app.home().unwrap().selected_timeframe, Timeframe::OneWeek);
    }

    #[test]
    fn test_modal_open_and_dismiss() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('a'));
        assert!(app.is_modal_open());

        // Le modal capture les touches de l'accueil
        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.home().unwrap().selected_timeframe, Timeframe::OneDay);
        assert!(app.is_modal_open());

        press(&mut app, KeyCode::Esc);
        assert!(!app.is_modal_open());

        press(&mut app, KeyCode::Esc);
        assert!(!app.is_modal_open());
    }

    #[test]
    fn test_modal_discarded_on_tab_switch() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('1'));
        assert!(!app.is_modal_open());
    }

    #[test]
    fn test_quick_action_key() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('b'));
        assert_eq!(
            app.home().unwrap().status.as_deref(),
            Some("Buy requested (no execution service)")
        );
    }

    #[test]
    fn test_home_keys_ignored_on_other_tabs() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.selected_tab(), Tab::Market);
        assert!(!app.is_modal_open());
    }
}
