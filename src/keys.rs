use crate::app::{App, MenuItem, Modal};
use crate::state::fixture::Side;
use crate::state::form::FormField;
use crate::state::messages::NetworkRequest;
use crossterm::event::KeyCode::Char;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::{Mutex, mpsc};

pub async fn handle_key_bindings(
    key_event: KeyEvent,
    app: &Arc<Mutex<App>>,
    network_requests: &mpsc::Sender<NetworkRequest>,
) {
    let mut guard = app.lock().await;
    let mut outgoing: Vec<NetworkRequest> = Vec::new();

    // An open modal owns the keyboard.
    match guard.modal {
        Modal::Form(_) => handle_form_keys(&mut guard, key_event, &mut outgoing),
        Modal::ConfirmDelete { .. } => handle_confirm_keys(&mut guard, key_event, &mut outgoing),
        Modal::None => handle_board_keys(&mut guard, key_event, &mut outgoing),
    }

    drop(guard);
    for request in outgoing {
        let _ = network_requests.send(request).await;
    }
}

fn handle_board_keys(app: &mut App, key_event: KeyEvent, outgoing: &mut Vec<NetworkRequest>) {
    match (app.active_tab, key_event.code, key_event.modifiers) {
        // Quit
        (_, Char('q'), _) | (_, Char('c'), KeyModifiers::CONTROL) => {
            crate::cleanup_terminal();
            std::process::exit(0);
        }

        (_, Char('?'), _) => app.update_tab(MenuItem::Help),
        (MenuItem::Help, KeyCode::Esc, _) => app.exit_help(),

        // Board navigation
        (MenuItem::Board, KeyCode::Tab, _) => app.cycle_panel(),
        (MenuItem::Board, Char('j') | KeyCode::Down, _) => app.select_down(),
        (MenuItem::Board, Char('k') | KeyCode::Up, _) => app.select_up(),

        // Match operations
        (MenuItem::Board, Char('n'), _) => app.open_create_form(),
        (MenuItem::Board, Char('e') | KeyCode::Enter, _) => {
            outgoing.extend(app.open_edit_form());
        }
        (MenuItem::Board, Char('d'), _) => app.open_delete_confirm(),
        (MenuItem::Board, Char('r'), _) => outgoing.push(app.start_refresh()),
        (MenuItem::Board, Char('p'), _) => app.export_fixture(),

        // Date filter
        (MenuItem::Board, Char('w'), _) => app.set_week_shortcut(),
        (MenuItem::Board, Char('m'), _) => app.set_month_shortcut(),
        (MenuItem::Board, Char('f'), _) => outgoing.extend(app.apply_filter()),
        (MenuItem::Board, Char('x'), _) => outgoing.push(app.clear_filter()),
        (MenuItem::Board, Char('['), _) => app.adjust_window_start(-1),
        (MenuItem::Board, Char(']'), _) => app.adjust_window_start(1),
        (MenuItem::Board, Char('{'), _) => app.adjust_window_end(-1),
        (MenuItem::Board, Char('}'), _) => app.adjust_window_end(1),

        // Global toggles
        (_, Char('F'), _) => app.toggle_full_screen(),
        (_, Char('"'), _) => app.toggle_show_logs(),

        _ => {}
    }
}

fn handle_confirm_keys(app: &mut App, key_event: KeyEvent, outgoing: &mut Vec<NetworkRequest>) {
    match key_event.code {
        Char('y') | KeyCode::Enter => outgoing.extend(app.confirm_delete()),
        Char('n') | KeyCode::Esc => app.close_modal(),
        _ => {}
    }
}

fn handle_form_keys(app: &mut App, key_event: KeyEvent, outgoing: &mut Vec<NetworkRequest>) {
    match key_event.code {
        KeyCode::Esc => {
            app.close_modal();
            return;
        }
        KeyCode::Enter => {
            outgoing.extend(app.submit_form());
            return;
        }
        KeyCode::Tab => {
            if let Modal::Form(form) = &mut app.modal {
                form.focus_next();
            }
            return;
        }
        KeyCode::BackTab => {
            if let Modal::Form(form) = &mut app.modal {
                form.focus_prev();
            }
            return;
        }
        _ => {}
    }

    // Field-level input. Destructure for disjoint borrows: the pickers read
    // the team list and rosters out of the store while mutating the form.
    let App { modal, store, .. } = app;
    let Modal::Form(form) = modal else { return };

    let code = key_event.code;
    let left = matches!(code, KeyCode::Left | Char('h'));
    let right = matches!(code, KeyCode::Right | Char('l'));

    match form.focus {
        FormField::HomeTeam if left || right => form.cycle_team(Side::Home, &store.teams, right),
        FormField::AwayTeam if left || right => form.cycle_team(Side::Away, &store.teams, right),
        FormField::Venue if left || right => form.cycle_venue(right),
        FormField::Status if left || right => form.cycle_status(right),

        FormField::Kickoff | FormField::CustomVenue => match code {
            Char(c) => form.input_char(c),
            KeyCode::Backspace => form.backspace(),
            _ => {}
        },

        FormField::HomeScore | FormField::AwayScore => match code {
            Char(c) if c.is_ascii_digit() => form.input_char(c),
            KeyCode::Backspace => form.backspace(),
            _ => {}
        },

        FormField::HomeScorers | FormField::AwayScorers => {
            let side = if form.focus == FormField::HomeScorers { Side::Home } else { Side::Away };
            let roster = match side {
                Side::Home => &store.home_roster,
                Side::Away => &store.away_roster,
            };
            let cursor = form.scorer_cursor;
            match code {
                Char('a') => form.add_scorer(side),
                Char('x') | KeyCode::Delete => form.remove_scorer(side, cursor),
                Char('j') | KeyCode::Down => {
                    let last = form.scorer_rows(side).len().saturating_sub(1);
                    form.scorer_cursor = (cursor + 1).min(last);
                }
                Char('k') | KeyCode::Up => form.scorer_cursor = cursor.saturating_sub(1),
                Char('h') | KeyCode::Left => form.cycle_scorer_player(side, cursor, roster, false),
                Char('l') | KeyCode::Right => form.cycle_scorer_player(side, cursor, roster, true),
                Char('+') | Char('=') => form.adjust_goals(side, cursor, 1),
                Char('-') => form.adjust_goals(side, cursor, -1),
                _ => {}
            }
        }

        _ => {}
    }
}
