#![allow(clippy::unwrap_used)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rust_decimal_macros::dec;

use super::*;

fn setup() -> (App, Store) {
    let store = Store::with_demo_data();
    let mut app = App::new("2023-04".parse().unwrap());
    app.refresh_all(&store);
    (app, store)
}

fn press(app: &mut App, store: &mut Store, code: KeyCode) {
    handle_key(KeyEvent::new(code, KeyModifiers::NONE), app, store).unwrap();
}

fn type_str(app: &mut App, store: &mut Store, text: &str) {
    for c in text.chars() {
        press(app, store, KeyCode::Char(c));
    }
}

#[test]
fn test_number_keys_and_tab_switch_screens() {
    let (mut app, mut store) = setup();
    press(&mut app, &mut store, KeyCode::Char('3'));
    assert_eq!(app.screen, Screen::Budgets);
    press(&mut app, &mut store, KeyCode::Tab);
    assert_eq!(app.screen, Screen::Categories);
    press(&mut app, &mut store, KeyCode::Tab);
    assert_eq!(app.screen, Screen::Dashboard);
    press(&mut app, &mut store, KeyCode::BackTab);
    assert_eq!(app.screen, Screen::Categories);
}

#[test]
fn test_ctrl_q_quits() {
    let (mut app, mut store) = setup();
    handle_key(
        KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL),
        &mut app,
        &mut store,
    )
    .unwrap();
    assert!(!app.running);
}

#[test]
fn test_command_mode_runs_command() {
    let (mut app, mut store) = setup();
    press(&mut app, &mut store, KeyCode::Char(':'));
    assert_eq!(app.input_mode, InputMode::Command);
    type_str(&mut app, &mut store, "budget Food 450");
    press(&mut app, &mut store, KeyCode::Enter);
    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(
        store.budget_for("1", app.month).unwrap().amount,
        dec!(450)
    );
}

#[test]
fn test_live_search_and_escape() {
    let (mut app, mut store) = setup();
    press(&mut app, &mut store, KeyCode::Char('/'));
    type_str(&mut app, &mut store, "gro");
    assert_eq!(app.screen, Screen::Transactions);
    assert_eq!(app.transactions.len(), 1);
    press(&mut app, &mut store, KeyCode::Esc);
    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(app.transactions.len(), 7);
}

#[test]
fn test_month_keys() {
    let (mut app, mut store) = setup();
    press(&mut app, &mut store, KeyCode::Char('L'));
    assert_eq!(app.month.to_string(), "2023-05");
    press(&mut app, &mut store, KeyCode::Char('H'));
    press(&mut app, &mut store, KeyCode::Char('H'));
    assert_eq!(app.month.to_string(), "2023-03");
}

#[test]
fn test_navigation_is_clamped() {
    let (mut app, mut store) = setup();
    press(&mut app, &mut store, KeyCode::Char('2'));
    press(&mut app, &mut store, KeyCode::Char('k'));
    assert_eq!(app.transaction_index, 0);
    press(&mut app, &mut store, KeyCode::Char('G'));
    assert_eq!(app.transaction_index, 6);
    press(&mut app, &mut store, KeyCode::Char('j'));
    assert_eq!(app.transaction_index, 6);
    press(&mut app, &mut store, KeyCode::Char('g'));
    assert_eq!(app.transaction_index, 0);
}

#[test]
fn test_enter_edits_budget_inline() {
    let (mut app, mut store) = setup();
    press(&mut app, &mut store, KeyCode::Char('3'));
    press(&mut app, &mut store, KeyCode::Char('j')); // Transport
    press(&mut app, &mut store, KeyCode::Enter);
    assert_eq!(app.input_mode, InputMode::Editing);
    assert_eq!(app.command_input, "150");

    press(&mut app, &mut store, KeyCode::Backspace);
    press(&mut app, &mut store, KeyCode::Backspace);
    press(&mut app, &mut store, KeyCode::Backspace);
    type_str(&mut app, &mut store, "175");
    press(&mut app, &mut store, KeyCode::Enter);
    assert_eq!(
        store.budget_for("2", app.month).unwrap().amount,
        dec!(175)
    );
}

#[test]
fn test_escape_cancels_budget_edit() {
    let (mut app, mut store) = setup();
    press(&mut app, &mut store, KeyCode::Char('3'));
    press(&mut app, &mut store, KeyCode::Enter);
    type_str(&mut app, &mut store, "0");
    press(&mut app, &mut store, KeyCode::Esc);
    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(app.status_message, "Edit cancelled");
    assert_eq!(
        store.budget_for("1", app.month).unwrap().amount,
        dec!(400)
    );
}

#[test]
fn test_delete_key_confirm_flow() {
    let (mut app, mut store) = setup();
    press(&mut app, &mut store, KeyCode::Char('2'));
    press(&mut app, &mut store, KeyCode::Char('D'));
    assert_eq!(app.input_mode, InputMode::Confirm);
    press(&mut app, &mut store, KeyCode::Char('n'));
    assert_eq!(store.transactions().len(), 7);

    press(&mut app, &mut store, KeyCode::Char('D'));
    press(&mut app, &mut store, KeyCode::Char('y'));
    assert_eq!(store.transactions().len(), 6);
}

#[test]
fn test_help_closes_on_any_key() {
    let (mut app, mut store) = setup();
    press(&mut app, &mut store, KeyCode::Char('?'));
    assert!(app.show_help);
    press(&mut app, &mut store, KeyCode::Char('2'));
    assert!(!app.show_help);
    assert_eq!(app.screen, Screen::Dashboard);
}
