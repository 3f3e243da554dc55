use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::models::Month;
use crate::store::Store;
use crate::ui::app::{App, InputMode, Screen};
use crate::ui::commands;
use crate::ui::util::{scroll_down, scroll_to_bottom, scroll_to_top, scroll_up};

pub(crate) fn as_tui(store: &mut Store, month: Month) -> Result<()> {
    let mut app = App::new(month);
    app.refresh_all(store);
    tracing::info!(%month, transactions = store.transactions().len(), "starting TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, store);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        tracing::error!(error = %e, "TUI exited with an error");
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    store: &mut Store,
) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            // tab + status + command bars, borders and the table header
            let content_height = f.area().height.saturating_sub(6) as usize;
            app.visible_rows = content_height.max(1);
            crate::ui::render::render(f, app);
        })?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            handle_key(key, app, store)?;
        }
    }
    Ok(())
}

pub(crate) fn handle_key(key: event::KeyEvent, app: &mut App, store: &mut Store) -> Result<()> {
    if app.show_help {
        app.show_help = false;
        return Ok(());
    }
    match app.input_mode {
        InputMode::Normal => handle_normal_input(key, app, store)?,
        InputMode::Command => handle_command_input(key, app, store)?,
        InputMode::Search => handle_search_input(key, app, store),
        InputMode::Editing => handle_editing_input(key, app, store),
        InputMode::Confirm => handle_confirm_input(key, app, store),
    }
    Ok(())
}

// ── Input handlers ───────────────────────────────────────────

fn handle_normal_input(key: event::KeyEvent, app: &mut App, store: &mut Store) -> Result<()> {
    match key.code {
        KeyCode::Char(':') => {
            app.input_mode = InputMode::Command;
            app.command_input.clear();
        }
        KeyCode::Char('/') => {
            app.input_mode = InputMode::Search;
            app.search_input.clear();
        }
        KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
        }
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            for _ in 0..app.visible_rows / 2 {
                handle_move_down(app);
            }
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            for _ in 0..app.visible_rows / 2 {
                handle_move_up(app);
            }
        }
        KeyCode::Char('j') | KeyCode::Down => handle_move_down(app),
        KeyCode::Char('k') | KeyCode::Up => handle_move_up(app),
        KeyCode::Char('g') => handle_goto_top(app),
        KeyCode::Char('G') => handle_goto_bottom(app),
        KeyCode::Char('1') => switch_screen(app, store, Screen::Dashboard),
        KeyCode::Char('2') => switch_screen(app, store, Screen::Transactions),
        KeyCode::Char('3') => switch_screen(app, store, Screen::Budgets),
        KeyCode::Char('4') => switch_screen(app, store, Screen::Categories),
        KeyCode::Tab => {
            let screens = Screen::all();
            let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
            switch_screen(app, store, screens[(idx + 1) % screens.len()]);
        }
        KeyCode::BackTab => {
            let screens = Screen::all();
            let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
            let prev = if idx == 0 { screens.len() - 1 } else { idx - 1 };
            switch_screen(app, store, screens[prev]);
        }
        KeyCode::Char('H') => commands::handle_command("prev-month", app, store)?,
        KeyCode::Char('L') => commands::handle_command("next-month", app, store)?,
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Enter if app.screen == Screen::Budgets => app.begin_budget_edit(),
        KeyCode::Char('e') if app.screen == Screen::Transactions => {
            commands::handle_command("rename", app, store)?;
        }
        KeyCode::Char('D') if app.screen == Screen::Transactions => {
            commands::handle_command("delete-txn", app, store)?;
        }
        KeyCode::Char('D') if app.screen == Screen::Budgets => {
            commands::handle_command("delete-budget", app, store)?;
        }
        KeyCode::Esc => {
            app.status_message.clear();
            if !app.search_input.is_empty() {
                app.search_input.clear();
                app.refresh_transactions(store);
            }
        }
        _ => {}
    }
    Ok(())
}

fn handle_command_input(key: event::KeyEvent, app: &mut App, store: &mut Store) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            let input = std::mem::take(&mut app.command_input);
            app.input_mode = InputMode::Normal;
            commands::handle_command(&input, app, store)?;
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
        }
        KeyCode::Backspace => {
            app.command_input.pop();
            if app.command_input.is_empty() {
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Char(c) => app.command_input.push(c),
        _ => {}
    }
    Ok(())
}

fn handle_search_input(key: event::KeyEvent, app: &mut App, store: &mut Store) {
    match key.code {
        KeyCode::Enter => {
            app.input_mode = InputMode::Normal;
            app.screen = Screen::Transactions;
            app.refresh_transactions(store);
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.search_input.clear();
            app.refresh_transactions(store);
        }
        KeyCode::Backspace => {
            app.search_input.pop();
            live_search(app, store);
        }
        KeyCode::Char(c) => {
            app.search_input.push(c);
            live_search(app, store);
        }
        _ => {}
    }
}

/// Filter as you type.
fn live_search(app: &mut App, store: &Store) {
    app.screen = Screen::Transactions;
    app.transaction_index = 0;
    app.transaction_scroll = 0;
    app.refresh_transactions(store);
}

fn handle_editing_input(key: event::KeyEvent, app: &mut App, store: &mut Store) {
    match key.code {
        KeyCode::Enter => app.commit_edit(store),
        KeyCode::Esc => app.cancel_edit(),
        KeyCode::Backspace => {
            app.command_input.pop();
        }
        KeyCode::Char(c) => app.command_input.push(c),
        _ => {}
    }
}

fn handle_confirm_input(key: event::KeyEvent, app: &mut App, store: &mut Store) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm_pending(store),
        _ => app.cancel_pending(),
    }
}

// ── Navigation helpers ───────────────────────────────────────

fn switch_screen(app: &mut App, store: &Store, screen: Screen) {
    app.screen = screen;
    match screen {
        Screen::Dashboard => app.refresh_dashboard(store),
        Screen::Transactions => app.refresh_transactions(store),
        Screen::Budgets => app.refresh_budgets(store),
        Screen::Categories => app.refresh_categories(store),
    }
}

fn handle_move_down(app: &mut App) {
    let page = app.visible_rows.max(1);
    match app.screen {
        Screen::Transactions => scroll_down(
            &mut app.transaction_index,
            &mut app.transaction_scroll,
            app.transactions.len(),
            page,
        ),
        Screen::Budgets => {
            if app.budget_index + 1 < app.budget_rows.len() {
                app.budget_index += 1;
            }
        }
        Screen::Categories => {
            if app.category_index + 1 < app.categories.len() {
                app.category_index += 1;
            }
        }
        Screen::Dashboard => {}
    }
}

fn handle_move_up(app: &mut App) {
    match app.screen {
        Screen::Transactions => scroll_up(&mut app.transaction_index, &mut app.transaction_scroll),
        Screen::Budgets => app.budget_index = app.budget_index.saturating_sub(1),
        Screen::Categories => app.category_index = app.category_index.saturating_sub(1),
        Screen::Dashboard => {}
    }
}

fn handle_goto_top(app: &mut App) {
    match app.screen {
        Screen::Transactions => {
            scroll_to_top(&mut app.transaction_index, &mut app.transaction_scroll)
        }
        Screen::Budgets => app.budget_index = 0,
        Screen::Categories => app.category_index = 0,
        Screen::Dashboard => {}
    }
}

fn handle_goto_bottom(app: &mut App) {
    let page = app.visible_rows.max(1);
    match app.screen {
        Screen::Transactions => scroll_to_bottom(
            &mut app.transaction_index,
            &mut app.transaction_scroll,
            app.transactions.len(),
            page,
        ),
        Screen::Budgets => app.budget_index = app.budget_rows.len().saturating_sub(1),
        Screen::Categories => app.category_index = app.categories.len().saturating_sub(1),
        Screen::Dashboard => {}
    }
}

#[cfg(test)]
#[path = "tui_tests.rs"]
mod tests;
