//! Stylo CLI - Terminal-based span annotation tool

mod io;
mod ui;

use std::io::stdout;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use stylo_core::{App, Focus, Mode, PickerTarget};

fn main() -> Result<()> {
    // Get file path from args
    let args: Vec<String> = std::env::args().collect();
    let file_path = args.get(1);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app
    let mut app = App::default();

    // Load file if provided
    if let Some(path) = file_path {
        match io::load_file(path) {
            Ok(doc) => {
                app.load_document(doc);
                app.set_status(&format!("Loaded {}", path));
            }
            Err(e) => {
                app.set_status(&format!("Error: {}", e));
            }
        }
    } else {
        app.set_status("No file loaded. Pass a file path as argument.");
    }

    // Main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = res {
        eprintln!("Error: {}", e);
    }

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()? {
            // Clear status on any key
            app.clear_status();

            match app.mode {
                Mode::Normal => handle_normal_mode(app, key.code, key.modifiers),
                Mode::Select => handle_select_mode(app, key.code),
                Mode::EntityPicker => handle_entity_picker(app, key.code),
                Mode::Input => handle_input_mode(app, key.code),
                Mode::Help => {
                    app.mode = Mode::Normal;
                }
            }
        }
    }
    Ok(())
}

fn handle_normal_mode(app: &mut App, code: KeyCode, _modifiers: KeyModifiers) {
    match code {
        KeyCode::Char('q') => app.running = false,
        KeyCode::Char('?') => app.mode = Mode::Help,

        // Navigation
        KeyCode::Char('j') | KeyCode::Down => {
            if app.focus == Focus::Editor {
                app.caret.move_down();
            } else {
                app.next_span();
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            if app.focus == Focus::Editor {
                app.caret.move_up();
            } else {
                app.prev_span();
            }
        }
        KeyCode::Char('h') | KeyCode::Left => app.caret.move_left(),
        KeyCode::Char('l') | KeyCode::Right => app.caret.move_right(),
        KeyCode::Char('w') => app.caret.move_word_forward(),
        KeyCode::Char('b') => app.caret.move_word_back(),
        KeyCode::Char('g') => app.caret.move_to_top(),
        KeyCode::Char('G') => app.caret.move_to_bottom(),

        // Span navigation
        KeyCode::Char(']') => app.next_span(),
        KeyCode::Char('[') => app.prev_span(),

        // Select mode
        KeyCode::Char('v') => app.enter_select_mode(),

        // Span actions
        KeyCode::Char('d') => {
            app.delete_selected_span();
        }
        KeyCode::Char('r') => {
            if app.selected_span().is_some() {
                app.open_entity_picker(PickerTarget::ReplaceSpan);
            }
        }
        KeyCode::Char('e') => app.open_entity_picker(PickerTarget::ActiveEntity),

        // Annotation settings
        KeyCode::Char('c') => app.toggle_allow_character(),
        KeyCode::Char('p') => app.toggle_allow_overlap(),

        // Focus toggle
        KeyCode::Tab => app.toggle_focus(),

        // Export
        KeyCode::Char('s') => {
            if let Some(doc) = &app.document {
                match io::export_spans(doc, &app.selection) {
                    Ok(path) => app.set_status(&format!("Exported to {}", path.display())),
                    Err(e) => app.set_status(&format!("Export failed: {}", e)),
                }
            }
        }

        // Open file
        KeyCode::Char('o') => {
            app.input_buffer.clear();
            app.mode = Mode::Input;
        }

        _ => {}
    }
}

fn handle_select_mode(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Esc => app.cancel_select_mode(),
        KeyCode::Char('j') | KeyCode::Down => app.caret.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.caret.move_up(),
        KeyCode::Char('h') | KeyCode::Left => app.caret.move_left(),
        KeyCode::Char('l') | KeyCode::Right => app.caret.move_right(),
        KeyCode::Char('w') => app.caret.move_word_forward(),
        KeyCode::Char('b') => app.caret.move_word_back(),
        KeyCode::Char('a') | KeyCode::Enter => app.commit_selection(),
        _ => {}
    }
}

fn handle_entity_picker(app: &mut App, code: KeyCode) {
    let total = app.entities.len();
    if total == 0 {
        app.mode = Mode::Normal;
        return;
    }

    match code {
        KeyCode::Esc => app.mode = Mode::Normal,
        KeyCode::Char('j') | KeyCode::Down => {
            app.entity_selected = (app.entity_selected + 1) % total;
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.entity_selected = if app.entity_selected == 0 {
                total - 1
            } else {
                app.entity_selected - 1
            };
        }
        KeyCode::Enter => app.apply_entity_picker(),
        // Quick select
        KeyCode::Char(c) if c.is_ascii_digit() => {
            let idx = (c as usize).wrapping_sub('1' as usize);
            if idx < total {
                app.entity_selected = idx;
                app.apply_entity_picker();
            }
        }
        _ => {}
    }
}

fn handle_input_mode(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Esc => {
            app.mode = Mode::Normal;
            app.input_buffer.clear();
        }
        KeyCode::Enter => {
            let path = app.input_buffer.clone();
            match io::load_file(&path) {
                Ok(doc) => {
                    app.load_document(doc);
                    app.set_status(&format!("Loaded {}", path));
                }
                Err(e) => {
                    app.set_status(&format!("Error: {}", e));
                }
            }
            app.input_buffer.clear();
            app.mode = Mode::Normal;
        }
        KeyCode::Backspace => {
            app.input_buffer.pop();
        }
        KeyCode::Char(c) => {
            app.input_buffer.push(c);
        }
        _ => {}
    }
}
