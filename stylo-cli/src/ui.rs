//! Terminal UI rendering for the Stylo CLI

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span as UiSpan},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

use stylo_core::{App, Focus, Mode};

// Catppuccin Mocha colors
const SURFACE0: Color = Color::Rgb(49, 50, 68);
const SURFACE1: Color = Color::Rgb(69, 71, 90);
const TEXT: Color = Color::Rgb(205, 214, 244);
const SUBTEXT0: Color = Color::Rgb(166, 173, 200);
const RED: Color = Color::Rgb(243, 139, 168);
const YELLOW: Color = Color::Rgb(249, 226, 175);
const GREEN: Color = Color::Rgb(166, 227, 161);
const BLUE: Color = Color::Rgb(137, 180, 250);
const MAUVE: Color = Color::Rgb(203, 166, 247);
const TEAL: Color = Color::Rgb(148, 226, 213);

// Highlight colors cycled over the entity palette
const ENTITY_COLORS: [Color; 6] = [YELLOW, GREEN, BLUE, MAUVE, TEAL, RED];

pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Min(0),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_title_bar(frame, app, chunks[0]);
    draw_main_area(frame, app, chunks[1]);
    draw_status_bar(frame, app, chunks[2]);

    // Draw popups/overlays
    match app.mode {
        Mode::EntityPicker => draw_entity_picker(frame, app),
        Mode::Input => draw_input_dialog(frame, app),
        Mode::Help => draw_help(frame),
        _ => {}
    }
}

fn entity_color(app: &App, entity_id: &str) -> Color {
    app.entities
        .iter()
        .position(|e| e.id == entity_id)
        .map(|i| ENTITY_COLORS[i % ENTITY_COLORS.len()])
        .unwrap_or(TEAL)
}

fn draw_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let granularity = if app.config.allow_character {
        "char"
    } else {
        "word"
    };
    let overlap = if app.config.allow_overlap {
        "overlap"
    } else {
        "no-overlap"
    };

    let title_text = format!(
        " Stylo - {} [{} spans] [{}|{}]",
        app.title(),
        app.selection.len(),
        granularity,
        overlap,
    );

    let title_bar = Paragraph::new(title_text).style(Style::default().fg(TEXT).bg(SURFACE0));

    frame.render_widget(title_bar, area);
}

fn draw_main_area(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),     // Editor
            Constraint::Length(34), // Sidebar
        ])
        .split(area);

    draw_editor(frame, app, chunks[0]);
    draw_sidebar(frame, app, chunks[1]);
}

fn draw_editor(frame: &mut Frame, app: &App, area: Rect) {
    let editor_style = if app.focus == Focus::Editor {
        Style::default().fg(BLUE)
    } else {
        Style::default().fg(SUBTEXT0)
    };

    let mode_indicator = match app.mode {
        Mode::Select => " [SELECT]",
        _ => "",
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(editor_style)
        .title(format!("Editor{}", mode_indicator));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(doc) = &app.document else {
        return;
    };

    let caret_offset = app.caret.offset();
    let selection = app.selection_range();

    // Build styled lines; offsets here are character offsets, the same
    // coordinate space the spans use
    let mut lines: Vec<Line> = Vec::new();
    let mut offset = 0usize;

    for line_text in doc.content.split('\n') {
        let mut line_spans: Vec<UiSpan> = Vec::new();

        for ch in line_text.chars() {
            let mut style = Style::default().fg(TEXT);

            // Committed spans first, selection and caret paint over them
            for span in app.selection.spans() {
                if span.contains(offset) {
                    style = Style::default()
                        .fg(entity_color(app, &span.entity.id))
                        .add_modifier(Modifier::UNDERLINED);
                    break;
                }
            }

            if let Some((sel_start, sel_end)) = selection {
                if offset >= sel_start && offset < sel_end {
                    style = style.bg(SURFACE1).add_modifier(Modifier::BOLD);
                }
            }

            if offset == caret_offset {
                style = style.add_modifier(Modifier::REVERSED);
            }

            line_spans.push(UiSpan::styled(ch.to_string(), style));
            offset += 1;
        }

        // Make a caret at end-of-line visible
        if offset == caret_offset {
            line_spans.push(UiSpan::styled(
                " ",
                Style::default().add_modifier(Modifier::REVERSED),
            ));
        }

        lines.push(Line::from(line_spans));
        offset += 1; // the newline itself
    }

    // Scroll so the caret row stays visible
    let (caret_row, _) = app.caret.line_col(caret_offset);
    let visible_height = inner.height as usize;
    let scroll_offset = if visible_height > 0 && caret_row >= visible_height {
        caret_row - visible_height + 1
    } else {
        0
    };

    let paragraph = Paragraph::new(lines)
        .scroll((scroll_offset as u16, 0))
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, inner);
}

fn draw_sidebar(frame: &mut Frame, app: &App, area: Rect) {
    let sidebar_style = if app.focus == Focus::Sidebar {
        Style::default().fg(BLUE)
    } else {
        Style::default().fg(SUBTEXT0)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(sidebar_style)
        .title(format!("Spans ({})", app.selection.len()));

    if app.document.is_none() {
        frame.render_widget(block, area);
        return;
    }

    let items: Vec<ListItem> = app
        .spans_sorted()
        .iter()
        .enumerate()
        .map(|(i, span)| {
            let selected = i == app.sidebar_selected;
            let marker = if selected { ">" } else { " " };

            let entity = app
                .entities
                .iter()
                .find(|e| e.id == span.entity.id)
                .map(|e| e.label().to_string())
                .unwrap_or_else(|| span.entity.id.clone());

            let text_preview: String = span
                .text
                .chars()
                .take(18)
                .collect::<String>()
                .replace('\n', " ");

            let line1 = format!("{} [{}] \"{}\"", marker, entity, text_preview);
            let line2 = format!("   {}..{}", span.from, span.to);

            let color = entity_color(app, &span.entity.id);
            let style = if selected {
                Style::default().fg(color).bg(SURFACE1)
            } else {
                Style::default().fg(color)
            };

            ListItem::new(vec![
                Line::from(UiSpan::styled(line1, style)),
                Line::from(UiSpan::styled(line2, Style::default().fg(SUBTEXT0))),
            ])
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mode_str = match app.mode {
        Mode::Normal => "NORMAL",
        Mode::Select => "SELECT",
        Mode::EntityPicker => "ENTITY",
        Mode::Input => "INPUT",
        Mode::Help => "HELP",
    };

    let entity = app
        .active_entity()
        .map(|e| e.label().to_string())
        .unwrap_or_default();

    let status = app.status_message.as_deref().unwrap_or("");
    let help_hint = "v select | e entity | c/p settings | s export | ? help";

    let status_text = format!(
        " {} [{}] | {}",
        mode_str,
        entity,
        if status.is_empty() { help_hint } else { status },
    );

    let status_bar = Paragraph::new(status_text).style(Style::default().fg(SUBTEXT0).bg(SURFACE0));

    frame.render_widget(status_bar, area);
}

fn draw_entity_picker(frame: &mut Frame, app: &App) {
    let height = (app.entities.len() as u16 + 2).max(4);
    let area = centered_rect(40, height, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(MAUVE))
        .title("Select Entity (1-9 or j/k)");

    let items: Vec<ListItem> = app
        .entities
        .iter()
        .enumerate()
        .map(|(i, entity)| {
            let selected = i == app.entity_selected;
            let marker = if selected { ">" } else { " " };
            let color = ENTITY_COLORS[i % ENTITY_COLORS.len()];
            let style = if selected {
                Style::default().fg(color).bg(SURFACE1)
            } else {
                Style::default().fg(color)
            };
            ListItem::new(format!("{} {} {}", i + 1, marker, entity.label())).style(style)
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}

fn draw_input_dialog(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 5, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GREEN))
        .title("Enter file path");

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let input = Paragraph::new(format!("{}_", app.input_buffer)).style(Style::default().fg(TEXT));
    frame.render_widget(input, inner);
}

fn draw_help(frame: &mut Frame) {
    let area = centered_rect(62, 20, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BLUE))
        .title("Help (press any key to close)");

    let help_text = vec![
        Line::from(UiSpan::styled(
            "Navigation",
            Style::default().fg(MAUVE).add_modifier(Modifier::BOLD),
        )),
        Line::from("  h/j/k/l  Move caret"),
        Line::from("  w/b      Next/prev word"),
        Line::from("  g/G      Go to top/bottom"),
        Line::from("  ]/[      Next/prev span"),
        Line::from("  Tab      Toggle editor/sidebar"),
        Line::from(""),
        Line::from(UiSpan::styled(
            "Spans",
            Style::default().fg(MAUVE).add_modifier(Modifier::BOLD),
        )),
        Line::from("  v        Enter select mode"),
        Line::from("  a/Enter  Commit selection as span"),
        Line::from("  e        Pick entity for new spans"),
        Line::from("  r        Relabel selected span"),
        Line::from("  d        Delete selected span"),
        Line::from(""),
        Line::from(UiSpan::styled(
            "Settings & File",
            Style::default().fg(MAUVE).add_modifier(Modifier::BOLD),
        )),
        Line::from("  c        Toggle word/character granularity"),
        Line::from("  p        Toggle overlap policy"),
        Line::from("  o        Open file"),
        Line::from("  s        Export spans as JSON"),
    ];

    let paragraph = Paragraph::new(help_text).block(block);
    frame.render_widget(paragraph, area);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
