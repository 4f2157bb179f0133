use crate::color::{
    ContrastGrade, Rgb, contrast_ratio, format_ratio, hex_to_rgb, rgb_to_hsl,
    text_color_for_background,
};
use crate::tui::keys::help_text;
use crate::tui::state::{AppState, InputMode, Tab};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Tabs, Wrap},
};

/// Terminal color for a hex string; unparsable text renders as the default color.
pub fn tui_color(hex: &str) -> Color {
    match hex_to_rgb(hex) {
        Ok(Rgb { r, g, b }) => Color::Rgb(r, g, b),
        Err(_) => Color::Reset,
    }
}

fn chip(hex: &str) -> Span<'static> {
    let fg = text_color_for_background(hex).map(tui_color).unwrap_or(Color::Reset);
    Span::styled(
        format!(" {} ", hex.to_uppercase()),
        Style::default().bg(tui_color(hex)).fg(fg),
    )
}

pub fn draw(f: &mut Frame, state: &mut AppState) {
    if let Some(field) = &state.starfield {
        f.render_widget(field, f.area());
    }

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    // --- Header ---
    let titles: Vec<Line> = Tab::ALL.iter().map(|t| Line::from(t.title())).collect();
    let tabs = Tabs::new(titles)
        .select(state.tab.index())
        .block(Block::default().borders(Borders::ALL).title(" ColorMind "))
        .highlight_style(
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(tabs, v_chunks[0]);

    match state.tab {
        Tab::Generator => draw_generator(f, state, v_chunks[1]),
        Tab::Harmony => draw_harmony(f, state, v_chunks[1]),
        Tab::Saved => draw_saved(f, state, v_chunks[1]),
    }

    draw_footer(f, state, v_chunks[2]);
}

fn draw_generator(f: &mut Frame, state: &AppState, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 5); 5])
        .spacing(1)
        .split(area);

    for (i, color) in state.palette.colors.iter().enumerate() {
        let Ok(rgb) = hex_to_rgb(color) else {
            continue;
        };
        let fg = text_color_for_background(color)
            .map(tui_color)
            .unwrap_or(Color::White);
        let ratio = contrast_ratio(rgb, Rgb::WHITE);
        let lock = if state.palette.locked[i] {
            "[locked]"
        } else {
            "[ open ]"
        };

        let lines = vec![
            Line::from(format!(
                "{} {}",
                format_ratio(ratio),
                ContrastGrade::from_ratio(ratio)
            )),
            Line::from(""),
            Line::from(lock),
            Line::from(""),
            Line::from(Span::styled(
                color.to_uppercase(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(rgb.to_string()),
            Line::from(rgb_to_hsl(rgb).to_string()),
        ];

        let border_style = if i == state.selected_swatch {
            Style::default().fg(fg).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(tui_color(color))
        };
        let swatch = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(Style::default().bg(tui_color(color)).fg(fg))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} ", i + 1))
                    .border_style(border_style),
            );
        // Swatches are opaque; stars only show in the gaps.
        f.render_widget(Clear, columns[i]);
        f.render_widget(swatch, columns[i]);
    }
}

fn draw_harmony(f: &mut Frame, state: &mut AppState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let base = Paragraph::new(Line::from(vec![
        Span::raw("Base color  "),
        chip(&state.base_color),
        Span::raw("  "),
        Span::styled(
            hex_to_rgb(&state.base_color)
                .map(|rgb| rgb_to_hsl(rgb).to_string())
                .unwrap_or_default(),
            Style::default().fg(Color::DarkGray),
        ),
    ]))
    .block(Block::default().borders(Borders::ALL).title(" Base "));
    f.render_widget(Clear, chunks[0]);
    f.render_widget(base, chunks[0]);

    let items: Vec<ListItem> = state
        .harmonies
        .iter()
        .map(|h| {
            let mut spans = vec![Span::styled(
                format!("{:<20}", h.label),
                Style::default().add_modifier(Modifier::BOLD),
            )];
            for color in &h.colors {
                spans.push(chip(color));
                spans.push(Span::raw(" "));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Harmonies (Enter: apply) "),
        )
        .highlight_symbol(">> ")
        .highlight_style(Style::default().add_modifier(Modifier::BOLD));
    f.render_stateful_widget(list, chunks[1], &mut state.harmony_state);
}

fn draw_saved(f: &mut Frame, state: &mut AppState, area: Rect) {
    let title = if state.loading {
        " Saved (Loading...) ".to_string()
    } else {
        format!(" Saved ({}) ", state.saved.len())
    };
    let block = Block::default().borders(Borders::ALL).title(title);

    if state.saved.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from("No saved palettes yet."),
            Line::from(Span::styled(
                "Generate a palette and press s to save it.",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .alignment(Alignment::Center)
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = state
        .saved
        .iter()
        .map(|p| {
            let mut spans = vec![Span::styled(
                format!("{:<24.24}", p.name),
                Style::default().add_modifier(Modifier::BOLD),
            )];
            for color in &p.colors {
                spans.push(Span::styled("    ", Style::default().bg(tui_color(color))));
            }
            spans.push(Span::styled(
                format!("  {}", p.created_date()),
                Style::default().fg(Color::DarkGray),
            ));
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_symbol(">> ")
        .highlight_style(Style::default().add_modifier(Modifier::BOLD));
    f.render_stateful_widget(list, area, &mut state.saved_state);
}

fn draw_footer(f: &mut Frame, state: &AppState, area: Rect) {
    match state.mode {
        InputMode::Naming | InputMode::EditingHex => {
            let (title, prefix, color) = match state.mode {
                InputMode::EditingHex => (" Base Color ", "> ", Color::Magenta),
                _ => (" Save Palette ", "> ", Color::Yellow),
            };
            let input = Paragraph::new(format!("{}{}", prefix, state.input_buffer))
                .style(Style::default().fg(color))
                .block(Block::default().borders(Borders::ALL).title(title));
            f.render_widget(input, area);
            let cursor_x =
                area.x + 1 + prefix.chars().count() as u16 + state.cursor_position as u16;
            let cursor_y = area.y + 1;
            f.set_cursor_position((cursor_x, cursor_y));
        }
        InputMode::Normal => {
            let f_chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
                .split(area);
            let status_color = if state.message.starts_with("Error") {
                Color::Red
            } else {
                Color::Cyan
            };
            let status = Paragraph::new(state.message.clone())
                .style(Style::default().fg(status_color))
                .block(
                    Block::default()
                        .borders(Borders::LEFT | Borders::TOP | Borders::BOTTOM)
                        .title(" Status "),
                );
            let help = Paragraph::new(help_text(state.tab))
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Right)
                .block(
                    Block::default()
                        .borders(Borders::RIGHT | Borders::TOP | Borders::BOTTOM)
                        .title(" Actions "),
                );
            f.render_widget(status, f_chunks[0]);
            f.render_widget(help, f_chunks[1]);
        }
    }
}
