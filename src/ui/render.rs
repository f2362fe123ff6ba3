use crate::exec::LineKind;
use crate::ui::app::App;
use crate::ui::nav::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

pub fn render(frame: &mut Frame, app: &App) {
    // Panes + one-row footer
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(frame.area());

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 2),
            Constraint::Ratio(1, 4),
        ])
        .split(main_chunks[0]);

    render_categories(frame, app, panes[0]);
    render_output(frame, app, panes[1]);
    render_options(frame, app, panes[2]);
    render_footer(frame, app, main_chunks[1]);

    if app.modal.is_visible() {
        render_credential_modal(frame, app, frame.area());
    }
}

fn pane_block(title: &str, focused: bool) -> Block<'_> {
    let border_color = if focused { Color::Cyan } else { Color::Gray };
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(border_color))
}

fn selection_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Green)
        .add_modifier(Modifier::BOLD)
}

fn render_categories(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .nav
        .registry()
        .group_order()
        .iter()
        .map(|name| ListItem::new(format!("📁 {}", name)))
        .collect();

    let list = List::new(items)
        .block(pane_block(" Categories ", app.focus() == View::Categories))
        .style(Style::default().fg(Color::White))
        .highlight_style(selection_style());

    let mut state = ListState::default().with_selected(Some(app.nav.cursor(View::Categories)));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_options(frame: &mut Frame, app: &App, area: Rect) {
    let options = app.nav.options();
    let items: Vec<ListItem> = options
        .iter()
        .map(|command| ListItem::new(command.label.clone()))
        .collect();

    let list = List::new(items)
        .block(pane_block(" Options ", app.focus() == View::Options))
        .style(Style::default().fg(Color::White))
        .highlight_style(selection_style());

    let selected = (!options.is_empty()).then(|| app.nav.cursor(View::Options));
    let mut state = ListState::default().with_selected(selected);
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_output(frame: &mut Frame, app: &App, area: Rect) {
    let text: Vec<Line> = app
        .output
        .lines()
        .iter()
        .map(|line| {
            let style = match line.kind {
                LineKind::Echo => Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
                LineKind::Output => Style::default().fg(Color::White),
                LineKind::Error => Style::default().fg(Color::Red),
                LineKind::Separator => Style::default().fg(Color::DarkGray),
            };
            Line::from(Span::styled(expand_tabs(&line.text), style))
        })
        .collect();

    let origin = u16::try_from(app.output.origin()).unwrap_or(u16::MAX);
    let paragraph = Paragraph::new(text)
        .block(pane_block(" Output ", app.focus() == View::Output))
        .scroll((origin, 0));

    frame.render_widget(paragraph, area);
}

fn render_credential_modal(frame: &mut Frame, app: &App, area: Rect) {
    let popup = centered_rect(50, 30, area);
    frame.render_widget(Clear, popup);

    let text = vec![
        Line::from(Span::styled(
            "Enter password",
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            app.modal.masked(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" 🔒 Credential ")
                .border_style(Style::default().fg(Color::Magenta)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, popup);
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = if app.modal.is_visible() {
        "[Enter] Save  [Esc] Cancel  [Backspace] Delete"
    } else {
        match app.focus() {
            View::Categories => {
                "[↑↓/jk] Category  [←→/hl] Pane  [Enter] Options  [Tab] Output  [p] Password  [q] Quit"
            }
            View::Options => {
                "[↑↓/jk] Command  [Enter] Run  [←→/hl] Pane  [b] Back  [p] Password  [q] Quit"
            }
            View::Output => {
                "[↑↓/jk] Scroll  [PgUp/PgDn] Page  [c] Clear  [Tab] Categories  [b] Back  [q] Quit"
            }
            View::PasswordModal => "",
        }
    };

    let footer = Paragraph::new(help_text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default());

    frame.render_widget(footer, area);
}

/// A rectangle of `percent_x` by `percent_y` centered in `area`.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

/// Terminal cells do not render tabs; replace them with spaces.
fn expand_tabs(text: &str) -> String {
    if !text.contains('\t') {
        return text.to_string();
    }
    text.replace('\t', "    ")
}
