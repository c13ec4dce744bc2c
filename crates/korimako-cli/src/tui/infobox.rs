//! Frame rendering for the browser: the search form bar, the results list,
//! the card detail pane, and the help bar.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};

use korimako_core::taxonomy::ThemeTier;
use korimako_query::SortOrder;

use crate::view;

use super::styles::{indicator_color, tier_color};
use super::{Activity, App};

/// Render one frame. The whole frame is rebuilt from `app` every time, so
/// drawing twice with the same state produces the same screen.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search form bar
            Constraint::Min(5),    // Results list + card detail
            Constraint::Length(3), // Help bar
        ])
        .split(area);

    render_form(frame, app, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[1]);

    render_results(frame, app, body[0]);
    render_card(frame, app, body[1]);
    render_help(frame, app, chunks[2]);
}

/// The fade-in treatment: hidden until the startup delay has elapsed.
fn fade_style(app: &App, visible: Style) -> Style {
    if app.faded_in() {
        visible
    } else {
        visible.add_modifier(Modifier::HIDDEN)
    }
}

fn render_form(frame: &mut Frame, app: &App, area: Rect) {
    let order_label = match app.form.order {
        SortOrder::Alphabetical => "Alphabetical",
        SortOrder::ConservationStatus => "Conservation Status",
    };
    let text = if app.editing {
        format!("{}▏", app.form.text)
    } else if app.form.text.is_empty() {
        "(any)".to_string()
    } else {
        app.form.text.clone()
    };

    let mut spans = vec![
        Span::raw("Search: "),
        Span::styled(text, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("   Status: "),
        Span::raw(app.form.status_label()),
        Span::raw("   Order: "),
        Span::raw(order_label),
    ];
    if let Activity::Loading { .. } = app.activity {
        spans.push(Span::styled(
            "   loading…",
            Style::default().fg(Color::Yellow),
        ));
    }
    if let Some(error) = &app.error {
        spans.push(Span::styled(
            format!("   {error}"),
            Style::default().fg(Color::Red),
        ));
    }

    let title_style = fade_style(
        app,
        Style::default()
            .fg(tier_color(app.theme, ThemeTier::Page))
            .add_modifier(Modifier::BOLD),
    );
    let form = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(tier_color(app.theme, ThemeTier::Page)))
            .title(Span::styled("korimako", title_style)),
    );
    frame.render_widget(form, area);
}

fn render_results(frame: &mut Frame, app: &App, area: Rect) {
    let panel_color = tier_color(app.theme, ThemeTier::Panel);

    if app.results.is_empty() {
        let empty = Paragraph::new("No birds to show.\nPress Enter to search.")
            .style(Style::default().fg(Color::DarkGray))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(panel_color))
                    .title("Birds"),
            );
        frame.render_widget(empty, area);
        return;
    }

    // area.height - 2 for borders - 1 for header
    let viewport_height = (area.height.saturating_sub(3)) as usize;
    let visible_start = app.offset;
    let visible_end = (visible_start + viewport_height).min(app.results.len());

    let header = Row::new(vec![
        Cell::from(" "),
        Cell::from("Bird").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Status"),
    ])
    .height(1);

    let rows: Vec<Row> = app
        .results
        .iter()
        .enumerate()
        .skip(visible_start)
        .take(viewport_height)
        .map(|(i, bird)| {
            let style = if i == app.selected {
                Style::default().bg(Color::DarkGray).fg(Color::White)
            } else {
                Style::default()
            };
            let marker = if app.is_favourite(&bird.common_name) {
                "♥"
            } else {
                " "
            };
            Row::new(vec![
                Cell::from(Span::styled(
                    "●",
                    Style::default().fg(indicator_color(bird.status.style_token())),
                )),
                Cell::from(format!("{marker} {}", bird.common_name)),
                Cell::from(bird.status.label().to_string()),
            ])
            .style(style)
        })
        .collect();

    let title = if app.results.len() > viewport_height {
        format!(
            "Birds [{}-{} of {}]",
            visible_start + 1,
            visible_end,
            app.results.len()
        )
    } else {
        format!("Birds [{}]", app.results.len())
    };

    let table = Table::new(
        rows,
        [
            Constraint::Length(2),
            Constraint::Percentage(55),
            Constraint::Percentage(40),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(panel_color))
            .title(title),
    );

    frame.render_widget(table, area);
}

fn render_card(frame: &mut Frame, app: &App, area: Rect) {
    let card_color = tier_color(app.theme, ThemeTier::Card);

    let Some(bird) = app.results.get(app.selected) else {
        let placeholder = Paragraph::new("Select a bird to see its card.")
            .style(Style::default().fg(Color::DarkGray))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(card_color)),
            );
        frame.render_widget(placeholder, area);
        return;
    };

    let card = view::build_infobox(bird, app.is_favourite(&bird.common_name), app.theme);

    let mut lines: Vec<Line<'_>> = Vec::new();
    lines.push(Line::from(vec![
        Span::styled(
            format!("[{}]", card.button.label),
            Style::default().fg(card_color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", card.button.hint),
            Style::default().fg(Color::DarkGray),
        ),
    ]));
    lines.push(Line::default());
    if !card.photo_source.is_empty() {
        lines.push(Line::from(format!("Photo: {}", card.photo_source)));
    }
    lines.push(Line::from(Span::styled(
        card.credit.clone(),
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(vec![
        Span::styled(
            "● ",
            Style::default().fg(indicator_color(card.indicator.style_token)),
        ),
        Span::raw(card.indicator.hint.clone()),
    ]));
    lines.push(Line::default());
    for row in &card.rows {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<16}", row.heading),
                Style::default().fg(Color::Cyan),
            ),
            Span::raw(row.value.clone()),
        ]));
    }

    let detail = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(card_color))
            .title(Span::styled(
                card.header.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
    );
    frame.render_widget(detail, area);
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help = Paragraph::new(
        "  / Text  s Status  o Order  Enter Search  Space Fave  F Faves  C Clear  t Theme  q Quit",
    )
    .style(fade_style(app, Style::default().fg(Color::DarkGray)))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, area);
}
