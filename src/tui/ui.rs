use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Wrap};

use crate::chart::render_comparison;
use crate::chart::text::TextCanvas;
use crate::output::score_bar;
use crate::tui::app::{App, Field, InputMode};
use crate::tui::theme::ThemeColors;

// Narrowest chart pane at which the two bar captions stay apart.
const CHART_MIN_COLUMNS: u16 = 66;

pub fn draw(frame: &mut Frame, app: &mut App, theme: &ThemeColors) {
    let area = frame.area();

    // Handle very small terminal sizes gracefully
    if area.height < 10 || area.width < 44 {
        let msg = Paragraph::new("Terminal too small").alignment(Alignment::Center);
        frame.render_widget(msg, area);
        return;
    }

    // Layout: Title(1) + main(fill) + Status(1)
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .split(area);

    render_title(frame, chunks[0], app, theme);

    let main = Layout::horizontal([Constraint::Length(44), Constraint::Fill(1)]).split(chunks[1]);
    let left = Layout::vertical([
        Constraint::Length(7), // Field table: header + margin + 5 rows
        Constraint::Length(3), // Score
        Constraint::Fill(1),   // Recommendations
    ])
    .split(main[0]);

    render_fields(frame, left[0], app, theme);
    render_score(frame, left[1], app, theme);
    render_recommendations(frame, left[2], app, theme);
    render_chart(frame, main[1], app, theme);

    render_status_bar(frame, chunks[2], app, theme);

    // Render overlays based on input mode
    match app.input_mode {
        InputMode::Help => render_help_popup(frame, theme),
        InputMode::Breakdown => render_breakdown_popup(frame, app, theme),
        InputMode::Normal => {}
    }
}

fn render_title(frame: &mut Frame, area: Rect, app: &App, theme: &ThemeColors) {
    let mut spans = vec![Span::styled(
        "roomscore",
        Style::default().fg(theme.title_color).bold(),
    )];

    let projection = format!("score {} -> {}", app.score.score, app.improved());
    let padding = (area.width as usize).saturating_sub("roomscore".len() + projection.len());
    spans.push(Span::raw(" ".repeat(padding)));
    spans.push(Span::styled(projection, Style::default().fg(theme.muted)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_fields(frame: &mut Frame, area: Rect, app: &App, theme: &ThemeColors) {
    let rows: Vec<Row> = Field::ALL
        .iter()
        .enumerate()
        .map(|(idx, field)| {
            let value = app.field_value(*field);
            // The breakdown rows share the field order, so the bar can
            // show the factor's normalized 0-100 contribution.
            let normalized = app.score.breakdown.factors[idx].normalized.clamp(0.0, 100.0);
            let bar = score_bar(normalized.round() as i64, 12);

            let row_style = if idx == app.selected {
                theme.row_selected
            } else {
                Style::default()
            };

            Row::new(vec![
                Cell::from(field.label()),
                Cell::from(format!("{:>6}", value)),
                Cell::from(Line::from(Span::styled(
                    bar,
                    Style::default().fg(theme.bar_filled),
                ))),
            ])
            .style(row_style)
        })
        .collect();

    let widths = [
        Constraint::Length(10),
        Constraint::Length(7),
        Constraint::Length(14),
    ];

    let table = Table::new(rows, widths).header(
        Row::new(vec!["Reading", "Value", "Contribution"])
            .style(theme.header_style)
            .bottom_margin(1),
    );

    frame.render_widget(table, area);
}

fn render_score(frame: &mut Frame, area: Rect, app: &App, theme: &ThemeColors) {
    let color = theme.score_color(app.score.score);
    let lines = vec![
        Line::from(vec![
            Span::styled("Score ", theme.header_style),
            Span::styled(
                format!("{}/100", app.score.score),
                Style::default().fg(color).bold(),
            ),
            Span::raw("  "),
            Span::styled(score_bar(app.score.score, 20), Style::default().fg(color)),
        ]),
        Line::from(vec![
            Span::styled("Projected ", Style::default().fg(theme.muted)),
            Span::styled(
                format!("{}/100", app.improved()),
                Style::default().fg(theme.muted).bold(),
            ),
            Span::styled(" after improvements", Style::default().fg(theme.muted)),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_recommendations(frame: &mut Frame, area: Rect, app: &App, theme: &ThemeColors) {
    let mut lines = vec![Line::from(Span::styled(
        "Recommendations",
        theme.header_style,
    ))];
    for rec in &app.recommendations {
        lines.push(Line::from(vec![
            Span::styled("• ", Style::default().fg(theme.title_color)),
            Span::raw(rec.clone()),
        ]));
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

fn render_chart(frame: &mut Frame, area: Rect, app: &App, theme: &ThemeColors) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(" Current vs. projected ", theme.title_style));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width < CHART_MIN_COLUMNS || inner.height < 8 {
        let msg = Paragraph::new("Widen the terminal to see the chart")
            .style(Style::default().fg(theme.muted))
            .alignment(Alignment::Center);
        frame.render_widget(msg, inner);
        return;
    }

    let chart_config = app.config.effective_chart();
    let mut canvas = TextCanvas::with_grid(
        chart_config.width,
        chart_config.height,
        inner.width as usize,
        inner.height as usize,
    );
    render_comparison(&mut canvas, app.score.score);

    frame.render_widget(Paragraph::new(canvas_lines(&canvas)), inner);
}

/// Restyle the rasterized chart cells as ratatui spans. The chart keeps
/// its own fixed palette rather than the TUI theme.
fn canvas_lines(canvas: &TextCanvas) -> Vec<Line<'static>> {
    (0..canvas.rows())
        .map(|row| {
            let spans: Vec<Span> = (0..canvas.columns())
                .map(|column| {
                    let cell = canvas.cell(column, row);
                    let mut style = Style::default();
                    if let Some(fg) = cell.fg {
                        style = style.fg(Color::Rgb(fg.r, fg.g, fg.b));
                    }
                    if let Some(bg) = cell.bg {
                        style = style.bg(Color::Rgb(bg.r, bg.g, bg.b));
                    }
                    Span::styled(cell.ch.unwrap_or(' ').to_string(), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App, theme: &ThemeColors) {
    let line = if let Some((ref msg, _)) = app.flash_message {
        Line::from(Span::styled(
            format!(" {}", msg),
            Style::default().fg(theme.flash_color),
        ))
    } else {
        let mut spans = Vec::new();
        for (key, action) in [
            ("j/k", "select"),
            ("h/l", "adjust"),
            ("H/L", "±10"),
            ("0", "clear"),
            ("r", "reset"),
            ("b", "breakdown"),
            ("?", "help"),
            ("q", "quit"),
        ] {
            spans.push(Span::styled(
                format!(" {}", key),
                Style::default().fg(theme.status_key_color).bold(),
            ));
            spans.push(Span::styled(
                format!(" {} ", action),
                Style::default().fg(theme.muted),
            ));
        }
        Line::from(spans)
    };

    frame.render_widget(
        Paragraph::new(line).style(Style::default().bg(theme.status_bar_bg)),
        area,
    );
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn render_help_popup(frame: &mut Frame, theme: &ThemeColors) {
    let area = centered_rect(46, 13, frame.area());
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from("  j / k, arrows   select a reading"),
        Line::from("  h / l           adjust by 1"),
        Line::from("  H / L           adjust by 10"),
        Line::from("  0               clear the reading"),
        Line::from("  r               reset all readings"),
        Line::from("  b               score breakdown"),
        Line::from("  q               quit"),
        Line::from(""),
        Line::from("  Any key closes this help."),
    ];
    let popup = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.popup_border))
            .title(Span::styled(" Help ", theme.popup_title))
            .style(Style::default().bg(theme.popup_bg)),
    );
    frame.render_widget(popup, area);
}

fn render_breakdown_popup(frame: &mut Frame, app: &App, theme: &ThemeColors) {
    let area = centered_rect(44, 11, frame.area());
    frame.render_widget(Clear, area);

    let mut lines = vec![Line::from("")];
    for factor in &app.score.breakdown.factors {
        lines.push(Line::from(format!(
            "  {:<10} {:>6.1} x {:.2} = {:>6.2}",
            factor.label, factor.normalized, factor.weight, factor.contribution
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!(
            "  Total {:>20.2} -> {}",
            app.score.breakdown.total, app.score.score
        ),
        theme.header_style,
    )));

    let popup = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.popup_border))
            .title(Span::styled(" Score breakdown ", theme.popup_title))
            .style(Style::default().bg(theme.popup_bg)),
    );
    frame.render_widget(popup, area);
}
