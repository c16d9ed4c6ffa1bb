//! TUI layout and widget rendering.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Gauge, Paragraph, Row, Table};

use super::runtime::{App, Field};
use super::style;
use crate::balance::NO_DATA;
use crate::catalog::DEVICE_PRESETS;

/// Renders the full TUI frame.
pub fn render(frame: &mut Frame, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Min(12),   // body
            Constraint::Length(3), // autarky gauge
            Constraint::Length(1), // footer
        ])
        .split(frame.area());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(rows[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(12), Constraint::Min(6)])
        .split(columns[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(8)])
        .split(columns[1]);

    render_header(frame, app, rows[0]);
    render_inputs(frame, app, left[0]);
    render_heating(frame, app, left[1]);
    render_devices(frame, app, right[0]);
    render_balance(frame, app, right[1]);
    render_autarky_gauge(frame, app, rows[2]);
    render_footer(frame, app, rows[3]);
}

/// Header bar: preset name and the device preset offered for adding.
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let next = &DEVICE_PRESETS[app.preset_cursor];
    let header = Line::from(vec![
        Span::styled(
            " VAN-WERKSTATT ",
            Style::default()
                .fg(style::HEADER_FG)
                .bg(style::HEADER_BG)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            &app.preset_name,
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(
            " │ next device: {} ({:.0} W × {} h)",
            next.name, next.power_watts, next.hours_per_day
        )),
    ]);
    frame.render_widget(Paragraph::new(header), area);
}

fn render_inputs(frame: &mut Frame, app: &App, area: Rect) {
    let selected = app.selected_field();
    let lines: Vec<Line> = Field::ALL
        .iter()
        .map(|&field| {
            let marker = if field == selected { "▶ " } else { "  " };
            let style = if field == selected {
                Style::default()
                    .fg(style::SELECTED_FG)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::styled(format!("{marker}{:<20}", field.label()), style),
                Span::raw(app.field_display(field)),
            ])
        })
        .collect();

    let block = Block::default().title(" Inputs ").borders(Borders::ALL);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_heating(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().title(" Heating ").borders(Borders::ALL);
    let lines = match app.evaluation() {
        Ok(eval) => {
            let h = &eval.heating;
            vec![
                Line::from(format!(
                    "Volume {:.2} m³   Surface {:.2} m²",
                    h.volume_m3, h.surface_m2
                )),
                Line::from(format!(
                    "U {:.3} W/m²K   ΔT {:.1} K",
                    h.u_value, h.delta_t_kelvin
                )),
                Line::from(Span::styled(
                    format!("Heating power {:.3} kW", h.display_kw),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    h.sizing.label(),
                    Style::default().fg(style::sizing_color(h.sizing)),
                )),
            ]
        }
        Err(e) => vec![Line::from(Span::styled(
            e.to_string(),
            Style::default().fg(style::WARNING_FG),
        ))],
    };
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_devices(frame: &mut Frame, app: &App, area: Rect) {
    let devices = app.session().ledger().list();
    let block = Block::default()
        .title(format!(" Devices ({}) ", devices.len()))
        .borders(Borders::ALL);

    if devices.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "no devices recorded",
            Style::default().fg(style::NO_DATA_FG),
        )))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let rows: Vec<Row> = devices
        .iter()
        .enumerate()
        .map(|(i, d)| {
            let row = Row::new(vec![
                Cell::from(d.name.clone()),
                Cell::from(format!("{:.0} W", d.power_watts)),
                Cell::from(format!("{:.2} h", d.hours_per_day)),
                Cell::from(format!("{:.0} Wh", d.daily_energy_wh())),
                Cell::from(format!("{:.1} Ah", d.daily_charge_ah())),
            ]);
            if i == app.device_idx {
                row.style(Style::default().fg(style::SELECTED_FG))
            } else {
                row
            }
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Min(14),
            Constraint::Length(8),
            Constraint::Length(8),
            Constraint::Length(9),
            Constraint::Length(8),
        ],
    )
    .header(
        Row::new(vec!["Name", "Power", "Hours", "Energy", "Charge"])
            .style(Style::default().add_modifier(Modifier::BOLD)),
    )
    .block(block);
    frame.render_widget(table, area);
}

fn render_balance(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().title(" Energy Balance ").borders(Borders::ALL);
    let Ok(eval) = app.evaluation() else {
        frame.render_widget(Paragraph::new("").block(block), area);
        return;
    };
    let b = &eval.balance;
    let status_line = match &b.status {
        Some(status) => Span::styled(
            status.to_string(),
            Style::default()
                .fg(style::status_color(Some(status)))
                .add_modifier(Modifier::BOLD),
        ),
        None => Span::styled(NO_DATA, Style::default().fg(style::NO_DATA_FG)),
    };

    let lines = vec![
        Line::from(format!(
            "Solar {:.0} Wh   Alternator {:.0} Wh",
            b.solar_yield_wh, b.alternator_yield_wh
        )),
        Line::from(format!("Generation  {:.0} Wh", b.total_generation_wh)),
        Line::from(format!(
            "Consumption {:.0} Wh ({:.1} Ah)",
            b.total_consumption_wh, b.total_consumption_ah
        )),
        Line::from(vec![Span::raw("Status      "), status_line]),
    ];
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_autarky_gauge(frame: &mut Frame, app: &App, area: Rect) {
    let (ratio, label, color) = match app.evaluation() {
        Ok(eval) => {
            let b = &eval.balance;
            (
                b.autarky_percent.unwrap_or(0.0) / 100.0,
                b.autarky_display(),
                style::status_color(b.status.as_ref()),
            )
        }
        Err(_) => (0.0, NO_DATA.to_string(), style::NO_DATA_FG),
    };

    let gauge = Gauge::default()
        .block(Block::default().title(" Autarky ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(color))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(label);
    frame.render_widget(gauge, area);
}

/// Footer: key bindings, or the last rejected entry.
fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let footer = match &app.warning {
        Some(w) => Paragraph::new(Span::styled(
            format!(" rejected: {w}"),
            Style::default().fg(style::WARNING_FG),
        )),
        None => Paragraph::new(Span::styled(
            " ↑↓ field  ←→ adjust  Tab device  a add  j/k select  d delete  c clear  1/2/3 preset  q quit",
            Style::default().fg(style::FOOTER_FG),
        )),
    };
    frame.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn rendered(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn renders_preset_and_devices() {
        let app = App::new("weekender");
        let screen = rendered(&app);
        assert!(screen.contains("weekender"));
        assert!(screen.contains("Devices (4)"));
    }

    #[test]
    fn empty_ledger_shows_placeholder() {
        let mut app = App::new("weekender");
        app.clear_devices();
        let screen = rendered(&app);
        assert!(screen.contains("no devices recorded"));
        assert!(screen.contains(NO_DATA));
    }
}
