use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, inner};

const LOGO: &str = r#"
 _   _   ___   _____  ____    ___   _____
| | | | / _ \ |_   _||  _ \  / _ \ |_   _|
| |_| || | | |  | |  | |_) || | | |  | |
|  _  || |_| |  | |  |  __/ | |_| |  | |
|_| |_| \___/   |_|  |_|     \___/   |_|
           (  )   (   )  )
            ) (   )  (  (
          _______________
          \_____________/
"#;

const HINTS: &str = "[Enter] Deal  [Q] Quit  [Esc] Back  [↑/↓] Move  [+/-] Adjust";

pub(super) fn draw_menu(f: &mut Frame, app: &AppState) {
    let area = centered_rect(80, 80, f.area());
    f.render_widget(Clear, area);
    f.render_widget(Block::default().title("hotpot").borders(Borders::ALL), area);

    let steam = Style::default().fg(Color::LightRed);
    let logo: Vec<Line> = LOGO.lines().map(|l| Line::styled(l.to_string(), steam)).collect();
    let [logo_area, config_area] = Layout::vertical([
        Constraint::Length(logo.len() as u16 + 1),
        Constraint::Min(3),
    ])
    .areas(inner(area));

    // Unwrapped so the art keeps its spacing
    f.render_widget(Paragraph::new(logo).alignment(Alignment::Center), logo_area);
    f.render_widget(
        Paragraph::new(config_lines(app)).alignment(Alignment::Center),
        config_area,
    );
}

fn config_lines(app: &AppState) -> Vec<Line<'static>> {
    let selected = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let header = Line::styled("Game setup", Style::default().add_modifier(Modifier::BOLD));
    let items = app.menu_items_display().into_iter().enumerate().map(|(i, text)| {
        if i == app.menu_index {
            Line::styled(format!("> {text} <"), selected)
        } else {
            Line::raw(text)
        }
    });
    std::iter::once(header)
        .chain(items)
        .chain([Line::raw(""), Line::styled(HINTS, Style::default().add_modifier(Modifier::DIM))])
        .collect()
}
