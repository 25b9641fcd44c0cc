use crate::cards::{Card, Category};
use crate::game::{GameStatus, TurnPhase};
use crate::player::Player;
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, inner};

pub(super) fn draw_table(f: &mut Frame, app: &AppState) {
    let size = f.area();
    let header_height: u16 = 2 + 2;
    let status_height: u16 = 3 + 2;

    let [header_area, seats_area, status_area] = Layout::vertical([
        Constraint::Length(header_height),
        Constraint::Min(6),
        Constraint::Length(status_height),
    ])
    .areas(size);

    let game = &app.game;
    let phase = match game.phase() {
        TurnPhase::Draw => "Draw",
        TurnPhase::Discard => "Discard",
    };
    let acting = game.player(game.current()).map_or("?", |p| p.name());
    let header_lines = vec![
        Line::from(format!(
            "Deck: {}   Turn #{}   Acting: {}   Phase: {}",
            game.deck_remaining(),
            game.turn(),
            acting,
            phase
        )),
        Line::from(outcome_line(app)),
    ];
    let header =
        Paragraph::new(header_lines).block(Block::default().title("Hotpot").borders(Borders::ALL));
    f.render_widget(header, header_area);

    // Seats in a 2x2 grid: 1 2 on top, 4 3 below so turn order runs clockwise.
    let halves = [Constraint::Percentage(50); 2];
    let rows: [Rect; 2] = Layout::vertical(halves).areas(seats_area);
    for (r, row) in rows.into_iter().enumerate() {
        let cols: [Rect; 2] = Layout::horizontal(halves).areas(row);
        for (c, cell) in cols.into_iter().enumerate() {
            let idx = if r == 0 { c } else { 3 - c };
            if let Some(p) = game.players().get(idx) {
                render_player_panel(f, cell, app, idx, p);
            }
        }
    }

    f.render_widget(Block::default().borders(Borders::ALL).title("Status"), status_area);
    let [actions_area, keys_area] =
        Layout::horizontal([Constraint::Percentage(65), Constraint::Percentage(35)])
            .areas(inner(status_area));

    let mut left_info: Vec<Line> = Vec::new();
    if game.is_over() {
        left_info.push(Line::from("Game over. Press N for a new game."));
    } else if let Some(seat) = app.acting_human() {
        let action_style = |enabled: bool| {
            if enabled {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::DIM)
            }
        };
        let drawing = game.phase() == TurnPhase::Draw;
        let can_steal = drawing && !game.steal_candidates(seat).is_empty();
        left_info.push(Line::from(vec![
            Span::raw("Actions: "),
            Span::styled("D draw", action_style(drawing)),
            Span::raw(" • "),
            Span::styled("1-4 take discard", action_style(can_steal)),
            Span::raw(" • "),
            Span::styled("←/→ select", action_style(!drawing)),
            Span::raw(" • "),
            Span::styled("Enter discard", action_style(!drawing)),
        ]));
    } else {
        left_info.push(Line::from(format!("Waiting for {acting}...")));
    }
    if let Some(err) = app.action_error() {
        left_info.push(Line::from(Span::styled(
            format!("Error: {err}"),
            Style::default().fg(Color::Red),
        )));
    }

    let right_keys = vec![Line::from("? help • H history"), Line::from("M menu • X quit game")];
    f.render_widget(Paragraph::new(left_info).wrap(Wrap { trim: true }), actions_area);
    f.render_widget(Paragraph::new(right_keys).alignment(Alignment::Right), keys_area);

    if app.help_open() {
        draw_help(f);
    } else if app.history_open() {
        draw_history(f, app);
    }
}

fn outcome_line(app: &AppState) -> String {
    let game = &app.game;
    let name = |seat: usize| game.player(seat).map_or("?", |p| p.name());
    match game.status() {
        GameStatus::Won(seat) => format!("{} WINS the game!", name(seat)),
        GameStatus::Exhausted => format!(
            "Deck exhausted. No one reached {} sets. Draw.",
            game.config().winning_sets
        ),
        GameStatus::Abandoned => format!("{} quit the game.", name(game.current())),
        _ => format!("First to hold {} sets wins.", game.config().winning_sets),
    }
}

/// Whose cards are face up: everyone's once the game ends or when no
/// human plays, otherwise the acting human (or the only human).
fn hand_visible(app: &AppState, idx: usize) -> bool {
    let humans = app.game.config().humans;
    if app.game.is_over() || humans == 0 {
        return true;
    }
    match app.acting_human() {
        Some(seat) => seat == idx,
        None => humans == 1 && idx == 0,
    }
}

fn render_player_panel(f: &mut Frame, area: Rect, app: &AppState, idx: usize, p: &Player) {
    let game = &app.game;
    let mut title = format!("{} ({})", p.name(), idx + 1);
    title.push_str(if p.is_human() { " [HUMAN]" } else { " [CPU]" });
    if idx == game.current() && !game.is_over() {
        title.push_str(" [Act]");
    }
    let mut block = Block::default().title(title).borders(Borders::ALL);
    if game.winner() == Some(idx) {
        block = block.border_style(Style::default().fg(Color::Green));
    } else if idx == game.current() && !game.is_over() {
        block = block.border_style(Style::default().fg(Color::Yellow));
    }

    let dim = Style::default().add_modifier(Modifier::DIM);
    let mut lines: Vec<Line> = Vec::new();
    if game.is_over() {
        lines.push(Line::from(format!(
            "Sets: {}   Score: {}   Left in hand: {}",
            p.sets_count(),
            p.score(),
            p.hand_size()
        )));
    } else if hand_visible(app, idx) {
        lines.push(Line::from(format!(
            "Hand: {}   Sets in hand: {}",
            p.hand_size(),
            game.sets_in_hand(idx)
        )));
    } else {
        lines.push(Line::from(format!("Hand: {}", p.hand_size())));
    }
    lines.push(match p.top_discard() {
        Some(card) => Line::from(vec![
            Span::raw(format!("Discards ({}): ", p.discard_pile().len())),
            card_span(card, false),
        ]),
        None => Line::from(Span::styled("No discards yet.", dim)),
    });

    if hand_visible(app, idx) {
        let cursor = (app.acting_human() == Some(idx) && game.phase() == TurnPhase::Discard)
            .then_some(app.cursor);
        let mut spans: Vec<Span> = Vec::with_capacity(p.hand_size() * 2);
        for (i, card) in p.hand().as_slice().iter().enumerate() {
            spans.push(card_span(*card, cursor == Some(i)));
            spans.push(Span::raw(" "));
        }
        if spans.is_empty() {
            spans.push(Span::styled("(empty hand)", dim));
        }
        lines.push(Line::from(spans));
    } else {
        lines.push(Line::from(Span::styled(format!("{} cards hidden", p.hand_size()), dim)));
    }

    if game.is_over() {
        for (i, set) in p.completed_sets().iter().enumerate() {
            lines.push(Line::from(vec![
                Span::styled(format!("Set {} [{}]: ", i + 1, set.kind), dim),
                card_span(set.cards[0], false),
                Span::raw(" "),
                card_span(set.cards[1], false),
                Span::raw(" "),
                card_span(set.cards[2], false),
            ]));
        }
    }

    let para = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    f.render_widget(para, area);
}

fn category_color(category: Category) -> Color {
    match category {
        Category::Noodles => Color::Yellow,
        Category::Seafood => Color::Cyan,
        Category::Greens => Color::Green,
        Category::Spices => Color::Red,
        Category::Veggies => Color::Magenta,
        Category::Meat => Color::Blue,
        Category::Mushrooms => Color::White,
        Category::Carbs => Color::Yellow,
    }
}

fn card_span(card: Card, selected: bool) -> Span<'static> {
    let mut style = Style::default().fg(category_color(card.category()));
    if selected {
        style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
    }
    Span::styled(format!("[{card}]"), style)
}

fn draw_popup(f: &mut Frame, title: &str, lines: Vec<Line>) {
    let area = centered_rect(70, 80, f.area());
    f.render_widget(Clear, area);
    f.render_widget(Block::default().title(title.to_string()).borders(Borders::ALL), area);
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner(area));
}

fn draw_history(f: &mut Frame, app: &AppState) {
    let entries = app.game.history_recent_offset(AppState::HISTORY_PAGE_SIZE, app.history_offset());
    let mut lines: Vec<Line> =
        entries.iter().map(|entry| Line::from(app.game.describe_entry(entry))).collect();
    if lines.is_empty() {
        lines.push(Line::from("No moves yet."));
    }
    lines.push(Line::from(""));
    lines.push(Line::styled(
        "Up/Down scroll • Close: H or Esc",
        Style::default().add_modifier(Modifier::DIM),
    ));
    draw_popup(f, "History", lines);
}

fn draw_help(f: &mut Frame) {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::styled("Goal:", bold),
        Line::from("- Hold three sets at once: three identical cards,"),
        Line::from("  or one of each ingredient in a category."),
        Line::from(""),
        Line::styled("Your turn:", bold),
        Line::from("- D: draw from the deck"),
        Line::from("- 1-4: take the top discard of that seat"),
        Line::from("- Left / Right: select a card"),
        Line::from("- Enter: discard the selected card"),
        Line::from("- X: quit the current game"),
        Line::from(""),
        Line::styled("Table:", bold),
        Line::from("- N: new game (after game over)"),
        Line::from("- H: turn history"),
        Line::from("- Q: exit"),
        Line::from(""),
        Line::styled("Menu:", bold),
        Line::from("- M: open or close the menu"),
        Line::from("- Up / Down: pick a setting"),
        Line::from("- + / -: change it"),
        Line::from("- Enter: apply and deal"),
        Line::from("- Esc: back to the table"),
        Line::from(""),
        Line::from("Press ? or Esc to close"),
    ];
    draw_popup(f, "Help", lines);
}
