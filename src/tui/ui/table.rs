use crate::cards::{Card, Rank, Suit};
use crate::game::{Action, Game};
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{card_slots, centered_rect, inner};

const CARD_WIDTH: u16 = 7;

pub(super) fn draw_table(f: &mut Frame, app: &AppState) {
    let size = f.area();
    let status_lines: u16 = 3;
    let status_height: u16 = status_lines + 2; // content + borders

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // header
            Constraint::Length(5),             // board
            Constraint::Length(9),             // seats
            Constraint::Min(3),                // event feed
            Constraint::Length(status_height), // status bar
        ])
        .split(size);

    let game = &app.game;
    let cfg = game.config();
    let header = Paragraph::new(Line::from(format!(
        "Round {}   Dealer: {}   Blinds: {}/{}   Pot: {}   Top wager: {}",
        app.view.round,
        game.players()[game.dealer()].name(),
        cfg.small_blind,
        cfg.big_blind,
        game.pot(),
        game.top_wager(),
    )))
    .block(Block::default().title("heads-up").borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    // Board (5 slots), only what has been revealed so far
    let phase = app.view.phase.map(|p| p.label()).unwrap_or("Waiting");
    let board_block = Block::default().title(format!("Board: {phase}")).borders(Borders::ALL);
    let board_area = chunks[1];
    f.render_widget(board_block, board_area);
    let slots = card_slots(inner(board_area), 5, CARD_WIDTH);
    for (i, slot) in slots.iter().enumerate() {
        render_card_widget(f, *slot, CardFace::from(app.view.board.get(i).copied()), None);
    }

    let seat_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);
    for (idx, area) in seat_chunks.iter().enumerate() {
        render_seat(f, *area, app, idx);
    }

    draw_feed(f, chunks[3], app);
    draw_status(f, chunks[4], app);

    if app.help_open() {
        draw_help(f);
    } else if app.history_open() {
        draw_history(f, app);
    }
}

fn draw_feed(f: &mut Frame, area: Rect, app: &AppState) {
    let block = Block::default().title("Table log").borders(Borders::ALL);
    let rows = inner(area).height as usize;
    let lines: Vec<&str> = app.feed().collect();
    let start = lines.len().saturating_sub(rows);
    let shown: Vec<Line> = lines[start..].iter().map(|l| Line::from(*l)).collect();
    f.render_widget(Paragraph::new(shown).block(block), area);
}

fn draw_status(f: &mut Frame, area: Rect, app: &AppState) {
    f.render_widget(Block::default().borders(Borders::ALL).title("Status"), area);
    let status_inner = inner(area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(status_inner);

    let game = &app.game;
    let mut left_info: Vec<Line> = Vec::new();
    if let Some(msg) = &app.view.game_over {
        left_info.push(Line::from(Span::styled(
            msg.clone(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
        left_info.push(Line::from("Space: new game • M: menu"));
    } else if let Some(result) = &app.view.result {
        left_info.push(Line::from(Span::styled(
            result.message.clone(),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )));
        left_info.push(Line::from("Space: next round"));
    } else if app.busy() {
        left_info.push(Line::from("Dealing..."));
    } else if game.is_halted() {
        left_info.push(Line::from(Span::styled(
            "Session halted after an internal fault. M: menu",
            Style::default().fg(Color::Red),
        )));
    } else {
        let current = game.current();
        let name = game.players()[current].name();
        left_info.push(Line::from(format!("{name} to act, {} to call", game.to_call(current))));
        left_info.push(action_line(game, current));
    }

    if let Some(err) = app.action_error() {
        left_info.push(Line::from(Span::styled(
            format!("Error: {err}"),
            Style::default().fg(Color::Red),
        )));
    }

    let right_keys = vec![Line::from("? help • H history"), Line::from("M menu")];
    let left_para = Paragraph::new(left_info).wrap(Wrap { trim: true });
    let right_para =
        Paragraph::new(right_keys).wrap(Wrap { trim: true }).alignment(Alignment::Right);
    f.render_widget(left_para, cols[0]);
    f.render_widget(right_para, cols[1]);
}

/// Key hints for the acting seat; actions the rules reject right now are dimmed.
fn action_line(game: &Game, seat: usize) -> Line<'static> {
    let Some(p) = game.player(seat) else {
        return Line::from("");
    };
    let top = game.top_wager();
    let to_call = game.to_call(seat);
    let has_chips = p.chips() > 0;
    let style = |enabled: bool| {
        if enabled {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        }
    };
    let options = [
        (Action::Fold, 'f', true),
        (Action::Call, 'c', to_call > 0 && has_chips),
        (Action::Raise, 'r', top > 0 && has_chips),
        (Action::Bet, 'b', top == 0 && has_chips),
        (Action::Check, 'k', to_call == 0),
    ];
    let mut spans = vec![Span::raw("Keys: ")];
    for (i, (action, key, enabled)) in options.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" • "));
        }
        let key = if seat == 1 { key.to_ascii_uppercase() } else { key };
        spans.push(Span::styled(format!("{key} {}", action.label().to_lowercase()), style(enabled)));
    }
    Line::from(spans)
}

fn render_seat(f: &mut Frame, seat_area: Rect, app: &AppState, idx: usize) {
    let game = &app.game;
    let Some(p) = game.player(idx) else {
        return;
    };
    let mut title = p.name().to_string();
    if idx == game.dealer() {
        title.push_str(" [D]");
    }
    let acting = app.visible_seat() == Some(idx);
    if acting {
        title.push_str(" [Act]");
    }
    let result = app.view.result.as_ref();
    let won = result.is_some_and(|r| r.verdict.winner() == Some(idx));

    let mut block = Block::default().title(title).borders(Borders::ALL);
    if p.folded() {
        block = block.border_style(Style::default().fg(Color::DarkGray));
    } else if won {
        block = block.border_style(Style::default().fg(Color::Green));
    } else if acting {
        block = block.border_style(Style::default().fg(Color::Yellow));
    } else if p.chips() == 0 && !p.hand().is_empty() {
        block = block.border_style(Style::default().fg(Color::LightRed));
    }

    let dim = Style::default().add_modifier(Modifier::DIM);
    let mut lines: Vec<Line> = Vec::with_capacity(4);
    lines.push(Line::from(format!("Chips: {}", p.chips())));
    lines.push(Line::from(format!("Wager: {}", p.wager())));
    if p.folded() {
        lines.push(Line::from(Span::styled("Folded", dim)));
    } else if p.chips() == 0 && !p.hand().is_empty() {
        lines.push(Line::from("All in"));
    }
    if let Some(r) = result {
        if let Some(categories) = r.categories {
            lines.push(Line::from(format!("Hand: {}", categories[idx].name())));
        }
        if r.amounts[idx] > 0 {
            lines.push(Line::from(format!("Takes {}", r.amounts[idx])));
        }
    }

    f.render_widget(block, seat_area);
    let seat_inner = inner(seat_area);
    let split = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(3)])
        .split(seat_inner);
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), split[0]);

    let faces = hole_faces(app, idx);
    let slots = card_slots(split[1], 2, CARD_WIDTH);
    for (slot, face) in slots.iter().zip(faces) {
        render_card_widget(f, *slot, face, Some(Color::Cyan));
    }
}

/// Hole cards stay face down except for the seat to act, and for both seats
/// while a showdown result is on the table.
fn hole_faces(app: &AppState, idx: usize) -> [CardFace; 2] {
    if let Some(result) = &app.view.result {
        return match result.hands[idx] {
            Some(h) => [CardFace::Up(h.first()), CardFace::Up(h.second())],
            None => [CardFace::Empty, CardFace::Empty],
        };
    }
    let hand = app.game.players()[idx].hand();
    match (hand, app.visible_seat() == Some(idx)) {
        ([a, b], true) => [CardFace::Up(*a), CardFace::Up(*b)],
        ([_, _], false) => [CardFace::Down, CardFace::Down],
        _ => [CardFace::Empty, CardFace::Empty],
    }
}

fn draw_history(f: &mut Frame, app: &AppState) {
    let area = centered_rect(70, 80, f.area());
    let block = Block::default().title("History").borders(Borders::ALL);
    let mut lines: Vec<Line> = Vec::new();
    let entries = app.game.history_recent_offset(AppState::HISTORY_PAGE_SIZE, app.history_offset());
    if entries.is_empty() {
        lines.push(Line::from("No history yet."));
    } else {
        for entry in entries {
            let amount = entry.amount.map(|v| format!(" {v}")).unwrap_or_default();
            let name = app.game.player(entry.seat).map_or("?", |p| p.name());
            let line = format!(
                "#{} {} {}{} [{}]",
                entry.round,
                name,
                entry.verb.label(),
                amount,
                entry.phase.label()
            );
            lines.push(Line::from(line));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Up/Down scroll • Close: H or Esc",
        Style::default().add_modifier(Modifier::DIM),
    )));
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

fn draw_help(f: &mut Frame) {
    let area = centered_rect(70, 80, f.area());
    let block = Block::default().title("Help").borders(Borders::ALL);
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(Span::styled("Table (first seat lowercase, second seat uppercase):", bold)),
        Line::from("- f / F: fold"),
        Line::from("- c / C: call"),
        Line::from("- r / R: raise to twice the top wager"),
        Line::from("- b / B: bet one big blind"),
        Line::from("- k / K: check"),
        Line::from("- Space: next round / new game"),
        Line::from("- H: history"),
        Line::from(""),
        Line::from(Span::styled("Menu:", bold)),
        Line::from("- M: open / close menu"),
        Line::from("- Up / Down: move selection"),
        Line::from("- + / -: adjust value"),
        Line::from("- Enter: start a new game"),
        Line::from("- Esc: back to the table"),
        Line::from("- Q: quit (menu)"),
        Line::from(""),
        Line::from("Close help: ? or Esc"),
    ];
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

#[derive(Debug, Clone, Copy)]
enum CardFace {
    Up(Card),
    Down,
    Empty,
}

impl From<Option<Card>> for CardFace {
    fn from(card: Option<Card>) -> Self {
        card.map_or(CardFace::Empty, CardFace::Up)
    }
}

fn suit_glyph_and_style(s: Suit) -> (char, Style) {
    match s {
        Suit::Hearts => ('♥', Style::default().fg(Color::Red)),
        Suit::Diamonds => ('♦', Style::default().fg(Color::Red)),
        Suit::Spades => ('♠', Style::default().fg(Color::White)),
        Suit::Clubs => ('♣', Style::default().fg(Color::White)),
    }
}

fn rank_label(r: Rank) -> String {
    match r {
        Rank::Ten => "10".to_string(),
        other => other.to_char().to_string(),
    }
}

fn render_card_widget(f: &mut Frame, area: Rect, face: CardFace, border: Option<Color>) {
    let mut block = Block::default().borders(Borders::ALL).title_alignment(Alignment::Center);
    if let Some(color) = border {
        block = block.border_style(Style::default().fg(color));
    }
    let inner = inner(area);
    f.render_widget(block, area);
    let content = match face {
        CardFace::Up(c) => {
            let (sg, style) = suit_glyph_and_style(c.suit());
            Line::from(Span::styled(format!("{}{}", rank_label(c.rank()), sg), style))
        }
        CardFace::Down => Line::from(Span::styled("##", Style::default().fg(Color::Blue))),
        CardFace::Empty => Line::from("  "),
    };
    let para = Paragraph::new(content).alignment(Alignment::Center);
    f.render_widget(para, inner);
}
