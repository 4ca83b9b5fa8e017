//! TUI rendering with ratatui
//!
//! Board, side panel and input line for the game screen.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Color as Peg, Pin};
use crate::game::{MAX_ATTEMPTS, Outcome};
use crate::output::RULES;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(14),    // Main content
            Constraint::Length(3),  // Input area
            Constraint::Length(7),  // Messages
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    if app.show_rules {
        render_rules(f, main_chunks[1]);
    } else {
        render_info_panel(f, app, main_chunks[1]);
    }

    render_input(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
}

fn rounded(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 MASTERMIND")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(rounded("").style(Style::default().fg(Color::Cyan)));
    f.render_widget(header, area);
}

const fn peg_color(peg: Peg) -> Color {
    match peg {
        Peg::Red => Color::Red,
        Peg::Blue => Color::Blue,
        Peg::White => Color::White,
        Peg::Yellow => Color::Yellow,
        Peg::Green => Color::Green,
    }
}

fn peg_span(peg: Peg) -> Span<'static> {
    Span::styled(
        format!(" {} ", peg.letter()),
        Style::default()
            .fg(Color::Black)
            .bg(peg_color(peg))
            .add_modifier(Modifier::BOLD),
    )
}

fn pin_span(pin: Pin) -> Span<'static> {
    let style = match pin {
        Pin::Exact => Style::default()
            .fg(Color::LightRed)
            .add_modifier(Modifier::BOLD),
        Pin::Partial => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
        Pin::None => Style::default().fg(Color::DarkGray),
    };
    Span::styled(format!("{} ", pin.symbol()), style)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let attempts = app.session.attempts();
    let mut lines = Vec::with_capacity(MAX_ATTEMPTS + 2);

    for row in 1..=MAX_ATTEMPTS {
        let mut spans = vec![Span::styled(
            format!("{row:>2}  "),
            Style::default().fg(Color::DarkGray),
        )];

        if let Some(attempt) = attempts.get(row - 1) {
            for &peg in attempt.guess.pegs() {
                spans.push(peg_span(peg));
                spans.push(Span::raw(" "));
            }
            spans.push(Span::raw("  "));
            spans.extend(attempt.feedback.pins().iter().map(|&p| pin_span(p)));
        } else if row == app.session.next_index() && !app.session.is_over() {
            spans.push(Span::styled(
                " ?   ?   ? ",
                Style::default().fg(Color::Yellow),
            ));
        } else {
            spans.push(Span::styled(
                " ·   ·   · ",
                Style::default().fg(Color::DarkGray),
            ));
        }
        lines.push(Line::from(spans));
    }

    if app.session.is_over() {
        let mut spans = vec![Span::raw("Code: ")];
        for &peg in app.session.code().pegs() {
            spans.push(peg_span(peg));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(spans));
    }

    let title = format!(" Board ({} left) ", app.session.remaining());
    let paragraph = Paragraph::new(lines).block(rounded(&title));
    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![Line::from(Span::styled(
        "Colors",
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    for peg in Peg::ALL {
        lines.push(Line::from(vec![
            peg_span(peg),
            Span::raw(format!(" {}", peg.name())),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Pins",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(vec![pin_span(Pin::Exact), Span::raw("right color, right place")]));
    lines.push(Line::from(vec![pin_span(Pin::Partial), Span::raw("right color, wrong place")]));
    lines.push(Line::from(vec![pin_span(Pin::None), Span::raw("no match")]));

    lines.push(Line::from(""));
    let status = match app.session.outcome() {
        Outcome::Won => Span::styled("Won", Style::default().fg(Color::Green)),
        Outcome::Lost => Span::styled("Lost", Style::default().fg(Color::Red)),
        Outcome::Unresolved if app.input_mode == InputMode::GameOver => {
            Span::styled("Abandoned", Style::default().fg(Color::DarkGray))
        }
        Outcome::Unresolved => Span::styled("Playing", Style::default().fg(Color::Yellow)),
    };
    lines.push(Line::from(vec![Span::raw("Status:     "), status]));

    let high = app.high_score.as_ref().map_or_else(
        || "not set".to_string(),
        |record| format!("{} by {}", record.attempts, record.name),
    );
    lines.push(Line::from(format!("High score: {high}")));
    lines.push(Line::from(format!(
        "Games:      {} played, {} won",
        app.stats.games_played, app.stats.games_won
    )));

    let paragraph = Paragraph::new(lines)
        .block(rounded(" Info (F1: rules) "))
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_rules(f: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new(RULES)
        .block(rounded(" Rules (F1: close) "))
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, hint) = match app.input_mode {
        InputMode::Guess => (" Guess ", "Enter: submit  Esc: give up"),
        InputMode::Name => (" Your name ", "Enter: save"),
        InputMode::GameOver => (" Game over ", "n: new game  q: quit"),
    };

    let line = Line::from(vec![
        Span::styled(
            format!("> {}", app.input_buffer),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("    {hint}"),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let paragraph = Paragraph::new(line).block(rounded(title));
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .messages
        .iter()
        .map(|message| {
            let style = match message.style {
                MessageStyle::Info => Style::default().fg(Color::Gray),
                MessageStyle::Success => Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(Line::from(Span::styled(message.text.clone(), style)))
        })
        .collect();

    let list = List::new(items).block(rounded(" Messages "));
    f.render_widget(list, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Code, Color::*};
    use crate::game::GameSession;
    use crate::score::MemoryScoreStore;
    use rand::{SeedableRng, rngs::StdRng};
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(90, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    fn app() -> App {
        let mut app = App::new(
            Box::new(MemoryScoreStore::new()),
            StdRng::seed_from_u64(1),
        );
        app.session = GameSession::with_code(Code::new([Red, Blue, Green]));
        app
    }

    #[test]
    fn renders_board_and_info() {
        let mut app = app();
        app.session.submit("y b y").unwrap();
        let screen = draw(&app);

        assert!(screen.contains("MASTERMIND"));
        assert!(screen.contains("Board (9 left)"));
        assert!(screen.contains("R O O"));
        assert!(screen.contains("High score: not set"));
    }

    #[test]
    fn reveals_code_when_over() {
        let mut app = app();
        app.session.submit("r b g").unwrap();
        let screen = draw(&app);
        assert!(screen.contains("Code:"));
        assert!(screen.contains("Won"));
    }

    #[test]
    fn rules_panel_replaces_info() {
        let mut app = app();
        app.show_rules = true;
        let screen = draw(&app);
        assert!(screen.contains("Rules (F1: close)"));
        assert!(!screen.contains("High score:"));
    }
}
