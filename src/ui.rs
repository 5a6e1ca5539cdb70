use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io;
use tracing::debug;
use trip_planner::format::{
    booking_lines, confirmation_message, confirmation_title, format_date,
    missing_selection_message, parse_date, price_lines, total_label, ERROR_TITLE,
};
use trip_planner::{BookingError, Category, Ledger};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Destination,
    FromDate,
    ToDate,
    Category,
}

impl Field {
    pub fn next(&self) -> Self {
        match self {
            Field::Destination => Field::FromDate,
            Field::FromDate => Field::ToDate,
            Field::ToDate => Field::Category,
            Field::Category => Field::Destination,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Field::Destination => Field::Category,
            Field::FromDate => Field::Destination,
            Field::ToDate => Field::FromDate,
            Field::Category => Field::ToDate,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Field::Destination => "Destination city",
            Field::FromDate => "Date from (dd/mm/yyyy)",
            Field::ToDate => "Date to (dd/mm/yyyy)",
            Field::Category => "Category (←/→)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Info,
    Error,
    Listing,
}

/// Modal window drawn over the form until dismissed
#[derive(Debug, Clone, PartialEq)]
pub struct Dialog {
    pub kind: DialogKind,
    pub title: String,
    pub lines: Vec<String>,
    pub scroll: u16,
}

impl Dialog {
    fn new(kind: DialogKind, title: impl Into<String>, lines: Vec<String>) -> Self {
        Dialog {
            kind,
            title: title.into(),
            lines,
            scroll: 0,
        }
    }
}

/// Form state. The ledger itself is owned by the caller and handed to each action.
pub struct App {
    pub destination: String,
    pub from_input: String,
    pub to_input: String,
    pub category: Option<Category>,
    pub focus: Field,
    pub dialog: Option<Dialog>,
    pub currency_unit: String,
}

impl App {
    pub fn new(currency_unit: impl Into<String>, today: NaiveDate) -> Self {
        Self {
            destination: String::new(),
            from_input: format_date(today),
            to_input: format_date(today),
            category: None,
            focus: Field::Destination,
            dialog: None,
            currency_unit: currency_unit.into(),
        }
    }

    pub fn next_field(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn previous_field(&mut self) {
        self.focus = self.focus.previous();
    }

    /// None → Hotel → Flight → ... → Car → Hotel
    pub fn next_category(&mut self) {
        self.category = match self.category {
            None => Category::from_index(0),
            Some(c) => Category::from_index((c.index() + 1) % Category::ALL.len()),
        };
    }

    pub fn previous_category(&mut self) {
        let last = Category::ALL.len() - 1;
        self.category = match self.category {
            None | Some(Category::Hotel) => Category::from_index(last),
            Some(c) => Category::from_index(c.index() - 1),
        };
    }

    fn focused_input(&mut self) -> Option<&mut String> {
        match self.focus {
            Field::Destination => Some(&mut self.destination),
            Field::FromDate => Some(&mut self.from_input),
            Field::ToDate => Some(&mut self.to_input),
            Field::Category => None,
        }
    }

    /// "Book" action
    pub fn book(&mut self, ledger: &mut Ledger) {
        let (from, to) = match (parse_date(&self.from_input), parse_date(&self.to_input)) {
            (Some(from), Some(to)) => (from, to),
            (from, _) => {
                let bad = if from.is_none() { &self.from_input } else { &self.to_input };
                self.dialog = Some(Dialog::new(
                    DialogKind::Error,
                    ERROR_TITLE,
                    vec![format!("Invalid date: '{}'. Use dd/mm/yyyy.", bad)],
                ));
                return;
            }
        };

        self.dialog = Some(
            match ledger.add_booking(self.category, self.destination.clone(), from, to) {
                Ok(confirmation) => Dialog::new(
                    DialogKind::Info,
                    confirmation_title(&confirmation),
                    vec![confirmation_message(&confirmation)],
                ),
                Err(BookingError::MissingSelection) => Dialog::new(
                    DialogKind::Error,
                    ERROR_TITLE,
                    vec![missing_selection_message().to_string()],
                ),
            },
        );
    }

    /// "Show table" action
    pub fn show_table(&mut self, ledger: &Ledger) {
        debug!(bookings = ledger.len(), "showing booking table");
        self.dialog = Some(Dialog::new(
            DialogKind::Listing,
            "Bookings",
            booking_lines(ledger.bookings(), &self.currency_unit),
        ));
    }

    /// "Show prices" action
    pub fn show_prices(&mut self, ledger: &Ledger) {
        self.dialog = Some(Dialog::new(
            DialogKind::Listing,
            "Price list",
            price_lines(&ledger.list_prices(), &self.currency_unit),
        ));
    }

    pub fn total_label(&self, ledger: &Ledger) -> String {
        total_label(ledger.total_cost(), &self.currency_unit)
    }

    /// Apply one key press. Returns `false` when the form should close.
    pub fn handle_key(&mut self, key: KeyEvent, ledger: &mut Ledger) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
        {
            return false;
        }

        if self.dialog.is_some() {
            match key.code {
                KeyCode::Esc | KeyCode::Enter => self.dialog = None,
                KeyCode::Down => {
                    if let Some(dialog) = self.dialog.as_mut() {
                        dialog.scroll = dialog.scroll.saturating_add(1);
                    }
                }
                KeyCode::Up => {
                    if let Some(dialog) = self.dialog.as_mut() {
                        dialog.scroll = dialog.scroll.saturating_sub(1);
                    }
                }
                _ => {}
            }
            return true;
        }

        match key.code {
            KeyCode::Esc => return false,
            KeyCode::Enter => self.book(ledger),
            KeyCode::F(2) => self.show_table(ledger),
            KeyCode::F(3) => self.show_prices(ledger),
            KeyCode::Tab | KeyCode::Down => self.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.previous_field(),
            KeyCode::Right if self.focus == Field::Category => self.next_category(),
            KeyCode::Left if self.focus == Field::Category => self.previous_category(),
            KeyCode::Backspace => {
                if let Some(input) = self.focused_input() {
                    input.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(input) = self.focused_input() {
                    input.push(c);
                }
            }
            _ => {}
        }

        true
    }
}

pub fn run_ui(app: &mut App, ledger: &mut Ledger) -> Result<()> {
    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let res = run_app(&mut terminal, app, ledger);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.context("Booking form failed")
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    ledger: &mut Ledger,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app, ledger))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if !app.handle_key(key, ledger) {
                return Ok(());
            }
        }
    }
}

fn ui(f: &mut Frame, app: &App, ledger: &Ledger) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Destination
            Constraint::Length(3), // Dates
            Constraint::Length(3), // Category
            Constraint::Length(3), // Total
            Constraint::Min(0),    // Spacer
            Constraint::Length(3), // Key help
        ])
        .split(f.size());

    let dates = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_input(f, chunks[0], app, Field::Destination, &app.destination);
    render_input(f, dates[0], app, Field::FromDate, &app.from_input);
    render_input(f, dates[1], app, Field::ToDate, &app.to_input);
    render_category(f, chunks[2], app);

    let total = Paragraph::new(Span::styled(
        app.total_label(ledger),
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
    ))
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(total, chunks[3]);

    render_help(f, chunks[5]);

    if let Some(dialog) = &app.dialog {
        render_dialog(f, dialog);
    }
}

fn field_block(app: &App, field: Field) -> Block<'static> {
    let color = if app.focus == field { Color::Yellow } else { Color::Cyan };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(format!(" {} ", field.title()))
}

fn render_input(f: &mut Frame, area: Rect, app: &App, field: Field, value: &str) {
    let input = Paragraph::new(value.to_string()).block(field_block(app, field));
    f.render_widget(input, area);

    if app.focus == field && app.dialog.is_none() {
        let x = area.x + 1 + value.chars().count() as u16;
        f.set_cursor(x.min(area.right().saturating_sub(2)), area.y + 1);
    }
}

fn render_category(f: &mut Frame, area: Rect, app: &App) {
    let mut spans = Vec::new();
    for category in Category::ALL {
        let style = if app.category == Some(category) {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {} ", category), style));
        spans.push(Span::raw(" "));
    }
    if app.category.is_none() {
        spans.push(Span::styled(
            "(none selected)",
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        ));
    }

    let selector = Paragraph::new(Line::from(spans)).block(field_block(app, Field::Category));
    f.render_widget(selector, area);
}

fn render_help(f: &mut Frame, area: Rect) {
    let key = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let help = Line::from(vec![
        Span::styled("Enter", key),
        Span::raw(" Book  "),
        Span::styled("F2", key),
        Span::raw(" Show table  "),
        Span::styled("F3", key),
        Span::raw(" Show prices  "),
        Span::styled("Tab", key),
        Span::raw(" Next field  "),
        Span::styled("Esc", key),
        Span::raw(" Quit"),
    ]);

    let bar = Paragraph::new(help).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(bar, area);
}

fn render_dialog(f: &mut Frame, dialog: &Dialog) {
    let (width, height, color) = match dialog.kind {
        DialogKind::Info => (60, 25, Color::Green),
        DialogKind::Error => (50, 20, Color::Red),
        DialogKind::Listing => (80, 70, Color::Cyan),
    };
    let area = centered_rect(width, height, f.size());

    let mut lines: Vec<Line> = dialog.lines.iter().map(|l| Line::from(l.as_str())).collect();
    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "(empty)",
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press Enter to close",
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
    )));

    let body = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((dialog.scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .title(format!(" {} ", dialog.title)),
        );

    f.render_widget(Clear, area);
    f.render_widget(body, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

/// Today's local date, used to prefill both date fields
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn app() -> App {
        App::new("RUB", NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
    }

    fn press(app: &mut App, ledger: &mut Ledger, code: KeyCode) -> bool {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE), ledger)
    }

    fn type_text(app: &mut App, ledger: &mut Ledger, text: &str) {
        for c in text.chars() {
            press(app, ledger, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_new_form_defaults() {
        let app = app();
        let ledger = Ledger::new();

        assert_eq!(app.from_input, "01/01/2024");
        assert_eq!(app.to_input, "01/01/2024");
        assert_eq!(app.category, None);
        assert_eq!(app.focus, Field::Destination);
        assert_eq!(app.total_label(&ledger), "Total cost: 0.00 RUB");
    }

    #[test]
    fn test_category_cycling() {
        let mut app = app();

        app.next_category();
        assert_eq!(app.category, Some(Category::Hotel));
        for _ in 0..4 {
            app.next_category();
        }
        assert_eq!(app.category, Some(Category::Car));
        app.next_category();
        assert_eq!(app.category, Some(Category::Hotel));
        app.previous_category();
        assert_eq!(app.category, Some(Category::Car));

        let mut fresh = self::app();
        fresh.previous_category();
        assert_eq!(fresh.category, Some(Category::Car));
    }

    #[test]
    fn test_book_without_category_shows_error() {
        let mut app = app();
        let mut ledger = Ledger::new();

        press(&mut app, &mut ledger, KeyCode::Enter);

        let dialog = app.dialog.clone().unwrap();
        assert_eq!(dialog.kind, DialogKind::Error);
        assert_eq!(dialog.lines, vec!["Please select a category.".to_string()]);
        assert!(ledger.is_empty());
        assert_eq!(ledger.total_cost(), dec!(0));
    }

    #[test]
    fn test_book_through_keys() {
        let mut app = app();
        let mut ledger = Ledger::new();

        type_text(&mut app, &mut ledger, "Paris");
        press(&mut app, &mut ledger, KeyCode::Tab); // from
        press(&mut app, &mut ledger, KeyCode::Tab); // to
        for _ in 0..10 {
            press(&mut app, &mut ledger, KeyCode::Backspace);
        }
        type_text(&mut app, &mut ledger, "03/01/2024");
        press(&mut app, &mut ledger, KeyCode::Tab); // category
        press(&mut app, &mut ledger, KeyCode::Right); // Hotel
        press(&mut app, &mut ledger, KeyCode::Enter);

        let dialog = app.dialog.clone().unwrap();
        assert_eq!(dialog.kind, DialogKind::Info);
        assert_eq!(dialog.title, "Booking Hotel");
        assert_eq!(
            dialog.lines,
            vec!["Hotel booked for destination: Paris. From: 01/01/2024. To: 03/01/2024".to_string()]
        );
        assert_eq!(ledger.total_cost(), dec!(90000));
        assert_eq!(app.total_label(&ledger), "Total cost: 90000.00 RUB");

        // Enter closes the dialog without booking again
        press(&mut app, &mut ledger, KeyCode::Enter);
        assert!(app.dialog.is_none());
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_invalid_date_does_not_book() {
        let mut app = app();
        let mut ledger = Ledger::new();
        app.category = Some(Category::Tour);
        app.to_input = "32/01/2024".to_string();

        app.book(&mut ledger);

        let dialog = app.dialog.clone().unwrap();
        assert_eq!(dialog.kind, DialogKind::Error);
        assert!(dialog.lines[0].contains("32/01/2024"));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_show_table_and_prices() {
        let mut app = app();
        let mut ledger = Ledger::new();
        app.category = Some(Category::Car);
        app.destination = "Oslo".to_string();
        app.book(&mut ledger);

        press(&mut app, &mut ledger, KeyCode::Esc);
        press(&mut app, &mut ledger, KeyCode::F(2));
        let table = app.dialog.clone().unwrap();
        assert_eq!(table.title, "Bookings");
        assert_eq!(
            table.lines,
            vec!["Car: Oslo from 01/01/2024 to 01/01/2024 - 2000.00 RUB".to_string()]
        );

        press(&mut app, &mut ledger, KeyCode::Esc);
        press(&mut app, &mut ledger, KeyCode::F(3));
        let prices = app.dialog.clone().unwrap();
        assert_eq!(prices.title, "Price list");
        assert_eq!(prices.lines.len(), 5);
        assert_eq!(prices.lines[1], "Flight: 9000.00 RUB per day");
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        let mut ledger = Ledger::new();

        // 'q' is ordinary text in the destination field
        assert!(press(&mut app, &mut ledger, KeyCode::Char('q')));
        assert_eq!(app.destination, "q");

        assert!(!app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), &mut ledger));
        assert!(!press(&mut app, &mut ledger, KeyCode::Esc));
    }
}
