//! TUI application state and logic
//!
//! The form is a fixed list of fields. Each field is either showing its placeholder
//! or holding text the user typed; an unedited field contributes its default value
//! to the query.

use crate::core::{DEFAULT_DICTIONARY, Puzzle, QueryRequest, parse_length};
use crate::error::InputError;
use crate::output::export_csv;
use crate::solver::{QueryEngine, QueryResult, Scorer, ScoringStrategy};
use crate::wordlists::DictionaryStore;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use rand::seq::SliceRandom;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::path::PathBuf;
use tracing::{error, info};

/// Messages kept in the message panel
const MAX_MESSAGES: usize = 5;

/// Whether a field shows its placeholder or user text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldState {
    Placeholder,
    Edited,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Dictionary,
    Center,
    OtherLetters,
    MinLength,
    MaxLength,
    MustContain,
    ExportPath,
}

impl FieldKind {
    pub const ALL: [Self; 7] = [
        Self::Dictionary,
        Self::Center,
        Self::OtherLetters,
        Self::MinLength,
        Self::MaxLength,
        Self::MustContain,
        Self::ExportPath,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dictionary => "Dictionary",
            Self::Center => "Center letter",
            Self::OtherLetters => "Other letters",
            Self::MinLength => "Min length",
            Self::MaxLength => "Max length",
            Self::MustContain => "Must contain",
            Self::ExportPath => "Export to",
        }
    }

    const fn placeholder(self) -> &'static str {
        match self {
            Self::Dictionary => DEFAULT_DICTIONARY,
            Self::Center => "one letter",
            Self::OtherLetters => "six letters",
            Self::MinLength => "4",
            Self::MaxLength => "0 = no limit",
            Self::MustContain => "optional",
            Self::ExportPath => crate::commands::DEFAULT_EXPORT,
        }
    }

    /// Value used when the field was never edited
    const fn default_value(self) -> &'static str {
        match self {
            Self::Dictionary => DEFAULT_DICTIONARY,
            Self::MinLength => "4",
            Self::MaxLength => "0",
            Self::ExportPath => crate::commands::DEFAULT_EXPORT,
            Self::Center | Self::OtherLetters | Self::MustContain => "",
        }
    }

    const fn max_chars(self) -> Option<usize> {
        match self {
            Self::Center => Some(1),
            Self::OtherLetters => Some(6),
            _ => None,
        }
    }
}

/// One form field and its placeholder state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub kind: FieldKind,
    pub state: FieldState,
    value: String,
}

impl FormField {
    #[must_use]
    pub const fn new(kind: FieldKind) -> Self {
        Self {
            kind,
            state: FieldState::Placeholder,
            value: String::new(),
        }
    }

    /// Text to draw: the placeholder or what the user typed
    #[must_use]
    pub fn display_text(&self) -> &str {
        match self.state {
            FieldState::Placeholder => self.kind.placeholder(),
            FieldState::Edited => &self.value,
        }
    }

    /// Value fed into the query
    #[must_use]
    pub fn value(&self) -> &str {
        match self.state {
            FieldState::Placeholder => self.kind.default_value(),
            FieldState::Edited => &self.value,
        }
    }

    pub fn push(&mut self, c: char) {
        if self
            .kind
            .max_chars()
            .is_some_and(|max| self.value.chars().count() >= max)
        {
            return;
        }
        self.value.push(c);
        self.state = FieldState::Edited;
    }

    /// Delete the last character; an emptied field falls back to its placeholder
    pub fn backspace(&mut self) {
        self.value.pop();
        if self.value.is_empty() {
            self.state = FieldState::Placeholder;
        }
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.state = FieldState::Placeholder;
    }
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Application state
pub struct App<'a> {
    pub store: &'a DictionaryStore,
    pub scorer: ScoringStrategy,
    pub fields: Vec<FormField>,
    pub focus: usize,
    pub result: Option<QueryResult>,
    /// Outer letters in display order; shuffled on request
    pub outer: Vec<char>,
    pub scroll: usize,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(store: &'a DictionaryStore, scorer: ScoringStrategy) -> Self {
        Self {
            store,
            scorer,
            fields: FieldKind::ALL.into_iter().map(FormField::new).collect(),
            focus: 1,
            result: None,
            outer: Vec::new(),
            scroll: 0,
            messages: vec![Message {
                text: "Fill in the letters and press Enter to search.".to_string(),
                style: MessageStyle::Info,
            }],
            should_quit: false,
        }
    }

    /// Pre-fill the dictionary field
    #[must_use]
    pub fn with_dictionary(mut self, path: &str) -> Self {
        if path != DEFAULT_DICTIONARY {
            self.field_mut(FieldKind::Dictionary).clear();
            for c in path.chars() {
                self.field_mut(FieldKind::Dictionary).push(c);
            }
        }
        self
    }

    #[must_use]
    pub fn field(&self, kind: FieldKind) -> &FormField {
        let idx = FieldKind::ALL.iter().position(|k| *k == kind).unwrap_or(0);
        &self.fields[idx]
    }

    fn field_mut(&mut self, kind: FieldKind) -> &mut FormField {
        let idx = FieldKind::ALL.iter().position(|k| *k == kind).unwrap_or(0);
        &mut self.fields[idx]
    }

    #[must_use]
    pub fn focused(&self) -> &FormField {
        &self.fields[self.focus]
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.fields.len();
    }

    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
    }

    pub fn type_char(&mut self, c: char) {
        let field = &mut self.fields[self.focus];
        match field.kind {
            FieldKind::Center | FieldKind::OtherLetters | FieldKind::MustContain => {
                if c.is_ascii_alphabetic() {
                    field.push(c.to_ascii_lowercase());
                }
            }
            FieldKind::MinLength | FieldKind::MaxLength => {
                if c.is_ascii_digit() {
                    field.push(c);
                }
            }
            FieldKind::Dictionary | FieldKind::ExportPath => field.push(c),
        }
    }

    pub fn backspace(&mut self) {
        self.fields[self.focus].backspace();
    }

    pub fn clear_field(&mut self) {
        self.fields[self.focus].clear();
    }

    /// Assemble a request from the current field values, along with its puzzle
    ///
    /// # Errors
    ///
    /// Returns an `InputError` for malformed letters or lengths.
    pub fn request(&self) -> Result<(QueryRequest, Puzzle), InputError> {
        let request = QueryRequest {
            dictionary_path: PathBuf::from(self.field(FieldKind::Dictionary).value()),
            center: self.field(FieldKind::Center).value().to_string(),
            other_letters: self.field(FieldKind::OtherLetters).value().to_string(),
            min_length: parse_length(
                "Min length",
                self.field(FieldKind::MinLength).value(),
                4,
            )?,
            max_length: parse_length(
                "Max length",
                self.field(FieldKind::MaxLength).value(),
                0,
            )?,
            must_contain: self.field(FieldKind::MustContain).value().to_string(),
        };
        let puzzle = request.puzzle()?;
        Ok((request, puzzle))
    }

    /// Run the query described by the form
    pub fn search(&mut self) {
        let (request, puzzle) = match self.request() {
            Ok(parts) => parts,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        };

        let dictionary = match self.store.load(&request.dictionary_path) {
            Ok(dictionary) => dictionary,
            Err(e) => {
                error!("{e}");
                self.add_message(&e.to_string(), MessageStyle::Error);
                self.result = None;
                return;
            }
        };

        let engine = QueryEngine::new(self.scorer.clone(), &dictionary);
        let result = engine.query(&puzzle, &request.filters());
        self.outer = result.letters.outer();
        self.add_message(
            &format!("{} words found", result.len()),
            MessageStyle::Success,
        );
        self.result = Some(result);
        self.scroll = 0;
    }

    /// Write the current results to the export path
    pub fn export(&mut self) {
        let path = self.field(FieldKind::ExportPath).value().to_string();
        let Some(outcome) = self
            .result
            .as_ref()
            .map(|result| export_csv(&path, result, true))
        else {
            self.add_message("Nothing to export yet.", MessageStyle::Error);
            return;
        };

        match outcome {
            Ok(()) => {
                info!(path = %path, "export requested from form");
                self.add_message(&format!("Results exported to {path}"), MessageStyle::Success);
            }
            Err(e) => {
                error!("{e}");
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
        }
    }

    /// Shuffle the outer letters of the hive
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.outer.shuffle(rng);
    }

    pub fn scroll_down(&mut self) {
        let len = self.result.as_ref().map_or(0, QueryResult::len);
        if self.scroll + 1 < len {
            self.scroll += 1;
        }
    }

    pub const fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Whether scores should be shown as whole numbers
    #[must_use]
    pub fn integral_scores(&self) -> bool {
        self.scorer.is_integral()
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('e') if ctrl => self.export(),
            KeyCode::Char('s') if ctrl => self.shuffle(&mut rand::rng()),
            KeyCode::Char('u') if ctrl => self.clear_field(),
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::Down => self.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.focus_prev(),
            KeyCode::PageDown => self.scroll_down(),
            KeyCode::PageUp => self.scroll_up(),
            KeyCode::Enter => self.search(),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Char(c) => self.type_char(c),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
