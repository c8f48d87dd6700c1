//! # Terminal User Interface (TUI)
//!
//! Interactive terminal UI using `ratatui`.
//!
//! ## Layout
//!
//! ```text
//! ┌ header: app | committed phrase | account count ──────────┐
//! ├ Accounts (list, cursor + selection) │ Profile (detail) ──┤
//! └ status bar: keybinds, mode, fetch / error state ─────────┘
//! ```
//!
//! ## View Modes
//!
//! - **Browse** - navigate the result list, select accounts (default)
//! - **Search** - overlay with a draft phrase, committed only on Enter
//! - **Help** - keyboard reference overlay
//!
//! ## Data Flow
//!
//! Key presses mutate [`App`] and may emit a single [`FetchRequest`],
//! which the event loop forwards to the fetch runtime. Resolved
//! [`FetchOutcome`]s are drained between redraws and applied through the
//! same state machine, guarded by sequence numbers so a superseded
//! retrieval can never overwrite newer state.
//!
//! ## Sub-Modules
//!
//! - `results` - account list with cursor and selection marking
//! - `detail` - profile panel owning the auto-clear countdown
//! - `timer` - one-second tick source for the countdown
//! - `theme` - color scheme

// TUI rendering intentionally uses precision-losing casts for gauge math
#![allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]

use anyhow::{Context, Result};
use crossbeam_channel::Receiver;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::debug;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Terminal,
};
use std::io;
use std::time::{Duration, Instant};
use tokio::sync::mpsc::Sender;

pub mod detail;
pub mod results;
pub mod theme;
pub mod timer;

use crate::domain::AccountSummary;
use crate::fetch::{FetchOutcome, FetchRequest};
use detail::DetailPanel;
use results::ResultsView;
use theme::{ACCENT_BLUE, ALERT_RED, CAUTION_AMBER, OK_GREEN, TEXT_DIM};

// Pre-computed styles for consistent UI rendering
const STYLE_HEADING: Style = Style::new().fg(ACCENT_BLUE).add_modifier(Modifier::BOLD);
const STYLE_KEY: Style = Style::new().fg(CAUTION_AMBER);
const STYLE_DIM: Style = Style::new().fg(TEXT_DIM);

/// Current view mode determines what's displayed and how keys are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ViewMode {
    /// Main view: account list + profile panel
    Browse,
    /// Overlay with an editable draft of the search phrase
    Search,
    /// Help overlay with keyboard shortcuts
    Help,
}

/// Application state: the committed phrase and the selection, plus the UI
/// panels that render them.
pub struct App {
    /// Committed search phrase driving the account list.
    phrase: String,
    /// Draft phrase edited in the search overlay. Never triggers a fetch
    /// until confirmed with Enter.
    draft: String,
    /// Accounts of the most recent applied search, in API order.
    accounts: Vec<AccountSummary>,
    /// The chosen account, or none.
    selection: Option<AccountSummary>,

    results: ResultsView,
    detail: DetailPanel,
    view_mode: ViewMode,

    // Sequence guard: only the latest issued retrieval of each kind may
    // apply its outcome (last-issued-wins).
    next_seq: u64,
    search_seq: u64,
    profile_seq: u64,
    search_pending: bool,
    profile_pending: bool,

    last_error: Option<String>,
    notice: Option<String>,
    should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(countdown_secs: u64) -> Self {
        Self {
            phrase: String::new(),
            draft: String::new(),
            accounts: Vec::new(),
            selection: None,
            results: ResultsView::new(),
            detail: DetailPanel::new(countdown_secs),
            view_mode: ViewMode::Browse,
            next_seq: 0,
            search_seq: 0,
            profile_seq: 0,
            search_pending: false,
            profile_pending: false,
            last_error: None,
            notice: None,
            should_quit: false,
        }
    }

    /// Commit a new search phrase and produce the one retrieval it causes.
    /// Also used at startup for the initial query.
    pub fn commit_phrase(&mut self, phrase: String) -> FetchRequest {
        self.phrase.clone_from(&phrase);
        self.next_seq += 1;
        self.search_seq = self.next_seq;
        self.search_pending = true;
        FetchRequest::Search { phrase, seq: self.search_seq }
    }

    /// Handle keyboard input. At most one fetch request results from any
    /// single key press.
    pub fn handle_key(&mut self, key: KeyCode) -> Option<FetchRequest> {
        match self.view_mode {
            ViewMode::Browse => match key {
                KeyCode::Char('q' | 'Q') => {
                    self.should_quit = true;
                    None
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    self.results.cursor_up();
                    None
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    self.results.cursor_down(self.accounts.len());
                    None
                }
                KeyCode::Enter => self.select_under_cursor(),
                KeyCode::Char('/') => {
                    // The draft starts from the committed phrase.
                    self.draft.clone_from(&self.phrase);
                    self.view_mode = ViewMode::Search;
                    None
                }
                KeyCode::Esc => {
                    self.clear_selection();
                    None
                }
                KeyCode::Char('y') => {
                    self.yank_avatar_url();
                    None
                }
                KeyCode::Char('?') => {
                    self.view_mode = ViewMode::Help;
                    None
                }
                _ => None,
            },
            ViewMode::Search => match key {
                KeyCode::Esc => {
                    // Draft is discarded, the committed phrase stands.
                    self.view_mode = ViewMode::Browse;
                    None
                }
                KeyCode::Enter => {
                    self.view_mode = ViewMode::Browse;
                    let phrase = self.draft.clone();
                    Some(self.commit_phrase(phrase))
                }
                KeyCode::Backspace => {
                    self.draft.pop();
                    None
                }
                KeyCode::Char(c) => {
                    self.draft.push(c);
                    None
                }
                _ => None,
            },
            // Any key closes help
            ViewMode::Help => {
                self.view_mode = ViewMode::Browse;
                None
            }
        }
    }

    /// Apply a resolved retrieval. Outcomes of superseded requests are
    /// discarded wholesale, successes and failures alike.
    pub fn apply_outcome(&mut self, outcome: FetchOutcome) {
        match outcome {
            FetchOutcome::Search { seq, result } => {
                if seq != self.search_seq {
                    debug!("discarding superseded search outcome (seq {seq})");
                    return;
                }
                self.search_pending = false;
                match result {
                    Ok(accounts) => {
                        self.accounts = accounts;
                        self.results.clamp(self.accounts.len());
                        self.last_error = None;
                        self.drop_vanished_selection();
                    }
                    Err(e) => {
                        self.report_error(format!("search failed: {}", e.brief()));
                    }
                }
            }
            FetchOutcome::Profile { seq, login, result } => {
                if seq != self.profile_seq {
                    debug!("discarding superseded profile outcome for {login} (seq {seq})");
                    return;
                }
                self.profile_pending = false;
                match result {
                    Ok(profile) => {
                        self.detail.show(profile);
                        self.last_error = None;
                    }
                    Err(e) => {
                        self.report_error(format!("profile {login}: {}", e.brief()));
                    }
                }
            }
        }
    }

    /// Advance the countdown; returns true when the display changed.
    pub fn poll_countdown(&mut self) -> bool {
        self.detail.poll_tick()
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Select the account under the cursor. Every confirmation starts the
    /// sequence over, reselecting the same account included: the countdown
    /// resets now, before any tick can land, and a fresh fetch is issued.
    fn select_under_cursor(&mut self) -> Option<FetchRequest> {
        let account = self.accounts.get(self.results.cursor)?.clone();
        self.selection = Some(account.clone());
        self.detail.begin_selection();
        self.next_seq += 1;
        self.profile_seq = self.next_seq;
        self.profile_pending = true;
        Some(FetchRequest::Profile { login: account.login, seq: self.profile_seq })
    }

    /// Drop the selection and empty the profile panel. Advancing the
    /// profile sequence turns any in-flight fetch into a stale one.
    fn clear_selection(&mut self) {
        if self.selection.is_none() && !self.detail.is_showing() {
            return;
        }
        self.selection = None;
        self.detail.clear();
        self.next_seq += 1;
        self.profile_seq = self.next_seq;
        self.profile_pending = false;
    }

    /// A selection may only refer to an account present in the current
    /// result list. Applied after every fresh result set.
    fn drop_vanished_selection(&mut self) {
        let vanished = self
            .selection
            .as_ref()
            .is_some_and(|sel| !self.accounts.iter().any(|a| a.login == sel.login));
        if vanished {
            debug!("selection no longer in result list, clearing");
            self.clear_selection();
        }
    }

    fn yank_avatar_url(&mut self) {
        let Some(url) = self.detail.avatar_url().map(ToString::to_string) else {
            self.notice = Some("no profile shown, nothing to copy".to_string());
            return;
        };
        match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(url)) {
            Ok(()) => {
                self.notice = Some("avatar url copied".to_string());
                self.last_error = None;
            }
            Err(e) => self.report_error(format!("clipboard: {e}")),
        }
    }

    fn report_error(&mut self, message: String) {
        self.last_error = Some(message);
        self.notice = None;
    }

    fn render(&mut self, f: &mut ratatui::Frame) {
        let outer_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Main panels
                Constraint::Length(3), // Status bar
            ])
            .split(f.area());

        self.render_header(f, outer_layout[0]);

        let main_cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
            .split(outer_layout[1]);

        let selected_login = self.selection.as_ref().map(|a| a.login.as_str());
        self.results.render(f, main_cols[0], &self.accounts, selected_login);
        self.detail.render(f, main_cols[1], self.selection.as_ref());

        match self.view_mode {
            ViewMode::Search => render_search_overlay(f, f.area(), &self.draft),
            ViewMode::Help => render_help_overlay(f, f.area()),
            ViewMode::Browse => {}
        }

        self.render_status_bar(f, outer_layout[2]);
    }

    fn render_header(&self, f: &mut ratatui::Frame, area: Rect) {
        let header = Paragraph::new(vec![Line::from(vec![
            Span::styled("OCTOSCOUT", STYLE_HEADING),
            Span::styled(" | ", STYLE_DIM),
            Span::styled("search: ", STYLE_DIM),
            Span::styled(self.phrase.clone(), Style::new().fg(OK_GREEN)),
            Span::styled(" | ", STYLE_DIM),
            Span::styled(format!("{} accounts", self.accounts.len()), Style::new().fg(OK_GREEN)),
        ])])
        .block(Block::default().borders(Borders::ALL).border_style(Style::new().fg(ACCENT_BLUE)));
        f.render_widget(header, area);
    }

    fn render_status_bar(&self, f: &mut ratatui::Frame, area: Rect) {
        let mut spans = match self.view_mode {
            ViewMode::Browse => vec![
                Span::styled("Q", STYLE_KEY),
                Span::styled(":Quit ", STYLE_DIM),
                Span::styled("↑↓", STYLE_KEY),
                Span::styled(":Move ", STYLE_DIM),
                Span::styled("Enter", STYLE_KEY),
                Span::styled(":Select ", STYLE_DIM),
                Span::styled("/", STYLE_KEY),
                Span::styled(":Search ", STYLE_DIM),
                Span::styled("Esc", STYLE_KEY),
                Span::styled(":Clear ", STYLE_DIM),
                Span::styled("?", STYLE_KEY),
                Span::styled(":Help ", STYLE_DIM),
            ],
            ViewMode::Search => vec![
                Span::styled("Enter", STYLE_KEY),
                Span::styled(":Run search ", STYLE_DIM),
                Span::styled("Esc", STYLE_KEY),
                Span::styled(":Cancel ", STYLE_DIM),
            ],
            ViewMode::Help => vec![
                Span::styled("Any key", STYLE_KEY),
                Span::styled(":Close ", STYLE_DIM),
            ],
        };

        spans.push(self.state_indicator());
        if let Some(error) = &self.last_error {
            spans.push(Span::styled(format!(" {error}"), Style::new().fg(ALERT_RED)));
        } else if let Some(notice) = &self.notice {
            spans.push(Span::styled(format!(" {notice}"), STYLE_DIM));
        }

        let status = Paragraph::new(vec![Line::from(spans)]).block(
            Block::default().borders(Borders::ALL).border_style(Style::new().fg(ACCENT_BLUE)),
        );
        f.render_widget(status, area);
    }

    fn state_indicator(&self) -> Span<'static> {
        if self.last_error.is_some() {
            Span::styled("[Error]", Style::new().fg(ALERT_RED))
        } else if self.search_pending || self.profile_pending {
            Span::styled("[Fetching]", Style::new().fg(CAUTION_AMBER))
        } else {
            Span::styled("[Ready]", Style::new().fg(OK_GREEN))
        }
    }
}

// =============================================================================
// EVENT LOOP
// =============================================================================

/// How often the screen is redrawn while idle
const UPDATE_INTERVAL: Duration = Duration::from_millis(100);

/// Run the TUI event loop until the user quits.
///
/// Outcomes arrive on `outcomes` and are drained before every redraw;
/// requests emitted by key handling are forwarded over `requests`. The
/// fetch runtime on the other side of those channels shuts down once the
/// request sender is dropped on exit.
///
/// # Errors
/// Returns an error if terminal setup or rendering fails
pub fn run(
    mut app: App,
    outcomes: &Receiver<FetchOutcome>,
    requests: &Sender<FetchRequest>,
) -> Result<()> {
    // Setup terminal
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut last_update = Instant::now() - UPDATE_INTERVAL;

    // Main loop
    loop {
        // Drain all resolved retrievals (non-blocking)
        while let Ok(outcome) = outcomes.try_recv() {
            app.apply_outcome(outcome);
        }

        // Advance the countdown
        app.poll_countdown();

        // Redraw periodically
        if last_update.elapsed() >= UPDATE_INTERVAL {
            terminal.draw(|f| app.render(f))?;
            last_update = Instant::now();
        }

        // Handle keyboard input
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if let Some(request) = app.handle_key(key.code) {
                        // The runtime outliving the UI is the only way this
                        // fails, at which point we are exiting anyway.
                        requests.blocking_send(request).ok();
                    }
                }
            }
        }

        if app.should_quit() {
            break;
        }

        std::thread::sleep(Duration::from_millis(10));
    }

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    Ok(())
}

// =============================================================================
// OVERLAY RENDERERS
// =============================================================================

/// Create a centered popup area with given width percentage and height in lines
fn centered_popup(area: Rect, width_percent: u16, height_lines: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Fill(1), Constraint::Length(height_lines), Constraint::Fill(1)])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - width_percent) / 2),
            Constraint::Percentage(width_percent),
            Constraint::Percentage((100 - width_percent) / 2),
        ])
        .split(vertical[1])[1]
}

/// Render the search overlay with the editable draft phrase
fn render_search_overlay(f: &mut ratatui::Frame, area: Rect, draft: &str) {
    let popup_area = centered_popup(area, 60, 3);

    let search_text = format!("Search: {draft}_");
    let search_widget = Paragraph::new(search_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Find accounts (Enter to run, Esc to cancel)")
                .style(Style::default().bg(theme::BACKGROUND).fg(ACCENT_BLUE)),
        )
        .style(Style::default().fg(CAUTION_AMBER));

    f.render_widget(ratatui::widgets::Clear, popup_area);
    f.render_widget(search_widget, popup_area);
}

/// Render the help overlay explaining the panels and keyboard shortcuts
fn render_help_overlay(f: &mut ratatui::Frame, area: Rect) {
    let popup_area = centered_popup(area, 70, 20);

    let help_text = vec![
        Line::from(""),
        Line::from(Span::styled("  What You're Looking At", STYLE_HEADING)),
        Line::from(Span::styled(
            "  octoscout queries the GitHub search API for accounts matching",
            STYLE_DIM,
        )),
        Line::from(Span::styled(
            "  your phrase. Selecting one fetches its profile, which stays on",
            STYLE_DIM,
        )),
        Line::from(Span::styled(
            "  screen until the countdown runs out, then clears itself.",
            STYLE_DIM,
        )),
        Line::from(""),
        Line::from(Span::styled("  Keys", STYLE_HEADING)),
        Line::from(vec![
            Span::styled("  ↑↓/jk", STYLE_KEY),
            Span::styled(" Move cursor   ", STYLE_DIM),
            Span::styled("Enter", STYLE_KEY),
            Span::styled(" Select account", STYLE_DIM),
        ]),
        Line::from(vec![
            Span::styled("  /", STYLE_KEY),
            Span::styled("     Edit phrase   ", STYLE_DIM),
            Span::styled("Esc", STYLE_KEY),
            Span::styled("   Clear selection", STYLE_DIM),
        ]),
        Line::from(vec![
            Span::styled("  y", STYLE_KEY),
            Span::styled("     Copy avatar url  ", STYLE_DIM),
            Span::styled("q", STYLE_KEY),
            Span::styled("  Quit", STYLE_DIM),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "  The phrase only runs when you press Enter in the search box,",
            STYLE_DIM,
        )),
        Line::from(Span::styled("  typing alone never sends a request.", STYLE_DIM)),
        Line::from(""),
        Line::from(Span::styled("  Press any key to close", STYLE_DIM)),
    ];

    let help_widget = Paragraph::new(help_text).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Help ")
            .style(Style::new().bg(theme::BACKGROUND).fg(ACCENT_BLUE)),
    );

    f.render_widget(ratatui::widgets::Clear, popup_area);
    f.render_widget(help_widget, popup_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AccountProfile, GithubError};

    fn account(login: &str) -> AccountSummary {
        AccountSummary { login: login.to_string() }
    }

    fn profile(id: u64) -> AccountProfile {
        AccountProfile { id, avatar_url: format!("https://example.test/{id}.png") }
    }

    fn search_ok(seq: u64, logins: &[&str]) -> FetchOutcome {
        FetchOutcome::Search { seq, result: Ok(logins.iter().map(|l| account(l)).collect()) }
    }

    /// An app with two accounts loaded, the way the startup query leaves it.
    fn app_with_accounts(logins: &[&str]) -> App {
        let mut app = App::new(3);
        let request = app.commit_phrase("rust".to_string());
        let FetchRequest::Search { seq, .. } = request else { panic!("expected search request") };
        app.apply_outcome(search_ok(seq, logins));
        app
    }

    #[test]
    fn committing_a_phrase_issues_exactly_one_search() {
        let mut app = App::new(3);

        // Typing in the overlay edits the draft only.
        assert!(app.handle_key(KeyCode::Char('/')).is_none());
        assert!(app.handle_key(KeyCode::Char('r')).is_none());
        assert!(app.handle_key(KeyCode::Char('s')).is_none());
        assert!(app.handle_key(KeyCode::Backspace).is_none());
        assert!(app.handle_key(KeyCode::Char('s')).is_none());

        let request = app.handle_key(KeyCode::Enter);
        match request {
            Some(FetchRequest::Search { phrase, .. }) => assert_eq!(phrase, "rs"),
            other => panic!("expected a search request, got {other:?}"),
        }
        assert!(app.search_pending);
    }

    #[test]
    fn cancelling_the_overlay_keeps_the_committed_phrase() {
        let mut app = app_with_accounts(&["a"]);
        app.handle_key(KeyCode::Char('/'));
        app.handle_key(KeyCode::Char('x'));
        assert!(app.handle_key(KeyCode::Esc).is_none());
        assert_eq!(app.phrase, "rust");

        // Reopening seeds the draft from the committed phrase again.
        app.handle_key(KeyCode::Char('/'));
        assert_eq!(app.draft, "rust");
    }

    #[test]
    fn results_keep_api_order_and_mark_only_the_selection() {
        let mut app = app_with_accounts(&["a", "b"]);
        assert_eq!(app.accounts[0].login, "a");
        assert_eq!(app.accounts[1].login, "b");

        app.handle_key(KeyCode::Down);
        let request = app.handle_key(KeyCode::Enter).unwrap();
        assert!(matches!(request, FetchRequest::Profile { ref login, .. } if login == "b"));
        assert_eq!(app.selection.as_ref().unwrap().login, "b");
        assert_ne!(app.accounts[0].login, app.selection.as_ref().unwrap().login);
    }

    #[test]
    fn selecting_resets_the_countdown_immediately() {
        let mut app = app_with_accounts(&["a"]);
        let request = app.handle_key(KeyCode::Enter).unwrap();
        assert_eq!(app.detail.remaining(), 3, "full duration before any tick");

        let FetchRequest::Profile { seq, login } = request else { unreachable!() };
        app.apply_outcome(FetchOutcome::Profile { seq, login, result: Ok(profile(7)) });
        assert!(app.detail.is_showing());
        assert_eq!(app.detail.remaining(), 3);
    }

    #[test]
    fn reselecting_the_same_account_refetches() {
        let mut app = app_with_accounts(&["a"]);
        let first = app.handle_key(KeyCode::Enter).unwrap();
        let second = app.handle_key(KeyCode::Enter).unwrap();

        let (FetchRequest::Profile { seq: s1, .. }, FetchRequest::Profile { seq: s2, .. }) =
            (first, second)
        else {
            unreachable!()
        };
        assert!(s2 > s1, "every confirmation issues a fresh retrieval");
        assert_eq!(app.detail.remaining(), 3);
    }

    #[test]
    fn superseded_profile_outcome_is_discarded() {
        let mut app = app_with_accounts(&["x", "y"]);

        let FetchRequest::Profile { seq: seq_x, .. } = app.handle_key(KeyCode::Enter).unwrap()
        else {
            unreachable!()
        };
        app.handle_key(KeyCode::Down);
        let FetchRequest::Profile { seq: seq_y, .. } = app.handle_key(KeyCode::Enter).unwrap()
        else {
            unreachable!()
        };

        // X resolves after Y was selected: it must not be displayed.
        app.apply_outcome(FetchOutcome::Profile {
            seq: seq_x,
            login: "x".to_string(),
            result: Ok(profile(1)),
        });
        assert!(!app.detail.is_showing());

        app.apply_outcome(FetchOutcome::Profile {
            seq: seq_y,
            login: "y".to_string(),
            result: Ok(profile(2)),
        });
        assert_eq!(app.detail.avatar_url(), Some("https://example.test/2.png"));
    }

    #[test]
    fn superseded_search_outcome_is_discarded() {
        let mut app = App::new(3);
        let FetchRequest::Search { seq: s1, .. } = app.commit_phrase("first".to_string()) else {
            unreachable!()
        };
        let FetchRequest::Search { seq: s2, .. } = app.commit_phrase("second".to_string()) else {
            unreachable!()
        };

        app.apply_outcome(search_ok(s1, &["stale"]));
        assert!(app.accounts.is_empty(), "older search may not fill the list");

        app.apply_outcome(search_ok(s2, &["fresh"]));
        assert_eq!(app.accounts[0].login, "fresh");
    }

    #[test]
    fn clearing_the_selection_stops_ticks_and_voids_inflight_fetches() {
        let mut app = app_with_accounts(&["a"]);
        let FetchRequest::Profile { seq, .. } = app.handle_key(KeyCode::Enter).unwrap() else {
            unreachable!()
        };

        app.handle_key(KeyCode::Esc);
        assert!(app.selection.is_none());
        assert!(!app.poll_countdown(), "no tick can fire on a cleared panel");

        // The fetch that was in flight when the user cleared resolves late.
        app.apply_outcome(FetchOutcome::Profile {
            seq,
            login: "a".to_string(),
            result: Ok(profile(9)),
        });
        assert!(!app.detail.is_showing(), "stale profile may not reappear");
    }

    #[test]
    fn selection_missing_from_new_results_is_dropped() {
        let mut app = app_with_accounts(&["a", "b"]);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.selection.as_ref().unwrap().login, "a");

        let FetchRequest::Search { seq, .. } = app.commit_phrase("other".to_string()) else {
            unreachable!()
        };
        app.apply_outcome(search_ok(seq, &["b", "c"]));
        assert!(app.selection.is_none(), "selection must exist in the current list");
        assert!(!app.detail.is_showing());
    }

    #[test]
    fn failed_search_keeps_previous_results_and_reports() {
        let mut app = app_with_accounts(&["a"]);
        let FetchRequest::Search { seq, .. } = app.commit_phrase("broken".to_string()) else {
            unreachable!()
        };
        app.apply_outcome(FetchOutcome::Search {
            seq,
            result: Err(GithubError::Status { status: 503, message: String::new() }),
        });

        assert_eq!(app.accounts.len(), 1, "stale list is better than no list");
        assert!(app.last_error.as_deref().unwrap().contains("503"));
        assert!(!app.search_pending);
    }

    #[test]
    fn quit_key_sets_the_flag() {
        let mut app = App::new(3);
        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit());
    }
}
