//! Results panel - the selectable list of matching accounts.
//!
//! Accounts render in the exact order the search endpoint returned them.
//! Two independent visual states exist per row: the navigation cursor
//! (moved with the arrow keys) and the committed selection (the account
//! whose profile the detail panel shows). The selection row is marked with
//! a bullet and the accent color so it stays visible while the cursor
//! moves elsewhere.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::theme::{ACCENT_BLUE, CUR_LEFT, CUR_RIGHT, OK_GREEN, TEXT_DIM};
use crate::domain::AccountSummary;

/// Calculate scroll offset to keep the cursor row visible
fn visible_scroll_offset(cursor: usize, current_offset: usize, visible_count: usize) -> usize {
    if visible_count == 0 {
        return 0;
    }
    if cursor < current_offset {
        cursor
    } else if cursor >= current_offset + visible_count {
        cursor.saturating_sub(visible_count - 1)
    } else {
        current_offset
    }
}

/// Results list UI state: cursor position and scroll window.
pub struct ResultsView {
    pub cursor: usize,
    scroll_offset: usize,
}

impl ResultsView {
    #[must_use]
    pub fn new() -> Self {
        Self { cursor: 0, scroll_offset: 0 }
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self, len: usize) {
        if self.cursor + 1 < len {
            self.cursor += 1;
        }
    }

    /// Keep the cursor inside a freshly arrived result set.
    pub fn clamp(&mut self, len: usize) {
        self.cursor = self.cursor.min(len.saturating_sub(1));
        self.scroll_offset = self.scroll_offset.min(self.cursor);
    }

    pub fn render(
        &mut self,
        f: &mut Frame,
        area: Rect,
        accounts: &[AccountSummary],
        selected_login: Option<&str>,
    ) {
        let visible_count = area.height.saturating_sub(2) as usize;
        self.scroll_offset = visible_scroll_offset(self.cursor, self.scroll_offset, visible_count);

        let lines: Vec<Line> = if accounts.is_empty() {
            vec![Line::from(Span::styled(" no matching accounts", Style::default().fg(TEXT_DIM)))]
        } else {
            accounts
                .iter()
                .enumerate()
                .skip(self.scroll_offset)
                .take(visible_count.max(1))
                .map(|(idx, account)| self.render_row(idx, account, selected_login))
                .collect()
        };

        let title = format!("Accounts ({})", accounts.len());
        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(ACCENT_BLUE)),
        );

        f.render_widget(paragraph, area);
    }

    fn render_row(
        &self,
        idx: usize,
        account: &AccountSummary,
        selected_login: Option<&str>,
    ) -> Line<'static> {
        let at_cursor = idx == self.cursor;
        let is_selected = selected_login == Some(account.login.as_str());

        let (cur_l, cur_r) = if at_cursor { (CUR_LEFT, CUR_RIGHT) } else { (" ", " ") };
        let bullet = if is_selected { "● " } else { "  " };

        let mut style = if is_selected {
            Style::default().fg(OK_GREEN).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(TEXT_DIM)
        };
        if at_cursor {
            style = style.add_modifier(Modifier::REVERSED);
        }

        Line::from(vec![
            Span::styled(cur_l.to_string(), Style::default().fg(ACCENT_BLUE)),
            Span::styled(format!("{bullet}{}", account.login), style),
            Span::styled(cur_r.to_string(), Style::default().fg(ACCENT_BLUE)),
        ])
    }
}

impl Default for ResultsView {
    fn default() -> Self {
        Self::new()
    }
}
