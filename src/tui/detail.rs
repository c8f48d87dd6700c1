//! Detail panel - profile display with an auto-clearing countdown.
//!
//! # Lifecycle
//!
//! ```text
//! Empty ──selection──▶ Loading ──profile resolves──▶ Showing
//!   ▲                                                   │
//!   └────────── countdown expires / selection cleared ──┘
//! ```
//!
//! The panel owns all countdown state: the seconds remaining, the fixed
//! duration they reset to, and the tick source. A selection resets the
//! countdown synchronously, before any tick can land against the old
//! selection. While a profile is showing, every timer tick removes one
//! second; when the value drops below 1 the profile is dropped and the
//! countdown resets. Nothing is re-fetched on expiry: the panel stays
//! blank until the user selects again (the same account included, which
//! restarts the whole sequence).
//!
//! A selection change while a profile is still showing keeps the old
//! profile on screen until the new fetch resolves. That window is the
//! accepted eventual-consistency gap; the sequence guard upstream makes
//! sure only the latest fetch can replace the content.

use std::time::Duration;

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::theme::{countdown_color, gauge_bar, ACCENT_BLUE, TEXT_DIM};
use super::timer::CountdownTimer;
use crate::domain::{AccountProfile, AccountSummary};

const TICK_PERIOD: Duration = Duration::from_secs(1);

pub struct DetailPanel {
    profile: Option<AccountProfile>,
    /// Seconds left before the shown profile is cleared.
    remaining: u64,
    /// Fixed duration the countdown resets to.
    duration: u64,
    timer: CountdownTimer,
}

impl DetailPanel {
    #[must_use]
    pub fn new(duration: u64) -> Self {
        Self::with_tick_period(duration, TICK_PERIOD)
    }

    /// Like [`DetailPanel::new`] with a custom tick period, so tests can
    /// run the countdown in milliseconds.
    #[must_use]
    pub fn with_tick_period(duration: u64, period: Duration) -> Self {
        Self { profile: None, remaining: duration, duration, timer: CountdownTimer::new(period) }
    }

    /// A new selection was made. Resets the countdown to the full duration
    /// and restarts the tick interval. Any profile already on screen stays
    /// visible until the replacement fetch resolves.
    pub fn begin_selection(&mut self) {
        self.remaining = self.duration;
        self.timer.arm();
    }

    /// The selection's profile fetch resolved. Restarts the interval so a
    /// full second passes before the first visible decrement.
    pub fn show(&mut self, profile: AccountProfile) {
        self.profile = Some(profile);
        self.timer.arm();
    }

    /// Drop the profile and return to the idle state. The timer is
    /// disarmed, so no further tick can be observed.
    pub fn clear(&mut self) {
        self.profile = None;
        self.remaining = self.duration;
        self.timer.disarm();
    }

    /// Advance the countdown if a tick is due. Returns true when the
    /// display changed. Ticks that fire while no profile is showing are
    /// ignored, the countdown only runs against visible content.
    pub fn poll_tick(&mut self) -> bool {
        if !self.timer.poll() {
            return false;
        }
        if self.profile.is_none() {
            return false;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining < 1 {
            self.clear();
        }
        true
    }

    #[must_use]
    pub fn is_showing(&self) -> bool {
        self.profile.is_some()
    }

    #[must_use]
    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    #[must_use]
    pub fn avatar_url(&self) -> Option<&str> {
        self.profile.as_ref().map(|p| p.avatar_url.as_str())
    }

    #[cfg(test)]
    fn timer_armed(&self) -> bool {
        self.timer.is_armed()
    }

    pub fn render(&self, f: &mut Frame, area: Rect, selection: Option<&AccountSummary>) {
        let lines = match (&self.profile, selection) {
            (Some(profile), Some(account)) => self.render_profile(profile, account),
            (Some(profile), None) => self.render_profile(profile, &unknown_account()),
            (None, Some(_)) => vec![], // fetch in flight, nothing to show yet
            (None, None) => vec![
                Line::from(""),
                Line::from(Span::styled(
                    " No account selected.",
                    Style::default().fg(TEXT_DIM),
                )),
                Line::from(Span::styled(
                    " Pick one from the list and press Enter.",
                    Style::default().fg(TEXT_DIM),
                )),
            ],
        };

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Profile")
                .border_style(Style::default().fg(ACCENT_BLUE)),
        );

        f.render_widget(paragraph, area);
    }

    #[allow(clippy::cast_precision_loss)]
    fn render_profile(
        &self,
        profile: &AccountProfile,
        account: &AccountSummary,
    ) -> Vec<Line<'static>> {
        let fraction = if self.duration > 0 {
            self.remaining as f64 / self.duration as f64
        } else {
            0.0
        };
        let color = countdown_color(fraction);

        vec![
            Line::from(""),
            Line::from(vec![
                Span::styled(" Clears in ", Style::default().fg(TEXT_DIM)),
                Span::styled(gauge_bar(fraction * 100.0, 20), Style::default().fg(color)),
                Span::styled(format!(" {}s", self.remaining), Style::default().fg(color)),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                format!(" {}", account.login),
                Style::default().fg(ACCENT_BLUE).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled(" ID     ", Style::default().fg(TEXT_DIM)),
                Span::styled(profile.id.to_string(), Style::default().fg(ACCENT_BLUE)),
            ]),
            Line::from(vec![
                Span::styled(" Avatar ", Style::default().fg(TEXT_DIM)),
                Span::styled(profile.avatar_url.clone(), Style::default().fg(ACCENT_BLUE)),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled(" [y]", Style::default().fg(ACCENT_BLUE)),
                Span::styled(" copy avatar url", Style::default().fg(TEXT_DIM)),
            ]),
        ]
    }
}

/// Placeholder when a profile outlives its selection for a frame.
fn unknown_account() -> AccountSummary {
    AccountSummary { login: String::new() }
}
