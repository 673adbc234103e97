//! Debounced busy indicator.
//!
//! `show_loading` only marks intent; the spinner appears if that intent
//! survives [`config::SHOW_DELAY`] without an intervening `hide_loading`.
//! Fast requests therefore never flash the busy visual. There is no
//! reference counting: one hide fully clears any number of outstanding
//! shows, a simplification inherited from the source system.

use std::sync::{Arc, Mutex};

use crossterm::cursor::MoveTo;
use crossterm::style::Print;
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::execute;
use std::io;

use crate::config::SHOW_DELAY;

/// The visual half of the indicator: whatever shows and hides the actual
/// spinner. Production draws on the terminal's status row; tests record.
pub trait BusyVisual: Send {
    fn show(&mut self);
    fn hide(&mut self);
}

struct Inner {
    /// True between a show intent and the next hide.
    pending: bool,
    /// True while the busy visual is actually displayed.
    visible: bool,
    visual: Box<dyn BusyVisual>,
}

/// Cloneable handle to the shared indicator state.
///
/// Each `show_loading` schedules its own delayed visibility check on the
/// runtime; any later `hide_loading` defeats all of them at once.
#[derive(Clone)]
pub struct LoadingIndicator {
    inner: Arc<Mutex<Inner>>,
}

impl LoadingIndicator {
    pub fn new(visual: Box<dyn BusyVisual>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                pending: false,
                visible: false,
                visual,
            })),
        }
    }

    /// Mark a request as logically in flight and schedule the delayed
    /// visibility check.
    pub fn show_loading(&self) {
        self.inner.lock().expect("loading state lock").pending = true;

        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            tokio::time::sleep(SHOW_DELAY).await;
            let mut inner = inner.lock().expect("loading state lock");
            if inner.pending && !inner.visible {
                inner.visible = true;
                inner.visual.show();
            }
        });
    }

    /// Clear the in-flight flag and hide the busy visual immediately,
    /// whether or not it was ever shown.
    pub fn hide_loading(&self) {
        let mut inner = self.inner.lock().expect("loading state lock");
        inner.pending = false;
        inner.visual.hide();
        inner.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.inner.lock().expect("loading state lock").visible
    }
}

/// Spinner drawn on the terminal's bottom row.
///
/// Writes directly to stdout rather than through the feed screen: the
/// delayed check fires from its own task while the caller is suspended in
/// a request, so it cannot go through the screen's repaint path.
pub struct TerminalBusyVisual;

impl TerminalBusyVisual {
    pub fn new() -> Self {
        Self
    }

    fn paint(text: &str) -> io::Result<()> {
        let (_, height) = terminal::size()?;
        let row = height.saturating_sub(1);
        execute!(
            io::stdout(),
            MoveTo(0, row),
            Clear(ClearType::CurrentLine),
            Print(text)
        )
    }
}

impl Default for TerminalBusyVisual {
    fn default() -> Self {
        Self::new()
    }
}

impl BusyVisual for TerminalBusyVisual {
    fn show(&mut self) {
        // Terminal write failures have nowhere useful to go from here.
        let _ = Self::paint("~ loading...");
    }

    fn hide(&mut self) {
        let _ = Self::paint("");
    }
}
