//! Input event abstraction.
//!
//! The controller reads key events through the `EventStream` trait so tests
//! can script exact input sequences. The production implementation wraps
//! crossterm's event system; the mock serves a pre-programmed queue.

use std::collections::VecDeque;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};

/// Source of input events.
pub trait EventStream: Send {
    /// Check whether an event is ready within the timeout, without blocking
    /// past it.
    fn poll(&mut self, timeout: Duration) -> Result<bool>;

    /// Read the next event. Only valid after `poll` returned true.
    fn read(&mut self) -> Result<Event>;
}

/// Event stream reading from the real terminal.
pub struct TerminalEventStream;

impl TerminalEventStream {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalEventStream {
    fn default() -> Self {
        Self::new()
    }
}

impl EventStream for TerminalEventStream {
    fn poll(&mut self, timeout: Duration) -> Result<bool> {
        event::poll(timeout).map_err(anyhow::Error::from)
    }

    fn read(&mut self) -> Result<Event> {
        event::read().map_err(anyhow::Error::from)
    }
}

/// Pre-programmed event stream for tests.
pub struct MockEventStream {
    events: VecDeque<Event>,
}

impl MockEventStream {
    pub fn new(events: Vec<Event>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    /// Build a stream from bare key codes, no modifiers.
    pub fn from_keys(keys: Vec<KeyCode>) -> Self {
        Self::new(
            keys.into_iter()
                .map(|code| Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
                .collect(),
        )
    }

    pub fn push(&mut self, event: Event) {
        self.events.push_back(event);
    }
}

impl EventStream for MockEventStream {
    fn poll(&mut self, _timeout: Duration) -> Result<bool> {
        Ok(!self.events.is_empty())
    }

    fn read(&mut self) -> Result<Event> {
        self.events
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("no events queued"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_stream_serves_events_in_order() {
        let mut stream = MockEventStream::from_keys(vec![KeyCode::Char('j'), KeyCode::Enter]);

        assert!(stream.poll(Duration::from_millis(0)).unwrap());
        match stream.read().unwrap() {
            Event::Key(key) => assert_eq!(key.code, KeyCode::Char('j')),
            other => panic!("unexpected event {other:?}"),
        }
        match stream.read().unwrap() {
            Event::Key(key) => assert_eq!(key.code, KeyCode::Enter),
            other => panic!("unexpected event {other:?}"),
        }
        assert!(!stream.poll(Duration::from_millis(0)).unwrap());
        assert!(stream.read().is_err());
    }
}
