//! # Feedline - Terminal Social-Feed Client
//!
//! A small TUI client for a remote social feed: it loads a user profile
//! and a page of posts over plain JSON-over-HTTP, renders them into a
//! terminal screen, and supports deleting and editing posts through
//! keyboard-driven flows.
//!
//! ## Architecture
//!
//! Three layers with injected seams, plus one leaf component:
//!
//! ```text
//! ┌──────────────┐   actions    ┌──────────────┐    draws     ┌──────────┐
//! │  Controller  │─────────────▶│  FeedScreen  │─────────────▶│ Surface  │
//! │              │              │              │              │          │
//! │ - edit state │              │ - header     │              │ terminal │
//! │ - focus      │              │ - post blocks│              │   or     │
//! │ - event loop │              │ - form       │              │  mock    │
//! └──────┬───────┘              └──────────────┘              └──────────┘
//!        │ requests
//!        ▼
//! ┌──────────────┐   show/hide  ┌──────────────┐
//! │  RemoteFeed  │─────────────▶│   Loading    │
//! │  (reqwest)   │              │  Indicator   │
//! └──────────────┘              └──────────────┘
//! ```
//!
//! The controller reads keys through `EventStream`, the screen draws
//! through `Surface`, and the network layer sits behind `RemoteFeed`;
//! each trait ships a production implementation and a test double.

pub mod api;
pub mod cmd_args;
pub mod config;
pub mod controller;
pub mod error;
pub mod events;
pub mod loading;
pub mod view;

// Re-export main types for easy access
pub use api::{ApiClient, MockRemote, RemoteFeed};
pub use cmd_args::CommandLineArgs;
pub use controller::{EditState, FeedController, Focus};
pub use error::FeedError;
pub use events::{EventStream, MockEventStream, TerminalEventStream};
pub use loading::{LoadingIndicator, TerminalBusyVisual};
pub use view::{FeedScreen, MockSurface, Surface, TerminalSurface};
