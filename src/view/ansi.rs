//! ANSI escape code constants used by the feed screen.

pub const RESET: &str = "\x1b[0m"; // Reset all attributes
pub const BOLD: &str = "\x1b[1m"; // Bold text
pub const DIM: &str = "\x1b[2m"; // Dimmed/faint text

pub const FG_BLACK: &str = "\x1b[30m";
pub const FG_CYAN: &str = "\x1b[36m";

/// Background of the form while a post is being edited.
pub const BG_GREEN: &str = "\x1b[42m";
