//! Mock render surface for testing.
//!
//! Records every drawing operation so tests can run the full screen and
//! controller stack without a terminal.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use anyhow::Result;

use super::surface::{Surface, SurfaceSize};

/// One recorded surface operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceOp {
    ClearScreen,
    MoveCursor(u16, u16),
    HideCursor,
    ShowCursor,
    EnterAlternateScreen,
    LeaveAlternateScreen,
    EnableRawMode,
    DisableRawMode,
    Write(String),
    Flush,
}

/// Type alias for the shared operation log
type OpLog = Arc<Mutex<Vec<SurfaceOp>>>;

/// Surface that records operations instead of drawing.
pub struct MockSurface {
    ops: OpLog,
    size: SurfaceSize,
}

impl MockSurface {
    pub fn new() -> Self {
        Self::with_size(80, 24)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        Self {
            ops: Arc::new(Mutex::new(Vec::new())),
            size: (width, height),
        }
    }

    /// Shared handle to the operation log, for assertions after the surface
    /// has been moved into a screen.
    pub fn op_log(&self) -> OpLog {
        Arc::clone(&self.ops)
    }

    pub fn ops(&self) -> Vec<SurfaceOp> {
        self.ops.lock().expect("surface op lock").clone()
    }

    fn record(&self, op: SurfaceOp) {
        self.ops.lock().expect("surface op lock").push(op);
    }
}

impl Default for MockSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for MockSurface {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.record(SurfaceOp::Write(String::from_utf8_lossy(buf).into_owned()));
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.record(SurfaceOp::Flush);
        Ok(())
    }
}

impl Surface for MockSurface {
    fn clear_screen(&mut self) -> Result<()> {
        self.record(SurfaceOp::ClearScreen);
        Ok(())
    }

    fn move_cursor(&mut self, x: u16, y: u16) -> Result<()> {
        self.record(SurfaceOp::MoveCursor(x, y));
        Ok(())
    }

    fn hide_cursor(&mut self) -> Result<()> {
        self.record(SurfaceOp::HideCursor);
        Ok(())
    }

    fn show_cursor(&mut self) -> Result<()> {
        self.record(SurfaceOp::ShowCursor);
        Ok(())
    }

    fn size(&self) -> Result<SurfaceSize> {
        Ok(self.size)
    }

    fn enter_alternate_screen(&mut self) -> Result<()> {
        self.record(SurfaceOp::EnterAlternateScreen);
        Ok(())
    }

    fn leave_alternate_screen(&mut self) -> Result<()> {
        self.record(SurfaceOp::LeaveAlternateScreen);
        Ok(())
    }

    fn enable_raw_mode(&mut self) -> Result<()> {
        self.record(SurfaceOp::EnableRawMode);
        Ok(())
    }

    fn disable_raw_mode(&mut self) -> Result<()> {
        self.record(SurfaceOp::DisableRawMode);
        Ok(())
    }
}
