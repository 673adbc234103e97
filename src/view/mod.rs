//! View layer: the feed screen owns every piece of visible state.
//!
//! The screen is the only component that touches the render surface. It
//! keeps the header, the ordered post blocks (keyed by post id), the
//! selection cursor, the form inputs and the edit highlight, and repaints
//! the whole layout from that state on each `refresh`. The orchestrator
//! never draws; it only calls the operations below.

pub mod ansi;
pub mod mock;
pub mod surface;

pub use mock::{MockSurface, SurfaceOp};
pub use surface::{Surface, TerminalSurface};

use anyhow::Result;

use crate::api::models::{PostId, UserId};
use crate::error::FeedError;

/// Everything needed to render one post block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostCard {
    pub id: PostId,
    pub author_image: String,
    pub author_name: String,
    pub title: String,
    pub body: String,
    pub author_id: UserId,
}

/// Current values of the form inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormInput {
    pub title: String,
    pub body: String,
}

/// Rendered fields of one post block, read back to seed an edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostFields {
    pub title: String,
    pub body: String,
    pub author_id: UserId,
}

/// Which form input receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Body,
}

/// Rows a post block occupies in the posts pane.
const CARD_ROWS: usize = 4;

/// Terminal screen for the feed.
pub struct FeedScreen<S: Surface> {
    surface: S,
    header_name: String,
    header_image: String,
    cards: Vec<PostCard>,
    selected: usize,
    scroll: usize,
    cards_per_page: usize,
    form_title: String,
    form_body: String,
    form_field: FormField,
    edit_highlight: bool,
}

impl<S: Surface> FeedScreen<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            header_name: String::new(),
            header_image: String::new(),
            cards: Vec::new(),
            selected: 0,
            scroll: 0,
            cards_per_page: usize::MAX,
            form_title: String::new(),
            form_body: String::new(),
            form_field: FormField::Title,
            edit_highlight: false,
        }
    }

    /// Take over the terminal: raw mode, alternate screen, hidden cursor.
    pub fn initialize(&mut self) -> Result<()> {
        self.surface.enable_raw_mode()?;
        self.surface.enter_alternate_screen()?;
        self.surface.hide_cursor()?;
        self.surface.clear_screen()?;
        Ok(())
    }

    /// Hand the terminal back. Safe to call on the error path.
    pub fn cleanup(&mut self) -> Result<()> {
        self.surface.show_cursor()?;
        self.surface.leave_alternate_screen()?;
        self.surface.disable_raw_mode()?;
        Ok(())
    }

    /// Replace the header's name and avatar URL.
    pub fn render_user_header(&mut self, name: &str, image_url: &str) {
        self.header_name = name.to_string();
        self.header_image = image_url.to_string();
    }

    /// Append a post block. Append order is call order; the caller controls
    /// ordering by iterating posts in fetch order.
    pub fn render_post(&mut self, card: PostCard) {
        self.cards.push(card);
    }

    /// Remove the block keyed by `id`. Asking for an id that was never
    /// rendered (or was already removed) is a precondition violation.
    pub fn remove_post(&mut self, id: PostId) -> Result<(), FeedError> {
        let pos = self
            .cards
            .iter()
            .position(|c| c.id == id)
            .ok_or(FeedError::PostNotRendered(id))?;
        self.cards.remove(pos);
        if self.selected >= self.cards.len() {
            self.selected = self.cards.len().saturating_sub(1);
        }
        if self.scroll > self.selected {
            self.scroll = self.selected;
        }
        Ok(())
    }

    pub fn read_form_inputs(&self) -> FormInput {
        FormInput {
            title: self.form_title.clone(),
            body: self.form_body.clone(),
        }
    }

    /// Read the rendered title/body and author id for the block keyed by `id`.
    pub fn read_post_fields(&self, id: PostId) -> Result<PostFields, FeedError> {
        let card = self
            .cards
            .iter()
            .find(|c| c.id == id)
            .ok_or(FeedError::PostNotRendered(id))?;
        Ok(PostFields {
            title: card.title.clone(),
            body: card.body.clone(),
            author_id: card.author_id,
        })
    }

    /// Scroll the posts pane to the top, highlight the form, load the
    /// inputs and focus the body field.
    pub fn enter_edit_mode(&mut self, title: &str, body: &str) {
        self.scroll = 0;
        self.edit_highlight = true;
        self.form_title = title.to_string();
        self.form_body = body.to_string();
        self.form_field = FormField::Body;
    }

    /// Restore the form's idle visual and clear both inputs.
    pub fn exit_edit_mode(&mut self) {
        self.edit_highlight = false;
        self.form_title.clear();
        self.form_body.clear();
        self.form_field = FormField::Title;
    }

    pub fn select_next(&mut self) {
        if self.cards.is_empty() {
            return;
        }
        if self.selected + 1 < self.cards.len() {
            self.selected += 1;
        }
        if self.selected >= self.scroll + self.cards_per_page {
            self.scroll = self.selected + 1 - self.cards_per_page;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
        if self.selected < self.scroll {
            self.scroll = self.selected;
        }
    }

    /// Id of the selected post block, if any block is on screen.
    pub fn selected_post_id(&self) -> Option<PostId> {
        self.cards.get(self.selected).map(|c| c.id)
    }

    pub fn form_insert_char(&mut self, c: char) {
        match self.form_field {
            FormField::Title => self.form_title.push(c),
            FormField::Body => self.form_body.push(c),
        }
    }

    pub fn form_backspace(&mut self) {
        match self.form_field {
            FormField::Title => self.form_title.pop(),
            FormField::Body => self.form_body.pop(),
        };
    }

    pub fn form_focus_next_field(&mut self) {
        self.form_field = match self.form_field {
            FormField::Title => FormField::Body,
            FormField::Body => FormField::Title,
        };
    }

    pub fn post_ids(&self) -> Vec<PostId> {
        self.cards.iter().map(|c| c.id).collect()
    }

    pub fn header_name(&self) -> &str {
        &self.header_name
    }

    pub fn header_image(&self) -> &str {
        &self.header_image
    }

    pub fn is_edit_highlighted(&self) -> bool {
        self.edit_highlight
    }

    pub fn focused_field(&self) -> FormField {
        self.form_field
    }

    /// Repaint the whole screen from state.
    ///
    /// Layout, top to bottom: header line, rule, posts pane, rule, title
    /// input, body input, spacer, status row. The busy spinner shares the
    /// status row with the key help.
    pub fn refresh(&mut self, loading_visible: bool) -> Result<()> {
        let (width, height) = self.surface.size()?;
        let width = width as usize;
        let height = height as usize;
        if height < 9 {
            // Too small to lay out; skip the paint rather than panic on
            // row arithmetic.
            return Ok(());
        }

        let pane_rows = height - 7;
        self.cards_per_page = (pane_rows / CARD_ROWS).max(1);
        if self.selected < self.scroll {
            self.scroll = self.selected;
        } else if self.selected >= self.scroll + self.cards_per_page {
            self.scroll = self.selected + 1 - self.cards_per_page;
        }

        self.surface.clear_screen()?;

        let header = format!(
            "{}{}{}  {}{}{}",
            ansi::BOLD,
            clip(&self.header_name, width / 2),
            ansi::RESET,
            ansi::DIM,
            clip(&self.header_image, width.saturating_sub(width / 2 + 2)),
            ansi::RESET,
        );
        self.put_line(0, &header)?;
        self.put_line(1, &"-".repeat(width))?;

        let mut row = 2;
        let pane_end = 2 + pane_rows;
        for (idx, card) in self.cards.iter().enumerate().skip(self.scroll) {
            if row + CARD_ROWS > pane_end {
                break;
            }
            let marker = if idx == self.selected { "> " } else { "  " };
            let author = format!(
                "{}{}{}{}  {}{}{}",
                marker,
                ansi::FG_CYAN,
                clip(&card.author_name, width / 2),
                ansi::RESET,
                ansi::DIM,
                clip(&card.author_image, width.saturating_sub(width / 2 + 4)),
                ansi::RESET,
            );
            let title = format!(
                "  {}{}{}",
                ansi::BOLD,
                clip(&card.title, width.saturating_sub(2)),
                ansi::RESET
            );
            let body = format!("  {}", clip(&card.body, width.saturating_sub(2)));
            self.surface.move_cursor(0, row as u16)?;
            write!(self.surface, "{author}")?;
            self.surface.move_cursor(0, (row + 1) as u16)?;
            write!(self.surface, "{title}")?;
            self.surface.move_cursor(0, (row + 2) as u16)?;
            write!(self.surface, "{body}")?;
            row += CARD_ROWS;
        }

        self.put_line(pane_end as u16, &"-".repeat(width))?;

        let title_line = self.form_line("Title", &self.form_title, FormField::Title, width);
        let body_line = self.form_line("Body ", &self.form_body, FormField::Body, width);
        self.put_line((pane_end + 1) as u16, &title_line)?;
        self.put_line((pane_end + 2) as u16, &body_line)?;

        let mut status =
            String::from("j/k select  d delete  e edit  Tab form  Enter save  Esc cancel  q quit");
        if loading_visible {
            status.push_str("  ~ loading...");
        }
        self.put_line((height - 1) as u16, &clip(&status, width))?;

        self.surface.flush()?;
        Ok(())
    }

    fn form_line(&self, label: &str, value: &str, field: FormField, width: usize) -> String {
        let cursor = if self.form_field == field { "_" } else { "" };
        let text = format!("{}: {}{}", label, clip(value, width.saturating_sub(8)), cursor);
        if self.edit_highlight {
            format!(
                "{}{}{:<w$}{}",
                ansi::BG_GREEN,
                ansi::FG_BLACK,
                text,
                ansi::RESET,
                w = width
            )
        } else {
            text
        }
    }

    fn put_line(&mut self, row: u16, text: &str) -> Result<()> {
        self.surface.move_cursor(0, row)?;
        write!(self.surface, "{text}")?;
        Ok(())
    }
}

/// Truncate to at most `max` characters.
fn clip(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: PostId) -> PostCard {
        PostCard {
            id,
            author_image: format!("https://img.example/{id}"),
            author_name: format!("Author {id}"),
            title: format!("Title {id}"),
            body: format!("Body {id}"),
            author_id: id * 10,
        }
    }

    fn screen() -> FeedScreen<MockSurface> {
        FeedScreen::new(MockSurface::new())
    }

    #[test]
    fn render_then_remove_leaves_no_trace() {
        let mut screen = screen();
        screen.render_post(card(1));
        screen.render_post(card(2));

        screen.remove_post(1).unwrap();
        assert_eq!(screen.post_ids(), vec![2]);

        // A second removal of the same id is a precondition violation.
        match screen.remove_post(1) {
            Err(FeedError::PostNotRendered(1)) => {}
            other => panic!("expected PostNotRendered, got {other:?}"),
        }
    }

    #[test]
    fn removal_clamps_the_selection() {
        let mut screen = screen();
        screen.render_post(card(1));
        screen.render_post(card(2));
        screen.select_next();
        assert_eq!(screen.selected_post_id(), Some(2));

        screen.remove_post(2).unwrap();
        assert_eq!(screen.selected_post_id(), Some(1));

        screen.remove_post(1).unwrap();
        assert_eq!(screen.selected_post_id(), None);
    }

    #[test]
    fn selection_stays_inside_the_card_list() {
        let mut screen = screen();
        screen.select_next();
        assert_eq!(screen.selected_post_id(), None);

        screen.render_post(card(1));
        screen.render_post(card(2));
        screen.select_next();
        screen.select_next();
        screen.select_next();
        assert_eq!(screen.selected_post_id(), Some(2));
        screen.select_prev();
        screen.select_prev();
        screen.select_prev();
        assert_eq!(screen.selected_post_id(), Some(1));
    }

    #[test]
    fn edit_mode_populates_the_form_inputs() {
        let mut screen = screen();
        screen.enter_edit_mode("Hello", "World");

        assert!(screen.is_edit_highlighted());
        assert_eq!(screen.focused_field(), FormField::Body);
        assert_eq!(
            screen.read_form_inputs(),
            FormInput {
                title: "Hello".to_string(),
                body: "World".to_string(),
            }
        );

        screen.exit_edit_mode();
        assert!(!screen.is_edit_highlighted());
        assert_eq!(
            screen.read_form_inputs(),
            FormInput {
                title: String::new(),
                body: String::new(),
            }
        );
    }

    #[test]
    fn read_post_fields_returns_rendered_state() {
        let mut screen = screen();
        screen.render_post(card(7));

        let fields = screen.read_post_fields(7).unwrap();
        assert_eq!(fields.title, "Title 7");
        assert_eq!(fields.body, "Body 7");
        assert_eq!(fields.author_id, 70);

        match screen.read_post_fields(8) {
            Err(FeedError::PostNotRendered(8)) => {}
            other => panic!("expected PostNotRendered, got {other:?}"),
        }
    }

    #[test]
    fn typed_characters_land_in_the_focused_field() {
        let mut screen = screen();
        screen.form_insert_char('h');
        screen.form_insert_char('i');
        screen.form_backspace();
        assert_eq!(screen.read_form_inputs().title, "h");

        screen.form_focus_next_field();
        screen.form_insert_char('y');
        assert_eq!(screen.read_form_inputs().body, "y");
        assert_eq!(screen.read_form_inputs().title, "h");
    }

    #[test]
    fn refresh_paints_header_and_posts() {
        let surface = MockSurface::new();
        let ops = surface.op_log();
        let mut screen = FeedScreen::new(surface);
        screen.render_user_header("Emily Johnson", "https://img.example/emily");
        screen.render_post(card(1));

        screen.refresh(false).unwrap();

        let writes: String = ops
            .lock()
            .unwrap()
            .iter()
            .filter_map(|op| match op {
                SurfaceOp::Write(text) => Some(text.clone()),
                _ => None,
            })
            .collect();
        assert!(writes.contains("Emily Johnson"));
        assert!(writes.contains("Title 1"));
        assert!(writes.contains("q quit"));
    }

    #[test]
    fn refresh_skips_painting_on_a_tiny_surface() {
        let surface = MockSurface::with_size(20, 4);
        let ops = surface.op_log();
        let mut screen = FeedScreen::new(surface);
        screen.render_post(card(1));

        screen.refresh(false).unwrap();
        assert!(ops.lock().unwrap().is_empty());
    }
}
