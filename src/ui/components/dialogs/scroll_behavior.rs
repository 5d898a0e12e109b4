use ratatui::widgets::ScrollbarState;

/// Lines moved by PageUp/PageDown
pub const PAGE_LINES: usize = 10;

/// Scroll position of a dialog body.
///
/// The offset may run past the content; renderers clamp it against the
/// visible height before drawing.
#[derive(Debug, Default, Clone)]
pub struct DialogScroll {
    pub offset: usize,
    pub scrollbar_state: ScrollbarState,
}

impl DialogScroll {
    pub fn reset(&mut self) {
        self.offset = 0;
        self.scrollbar_state = ScrollbarState::new(0);
    }

    pub fn up(&mut self, lines: usize) {
        self.set(self.offset.saturating_sub(lines));
    }

    pub fn down(&mut self, lines: usize) {
        self.set(self.offset.saturating_add(lines));
    }

    pub fn top(&mut self) {
        self.set(0);
    }

    pub fn bottom(&mut self) {
        self.set(usize::MAX);
    }

    fn set(&mut self, offset: usize) {
        self.offset = offset;
        self.scrollbar_state = self.scrollbar_state.position(offset);
    }

    /// Clamp against `total_lines` shown `visible_height` at a time and return the first visible line
    pub fn clamp(&mut self, total_lines: usize, visible_height: usize) -> usize {
        let max_scroll = total_lines.saturating_sub(visible_height);
        let clamped = self.offset.min(max_scroll);
        self.scrollbar_state = self
            .scrollbar_state
            .content_length(total_lines)
            .viewport_content_length(visible_height)
            .position(clamped);
        clamped
    }
}
