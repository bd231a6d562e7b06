use unicode_segmentation::UnicodeSegmentation;

/// Single-line text buffer with a byte cursor that always sits on a grapheme boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    pub text: String,
    pub cursor: usize,
}

impl TextInput {
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.len();
        Self { text, cursor }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    fn boundaries(&self) -> Vec<usize> {
        let mut boundaries: Vec<usize> =
            self.text.grapheme_indices(true).map(|(i, _)| i).collect();
        boundaries.push(self.text.len());
        boundaries
    }

    /// Snap the cursor back onto a boundary and return that boundary's index
    fn clamp_cursor(&mut self, boundaries: &[usize]) -> usize {
        let cursor = self.cursor.min(self.text.len());
        let idx = match boundaries.binary_search(&cursor) {
            Ok(idx) => idx,
            Err(idx) => idx.saturating_sub(1),
        };
        self.cursor = boundaries.get(idx).copied().unwrap_or(0);
        idx
    }

    fn prev_word_boundary(&self) -> usize {
        let graphemes: Vec<(usize, &str)> = self.text[..self.cursor].grapheme_indices(true).collect();
        let mut iter = graphemes.iter().rev().peekable();
        while iter
            .peek()
            .is_some_and(|(_, g)| g.chars().all(char::is_whitespace))
        {
            iter.next();
        }
        let mut start = iter.peek().map_or(0, |(i, _)| *i);
        for (i, g) in iter {
            if g.chars().all(char::is_whitespace) {
                break;
            }
            start = *i;
        }
        start
    }

    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn insert_char(&mut self, c: char) {
        let boundaries = self.boundaries();
        self.clamp_cursor(&boundaries);
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Remove the grapheme before the cursor. Returns whether anything changed.
    pub fn backspace(&mut self) -> bool {
        let boundaries = self.boundaries();
        let idx = self.clamp_cursor(&boundaries);
        if idx == 0 {
            return false;
        }
        let prev = boundaries[idx - 1];
        self.text.drain(prev..self.cursor);
        self.cursor = prev;
        true
    }

    pub fn delete_forward_char(&mut self) -> bool {
        let boundaries = self.boundaries();
        let idx = self.clamp_cursor(&boundaries);
        let Some(&end) = boundaries.get(idx + 1) else {
            return false;
        };
        self.text.drain(self.cursor..end);
        true
    }

    pub fn delete_word(&mut self) -> bool {
        let boundaries = self.boundaries();
        self.clamp_cursor(&boundaries);
        if self.cursor == 0 {
            return false;
        }
        let start = self.prev_word_boundary();
        self.text.drain(start..self.cursor);
        self.cursor = start;
        true
    }

    pub fn cursor_left(&mut self) {
        let boundaries = self.boundaries();
        let idx = self.clamp_cursor(&boundaries);
        if idx > 0 {
            self.cursor = boundaries[idx - 1];
        }
    }

    pub fn cursor_right(&mut self) {
        let boundaries = self.boundaries();
        let idx = self.clamp_cursor(&boundaries);
        if let Some(&next) = boundaries.get(idx + 1) {
            self.cursor = next;
        }
    }

    pub fn cursor_start(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.text.len();
    }
}

/// Highlight and scroll position over a list of `len` rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSelection {
    pub len: usize,
    pub selected: Option<usize>,
    pub scroll_offset: usize,
}

impl ListSelection {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            selected: if len > 0 { Some(0) } else { None },
            scroll_offset: 0,
        }
    }

    pub fn reset(&mut self, len: usize) {
        *self = Self::new(len);
    }

    pub fn select(&mut self, index: usize) {
        if index < self.len {
            self.selected = Some(index);
        }
    }

    /// Move selection by delta, clamping to bounds
    pub fn move_selection(&mut self, delta: i32) {
        if self.len == 0 {
            return;
        }
        let current = self.selected.unwrap_or(0);
        let step = delta.unsigned_abs() as usize;
        self.selected = Some(if delta > 0 {
            current.saturating_add(step).min(self.len - 1)
        } else {
            current.saturating_sub(step)
        });
    }

    pub fn move_to_top(&mut self) {
        if self.len > 0 {
            self.selected = Some(0);
        }
    }

    pub fn move_to_bottom(&mut self) {
        if self.len > 0 {
            self.selected = Some(self.len - 1);
        }
    }

    /// Keep the highlighted row inside a viewport of `viewport_rows`, with one row of
    /// context above and below when there is room.
    pub fn update_scroll_offset(&mut self, viewport_rows: usize) {
        if self.len == 0 {
            self.scroll_offset = 0;
            return;
        }
        let viewport_rows = viewport_rows.max(1);
        let max_offset = self.len.saturating_sub(viewport_rows);
        let selected = self.selected.unwrap_or(0).min(self.len - 1);
        let anchor_top = usize::from(viewport_rows > 2);
        let anchor_bottom = viewport_rows.saturating_sub(2);

        if selected < self.scroll_offset + anchor_top {
            self.scroll_offset = selected.saturating_sub(anchor_top);
        } else if selected > self.scroll_offset + anchor_bottom {
            self.scroll_offset = selected.saturating_sub(anchor_bottom);
        }
        self.scroll_offset = self.scroll_offset.min(max_offset);
    }
}
