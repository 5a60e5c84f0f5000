use crate::event::{Key, Modifiers};

/// Outcome of feeding a key into an [`InputField`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// The text changed; the host should read `value()` again.
    Changed,
    /// Enter was pressed.
    Submitted,
    /// Handled without changing the text (cursor movement, selection).
    Handled,
    /// Not an editing key; the host should process it itself.
    Ignored,
}

/// Single-line text input with cursor, selection, and the usual field
/// affordances: label, placeholder, helper and error text, disabled state,
/// and password masking with a visibility toggle.
///
/// Cursor and selection anchor are char indices, not byte offsets.
#[derive(Debug, Clone, Default)]
pub struct InputField {
    value: String,
    cursor: usize,
    /// Selection anchor. When present and different from the cursor, the
    /// span between the two is selected.
    anchor: Option<usize>,
    label: Option<String>,
    placeholder: Option<String>,
    helper: Option<String>,
    error: Option<String>,
    disabled: bool,
    password: bool,
    password_visible: bool,
}

impl InputField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.set_value(value);
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn helper(mut self, helper: impl Into<String>) -> Self {
        self.helper = Some(helper.into());
        self
    }

    pub fn error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Mask typed characters with `•` until visibility is toggled on.
    pub fn password(mut self) -> Self {
        self.password = true;
        self
    }

    pub fn text(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn label_text(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn placeholder_text(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    /// Helper line to show under the field: the error when invalid, the
    /// helper text otherwise.
    pub fn message(&self) -> Option<&str> {
        self.error.as_deref().or(self.helper.as_deref())
    }

    pub fn is_invalid(&self) -> bool {
        self.error.is_some()
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn is_password(&self) -> bool {
        self.password
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Replace the whole value, cursor at the end, selection cleared.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.chars().count();
        self.anchor = None;
    }

    /// Clear-button behavior. No-op when disabled or already empty.
    pub fn clear(&mut self) -> InputEvent {
        if self.disabled || self.value.is_empty() {
            return InputEvent::Ignored;
        }
        self.set_value("");
        InputEvent::Changed
    }

    pub fn toggle_password_visibility(&mut self) {
        if self.password {
            self.password_visible = !self.password_visible;
        }
    }

    /// Text to draw in the field: the placeholder when empty, the mask when
    /// a password field is hidden, the raw value otherwise.
    pub fn display_text(&self) -> String {
        if self.value.is_empty() {
            return self.placeholder.clone().unwrap_or_default();
        }
        if self.password && !self.password_visible {
            return "•".repeat(self.value.chars().count());
        }
        self.value.clone()
    }

    /// Selection span as (start, end) char indices, start < end.
    pub fn selection(&self) -> Option<(usize, usize)> {
        let anchor = self.anchor?;
        if anchor == self.cursor {
            return None;
        }
        Some(if anchor < self.cursor {
            (anchor, self.cursor)
        } else {
            (self.cursor, anchor)
        })
    }

    pub fn select_all(&mut self) {
        if !self.value.is_empty() {
            self.anchor = Some(0);
            self.cursor = self.value.chars().count();
        }
    }

    /// Feed one key press into the field. Disabled fields ignore all input.
    pub fn handle_key(&mut self, key: Key, modifiers: Modifiers) -> InputEvent {
        if self.disabled {
            return InputEvent::Ignored;
        }

        match key {
            Key::Char(c) if !modifiers.ctrl && !modifiers.alt => {
                self.insert_char(c);
                InputEvent::Changed
            }
            Key::Char('a') if modifiers.ctrl => {
                self.select_all();
                InputEvent::Handled
            }
            Key::Backspace if modifiers.none() => {
                if self.delete_backward() {
                    InputEvent::Changed
                } else {
                    InputEvent::Handled
                }
            }
            Key::Delete if modifiers.none() => {
                if self.delete_forward() {
                    InputEvent::Changed
                } else {
                    InputEvent::Handled
                }
            }
            Key::Left if !modifiers.ctrl => {
                self.move_cursor(-1, modifiers.shift);
                InputEvent::Handled
            }
            Key::Right if !modifiers.ctrl => {
                self.move_cursor(1, modifiers.shift);
                InputEvent::Handled
            }
            Key::Home => {
                self.move_to(0, modifiers.shift);
                InputEvent::Handled
            }
            Key::End => {
                self.move_to(self.value.chars().count(), modifiers.shift);
                InputEvent::Handled
            }
            Key::Enter => InputEvent::Submitted,
            _ => InputEvent::Ignored,
        }
    }

    fn insert_char(&mut self, c: char) {
        if let Some((start, end)) = self.selection() {
            self.replace_span(start, end, &c.to_string());
            self.cursor = start + 1;
        } else {
            let at = self.byte_index(self.cursor);
            self.value.insert(at, c);
            self.cursor += 1;
        }
        self.anchor = None;
    }

    /// Delete the selection, or the char before the cursor. Returns whether
    /// the text changed.
    fn delete_backward(&mut self) -> bool {
        if let Some((start, end)) = self.selection() {
            self.replace_span(start, end, "");
            self.cursor = start;
            self.anchor = None;
            true
        } else if self.cursor > 0 {
            self.replace_span(self.cursor - 1, self.cursor, "");
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    /// Delete the selection, or the char at the cursor. Returns whether the
    /// text changed.
    fn delete_forward(&mut self) -> bool {
        if let Some((start, end)) = self.selection() {
            self.replace_span(start, end, "");
            self.cursor = start;
            self.anchor = None;
            true
        } else if self.cursor < self.value.chars().count() {
            self.replace_span(self.cursor, self.cursor + 1, "");
            true
        } else {
            false
        }
    }

    fn move_cursor(&mut self, delta: i64, extend: bool) {
        if !extend {
            // Collapse an existing selection to its edge in the direction
            // of travel.
            if let Some((start, end)) = self.selection() {
                self.cursor = if delta < 0 { start } else { end };
                self.anchor = None;
                return;
            }
        }
        let len = self.value.chars().count() as i64;
        let target = (self.cursor as i64 + delta).clamp(0, len) as usize;
        self.move_to(target, extend);
    }

    fn move_to(&mut self, position: usize, extend: bool) {
        if extend {
            if self.anchor.is_none() {
                self.anchor = Some(self.cursor);
            }
        } else {
            self.anchor = None;
        }
        self.cursor = position.min(self.value.chars().count());
    }

    /// Replace the chars in `[start, end)` with `replacement`.
    fn replace_span(&mut self, start: usize, end: usize, replacement: &str) {
        let start_byte = self.byte_index(start);
        let end_byte = self.byte_index(end);
        self.value.replace_range(start_byte..end_byte, replacement);
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }
}
