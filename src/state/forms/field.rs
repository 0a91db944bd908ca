//! Form field value objects

/// Type-safe field values
#[derive(Debug, Clone)]
pub enum FieldValue {
    Text(String),
    /// Fixed-choice field with its own dropdown open/highlight state
    Select {
        value: Option<String>,
        options: Vec<String>,
        open: bool,
        highlight: usize,
    },
    /// Date entered as `YYYY-MM-DD` text
    Date(String),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub value: FieldValue,
    pub is_multiline: bool,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: &str, label: &str, is_multiline: bool) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Text(String::new()),
            is_multiline,
        }
    }

    /// Create a new text field with initial value
    pub fn text_with_value(name: &str, label: &str, value: String, is_multiline: bool) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Text(value),
            is_multiline,
        }
    }

    /// Create a new select field over a fixed option set
    pub fn select(name: &str, label: &str, options: Vec<String>) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Select {
                value: None,
                options,
                open: false,
                highlight: 0,
            },
            is_multiline: false,
        }
    }

    /// Create a new select field with an initial value.
    ///
    /// The value is kept verbatim even when it is not in the option set;
    /// validation reports membership separately.
    pub fn select_with_value(name: &str, label: &str, options: Vec<String>, value: String) -> Self {
        let mut field = Self::select(name, label, options);
        if !value.is_empty() {
            field.set_text(value);
        }
        field
    }

    /// Create a new date field
    pub fn date(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Date(String::new()),
            is_multiline: false,
        }
    }

    /// Create a new date field with initial `YYYY-MM-DD` text
    pub fn date_with_value(name: &str, label: &str, value: String) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Date(value),
            is_multiline: false,
        }
    }

    /// Get the current value as text (empty string when unset)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) | FieldValue::Date(s) => s,
            FieldValue::Select { value, .. } => value.as_deref().unwrap_or(""),
        }
    }

    /// Set the value from text
    pub fn set_text(&mut self, new_value: String) {
        match &mut self.value {
            FieldValue::Text(s) | FieldValue::Date(s) => *s = new_value,
            FieldValue::Select {
                value,
                options,
                highlight,
                ..
            } => {
                if let Some(pos) = options.iter().position(|o| *o == new_value) {
                    *highlight = pos;
                }
                *value = Some(new_value);
            }
        }
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        match &mut self.value {
            FieldValue::Text(s) => s.push(c),
            FieldValue::Date(s) => {
                // Only date-shaped input: digits and separators
                if c.is_ascii_digit() || c == '-' {
                    s.push(c);
                }
            }
            FieldValue::Select { .. } => {
                // Select fields take values from their dropdown only
            }
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) | FieldValue::Date(s) => {
                s.pop();
            }
            FieldValue::Select { .. } => {}
        }
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) | FieldValue::Date(s) => s.clear(),
            FieldValue::Select {
                value,
                open,
                highlight,
                ..
            } => {
                *value = None;
                *open = false;
                *highlight = 0;
            }
        }
    }

    /// Whether this field carries a dropdown
    pub fn is_select(&self) -> bool {
        matches!(self.value, FieldValue::Select { .. })
    }

    /// Whether this field's dropdown is open
    pub fn is_open(&self) -> bool {
        matches!(self.value, FieldValue::Select { open: true, .. })
    }

    /// Option set of a select field (empty for other kinds)
    pub fn options(&self) -> &[String] {
        match &self.value {
            FieldValue::Select { options, .. } => options,
            _ => &[],
        }
    }

    /// Highlighted option index of a select field
    pub fn highlight(&self) -> usize {
        match &self.value {
            FieldValue::Select { highlight, .. } => *highlight,
            _ => 0,
        }
    }

    /// Toggle the dropdown; only this field's open flag is touched
    pub fn toggle_open(&mut self) {
        if let FieldValue::Select {
            value,
            options,
            open,
            highlight,
        } = &mut self.value
        {
            *open = !*open;
            if *open {
                // Start the highlight on the current selection
                if let Some(current) = value {
                    if let Some(pos) = options.iter().position(|o| o == current) {
                        *highlight = pos;
                    }
                }
            }
        }
    }

    /// Close the dropdown without selecting
    pub fn close_dropdown(&mut self) {
        if let FieldValue::Select { open, .. } = &mut self.value {
            *open = false;
        }
    }

    /// Move the dropdown highlight down (wraps)
    pub fn highlight_next(&mut self) {
        if let FieldValue::Select {
            options, highlight, ..
        } = &mut self.value
        {
            if !options.is_empty() {
                *highlight = (*highlight + 1) % options.len();
            }
        }
    }

    /// Move the dropdown highlight up (wraps)
    pub fn highlight_prev(&mut self) {
        if let FieldValue::Select {
            options, highlight, ..
        } = &mut self.value
        {
            if !options.is_empty() {
                *highlight = if *highlight == 0 {
                    options.len() - 1
                } else {
                    *highlight - 1
                };
            }
        }
    }

    /// Select the highlighted option and close only this dropdown
    pub fn select_highlighted(&mut self) {
        if let FieldValue::Select {
            value,
            options,
            open,
            highlight,
        } = &mut self.value
        {
            if let Some(option) = options.get(*highlight) {
                *value = Some(option.clone());
            }
            *open = false;
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        self.as_text().to_string()
    }
}
