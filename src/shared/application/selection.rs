/// Multi-select dropdown model
///
/// A set of selected string tokens maintained against a fixed option list,
/// independent of the filter synchronizer. Enumeration order of the
/// selection is toggle insertion order, not option-list order.
#[derive(Debug, Clone, Default)]
pub struct MultiSelect {
    options: Vec<String>,
    selected: Vec<String>,
    open: bool,
}

impl MultiSelect {
    pub fn new<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            options: options.into_iter().map(Into::into).collect(),
            selected: Vec::new(),
            open: false,
        }
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn is_selected(&self, value: &str) -> bool {
        self.selected.iter().any(|v| v == value)
    }

    /// Add-if-absent / remove-if-present. Tokens outside the option list
    /// are ignored. Returns whether the selection changed.
    pub fn toggle(&mut self, value: &str) -> bool {
        if !self.options.iter().any(|o| o == value) {
            return false;
        }
        if let Some(pos) = self.selected.iter().position(|v| v == value) {
            self.selected.remove(pos);
        } else {
            self.selected.push(value.to_string());
        }
        true
    }

    /// Empties this control's selection without touching anything else.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Replace the option list (e.g. once genres arrive from the backend).
    /// Selected tokens that no longer exist are dropped.
    pub fn set_options<I, S>(&mut self, options: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self.selected.retain(|v| self.options.contains(v));
    }

    /// Button caption: the placeholder when nothing is selected,
    /// otherwise "N selected".
    pub fn summary(&self, placeholder: &str) -> String {
        if self.selected.is_empty() {
            placeholder.to_string()
        } else {
            format!("{} selected", self.selected.len())
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle_open(&mut self) {
        self.open = !self.open;
    }

    /// A click outside the control's bounding region closes the menu.
    /// This is the only cancellation semantic; the selection is untouched.
    pub fn dismiss(&mut self) {
        self.open = false;
    }
}
