//! Option selection state shared by the drop-down widgets.
//!
//! An [`OptionSelector`] owns one option list and the current selection for
//! a single- or multi-select drop-down. It applies a configured default
//! selection once per option-list generation and reports every selection
//! change to a registered listener, so the hosting widget never has to poll.

/// One selectable (caption, value) pair shown in a drop-down.
///
/// The `value` uniquely identifies an option within one option list;
/// captions need not be unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub caption: String,
    pub value: String,
}

impl SelectOption {
    pub fn new(caption: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            caption: caption.into(),
            value: value.into(),
        }
    }

    /// The synthetic "nothing selected" entry single-select drop-downs are
    /// prefixed with.
    pub fn empty(caption: impl Into<String>) -> Self {
        Self::new(caption, "")
    }
}

/// Callback invoked with the full selection after every selection change.
pub type SelectionListener = Box<dyn FnMut(&[SelectOption]) + Send>;

/// Selection state machine for one drop-down widget.
///
/// The selector is synchronous and owned exclusively by its widget: all
/// mutation happens through [`set_options`](Self::set_options),
/// [`apply_default`](Self::apply_default) and [`toggle`](Self::toggle),
/// each of which notifies the listener at most once.
pub struct OptionSelector {
    options: Vec<SelectOption>,
    selection: Vec<SelectOption>,
    default_spec: Option<String>,
    multi_select: bool,
    empty_caption: String,
    defaults_applied: bool,
    listener: Option<SelectionListener>,
}

impl OptionSelector {
    pub fn new(multi_select: bool, empty_caption: impl Into<String>) -> Self {
        Self {
            options: Vec::new(),
            selection: Vec::new(),
            default_spec: None,
            multi_select,
            empty_caption: empty_caption.into(),
            defaults_applied: false,
            listener: None,
        }
    }

    /// Set the default selection, a single value or a comma-separated value
    /// list depending on the select mode. Takes effect on the next option
    /// list generation.
    pub fn set_default_spec(&mut self, spec: impl Into<String>) {
        let spec = spec.into();
        self.default_spec = if spec.is_empty() { None } else { Some(spec) };
    }

    /// Register the consumer callback. Replaces any previous listener.
    pub fn set_listener(&mut self, listener: SelectionListener) {
        self.listener = Some(listener);
    }

    pub fn is_multi_select(&self) -> bool {
        self.multi_select
    }

    pub fn empty_caption(&self) -> &str {
        &self.empty_caption
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn selection(&self) -> &[SelectOption] {
        &self.selection
    }

    /// Whether the option identified by `value` is currently selected.
    /// Membership is decided by the value key, never by position.
    pub fn is_selected(&self, value: &str) -> bool {
        self.selection.iter().any(|option| option.value == value)
    }

    /// The text the closed trigger shows: selected captions joined with a
    /// comma, or the empty caption when nothing meaningful is selected.
    pub fn display_caption(&self) -> String {
        let captions: Vec<&str> = self
            .selection
            .iter()
            .filter(|option| !option.value.is_empty())
            .map(|option| option.caption.as_str())
            .collect();
        if captions.is_empty() {
            self.empty_caption.clone()
        } else {
            captions.join(",")
        }
    }

    /// Replace the option list.
    ///
    /// An element-wise identical replacement is ignored entirely, so
    /// re-supplying the same list never re-applies defaults or notifies the
    /// listener. A real replacement clears the defaults-applied guard and
    /// resolves the default spec against the new list; a replacement with an
    /// empty list drops the selection instead, keeping it free of entries
    /// the list no longer contains.
    ///
    /// Returns `true` when the list was actually replaced.
    pub fn set_options(&mut self, options: Vec<SelectOption>) -> bool {
        if self.options == options {
            return false;
        }
        self.options = options;
        self.defaults_applied = false;
        if self.options.is_empty() {
            self.commit(Vec::new());
        } else {
            self.apply_default();
        }
        true
    }

    /// Resolve the default spec against the current option list.
    ///
    /// Runs at most once per option list generation; later calls without an
    /// intervening [`set_options`](Self::set_options) are no-ops. Unmatched
    /// default values never error: single-select falls back to the first
    /// option, multi-select drops the unmatched tokens.
    pub fn apply_default(&mut self) {
        if self.defaults_applied || self.options.is_empty() {
            return;
        }
        self.defaults_applied = true;

        let selection = if self.multi_select {
            match &self.default_spec {
                Some(spec) => {
                    let mut matched: Vec<SelectOption> = Vec::new();
                    for token in spec.split(',') {
                        if matched.iter().any(|option| option.value == token) {
                            continue;
                        }
                        if let Some(option) = self.options.iter().find(|option| option.value == token) {
                            matched.push(option.clone());
                        }
                    }
                    matched
                }
                None => Vec::new(),
            }
        } else {
            let fallback = self.options.first();
            let chosen = match &self.default_spec {
                Some(spec) => self.options.iter().find(|option| &option.value == spec).or(fallback),
                None => fallback,
            };
            chosen.cloned().into_iter().collect()
        };

        self.commit(selection);
    }

    /// Select or deselect one option.
    ///
    /// Single-select replaces the whole selection with the given option.
    /// Multi-select removes the option when it is already selected (matched
    /// by value) and appends it otherwise; the order of the remaining
    /// entries is preserved.
    pub fn toggle(&mut self, option: &SelectOption) {
        let selection = if self.multi_select {
            let mut altered = self.selection.clone();
            match altered.iter().position(|entry| entry.value == option.value) {
                Some(index) => {
                    altered.remove(index);
                }
                None => altered.push(option.clone()),
            }
            altered
        } else {
            vec![option.clone()]
        };
        self.commit(selection);
    }

    /// Commit a new selection, notifying the listener when it differs from
    /// the current one. Every entry point funnels through here so the
    /// listener sees exactly one call per selection transition.
    fn commit(&mut self, selection: Vec<SelectOption>) {
        if self.selection == selection {
            return;
        }
        self.selection = selection;
        if let Some(listener) = self.listener.as_mut() {
            listener(&self.selection);
        }
    }
}
