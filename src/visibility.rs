use super::*;

/// Hide/show bookkeeping for one display element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibilityState {
    pub hidden: bool,
    /// Display captured by the last hide, `None` until the first hide.
    pub saved_display: Option<String>,
}

/// Visibility state keyed by logical element name.
#[derive(Debug, Clone, Default)]
pub struct VisibilityLedger {
    entries: HashMap<String, VisibilityState>,
}

impl VisibilityLedger {
    pub fn get(&self, name: &str) -> Option<&VisibilityState> {
        self.entries.get(name)
    }

    pub fn saved_display(&self, name: &str) -> Option<&str> {
        self.entries
            .get(name)
            .and_then(|state| state.saved_display.as_deref())
    }

    /// Records a hide of `name` whose display was `current` right before it.
    ///
    /// Returns the value now held as the saved display.
    pub(crate) fn record_hide(
        &mut self,
        name: &str,
        current: String,
        sentinel: &str,
        policy: HidePolicy,
    ) -> &str {
        let state = self.entries.entry(name.to_string()).or_default();
        let already_hidden = state.hidden && state.saved_display.is_some() && current == sentinel;
        if policy == HidePolicy::Compat || !already_hidden {
            state.saved_display = Some(current);
        }
        state.hidden = true;
        state.saved_display.as_deref().unwrap_or_default()
    }

    pub(crate) fn record_show(&mut self, name: &str) {
        if let Some(state) = self.entries.get_mut(name) {
            state.hidden = false;
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
