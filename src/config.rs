use super::*;

/// What a disabled-state refresh does with the saved display value when the
/// output element is already hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HidePolicy {
    /// Capture the current display on every disabled-state refresh, even when
    /// that value is the hidden sentinel itself.
    #[default]
    Compat,
    /// Capture only on a visible to hidden transition.
    PreserveOriginal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleConfig {
    pub music_id: String,
    pub debug_id: String,
    pub output_id: String,
    pub hidden_display: String,
    pub hide_policy: HidePolicy,
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            music_id: "music".to_string(),
            debug_id: "debug".to_string(),
            output_id: "output".to_string(),
            hidden_display: "none".to_string(),
            hide_policy: HidePolicy::Compat,
        }
    }
}

impl ToggleConfig {
    pub fn with_music_id(mut self, id: impl Into<String>) -> Self {
        self.music_id = id.into();
        self
    }

    pub fn with_debug_id(mut self, id: impl Into<String>) -> Self {
        self.debug_id = id.into();
        self
    }

    pub fn with_output_id(mut self, id: impl Into<String>) -> Self {
        self.output_id = id.into();
        self
    }

    pub fn with_hidden_display(mut self, value: impl Into<String>) -> Self {
        self.hidden_display = value.into();
        self
    }

    pub fn with_hide_policy(mut self, policy: HidePolicy) -> Self {
        self.hide_policy = policy;
        self
    }

    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("music_id", &self.music_id),
            ("debug_id", &self.debug_id),
            ("output_id", &self.output_id),
            ("hidden_display", &self.hidden_display),
        ] {
            if value.trim().is_empty() {
                return Err(Error::InvalidConfig(format!("{field} must not be empty")));
            }
        }

        if self.music_id == self.debug_id
            || self.music_id == self.output_id
            || self.debug_id == self.output_id
        {
            return Err(Error::InvalidConfig(format!(
                "element ids must be distinct: music={}, debug={}, output={}",
                self.music_id, self.debug_id, self.output_id
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() -> Result<()> {
        let config = ToggleConfig::default();
        config.validate()?;
        assert_eq!(config.hidden_display, "none");
        assert_eq!(config.hide_policy, HidePolicy::Compat);
        Ok(())
    }

    #[test]
    fn empty_ids_and_sentinel_are_rejected() {
        let err = ToggleConfig::default()
            .with_output_id(" ")
            .validate()
            .expect_err("blank output id should fail");
        assert_eq!(
            err,
            Error::InvalidConfig("output_id must not be empty".into())
        );

        let err = ToggleConfig::default()
            .with_hidden_display("")
            .validate()
            .expect_err("blank sentinel should fail");
        assert_eq!(
            err,
            Error::InvalidConfig("hidden_display must not be empty".into())
        );
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let result = ToggleConfig::default().with_debug_id("music").validate();
        assert!(matches!(result, Err(Error::InvalidConfig(msg)) if msg.contains("distinct")));
    }
}
