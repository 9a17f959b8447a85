use super::*;

/// Page-side operations over the `music`, `debug` and `output` elements.
///
/// Checked state is never cached: every call resolves the elements through
/// the registry and reads the live value. The only state kept here is the
/// [`VisibilityLedger`] holding the display value saved by the last hide.
#[derive(Debug, Clone, Default)]
pub struct ToggleAdapter {
    config: ToggleConfig,
    ledger: VisibilityLedger,
}

impl ToggleAdapter {
    pub fn new(config: ToggleConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ledger: VisibilityLedger::default(),
        })
    }

    pub fn config(&self) -> &ToggleConfig {
        &self.config
    }

    pub fn ledger(&self) -> &VisibilityLedger {
        &self.ledger
    }

    /// Visibility record of the output element, `None` before its first hide.
    pub fn output_visibility(&self) -> Option<&VisibilityState> {
        self.ledger.get(&self.config.output_id)
    }

    pub fn toggle_music<R: ElementRegistry>(&self, registry: &mut R) -> Result<()> {
        let enabled = flip_checked(registry, &self.config.music_id)?;
        log::debug!("music toggled, enabled={enabled}");
        Ok(())
    }

    pub fn is_music_enabled<R: ElementRegistry>(&self, registry: &R) -> Result<bool> {
        read_checked(registry, &self.config.music_id)
    }

    /// Flips `debug` and then refreshes the output visibility.
    ///
    /// Both elements are resolved up front, so a missing `output` fails
    /// before `debug` is flipped.
    pub fn toggle_debug<R: ElementRegistry>(&mut self, registry: &mut R) -> Result<()> {
        let debug = registry.resolve(&self.config.debug_id)?;
        let output = registry.resolve(&self.config.output_id)?;
        let enabled = !registry.checked(debug)?;
        registry.set_checked(debug, enabled)?;
        log::debug!("debug toggled, enabled={enabled}");
        self.apply_visibility(registry, debug, output)
    }

    pub fn refresh_debug_visibility<R: ElementRegistry>(&mut self, registry: &mut R) -> Result<()> {
        let debug = registry.resolve(&self.config.debug_id)?;
        let output = registry.resolve(&self.config.output_id)?;
        self.apply_visibility(registry, debug, output)
    }

    pub fn is_debug_enabled<R: ElementRegistry>(&self, registry: &R) -> Result<bool> {
        read_checked(registry, &self.config.debug_id)
    }

    /// Brings the output visibility in line with the debug checkbox as set by
    /// the page markup. Call once after the elements exist.
    pub fn on_page_load<R: ElementRegistry>(&mut self, registry: &mut R) -> Result<()> {
        log::trace!("page load, syncing output visibility");
        self.refresh_debug_visibility(registry)
    }

    fn apply_visibility<R: ElementRegistry>(
        &mut self,
        registry: &mut R,
        debug: R::Handle,
        output: R::Handle,
    ) -> Result<()> {
        let output_id = self.config.output_id.as_str();

        if registry.checked(debug)? {
            // Never hidden by us: the display stays as the page set it.
            let Some(saved) = self.ledger.saved_display(output_id).map(str::to_string) else {
                log::trace!("debug enabled, {output_id} untouched");
                return Ok(());
            };
            registry.set_inline_display(output, &saved)?;
            self.ledger.record_show(output_id);
            log::debug!("debug enabled, {output_id} display restored to {saved:?}");
            return Ok(());
        }

        let current = registry.inline_display(output)?;
        let sentinel = self.config.hidden_display.as_str();
        let saved = self
            .ledger
            .record_hide(output_id, current, sentinel, self.config.hide_policy);
        log::debug!("debug disabled, {output_id} hidden, saved display {saved:?}");
        registry.set_inline_display(output, sentinel)
    }
}

pub(crate) fn read_checked<R: ElementRegistry>(registry: &R, name: &str) -> Result<bool> {
    let handle = registry.resolve(name)?;
    registry.checked(handle)
}

/// Flips the checked state of `name` and returns the new value.
pub(crate) fn flip_checked<R: ElementRegistry>(registry: &mut R, name: &str) -> Result<bool> {
    let handle = registry.resolve(name)?;
    let checked = !registry.checked(handle)?;
    registry.set_checked(handle, checked)?;
    Ok(checked)
}
