use super::*;

/// Deterministic in-memory host page.
///
/// Built from an HTML fixture; elements are addressed by `#id` selectors.
/// The page owns a [`ToggleAdapter`] and exposes its operations directly, so
/// a test reads like the host's event wiring:
///
/// ```
/// use page_toggles::Page;
///
/// let mut page = Page::from_html(
///     r#"<input id="debug" type="checkbox" checked>
///        <div id="output" style="display: block"></div>"#,
/// )?;
/// page.toggle_debug()?;
/// page.assert_display("#output", "none")?;
/// page.toggle_debug()?;
/// page.assert_display("#output", "block")?;
/// # Ok::<(), page_toggles::Error>(())
/// ```
#[derive(Debug)]
pub struct Page {
    dom: Dom,
    toggles: ToggleAdapter,
    trace: TraceState,
}

impl Page {
    pub fn from_html(html: &str) -> Result<Self> {
        Self::from_html_with_config(html, ToggleConfig::default())
    }

    pub fn from_html_with_config(html: &str, config: ToggleConfig) -> Result<Self> {
        let toggles = ToggleAdapter::new(config)?;
        let dom = html::parse_html(html)?;
        Ok(Self {
            dom,
            toggles,
            trace: TraceState::default(),
        })
    }

    pub fn config(&self) -> &ToggleConfig {
        self.toggles.config()
    }

    pub fn visibility(&self) -> Option<&VisibilityState> {
        self.toggles.output_visibility()
    }

    pub fn toggle_music(&mut self) -> Result<()> {
        let result = self.toggles.toggle_music(&mut self.dom);
        self.trace_result("toggle_music", result)
    }

    pub fn is_music_enabled(&self) -> Result<bool> {
        self.toggles.is_music_enabled(&self.dom)
    }

    pub fn toggle_debug(&mut self) -> Result<()> {
        let result = self.toggles.toggle_debug(&mut self.dom);
        self.trace_result("toggle_debug", result)
    }

    pub fn refresh_debug_visibility(&mut self) -> Result<()> {
        let result = self.toggles.refresh_debug_visibility(&mut self.dom);
        self.trace_result("refresh_debug_visibility", result)
    }

    pub fn is_debug_enabled(&self) -> Result<bool> {
        self.toggles.is_debug_enabled(&self.dom)
    }

    pub fn on_page_load(&mut self) -> Result<()> {
        let result = self.toggles.on_page_load(&mut self.dom);
        self.trace_result("on_page_load", result)
    }

    /// Sets checked state directly, as the user clicking the box would.
    pub fn set_checked(&mut self, selector: &str, checked: bool) -> Result<()> {
        let target = self.select_one(selector)?;
        self.dom.set_checked(target, checked)
    }

    pub fn set_style(&mut self, selector: &str, property: &str, value: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        self.dom.style_set(target, property, value)
    }

    pub fn style(&self, selector: &str, property: &str) -> Result<String> {
        let target = self.select_one(selector)?;
        self.dom.style_get(target, property)
    }

    /// Detaches the element from the document. Later lookups of its id fail.
    pub fn remove_element(&mut self, selector: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        self.dom.remove_node(target)
    }

    pub fn assert_checked(&self, selector: &str, expected: bool) -> Result<()> {
        let target = self.select_one(selector)?;
        let actual = self.dom.checked(target)?;
        if actual != expected {
            return Err(Error::AssertionFailed {
                selector: selector.to_string(),
                expected: expected.to_string(),
                actual: actual.to_string(),
                dom_snippet: self.node_snippet(target),
            });
        }
        Ok(())
    }

    pub fn assert_display(&self, selector: &str, expected: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        let actual = self.dom.style_get(target, "display")?;
        if actual != expected {
            return Err(Error::AssertionFailed {
                selector: selector.to_string(),
                expected: expected.to_string(),
                actual,
                dom_snippet: self.node_snippet(target),
            });
        }
        Ok(())
    }

    pub fn assert_exists(&self, selector: &str) -> Result<()> {
        let _ = self.select_one(selector)?;
        Ok(())
    }

    pub fn dump_dom(&self, selector: &str) -> Result<String> {
        let target = self.select_one(selector)?;
        Ok(self.dom.dump_node(target))
    }

    pub fn enable_trace(&mut self, enabled: bool) {
        self.trace.enabled = enabled;
    }

    pub fn set_trace_stderr(&mut self, enabled: bool) {
        self.trace.to_stderr = enabled;
    }

    pub fn set_trace_log_limit(&mut self, max_entries: usize) -> Result<()> {
        if max_entries == 0 {
            return Err(Error::InvalidConfig(
                "set_trace_log_limit requires at least 1 entry".into(),
            ));
        }
        self.trace.log_limit = max_entries;
        while self.trace.logs.len() > self.trace.log_limit {
            self.trace.logs.pop_front();
        }
        Ok(())
    }

    pub fn take_trace_logs(&mut self) -> Vec<String> {
        self.trace.logs.drain(..).collect()
    }

    fn select_one(&self, selector: &str) -> Result<NodeId> {
        let id = parse_id_selector(selector)
            .ok_or_else(|| Error::UnsupportedSelector(selector.to_string()))?;
        self.dom
            .by_id(id)
            .ok_or_else(|| Error::ElementNotFound(id.to_string()))
    }

    fn node_snippet(&self, node_id: NodeId) -> String {
        truncate_chars(&self.dom.dump_node(node_id), 200)
    }

    fn trace_result(&mut self, op: &str, result: Result<()>) -> Result<()> {
        if self.trace.enabled {
            let line = match &result {
                Ok(()) => format!("[toggle] {op} {}", self.state_summary()),
                Err(err) => format!("[toggle] {op} failed: {err}"),
            };
            self.trace_line(line);
        }
        result
    }

    fn state_summary(&self) -> String {
        let config = self.toggles.config();
        let checked = |id: &str| {
            self.dom
                .by_id(id)
                .and_then(|node| self.dom.checked(node).ok())
                .map_or_else(|| "missing".to_string(), |value| value.to_string())
        };
        let display = self
            .dom
            .by_id(&config.output_id)
            .and_then(|node| self.dom.style_get(node, "display").ok())
            .map_or_else(|| "missing".to_string(), |value| format!("{value:?}"));
        let saved = self
            .visibility()
            .and_then(|state| state.saved_display.as_deref())
            .map_or_else(|| "unset".to_string(), |value| format!("{value:?}"));
        format!(
            "music={} debug={} output.display={display} saved={saved}",
            checked(&config.music_id),
            checked(&config.debug_id),
        )
    }

    fn trace_line(&mut self, line: String) {
        if self.trace.to_stderr {
            eprintln!("{line}");
        }
        if self.trace.logs.len() >= self.trace.log_limit {
            self.trace.logs.pop_front();
        }
        self.trace.logs.push_back(line);
    }
}

impl ElementRegistry for Page {
    type Handle = NodeId;

    fn resolve(&self, name: &str) -> Result<NodeId> {
        ElementRegistry::resolve(&self.dom, name)
    }

    fn checked(&self, handle: NodeId) -> Result<bool> {
        self.dom.checked(handle)
    }

    fn set_checked(&mut self, handle: NodeId, checked: bool) -> Result<()> {
        self.dom.set_checked(handle, checked)
    }

    fn inline_display(&self, handle: NodeId) -> Result<String> {
        self.dom.style_get(handle, "display")
    }

    fn set_inline_display(&mut self, handle: NodeId, value: &str) -> Result<()> {
        self.dom.style_set(handle, "display", value)
    }
}
