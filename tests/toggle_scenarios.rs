use page_toggles::{Error, HidePolicy, Page, Result, ToggleConfig, VisibilityState};

const DEBUG_ON_BLOCK_HTML: &str = r#"
    <input id="music" type="checkbox">
    <input id="debug" type="checkbox" checked>
    <div id="output" style="display: block"></div>
    "#;

fn page_with_policy(html: &str, policy: HidePolicy) -> Result<Page> {
    Page::from_html_with_config(html, ToggleConfig::default().with_hide_policy(policy))
}

#[test]
fn disabling_debug_hides_output_and_saves_prior_display() -> Result<()> {
    let mut page = Page::from_html(DEBUG_ON_BLOCK_HTML)?;
    page.toggle_debug()?;

    page.assert_checked("#debug", false)?;
    page.assert_display("#output", "none")?;
    assert_eq!(
        page.visibility().and_then(|state| state.saved_display.as_deref()),
        Some("block")
    );
    Ok(())
}

#[test]
fn enabling_debug_again_restores_saved_display() -> Result<()> {
    let mut page = Page::from_html(DEBUG_ON_BLOCK_HTML)?;
    page.toggle_debug()?;
    page.toggle_debug()?;

    page.assert_checked("#debug", true)?;
    page.assert_display("#output", "block")?;
    Ok(())
}

#[test]
fn repeated_refresh_while_hidden_overwrites_saved_display() -> Result<()> {
    let mut page = Page::from_html(DEBUG_ON_BLOCK_HTML)?;
    page.toggle_debug()?;
    page.refresh_debug_visibility()?;

    assert_eq!(
        page.visibility(),
        Some(&VisibilityState {
            hidden: true,
            saved_display: Some("none".into()),
        })
    );

    page.toggle_debug()?;
    page.assert_display("#output", "none")?;
    Ok(())
}

#[test]
fn preserve_original_policy_survives_repeated_refresh() -> Result<()> {
    let mut page = page_with_policy(DEBUG_ON_BLOCK_HTML, HidePolicy::PreserveOriginal)?;
    page.toggle_debug()?;
    page.refresh_debug_visibility()?;
    page.refresh_debug_visibility()?;

    assert_eq!(
        page.visibility().and_then(|state| state.saved_display.as_deref()),
        Some("block")
    );

    page.toggle_debug()?;
    page.assert_display("#output", "block")?;
    Ok(())
}

#[test]
fn preserve_original_recaptures_when_host_reshows_output() -> Result<()> {
    let mut page = page_with_policy(DEBUG_ON_BLOCK_HTML, HidePolicy::PreserveOriginal)?;
    page.toggle_debug()?;
    page.set_style("#output", "display", "flex")?;
    page.refresh_debug_visibility()?;
    page.assert_display("#output", "none")?;

    page.toggle_debug()?;
    page.assert_display("#output", "flex")?;
    Ok(())
}

#[test]
fn markup_hidden_output_is_captured_as_is_by_both_policies() -> Result<()> {
    let html = r#"
        <input id="debug" type="checkbox">
        <div id="output" style="display:none"></div>
        "#;
    for policy in [HidePolicy::Compat, HidePolicy::PreserveOriginal] {
        let mut page = page_with_policy(html, policy)?;
        page.refresh_debug_visibility()?;
        assert_eq!(
            page.visibility().and_then(|state| state.saved_display.as_deref()),
            Some("none"),
            "policy {policy:?}"
        );
        page.toggle_debug()?;
        page.assert_display("#output", "none")?;
    }
    Ok(())
}

#[test]
fn page_load_with_debug_checked_leaves_display_untouched() -> Result<()> {
    let html = r#"
        <input id="debug" type="checkbox" checked>
        <span id="output" style="display: inline"></span>
        "#;
    let mut page = Page::from_html(html)?;
    page.on_page_load()?;

    page.assert_display("#output", "inline")?;
    assert_eq!(page.visibility(), None);
    Ok(())
}

#[test]
fn enabling_without_prior_hide_keeps_host_display() -> Result<()> {
    let mut page = Page::from_html(DEBUG_ON_BLOCK_HTML)?;
    page.set_style("#output", "display", "grid")?;
    page.refresh_debug_visibility()?;
    page.assert_display("#output", "grid")?;
    Ok(())
}

#[test]
fn visibility_cycles_indefinitely() -> Result<()> {
    let mut page = Page::from_html(DEBUG_ON_BLOCK_HTML)?;
    for _ in 0..10 {
        page.toggle_debug()?;
        page.assert_display("#output", "none")?;
        page.toggle_debug()?;
        page.assert_display("#output", "block")?;
    }
    Ok(())
}

#[test]
fn missing_music_fails_without_touching_other_elements() -> Result<()> {
    let mut page = Page::from_html(DEBUG_ON_BLOCK_HTML)?;
    page.remove_element("#music")?;

    assert_eq!(page.toggle_music(), Err(Error::ElementNotFound("music".into())));
    assert_eq!(
        page.is_music_enabled(),
        Err(Error::ElementNotFound("music".into()))
    );
    page.assert_checked("#debug", true)?;
    page.assert_display("#output", "block")?;
    Ok(())
}

#[test]
fn missing_output_fails_toggle_debug_before_flipping() -> Result<()> {
    let mut page = Page::from_html(DEBUG_ON_BLOCK_HTML)?;
    page.remove_element("#output")?;

    assert_eq!(
        page.toggle_debug(),
        Err(Error::ElementNotFound("output".into()))
    );
    page.assert_checked("#debug", true)?;
    page.assert_checked("#music", false)?;

    assert_eq!(
        page.refresh_debug_visibility(),
        Err(Error::ElementNotFound("output".into()))
    );
    assert_eq!(
        page.on_page_load(),
        Err(Error::ElementNotFound("output".into()))
    );
    assert!(page.is_debug_enabled()?);
    Ok(())
}

#[test]
fn missing_debug_fails_every_debug_operation() -> Result<()> {
    let mut page = Page::from_html(DEBUG_ON_BLOCK_HTML)?;
    page.remove_element("#debug")?;

    let missing = Err(Error::ElementNotFound("debug".into()));
    assert_eq!(page.toggle_debug(), missing);
    assert_eq!(page.refresh_debug_visibility(), missing);
    assert_eq!(page.on_page_load(), missing);
    assert_eq!(
        page.is_debug_enabled(),
        Err(Error::ElementNotFound("debug".into()))
    );
    page.assert_display("#output", "block")?;
    assert!(!page.is_music_enabled()?);
    Ok(())
}

#[test]
fn element_not_found_message_names_the_element() {
    let err = Error::ElementNotFound("output".into());
    assert_eq!(err.to_string(), "element not found: output");
}
