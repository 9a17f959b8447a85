use super::*;

/// Name-to-element resolution for a host page.
///
/// Handles are looked up again on every adapter call, so a host may replace
/// or remove elements between calls. Reads and writes through a resolved
/// handle are expected to succeed; hosts that can still fail return an error
/// and the adapter propagates it unchanged.
pub trait ElementRegistry {
    type Handle: Copy;

    /// Fails with [`Error::ElementNotFound`] when `name` is not present.
    fn resolve(&self, name: &str) -> Result<Self::Handle>;

    fn checked(&self, handle: Self::Handle) -> Result<bool>;

    fn set_checked(&mut self, handle: Self::Handle, checked: bool) -> Result<()>;

    /// Inline `display` value, empty when the element has none.
    fn inline_display(&self, handle: Self::Handle) -> Result<String>;

    /// An empty `value` removes the inline declaration.
    fn set_inline_display(&mut self, handle: Self::Handle, value: &str) -> Result<()>;
}
