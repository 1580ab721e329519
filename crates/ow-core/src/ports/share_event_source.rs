/// Read-only view of a share event.
///
/// Locators are handed over in their wire form. Parsing them is left to the
/// normalizer, which only parses the payload source it selects.
pub trait ShareEventSource {
    /// Raw triggering action, e.g. `android.intent.action.SEND`.
    fn action(&self) -> Option<&str>;

    /// Multi-item payload in stored order. `Some(&[])` is a payload that is
    /// present but empty, which is not the same as `None`.
    fn clip_items(&self) -> Option<&[Option<String>]>;

    fn stream_locator(&self) -> Option<&str>;

    fn data_locator(&self) -> Option<&str>;

    /// Boolean extra under `key`; `None` when absent or not a boolean.
    fn bool_extra(&self, key: &str) -> Option<bool>;
}
