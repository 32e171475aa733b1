/// Access to the page that hosts the mapping script.
pub trait ScriptGateway {
    /// Whether the autocomplete capability is present in the page.
    fn capability_available(&self) -> bool;

    /// Add a script element that fetches `src`.
    ///
    /// The outcome is reported back asynchronously
    /// through [`crate::loader::ScriptLoader::settle`].
    fn inject(&mut self, src: &str) -> anyhow::Result<()>;

    /// Remove the injected script element (if any).
    fn remove(&mut self);
}
