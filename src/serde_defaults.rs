/// Serde helper for `#[serde(default = "crate::serde_defaults::default_true")]`.
///
/// Prefer the fully-qualified path in serde attributes so individual modules do
/// not need to import this symbol.
pub(crate) const fn default_true() -> bool {
    true
}
