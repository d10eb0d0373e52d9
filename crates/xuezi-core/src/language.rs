/// Language-specific folding of the romanization field for search
pub trait RomanizationFolder: Send + Sync {
    /// Language identifier (ISO 639-1 code: "zh", "ja", ...)
    fn language_code(&self) -> &str;

    /// Fold text to its comparison form.
    /// Must be idempotent and must never fail on unknown characters.
    fn fold(&self, text: &str) -> String;
}

/// Folder that leaves text untouched
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityFolder;

impl RomanizationFolder for IdentityFolder {
    fn language_code(&self) -> &str {
        "und"
    }

    fn fold(&self, text: &str) -> String {
        text.to_string()
    }
}
