use camino::{Utf8Path, Utf8PathBuf};

/// Text of one policy module, together with the path it was read from.
///
/// The text is opaque here; only the evaluation engine interprets it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PolicySource {
    origin: Utf8PathBuf,
    text: String,
}

impl PolicySource {
    pub fn new(origin: impl Into<Utf8PathBuf>, text: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            text: text.into(),
        }
    }

    /// Path the module was loaded from; engines use it as the module name.
    pub fn origin(&self) -> &Utf8Path {
        &self.origin
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}
