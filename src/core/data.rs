//! Shared position types for resource file diagnostics.

/// Position in a resource file, 1-indexed for display.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ResourceLocation {
    /// Path to the resource file (e.g., "lib/l10n/en.arb").
    pub file_path: String,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub col: usize,
}

impl ResourceLocation {
    pub fn new(file_path: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            col,
        }
    }

    /// Create with default column (1).
    pub fn with_line(file_path: impl Into<String>, line: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            col: 1,
        }
    }
}

/// Position plus the key and translated value at that location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceContext {
    pub location: ResourceLocation,
    /// The localization key (e.g., "welcomeMessage").
    pub key: String,
    /// The translated value.
    pub value: String,
}

impl ResourceContext {
    pub fn new(
        location: ResourceLocation,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            location,
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn file_path(&self) -> &str {
        &self.location.file_path
    }

    pub fn line(&self) -> usize {
        self.location.line
    }

    pub fn col(&self) -> usize {
        self.location.col
    }
}
