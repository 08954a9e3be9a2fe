use serde::{Deserialize, Serialize};

/// A styled piece of inline content: either a text run or an image.
///
/// Serialises with a `"type"` tag (`"text"` / `"image"`) so renderers can
/// switch on the discriminant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Inline {
    Text(TextRun),
    Image(Image),
}

/// A run of characters sharing one set of style flags.
///
/// An empty `url` means the run is not part of a link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRun {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub code: bool,
    pub url: String,
}

impl TextRun {
    /// Creates an unstyled, unlinked run.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Returns true if both runs carry identical style flags and link target,
    /// i.e. they would render the same way and can be merged.
    #[must_use]
    pub fn same_style(&self, other: &TextRun) -> bool {
        self.bold == other.bold
            && self.italic == other.italic
            && self.strikethrough == other.strikethrough
            && self.code == other.code
            && self.url == other.url
    }
}

/// An inline image with optional size hints from a `{width=.. height=..}` annotation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    pub alt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<CssUnit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<CssUnit>,
}

/// A CSS-style length: a number with a pixel or percent unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CssUnit {
    pub unit: CssUnitType,
    pub value: f64,
}

impl CssUnit {
    pub fn pixels(value: f64) -> Self {
        Self {
            unit: CssUnitType::Pixel,
            value,
        }
    }

    pub fn percent(value: f64) -> Self {
        Self {
            unit: CssUnitType::Percent,
            value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CssUnitType {
    Pixel,
    Percent,
}
