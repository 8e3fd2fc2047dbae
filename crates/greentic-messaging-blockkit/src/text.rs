use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::discriminator::{ElementType, MarkdownTag, PlainTextTag, decode};
use crate::errors::BlockKitError;

/// Plain text with a flag telling the platform whether to render emoji shortcodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlainText {
    #[serde(rename = "type")]
    kind: PlainTextTag,
    text: String,
    emoji: bool,
}

impl PlainText {
    pub fn new(text: impl Into<String>, render_emoji: bool) -> Self {
        Self {
            kind: PlainTextTag::Tag,
            text: text.into(),
            emoji: render_emoji,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn render_emoji(&self) -> bool {
        self.emoji
    }
}

/// Emoji rendering is on for text built from a bare string.
impl From<&str> for PlainText {
    fn from(value: &str) -> Self {
        PlainText::new(value, true)
    }
}

impl From<String> for PlainText {
    fn from(value: String) -> Self {
        PlainText::new(value, true)
    }
}

/// How the platform treats markup in a [`MarkdownText`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
    Full,
    None,
}

impl ParseMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ParseMode::Full => "full",
            ParseMode::None => "none",
        }
    }
}

impl From<bool> for ParseMode {
    fn from(should_parse: bool) -> Self {
        if should_parse {
            ParseMode::Full
        } else {
            ParseMode::None
        }
    }
}

/// Markup text (`mrkdwn` on the wire).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkdownText {
    #[serde(rename = "type")]
    kind: MarkdownTag,
    text: String,
    parse: ParseMode,
}

impl MarkdownText {
    pub fn new(text: impl Into<String>, should_parse: bool) -> Self {
        Self::with_parse_mode(text, ParseMode::from(should_parse))
    }

    pub fn with_parse_mode(text: impl Into<String>, parse: ParseMode) -> Self {
        Self {
            kind: MarkdownTag::Tag,
            text: text.into(),
            parse,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn parse_mode(&self) -> ParseMode {
        self.parse
    }
}

/// Any text object accepted where the platform expects formatted or plain text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TextObject {
    Plain(PlainText),
    Markdown(MarkdownText),
}

impl TextObject {
    /// The literal text, untouched.
    pub fn text(&self) -> &str {
        match self {
            TextObject::Plain(text) => text.text(),
            TextObject::Markdown(text) => text.text(),
        }
    }

    pub fn element_type(&self) -> ElementType {
        match self {
            TextObject::Plain(_) => ElementType::PlainText,
            TextObject::Markdown(_) => ElementType::Markdown,
        }
    }

    pub fn from_value(value: Value) -> Result<Self, BlockKitError> {
        match ElementType::of(&value)? {
            ElementType::PlainText => Ok(TextObject::Plain(decode(value)?)),
            ElementType::Markdown => Ok(TextObject::Markdown(decode(value)?)),
            other => Err(BlockKitError::Misplaced {
                slot: "text object",
                discriminator: other.as_str().to_string(),
            }),
        }
    }
}

impl From<PlainText> for TextObject {
    fn from(value: PlainText) -> Self {
        TextObject::Plain(value)
    }
}

impl From<MarkdownText> for TextObject {
    fn from(value: MarkdownText) -> Self {
        TextObject::Markdown(value)
    }
}

impl From<&str> for TextObject {
    fn from(value: &str) -> Self {
        TextObject::Plain(PlainText::from(value))
    }
}

impl<'de> Deserialize<'de> for TextObject {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        TextObject::from_value(value).map_err(D::Error::custom)
    }
}
