use serde::{Deserialize, Serialize};

use crate::bounded::{Bounded, MAX_SELECT_OPTIONS};
use crate::errors::BlockKitError;
use crate::text::{PlainText, TextObject};

/// A single entry of an overflow menu or select menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    text: PlainText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl SelectOption {
    pub fn new(text: impl Into<PlainText>) -> Self {
        Self {
            text: text.into(),
            value: None,
            url: None,
            description: None,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn text(&self) -> &PlainText {
        &self.text
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Options shown together under a label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionGroup {
    label: PlainText,
    options: Bounded<SelectOption, MAX_SELECT_OPTIONS>,
}

impl OptionGroup {
    pub fn new(
        label: impl Into<PlainText>,
        options: Vec<SelectOption>,
    ) -> Result<Self, BlockKitError> {
        Ok(Self {
            label: label.into(),
            options: Bounded::new(options, "option group")?,
        })
    }

    pub fn label(&self) -> &PlainText {
        &self.label
    }

    pub fn options(&self) -> &[SelectOption] {
        self.options.as_slice()
    }
}

/// Dialog the platform shows before an action fires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confirmation {
    text: TextObject,
    title: PlainText,
    confirm: PlainText,
    deny: PlainText,
}

impl Confirmation {
    pub fn new(
        text: impl Into<TextObject>,
        title: impl Into<PlainText>,
        confirm: impl Into<PlainText>,
        deny: impl Into<PlainText>,
    ) -> Self {
        Self {
            text: text.into(),
            title: title.into(),
            confirm: confirm.into(),
            deny: deny.into(),
        }
    }

    pub fn text(&self) -> &TextObject {
        &self.text
    }

    pub fn title(&self) -> &PlainText {
        &self.title
    }

    pub fn confirm(&self) -> &PlainText {
        &self.confirm
    }

    pub fn deny(&self) -> &PlainText {
        &self.deny
    }
}
