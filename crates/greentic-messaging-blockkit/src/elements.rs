use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::bounded::{Bounded, MAX_OVERFLOW_OPTIONS};
use crate::discriminator::{
    ButtonTag, DatePickerTag, ElementType, ImageElementTag, OverflowTag, UserTag, decode,
};
use crate::errors::BlockKitError;
use crate::options::{Confirmation, SelectOption};
use crate::select::{
    ChannelsSelectElement, ConversationsSelectElement, ExternalSelectElement,
    StaticSelectElement, UsersSelectElement,
};
use crate::text::{MarkdownText, PlainText, TextObject};

/// Interactive button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonElement {
    #[serde(rename = "type")]
    kind: ButtonTag,
    text: PlainText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    action_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    url: Option<String>,
}

impl ButtonElement {
    pub fn new(
        text: impl Into<PlainText>,
        action_id: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            kind: ButtonTag::Tag,
            text: text.into(),
            action_id: Some(action_id.into()),
            value: Some(value.into()),
            url: None,
        }
    }

    /// Makes the button open `url` in the user's browser as well.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn text(&self) -> &PlainText {
        &self.text
    }

    pub fn action_id(&self) -> Option<&str> {
        self.action_id.as_deref()
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }
}

/// Calendar picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatePickerElement {
    #[serde(rename = "type")]
    kind: DatePickerTag,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    action_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    initial_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    placeholder: Option<PlainText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    confirm: Option<Confirmation>,
}

impl DatePickerElement {
    pub fn new(action_id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: DatePickerTag::Tag,
            action_id: Some(action_id.into()),
            value: Some(value.into()),
            initial_date: None,
            placeholder: None,
            confirm: None,
        }
    }

    /// `YYYY-MM-DD`, passed through as given.
    pub fn with_initial_date(mut self, date: impl Into<String>) -> Self {
        self.initial_date = Some(date.into());
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<PlainText>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_confirm(mut self, confirm: Confirmation) -> Self {
        self.confirm = Some(confirm);
        self
    }

    pub fn action_id(&self) -> Option<&str> {
        self.action_id.as_deref()
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn initial_date(&self) -> Option<&str> {
        self.initial_date.as_deref()
    }

    pub fn placeholder(&self) -> Option<&PlainText> {
        self.placeholder.as_ref()
    }

    pub fn confirm(&self) -> Option<&Confirmation> {
        self.confirm.as_ref()
    }
}

/// Compact "more" menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverflowElement {
    #[serde(rename = "type")]
    kind: OverflowTag,
    action_id: String,
    options: Bounded<SelectOption, MAX_OVERFLOW_OPTIONS>,
}

impl OverflowElement {
    pub fn new(
        action_id: impl Into<String>,
        options: Vec<SelectOption>,
    ) -> Result<Self, BlockKitError> {
        Ok(Self {
            kind: OverflowTag::Tag,
            action_id: action_id.into(),
            options: Bounded::new(options, "overflow menu")?,
        })
    }

    pub fn action_id(&self) -> &str {
        &self.action_id
    }

    pub fn options(&self) -> &[SelectOption] {
        self.options.as_slice()
    }
}

/// Small image shown inline with text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageElement {
    #[serde(rename = "type")]
    kind: ImageElementTag,
    image_url: String,
    alt_text: String,
}

impl ImageElement {
    pub fn new(image_url: impl Into<String>, alt_text: impl Into<String>) -> Self {
        Self {
            kind: ImageElementTag::Tag,
            image_url: image_url.into(),
            alt_text: alt_text.into(),
        }
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn alt_text(&self) -> &str {
        &self.alt_text
    }
}

/// Reference to a workspace member, rendered as their name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserElement {
    #[serde(rename = "type")]
    kind: UserTag,
    user_id: String,
}

impl UserElement {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            kind: UserTag::Tag,
            user_id: user_id.into(),
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }
}

/// Every element kind an actions or context block can hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum BlockElement {
    Button(ButtonElement),
    DatePicker(DatePickerElement),
    Overflow(OverflowElement),
    Image(ImageElement),
    PlainText(PlainText),
    Markdown(MarkdownText),
    User(UserElement),
    StaticSelect(StaticSelectElement),
    ExternalSelect(ExternalSelectElement),
    UsersSelect(UsersSelectElement),
    ConversationsSelect(ConversationsSelectElement),
    ChannelsSelect(ChannelsSelectElement),
}

impl BlockElement {
    pub fn element_type(&self) -> ElementType {
        match self {
            BlockElement::Button(_) => ElementType::Button,
            BlockElement::DatePicker(_) => ElementType::DatePicker,
            BlockElement::Overflow(_) => ElementType::Overflow,
            BlockElement::Image(_) => ElementType::Image,
            BlockElement::PlainText(_) => ElementType::PlainText,
            BlockElement::Markdown(_) => ElementType::Markdown,
            BlockElement::User(_) => ElementType::User,
            BlockElement::StaticSelect(_) => ElementType::StaticSelect,
            BlockElement::ExternalSelect(_) => ElementType::ExternalSelect,
            BlockElement::UsersSelect(_) => ElementType::UsersSelect,
            BlockElement::ConversationsSelect(_) => ElementType::ConversationsSelect,
            BlockElement::ChannelsSelect(_) => ElementType::ChannelsSelect,
        }
    }

    /// Decodes an element, choosing the shape from its `type` alone.
    pub fn from_value(value: Value) -> Result<Self, BlockKitError> {
        let element = match ElementType::of(&value)? {
            ElementType::Button => BlockElement::Button(decode(value)?),
            ElementType::DatePicker => BlockElement::DatePicker(decode(value)?),
            ElementType::Overflow => BlockElement::Overflow(decode(value)?),
            ElementType::Image => BlockElement::Image(decode(value)?),
            ElementType::PlainText => BlockElement::PlainText(decode(value)?),
            ElementType::Markdown => BlockElement::Markdown(decode(value)?),
            ElementType::User => BlockElement::User(decode(value)?),
            ElementType::StaticSelect => BlockElement::StaticSelect(decode(value)?),
            ElementType::ExternalSelect => BlockElement::ExternalSelect(decode(value)?),
            ElementType::UsersSelect => BlockElement::UsersSelect(decode(value)?),
            ElementType::ConversationsSelect => BlockElement::ConversationsSelect(decode(value)?),
            ElementType::ChannelsSelect => BlockElement::ChannelsSelect(decode(value)?),
        };
        Ok(element)
    }
}

impl<'de> Deserialize<'de> for BlockElement {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        BlockElement::from_value(value).map_err(D::Error::custom)
    }
}

impl From<TextObject> for BlockElement {
    fn from(value: TextObject) -> Self {
        match value {
            TextObject::Plain(text) => BlockElement::PlainText(text),
            TextObject::Markdown(text) => BlockElement::Markdown(text),
        }
    }
}

impl From<SectionAccessory> for BlockElement {
    fn from(value: SectionAccessory) -> Self {
        match value {
            SectionAccessory::Button(el) => BlockElement::Button(el),
            SectionAccessory::DatePicker(el) => BlockElement::DatePicker(el),
            SectionAccessory::Overflow(el) => BlockElement::Overflow(el),
            SectionAccessory::Image(el) => BlockElement::Image(el),
            SectionAccessory::StaticSelect(el) => BlockElement::StaticSelect(el),
            SectionAccessory::ExternalSelect(el) => BlockElement::ExternalSelect(el),
            SectionAccessory::UsersSelect(el) => BlockElement::UsersSelect(el),
            SectionAccessory::ConversationsSelect(el) => BlockElement::ConversationsSelect(el),
            SectionAccessory::ChannelsSelect(el) => BlockElement::ChannelsSelect(el),
        }
    }
}

/// Element kinds that may sit in a section block's accessory slot.
///
/// Only those kinds convert into an accessory, so a section cannot be built
/// with anything else:
///
/// ```compile_fail
/// use greentic_messaging_blockkit::{SectionAccessory, UserElement};
///
/// let accessory: SectionAccessory = UserElement::new("U123").into();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SectionAccessory {
    Button(ButtonElement),
    DatePicker(DatePickerElement),
    Overflow(OverflowElement),
    Image(ImageElement),
    StaticSelect(StaticSelectElement),
    ExternalSelect(ExternalSelectElement),
    UsersSelect(UsersSelectElement),
    ConversationsSelect(ConversationsSelectElement),
    ChannelsSelect(ChannelsSelectElement),
}

impl SectionAccessory {
    pub fn element_type(&self) -> ElementType {
        match self {
            SectionAccessory::Button(_) => ElementType::Button,
            SectionAccessory::DatePicker(_) => ElementType::DatePicker,
            SectionAccessory::Overflow(_) => ElementType::Overflow,
            SectionAccessory::Image(_) => ElementType::Image,
            SectionAccessory::StaticSelect(_) => ElementType::StaticSelect,
            SectionAccessory::ExternalSelect(_) => ElementType::ExternalSelect,
            SectionAccessory::UsersSelect(_) => ElementType::UsersSelect,
            SectionAccessory::ConversationsSelect(_) => ElementType::ConversationsSelect,
            SectionAccessory::ChannelsSelect(_) => ElementType::ChannelsSelect,
        }
    }

    pub fn from_value(value: Value) -> Result<Self, BlockKitError> {
        let accessory = match BlockElement::from_value(value)? {
            BlockElement::Button(el) => SectionAccessory::Button(el),
            BlockElement::DatePicker(el) => SectionAccessory::DatePicker(el),
            BlockElement::Overflow(el) => SectionAccessory::Overflow(el),
            BlockElement::Image(el) => SectionAccessory::Image(el),
            BlockElement::StaticSelect(el) => SectionAccessory::StaticSelect(el),
            BlockElement::ExternalSelect(el) => SectionAccessory::ExternalSelect(el),
            BlockElement::UsersSelect(el) => SectionAccessory::UsersSelect(el),
            BlockElement::ConversationsSelect(el) => SectionAccessory::ConversationsSelect(el),
            BlockElement::ChannelsSelect(el) => SectionAccessory::ChannelsSelect(el),
            other @ (BlockElement::PlainText(_)
            | BlockElement::Markdown(_)
            | BlockElement::User(_)) => {
                return Err(BlockKitError::Misplaced {
                    slot: "section accessory",
                    discriminator: other.element_type().as_str().to_string(),
                });
            }
        };
        Ok(accessory)
    }
}

impl<'de> Deserialize<'de> for SectionAccessory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        SectionAccessory::from_value(value).map_err(D::Error::custom)
    }
}

macro_rules! element_conversions {
    ($($variant:ident($element:ty)),+ $(,)?) => {
        $(
            impl From<$element> for BlockElement {
                fn from(value: $element) -> Self {
                    BlockElement::$variant(value)
                }
            }
        )+
    };
}

macro_rules! accessory_conversions {
    ($($variant:ident($element:ty)),+ $(,)?) => {
        $(
            impl From<$element> for SectionAccessory {
                fn from(value: $element) -> Self {
                    SectionAccessory::$variant(value)
                }
            }
        )+
    };
}

element_conversions!(
    Button(ButtonElement),
    DatePicker(DatePickerElement),
    Overflow(OverflowElement),
    Image(ImageElement),
    PlainText(PlainText),
    Markdown(MarkdownText),
    User(UserElement),
    StaticSelect(StaticSelectElement),
    ExternalSelect(ExternalSelectElement),
    UsersSelect(UsersSelectElement),
    ConversationsSelect(ConversationsSelectElement),
    ChannelsSelect(ChannelsSelectElement),
);

accessory_conversions!(
    Button(ButtonElement),
    DatePicker(DatePickerElement),
    Overflow(OverflowElement),
    Image(ImageElement),
    StaticSelect(StaticSelectElement),
    ExternalSelect(ExternalSelectElement),
    UsersSelect(UsersSelectElement),
    ConversationsSelect(ConversationsSelectElement),
    ChannelsSelect(ChannelsSelectElement),
);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn button_wire_shape_without_url() {
        let button = ButtonElement::new("Click", "act1", "val1");
        let value = serde_json::to_value(&button).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "button",
                "text": {"type": "plaintext", "text": "Click", "emoji": true},
                "action_id": "act1",
                "value": "val1"
            })
        );
        assert!(value.get("url").is_none());
    }

    #[test]
    fn button_url_is_emitted_when_set() {
        let button = ButtonElement::new("Docs", "docs", "open").with_url("https://example.com");
        let value = serde_json::to_value(&button).unwrap();
        assert_eq!(value["url"], "https://example.com");
    }

    #[test]
    fn overflow_rejects_eleven_options() {
        let options = (0..11)
            .map(|idx| SelectOption::new(format!("entry {idx}")))
            .collect();
        let err = OverflowElement::new("more", options).unwrap_err();
        assert_eq!(
            err,
            BlockKitError::CardinalityExceeded {
                container: "overflow menu",
                limit: 10,
                actual: 11,
            }
        );
    }

    #[test]
    fn overflow_always_emits_action_id_and_options() {
        let overflow = OverflowElement::new("more", Vec::new()).expect("empty fits");
        assert_eq!(
            serde_json::to_value(&overflow).unwrap(),
            json!({"type": "overflow", "action_id": "more", "options": []})
        );
    }

    #[test]
    fn datepicker_omits_unset_fields() {
        let picker = DatePickerElement::new("due", "due_date");
        assert_eq!(
            serde_json::to_value(&picker).unwrap(),
            json!({"type": "datepicker", "action_id": "due", "value": "due_date"})
        );
    }

    #[test]
    fn element_dispatch_picks_variant_from_type() {
        let element = BlockElement::from_value(json!({"type": "user", "user_id": "U1"}))
            .expect("user element");
        assert_eq!(element, BlockElement::User(UserElement::new("U1")));
        assert_eq!(element.element_type(), ElementType::User);
    }

    #[test]
    fn accessory_rejects_user_reference() {
        let err = SectionAccessory::from_value(json!({"type": "user", "user_id": "U1"}))
            .unwrap_err();
        assert_eq!(
            err,
            BlockKitError::Misplaced {
                slot: "section accessory",
                discriminator: "user".into(),
            }
        );
    }

    #[test]
    fn every_accessory_is_an_element() {
        let accessory = SectionAccessory::from(ImageElement::new("https://x/y.png", "y"));
        assert_eq!(accessory.element_type(), ElementType::Image);
        assert_eq!(
            BlockElement::from(accessory),
            BlockElement::Image(ImageElement::new("https://x/y.png", "y"))
        );
    }
}
