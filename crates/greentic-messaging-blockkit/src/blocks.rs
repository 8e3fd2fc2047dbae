use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::bounded::{Bounded, MAX_ACTIONS_ELEMENTS, MAX_CONTEXT_ELEMENTS};
use crate::discriminator::{
    ActionsTag, BlockType, ContextTag, DividerTag, ElementType, ImageBlockTag, SectionTag, decode,
};
use crate::elements::{BlockElement, SectionAccessory};
use crate::errors::BlockKitError;
use crate::text::{PlainText, TextObject};

/// Horizontal rule between blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DividerBlock {
    #[serde(rename = "type")]
    kind: DividerTag,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    block_id: Option<String>,
}

impl DividerBlock {
    pub fn new(block_id: Option<String>) -> Self {
        Self {
            kind: DividerTag::Tag,
            block_id,
        }
    }

    pub fn block_id(&self) -> Option<&str> {
        self.block_id.as_deref()
    }
}

/// Text with an optional accessory element beside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionBlock {
    #[serde(rename = "type")]
    kind: SectionTag,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    block_id: Option<String>,
    text: TextObject,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    accessory: Option<SectionAccessory>,
}

impl SectionBlock {
    pub fn new(text: impl Into<TextObject>, block_id: Option<String>) -> Self {
        Self {
            kind: SectionTag::Tag,
            block_id,
            text: text.into(),
            accessory: None,
        }
    }

    /// Anonymous section holding emoji-rendering plain text.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self::new(PlainText::new(text, true), None)
    }

    pub fn with_accessory(
        text: impl Into<TextObject>,
        accessory: impl Into<SectionAccessory>,
        block_id: Option<String>,
    ) -> Self {
        Self {
            kind: SectionTag::Tag,
            block_id,
            text: text.into(),
            accessory: Some(accessory.into()),
        }
    }

    pub fn block_id(&self) -> Option<&str> {
        self.block_id.as_deref()
    }

    pub fn text(&self) -> &TextObject {
        &self.text
    }

    pub fn accessory(&self) -> Option<&SectionAccessory> {
        self.accessory.as_ref()
    }
}

/// Row of interactive elements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionsBlock {
    #[serde(rename = "type")]
    kind: ActionsTag,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    block_id: Option<String>,
    elements: Bounded<BlockElement, MAX_ACTIONS_ELEMENTS>,
}

impl ActionsBlock {
    pub fn new(
        elements: Vec<BlockElement>,
        block_id: Option<String>,
    ) -> Result<Self, BlockKitError> {
        Ok(Self {
            kind: ActionsTag::Tag,
            block_id,
            elements: Bounded::new(elements, "actions block")?,
        })
    }

    pub fn block_id(&self) -> Option<&str> {
        self.block_id.as_deref()
    }

    pub fn elements(&self) -> &[BlockElement] {
        self.elements.as_slice()
    }
}

/// Standalone image with a title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageBlock {
    #[serde(rename = "type")]
    kind: ImageBlockTag,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    block_id: Option<String>,
    image_url: String,
    alt_text: String,
    title: PlainText,
}

impl ImageBlock {
    pub fn new(
        image_url: impl Into<String>,
        alt_text: impl Into<String>,
        title: impl Into<PlainText>,
        block_id: Option<String>,
    ) -> Self {
        Self {
            kind: ImageBlockTag::Tag,
            block_id,
            image_url: image_url.into(),
            alt_text: alt_text.into(),
            title: title.into(),
        }
    }

    pub fn block_id(&self) -> Option<&str> {
        self.block_id.as_deref()
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn alt_text(&self) -> &str {
        &self.alt_text
    }

    pub fn title(&self) -> &PlainText {
        &self.title
    }
}

/// Small print: images, text and user references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextBlock {
    #[serde(rename = "type")]
    kind: ContextTag,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    block_id: Option<String>,
    elements: Bounded<BlockElement, MAX_CONTEXT_ELEMENTS>,
}

impl ContextBlock {
    pub fn new(
        elements: Vec<BlockElement>,
        block_id: Option<String>,
    ) -> Result<Self, BlockKitError> {
        Ok(Self {
            kind: ContextTag::Tag,
            block_id,
            elements: Bounded::new(elements, "context block")?,
        })
    }

    pub fn block_id(&self) -> Option<&str> {
        self.block_id.as_deref()
    }

    pub fn elements(&self) -> &[BlockElement] {
        self.elements.as_slice()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Block {
    Divider(DividerBlock),
    Section(SectionBlock),
    Actions(ActionsBlock),
    Image(ImageBlock),
    Context(ContextBlock),
}

impl Block {
    pub fn block_type(&self) -> BlockType {
        match self {
            Block::Divider(_) => BlockType::Divider,
            Block::Section(_) => BlockType::Section,
            Block::Actions(_) => BlockType::Actions,
            Block::Image(_) => BlockType::Image,
            Block::Context(_) => BlockType::Context,
        }
    }

    pub fn block_id(&self) -> Option<&str> {
        match self {
            Block::Divider(block) => block.block_id(),
            Block::Section(block) => block.block_id(),
            Block::Actions(block) => block.block_id(),
            Block::Image(block) => block.block_id(),
            Block::Context(block) => block.block_id(),
        }
    }

    /// Decodes a block, choosing the shape from its `type` alone.
    ///
    /// Every typed object nested under the block is an element or a text
    /// object, and their discriminators are checked first so an unknown kind
    /// at any depth surfaces as [`BlockKitError::UnknownVariant`] rather than
    /// a generic decode error.
    pub fn from_value(value: Value) -> Result<Self, BlockKitError> {
        let kind = BlockType::of(&value)?;
        check_nested(&value)?;
        let block = match kind {
            BlockType::Divider => Block::Divider(decode(value)?),
            BlockType::Section => Block::Section(decode(value)?),
            BlockType::Actions => Block::Actions(decode(value)?),
            BlockType::Image => Block::Image(decode(value)?),
            BlockType::Context => Block::Context(decode(value)?),
        };
        Ok(block)
    }
}

/// Walks everything below `value` and checks each `type` it finds.
fn check_nested(value: &Value) -> Result<(), BlockKitError> {
    let children: Vec<&Value> = match value {
        Value::Object(map) => map.values().collect(),
        Value::Array(items) => items.iter().collect(),
        _ => return Ok(()),
    };
    for child in children {
        if child.get("type").is_some() {
            ElementType::of(child)?;
        }
        check_nested(child)?;
    }
    Ok(())
}

impl<'de> Deserialize<'de> for Block {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Block::from_value(value).map_err(D::Error::custom)
    }
}

impl From<DividerBlock> for Block {
    fn from(value: DividerBlock) -> Self {
        Block::Divider(value)
    }
}

impl From<SectionBlock> for Block {
    fn from(value: SectionBlock) -> Self {
        Block::Section(value)
    }
}

impl From<ActionsBlock> for Block {
    fn from(value: ActionsBlock) -> Self {
        Block::Actions(value)
    }
}

impl From<ImageBlock> for Block {
    fn from(value: ImageBlock) -> Self {
        Block::Image(value)
    }
}

impl From<ContextBlock> for Block {
    fn from(value: ContextBlock) -> Self {
        Block::Context(value)
    }
}
