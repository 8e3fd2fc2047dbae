//! Typed Block Kit documents for the Slack messaging provider.
//!
//! Blocks and block elements are closed enums over concrete structs. Every
//! struct carries a fixed `type` discriminator, optional fields are omitted
//! from the JSON when unset, and decoding dispatches on `type` before
//! looking at anything else. Sending the resulting JSON is left to the
//! provider's transport.

pub mod blocks;
pub mod bounded;
pub mod discriminator;
pub mod document;
pub mod elements;
pub mod errors;
pub mod options;
pub mod policy;
pub mod select;
pub mod text;

pub use blocks::{ActionsBlock, Block, ContextBlock, DividerBlock, ImageBlock, SectionBlock};
pub use bounded::{
    Bounded, MAX_ACTIONS_ELEMENTS, MAX_CONTEXT_ELEMENTS, MAX_OVERFLOW_OPTIONS, MAX_SELECT_OPTIONS,
};
pub use discriminator::{BlockType, ElementType};
pub use document::Document;
pub use elements::{
    BlockElement, ButtonElement, DatePickerElement, ImageElement, OverflowElement,
    SectionAccessory, UserElement,
};
pub use errors::{BlockKitError, VariantFamily};
pub use options::{Confirmation, OptionGroup, SelectOption};
pub use policy::{DocumentPolicy, PLATFORM_MAX_BLOCKS};
pub use select::{
    ChannelsSelectElement, ConversationsSelectElement, ExternalSelectElement, SelectBase,
    StaticSelectElement, UsersSelectElement,
};
pub use text::{MarkdownText, ParseMode, PlainText, TextObject};
