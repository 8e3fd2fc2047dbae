//! Fixed `type` vocabularies and the dispatch helpers built on them.
//!
//! Each vocabulary entry also produces a single-variant marker enum. Concrete
//! structs hold their marker in a private `type` field, so a value can only
//! ever serialize the discriminator it was built with, and decoding a
//! mismatched `type` into a concrete struct fails.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::errors::{BlockKitError, VariantFamily};

macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $vocab:ident, $family:expr,
        { $($variant:ident => $wire:literal as $marker:ident),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $vocab {
            $(#[serde(rename = $wire)] $variant,)+
        }

        impl $vocab {
            pub const ALL: &'static [$vocab] = &[$($vocab::$variant,)+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($vocab::$variant => $wire,)+
                }
            }

            pub fn parse(raw: &str) -> Result<Self, BlockKitError> {
                match raw {
                    $($wire => Ok($vocab::$variant),)+
                    other => Err(BlockKitError::UnknownVariant {
                        family: $family,
                        discriminator: other.to_string(),
                    }),
                }
            }

            /// Reads and parses the `type` field of an encoded value.
            pub fn of(value: &Value) -> Result<Self, BlockKitError> {
                Self::parse(discriminator(value, $family)?)
            }
        }

        impl fmt::Display for $vocab {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        $(
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
            pub(crate) enum $marker {
                #[serde(rename = $wire)]
                Tag,
            }
        )+
    };
}

vocabulary! {
    /// Discriminators of top-level blocks.
    BlockType, VariantFamily::Block,
    {
        Divider => "divider" as DividerTag,
        Section => "section" as SectionTag,
        Actions => "actions" as ActionsTag,
        Image => "image" as ImageBlockTag,
        Context => "context" as ContextTag,
    }
}

vocabulary! {
    /// Discriminators of block elements, text objects included.
    ElementType, VariantFamily::Element,
    {
        Button => "button" as ButtonTag,
        DatePicker => "datepicker" as DatePickerTag,
        Overflow => "overflow" as OverflowTag,
        Image => "image" as ImageElementTag,
        PlainText => "plaintext" as PlainTextTag,
        Markdown => "mrkdwn" as MarkdownTag,
        User => "user" as UserTag,
        StaticSelect => "static_select" as StaticSelectTag,
        ExternalSelect => "external_select" as ExternalSelectTag,
        UsersSelect => "users_select" as UsersSelectTag,
        ConversationsSelect => "conversations_select" as ConversationsSelectTag,
        ChannelsSelect => "channels_select" as ChannelsSelectTag,
    }
}

pub(crate) fn discriminator(value: &Value, family: VariantFamily) -> Result<&str, BlockKitError> {
    value
        .get("type")
        .and_then(Value::as_str)
        .ok_or(BlockKitError::MissingDiscriminator { family })
}

pub(crate) fn decode<T: DeserializeOwned>(value: Value) -> Result<T, BlockKitError> {
    serde_json::from_value(value).map_err(BlockKitError::from)
}
