use std::fmt;

use thiserror::Error;

/// Vocabulary a discriminator was looked up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantFamily {
    Block,
    Element,
}

impl fmt::Display for VariantFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariantFamily::Block => f.write_str("block"),
            VariantFamily::Element => f.write_str("block element"),
        }
    }
}

/// Errors raised while building, decoding or validating Block Kit documents.
///
/// All of them point at a caller mistake; none are worth retrying.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BlockKitError {
    #[error("{container} accepts at most {limit} items, got {actual}")]
    CardinalityExceeded {
        container: &'static str,
        limit: usize,
        actual: usize,
    },
    #[error("unknown {family} type `{discriminator}`")]
    UnknownVariant {
        family: VariantFamily,
        discriminator: String,
    },
    #[error("{family} is missing its `type` discriminator")]
    MissingDiscriminator { family: VariantFamily },
    #[error("`{discriminator}` is not allowed as {slot}")]
    Misplaced {
        slot: &'static str,
        discriminator: String,
    },
    #[error("duplicate block_id `{0}`")]
    DuplicateBlockId(String),
    #[error("document holds {actual} blocks, limit is {limit}")]
    TooManyBlocks { limit: usize, actual: usize },
    #[error("unsupported schema version: expected {expected}, got {got}")]
    UnsupportedSchemaVersion { expected: u32, got: u32 },
    #[error("decode error: {0}")]
    Decode(String),
}

impl BlockKitError {
    pub fn decode(msg: impl Into<String>) -> Self {
        BlockKitError::Decode(msg.into())
    }
}

impl From<serde_json::Error> for BlockKitError {
    fn from(value: serde_json::Error) -> Self {
        BlockKitError::Decode(value.to_string())
    }
}
