use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;

use crate::blocks::Block;
use crate::errors::BlockKitError;
use crate::policy::DocumentPolicy;

/// Ordered blocks making up one message, ready for a transport to send.
///
/// On the wire a document is the bare JSON array of its blocks, which is
/// what goes under `blocks` in a `chat.postMessage` payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    blocks: Vec<Block>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_block(mut self, block: impl Into<Block>) -> Self {
        self.blocks.push(block.into());
        self
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn to_value(&self) -> Result<Value, BlockKitError> {
        let value = serde_json::to_value(self)?;
        tracing::debug!(blocks = self.blocks.len(), "encoded block kit document");
        Ok(value)
    }

    pub fn to_json_string(&self) -> Result<String, BlockKitError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decodes a JSON array of blocks, dispatching every block on its `type`.
    pub fn from_value(value: Value) -> Result<Self, BlockKitError> {
        let Value::Array(items) = value else {
            return Err(BlockKitError::decode("document must be a JSON array of blocks"));
        };
        let blocks = items
            .into_iter()
            .enumerate()
            .map(|(idx, item)| {
                Block::from_value(item).inspect_err(|err| {
                    tracing::debug!(index = idx, error = %err, "rejected block");
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { blocks })
    }

    pub fn from_json_str(json: &str) -> Result<Self, BlockKitError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Applies the opt-in cross-block checks of `policy`.
    pub fn validate(&self, policy: &DocumentPolicy) -> Result<(), BlockKitError> {
        policy.validate()?;
        if let Some(limit) = policy.max_blocks
            && self.blocks.len() > limit
        {
            return Err(BlockKitError::TooManyBlocks {
                limit,
                actual: self.blocks.len(),
            });
        }
        if policy.unique_block_ids {
            let mut seen = HashSet::new();
            for id in self.blocks.iter().filter_map(Block::block_id) {
                if !seen.insert(id) {
                    return Err(BlockKitError::DuplicateBlockId(id.to_string()));
                }
            }
        }
        Ok(())
    }
}

impl FromIterator<Block> for Document {
    fn from_iter<I: IntoIterator<Item = Block>>(iter: I) -> Self {
        Self {
            blocks: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Block>> for Document {
    fn from(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }
}
