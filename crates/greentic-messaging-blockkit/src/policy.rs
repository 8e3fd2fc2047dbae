use serde::{Deserialize, Serialize};
use std::env;

use crate::errors::BlockKitError;

pub const DOCUMENT_POLICY_SCHEMA_VERSION: u32 = 1;

/// Most blocks the platform accepts in one message.
pub const PLATFORM_MAX_BLOCKS: usize = 50;

const UNIQUE_BLOCK_IDS_ENV: &str = "GREENTIC_BLOCKKIT_UNIQUE_BLOCK_IDS";
const MAX_BLOCKS_ENV: &str = "GREENTIC_BLOCKKIT_MAX_BLOCKS";

fn default_schema_version() -> u32 {
    DOCUMENT_POLICY_SCHEMA_VERSION
}

/// Cross-block checks a caller can opt into before handing a document off.
///
/// The default policy checks nothing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DocumentPolicy {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    #[serde(default)]
    pub unique_block_ids: bool,
    #[serde(default)]
    pub max_blocks: Option<usize>,
}

impl Default for DocumentPolicy {
    fn default() -> Self {
        Self {
            schema_version: DOCUMENT_POLICY_SCHEMA_VERSION,
            unique_block_ids: false,
            max_blocks: None,
        }
    }
}

impl DocumentPolicy {
    /// Mirrors what the platform rejects: repeated block ids and more than
    /// [`PLATFORM_MAX_BLOCKS`] blocks.
    pub fn platform() -> Self {
        Self {
            unique_block_ids: true,
            max_blocks: Some(PLATFORM_MAX_BLOCKS),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), BlockKitError> {
        if self.schema_version != DOCUMENT_POLICY_SCHEMA_VERSION {
            return Err(BlockKitError::UnsupportedSchemaVersion {
                expected: DOCUMENT_POLICY_SCHEMA_VERSION,
                got: self.schema_version,
            });
        }
        Ok(())
    }

    /// Reads `GREENTIC_BLOCKKIT_UNIQUE_BLOCK_IDS` and `GREENTIC_BLOCKKIT_MAX_BLOCKS`.
    /// Unset or unparsable values keep the defaults.
    pub fn from_env() -> Self {
        let mut policy = Self::default();
        if let Some(unique) = env::var(UNIQUE_BLOCK_IDS_ENV)
            .ok()
            .and_then(|value| parse_flag(&value))
        {
            policy.unique_block_ids = unique;
        }
        policy.max_blocks = env::var(MAX_BLOCKS_ENV)
            .ok()
            .and_then(|value| value.trim().parse::<usize>().ok());
        policy
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_roundtrip_defaults() {
        let policy = DocumentPolicy::default();
        let json = serde_json::to_string(&policy).expect("serialize");
        let decoded: DocumentPolicy = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(decoded, policy);
        decoded.validate().expect("validate");
    }

    #[test]
    fn empty_object_is_the_default_policy() {
        let decoded: DocumentPolicy = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(decoded, DocumentPolicy::default());
    }

    #[test]
    fn rejects_unknown_fields() {
        let json = r#"{"schema_version":1,"unique_block_ids":true,"extra":42}"#;
        let err = serde_json::from_str::<DocumentPolicy>(json).unwrap_err();
        assert!(err.to_string().contains("unknown field"));
    }

    #[test]
    fn rejects_unsupported_schema_version() {
        let policy = DocumentPolicy {
            schema_version: 999,
            ..DocumentPolicy::default()
        };
        assert_eq!(
            policy.validate().unwrap_err(),
            BlockKitError::UnsupportedSchemaVersion {
                expected: 1,
                got: 999
            }
        );
    }

    #[test]
    fn platform_policy_limits_blocks() {
        let policy = DocumentPolicy::platform();
        assert!(policy.unique_block_ids);
        assert_eq!(policy.max_blocks, Some(50));
    }

    #[test]
    fn policy_from_env() {
        unsafe {
            env::set_var(UNIQUE_BLOCK_IDS_ENV, "Yes");
            env::set_var(MAX_BLOCKS_ENV, " 12 ");
        }
        let policy = DocumentPolicy::from_env();
        assert!(policy.unique_block_ids);
        assert_eq!(policy.max_blocks, Some(12));

        unsafe {
            env::remove_var(UNIQUE_BLOCK_IDS_ENV);
            env::remove_var(MAX_BLOCKS_ENV);
        }
        assert_eq!(DocumentPolicy::from_env(), DocumentPolicy::default());
    }
}
