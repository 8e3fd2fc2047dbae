//! Select menus, one struct per data source.
//!
//! The fields every menu shares live in [`SelectBase`], embedded by value and
//! flattened on the wire.

use serde::{Deserialize, Serialize};

use crate::bounded::{Bounded, MAX_SELECT_OPTIONS};
use crate::discriminator::{
    ChannelsSelectTag, ConversationsSelectTag, ExternalSelectTag, StaticSelectTag,
    UsersSelectTag,
};
use crate::errors::BlockKitError;
use crate::options::{Confirmation, OptionGroup, SelectOption};
use crate::text::PlainText;

/// Fields shared by all select menus.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectBase {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    action_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    placeholder: Option<PlainText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    confirm: Option<Confirmation>,
}

impl SelectBase {
    pub fn action_id(&self) -> Option<&str> {
        self.action_id.as_deref()
    }

    pub fn placeholder(&self) -> Option<&PlainText> {
        self.placeholder.as_ref()
    }

    pub fn confirm(&self) -> Option<&Confirmation> {
        self.confirm.as_ref()
    }
}

macro_rules! select_base_builders {
    ($($select:ty),+ $(,)?) => {
        $(
            impl $select {
                pub fn with_action_id(mut self, action_id: impl Into<String>) -> Self {
                    self.base.action_id = Some(action_id.into());
                    self
                }

                pub fn with_placeholder(mut self, placeholder: impl Into<PlainText>) -> Self {
                    self.base.placeholder = Some(placeholder.into());
                    self
                }

                pub fn with_confirm(mut self, confirm: Confirmation) -> Self {
                    self.base.confirm = Some(confirm);
                    self
                }

                pub fn base(&self) -> &SelectBase {
                    &self.base
                }
            }
        )+
    };
}

select_base_builders!(
    StaticSelectElement,
    ExternalSelectElement,
    ConversationsSelectElement,
    ChannelsSelectElement,
    UsersSelectElement,
);

/// Menu whose options are sent inline.
///
/// Flat options and option groups may both be set; the platform decides
/// whether that combination is acceptable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticSelectElement {
    #[serde(rename = "type")]
    kind: StaticSelectTag,
    #[serde(flatten)]
    base: SelectBase,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    initial_option: Option<SelectOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    options: Option<Bounded<SelectOption, MAX_SELECT_OPTIONS>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    option_groups: Option<Bounded<OptionGroup, MAX_SELECT_OPTIONS>>,
}

impl StaticSelectElement {
    pub fn new() -> Self {
        Self {
            kind: StaticSelectTag::Tag,
            base: SelectBase::default(),
            initial_option: None,
            options: None,
            option_groups: None,
        }
    }

    pub fn with_options(mut self, options: Vec<SelectOption>) -> Result<Self, BlockKitError> {
        self.options = Some(Bounded::new(options, "static select options")?);
        Ok(self)
    }

    pub fn with_option_groups(mut self, groups: Vec<OptionGroup>) -> Result<Self, BlockKitError> {
        self.option_groups = Some(Bounded::new(groups, "static select option groups")?);
        Ok(self)
    }

    pub fn with_initial_option(mut self, option: SelectOption) -> Self {
        self.initial_option = Some(option);
        self
    }

    pub fn initial_option(&self) -> Option<&SelectOption> {
        self.initial_option.as_ref()
    }

    pub fn options(&self) -> Option<&[SelectOption]> {
        self.options.as_ref().map(|options| options.as_slice())
    }

    pub fn option_groups(&self) -> Option<&[OptionGroup]> {
        self.option_groups.as_ref().map(|groups| groups.as_slice())
    }
}

impl Default for StaticSelectElement {
    fn default() -> Self {
        Self::new()
    }
}

/// Menu whose options the platform fetches from the app's options endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalSelectElement {
    #[serde(rename = "type")]
    kind: ExternalSelectTag,
    #[serde(flatten)]
    base: SelectBase,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    initial_option: Option<SelectOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    min_query_length: Option<u32>,
}

impl ExternalSelectElement {
    pub fn new() -> Self {
        Self {
            kind: ExternalSelectTag::Tag,
            base: SelectBase::default(),
            initial_option: None,
            min_query_length: None,
        }
    }

    pub fn with_initial_option(mut self, option: SelectOption) -> Self {
        self.initial_option = Some(option);
        self
    }

    /// Characters typed before the platform queries the options endpoint.
    pub fn with_min_query_length(mut self, length: u32) -> Self {
        self.min_query_length = Some(length);
        self
    }

    pub fn initial_option(&self) -> Option<&SelectOption> {
        self.initial_option.as_ref()
    }

    pub fn min_query_length(&self) -> Option<u32> {
        self.min_query_length
    }
}

impl Default for ExternalSelectElement {
    fn default() -> Self {
        Self::new()
    }
}

/// Menu listing the workspace's conversations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationsSelectElement {
    #[serde(rename = "type")]
    kind: ConversationsSelectTag,
    #[serde(flatten)]
    base: SelectBase,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    initial_option: Option<SelectOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    min_query_length: Option<u32>,
}

impl ConversationsSelectElement {
    pub fn new() -> Self {
        Self {
            kind: ConversationsSelectTag::Tag,
            base: SelectBase::default(),
            initial_option: None,
            min_query_length: None,
        }
    }

    /// Menu with its action id and placeholder already set.
    pub fn prompt(action_id: impl Into<String>, placeholder: impl Into<PlainText>) -> Self {
        Self::new()
            .with_action_id(action_id)
            .with_placeholder(placeholder)
    }

    pub fn with_initial_option(mut self, option: SelectOption) -> Self {
        self.initial_option = Some(option);
        self
    }

    pub fn with_min_query_length(mut self, length: u32) -> Self {
        self.min_query_length = Some(length);
        self
    }

    pub fn initial_option(&self) -> Option<&SelectOption> {
        self.initial_option.as_ref()
    }

    pub fn min_query_length(&self) -> Option<u32> {
        self.min_query_length
    }
}

impl Default for ConversationsSelectElement {
    fn default() -> Self {
        Self::new()
    }
}

/// Menu listing public channels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelsSelectElement {
    #[serde(rename = "type")]
    kind: ChannelsSelectTag,
    #[serde(flatten)]
    base: SelectBase,
    #[serde(
        rename = "initial_channel",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    initial_channel_id: Option<String>,
}

impl ChannelsSelectElement {
    pub fn new() -> Self {
        Self {
            kind: ChannelsSelectTag::Tag,
            base: SelectBase::default(),
            initial_channel_id: None,
        }
    }

    pub fn with_initial_channel(mut self, channel_id: impl Into<String>) -> Self {
        self.initial_channel_id = Some(channel_id.into());
        self
    }

    pub fn initial_channel(&self) -> Option<&str> {
        self.initial_channel_id.as_deref()
    }
}

impl Default for ChannelsSelectElement {
    fn default() -> Self {
        Self::new()
    }
}

/// Menu listing workspace members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsersSelectElement {
    #[serde(rename = "type")]
    kind: UsersSelectTag,
    #[serde(flatten)]
    base: SelectBase,
    #[serde(
        rename = "initial_user",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    initial_user_id: Option<String>,
}

impl UsersSelectElement {
    pub fn new() -> Self {
        Self {
            kind: UsersSelectTag::Tag,
            base: SelectBase::default(),
            initial_user_id: None,
        }
    }

    pub fn with_initial_user(mut self, user_id: impl Into<String>) -> Self {
        self.initial_user_id = Some(user_id.into());
        self
    }

    pub fn initial_user(&self) -> Option<&str> {
        self.initial_user_id.as_deref()
    }
}

impl Default for UsersSelectElement {
    fn default() -> Self {
        Self::new()
    }
}
