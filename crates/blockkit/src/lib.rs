//! Typed builder, validator and parser for Block Kit UI documents.
//!
//! Documents are trees of nodes. Each node knows its `type` discriminator,
//! the rules it must satisfy, and how to write itself as JSON. Parsing goes
//! the other way: a raw JSON object is resolved to its concrete kind,
//! hydrated field by field, and validated before it is handed back.
//!
//! ```ignore
//! use blockkit::prelude::*;
//!
//! let msg = Message::new()
//!     .block(Section::new().mrkdwn("*Hello*"))
//!     .block(Actions::new().element(Button::new("Go").action_id("go")));
//! let json = msg.to_json_string(false)?;
//! let back = Message::from_json_str(&json)?;
//! ```

/// Closed registry of node kinds and their discriminators.
pub mod kind;

/// Insertion-ordered map.
pub mod map;

/// Errors produced while validating, serializing and parsing.
pub mod error;

/// Serialization defaults.
pub mod config;

/// Position of a node within its document.
pub mod context;

/// Input-consumption tracking during parsing.
pub mod hydrate;

/// The node contract.
pub mod node;

mod union;

/// Node of any registered kind.
pub mod any;

/// Reusable constrained collections: option lists, optional companions.
pub mod behavior;

/// Text, options, confirmation dialogs and other composition objects.
pub mod composition;

/// Interactive elements.
pub mod element;

/// Layout blocks.
pub mod block;

/// Top-level documents.
pub mod surface;

/// A JSON object with key order preserved.
pub type JsonMap = serde_json::Map<String, serde_json::Value>;

pub use error::Error;

/// Everything needed to build and parse documents.
pub mod prelude {
    pub use crate::any::AnyNode;
    pub use crate::behavior::{
        Companion, HasConfirm, HasOptionGroups, HasOptions, HasPlaceholder, OptionGroups,
        OptionList, OptionsConfig,
    };
    pub use crate::block::{
        Actions, Block, ContextBlock, ContextElement, Divider, File, Header, InputBlock, Section,
    };
    pub use crate::composition::{
        Confirm, DispatchActionConfig, Filter, MrkdwnText, OptionGroup, OptionItem, PlainText,
        Text, TriggerAction,
    };
    pub use crate::config::Config;
    pub use crate::element::{
        Button, ButtonStyle, ChannelsSelect, Checkboxes, ConversationType, ConversationsSelect,
        DatePicker, Element, ExternalSelect, Image, MultiChannelsSelect, MultiConversationsSelect,
        MultiExternalSelect, MultiStaticSelect, MultiUsersSelect, NumberInput, OverflowMenu,
        RadioButtons, StaticSelect, TextInput, TimePicker, UsersSelect,
    };
    pub use crate::error::{
        Error, HydrationError, TypeMismatch, UnknownDiscriminator, ValidationError,
        ValidationErrorKind,
    };
    pub use crate::kind::Kind;
    pub use crate::node::{Hydrate, Node, Parse};
    pub use crate::surface::{
        AppHome, BlockList, HasBlocks, HasViewFields, Message, MessageDirective, Modal, Surface,
        WorkflowStep,
    };
}

pub(crate) mod prelude_internal {
    #![allow(unused_imports)]
    pub use crate::JsonMap;
    pub use crate::behavior::{
        Companion, ConfirmSlot, FilterSlot, HasConfirm, HasOptionGroups, HasOptions,
        HasPlaceholder, OptionGroups, OptionList, OptionsConfig, PlaceholderSlot,
    };
    pub use crate::composition::text::{
        MrkdwnText, PlainText, Text, TextContent, validate_string, validate_text_field,
    };
    pub use crate::config::Config;
    pub use crate::context::Context;
    pub use crate::error::{Error, ValidationError, ValidationErrorKind};
    pub use crate::hydrate::HydrationData;
    pub use crate::kind::Kind;
    pub use crate::node::{Extra, FieldWriter, Hydrate, Node, Parse};
}
