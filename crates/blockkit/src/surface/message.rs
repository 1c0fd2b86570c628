use serde_json::Value;

use super::block_list::{BlockList, BlockRules, HasBlocks};
use crate::error::HydrationError;
use crate::hydrate::shape_of;
use crate::prelude_internal::*;

const MESSAGE_RULES: BlockRules = BlockRules::new(50, false).with_file_blocks();

/// How a message posted in response to an interaction is delivered.
///
/// The wire encoding is a single key per directive, and the `*_original`
/// flags are the string `"true"` rather than a boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageDirective {
    Ephemeral,
    InChannel,
    ReplaceOriginal,
    DeleteOriginal,
}

impl MessageDirective {
    /// The key and value this directive is written as.
    pub const fn entry(self) -> (&'static str, &'static str) {
        match self {
            MessageDirective::Ephemeral => ("response_type", "ephemeral"),
            MessageDirective::InChannel => ("response_type", "in_channel"),
            MessageDirective::ReplaceOriginal => ("replace_original", "true"),
            MessageDirective::DeleteOriginal => ("delete_original", "true"),
        }
    }

    fn from_response_type(name: &str) -> Option<Self> {
        match name {
            "ephemeral" => Some(MessageDirective::Ephemeral),
            "in_channel" => Some(MessageDirective::InChannel),
            _ => None,
        }
    }
}

/// Reads a `"true"` flag. Booleans are accepted as well. A false value is
/// left unconsumed so it passes through as an extra.
fn use_flag(data: &mut HydrationData, key: &str) -> Result<bool, Error> {
    let set = match data.get(key) {
        None => false,
        Some(Value::Bool(flag)) => *flag,
        Some(Value::String(flag)) if flag == "true" => true,
        Some(Value::String(flag)) if flag == "false" || flag.is_empty() => false,
        Some(Value::String(flag)) => {
            return Err(HydrationError::UnsupportedValue {
                field: key.to_string(),
                value: flag.clone(),
            }
            .into());
        }
        Some(other) => {
            return Err(HydrationError::UnexpectedShape {
                field: key.to_string(),
                expected: "a string",
                found: shape_of(other),
            }
            .into());
        }
    };
    if set {
        data.use_value(key);
    }
    Ok(set)
}

/// A chat message. Written without a `type` key.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub directive: Option<MessageDirective>,
    /// Fallback text, shown where blocks cannot be rendered.
    pub text: Option<String>,
    /// Whether the fallback text is formatted as mrkdwn.
    pub mrkdwn: Option<bool>,
    pub blocks: BlockList,
    pub extra: Extra,
}

impl Default for Message {
    fn default() -> Self {
        Self {
            directive: None,
            text: None,
            mrkdwn: None,
            blocks: BlockList::new(MESSAGE_RULES),
            extra: Extra::default(),
        }
    }
}

impl Message {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn directive(mut self, directive: MessageDirective) -> Self {
        self.directive = Some(directive);
        self
    }

    pub fn ephemeral(self) -> Self {
        self.directive(MessageDirective::Ephemeral)
    }

    pub fn in_channel(self) -> Self {
        self.directive(MessageDirective::InChannel)
    }

    pub fn replace_original(self) -> Self {
        self.directive(MessageDirective::ReplaceOriginal)
    }

    pub fn delete_original(self) -> Self {
        self.directive(MessageDirective::DeleteOriginal)
    }

    /// Set the fallback text.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn mrkdwn(mut self, mrkdwn: bool) -> Self {
        self.mrkdwn = Some(mrkdwn);
        self
    }
}

impl HasBlocks for Message {
    fn block_list(&mut self) -> &mut BlockList {
        &mut self.blocks
    }
}

impl Node for Message {
    fn kind(&self) -> Kind {
        Kind::Message
    }

    fn extra(&self) -> &Extra {
        &self.extra
    }

    fn extra_mut(&mut self) -> &mut Extra {
        &mut self.extra
    }

    fn validate_in(&self, cx: Context<'_>) -> Result<(), ValidationError> {
        let has_blocks = !self.blocks.is_empty();
        if has_blocks {
            self.blocks.validate(Kind::Message, cx.enter(Kind::Message))?;
        }
        let has_text = self.text.is_some();
        if let Some(text) = &self.text {
            validate_string("text", text, 1, None).map_err(|err| err.at(Kind::Message))?;
        }
        if !has_blocks && !has_text {
            return Err(ValidationErrorKind::MissingOneOf {
                fields: &["blocks", "text"],
            }
            .at(Kind::Message));
        }
        Ok(())
    }

    fn write_fields(&self, out: &mut FieldWriter<'_>) -> Result<(), ValidationError> {
        if let Some(directive) = self.directive {
            let (key, value) = directive.entry();
            out.field(key, value);
        }
        if let Some(text) = &self.text {
            out.field("text", text.as_str());
            out.field_optional("mrkdwn", self.mrkdwn);
        }
        if !self.blocks.is_empty() {
            self.blocks.write(out)?;
        }
        Ok(())
    }
}

impl Hydrate for Message {
    const KIND: Kind = Kind::Message;

    fn hydrate_fields(&mut self, data: &mut HydrationData) -> Result<(), Error> {
        let mut found = Vec::new();
        if let Some(directive) =
            data.use_enum("response_type", MessageDirective::from_response_type)?
        {
            found.push(directive);
        }
        if use_flag(data, "replace_original")? {
            found.push(MessageDirective::ReplaceOriginal);
        }
        if use_flag(data, "delete_original")? {
            found.push(MessageDirective::DeleteOriginal);
        }
        if let [first, second, ..] = found.as_slice() {
            return Err(ValidationErrorKind::Exclusive {
                first: first.entry().0,
                second: second.entry().0,
            }
            .at(Kind::Message)
            .into());
        }
        self.directive = found.first().copied();

        if data.has("text") {
            self.text = data.use_str("text")?;
            self.mrkdwn = data.use_bool("mrkdwn")?;
        }
        self.blocks.hydrate(data)
    }
}
