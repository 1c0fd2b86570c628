use crate::prelude_internal::*;

/// Conversation type a [`Filter`] can include.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConversationType {
    Im,
    Mpim,
    Private,
    Public,
}

impl ConversationType {
    pub const fn as_str(self) -> &'static str {
        match self {
            ConversationType::Im => "im",
            ConversationType::Mpim => "mpim",
            ConversationType::Private => "private",
            ConversationType::Public => "public",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "im" => Some(ConversationType::Im),
            "mpim" => Some(ConversationType::Mpim),
            "private" => Some(ConversationType::Private),
            "public" => Some(ConversationType::Public),
            _ => None,
        }
    }
}

/// A conversation list `filter` object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    pub include: Vec<ConversationType>,
    pub exclude_external_shared_channels: Option<bool>,
    pub exclude_bot_users: Option<bool>,
    pub extra: Extra,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn include(mut self, conversation_type: ConversationType) -> Self {
        self.include.push(conversation_type);
        self
    }

    pub fn exclude_external_shared_channels(mut self, exclude: bool) -> Self {
        self.exclude_external_shared_channels = Some(exclude);
        self
    }

    pub fn exclude_bot_users(mut self, exclude: bool) -> Self {
        self.exclude_bot_users = Some(exclude);
        self
    }
}

impl Node for Filter {
    fn kind(&self) -> Kind {
        Kind::Filter
    }

    fn extra(&self) -> &Extra {
        &self.extra
    }

    fn extra_mut(&mut self) -> &mut Extra {
        &mut self.extra
    }

    fn validate_in(&self, _cx: Context<'_>) -> Result<(), ValidationError> {
        if self.include.is_empty()
            && self.exclude_external_shared_channels.is_none()
            && self.exclude_bot_users.is_none()
        {
            return Err(ValidationErrorKind::MissingOneOf {
                fields: &[
                    "include",
                    "exclude_external_shared_channels",
                    "exclude_bot_users",
                ],
            }
            .at(Kind::Filter));
        }
        Ok(())
    }

    fn write_fields(&self, out: &mut FieldWriter<'_>) -> Result<(), ValidationError> {
        if !self.include.is_empty() {
            let include: Vec<&str> = self.include.iter().map(|t| t.as_str()).collect();
            out.field("include", include);
        }
        out.field_optional(
            "exclude_external_shared_channels",
            self.exclude_external_shared_channels,
        );
        out.field_optional("exclude_bot_users", self.exclude_bot_users);
        Ok(())
    }
}

impl Hydrate for Filter {
    const KIND: Kind = Kind::Filter;

    fn hydrate_fields(&mut self, data: &mut HydrationData) -> Result<(), Error> {
        self.include = data.use_enums("include", ConversationType::from_name)?;
        self.exclude_external_shared_channels = data.use_bool("exclude_external_shared_channels")?;
        self.exclude_bot_users = data.use_bool("exclude_bot_users")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_empty_filter_is_invalid() {
        let err = Filter::new().validate().unwrap_err();
        assert!(err.to_string().contains("at least one of: include"));
    }

    #[test]
    fn test_filter_output() {
        let json = Filter::new()
            .include(ConversationType::Public)
            .include(ConversationType::Im)
            .exclude_bot_users(true)
            .to_json()
            .unwrap();
        assert_eq!(
            json,
            json!({"include": ["public", "im"], "exclude_bot_users": true})
        );
    }
}
