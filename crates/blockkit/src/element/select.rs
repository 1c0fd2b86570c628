//! Select menus. Every menu requires a placeholder.

use super::{hydrate_action_id, validate_action_id, write_action_id};
use crate::composition::{Filter, OptionItem};
use crate::prelude_internal::*;

/// The parts shared by all select menus.
fn validate_menu(
    owner: Kind,
    action_id: Option<&str>,
    placeholder: &Companion<PlaceholderSlot>,
    confirm: &Companion<ConfirmSlot>,
    inner: Context<'_>,
) -> Result<(), ValidationError> {
    validate_action_id(owner, action_id)?;
    if !placeholder.is_some() {
        return Err(ValidationErrorKind::MissingField("placeholder").at(owner));
    }
    placeholder.validate(owner, inner)?;
    confirm.validate(owner, inner)
}

fn check_positive(owner: Kind, field: &'static str, value: Option<u64>) -> Result<(), ValidationError> {
    match value {
        Some(0) => Err(ValidationErrorKind::InvalidValue {
            field,
            reason: "must be at least 1".to_string(),
        }
        .at(owner)),
        _ => Ok(()),
    }
}

/// Write a list of ids only when it has entries.
fn write_ids(out: &mut FieldWriter<'_>, name: &str, ids: &[String]) {
    if !ids.is_empty() {
        out.field(name, ids.to_vec());
    }
}

macro_rules! menu_traits {
    ($($ty:ty),*) => {
        $(
            impl HasPlaceholder for $ty {
                fn placeholder_slot(&mut self) -> &mut Companion<PlaceholderSlot> {
                    &mut self.placeholder
                }
            }

            impl HasConfirm for $ty {
                fn confirm_slot(&mut self) -> &mut Companion<ConfirmSlot> {
                    &mut self.confirm
                }
            }

            impl $ty {
                pub fn action_id(mut self, action_id: impl Into<String>) -> Self {
                    self.action_id = Some(action_id.into());
                    self
                }
            }
        )*
    };
}

menu_traits!(
    StaticSelect,
    MultiStaticSelect,
    ExternalSelect,
    UsersSelect,
    ChannelsSelect,
    ConversationsSelect,
    MultiExternalSelect,
    MultiUsersSelect,
    MultiChannelsSelect,
    MultiConversationsSelect
);

/// A `static_select` menu over options or option groups.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticSelect {
    pub action_id: Option<String>,
    pub options: OptionGroups,
    pub placeholder: Companion<PlaceholderSlot>,
    pub confirm: Companion<ConfirmSlot>,
    pub extra: Extra,
}

impl Default for StaticSelect {
    fn default() -> Self {
        Self {
            action_id: None,
            options: OptionGroups::new(OptionsConfig::new(1).max(100).max_initial(1)),
            placeholder: Companion::default(),
            confirm: Companion::default(),
            extra: Extra::default(),
        }
    }
}

impl StaticSelect {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HasOptions for StaticSelect {
    fn option_list(&mut self) -> &mut OptionList {
        &mut self.options.list
    }
}

impl HasOptionGroups for StaticSelect {
    fn option_groups(&mut self) -> &mut OptionGroups {
        &mut self.options
    }
}

impl Node for StaticSelect {
    fn kind(&self) -> Kind {
        Kind::StaticSelect
    }

    fn extra(&self) -> &Extra {
        &self.extra
    }

    fn extra_mut(&mut self) -> &mut Extra {
        &mut self.extra
    }

    fn validate_in(&self, cx: Context<'_>) -> Result<(), ValidationError> {
        let inner = cx.enter(Kind::StaticSelect);
        validate_menu(
            Kind::StaticSelect,
            self.action_id.as_deref(),
            &self.placeholder,
            &self.confirm,
            inner,
        )?;
        self.options.validate(Kind::StaticSelect, inner)
    }

    fn write_fields(&self, out: &mut FieldWriter<'_>) -> Result<(), ValidationError> {
        write_action_id(out, self.action_id.as_deref());
        self.options.write(out)?;
        self.placeholder.write(out)?;
        self.confirm.write(out)
    }
}

impl Hydrate for StaticSelect {
    const KIND: Kind = Kind::StaticSelect;

    fn hydrate_fields(&mut self, data: &mut HydrationData) -> Result<(), Error> {
        self.action_id = hydrate_action_id(data)?;
        self.options.hydrate(data)?;
        self.placeholder.hydrate(data)?;
        self.confirm.hydrate(data)
    }
}

/// A `multi_static_select` menu over options or option groups.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiStaticSelect {
    pub action_id: Option<String>,
    pub options: OptionGroups,
    pub max_selected_items: Option<u64>,
    pub placeholder: Companion<PlaceholderSlot>,
    pub confirm: Companion<ConfirmSlot>,
    pub extra: Extra,
}

impl Default for MultiStaticSelect {
    fn default() -> Self {
        Self {
            action_id: None,
            options: OptionGroups::new(OptionsConfig::new(1).max(100)),
            max_selected_items: None,
            placeholder: Companion::default(),
            confirm: Companion::default(),
            extra: Extra::default(),
        }
    }
}

impl MultiStaticSelect {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_selected_items(mut self, max: u64) -> Self {
        self.max_selected_items = Some(max);
        self
    }
}

impl HasOptions for MultiStaticSelect {
    fn option_list(&mut self) -> &mut OptionList {
        &mut self.options.list
    }
}

impl HasOptionGroups for MultiStaticSelect {
    fn option_groups(&mut self) -> &mut OptionGroups {
        &mut self.options
    }
}

impl Node for MultiStaticSelect {
    fn kind(&self) -> Kind {
        Kind::MultiStaticSelect
    }

    fn extra(&self) -> &Extra {
        &self.extra
    }

    fn extra_mut(&mut self) -> &mut Extra {
        &mut self.extra
    }

    fn validate_in(&self, cx: Context<'_>) -> Result<(), ValidationError> {
        let inner = cx.enter(Kind::MultiStaticSelect);
        validate_menu(
            Kind::MultiStaticSelect,
            self.action_id.as_deref(),
            &self.placeholder,
            &self.confirm,
            inner,
        )?;
        check_positive(
            Kind::MultiStaticSelect,
            "max_selected_items",
            self.max_selected_items,
        )?;
        self.options.validate(Kind::MultiStaticSelect, inner)
    }

    fn write_fields(&self, out: &mut FieldWriter<'_>) -> Result<(), ValidationError> {
        write_action_id(out, self.action_id.as_deref());
        self.options.write(out)?;
        out.field_optional("max_selected_items", self.max_selected_items);
        self.placeholder.write(out)?;
        self.confirm.write(out)
    }
}

impl Hydrate for MultiStaticSelect {
    const KIND: Kind = Kind::MultiStaticSelect;

    fn hydrate_fields(&mut self, data: &mut HydrationData) -> Result<(), Error> {
        self.action_id = hydrate_action_id(data)?;
        self.options.hydrate(data)?;
        self.max_selected_items = data.use_u64("max_selected_items")?;
        self.placeholder.hydrate(data)?;
        self.confirm.hydrate(data)
    }
}

/// An `external_select` menu, loading its options from the app.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExternalSelect {
    pub action_id: Option<String>,
    pub initial_option: Option<OptionItem>,
    pub min_query_length: Option<u64>,
    pub placeholder: Companion<PlaceholderSlot>,
    pub confirm: Companion<ConfirmSlot>,
    pub extra: Extra,
}

impl ExternalSelect {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn initial_option(mut self, text: impl Into<String>, value: impl Into<String>) -> Self {
        self.initial_option = Some(OptionItem::new(text, value));
        self
    }

    pub fn min_query_length(mut self, length: u64) -> Self {
        self.min_query_length = Some(length);
        self
    }
}

impl Node for ExternalSelect {
    fn kind(&self) -> Kind {
        Kind::ExternalSelect
    }

    fn extra(&self) -> &Extra {
        &self.extra
    }

    fn extra_mut(&mut self) -> &mut Extra {
        &mut self.extra
    }

    fn validate_in(&self, cx: Context<'_>) -> Result<(), ValidationError> {
        let inner = cx.enter(Kind::ExternalSelect);
        validate_menu(
            Kind::ExternalSelect,
            self.action_id.as_deref(),
            &self.placeholder,
            &self.confirm,
            inner,
        )?;
        if let Some(option) = &self.initial_option {
            option.validate_in(inner)?;
        }
        Ok(())
    }

    fn write_fields(&self, out: &mut FieldWriter<'_>) -> Result<(), ValidationError> {
        write_action_id(out, self.action_id.as_deref());
        out.node_optional("initial_option", self.initial_option.as_ref())?;
        out.field_optional("min_query_length", self.min_query_length);
        self.placeholder.write(out)?;
        self.confirm.write(out)
    }
}

impl Hydrate for ExternalSelect {
    const KIND: Kind = Kind::ExternalSelect;

    fn hydrate_fields(&mut self, data: &mut HydrationData) -> Result<(), Error> {
        self.action_id = hydrate_action_id(data)?;
        self.initial_option = data.use_node("initial_option")?;
        self.min_query_length = data.use_u64("min_query_length")?;
        self.placeholder.hydrate(data)?;
        self.confirm.hydrate(data)
    }
}

/// A `users_select` menu.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UsersSelect {
    pub action_id: Option<String>,
    pub initial_user: Option<String>,
    pub placeholder: Companion<PlaceholderSlot>,
    pub confirm: Companion<ConfirmSlot>,
    pub extra: Extra,
}

impl UsersSelect {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn initial_user(mut self, user: impl Into<String>) -> Self {
        self.initial_user = Some(user.into());
        self
    }
}

impl Node for UsersSelect {
    fn kind(&self) -> Kind {
        Kind::UsersSelect
    }

    fn extra(&self) -> &Extra {
        &self.extra
    }

    fn extra_mut(&mut self) -> &mut Extra {
        &mut self.extra
    }

    fn validate_in(&self, cx: Context<'_>) -> Result<(), ValidationError> {
        validate_menu(
            Kind::UsersSelect,
            self.action_id.as_deref(),
            &self.placeholder,
            &self.confirm,
            cx.enter(Kind::UsersSelect),
        )
    }

    fn write_fields(&self, out: &mut FieldWriter<'_>) -> Result<(), ValidationError> {
        write_action_id(out, self.action_id.as_deref());
        out.field_optional("initial_user", self.initial_user.as_deref().filter(|u| !u.is_empty()));
        self.placeholder.write(out)?;
        self.confirm.write(out)
    }
}

impl Hydrate for UsersSelect {
    const KIND: Kind = Kind::UsersSelect;

    fn hydrate_fields(&mut self, data: &mut HydrationData) -> Result<(), Error> {
        self.action_id = hydrate_action_id(data)?;
        self.initial_user = data.use_str("initial_user")?;
        self.placeholder.hydrate(data)?;
        self.confirm.hydrate(data)
    }
}

/// A `channels_select` menu.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChannelsSelect {
    pub action_id: Option<String>,
    pub initial_channel: Option<String>,
    pub response_url_enabled: Option<bool>,
    pub placeholder: Companion<PlaceholderSlot>,
    pub confirm: Companion<ConfirmSlot>,
    pub extra: Extra,
}

impl ChannelsSelect {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn initial_channel(mut self, channel: impl Into<String>) -> Self {
        self.initial_channel = Some(channel.into());
        self
    }

    pub fn response_url_enabled(mut self, enabled: bool) -> Self {
        self.response_url_enabled = Some(enabled);
        self
    }
}

impl Node for ChannelsSelect {
    fn kind(&self) -> Kind {
        Kind::ChannelsSelect
    }

    fn extra(&self) -> &Extra {
        &self.extra
    }

    fn extra_mut(&mut self) -> &mut Extra {
        &mut self.extra
    }

    fn validate_in(&self, cx: Context<'_>) -> Result<(), ValidationError> {
        validate_menu(
            Kind::ChannelsSelect,
            self.action_id.as_deref(),
            &self.placeholder,
            &self.confirm,
            cx.enter(Kind::ChannelsSelect),
        )
    }

    fn write_fields(&self, out: &mut FieldWriter<'_>) -> Result<(), ValidationError> {
        write_action_id(out, self.action_id.as_deref());
        out.field_optional(
            "initial_channel",
            self.initial_channel.as_deref().filter(|c| !c.is_empty()),
        );
        out.field_optional("response_url_enabled", self.response_url_enabled);
        self.placeholder.write(out)?;
        self.confirm.write(out)
    }
}

impl Hydrate for ChannelsSelect {
    const KIND: Kind = Kind::ChannelsSelect;

    fn hydrate_fields(&mut self, data: &mut HydrationData) -> Result<(), Error> {
        self.action_id = hydrate_action_id(data)?;
        self.initial_channel = data.use_str("initial_channel")?;
        self.response_url_enabled = data.use_bool("response_url_enabled")?;
        self.placeholder.hydrate(data)?;
        self.confirm.hydrate(data)
    }
}

/// A `conversations_select` menu, optionally narrowed by a [`Filter`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversationsSelect {
    pub action_id: Option<String>,
    pub initial_conversation: Option<String>,
    pub response_url_enabled: Option<bool>,
    pub default_to_current_conversation: Option<bool>,
    pub filter: Companion<FilterSlot>,
    pub placeholder: Companion<PlaceholderSlot>,
    pub confirm: Companion<ConfirmSlot>,
    pub extra: Extra,
}

impl ConversationsSelect {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn initial_conversation(mut self, conversation: impl Into<String>) -> Self {
        self.initial_conversation = Some(conversation.into());
        self
    }

    pub fn response_url_enabled(mut self, enabled: bool) -> Self {
        self.response_url_enabled = Some(enabled);
        self
    }

    pub fn default_to_current_conversation(mut self, enabled: bool) -> Self {
        self.default_to_current_conversation = Some(enabled);
        self
    }

    pub fn filter(mut self, filter: Filter) -> Self {
        self.filter.set(filter);
        self
    }
}

impl Node for ConversationsSelect {
    fn kind(&self) -> Kind {
        Kind::ConversationsSelect
    }

    fn extra(&self) -> &Extra {
        &self.extra
    }

    fn extra_mut(&mut self) -> &mut Extra {
        &mut self.extra
    }

    fn validate_in(&self, cx: Context<'_>) -> Result<(), ValidationError> {
        let inner = cx.enter(Kind::ConversationsSelect);
        validate_menu(
            Kind::ConversationsSelect,
            self.action_id.as_deref(),
            &self.placeholder,
            &self.confirm,
            inner,
        )?;
        self.filter.validate(Kind::ConversationsSelect, inner)
    }

    fn write_fields(&self, out: &mut FieldWriter<'_>) -> Result<(), ValidationError> {
        write_action_id(out, self.action_id.as_deref());
        out.field_optional(
            "initial_conversation",
            self.initial_conversation.as_deref().filter(|c| !c.is_empty()),
        );
        out.field_optional("response_url_enabled", self.response_url_enabled);
        out.field_optional(
            "default_to_current_conversation",
            self.default_to_current_conversation,
        );
        self.filter.write(out)?;
        self.placeholder.write(out)?;
        self.confirm.write(out)
    }
}

impl Hydrate for ConversationsSelect {
    const KIND: Kind = Kind::ConversationsSelect;

    fn hydrate_fields(&mut self, data: &mut HydrationData) -> Result<(), Error> {
        self.action_id = hydrate_action_id(data)?;
        self.initial_conversation = data.use_str("initial_conversation")?;
        self.response_url_enabled = data.use_bool("response_url_enabled")?;
        self.default_to_current_conversation = data.use_bool("default_to_current_conversation")?;
        self.filter.hydrate(data)?;
        self.placeholder.hydrate(data)?;
        self.confirm.hydrate(data)
    }
}

/// A `multi_external_select` menu, loading its options from the app.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultiExternalSelect {
    pub action_id: Option<String>,
    pub initial_options: Vec<OptionItem>,
    pub min_query_length: Option<u64>,
    pub max_selected_items: Option<u64>,
    pub placeholder: Companion<PlaceholderSlot>,
    pub confirm: Companion<ConfirmSlot>,
    pub extra: Extra,
}

impl MultiExternalSelect {
    pub fn new() -> Self {
        Self::default()
    }

    /// Preselect options given as `(text, value)` pairs.
    pub fn initial_options<T, V>(mut self, options: impl IntoIterator<Item = (T, V)>) -> Self
    where
        T: Into<String>,
        V: Into<String>,
    {
        self.initial_options
            .extend(options.into_iter().map(|(text, value)| OptionItem::new(text, value)));
        self
    }

    pub fn min_query_length(mut self, length: u64) -> Self {
        self.min_query_length = Some(length);
        self
    }

    pub fn max_selected_items(mut self, max: u64) -> Self {
        self.max_selected_items = Some(max);
        self
    }
}

impl Node for MultiExternalSelect {
    fn kind(&self) -> Kind {
        Kind::MultiExternalSelect
    }

    fn extra(&self) -> &Extra {
        &self.extra
    }

    fn extra_mut(&mut self) -> &mut Extra {
        &mut self.extra
    }

    fn validate_in(&self, cx: Context<'_>) -> Result<(), ValidationError> {
        let inner = cx.enter(Kind::MultiExternalSelect);
        validate_menu(
            Kind::MultiExternalSelect,
            self.action_id.as_deref(),
            &self.placeholder,
            &self.confirm,
            inner,
        )?;
        check_positive(
            Kind::MultiExternalSelect,
            "max_selected_items",
            self.max_selected_items,
        )?;
        for option in &self.initial_options {
            option.validate_in(inner)?;
        }
        Ok(())
    }

    fn write_fields(&self, out: &mut FieldWriter<'_>) -> Result<(), ValidationError> {
        write_action_id(out, self.action_id.as_deref());
        if !self.initial_options.is_empty() {
            out.nodes("initial_options", &self.initial_options)?;
        }
        out.field_optional("min_query_length", self.min_query_length);
        out.field_optional("max_selected_items", self.max_selected_items);
        self.placeholder.write(out)?;
        self.confirm.write(out)
    }
}

impl Hydrate for MultiExternalSelect {
    const KIND: Kind = Kind::MultiExternalSelect;

    fn hydrate_fields(&mut self, data: &mut HydrationData) -> Result<(), Error> {
        self.action_id = hydrate_action_id(data)?;
        self.initial_options = data.use_nodes("initial_options")?;
        self.min_query_length = data.use_u64("min_query_length")?;
        self.max_selected_items = data.use_u64("max_selected_items")?;
        self.placeholder.hydrate(data)?;
        self.confirm.hydrate(data)
    }
}

/// A `multi_users_select` menu.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultiUsersSelect {
    pub action_id: Option<String>,
    pub initial_users: Vec<String>,
    pub max_selected_items: Option<u64>,
    pub placeholder: Companion<PlaceholderSlot>,
    pub confirm: Companion<ConfirmSlot>,
    pub extra: Extra,
}

impl MultiUsersSelect {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn initial_users<S: Into<String>>(mut self, users: impl IntoIterator<Item = S>) -> Self {
        self.initial_users = users.into_iter().map(Into::into).collect();
        self
    }

    pub fn max_selected_items(mut self, max: u64) -> Self {
        self.max_selected_items = Some(max);
        self
    }
}

impl Node for MultiUsersSelect {
    fn kind(&self) -> Kind {
        Kind::MultiUsersSelect
    }

    fn extra(&self) -> &Extra {
        &self.extra
    }

    fn extra_mut(&mut self) -> &mut Extra {
        &mut self.extra
    }

    fn validate_in(&self, cx: Context<'_>) -> Result<(), ValidationError> {
        validate_menu(
            Kind::MultiUsersSelect,
            self.action_id.as_deref(),
            &self.placeholder,
            &self.confirm,
            cx.enter(Kind::MultiUsersSelect),
        )?;
        check_positive(
            Kind::MultiUsersSelect,
            "max_selected_items",
            self.max_selected_items,
        )
    }

    fn write_fields(&self, out: &mut FieldWriter<'_>) -> Result<(), ValidationError> {
        write_action_id(out, self.action_id.as_deref());
        write_ids(out, "initial_users", &self.initial_users);
        out.field_optional("max_selected_items", self.max_selected_items);
        self.placeholder.write(out)?;
        self.confirm.write(out)
    }
}

impl Hydrate for MultiUsersSelect {
    const KIND: Kind = Kind::MultiUsersSelect;

    fn hydrate_fields(&mut self, data: &mut HydrationData) -> Result<(), Error> {
        self.action_id = hydrate_action_id(data)?;
        self.initial_users = data.use_strings("initial_users")?;
        self.max_selected_items = data.use_u64("max_selected_items")?;
        self.placeholder.hydrate(data)?;
        self.confirm.hydrate(data)
    }
}

/// A `multi_channels_select` menu.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultiChannelsSelect {
    pub action_id: Option<String>,
    pub initial_channels: Vec<String>,
    pub max_selected_items: Option<u64>,
    pub placeholder: Companion<PlaceholderSlot>,
    pub confirm: Companion<ConfirmSlot>,
    pub extra: Extra,
}

impl MultiChannelsSelect {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn initial_channels<S: Into<String>>(
        mut self,
        channels: impl IntoIterator<Item = S>,
    ) -> Self {
        self.initial_channels = channels.into_iter().map(Into::into).collect();
        self
    }

    pub fn max_selected_items(mut self, max: u64) -> Self {
        self.max_selected_items = Some(max);
        self
    }
}

impl Node for MultiChannelsSelect {
    fn kind(&self) -> Kind {
        Kind::MultiChannelsSelect
    }

    fn extra(&self) -> &Extra {
        &self.extra
    }

    fn extra_mut(&mut self) -> &mut Extra {
        &mut self.extra
    }

    fn validate_in(&self, cx: Context<'_>) -> Result<(), ValidationError> {
        validate_menu(
            Kind::MultiChannelsSelect,
            self.action_id.as_deref(),
            &self.placeholder,
            &self.confirm,
            cx.enter(Kind::MultiChannelsSelect),
        )?;
        check_positive(
            Kind::MultiChannelsSelect,
            "max_selected_items",
            self.max_selected_items,
        )
    }

    fn write_fields(&self, out: &mut FieldWriter<'_>) -> Result<(), ValidationError> {
        write_action_id(out, self.action_id.as_deref());
        write_ids(out, "initial_channels", &self.initial_channels);
        out.field_optional("max_selected_items", self.max_selected_items);
        self.placeholder.write(out)?;
        self.confirm.write(out)
    }
}

impl Hydrate for MultiChannelsSelect {
    const KIND: Kind = Kind::MultiChannelsSelect;

    fn hydrate_fields(&mut self, data: &mut HydrationData) -> Result<(), Error> {
        self.action_id = hydrate_action_id(data)?;
        self.initial_channels = data.use_strings("initial_channels")?;
        self.max_selected_items = data.use_u64("max_selected_items")?;
        self.placeholder.hydrate(data)?;
        self.confirm.hydrate(data)
    }
}

/// A `multi_conversations_select` menu, optionally narrowed by a [`Filter`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultiConversationsSelect {
    pub action_id: Option<String>,
    pub initial_conversations: Vec<String>,
    pub default_to_current_conversation: Option<bool>,
    pub max_selected_items: Option<u64>,
    pub filter: Companion<FilterSlot>,
    pub placeholder: Companion<PlaceholderSlot>,
    pub confirm: Companion<ConfirmSlot>,
    pub extra: Extra,
}

impl MultiConversationsSelect {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn initial_conversations<S: Into<String>>(
        mut self,
        conversations: impl IntoIterator<Item = S>,
    ) -> Self {
        self.initial_conversations = conversations.into_iter().map(Into::into).collect();
        self
    }

    pub fn default_to_current_conversation(mut self, enabled: bool) -> Self {
        self.default_to_current_conversation = Some(enabled);
        self
    }

    pub fn max_selected_items(mut self, max: u64) -> Self {
        self.max_selected_items = Some(max);
        self
    }

    pub fn filter(mut self, filter: Filter) -> Self {
        self.filter.set(filter);
        self
    }
}

impl Node for MultiConversationsSelect {
    fn kind(&self) -> Kind {
        Kind::MultiConversationsSelect
    }

    fn extra(&self) -> &Extra {
        &self.extra
    }

    fn extra_mut(&mut self) -> &mut Extra {
        &mut self.extra
    }

    fn validate_in(&self, cx: Context<'_>) -> Result<(), ValidationError> {
        let inner = cx.enter(Kind::MultiConversationsSelect);
        validate_menu(
            Kind::MultiConversationsSelect,
            self.action_id.as_deref(),
            &self.placeholder,
            &self.confirm,
            inner,
        )?;
        check_positive(
            Kind::MultiConversationsSelect,
            "max_selected_items",
            self.max_selected_items,
        )?;
        self.filter.validate(Kind::MultiConversationsSelect, inner)
    }

    fn write_fields(&self, out: &mut FieldWriter<'_>) -> Result<(), ValidationError> {
        write_action_id(out, self.action_id.as_deref());
        write_ids(out, "initial_conversations", &self.initial_conversations);
        out.field_optional(
            "default_to_current_conversation",
            self.default_to_current_conversation,
        );
        out.field_optional("max_selected_items", self.max_selected_items);
        self.filter.write(out)?;
        self.placeholder.write(out)?;
        self.confirm.write(out)
    }
}

impl Hydrate for MultiConversationsSelect {
    const KIND: Kind = Kind::MultiConversationsSelect;

    fn hydrate_fields(&mut self, data: &mut HydrationData) -> Result<(), Error> {
        self.action_id = hydrate_action_id(data)?;
        self.initial_conversations = data.use_strings("initial_conversations")?;
        self.default_to_current_conversation = data.use_bool("default_to_current_conversation")?;
        self.max_selected_items = data.use_u64("max_selected_items")?;
        self.filter.hydrate(data)?;
        self.placeholder.hydrate(data)?;
        self.confirm.hydrate(data)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::composition::ConversationType;

    #[test]
    fn test_placeholder_is_required() {
        let select = StaticSelect::new().option("A", "a", false);
        assert_eq!(
            select.validate().unwrap_err(),
            ValidationErrorKind::MissingField("placeholder").at(Kind::StaticSelect)
        );
        assert!(select.placeholder("Pick").validate().is_ok());
    }

    #[test]
    fn test_static_select_with_groups() {
        let json = StaticSelect::new()
            .action_id("size")
            .placeholder("Size")
            .option_group("Small", [("XS", "xs"), ("S", "s")])
            .option_group("Large", [("L", "l")])
            .to_json()
            .unwrap();
        assert_eq!(json["option_groups"].as_array().unwrap().len(), 2);
        assert!(json.get("options").is_none());
        assert_eq!(
            json["option_groups"][0]["label"],
            json!({"type": "plain_text", "text": "Small", "emoji": false})
        );
    }

    #[test]
    fn test_static_select_single_initial() {
        let json = StaticSelect::new()
            .placeholder("Size")
            .option("S", "s", false)
            .option("M", "m", true)
            .to_json()
            .unwrap();
        assert_eq!(json["initial_option"]["value"], json!("m"));
    }

    #[test]
    fn test_multi_select_initial_options_list() {
        let select = MultiStaticSelect::new()
            .placeholder("Toppings")
            .option("Cheese", "cheese", true)
            .option("Olives", "olives", true)
            .max_selected_items(2);
        let json = select.to_json().unwrap();
        assert_eq!(json["initial_options"].as_array().unwrap().len(), 2);
        assert_eq!(json["max_selected_items"], json!(2));
        assert_eq!(MultiStaticSelect::from_value(json).unwrap(), select);
    }

    #[test]
    fn test_multi_select_zero_max_selected() {
        let err = MultiStaticSelect::new()
            .placeholder("Toppings")
            .option("Cheese", "cheese", false)
            .max_selected_items(0)
            .validate()
            .unwrap_err();
        assert!(matches!(
            err.kind,
            ValidationErrorKind::InvalidValue {
                field: "max_selected_items",
                ..
            }
        ));
    }

    #[test]
    fn test_external_select_output() {
        assert_eq!(
            ExternalSelect::new()
                .action_id("ticket")
                .placeholder("Ticket")
                .initial_option("BUG-1", "1")
                .min_query_length(3)
                .to_json()
                .unwrap(),
            json!({
                "type": "external_select",
                "action_id": "ticket",
                "initial_option": {
                    "text": {"type": "plain_text", "text": "BUG-1"},
                    "value": "1"
                },
                "min_query_length": 3,
                "placeholder": {"type": "plain_text", "text": "Ticket"}
            })
        );
    }

    #[test]
    fn test_conversations_select_filter() {
        let select = ConversationsSelect::new()
            .placeholder("Where?")
            .default_to_current_conversation(true)
            .filter(Filter::new().include(ConversationType::Public));
        let json = select.to_json().unwrap();
        assert_eq!(json["filter"], json!({"include": ["public"]}));
        assert_eq!(ConversationsSelect::from_value(json).unwrap(), select);

        let empty_filter = ConversationsSelect::new()
            .placeholder("Where?")
            .filter(Filter::new());
        assert_eq!(empty_filter.validate().unwrap_err().node, Kind::Filter);
    }

    #[test]
    fn test_users_and_channels_round_trip() {
        let users = UsersSelect::new().placeholder("Who?").initial_user("U123");
        assert_eq!(
            UsersSelect::from_value(users.to_json().unwrap()).unwrap(),
            users
        );

        let channels = ChannelsSelect::new()
            .placeholder("Where?")
            .initial_channel("C123")
            .response_url_enabled(true);
        assert_eq!(
            ChannelsSelect::from_value(channels.to_json().unwrap()).unwrap(),
            channels
        );
    }

    #[test]
    fn test_multi_users_and_channels_round_trip() {
        let users = MultiUsersSelect::new()
            .action_id("reviewers")
            .placeholder("Reviewers")
            .initial_users(["U1", "U2"])
            .max_selected_items(3);
        let json = users.to_json().unwrap();
        assert_eq!(
            json,
            json!({
                "type": "multi_users_select",
                "action_id": "reviewers",
                "initial_users": ["U1", "U2"],
                "max_selected_items": 3,
                "placeholder": {"type": "plain_text", "text": "Reviewers"}
            })
        );
        assert_eq!(MultiUsersSelect::from_value(json).unwrap(), users);

        let channels = MultiChannelsSelect::new()
            .placeholder("Channels")
            .initial_channels(["C1"]);
        assert_eq!(
            MultiChannelsSelect::from_value(channels.to_json().unwrap()).unwrap(),
            channels
        );
    }

    #[test]
    fn test_multi_select_empty_initial_ids_are_omitted() {
        let json = MultiChannelsSelect::new()
            .placeholder("Channels")
            .to_json()
            .unwrap();
        assert!(json.get("initial_channels").is_none());
    }

    #[test]
    fn test_multi_conversations_select_filter() {
        let select = MultiConversationsSelect::new()
            .placeholder("Where?")
            .initial_conversations(["C1", "D2"])
            .default_to_current_conversation(true)
            .filter(Filter::new().include(ConversationType::Im));
        let json = select.to_json().unwrap();
        assert_eq!(json["filter"], json!({"include": ["im"]}));
        assert_eq!(json["initial_conversations"], json!(["C1", "D2"]));
        assert_eq!(MultiConversationsSelect::from_value(json).unwrap(), select);

        let err = MultiConversationsSelect::new()
            .placeholder("Where?")
            .max_selected_items(0)
            .validate()
            .unwrap_err();
        assert_eq!(err.node, Kind::MultiConversationsSelect);
    }

    #[test]
    fn test_multi_external_select_initial_options() {
        let select = MultiExternalSelect::new()
            .action_id("tickets")
            .placeholder("Tickets")
            .initial_options([("BUG-1", "1"), ("BUG-2", "2")])
            .min_query_length(2);
        let json = select.to_json().unwrap();
        assert_eq!(json["initial_options"][1]["value"], json!("2"));
        assert_eq!(json["min_query_length"], json!(2));
        assert_eq!(MultiExternalSelect::from_value(json).unwrap(), select);

        assert!(
            MultiExternalSelect::new()
                .initial_options([("BUG-1", "1")])
                .validate()
                .is_err()
        );
    }
}
