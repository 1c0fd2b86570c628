//! The registry of node kinds and their wire discriminators.

use core::fmt::{self, Display};
use core::str::FromStr;

use crate::error::UnknownDiscriminator;

/// Declares the closed set of kinds.
///
/// A repeated variant is a duplicate definition and a repeated tag is an
/// unreachable match arm, so both fail to compile.
macro_rules! kinds {
    ($( $(#[$meta:meta])* $variant:ident => $tag:literal ),* $(,)?) => {
        /// Concrete node kind, mapped one-to-one to its `type` discriminator.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Kind {
            $( $(#[$meta])* $variant, )*
        }

        impl Kind {
            /// Every registered kind, in declaration order.
            pub const ALL: &'static [Kind] = &[$(Kind::$variant),*];

            /// The wire discriminator of this kind.
            pub const fn tag(self) -> &'static str {
                match self {
                    $(Kind::$variant => $tag,)*
                }
            }

            /// Resolve a wire discriminator, if registered.
            #[deny(unreachable_patterns)]
            pub fn from_tag(tag: &str) -> Option<Kind> {
                match tag {
                    $($tag => Some(Kind::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

kinds! {
    // Surfaces
    AppHome => "home",
    Message => "message",
    Modal => "modal",
    WorkflowStep => "workflow_step",

    // Blocks
    Actions => "actions",
    Context => "context",
    Divider => "divider",
    File => "file",
    Header => "header",
    /// Used as a block, a section accessory and a context element.
    Image => "image",
    Input => "input",
    Section => "section",

    // Interactive elements
    Button => "button",
    Checkboxes => "checkboxes",
    DatePicker => "datepicker",
    NumberInput => "number_input",
    OverflowMenu => "overflow",
    RadioButtons => "radio_buttons",
    TextInput => "plain_text_input",
    TimePicker => "timepicker",

    // Select menus
    ChannelsSelect => "channels_select",
    ConversationsSelect => "conversations_select",
    ExternalSelect => "external_select",
    MultiChannelsSelect => "multi_channels_select",
    MultiConversationsSelect => "multi_conversations_select",
    MultiExternalSelect => "multi_external_select",
    MultiStaticSelect => "multi_static_select",
    MultiUsersSelect => "multi_users_select",
    StaticSelect => "static_select",
    UsersSelect => "users_select",

    // Composition objects
    Confirm => "confirm",
    DispatchActionConfig => "dispatch_action_config",
    Filter => "filter",
    MrkdwnText => "mrkdwn",
    Option => "option",
    OptionGroup => "option_group",
    PlainText => "plain_text",
}

impl Kind {
    /// Bare kinds omit their discriminator from serialized output.
    pub const fn is_bare(self) -> bool {
        matches!(
            self,
            Kind::Confirm
                | Kind::DispatchActionConfig
                | Kind::Filter
                | Kind::Message
                | Kind::Option
                | Kind::OptionGroup
        )
    }

    /// Top-level documents.
    pub const fn is_surface(self) -> bool {
        matches!(
            self,
            Kind::AppHome | Kind::Message | Kind::Modal | Kind::WorkflowStep
        )
    }

    /// Kinds accepted as a section accessory.
    pub const fn is_accessory(self) -> bool {
        matches!(
            self,
            Kind::Button
                | Kind::Checkboxes
                | Kind::DatePicker
                | Kind::Image
                | Kind::MultiChannelsSelect
                | Kind::MultiConversationsSelect
                | Kind::MultiExternalSelect
                | Kind::MultiStaticSelect
                | Kind::MultiUsersSelect
                | Kind::OverflowMenu
                | Kind::RadioButtons
                | Kind::ChannelsSelect
                | Kind::ConversationsSelect
                | Kind::ExternalSelect
                | Kind::StaticSelect
                | Kind::UsersSelect
                | Kind::TextInput
                | Kind::TimePicker
        )
    }

    /// Kinds accepted in an actions block.
    pub const fn is_action_element(self) -> bool {
        matches!(
            self,
            Kind::Button
                | Kind::Checkboxes
                | Kind::DatePicker
                | Kind::OverflowMenu
                | Kind::RadioButtons
                | Kind::ChannelsSelect
                | Kind::ConversationsSelect
                | Kind::ExternalSelect
                | Kind::StaticSelect
                | Kind::UsersSelect
                | Kind::TextInput
                | Kind::TimePicker
        )
    }

    /// Kinds accepted as the element of an input block.
    pub const fn is_input_element(self) -> bool {
        matches!(
            self,
            Kind::Checkboxes
                | Kind::DatePicker
                | Kind::MultiChannelsSelect
                | Kind::MultiConversationsSelect
                | Kind::MultiExternalSelect
                | Kind::MultiStaticSelect
                | Kind::MultiUsersSelect
                | Kind::RadioButtons
                | Kind::ChannelsSelect
                | Kind::ConversationsSelect
                | Kind::ExternalSelect
                | Kind::StaticSelect
                | Kind::UsersSelect
                | Kind::TextInput
                | Kind::TimePicker
                | Kind::NumberInput
        )
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Kind {
    type Err = UnknownDiscriminator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Kind::from_tag(s).ok_or_else(|| UnknownDiscriminator {
            discriminator: s.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_tag_round_trips_through_registry() {
        for &kind in Kind::ALL {
            assert_eq!(kind.tag().parse::<Kind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_tags_are_unique() {
        let tags: HashSet<_> = Kind::ALL.iter().map(|k| k.tag()).collect();
        assert_eq!(tags.len(), Kind::ALL.len());
    }

    #[test]
    fn test_unknown_tag() {
        let err = "carousel".parse::<Kind>().unwrap_err();
        assert_eq!(err.discriminator, "carousel");
        assert_eq!(err.to_string(), "unknown \"type\" discriminator: carousel");
    }

    #[test]
    fn test_bare_kinds() {
        assert!(Kind::Confirm.is_bare());
        assert!(Kind::Message.is_bare());
        assert!(!Kind::Modal.is_bare());
        assert!(!Kind::PlainText.is_bare());
    }

    #[test]
    fn test_number_input_is_input_only() {
        assert!(Kind::NumberInput.is_input_element());
        assert!(!Kind::NumberInput.is_action_element());
        assert!(!Kind::NumberInput.is_accessory());
    }

    #[test]
    fn test_multi_menus_are_not_action_elements() {
        for kind in [
            Kind::MultiChannelsSelect,
            Kind::MultiConversationsSelect,
            Kind::MultiExternalSelect,
            Kind::MultiStaticSelect,
            Kind::MultiUsersSelect,
        ] {
            assert!(kind.is_accessory(), "{kind}");
            assert!(kind.is_input_element(), "{kind}");
            assert!(!kind.is_action_element(), "{kind}");
        }
    }
}
