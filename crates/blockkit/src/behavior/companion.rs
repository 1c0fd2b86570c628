use core::fmt::Debug;

use crate::composition::{Confirm, Filter};
use crate::prelude_internal::*;

/// What a [`Companion`] holds, where it is written, and any extra rule.
pub trait SlotPolicy {
    type Node: Node + Parse + Debug + Clone + PartialEq;

    /// Field name in the owner's JSON object.
    const FIELD: &'static str;

    /// Rule applied on top of the node's own validation.
    fn check(_owner: Kind, _node: &Self::Node) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// The `confirm` dialog of an interactive element.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ConfirmSlot;

impl SlotPolicy for ConfirmSlot {
    type Node = Confirm;
    const FIELD: &'static str = "confirm";
}

/// The `placeholder` text of an input element, at most 150 characters.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlaceholderSlot;

impl SlotPolicy for PlaceholderSlot {
    type Node = PlainText;
    const FIELD: &'static str = "placeholder";

    fn check(owner: Kind, node: &PlainText) -> Result<(), ValidationError> {
        validate_string("placeholder", node.as_str(), 1, Some(150)).map_err(|err| err.at(owner))
    }
}

/// The conversation `filter` of a conversations select.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FilterSlot;

impl SlotPolicy for FilterSlot {
    type Node = Filter;
    const FIELD: &'static str = "filter";
}

/// A single optional sub-node, written under a fixed field.
///
/// Absent companions are skipped by validation and contribute nothing to the
/// output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Companion<P: SlotPolicy> {
    node: Option<P::Node>,
}

impl<P: SlotPolicy> Companion<P> {
    pub fn new(node: P::Node) -> Self {
        Self { node: Some(node) }
    }

    pub fn set(&mut self, node: P::Node) {
        self.node = Some(node);
    }

    pub fn get(&self) -> Option<&P::Node> {
        self.node.as_ref()
    }

    pub fn take(&mut self) -> Option<P::Node> {
        self.node.take()
    }

    pub fn is_some(&self) -> bool {
        self.node.is_some()
    }

    /// `cx` is the context of the owner's children.
    pub fn validate(&self, owner: Kind, cx: Context<'_>) -> Result<(), ValidationError> {
        match &self.node {
            Some(node) => {
                node.validate_in(cx)?;
                P::check(owner, node)
            }
            None => Ok(()),
        }
    }

    pub fn write(&self, out: &mut FieldWriter<'_>) -> Result<(), ValidationError> {
        out.node_optional(P::FIELD, self.node.as_ref())
    }

    pub fn hydrate(&mut self, data: &mut HydrationData) -> Result<(), Error> {
        self.node = data.use_node(P::FIELD)?;
        Ok(())
    }
}

/// By-value confirm builders.
pub trait HasConfirm: Sized {
    fn confirm_slot(&mut self) -> &mut Companion<ConfirmSlot>;

    fn set_confirm(mut self, confirm: Confirm) -> Self {
        self.confirm_slot().set(confirm);
        self
    }

    /// Attach a dialog with the default "OK" / "Cancel" buttons.
    fn confirm(self, title: impl Into<String>, text: impl Into<String>) -> Self {
        self.set_confirm(Confirm::new(title, text))
    }
}

/// By-value placeholder builders.
pub trait HasPlaceholder: Sized {
    fn placeholder_slot(&mut self) -> &mut Companion<PlaceholderSlot>;

    fn set_placeholder(mut self, placeholder: PlainText) -> Self {
        self.placeholder_slot().set(placeholder);
        self
    }

    fn placeholder(self, placeholder: impl Into<String>) -> Self {
        self.set_placeholder(PlainText::new(placeholder))
    }
}
