//! The node contract: validate, serialize, parse.

use serde_json::Value;
use tracing::{debug, trace};

use crate::JsonMap;
use crate::any::AnyNode;
use crate::config::Config;
use crate::context::Context;
use crate::error::{Error, HydrationError, TypeMismatch, ValidationError};
use crate::hydrate::{HydrationData, shape_of};
use crate::kind::Kind;
use crate::map::Map;

/// Opaque passthrough fields of a node, echoed on serialization.
pub type Extra = Map<String, ExtraValue>;

/// A passthrough field value.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtraValue {
    Json(Value),
    /// Serialized recursively, in the context of the owning node.
    Node(Box<AnyNode>),
}

impl From<Value> for ExtraValue {
    fn from(value: Value) -> Self {
        ExtraValue::Json(value)
    }
}

impl From<AnyNode> for ExtraValue {
    fn from(node: AnyNode) -> Self {
        ExtraValue::Node(Box::new(node))
    }
}

/// Whether a `type` extra may be written for `kind`.
///
/// Only bare kinds echo one, and only when it names the kind itself. The
/// discriminator of other kinds always comes from [`Node::kind`].
fn echoes_tag(kind: Kind, value: &ExtraValue) -> bool {
    kind.is_bare() && matches!(value, ExtraValue::Json(Value::String(tag)) if tag == kind.tag())
}

/// A unit of the document tree.
///
/// Implementors provide [`validate_in`](Node::validate_in) and
/// [`write_fields`](Node::write_fields); everything else is derived.
pub trait Node {
    fn kind(&self) -> Kind;

    fn extra(&self) -> &Extra;

    fn extra_mut(&mut self) -> &mut Extra;

    /// Check this node and everything it owns. `cx` describes where the node
    /// sits; children are checked in `cx.enter(self.kind())`.
    fn validate_in(&self, cx: Context<'_>) -> Result<(), ValidationError>;

    /// Emit the kind-specific fields. Runs after validation succeeded.
    fn write_fields(&self, out: &mut FieldWriter<'_>) -> Result<(), ValidationError>;

    /// Validate this node as a root.
    fn validate(&self) -> Result<(), ValidationError> {
        self.validate_in(Context::default())
    }

    /// Validate, then build the canonical JSON object, as a root.
    fn serialize(&self) -> Result<JsonMap, ValidationError> {
        self.serialize_with(&Config::DEFAULT)
    }

    fn serialize_with(&self, config: &Config) -> Result<JsonMap, ValidationError> {
        self.serialize_in(Context::root(config))
    }

    /// Serialize at a position in the tree. Used by containers for children.
    fn serialize_in(&self, cx: Context<'_>) -> Result<JsonMap, ValidationError> {
        self.validate_in(cx)?;
        let kind = self.kind();
        let mut out = FieldWriter::new(cx, kind);
        if !kind.is_bare() {
            out.field("type", kind.tag());
        }
        for (key, value) in self.extra() {
            if key == "type" && !echoes_tag(kind, value) {
                continue;
            }
            match value {
                ExtraValue::Json(json) => out.field(key, json.clone()),
                ExtraValue::Node(node) => out.node(key, node.as_ref())?,
            }
        }
        self.write_fields(&mut out)?;
        Ok(out.finish())
    }

    fn to_json(&self) -> Result<Value, ValidationError> {
        self.serialize().map(Value::Object)
    }

    fn to_json_string(&self, pretty: bool) -> Result<String, Error> {
        let value = self.to_json()?;
        let json = if pretty {
            serde_json::to_string_pretty(&value)?
        } else {
            serde_json::to_string(&value)?
        };
        Ok(json)
    }

    /// Set a passthrough field.
    fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self
    where
        Self: Sized,
    {
        self.extra_mut()
            .insert(key.into(), ExtraValue::Json(value.into()));
        self
    }

    /// Set a passthrough field holding a node.
    fn with_extra_node(mut self, key: impl Into<String>, node: impl Into<AnyNode>) -> Self
    where
        Self: Sized,
    {
        self.extra_mut()
            .insert(key.into(), ExtraValue::from(node.into()));
        self
    }

    /// Run `f` on this node inside a builder chain.
    fn tap(mut self, f: impl FnOnce(&mut Self)) -> Self
    where
        Self: Sized,
    {
        f(&mut self);
        self
    }

    fn tap_if(self, condition: bool, f: impl FnOnce(&mut Self)) -> Self
    where
        Self: Sized,
    {
        if condition { self.tap(f) } else { self }
    }
}

/// A concrete node kind that can be filled in from raw JSON.
pub trait Hydrate: Node + Default {
    const KIND: Kind;

    /// Consume the kind-specific keys from `data`.
    fn hydrate_fields(&mut self, data: &mut HydrationData) -> Result<(), Error>;

    /// Hydrate a fresh node: the kind's fields, then the extras, then
    /// validation. Nothing is returned unless every step succeeds.
    fn hydrate(mut data: HydrationData) -> Result<Self, Error> {
        match data.get("type") {
            // Absent or null; a null discriminator is dropped.
            None => {
                data.use_value("type");
            }
            Some(Value::String(tag)) => {
                if tag != Self::KIND.tag() {
                    return Err(HydrationError::KindConflict {
                        found: tag.clone(),
                        kind: Self::KIND,
                    }
                    .into());
                }
                // Bare kinds keep the key so it is echoed back as an extra.
                if !Self::KIND.is_bare() {
                    data.use_value("type");
                }
            }
            Some(other) => {
                return Err(HydrationError::InvalidDiscriminator {
                    found: shape_of(other),
                }
                .into());
            }
        }

        let mut node = Self::default();
        node.hydrate_fields(&mut data)?;

        let extras = data.into_extras();
        if !extras.is_empty() {
            trace!(kind = %Self::KIND, keys = ?extras.keys().collect::<Vec<_>>(), "collected extras");
        }
        let bag = node.extra_mut();
        for (key, value) in extras {
            bag.insert(key, ExtraValue::Json(value));
        }

        node.validate()?;
        debug!(kind = %Self::KIND, "hydrated node");
        Ok(node)
    }
}

/// Types that can be parsed from JSON of unknown concrete shape.
///
/// Every [`Hydrate`] kind is parseable as itself; category unions such as
/// [`Element`](crate::element::Element) accept any of their member kinds.
pub trait Parse: Sized {
    /// Name of the expected kind or category, for error messages.
    fn expected() -> &'static str;

    fn accepts(kind: Kind) -> bool;

    /// Kind to hydrate when the input carries no `type` key.
    fn implied_kind() -> Option<Kind>;

    /// Hydrate `data` as the already resolved `kind`.
    fn hydrate_as(kind: Kind, data: JsonMap) -> Result<Self, Error>;

    fn from_map(data: JsonMap) -> Result<Self, Error> {
        let kind = match data.get("type").filter(|value| !value.is_null()) {
            None => Self::implied_kind().ok_or(HydrationError::MissingDiscriminator {
                expected: Self::expected(),
            })?,
            Some(Value::String(tag)) => {
                let kind: Kind = tag.parse()?;
                debug!(%kind, expected = Self::expected(), "resolved discriminator");
                if !Self::accepts(kind) {
                    return Err(TypeMismatch {
                        resolved: kind,
                        expected: Self::expected(),
                    }
                    .into());
                }
                kind
            }
            Some(other) => {
                return Err(HydrationError::InvalidDiscriminator {
                    found: shape_of(other),
                }
                .into());
            }
        };
        Self::hydrate_as(kind, data)
    }

    fn from_value(value: Value) -> Result<Self, Error> {
        match value {
            Value::Object(map) => Self::from_map(map),
            other => Err(HydrationError::NotAnObject {
                found: shape_of(&other),
            }
            .into()),
        }
    }

    fn from_json_str(json: &str) -> Result<Self, Error> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }
}

impl<T: Hydrate> Parse for T {
    fn expected() -> &'static str {
        T::KIND.tag()
    }

    fn accepts(kind: Kind) -> bool {
        kind == T::KIND
    }

    fn implied_kind() -> Option<Kind> {
        Some(T::KIND)
    }

    fn hydrate_as(_kind: Kind, data: JsonMap) -> Result<Self, Error> {
        T::hydrate(HydrationData::new(data))
    }
}

/// Builds the JSON object of one node.
///
/// Nested nodes written through it see the written node as their parent.
///
/// # Example
///
/// ```ignore
/// fn write_fields(&self, out: &mut FieldWriter<'_>) -> Result<(), ValidationError> {
///     out.node_optional("text", self.text.as_ref())?;
///     out.field_optional("value", self.value.as_deref());
///     Ok(())
/// }
/// ```
#[must_use]
pub struct FieldWriter<'a> {
    out: JsonMap,
    position: Context<'a>,
    cx: Context<'a>,
}

impl<'a> FieldWriter<'a> {
    /// Writer for a node of `kind` placed at `position`.
    pub(crate) fn new(position: Context<'a>, kind: Kind) -> Self {
        Self {
            out: JsonMap::new(),
            position,
            cx: position.enter(kind),
        }
    }

    /// Context of the node being written.
    pub fn position(&self) -> Context<'a> {
        self.position
    }

    /// Context handed to nested nodes.
    pub fn context(&self) -> Context<'a> {
        self.cx
    }

    pub fn config(&self) -> &'a Config {
        self.cx.config()
    }

    /// Write a field, replacing any earlier value under the same name.
    pub fn field(&mut self, name: &str, value: impl Into<Value>) {
        self.out.insert(name.to_string(), value.into());
    }

    /// Write a field only when it is set.
    pub fn field_optional<T: Into<Value>>(&mut self, name: &str, value: Option<T>) {
        if let Some(value) = value {
            self.field(name, value);
        }
    }

    pub fn node<N: Node + ?Sized>(&mut self, name: &str, node: &N) -> Result<(), ValidationError> {
        let value = node.serialize_in(self.cx)?;
        self.field(name, Value::Object(value));
        Ok(())
    }

    pub fn node_optional<N: Node>(
        &mut self,
        name: &str,
        node: Option<&N>,
    ) -> Result<(), ValidationError> {
        match node {
            Some(node) => self.node(name, node),
            None => Ok(()),
        }
    }

    /// Write a list of nodes, even when empty.
    pub fn nodes<'n, N: Node + 'n>(
        &mut self,
        name: &str,
        nodes: impl IntoIterator<Item = &'n N>,
    ) -> Result<(), ValidationError> {
        let items = nodes
            .into_iter()
            .map(|node| node.serialize_in(self.cx).map(Value::Object))
            .collect::<Result<Vec<_>, _>>()?;
        self.field(name, Value::Array(items));
        Ok(())
    }

    pub fn finish(self) -> JsonMap {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::block::Divider;
    use crate::composition::{Confirm, PlainText};

    #[test]
    fn test_null_type_is_dropped() {
        let text = PlainText::from_value(json!({"type": null, "text": "x"})).unwrap();
        assert!(text.extra().is_empty());
        assert_eq!(
            text.to_json().unwrap(),
            json!({"type": "plain_text", "text": "x"})
        );
        let divider = Divider::from_value(json!({"type": null})).unwrap();
        assert_eq!(divider.to_json().unwrap(), json!({"type": "divider"}));
    }

    #[test]
    fn test_type_extra_cannot_replace_tag() {
        let json = Divider::new()
            .with_extra("type", json!("button"))
            .to_json()
            .unwrap();
        assert_eq!(json, json!({"type": "divider"}));
    }

    #[test]
    fn test_bare_kind_echoes_only_its_own_tag() {
        let confirm = Confirm::new("Sure?", "Go?");
        let echoed = confirm.clone().with_extra("type", json!("confirm"));
        assert_eq!(echoed.to_json().unwrap()["type"], json!("confirm"));
        let foreign = confirm.with_extra("type", json!("button")).to_json().unwrap();
        assert!(foreign.get("type").is_none());
    }

    #[test]
    fn test_kind_conflict_on_direct_hydration() {
        let data = |value: Value| match value {
            Value::Object(map) => HydrationData::new(map),
            _ => unreachable!(),
        };
        assert_eq!(
            PlainText::hydrate(data(json!({"type": "mrkdwn", "text": "x"}))).unwrap_err(),
            Error::Hydration(HydrationError::KindConflict {
                found: "mrkdwn".to_string(),
                kind: Kind::PlainText,
            })
        );
        assert_eq!(
            Confirm::hydrate(data(json!({"type": "option"}))).unwrap_err(),
            Error::Hydration(HydrationError::KindConflict {
                found: "option".to_string(),
                kind: Kind::Confirm,
            })
        );
    }
}
