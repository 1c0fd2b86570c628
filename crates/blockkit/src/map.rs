use core::borrow::Borrow;
use core::hash::Hash;

use indexmap::IndexMap;
use serde_json::Value;
use thisisplural::Plural;

use crate::any::AnyNode;
use crate::node::ExtraValue;

/// Insertion-ordered map. Iteration follows first insertion.
#[derive(Debug, Clone, Plural)]
#[plural(len, is_empty, iter, into_iter, into_iter_ref, new)]
pub struct Map<K, V>(IndexMap<K, V>);

impl<K: Eq + Hash, V: PartialEq> PartialEq for Map<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<K: Eq + Hash, V> FromIterator<(K, V)> for Map<K, V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<K, V> Default for Map<K, V> {
    fn default() -> Self {
        Self(IndexMap::new())
    }
}

impl<K: Eq + Hash, V> Map<K, V> {
    pub fn get<Q: Eq + Hash + ?Sized>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
    {
        self.0.get(key)
    }

    /// A replaced key keeps its original position.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.0.insert(key, value)
    }

    /// Preserves the order of the remaining keys.
    pub fn remove<Q: Eq + Hash + ?Sized>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
    {
        self.0.shift_remove(key)
    }

    pub fn contains_key<Q: Eq + Hash + ?Sized>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
    {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.0.keys()
    }
}

impl Map<String, ExtraValue> {
    /// The raw JSON of a passthrough field, if it holds JSON rather than a node.
    pub fn get_json(&self, key: &str) -> Option<&Value> {
        match self.get(key)? {
            ExtraValue::Json(value) => Some(value),
            ExtraValue::Node(_) => None,
        }
    }

    pub fn get_node(&self, key: &str) -> Option<&AnyNode> {
        match self.get(key)? {
            ExtraValue::Node(node) => Some(node),
            ExtraValue::Json(_) => None,
        }
    }
}
