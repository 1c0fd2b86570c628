use crate::config::Config;
use crate::kind::Kind;

/// Position of a node in the tree, handed down while validating and serializing.
///
/// Stands in for a parent back-reference: a child sees the kind of its nearest
/// container and the active [`Config`], nothing else.
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    config: &'a Config,
    parent: Option<Kind>,
}

impl<'a> Context<'a> {
    /// Context of a root node.
    pub fn root(config: &'a Config) -> Self {
        Self {
            config,
            parent: None,
        }
    }

    /// Context for the children of a node of kind `parent`.
    pub fn enter(self, parent: Kind) -> Self {
        Self {
            config: self.config,
            parent: Some(parent),
        }
    }

    /// Kind of the containing node, `None` at the root.
    pub fn parent(&self) -> Option<Kind> {
        self.parent
    }

    pub fn config(&self) -> &'a Config {
        self.config
    }
}

impl Default for Context<'static> {
    fn default() -> Self {
        Context::root(&Config::DEFAULT)
    }
}
