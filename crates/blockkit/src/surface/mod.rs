mod block_list;
mod message;
mod view;
mod workflow_step;

pub use block_list::{BlockList, BlockRules, HasBlocks};
pub use message::{Message, MessageDirective};
pub use view::{AppHome, HasViewFields, Modal, ViewFields};
pub use workflow_step::WorkflowStep;

use crate::union::node_union;

node_union! {
    /// Any top-level document.
    pub enum Surface as "surface" {
        AppHome(AppHome),
        Message(Message),
        Modal(Modal),
        WorkflowStep(WorkflowStep),
    }
}

impl Surface {
    pub fn blocks(&self) -> &BlockList {
        match self {
            Surface::AppHome(s) => &s.blocks,
            Surface::Message(s) => &s.blocks,
            Surface::Modal(s) => &s.blocks,
            Surface::WorkflowStep(s) => &s.blocks,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::Error;
    use crate::kind::Kind;
    use crate::node::{Node, Parse};

    #[test]
    fn test_parse_surface_by_type() {
        let surface = Surface::from_value(json!({
            "type": "home",
            "blocks": [{"type": "divider"}]
        }))
        .unwrap();
        assert_eq!(surface.kind(), Kind::AppHome);
        assert_eq!(surface.blocks().len(), 1);
    }

    #[test]
    fn test_blocks_are_not_surfaces() {
        let err = Surface::from_value(json!({"type": "section"})).unwrap_err();
        assert!(matches!(err, Error::TypeMismatch(_)));
    }
}
