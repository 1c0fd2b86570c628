mod actions;
mod context;
mod divider;
mod file;
mod header;
mod input;
mod section;

pub use actions::Actions;
pub use context::{ContextBlock, ContextElement};
pub use divider::Divider;
pub use file::{DEFAULT_FILE_SOURCE, File};
pub use header::Header;
pub use input::InputBlock;
pub use section::Section;

pub use crate::element::Image;

use crate::prelude_internal::*;
use crate::union::node_union;

/// Longest accepted `block_id`.
pub const MAX_BLOCK_ID: usize = 255;

pub(crate) fn validate_block_id(owner: Kind, block_id: Option<&str>) -> Result<(), ValidationError> {
    match block_id.filter(|id| !id.is_empty()) {
        Some(id) => {
            validate_string("block_id", id, 1, Some(MAX_BLOCK_ID)).map_err(|err| err.at(owner))
        }
        None => Ok(()),
    }
}

/// Empty ids are treated as unset.
pub(crate) fn write_block_id(out: &mut FieldWriter<'_>, block_id: Option<&str>) {
    out.field_optional("block_id", block_id.filter(|id| !id.is_empty()));
}

pub(crate) fn hydrate_block_id(data: &mut HydrationData) -> Result<Option<String>, Error> {
    Ok(data.use_str("block_id")?.filter(|id| !id.is_empty()))
}

node_union! {
    /// Any block that can be placed in a surface.
    pub enum Block as "block" {
        Actions(Actions),
        Context(ContextBlock),
        Divider(Divider),
        File(File),
        Header(Header),
        Image(Image),
        Input(InputBlock),
        Section(Section),
    }
}

impl Block {
    pub fn block_id(&self) -> Option<&str> {
        match self {
            Block::Actions(b) => b.block_id.as_deref(),
            Block::Context(b) => b.block_id.as_deref(),
            Block::Divider(b) => b.block_id.as_deref(),
            Block::File(b) => b.block_id.as_deref(),
            Block::Header(b) => b.block_id.as_deref(),
            Block::Image(b) => b.block_id.as_deref(),
            Block::Input(b) => b.block_id.as_deref(),
            Block::Section(b) => b.block_id.as_deref(),
        }
        .filter(|id| !id.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_parse_resolves_block_kind() {
        let block = Block::from_value(json!({
            "type": "header",
            "block_id": "title",
            "text": {"type": "plain_text", "text": "Weekly report"}
        }))
        .unwrap();
        assert_eq!(block.kind(), Kind::Header);
        assert_eq!(block.block_id(), Some("title"));
    }

    #[test]
    fn test_parse_rejects_elements() {
        let err = Block::from_value(json!({"type": "button"})).unwrap_err();
        assert_eq!(err.to_string(), "expected block, found button");
    }

    #[test]
    fn test_block_id_length() {
        let divider = Divider::new().block_id("b".repeat(MAX_BLOCK_ID + 1));
        assert_eq!(
            divider.validate().unwrap_err(),
            ValidationErrorKind::TooLong {
                field: "block_id",
                max: MAX_BLOCK_ID
            }
            .at(Kind::Divider)
        );
    }

    #[test]
    fn test_empty_block_id_is_unset() {
        let json = Divider::new().block_id("").to_json().unwrap();
        assert_eq!(json, json!({"type": "divider"}));
    }
}
