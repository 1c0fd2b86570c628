use indexmap::IndexMap;

use crate::block::{Block, ContextBlock, Divider, Header, Section};
use crate::prelude_internal::*;

/// Placement rules of a surface's block list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockRules {
    pub max_blocks: usize,
    /// Whether `input` blocks may be placed.
    pub allow_input: bool,
    /// Whether `file` blocks may be placed.
    pub allow_file: bool,
}

impl BlockRules {
    pub const fn new(max_blocks: usize, allow_input: bool) -> Self {
        Self {
            max_blocks,
            allow_input,
            allow_file: false,
        }
    }

    pub const fn with_file_blocks(mut self) -> Self {
        self.allow_file = true;
        self
    }

    pub fn allows(&self, kind: Kind) -> bool {
        match kind {
            Kind::Actions
            | Kind::Context
            | Kind::Divider
            | Kind::Header
            | Kind::Image
            | Kind::Section => true,
            Kind::Input => self.allow_input,
            Kind::File => self.allow_file,
            _ => false,
        }
    }
}

/// The ordered `blocks` of a surface.
///
/// Placement is not checked on insertion; [`validate`](BlockList::validate)
/// reports blocks the surface does not accept.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockList {
    pub blocks: Vec<Block>,
    rules: BlockRules,
}

impl BlockList {
    pub fn new(rules: BlockRules) -> Self {
        Self {
            blocks: Vec::new(),
            rules,
        }
    }

    pub fn rules(&self) -> BlockRules {
        self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn push(&mut self, block: impl Into<Block>) {
        self.blocks.push(block.into());
    }

    pub fn contains_kind(&self, kind: Kind) -> bool {
        self.blocks.iter().any(|block| block.kind() == kind)
    }

    /// Check placement, count, each block, and `block_id` uniqueness.
    ///
    /// `cx` is the context of the owner's children.
    pub fn validate(&self, owner: Kind, cx: Context<'_>) -> Result<(), ValidationError> {
        if self.blocks.is_empty() {
            return Err(ValidationErrorKind::TooFew {
                what: "blocks",
                min: 1,
            }
            .at(owner));
        }
        if self.blocks.len() > self.rules.max_blocks {
            return Err(ValidationErrorKind::TooMany {
                what: "blocks",
                max: self.rules.max_blocks,
            }
            .at(owner));
        }

        let mut ids: IndexMap<&str, usize> = IndexMap::new();
        for block in &self.blocks {
            if !self.rules.allows(block.kind()) {
                return Err(ValidationErrorKind::KindNotAllowed {
                    child: block.kind(),
                    slot: "blocks",
                }
                .at(owner));
            }
            block.validate_in(cx)?;
            if let Some(id) = block.block_id() {
                *ids.entry(id).or_default() += 1;
            }
        }

        let duplicated: Vec<String> = ids
            .into_iter()
            .filter(|&(_, count)| count > 1)
            .map(|(id, _)| id.to_string())
            .collect();
        if !duplicated.is_empty() {
            return Err(ValidationErrorKind::Duplicated {
                field: "block_id",
                ids: duplicated,
            }
            .at(owner));
        }
        Ok(())
    }

    pub fn write(&self, out: &mut FieldWriter<'_>) -> Result<(), ValidationError> {
        out.nodes("blocks", &self.blocks)
    }

    pub fn hydrate(&mut self, data: &mut HydrationData) -> Result<(), Error> {
        self.blocks.extend(data.use_nodes::<Block>("blocks")?);
        Ok(())
    }
}

/// By-value block builders for surfaces.
pub trait HasBlocks: Sized {
    fn block_list(&mut self) -> &mut BlockList;

    fn block(mut self, block: impl Into<Block>) -> Self {
        self.block_list().push(block);
        self
    }

    fn blocks<B: Into<Block>>(mut self, blocks: impl IntoIterator<Item = B>) -> Self {
        let list = self.block_list();
        for block in blocks {
            list.push(block);
        }
        self
    }

    fn divider(self) -> Self {
        self.block(Divider::new())
    }

    fn header(self, text: impl Into<String>) -> Self {
        self.block(Header::new(text))
    }

    /// Add a section holding `mrkdwn` text.
    fn section(self, text: impl Into<String>) -> Self {
        self.block(Section::new().mrkdwn(text))
    }

    /// Add a context block holding `mrkdwn` text.
    fn context(self, text: impl Into<String>) -> Self {
        self.block(ContextBlock::new().mrkdwn(text))
    }
}
