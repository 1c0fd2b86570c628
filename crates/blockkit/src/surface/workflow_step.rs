use super::block_list::{BlockList, BlockRules, HasBlocks};
use crate::prelude_internal::*;

const WORKFLOW_STEP_RULES: BlockRules = BlockRules::new(50, true);

/// A `workflow_step` configuration view.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowStep {
    pub callback_id: Option<String>,
    pub private_metadata: Option<String>,
    pub blocks: BlockList,
    pub extra: Extra,
}

impl Default for WorkflowStep {
    fn default() -> Self {
        Self {
            callback_id: None,
            private_metadata: None,
            blocks: BlockList::new(WORKFLOW_STEP_RULES),
            extra: Extra::default(),
        }
    }
}

impl WorkflowStep {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn callback_id(mut self, callback_id: impl Into<String>) -> Self {
        self.callback_id = Some(callback_id.into());
        self
    }

    pub fn private_metadata(mut self, private_metadata: impl Into<String>) -> Self {
        self.private_metadata = Some(private_metadata.into());
        self
    }
}

impl HasBlocks for WorkflowStep {
    fn block_list(&mut self) -> &mut BlockList {
        &mut self.blocks
    }
}

impl Node for WorkflowStep {
    fn kind(&self) -> Kind {
        Kind::WorkflowStep
    }

    fn extra(&self) -> &Extra {
        &self.extra
    }

    fn extra_mut(&mut self) -> &mut Extra {
        &mut self.extra
    }

    fn validate_in(&self, cx: Context<'_>) -> Result<(), ValidationError> {
        self.blocks
            .validate(Kind::WorkflowStep, cx.enter(Kind::WorkflowStep))
    }

    fn write_fields(&self, out: &mut FieldWriter<'_>) -> Result<(), ValidationError> {
        out.field_optional(
            "callback_id",
            self.callback_id.as_deref().filter(|id| !id.is_empty()),
        );
        out.field_optional(
            "private_metadata",
            self.private_metadata.as_deref().filter(|m| !m.is_empty()),
        );
        self.blocks.write(out)
    }
}

impl Hydrate for WorkflowStep {
    const KIND: Kind = Kind::WorkflowStep;

    fn hydrate_fields(&mut self, data: &mut HydrationData) -> Result<(), Error> {
        self.callback_id = data.use_str("callback_id")?;
        self.private_metadata = data.use_str("private_metadata")?;
        self.blocks.hydrate(data)
    }
}
