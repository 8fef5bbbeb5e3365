//! AddComment command handler
//!
//! Free-text kitchen notes, append-only; existing notes are never edited
//! or deleted.

use uuid::Uuid;

use shared::order::{EventPayload, TableEvent};
use shared::types::TableId;

use crate::orders::traits::{CommandContext, CommandHandler, OrderError};

/// AddComment action
#[derive(Debug, Clone)]
pub struct AddCommentAction {
    pub table_id: TableId,
    pub item_id: Uuid,
    pub text: String,
}

impl CommandHandler for AddCommentAction {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<Vec<TableEvent>, OrderError> {
        let now = ctx.now;
        let Some(item) = ctx.item_mut(self.table_id, self.item_id) else {
            return Ok(vec![]);
        };

        item.comments.push(self.text.clone());

        Ok(vec![TableEvent::new(
            self.table_id,
            now,
            EventPayload::CommentAdded {
                item_id: item.id,
                text: self.text.clone(),
            },
        )])
    }
}
