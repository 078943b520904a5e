//! Comment entity <-> model mapper

use gearup_core::entities::Comment;

use crate::models::CommentModel;

/// Convert CommentModel to Comment entity
impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: model.id,
            post_id: model.post_id,
            author_id: model.author_id,
            author_name: model.author_name,
            content: model.content,
            created_at: model.created_at,
        }
    }
}
