//! Database models (SQLx `FromRow` structs)

mod comment;
mod post;
mod reaction;
mod specification;
mod subscriber;

pub use comment::CommentModel;
pub use post::PostModel;
pub use reaction::{ReactionCountModel, ReactionModel};
pub use specification::SpecificationModel;
pub use subscriber::SubscriberModel;
