//! Repository traits (ports)

mod repositories;

pub use repositories::{
    CommentRepository, PostQuery, PostRepository, ReactionRepository, RepoResult,
    SpecificationRepository, SubscriberRepository, ToggleOutcome,
};
