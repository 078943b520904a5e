//! Post entity <-> model mapper

use gearup_core::entities::{Post, PostType};

use crate::models::PostModel;

/// Convert PostModel to Post entity.
///
/// Unknown stored post types degrade to `news` rather than failing the row.
impl From<PostModel> for Post {
    fn from(model: PostModel) -> Self {
        Post {
            id: model.id,
            title: model.title,
            slug: model.slug,
            content: model.content,
            excerpt: model.excerpt,
            image_url: model.image_url,
            author: model.author,
            categories: model.categories,
            meta_description: model.meta_description,
            post_type: PostType::parse_lossy(&model.post_type),
            views: model.views,
            reading_time_minutes: model.reading_time_minutes,
            featured: model.featured,
            created_at: model.created_at,
            updated_at: model.updated_at,
            published_at: model.published_at,
        }
    }
}
