//! Content service
//!
//! Public catalogue reads plus the admin CRUD over posts and their
//! specifications. Every mutation emits a best-effort change notification;
//! notify failures are logged and dropped.

use chrono::Utc;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use gearup_core::entities::{reading_time_minutes, Post, PostType, Specification};
use gearup_core::traits::PostQuery;
use gearup_db::{ContentChange, ContentOp};

use crate::dto::{
    CreatePostRequest, FrontPageResponse, PostDetailResponse, PostSummaryResponse,
    SpecificationRequest, UpdatePostRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Number of posts on the landing page
const FRONT_PAGE_LIMIT: i64 = 10;

/// Content service
pub struct ContentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ContentService<'a> {
    /// Create a new ContentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List recent posts, newest first
    #[instrument(skip(self))]
    pub async fn list_recent(&self, limit: i64) -> ServiceResult<Vec<PostSummaryResponse>> {
        let posts = self
            .ctx
            .post_repo()
            .find_recent(PostQuery {
                post_type: None,
                limit,
            })
            .await?;

        Ok(posts.iter().map(PostSummaryResponse::from).collect())
    }

    /// List recent posts of one type (the reviews/news/guides pages)
    #[instrument(skip(self))]
    pub async fn list_by_type(
        &self,
        post_type: PostType,
        limit: i64,
    ) -> ServiceResult<Vec<PostSummaryResponse>> {
        let posts = self
            .ctx
            .post_repo()
            .find_recent(PostQuery::of_type(post_type, limit))
            .await?;

        Ok(posts.iter().map(PostSummaryResponse::from).collect())
    }

    /// Landing page selection.
    ///
    /// Prefers the explicitly featured post; when none exists the newest
    /// post is promoted. The featured post never repeats in the recent list.
    #[instrument(skip(self))]
    pub async fn front_page(&self) -> ServiceResult<FrontPageResponse> {
        let featured = self.ctx.post_repo().find_featured().await?;
        let recent = self
            .ctx
            .post_repo()
            .find_recent(PostQuery {
                post_type: None,
                limit: FRONT_PAGE_LIMIT,
            })
            .await?;

        let (featured, posts) = match featured {
            Some(featured) => {
                let posts = recent.into_iter().filter(|p| p.id != featured.id).collect();
                (Some(featured), posts)
            }
            None => {
                let mut recent = recent.into_iter();
                let promoted = recent.next();
                (promoted, recent.collect::<Vec<_>>())
            }
        };

        Ok(FrontPageResponse {
            featured: featured.as_ref().map(PostSummaryResponse::from),
            posts: posts.iter().map(PostSummaryResponse::from).collect(),
        })
    }

    /// Public fetch by slug: returns the post with its specification and
    /// counts the view
    #[instrument(skip(self))]
    pub async fn view_post(&self, slug: &str) -> ServiceResult<PostDetailResponse> {
        let post = self
            .ctx
            .post_repo()
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| ServiceError::not_found("Post", slug))?;

        // The rendered page must not fail over a lost view increment
        if let Err(e) = self.ctx.post_repo().record_view(post.id).await {
            warn!(post_id = %post.id, error = %e, "View count not recorded");
        }

        let specification = self.ctx.specification_repo().find_by_post(post.id).await?;

        Ok(PostDetailResponse::from_parts(post, specification))
    }

    /// Admin fetch by id, without counting a view
    #[instrument(skip(self))]
    pub async fn get_post(&self, id: Uuid) -> ServiceResult<PostDetailResponse> {
        let post = self
            .ctx
            .post_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Post", id.to_string()))?;

        let specification = self.ctx.specification_repo().find_by_post(post.id).await?;

        Ok(PostDetailResponse::from_parts(post, specification))
    }

    /// Create a post (admin)
    #[instrument(skip(self, request), fields(slug = %request.slug))]
    pub async fn create_post(&self, request: CreatePostRequest) -> ServiceResult<PostDetailResponse> {
        let now = Utc::now();
        let post = Post {
            id: Uuid::new_v4(),
            title: request.title,
            slug: request.slug,
            content: request.content.clone(),
            excerpt: request.excerpt,
            image_url: request.image_url,
            author: request.author,
            categories: request.categories,
            meta_description: request.meta_description,
            post_type: request.post_type,
            views: 0,
            reading_time_minutes: reading_time_minutes(&request.content),
            featured: false,
            created_at: now,
            updated_at: None,
            published_at: Some(now),
        };

        self.ctx.post_repo().create(&post).await?;

        let specification = if post.is_review() {
            match request.specification {
                Some(spec) => {
                    let spec = build_specification(post.id, spec);
                    self.ctx.specification_repo().upsert(&spec).await?;
                    Some(spec)
                }
                None => None,
            }
        } else {
            None
        };

        info!(post_id = %post.id, slug = %post.slug, "Post created");
        self.notify(ContentOp::Created, post.id).await;

        let mut detail = PostDetailResponse::from_parts(post, specification);

        if request.featured {
            self.feature_post(detail.id).await?;
            detail.featured = true;
        }

        Ok(detail)
    }

    /// Update a post (admin)
    #[instrument(skip(self, request), fields(post_id = %id))]
    pub async fn update_post(
        &self,
        id: Uuid,
        request: UpdatePostRequest,
    ) -> ServiceResult<PostDetailResponse> {
        let mut post = self
            .ctx
            .post_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Post", id.to_string()))?;

        if let Some(title) = request.title {
            post.title = title;
        }
        if let Some(slug) = request.slug {
            post.slug = slug;
        }
        if let Some(content) = request.content {
            post.reading_time_minutes = reading_time_minutes(&content);
            post.content = content;
        }
        if let Some(excerpt) = request.excerpt {
            post.excerpt = Some(excerpt);
        }
        if let Some(image_url) = request.image_url {
            post.image_url = Some(image_url);
        }
        if let Some(author) = request.author {
            post.author = author;
        }
        if let Some(categories) = request.categories {
            post.categories = categories;
        }
        if let Some(meta_description) = request.meta_description {
            post.meta_description = Some(meta_description);
        }
        if let Some(post_type) = request.post_type {
            post.post_type = post_type;
        }

        self.ctx.post_repo().update(&post).await?;

        let specification = if post.is_review() {
            match request.specification {
                Some(spec) => {
                    let spec = build_specification(post.id, spec);
                    self.ctx.specification_repo().upsert(&spec).await?;
                    Some(spec)
                }
                None => self.ctx.specification_repo().find_by_post(post.id).await?,
            }
        } else {
            // A post edited away from review loses its attachment
            self.ctx.specification_repo().delete_by_post(post.id).await?;
            None
        };

        info!(post_id = %post.id, "Post updated");
        self.notify(ContentOp::Updated, post.id).await;

        Ok(PostDetailResponse::from_parts(post, specification))
    }

    /// Delete a post (admin); reactions, comments, and specifications cascade
    #[instrument(skip(self))]
    pub async fn delete_post(&self, id: Uuid) -> ServiceResult<()> {
        if self.ctx.post_repo().find_by_id(id).await?.is_none() {
            return Err(ServiceError::not_found("Post", id.to_string()));
        }

        self.ctx.post_repo().delete(id).await?;

        info!(post_id = %id, "Post deleted");
        self.notify(ContentOp::Deleted, id).await;

        Ok(())
    }

    /// Make a post the single featured item (admin).
    ///
    /// One transactional statement: every other post is cleared in the same
    /// write that sets the new one.
    #[instrument(skip(self))]
    pub async fn feature_post(&self, id: Uuid) -> ServiceResult<()> {
        if self.ctx.post_repo().find_by_id(id).await?.is_none() {
            return Err(ServiceError::not_found("Post", id.to_string()));
        }

        self.ctx.post_repo().set_featured(id).await?;

        info!(post_id = %id, "Post featured");
        self.notify(ContentOp::Featured, id).await;

        Ok(())
    }

    /// Remove the featured flag from a post (admin)
    #[instrument(skip(self))]
    pub async fn unfeature_post(&self, id: Uuid) -> ServiceResult<()> {
        if self.ctx.post_repo().find_by_id(id).await?.is_none() {
            return Err(ServiceError::not_found("Post", id.to_string()));
        }

        self.ctx.post_repo().clear_featured(id).await?;

        info!(post_id = %id, "Post unfeatured");
        self.notify(ContentOp::Updated, id).await;

        Ok(())
    }

    async fn notify(&self, op: ContentOp, id: Uuid) {
        if let Err(e) = self.ctx.notifier().publish(ContentChange::new(op, id)).await {
            warn!(post_id = %id, error = %e, "Change notification dropped");
        }
    }
}

fn build_specification(post_id: Uuid, request: SpecificationRequest) -> Specification {
    Specification {
        id: Uuid::new_v4(),
        post_id,
        make: request.make,
        model: request.model,
        year: request.year,
        engine_type: request.engine_type,
        horsepower: request.horsepower,
        torque: request.torque,
        transmission: request.transmission,
        acceleration_0_60: request.acceleration_0_60,
        top_speed: request.top_speed,
        fuel_economy: request.fuel_economy,
        price_range: request.price_range,
        created_at: Utc::now(),
    }
}
