//! Entity -> response DTO mappers

use gearup_core::analytics::{ContentTotals, DayCount, DayTrend, TypeCount, TypeViews};
use gearup_core::entities::{Comment, Post, Specification, Subscriber};
use gearup_common::AdminToken;

use super::responses::{
    AdminSessionResponse, CommentResponse, DayCountResponse, DayTrendResponse, PostDetailResponse,
    PostSummaryResponse, SpecificationResponse, SubscriberResponse, TotalsResponse,
    TypeCountResponse, TypeViewsResponse,
};

impl From<&Post> for PostSummaryResponse {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            slug: post.slug.clone(),
            excerpt: post.excerpt.clone(),
            image_url: post.image_url.clone(),
            author: post.author.clone(),
            categories: post.categories.clone(),
            post_type: post.post_type,
            views: post.views,
            reading_time_minutes: post.reading_time_minutes,
            featured: post.featured,
            created_at: post.created_at,
            published_at: post.published_at,
        }
    }
}

impl PostDetailResponse {
    /// Assemble a detail response from a post and its optional specification
    #[must_use]
    pub fn from_parts(post: Post, specification: Option<Specification>) -> Self {
        Self {
            id: post.id,
            title: post.title,
            slug: post.slug,
            content: post.content,
            excerpt: post.excerpt,
            image_url: post.image_url,
            author: post.author,
            categories: post.categories,
            meta_description: post.meta_description,
            post_type: post.post_type,
            views: post.views,
            reading_time_minutes: post.reading_time_minutes,
            featured: post.featured,
            created_at: post.created_at,
            updated_at: post.updated_at,
            published_at: post.published_at,
            specification: specification.map(SpecificationResponse::from),
        }
    }
}

impl From<Specification> for SpecificationResponse {
    fn from(spec: Specification) -> Self {
        Self {
            make: spec.make,
            model: spec.model,
            year: spec.year,
            engine_type: spec.engine_type,
            horsepower: spec.horsepower,
            torque: spec.torque,
            transmission: spec.transmission,
            acceleration_0_60: spec.acceleration_0_60,
            top_speed: spec.top_speed,
            fuel_economy: spec.fuel_economy,
            price_range: spec.price_range,
        }
    }
}

impl From<&Comment> for CommentResponse {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id,
            author_name: comment.author_name.clone(),
            content: comment.content.clone(),
            created_at: comment.created_at,
        }
    }
}

impl From<&Subscriber> for SubscriberResponse {
    fn from(subscriber: &Subscriber) -> Self {
        Self {
            email: subscriber.email.clone(),
            active: subscriber.active,
        }
    }
}

impl From<ContentTotals> for TotalsResponse {
    fn from(totals: ContentTotals) -> Self {
        Self {
            total_posts: totals.total_posts,
            total_views: totals.total_views,
            average_reading_time: totals.average_reading_time,
        }
    }
}

impl From<TypeCount> for TypeCountResponse {
    fn from(count: TypeCount) -> Self {
        Self {
            name: count.post_type.label().to_string(),
            count: count.count,
        }
    }
}

impl From<TypeViews> for TypeViewsResponse {
    fn from(views: TypeViews) -> Self {
        Self {
            name: views.post_type.label().to_string(),
            views: views.views,
        }
    }
}

impl From<DayCount> for DayCountResponse {
    fn from(day: DayCount) -> Self {
        Self {
            date: day.date,
            count: day.count,
        }
    }
}

impl From<DayTrend> for DayTrendResponse {
    fn from(day: DayTrend) -> Self {
        Self {
            date: day.date,
            views: day.views,
            engagement: day.engagement,
        }
    }
}

impl From<AdminToken> for AdminSessionResponse {
    fn from(token: AdminToken) -> Self {
        Self {
            access_token: token.access_token,
            token_type: token.token_type,
            expires_in: token.expires_in,
        }
    }
}
