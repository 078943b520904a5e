//! Data transfer objects
//!
//! Requests implement `Deserialize` + `Validate`; responses implement
//! `Serialize`. Mappers translate domain entities into responses.

mod mappers;
mod requests;
mod responses;

pub use requests::{
    AddCommentRequest, AdminLoginRequest, CreatePostRequest, SpecificationRequest,
    SubscribeRequest, UpdatePostRequest,
};
pub use responses::{
    AdminSessionResponse, AnalyticsResponse, CommentResponse, DayCountResponse, DayTrendResponse,
    FrontPageResponse, HealthResponse, PostDetailResponse, PostSummaryResponse,
    ReactionStateResponse, ReadinessResponse, SpecificationResponse, SubscriberResponse,
    TotalsResponse, TypeCountResponse, TypeViewsResponse,
};
