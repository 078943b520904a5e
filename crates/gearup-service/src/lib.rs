//! # gearup-service
//!
//! Application layer: services implementing the platform's use cases over the
//! repository ports, plus the request/response DTOs they speak.

pub mod dto;
pub mod services;

// Re-export commonly used types at crate root
pub use dto::{
    AddCommentRequest, AdminLoginRequest, AdminSessionResponse, AnalyticsResponse,
    CommentResponse, CreatePostRequest, DayCountResponse, DayTrendResponse, FrontPageResponse,
    HealthResponse, PostDetailResponse, PostSummaryResponse, ReactionStateResponse,
    ReadinessResponse, SpecificationRequest, SpecificationResponse, SubscribeRequest,
    SubscriberResponse, TotalsResponse, TypeCountResponse, TypeViewsResponse, UpdatePostRequest,
};
pub use services::{
    AdminSessionService, AnalyticsService, CommentService, ContentService, ReactionService,
    ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult, SubscriberService,
};
