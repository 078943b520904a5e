//! Analytics service
//!
//! Fetches the full post set once and hands it to the pure aggregator in
//! `gearup-core::analytics`. All shaping beyond the fetch is in-memory
//! array arithmetic.

use chrono::Utc;
use tracing::instrument;

use gearup_core::analytics;

use crate::dto::AnalyticsResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Publish-count window on the dashboard, in days
const SCHEDULE_WINDOW_DAYS: u32 = 30;
/// Views/engagement trend window, in days
const TREND_WINDOW_DAYS: u32 = 7;

/// Analytics service
pub struct AnalyticsService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AnalyticsService<'a> {
    /// Create a new AnalyticsService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Assemble the complete admin dashboard payload
    #[instrument(skip(self))]
    pub async fn dashboard(&self) -> ServiceResult<AnalyticsResponse> {
        let posts = self.ctx.post_repo().find_all().await?;
        let today = Utc::now().date_naive();

        let best_hour = analytics::best_posting_hour(&posts);

        Ok(AnalyticsResponse {
            totals: analytics::totals(&posts).into(),
            posts_by_type: analytics::counts_by_type(&posts)
                .into_iter()
                .map(Into::into)
                .collect(),
            views_by_type: analytics::views_by_type(&posts)
                .into_iter()
                .map(Into::into)
                .collect(),
            schedule: analytics::publishing_schedule(&posts, SCHEDULE_WINDOW_DAYS, today)
                .into_iter()
                .map(Into::into)
                .collect(),
            trend: analytics::engagement_trend(&posts, TREND_WINDOW_DAYS, today)
                .into_iter()
                .map(Into::into)
                .collect(),
            suggestions: analytics::suggestions(&posts),
            best_posting_hour: format!("{best_hour}:00"),
        })
    }
}

#[cfg(test)]
mod tests {
    // The aggregation itself is unit-tested in gearup-core::analytics; the
    // assembled payload is exercised in tests/integration.
}
