//! Analytics aggregation over an in-memory set of posts
//!
//! Pure functions, no I/O. Every function tolerates an empty input and
//! returns zeroed/default output. Date-window functions take `today`
//! explicitly so callers (and tests) control the clock.

use std::collections::{BTreeMap, HashMap};

use chrono::{Days, NaiveDate};

use crate::entities::{Post, PostType};

/// Fixed reporting order for per-type breakdowns
pub const TYPE_ORDER: [PostType; 3] = [PostType::Review, PostType::News, PostType::Guide];

/// Hour reported when no post has any views
pub const DEFAULT_POSTING_HOUR: u32 = 12;

/// Post count for one type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeCount {
    pub post_type: PostType,
    pub count: usize,
}

/// Accumulated views for one type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeViews {
    pub post_type: PostType,
    pub views: i64,
}

/// Posts published on one calendar day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCount {
    pub date: NaiveDate,
    pub count: usize,
}

/// Views and engagement for posts published on one calendar day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayTrend {
    pub date: NaiveDate,
    pub views: i64,
    pub engagement: i64,
}

/// Headline dashboard numbers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContentTotals {
    pub total_posts: usize,
    pub total_views: i64,
    pub average_reading_time: i32,
}

/// Group posts by type, in fixed [review, news, guide] order.
///
/// The counts always sum to `posts.len()`.
#[must_use]
pub fn counts_by_type(posts: &[Post]) -> Vec<TypeCount> {
    TYPE_ORDER
        .iter()
        .map(|&post_type| TypeCount {
            post_type,
            count: posts.iter().filter(|p| p.post_type == post_type).count(),
        })
        .collect()
}

/// Sum views per type, in fixed [review, news, guide] order
#[must_use]
pub fn views_by_type(posts: &[Post]) -> Vec<TypeViews> {
    TYPE_ORDER
        .iter()
        .map(|&post_type| TypeViews {
            post_type,
            views: posts
                .iter()
                .filter(|p| p.post_type == post_type)
                .map(|p| p.views)
                .sum(),
        })
        .collect()
}

/// Headline totals: post count, total views, rounded mean reading time
#[must_use]
pub fn totals(posts: &[Post]) -> ContentTotals {
    let total_posts = posts.len();
    let total_views = posts.iter().map(|p| p.views).sum();
    let average_reading_time = if total_posts == 0 {
        0
    } else {
        let total_reading: i64 = posts.iter().map(|p| i64::from(p.reading_time_minutes)).sum();
        (total_reading as f64 / total_posts as f64).round() as i32
    };

    ContentTotals {
        total_posts,
        total_views,
        average_reading_time,
    }
}

/// Per-day publish counts for the last `window_days` calendar days, oldest
/// to newest, inclusive of `today`
#[must_use]
pub fn publishing_schedule(posts: &[Post], window_days: u32, today: NaiveDate) -> Vec<DayCount> {
    window(window_days, today)
        .map(|date| DayCount {
            date,
            count: posts
                .iter()
                .filter(|p| published_on(p, date))
                .count(),
        })
        .collect()
}

/// Per-day views and engagement for the last `window_days` calendar days.
///
/// Engagement is a cheap proxy rewarding reach and read depth:
/// `views * ln(reading_time + 1) * 2` summed per day and rounded, with a
/// zero reading time treated as one minute.
#[must_use]
pub fn engagement_trend(posts: &[Post], window_days: u32, today: NaiveDate) -> Vec<DayTrend> {
    window(window_days, today)
        .map(|date| {
            let published: Vec<&Post> =
                posts.iter().filter(|p| published_on(p, date)).collect();

            let views: i64 = published.iter().map(|p| p.views).sum();
            let engagement: f64 = published
                .iter()
                .map(|p| {
                    let reading_time = p.reading_time_minutes.max(1);
                    p.views as f64 * f64::from(reading_time + 1).ln() * 2.0
                })
                .sum();

            DayTrend {
                date,
                views,
                engagement: engagement.round() as i64,
            }
        })
        .collect()
}

/// Fixed-template advisory strings from simple content heuristics.
///
/// Purely descriptive: names the under- and over-represented post types and
/// the three most used categories.
#[must_use]
pub fn suggestions(posts: &[Post]) -> Vec<String> {
    let counts = counts_by_type(posts);

    // Ties resolve to the first type in reporting order.
    let mut most_popular = counts[0];
    let mut least_popular = counts[0];
    for c in &counts[1..] {
        if c.count > most_popular.count {
            most_popular = *c;
        }
        if c.count < least_popular.count {
            least_popular = *c;
        }
    }

    let top_categories = top_categories(posts, 3);

    let mut out = vec![
        format!(
            "Consider writing more {} content to balance your content types",
            least_popular.post_type
        ),
        format!(
            "{} posts are performing well, continue this trend",
            most_popular.post_type.label()
        ),
    ];

    if top_categories.is_empty() {
        out.push("Try adding categories to your posts to track topic performance".to_string());
    } else {
        out.push(format!(
            "Popular categories: {}. Consider more content in these areas",
            top_categories.join(", ")
        ));
    }

    out.push(
        "Analyze post length vs. engagement to find the optimal content length for your audience"
            .to_string(),
    );

    out
}

/// The `limit` most frequent categories across all posts
#[must_use]
pub fn top_categories(posts: &[Post], limit: usize) -> Vec<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for post in posts {
        for category in &post.categories {
            *counts.entry(category.as_str()).or_insert(0) += 1;
        }
    }

    let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
    // Highest count first; equal counts ordered by name so output is stable
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    ranked
        .into_iter()
        .take(limit)
        .map(|(category, _)| category.to_string())
        .collect()
}

/// Publish hour (0-23) with the highest mean views among posts that have
/// views, defaulting to 12 with no data. Ties go to the lowest hour.
#[must_use]
pub fn best_posting_hour(posts: &[Post]) -> u32 {
    let mut by_hour: BTreeMap<u32, (i64, u32)> = BTreeMap::new();
    for post in posts.iter().filter(|p| p.views > 0) {
        let entry = by_hour.entry(post.published_hour()).or_insert((0, 0));
        entry.0 += post.views;
        entry.1 += 1;
    }

    let mut best = DEFAULT_POSTING_HOUR;
    let mut best_mean = 0.0_f64;
    for (hour, (total, count)) in by_hour {
        let mean = total as f64 / f64::from(count);
        if mean > best_mean {
            best_mean = mean;
            best = hour;
        }
    }
    best
}

fn window(window_days: u32, today: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    (0..window_days).rev().map(move |back| {
        today
            .checked_sub_days(Days::new(u64::from(back)))
            .unwrap_or(today)
    })
}

fn published_on(post: &Post, date: NaiveDate) -> bool {
    post.published_at.is_some_and(|at| at.date_naive() == date)
}
