//! Synthetic daily engagement series.

use chrono::{Days, NaiveDate};
use rand::RngExt;

use crate::types::{EngagementMetrics, MetricData};

const BASE_IMPRESSIONS: f64 = 1000.0;
const IMPRESSION_SPREAD: f64 = 5000.0;
const SPIKE: f64 = 10_000.0;
const SPIKE_PROBABILITY: f64 = 0.1;

/// `(low, width)`: a ratio drawn uniformly from `[low, low + width)`.
const ENGAGEMENT_RATIO: (f64, f64) = (0.02, 0.05);
const LIKE_RATIO: (f64, f64) = (0.01, 0.03);
const REPLY_RATIO: (f64, f64) = (0.005, 0.01);
const RETWEET_RATIO: (f64, f64) = (0.002, 0.01);
const PROFILE_VISIT_RATIO: f64 = 0.1;

const TOTAL_FOLLOWERS: u64 = 12_450;
const FOLLOWER_GROWTH: f64 = 1.2;

/// `days + 1` records covering `today - days ..= today`, oldest first.
pub fn generate_time_series<R: RngExt>(days: u32, today: NaiveDate, rng: &mut R) -> Vec<MetricData> {
    (0..=days)
        .rev()
        .filter_map(|back| today.checked_sub_days(Days::new(u64::from(back))))
        .map(|date| day(date, rng))
        .collect()
}

fn day<R: RngExt>(date: NaiveDate, rng: &mut R) -> MetricData {
    let spike = if rng.random_bool(SPIKE_PROBABILITY) { SPIKE } else { 0.0 };
    let impressions = (BASE_IMPRESSIONS + rng.random::<f64>() * IMPRESSION_SPREAD + spike).floor();

    let mut share = |(low, width): (f64, f64)| -> u64 {
        (impressions * (low + rng.random::<f64>() * width)).floor() as u64
    };

    MetricData {
        date,
        impressions: impressions as u64,
        engagements: share(ENGAGEMENT_RATIO),
        likes: share(LIKE_RATIO),
        replies: share(REPLY_RATIO),
        retweets: share(RETWEET_RATIO),
        profile_visits: (impressions * PROFILE_VISIT_RATIO).floor() as u64,
    }
}

/// Wrap two periods with the derived account stats.
///
/// `period_days` is the nominal period length used for the replies-per-day
/// average, matching how the dashboard has always reported it.
pub fn build_metrics(
    current_period: Vec<MetricData>,
    previous_period: Vec<MetricData>,
    period_days: u32,
) -> EngagementMetrics {
    let impressions: u64 = current_period.iter().map(|d| d.impressions).sum();
    let engagements: u64 = current_period.iter().map(|d| d.engagements).sum();
    let replies: u64 = current_period.iter().map(|d| d.replies).sum();

    let average_engagement_rate = if impressions == 0 {
        0.0
    } else {
        engagements as f64 / impressions as f64 * 100.0
    };
    let reply_ratio = if period_days == 0 {
        0.0
    } else {
        replies as f64 / f64::from(period_days)
    };

    EngagementMetrics {
        current_period,
        previous_period,
        total_followers: TOTAL_FOLLOWERS,
        follower_growth: FOLLOWER_GROWTH,
        average_engagement_rate,
        reply_ratio,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
    }

    #[test]
    fn zero_days_is_just_today() {
        let mut rng = StdRng::seed_from_u64(1);
        let series = generate_time_series(0, today(), &mut rng);
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].date, today());
    }

    #[test]
    fn series_crosses_month_boundary_in_order() {
        let mut rng = StdRng::seed_from_u64(2);
        let series = generate_time_series(3, today(), &mut rng);
        let dates: Vec<String> = series.iter().map(|d| d.date.to_string()).collect();
        assert_eq!(dates, ["2025-02-26", "2025-02-27", "2025-02-28", "2025-03-01"]);
    }

    #[test]
    fn values_stay_within_ranges() {
        let mut rng = StdRng::seed_from_u64(3);
        for d in generate_time_series(500, today(), &mut rng) {
            assert!(
                (1000..6000).contains(&d.impressions) || (11_000..16_000).contains(&d.impressions),
                "{}",
                d.impressions
            );
            let imp = d.impressions as f64;
            assert!(d.engagements as f64 >= (imp * 0.02).floor());
            assert!((d.engagements as f64) <= imp * 0.07);
            assert!((d.likes as f64) <= imp * 0.04);
            assert!((d.replies as f64) <= imp * 0.015);
            assert!((d.retweets as f64) <= imp * 0.012);
            assert_eq!(d.profile_visits, (imp * 0.1).floor() as u64);
        }
    }

    #[test]
    fn spikes_happen_sometimes() {
        let mut rng = StdRng::seed_from_u64(4);
        let series = generate_time_series(999, today(), &mut rng);
        let spikes = series.iter().filter(|d| d.impressions >= 11_000).count();
        assert!(spikes > 30 && spikes < 200, "{spikes} spikes");
    }

    #[test]
    fn same_seed_same_series() {
        let a = generate_time_series(28, today(), &mut StdRng::seed_from_u64(9));
        let b = generate_time_series(28, today(), &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn metrics_derive_rates() {
        let day = |impressions, engagements, replies| MetricData {
            date: today(),
            impressions,
            engagements,
            likes: 0,
            replies,
            retweets: 0,
            profile_visits: 0,
        };
        let metrics = build_metrics(vec![day(1000, 50, 28), day(3000, 150, 28)], vec![], 28);
        assert!((metrics.average_engagement_rate - 5.0).abs() < 1e-9);
        assert!((metrics.reply_ratio - 2.0).abs() < 1e-9);
        assert_eq!(metrics.total_followers, 12_450);
        assert_eq!(metrics.follower_growth, 1.2);
    }

    #[test]
    fn metrics_with_no_impressions_have_zero_rate() {
        let metrics = build_metrics(vec![], vec![], 28);
        assert_eq!(metrics.average_engagement_rate, 0.0);
        assert_eq!(metrics.reply_ratio, 0.0);
    }
}
