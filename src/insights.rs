//! Chart data for the mood analysis view.
//!
//! The entries are random placeholders until a real data source exists, so
//! nothing here is stored or reproducible across requests.

use crate::models::{InsightMetrics, MoodEntry, MoodTrend};
use chrono::{Duration, NaiveDate};
use rand::Rng;
use std::collections::HashMap;

const ACTIVITIES: [&str; 3] = ["Exercise", "Reading", "Meditation"];
const TRIGGERS: [&str; 3] = ["Work Stress", "Social Events", "Weather"];
const TOP_COUNT: usize = 2;

/// One entry per day, oldest first, ending at `today`.
pub fn generate_mock_entries<R: Rng>(
    rng: &mut R,
    today: NaiveDate,
    days: u32,
) -> Vec<MoodEntry> {
    (0..i64::from(days))
        .rev()
        .map(|offset| MoodEntry {
            date: today - Duration::days(offset),
            mood: rng.gen_range(1.0..5.0),
            energy: rng.gen_range(1.0..5.0),
            sleep: rng.gen_range(1.0..5.0),
            activities: pick_some(rng, &ACTIVITIES),
            triggers: pick_some(rng, &TRIGGERS),
            notes: String::new(),
        })
        .collect()
}

fn pick_some<R: Rng>(rng: &mut R, options: &[&str]) -> Vec<String> {
    options
        .iter()
        .filter(|_| rng.gen_bool(0.5))
        .map(|option| option.to_string())
        .collect()
}

pub fn generate_insights(entries: &[MoodEntry]) -> Option<InsightMetrics> {
    let first = entries.first()?;
    let last = entries.last()?;
    let count = entries.len() as f64;

    let mood_trend = if last.mood > first.mood {
        MoodTrend::Up
    } else if last.mood < first.mood {
        MoodTrend::Down
    } else {
        MoodTrend::Stable
    };

    Some(InsightMetrics {
        average_mood: entries.iter().map(|e| e.mood).sum::<f64>() / count,
        mood_trend,
        sleep_quality: entries.iter().map(|e| e.sleep).sum::<f64>() / count,
        energy_level: entries.iter().map(|e| e.energy).sum::<f64>() / count,
        top_triggers: most_frequent(entries.iter().flat_map(|e| e.triggers.iter())),
        helpful_activities: most_frequent(entries.iter().flat_map(|e| e.activities.iter())),
    })
}

// Ties break alphabetically so the result is stable for a given input.
fn most_frequent<'a>(items: impl Iterator<Item = &'a String>) -> Vec<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for item in items {
        *counts.entry(item.as_str()).or_default() += 1;
    }

    let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked
        .into_iter()
        .take(TOP_COUNT)
        .map(|(name, _)| name.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimeRange;
    use rand::{SeedableRng, rngs::StdRng};

    fn entry(day: u32, mood: f64, triggers: &[&str], activities: &[&str]) -> MoodEntry {
        MoodEntry {
            date: NaiveDate::from_ymd_opt(2026, 1, day).unwrap(),
            mood,
            energy: 2.0,
            sleep: 4.0,
            activities: activities.iter().map(|s| s.to_string()).collect(),
            triggers: triggers.iter().map(|s| s.to_string()).collect(),
            notes: String::new(),
        }
    }

    #[test]
    fn mock_entries_end_today_with_values_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let today = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
        let entries = generate_mock_entries(&mut rng, today, TimeRange::Week.days());

        assert_eq!(entries.len(), 7);
        assert_eq!(entries[0].date, NaiveDate::from_ymd_opt(2026, 3, 4).unwrap());
        assert_eq!(entries[6].date, today);
        for e in &entries {
            for value in [e.mood, e.energy, e.sleep] {
                assert!((1.0..5.0).contains(&value));
            }
            assert!(e.activities.iter().all(|a| ACTIVITIES.contains(&a.as_str())));
            assert!(e.triggers.iter().all(|t| TRIGGERS.contains(&t.as_str())));
        }
    }

    #[test]
    fn range_controls_entry_count() {
        let mut rng = StdRng::seed_from_u64(1);
        let today = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
        assert_eq!(generate_mock_entries(&mut rng, today, TimeRange::Month.days()).len(), 30);
        assert_eq!(generate_mock_entries(&mut rng, today, TimeRange::Year.days()).len(), 365);
    }

    #[test]
    fn insights_average_and_trend() {
        let entries = vec![
            entry(1, 2.0, &["Weather"], &["Exercise"]),
            entry(2, 3.0, &["Weather", "Work Stress"], &["Reading"]),
            entry(3, 4.0, &["Work Stress", "Weather"], &["Exercise", "Meditation"]),
        ];
        let insights = generate_insights(&entries).unwrap();

        assert_eq!(insights.average_mood, 3.0);
        assert_eq!(insights.mood_trend, MoodTrend::Up);
        assert_eq!(insights.sleep_quality, 4.0);
        assert_eq!(insights.energy_level, 2.0);
        assert_eq!(insights.top_triggers, vec!["Weather", "Work Stress"]);
        assert_eq!(insights.helpful_activities, vec!["Exercise", "Meditation"]);
    }

    #[test]
    fn flat_mood_is_stable_and_empty_has_no_insights() {
        let entries = vec![entry(1, 3.0, &[], &[]), entry(2, 3.0, &[], &[])];
        let insights = generate_insights(&entries).unwrap();
        assert_eq!(insights.mood_trend, MoodTrend::Stable);
        assert!(insights.top_triggers.is_empty());

        assert!(generate_insights(&[]).is_none());
    }
}
