use crate::models::{RatingLabels, WellnessAssessment};

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 10;

const MOOD_WEIGHT: f64 = 0.25;
const ANXIETY_WEIGHT: f64 = 0.25;
const SLEEP_WEIGHT: f64 = 0.20;
const ENERGY_WEIGHT: f64 = 0.15;
const FOCUS_WEIGHT: f64 = 0.15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Mood,
    Anxiety,
    Sleep,
    Energy,
    Focus,
}

impl Dimension {
    fn labels(self) -> [&'static str; 5] {
        match self {
            Dimension::Mood => ["Very Low", "Low", "Neutral", "Good", "Excellent"],
            Dimension::Anxiety => ["None", "Mild", "Moderate", "High", "Severe"],
            Dimension::Sleep => ["Poor", "Fair", "Average", "Good", "Excellent"],
            Dimension::Energy => ["Exhausted", "Tired", "Neutral", "Energetic", "Very Energetic"],
            Dimension::Focus => [
                "Distracted",
                "Somewhat Focused",
                "Moderately Focused",
                "Focused",
                "Highly Focused",
            ],
        }
    }
}

/// Composite 0-100 score. Anxiety counts inverted: lower anxiety scores higher.
pub fn score(mood: u8, anxiety: u8, sleep: u8, energy: u8, focus: u8) -> u8 {
    let normalized_anxiety = 10.0 - f64::from(anxiety);
    let weighted = f64::from(mood) * MOOD_WEIGHT
        + normalized_anxiety * ANXIETY_WEIGHT
        + f64::from(sleep) * SLEEP_WEIGHT
        + f64::from(energy) * ENERGY_WEIGHT
        + f64::from(focus) * FOCUS_WEIGHT;

    (weighted * 10.0).round().clamp(0.0, 100.0) as u8
}

pub fn assessment_score(assessment: &WellnessAssessment) -> u8 {
    score(
        assessment.mood,
        assessment.anxiety,
        assessment.sleep,
        assessment.energy,
        assessment.focus,
    )
}

pub fn band(score: u8) -> &'static str {
    match score {
        80.. => "Excellent",
        60..=79 => "Good",
        40..=59 => "Fair",
        _ => "Needs Attention",
    }
}

/// Labels exist for the odd ratings only; everything else reads `N/A`.
pub fn rating_label(dimension: Dimension, value: u8) -> &'static str {
    match value {
        1 | 3 | 5 | 7 | 9 => dimension.labels()[usize::from(value / 2)],
        _ => "N/A",
    }
}

pub fn labels_for(assessment: &WellnessAssessment) -> RatingLabels {
    RatingLabels {
        mood: rating_label(Dimension::Mood, assessment.mood).to_string(),
        anxiety: rating_label(Dimension::Anxiety, assessment.anxiety).to_string(),
        sleep: rating_label(Dimension::Sleep, assessment.sleep).to_string(),
        energy: rating_label(Dimension::Energy, assessment.energy).to_string(),
        focus: rating_label(Dimension::Focus, assessment.focus).to_string(),
    }
}

/// Name of the first rating outside 1..=10, if any.
pub fn out_of_range(assessment: &WellnessAssessment) -> Option<&'static str> {
    [
        ("mood", assessment.mood),
        ("anxiety", assessment.anxiety),
        ("sleep", assessment.sleep),
        ("energy", assessment.energy),
        ("focus", assessment.focus),
    ]
    .into_iter()
    .find(|(_, value)| !(MIN_RATING..=MAX_RATING).contains(value))
    .map(|(name, _)| name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_check_in_scores_71() {
        assert_eq!(score(7, 3, 8, 6, 7), 71);
        assert_eq!(assessment_score(&WellnessAssessment::default()), 71);
    }

    #[test]
    fn score_bounds() {
        assert_eq!(score(10, 1, 10, 10, 10), 98);
        assert_eq!(score(1, 10, 1, 1, 1), 8);
        assert_eq!(score(10, 0, 10, 10, 10), 100);
    }

    #[test]
    fn score_is_monotonic_in_each_rating() {
        for value in MIN_RATING..MAX_RATING {
            let next = value + 1;
            assert!(score(next, 5, 5, 5, 5) >= score(value, 5, 5, 5, 5));
            assert!(score(5, next, 5, 5, 5) <= score(5, value, 5, 5, 5));
            assert!(score(5, 5, next, 5, 5) >= score(5, 5, value, 5, 5));
            assert!(score(5, 5, 5, next, 5) >= score(5, 5, 5, value, 5));
            assert!(score(5, 5, 5, 5, next) >= score(5, 5, 5, 5, value));
        }
    }

    #[test]
    fn bands_follow_thresholds() {
        assert_eq!(band(100), "Excellent");
        assert_eq!(band(80), "Excellent");
        assert_eq!(band(79), "Good");
        assert_eq!(band(60), "Good");
        assert_eq!(band(59), "Fair");
        assert_eq!(band(40), "Fair");
        assert_eq!(band(39), "Needs Attention");
        assert_eq!(band(0), "Needs Attention");
    }

    #[test]
    fn labels_only_for_odd_ratings() {
        assert_eq!(rating_label(Dimension::Mood, 1), "Very Low");
        assert_eq!(rating_label(Dimension::Mood, 7), "Good");
        assert_eq!(rating_label(Dimension::Anxiety, 3), "Mild");
        assert_eq!(rating_label(Dimension::Focus, 9), "Highly Focused");
        assert_eq!(rating_label(Dimension::Sleep, 8), "N/A");
        assert_eq!(rating_label(Dimension::Energy, 10), "N/A");
    }

    #[test]
    fn out_of_range_names_first_bad_rating() {
        let mut assessment = WellnessAssessment::default();
        assert_eq!(out_of_range(&assessment), None);
        assessment.sleep = 11;
        assessment.focus = 0;
        assert_eq!(out_of_range(&assessment), Some("sleep"));
    }
}
