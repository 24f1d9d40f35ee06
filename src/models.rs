use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Flow {
    Light,
    #[default]
    Medium,
    Heavy,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DayMood {
    Happy,
    #[default]
    Normal,
    Sad,
    Irritated,
    Anxious,
}

/// A logged day. Never edited after it is appended to the tracker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CycleDay {
    pub date: NaiveDate,
    pub flow: Flow,
    pub symptoms: BTreeSet<String>,
    pub pain_level: u8,
    pub mood: DayMood,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct FertilityWindow {
    pub ovulation_day: NaiveDate,
    pub fertility_start: NaiveDate,
    pub fertility_end: NaiveDate,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DateHighlight {
    Logged {
        flow: Flow,
        pain_level: u8,
        mood: DayMood,
    },
    Ovulation,
    Fertile,
}

#[derive(Debug, Serialize)]
pub struct CyclePhase {
    pub name: &'static str,
    pub description: &'static str,
    pub color: &'static str,
    pub first_day: u32,
    pub last_day: u32,
    pub symptoms: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct WellnessAssessment {
    pub mood: u8,
    pub anxiety: u8,
    pub sleep: u8,
    pub energy: u8,
    pub focus: u8,
}

impl Default for WellnessAssessment {
    fn default() -> Self {
        Self {
            mood: 7,
            anxiety: 3,
            sleep: 8,
            energy: 6,
            focus: 7,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JournalEntry {
    pub date: NaiveDate,
    pub text: String,
    pub mood_tags: Vec<String>,
    pub activities: Vec<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MoodEntry {
    pub date: NaiveDate,
    pub mood: f64,
    pub energy: f64,
    pub sleep: f64,
    pub activities: Vec<String>,
    pub triggers: Vec<String>,
    pub notes: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MoodTrend {
    Up,
    Down,
    Stable,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct InsightMetrics {
    pub average_mood: f64,
    pub mood_trend: MoodTrend,
    pub sleep_quality: f64,
    pub energy_level: f64,
    pub top_triggers: Vec<String>,
    pub helpful_activities: Vec<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TimeRange {
    #[default]
    Week,
    Month,
    Year,
}

impl TimeRange {
    pub fn days(self) -> u32 {
        match self {
            TimeRange::Week => 7,
            TimeRange::Month => 30,
            TimeRange::Year => 365,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Sound {
    #[default]
    Rain,
    Forest,
    Ocean,
    WhiteNoise,
}

#[derive(Debug, Deserialize)]
pub struct CycleSettingsRequest {
    pub cycle_length: Option<u32>,
    pub last_period_start: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub struct LogDayRequest {
    pub date: NaiveDate,
    #[serde(default)]
    pub flow: Flow,
    #[serde(default)]
    pub symptoms: Vec<String>,
    #[serde(default)]
    pub pain_level: u8,
    #[serde(default)]
    pub mood: DayMood,
}

#[derive(Debug, Serialize)]
pub struct CycleSummaryResponse {
    pub today: NaiveDate,
    pub cycle_length: u32,
    pub cycle_length_progress: f64,
    pub last_period_start: Option<NaiveDate>,
    pub current_cycle_day: Option<u32>,
    pub fertility: Option<FertilityWindow>,
    pub next_period: Option<NaiveDate>,
    pub phase: Option<&'static CyclePhase>,
    pub days: Vec<CycleDay>,
}

#[derive(Debug, Deserialize)]
pub struct CalendarQuery {
    pub year: i32,
    pub month: u32,
}

#[derive(Debug, Serialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub highlight: Option<DateHighlight>,
}

#[derive(Debug, Serialize)]
pub struct CalendarResponse {
    pub year: i32,
    pub month: u32,
    pub days: Vec<CalendarDay>,
}

#[derive(Debug, Deserialize)]
pub struct ClassifyQuery {
    pub date: NaiveDate,
}

#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub date: NaiveDate,
    pub highlight: Option<DateHighlight>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RatingLabels {
    pub mood: String,
    pub anxiety: String,
    pub sleep: String,
    pub energy: String,
    pub focus: String,
}

#[derive(Debug, Serialize)]
pub struct WellnessResponse {
    pub assessment: WellnessAssessment,
    pub score: u8,
    pub band: &'static str,
    pub labels: RatingLabels,
}

#[derive(Debug, Deserialize, Default)]
pub struct ConsultRequest {
    #[serde(default)]
    pub journal_entry: String,
}

#[derive(Debug, Serialize)]
pub struct ConsultResponse {
    pub prompt: String,
    pub assessment: WellnessAssessment,
}

#[derive(Debug, Serialize)]
pub struct MeditationResponse {
    pub duration_secs: u32,
    pub remaining_secs: u32,
    pub playing: bool,
    pub display: String,
    pub progress: f64,
    pub sound: Sound,
}

#[derive(Debug, Deserialize)]
pub struct DurationRequest {
    pub minutes: u32,
}

#[derive(Debug, Deserialize)]
pub struct SoundRequest {
    pub sound: Sound,
}

#[derive(Debug, Deserialize)]
pub struct JournalRequest {
    pub text: String,
    #[serde(default)]
    pub mood_tags: Vec<String>,
    #[serde(default)]
    pub activities: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct InsightsQuery {
    #[serde(default)]
    pub range: TimeRange,
}

#[derive(Debug, Serialize)]
pub struct InsightsResponse {
    pub range: TimeRange,
    pub entries: Vec<MoodEntry>,
    pub insights: Option<InsightMetrics>,
}
