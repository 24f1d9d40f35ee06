use crate::models::{CycleDay, CyclePhase, DateHighlight, FertilityWindow};
use chrono::{Datelike, Duration, NaiveDate};

pub const MIN_CYCLE_LENGTH: u32 = 21;
pub const MAX_CYCLE_LENGTH: u32 = 35;
pub const DEFAULT_CYCLE_LENGTH: u32 = 28;
pub const MAX_PAIN_LEVEL: u8 = 10;
pub const MIN_YEAR: i32 = 1900;
pub const MAX_YEAR: i32 = 9999;

// Luteal phase length assumed by the ovulation estimate.
const LUTEAL_OFFSET_DAYS: i64 = 14;
const FERTILE_DAYS_BEFORE: i64 = 5;
const FERTILE_DAYS_AFTER: i64 = 1;

pub const COMMON_SYMPTOMS: [&str; 10] = [
    "Cramps",
    "Headache",
    "Bloating",
    "Fatigue",
    "Breast Tenderness",
    "Mood Swings",
    "Back Pain",
    "Nausea",
    "Acne",
    "Food Cravings",
];

pub static CYCLE_PHASES: [CyclePhase; 4] = [
    CyclePhase {
        name: "Menstrual Phase",
        description: "The uterine lining is shed, resulting in menstrual bleeding",
        color: "rgb(244, 63, 94)",
        first_day: 1,
        last_day: 5,
        symptoms: &["Cramps", "Fatigue", "Mood changes"],
    },
    CyclePhase {
        name: "Follicular Phase",
        description: "Follicles in the ovary develop and estrogen levels rise",
        color: "rgb(251, 146, 60)",
        first_day: 6,
        last_day: 13,
        symptoms: &["Increased energy", "Improved mood", "Skin clarity"],
    },
    CyclePhase {
        name: "Ovulation Phase",
        description: "A mature egg is released from the ovary",
        color: "rgb(34, 197, 94)",
        first_day: 14,
        last_day: 16,
        symptoms: &["Mild cramping", "Increased libido", "Clear discharge"],
    },
    CyclePhase {
        name: "Luteal Phase",
        description: "The body prepares for possible pregnancy",
        color: "rgb(147, 51, 234)",
        first_day: 17,
        last_day: 28,
        symptoms: &["Breast tenderness", "Bloating", "Mood changes"],
    },
];

/// Transient cycle log plus the settings the predictions derive from.
#[derive(Debug, Clone)]
pub struct CycleTracker {
    pub cycle_length: u32,
    pub last_period_start: Option<NaiveDate>,
    days: Vec<CycleDay>,
}

impl CycleTracker {
    pub fn new(cycle_length: u32) -> Self {
        Self {
            cycle_length,
            last_period_start: None,
            days: Vec::new(),
        }
    }

    /// Appends in log order. The first logged day seeds the period start.
    pub fn log_day(&mut self, day: CycleDay) {
        if self.last_period_start.is_none() {
            self.last_period_start = Some(day.date);
        }
        self.days.push(day);
    }

    pub fn days(&self) -> &[CycleDay] {
        &self.days
    }

    pub fn current_day(&self, today: NaiveDate) -> Option<u32> {
        self.last_period_start
            .map(|start| current_cycle_day(start, self.cycle_length, today))
    }

    pub fn fertility(&self) -> Option<FertilityWindow> {
        fertility_window(self.last_period_start, self.cycle_length)
    }

    pub fn next_period(&self) -> Option<NaiveDate> {
        next_period(self.last_period_start, self.cycle_length)
    }

    pub fn classify(&self, date: NaiveDate) -> Option<DateHighlight> {
        classify_date(date, &self.days, self.fertility().as_ref())
    }
}

impl Default for CycleTracker {
    fn default() -> Self {
        Self::new(DEFAULT_CYCLE_LENGTH)
    }
}

pub fn current_cycle_day(last_period_start: NaiveDate, cycle_length: u32, today: NaiveDate) -> u32 {
    let length = i64::from(cycle_length.max(1));
    let days_since_start = (today - last_period_start).num_days();
    (days_since_start.rem_euclid(length) + 1) as u32
}

pub fn fertility_window(
    last_period_start: Option<NaiveDate>,
    cycle_length: u32,
) -> Option<FertilityWindow> {
    let start = last_period_start?;
    let offset = i64::from(cycle_length / 2) - LUTEAL_OFFSET_DAYS;
    let ovulation_day = start.checked_add_signed(Duration::days(offset))?;

    Some(FertilityWindow {
        ovulation_day,
        fertility_start: ovulation_day.checked_sub_signed(Duration::days(FERTILE_DAYS_BEFORE))?,
        fertility_end: ovulation_day.checked_add_signed(Duration::days(FERTILE_DAYS_AFTER))?,
    })
}

/// Logged days win over predictions. The first matching log entry is used.
pub fn classify_date(
    date: NaiveDate,
    logged_days: &[CycleDay],
    window: Option<&FertilityWindow>,
) -> Option<DateHighlight> {
    if let Some(day) = logged_days.iter().find(|day| day.date == date) {
        return Some(DateHighlight::Logged {
            flow: day.flow,
            pain_level: day.pain_level,
            mood: day.mood,
        });
    }

    let window = window?;
    if date == window.ovulation_day {
        return Some(DateHighlight::Ovulation);
    }
    if date >= window.fertility_start && date <= window.fertility_end {
        return Some(DateHighlight::Fertile);
    }
    None
}

pub fn next_period(last_period_start: Option<NaiveDate>, cycle_length: u32) -> Option<NaiveDate> {
    last_period_start?.checked_add_signed(Duration::days(i64::from(cycle_length)))
}

pub fn cycle_phase(day: u32) -> Option<&'static CyclePhase> {
    CYCLE_PHASES
        .iter()
        .find(|phase| day >= phase.first_day && day <= phase.last_day)
}

/// Share of the longest supported cycle, as a percentage for the progress bar.
pub fn cycle_length_progress(cycle_length: u32) -> f64 {
    f64::from(cycle_length) * 100.0 / f64::from(MAX_CYCLE_LENGTH)
}

/// Every day of the month with its highlight. `None` for an invalid month.
pub fn month_highlights(
    year: i32,
    month: u32,
    logged_days: &[CycleDay],
    window: Option<&FertilityWindow>,
) -> Option<Vec<(NaiveDate, Option<DateHighlight>)>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let days = std::iter::successors(Some(first), |date| date.succ_opt())
        .take_while(|date| date.month() == month)
        .map(|date| (date, classify_date(date, logged_days, window)))
        .collect();
    Some(days)
}

pub fn is_valid_cycle_length(cycle_length: u32) -> bool {
    (MIN_CYCLE_LENGTH..=MAX_CYCLE_LENGTH).contains(&cycle_length)
}

/// Dates outside these years are refused before they reach the tracker.
pub fn is_supported_date(date: NaiveDate) -> bool {
    (MIN_YEAR..=MAX_YEAR).contains(&date.year())
}
