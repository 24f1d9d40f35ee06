use crate::models::JournalEntry;
use chrono::NaiveDate;
use std::fmt;

pub const MOOD_TAGS: [&str; 10] = [
    "Happy",
    "Calm",
    "Anxious",
    "Sad",
    "Energetic",
    "Tired",
    "Stressed",
    "Grateful",
    "Frustrated",
    "Hopeful",
];

pub const ACTIVITIES: [&str; 9] = [
    "Exercise",
    "Meditation",
    "Good Sleep",
    "Social Time",
    "Hobbies",
    "Work",
    "Study",
    "Screen Time",
    "Nature Time",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JournalError {
    BlankText,
    UnknownMoodTag(String),
    UnknownActivity(String),
}

impl fmt::Display for JournalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BlankText => f.write_str("journal text must not be empty"),
            Self::UnknownMoodTag(tag) => write!(f, "unknown mood tag '{tag}'"),
            Self::UnknownActivity(activity) => write!(f, "unknown activity '{activity}'"),
        }
    }
}

impl std::error::Error for JournalError {}

/// Builds an entry, rejecting blank text and tags outside the fixed lists.
pub fn new_entry(
    date: NaiveDate,
    text: &str,
    mood_tags: Vec<String>,
    activities: Vec<String>,
) -> Result<JournalEntry, JournalError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(JournalError::BlankText);
    }
    if let Some(tag) = mood_tags.iter().find(|tag| !MOOD_TAGS.contains(&tag.as_str())) {
        return Err(JournalError::UnknownMoodTag(tag.clone()));
    }
    if let Some(activity) = activities
        .iter()
        .find(|activity| !ACTIVITIES.contains(&activity.as_str()))
    {
        return Err(JournalError::UnknownActivity(activity.clone()));
    }

    Ok(JournalEntry {
        date,
        text: text.to_string(),
        mood_tags: dedup(mood_tags),
        activities: dedup(activities),
    })
}

fn dedup(values: Vec<String>) -> Vec<String> {
    let mut seen = Vec::with_capacity(values.len());
    for value in values {
        if !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 5, 10).unwrap()
    }

    #[test]
    fn entry_keeps_trimmed_text_and_unique_tags() {
        let entry = new_entry(
            today(),
            "  Long walk by the river.  ",
            vec!["Calm".into(), "Grateful".into(), "Calm".into()],
            vec!["Nature Time".into()],
        )
        .unwrap();

        assert_eq!(entry.text, "Long walk by the river.");
        assert_eq!(entry.mood_tags, vec!["Calm", "Grateful"]);
        assert_eq!(entry.activities, vec!["Nature Time"]);
    }

    #[test]
    fn rejects_blank_text_and_unknown_tags() {
        assert_eq!(
            new_entry(today(), "   ", vec![], vec![]).unwrap_err(),
            JournalError::BlankText
        );

        let err = new_entry(today(), "ok", vec!["Bored".into()], vec![]).unwrap_err();
        assert_eq!(err, JournalError::UnknownMoodTag("Bored".into()));

        let err = new_entry(today(), "ok", vec![], vec!["Gaming".into()]).unwrap_err();
        assert_eq!(err.to_string(), "unknown activity 'Gaming'");
    }
}
