use crate::cycle::{self, CycleTracker, MAX_CYCLE_LENGTH, MAX_PAIN_LEVEL, MIN_CYCLE_LENGTH};
use crate::errors::AppError;
use crate::insights::{generate_insights, generate_mock_entries};
use crate::journal;
use crate::meditation::is_duration_preset;
use crate::models::{
    CalendarDay, CalendarQuery, CalendarResponse, ClassifyQuery, ClassifyResponse, ConsultRequest,
    ConsultResponse, CycleDay, CycleSettingsRequest, CycleSummaryResponse, DurationRequest,
    InsightsQuery, InsightsResponse, JournalEntry, JournalRequest, LogDayRequest,
    MeditationResponse, SoundRequest, WellnessAssessment, WellnessResponse,
};
use crate::prompt::build_prompt;
use crate::state::AppState;
use crate::ui::{PageView, render_index};
use crate::wellness::{assessment_score, band, labels_for, out_of_range};
use axum::{
    Json,
    extract::{Query, State},
    response::Html,
};
use chrono::{Local, NaiveDate};
use tracing::info;

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let today = today();
    let cycle = {
        let tracker = state.tracker.lock().await;
        to_summary(&tracker, today)
    };
    let wellness = to_wellness(*state.assessment.lock().await);
    let meditation = state.meditation.snapshot().await;

    let page = render_index(&PageView {
        cycle: &cycle,
        wellness: &wellness,
        meditation: &meditation,
    })?;
    Ok(Html(page))
}

pub async fn get_cycle(State(state): State<AppState>) -> Json<CycleSummaryResponse> {
    let tracker = state.tracker.lock().await;
    Json(to_summary(&tracker, today()))
}

pub async fn update_cycle_settings(
    State(state): State<AppState>,
    Json(payload): Json<CycleSettingsRequest>,
) -> Result<Json<CycleSummaryResponse>, AppError> {
    if let Some(length) = payload.cycle_length {
        if !cycle::is_valid_cycle_length(length) {
            return Err(AppError::out_of_range(
                "cycle_length",
                MIN_CYCLE_LENGTH,
                MAX_CYCLE_LENGTH,
            ));
        }
    }
    if let Some(start) = payload.last_period_start {
        if !cycle::is_supported_date(start) {
            return Err(AppError::unsupported_date("last_period_start", start));
        }
    }

    let mut tracker = state.tracker.lock().await;
    if let Some(length) = payload.cycle_length {
        tracker.cycle_length = length;
    }
    if let Some(start) = payload.last_period_start {
        tracker.last_period_start = Some(start);
    }
    info!(
        cycle_length = tracker.cycle_length,
        last_period_start = ?tracker.last_period_start,
        "cycle settings updated"
    );

    Ok(Json(to_summary(&tracker, today())))
}

pub async fn log_day(
    State(state): State<AppState>,
    Json(payload): Json<LogDayRequest>,
) -> Result<Json<CycleSummaryResponse>, AppError> {
    if payload.pain_level > MAX_PAIN_LEVEL {
        return Err(AppError::out_of_range("pain_level", 0, MAX_PAIN_LEVEL));
    }
    if !cycle::is_supported_date(payload.date) {
        return Err(AppError::unsupported_date("date", payload.date));
    }

    let symptoms = payload
        .symptoms
        .into_iter()
        .map(|symptom| symptom.trim().to_string())
        .filter(|symptom| !symptom.is_empty())
        .collect();

    let mut tracker = state.tracker.lock().await;
    tracker.log_day(CycleDay {
        date: payload.date,
        flow: payload.flow,
        symptoms,
        pain_level: payload.pain_level,
        mood: payload.mood,
    });
    info!(date = %payload.date, logged = tracker.days().len(), "cycle day logged");

    Ok(Json(to_summary(&tracker, today())))
}

pub async fn get_calendar(
    State(state): State<AppState>,
    Query(query): Query<CalendarQuery>,
) -> Result<Json<CalendarResponse>, AppError> {
    let tracker = state.tracker.lock().await;
    let window = tracker.fertility();
    let days = cycle::month_highlights(query.year, query.month, tracker.days(), window.as_ref())
        .ok_or_else(|| AppError::bad_request("invalid year or month"))?;

    Ok(Json(CalendarResponse {
        year: query.year,
        month: query.month,
        days: days
            .into_iter()
            .map(|(date, highlight)| CalendarDay { date, highlight })
            .collect(),
    }))
}

pub async fn classify(
    State(state): State<AppState>,
    Query(query): Query<ClassifyQuery>,
) -> Json<ClassifyResponse> {
    let tracker = state.tracker.lock().await;
    Json(ClassifyResponse {
        date: query.date,
        highlight: tracker.classify(query.date),
    })
}

pub async fn get_wellness(State(state): State<AppState>) -> Json<WellnessResponse> {
    let assessment = *state.assessment.lock().await;
    Json(to_wellness(assessment))
}

pub async fn update_wellness(
    State(state): State<AppState>,
    Json(payload): Json<WellnessAssessment>,
) -> Result<Json<WellnessResponse>, AppError> {
    if let Some(name) = out_of_range(&payload) {
        return Err(AppError::out_of_range(name, 1, 10));
    }

    *state.assessment.lock().await = payload;
    Ok(Json(to_wellness(payload)))
}

/// Forwards the check-in to the assistant, then resets it to defaults.
pub async fn consult(
    State(state): State<AppState>,
    Json(payload): Json<ConsultRequest>,
) -> Result<Json<ConsultResponse>, AppError> {
    let mut assessment = state.assessment.lock().await;
    let prompt = build_prompt(&assessment, &payload.journal_entry);

    state
        .assistant
        .send(prompt.clone())
        .map_err(AppError::internal)?;
    info!(score = assessment_score(&assessment), "prompt forwarded to assistant");

    *assessment = WellnessAssessment::default();
    Ok(Json(ConsultResponse {
        prompt,
        assessment: *assessment,
    }))
}

pub async fn get_meditation(State(state): State<AppState>) -> Json<MeditationResponse> {
    Json(state.meditation.snapshot().await)
}

pub async fn toggle_meditation(State(state): State<AppState>) -> Json<MeditationResponse> {
    Json(state.meditation.toggle().await)
}

pub async fn reset_meditation(State(state): State<AppState>) -> Json<MeditationResponse> {
    Json(state.meditation.reset().await)
}

pub async fn set_meditation_duration(
    State(state): State<AppState>,
    Json(payload): Json<DurationRequest>,
) -> Result<Json<MeditationResponse>, AppError> {
    if !is_duration_preset(payload.minutes) {
        return Err(AppError::bad_request(
            "minutes must be one of 1, 3, 5, 10, 15, 20",
        ));
    }
    Ok(Json(state.meditation.set_duration(payload.minutes).await))
}

pub async fn set_meditation_sound(
    State(state): State<AppState>,
    Json(payload): Json<SoundRequest>,
) -> Json<MeditationResponse> {
    Json(state.meditation.set_sound(payload.sound).await)
}

pub async fn get_journal(State(state): State<AppState>) -> Json<Vec<JournalEntry>> {
    let journal = state.journal.lock().await;
    Json(journal.iter().rev().cloned().collect())
}

pub async fn save_journal(
    State(state): State<AppState>,
    Json(payload): Json<JournalRequest>,
) -> Result<Json<JournalEntry>, AppError> {
    let entry =
        journal::new_entry(today(), &payload.text, payload.mood_tags, payload.activities)?;

    state.journal.lock().await.push(entry.clone());
    info!(date = %entry.date, "journal entry saved");
    Ok(Json(entry))
}

pub async fn get_insights(Query(query): Query<InsightsQuery>) -> Json<InsightsResponse> {
    let entries = generate_mock_entries(&mut rand::thread_rng(), today(), query.range.days());
    let insights = generate_insights(&entries);
    Json(InsightsResponse {
        range: query.range,
        entries,
        insights,
    })
}

pub fn to_summary(tracker: &CycleTracker, today: NaiveDate) -> CycleSummaryResponse {
    let current_cycle_day = tracker.current_day(today);
    CycleSummaryResponse {
        today,
        cycle_length: tracker.cycle_length,
        cycle_length_progress: cycle::cycle_length_progress(tracker.cycle_length),
        last_period_start: tracker.last_period_start,
        current_cycle_day,
        fertility: tracker.fertility(),
        next_period: tracker.next_period(),
        phase: current_cycle_day.and_then(cycle::cycle_phase),
        days: tracker.days().to_vec(),
    }
}

fn to_wellness(assessment: WellnessAssessment) -> WellnessResponse {
    let score = assessment_score(&assessment);
    WellnessResponse {
        assessment,
        score,
        band: band(score),
        labels: labels_for(&assessment),
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::models::{DateHighlight, DayMood, Flow};
    use axum::http::StatusCode;
    use tokio::sync::mpsc;

    fn test_state() -> (AppState, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (AppState::new(&Config::default(), tx), rx)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn summary_without_period_start_has_no_predictions() {
        let tracker = CycleTracker::default();
        let summary = to_summary(&tracker, date(2024, 1, 10));
        assert_eq!(summary.current_cycle_day, None);
        assert!(summary.fertility.is_none());
        assert!(summary.next_period.is_none());
        assert!(summary.phase.is_none());
    }

    #[test]
    fn summary_reports_day_and_phase() {
        let mut tracker = CycleTracker::default();
        tracker.last_period_start = Some(date(2024, 1, 1));
        let summary = to_summary(&tracker, date(2024, 1, 15));
        assert_eq!(summary.current_cycle_day, Some(15));
        assert_eq!(summary.phase.map(|p| p.name), Some("Ovulation Phase"));
        assert_eq!(summary.next_period, Some(date(2024, 1, 29)));
    }

    #[tokio::test]
    async fn consult_forwards_prompt_and_resets_assessment() {
        let (state, mut rx) = test_state();
        *state.assessment.lock().await = WellnessAssessment {
            mood: 3,
            anxiety: 9,
            sleep: 2,
            energy: 4,
            focus: 5,
        };

        let Json(response) = consult(
            State(state.clone()),
            Json(ConsultRequest {
                journal_entry: "Rough week".to_string(),
            }),
        )
        .await
        .unwrap();

        let forwarded = rx.recv().await.unwrap();
        assert_eq!(forwarded, response.prompt);
        assert!(forwarded.contains("Anxiety Level: 9/10 (Severe)"));
        assert!(forwarded.contains("Journal Entry: Rough week"));
        assert_eq!(response.assessment, WellnessAssessment::default());
        assert_eq!(*state.assessment.lock().await, WellnessAssessment::default());
    }

    #[tokio::test]
    async fn consult_fails_when_assistant_is_gone() {
        let (state, rx) = test_state();
        drop(rx);
        let err = consult(State(state), Json(ConsultRequest::default()))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn rejects_out_of_range_inputs() {
        let (state, _rx) = test_state();

        let err = update_wellness(
            State(state.clone()),
            Json(WellnessAssessment {
                mood: 11,
                ..WellnessAssessment::default()
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "mood must be between 1 and 10");

        let err = log_day(
            State(state.clone()),
            Json(LogDayRequest {
                date: date(2024, 1, 1),
                flow: Flow::Light,
                symptoms: vec![],
                pain_level: 11,
                mood: DayMood::Sad,
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);

        let err = update_cycle_settings(
            State(state.clone()),
            Json(CycleSettingsRequest {
                cycle_length: Some(20),
                last_period_start: None,
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);

        let err = set_meditation_duration(State(state), Json(DurationRequest { minutes: 7 }))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn far_future_start_is_refused_and_summary_still_renders() {
        let (state, _rx) = test_state();
        let payload: CycleSettingsRequest =
            serde_json::from_str(r#"{"last_period_start":"+262142-12-31"}"#).unwrap();

        let err = update_cycle_settings(State(state.clone()), Json(payload))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);

        let err = log_day(
            State(state.clone()),
            Json(LogDayRequest {
                date: NaiveDate::MIN,
                flow: Flow::Medium,
                symptoms: vec![],
                pain_level: 0,
                mood: DayMood::Normal,
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);

        let Json(summary) = get_cycle(State(state)).await;
        assert_eq!(summary.last_period_start, None);
        assert!(summary.days.is_empty());
    }

    #[tokio::test]
    async fn logged_day_is_classified_over_prediction() {
        let (state, _rx) = test_state();
        log_day(
            State(state.clone()),
            Json(LogDayRequest {
                date: date(2024, 1, 1),
                flow: Flow::Heavy,
                symptoms: vec!["Cramps".into(), " ".into()],
                pain_level: 4,
                mood: DayMood::Irritated,
            }),
        )
        .await
        .unwrap();

        let Json(logged) = classify(
            State(state.clone()),
            Query(ClassifyQuery {
                date: date(2024, 1, 1),
            }),
        )
        .await;
        assert_eq!(
            logged.highlight,
            Some(DateHighlight::Logged {
                flow: Flow::Heavy,
                pain_level: 4,
                mood: DayMood::Irritated,
            })
        );

        let Json(fertile) = classify(
            State(state.clone()),
            Query(ClassifyQuery {
                date: date(2023, 12, 28),
            }),
        )
        .await;
        assert_eq!(fertile.highlight, Some(DateHighlight::Fertile));

        let tracker = state.tracker.lock().await;
        assert_eq!(tracker.days()[0].symptoms.len(), 1);
    }

    #[tokio::test]
    async fn journal_lists_newest_first() {
        let (state, _rx) = test_state();
        for text in ["first", "second"] {
            save_journal(
                State(state.clone()),
                Json(JournalRequest {
                    text: text.to_string(),
                    mood_tags: vec!["Calm".into()],
                    activities: vec![],
                }),
            )
            .await
            .unwrap();
        }

        let Json(entries) = get_journal(State(state)).await;
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].text, "second");
    }
}
