use crate::config::Config;
use crate::cycle::CycleTracker;
use crate::meditation::MeditationSession;
use crate::models::{JournalEntry, WellnessAssessment};
use std::sync::Arc;
use tokio::sync::{Mutex, mpsc};

/// Working set for one running instance. Nothing here outlives the process.
#[derive(Clone)]
pub struct AppState {
    pub tracker: Arc<Mutex<CycleTracker>>,
    pub assessment: Arc<Mutex<WellnessAssessment>>,
    pub journal: Arc<Mutex<Vec<JournalEntry>>>,
    pub meditation: MeditationSession,
    pub assistant: mpsc::UnboundedSender<String>,
}

impl AppState {
    pub fn new(config: &Config, assistant: mpsc::UnboundedSender<String>) -> Self {
        Self {
            tracker: Arc::new(Mutex::new(CycleTracker::new(config.cycle_length))),
            assessment: Arc::new(Mutex::new(WellnessAssessment::default())),
            journal: Arc::new(Mutex::new(Vec::new())),
            meditation: MeditationSession::new(config.meditation_minutes),
            assistant,
        }
    }
}
