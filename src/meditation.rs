use crate::models::{MeditationResponse, Sound};
use std::{sync::Arc, time::Duration};
use tokio::{
    sync::Mutex,
    task::JoinHandle,
    time::{self, Instant},
};
use tracing::{debug, info};

pub const DURATION_PRESETS_MINUTES: [u32; 6] = [1, 3, 5, 10, 15, 20];
pub const DEFAULT_DURATION_MINUTES: u32 = 5;

const TICK: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Idle,
    Running(u32),
    Finished,
}

/// Countdown state. Remaining time stays in `1..=duration` and resets to the
/// full duration once a run completes.
#[derive(Debug, Clone)]
pub struct MeditationTimer {
    duration_secs: u32,
    remaining_secs: u32,
    playing: bool,
    sound: Sound,
}

impl MeditationTimer {
    pub fn new(duration_secs: u32) -> Self {
        Self {
            duration_secs,
            remaining_secs: duration_secs,
            playing: false,
            sound: Sound::default(),
        }
    }

    pub fn duration_secs(&self) -> u32 {
        self.duration_secs
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn start(&mut self) {
        self.playing = true;
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    pub fn reset(&mut self) {
        self.playing = false;
        self.remaining_secs = self.duration_secs;
    }

    pub fn set_duration_minutes(&mut self, minutes: u32) {
        self.duration_secs = minutes * 60;
        self.remaining_secs = self.duration_secs;
    }

    pub fn set_sound(&mut self, sound: Sound) {
        self.sound = sound;
    }

    pub fn tick(&mut self) -> TickOutcome {
        if !self.playing {
            return TickOutcome::Idle;
        }
        if self.remaining_secs <= 1 {
            self.playing = false;
            self.remaining_secs = self.duration_secs;
            return TickOutcome::Finished;
        }
        self.remaining_secs -= 1;
        TickOutcome::Running(self.remaining_secs)
    }

    pub fn progress(&self) -> f64 {
        if self.duration_secs == 0 {
            return 0.0;
        }
        1.0 - f64::from(self.remaining_secs) / f64::from(self.duration_secs)
    }

    pub fn snapshot(&self) -> MeditationResponse {
        MeditationResponse {
            duration_secs: self.duration_secs,
            remaining_secs: self.remaining_secs,
            playing: self.playing,
            display: format_time(self.remaining_secs),
            progress: self.progress(),
            sound: self.sound,
        }
    }
}

pub fn format_time(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

pub fn is_duration_preset(minutes: u32) -> bool {
    DURATION_PRESETS_MINUTES.contains(&minutes)
}

/// Shared timer plus the background task that ticks it once per second.
#[derive(Clone)]
pub struct MeditationSession {
    timer: Arc<Mutex<MeditationTimer>>,
    ticker: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl MeditationSession {
    pub fn new(duration_minutes: u32) -> Self {
        Self {
            timer: Arc::new(Mutex::new(MeditationTimer::new(duration_minutes * 60))),
            ticker: Arc::new(Mutex::new(None)),
        }
    }

    pub async fn snapshot(&self) -> MeditationResponse {
        self.timer.lock().await.snapshot()
    }

    /// Starts a paused timer or pauses a running one.
    pub async fn toggle(&self) -> MeditationResponse {
        let mut ticker = self.ticker.lock().await;
        let mut timer = self.timer.lock().await;

        if timer.is_playing() {
            timer.pause();
            if let Some(handle) = ticker.take() {
                handle.abort();
            }
            info!(remaining = timer.remaining_secs(), "meditation paused");
        } else {
            timer.start();
            if let Some(handle) = ticker.replace(spawn_ticker(Arc::clone(&self.timer))) {
                handle.abort();
            }
            info!(remaining = timer.remaining_secs(), "meditation started");
        }

        timer.snapshot()
    }

    pub async fn reset(&self) -> MeditationResponse {
        let mut ticker = self.ticker.lock().await;
        let mut timer = self.timer.lock().await;
        if let Some(handle) = ticker.take() {
            handle.abort();
        }
        timer.reset();
        timer.snapshot()
    }

    pub async fn set_duration(&self, minutes: u32) -> MeditationResponse {
        let mut timer = self.timer.lock().await;
        timer.set_duration_minutes(minutes);
        timer.snapshot()
    }

    pub async fn set_sound(&self, sound: Sound) -> MeditationResponse {
        let mut timer = self.timer.lock().await;
        timer.set_sound(sound);
        timer.snapshot()
    }
}

fn spawn_ticker(timer: Arc<Mutex<MeditationTimer>>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = time::interval_at(Instant::now() + TICK, TICK);
        loop {
            interval.tick().await;
            match timer.lock().await.tick() {
                TickOutcome::Running(remaining) => debug!(remaining, "meditation tick"),
                TickOutcome::Finished => {
                    info!("meditation finished");
                    break;
                }
                TickOutcome::Idle => break,
            }
        }
    })
}
