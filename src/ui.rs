use crate::cycle::COMMON_SYMPTOMS;
use crate::journal::{ACTIVITIES, MOOD_TAGS};
use crate::meditation::DURATION_PRESETS_MINUTES;
use crate::models::{CycleSummaryResponse, MeditationResponse, WellnessResponse};
use serde::Serialize;

const NO_DATA: &str = "Log your period to see predictions";

/// Everything the page needs on first paint; also embedded as JSON for the script.
#[derive(Serialize)]
pub struct PageView<'a> {
    pub cycle: &'a CycleSummaryResponse,
    pub wellness: &'a WellnessResponse,
    pub meditation: &'a MeditationResponse,
}

pub fn render_index(view: &PageView<'_>) -> Result<String, serde_json::Error> {
    let cycle = view.cycle;

    let cycle_day = cycle
        .current_cycle_day
        .map(|day| format!("Day {day}"))
        .unwrap_or_else(|| "Not set".to_string());
    let fertility = cycle
        .fertility
        .map(|w| format!("{} - {}", w.fertility_start, w.fertility_end))
        .unwrap_or_else(|| NO_DATA.to_string());
    let next_period = cycle
        .next_period
        .map(|date| date.to_string())
        .unwrap_or_else(|| NO_DATA.to_string());
    let phase = cycle.phase.map(|p| p.name).unwrap_or("");

    let state_json = serde_json::to_string(view)?.replace("</", "<\\/");

    Ok(INDEX_HTML
        .replace("{{TODAY}}", &cycle.today.to_string())
        .replace("{{CYCLE_DAY}}", &cycle_day)
        .replace("{{PHASE}}", phase)
        .replace("{{FERTILITY}}", &fertility)
        .replace("{{NEXT_PERIOD}}", &next_period)
        .replace("{{CYCLE_LENGTH}}", &cycle.cycle_length.to_string())
        .replace("{{SCORE}}", &view.wellness.score.to_string())
        .replace("{{BAND}}", view.wellness.band)
        .replace("{{TIMER}}", &view.meditation.display)
        .replace("{{SYMPTOMS}}", &checkboxes("symptom", &COMMON_SYMPTOMS))
        .replace("{{MOOD_TAGS}}", &checkboxes("tag", &MOOD_TAGS))
        .replace("{{ACTIVITIES}}", &checkboxes("activity", &ACTIVITIES))
        .replace("{{DURATIONS}}", &duration_buttons())
        .replace("{{STATE_JSON}}", &state_json))
}

fn checkboxes(name: &str, options: &[&str]) -> String {
    options
        .iter()
        .map(|option| {
            format!(r#"<label class="check"><input type="checkbox" name="{name}" value="{option}" /> {option}</label>"#)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn duration_buttons() -> String {
    DURATION_PRESETS_MINUTES
        .iter()
        .map(|minutes| format!(r#"<button type="button" class="chip" data-minutes="{minutes}">{minutes} min</button>"#))
        .collect::<Vec<_>>()
        .join("\n")
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Wellness Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f7f1f5;
      --bg-2: #f3c6d3;
      --ink: #2b2a28;
      --accent: #f43f5e;
      --accent-2: #6d28d9;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 24px 60px rgba(76, 29, 149, 0.14);
    }

    * { box-sizing: border-box; }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #fde7ef 60%, #f6f1fa 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(960px, 100%);
      background: var(--card);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 24px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-size: clamp(2rem, 4vw, 2.6rem);
      margin: 0;
    }

    .subtitle { margin: 0; color: #6b6470; }

    .tabs { display: flex; flex-wrap: wrap; gap: 8px; }

    .tab, .chip, button {
      border: none;
      border-radius: 999px;
      padding: 10px 16px;
      font: inherit;
      font-weight: 600;
      cursor: pointer;
      background: white;
      color: var(--accent-2);
    }

    .tab.active, .chip.active, button.primary {
      background: var(--accent-2);
      color: white;
    }

    .panel { display: none; gap: 16px; }
    .panel.active { display: grid; }

    .grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
      gap: 16px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(76, 29, 149, 0.08);
      display: grid;
      gap: 6px;
    }

    .label {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b857d;
    }

    .value { font-size: 1.5rem; font-weight: 600; color: var(--accent-2); }
    .value.hot { color: var(--accent); }

    .check { display: inline-flex; gap: 6px; align-items: center; margin: 4px 12px 4px 0; }

    textarea, select, input[type="date"], input[type="number"] {
      font: inherit;
      padding: 8px 10px;
      border-radius: 12px;
      border: 1px solid #ddd;
    }

    textarea { width: 100%; min-height: 120px; }

    .status { min-height: 1.2em; font-size: 0.9rem; }
    .status.error { color: #b91c1c; }
    .status.ok { color: #15803d; }

    pre { white-space: pre-wrap; background: white; border-radius: 12px; padding: 12px; }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Wellness Tracker</h1>
      <p class="subtitle">Today is <span id="today">{{TODAY}}</span></p>
    </header>

    <nav class="tabs">
      <button class="tab active" data-tab="cycle">Cycle</button>
      <button class="tab" data-tab="wellness">Assessment</button>
      <button class="tab" data-tab="journal">Mood Journal</button>
      <button class="tab" data-tab="meditation">Meditation</button>
      <button class="tab" data-tab="insights">Insights</button>
    </nav>

    <section class="panel active" id="panel-cycle">
      <div class="grid">
        <div class="stat"><span class="label">Current cycle day</span><span class="value" id="cycle-day">{{CYCLE_DAY}}</span><span id="phase">{{PHASE}}</span></div>
        <div class="stat"><span class="label">Fertility window</span><span class="value hot" id="fertility">{{FERTILITY}}</span></div>
        <div class="stat"><span class="label">Next period</span><span class="value" id="next-period">{{NEXT_PERIOD}}</span></div>
        <div class="stat"><span class="label">Cycle length</span><input type="number" id="cycle-length" min="21" max="35" value="{{CYCLE_LENGTH}}" /></div>
      </div>
      <form id="log-form" class="stat">
        <span class="label">Daily log</span>
        <input type="date" id="log-date" value="{{TODAY}}" />
        <select id="flow">
          <option value="light">Light</option>
          <option value="medium" selected>Medium</option>
          <option value="heavy">Heavy</option>
        </select>
        <label>Pain level <input type="number" id="pain" min="0" max="10" value="0" /></label>
        <select id="day-mood">
          <option value="happy">Happy</option>
          <option value="normal" selected>Normal</option>
          <option value="sad">Sad</option>
          <option value="irritated">Irritated</option>
          <option value="anxious">Anxious</option>
        </select>
        <div>{{SYMPTOMS}}</div>
        <button class="primary" type="submit">Log Day</button>
      </form>
    </section>

    <section class="panel" id="panel-wellness">
      <div class="grid">
        <div class="stat"><span class="label">Wellness score</span><span class="value hot" id="score">{{SCORE}}</span><span id="band">{{BAND}}</span></div>
      </div>
      <form id="wellness-form" class="grid">
        <label class="stat">Mood <input type="range" min="1" max="10" name="mood" /><span data-label="mood"></span></label>
        <label class="stat">Anxiety <input type="range" min="1" max="10" name="anxiety" /><span data-label="anxiety"></span></label>
        <label class="stat">Sleep <input type="range" min="1" max="10" name="sleep" /><span data-label="sleep"></span></label>
        <label class="stat">Energy <input type="range" min="1" max="10" name="energy" /><span data-label="energy"></span></label>
        <label class="stat">Focus <input type="range" min="1" max="10" name="focus" /><span data-label="focus"></span></label>
      </form>
      <button class="primary" id="consult">Consult assistant</button>
      <pre id="prompt" hidden></pre>
    </section>

    <section class="panel" id="panel-journal">
      <form id="journal-form" class="stat">
        <span class="label">How are you feeling today?</span>
        <textarea id="journal-text" placeholder="Write about your thoughts, feelings, and experiences..."></textarea>
        <div>{{MOOD_TAGS}}</div>
        <div>{{ACTIVITIES}}</div>
        <button class="primary" type="submit">Save Entry</button>
      </form>
      <div id="journal-list" class="grid"></div>
    </section>

    <section class="panel" id="panel-meditation">
      <div class="stat">
        <span class="label">Remaining</span>
        <span class="value" id="timer">{{TIMER}}</span>
        <div>
          <button class="primary" id="toggle">Start</button>
          <button id="reset">Reset</button>
        </div>
      </div>
      <div class="tabs">{{DURATIONS}}</div>
      <select id="sound">
        <option value="rain">Rain</option>
        <option value="forest">Forest</option>
        <option value="ocean">Ocean</option>
        <option value="white-noise">White Noise</option>
      </select>
    </section>

    <section class="panel" id="panel-insights">
      <div class="tabs">
        <button class="chip active" data-range="week">Week</button>
        <button class="chip" data-range="month">Month</button>
        <button class="chip" data-range="year">Year</button>
      </div>
      <div class="grid" id="insights"></div>
    </section>

    <div class="status" id="status"></div>
  </main>

  <script id="initial-state" type="application/json">{{STATE_JSON}}</script>
  <script>
    const initial = JSON.parse(document.getElementById('initial-state').textContent);
    const statusEl = document.getElementById('status');
    const NO_DATA = 'Log your period to see predictions';

    const setStatus = (message, tone) => {
      statusEl.textContent = message;
      statusEl.className = `status ${tone || ''}`;
    };

    const api = async (method, path, body) => {
      const res = await fetch(path, {
        method,
        headers: body ? { 'content-type': 'application/json' } : {},
        body: body ? JSON.stringify(body) : undefined
      });
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      return res.json();
    };

    const renderCycle = (cycle) => {
      document.getElementById('cycle-day').textContent =
        cycle.current_cycle_day ? `Day ${cycle.current_cycle_day}` : 'Not set';
      document.getElementById('phase').textContent = cycle.phase ? cycle.phase.name : '';
      document.getElementById('fertility').textContent = cycle.fertility
        ? `${cycle.fertility.fertility_start} - ${cycle.fertility.fertility_end}`
        : NO_DATA;
      document.getElementById('next-period').textContent = cycle.next_period || NO_DATA;
      document.getElementById('cycle-length').value = cycle.cycle_length;
    };

    const renderWellness = (wellness) => {
      document.getElementById('score').textContent = wellness.score;
      document.getElementById('band').textContent = wellness.band;
      for (const [name, value] of Object.entries(wellness.assessment)) {
        document.querySelector(`#wellness-form [name="${name}"]`).value = value;
        document.querySelector(`[data-label="${name}"]`).textContent =
          `${value}/10 (${wellness.labels[name]})`;
      }
    };

    let meditationPoll = null;
    const renderMeditation = (state) => {
      document.getElementById('timer').textContent = state.display;
      document.getElementById('toggle').textContent = state.playing ? 'Pause' : 'Start';
      document.getElementById('sound').value = state.sound;
      document.querySelectorAll('[data-minutes]').forEach((chip) => {
        chip.classList.toggle('active', Number(chip.dataset.minutes) * 60 === state.duration_secs);
      });
      if (state.playing && !meditationPoll) {
        meditationPoll = setInterval(() => {
          api('GET', '/api/meditation').then(renderMeditation).catch((err) => setStatus(err.message, 'error'));
        }, 1000);
      } else if (!state.playing && meditationPoll) {
        clearInterval(meditationPoll);
        meditationPoll = null;
      }
    };

    const checked = (form, name) =>
      Array.from(form.querySelectorAll(`input[name="${name}"]:checked`)).map((input) => input.value);

    const loadJournal = async () => {
      const entries = await api('GET', '/api/journal');
      document.getElementById('journal-list').innerHTML = '';
      entries.forEach((entry) => {
        const card = document.createElement('div');
        card.className = 'stat';
        card.textContent = `${entry.date}: ${entry.text} [${entry.mood_tags.join(', ')}]`;
        document.getElementById('journal-list').appendChild(card);
      });
    };

    const loadInsights = async (range) => {
      const data = await api('GET', `/api/insights?range=${range}`);
      const target = document.getElementById('insights');
      target.innerHTML = '';
      if (!data.insights) {
        target.textContent = 'No data yet';
        return;
      }
      const rows = [
        ['Average mood', data.insights.average_mood.toFixed(1)],
        ['Mood trend', data.insights.mood_trend],
        ['Sleep quality', data.insights.sleep_quality.toFixed(1)],
        ['Energy level', data.insights.energy_level.toFixed(1)],
        ['Top triggers', data.insights.top_triggers.join(', ')],
        ['Helpful activities', data.insights.helpful_activities.join(', ')]
      ];
      rows.forEach(([label, value]) => {
        const card = document.createElement('div');
        card.className = 'stat';
        card.innerHTML = `<span class="label"></span><span class="value"></span>`;
        card.querySelector('.label').textContent = label;
        card.querySelector('.value').textContent = value;
        target.appendChild(card);
      });
    };

    document.querySelectorAll('.tab').forEach((tab) => {
      tab.addEventListener('click', () => {
        document.querySelectorAll('.tab').forEach((t) => t.classList.toggle('active', t === tab));
        document.querySelectorAll('.panel').forEach((panel) => {
          panel.classList.toggle('active', panel.id === `panel-${tab.dataset.tab}`);
        });
        if (tab.dataset.tab === 'journal') loadJournal().catch((err) => setStatus(err.message, 'error'));
        if (tab.dataset.tab === 'insights') loadInsights('week').catch((err) => setStatus(err.message, 'error'));
      });
    });

    document.getElementById('cycle-length').addEventListener('change', (event) => {
      api('PUT', '/api/cycle/settings', { cycle_length: Number(event.target.value) })
        .then(renderCycle)
        .catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('log-form').addEventListener('submit', (event) => {
      event.preventDefault();
      const form = event.target;
      api('POST', '/api/cycle/days', {
        date: document.getElementById('log-date').value,
        flow: document.getElementById('flow').value,
        pain_level: Number(document.getElementById('pain').value),
        mood: document.getElementById('day-mood').value,
        symptoms: checked(form, 'symptom')
      })
        .then((cycle) => {
          renderCycle(cycle);
          form.reset();
          setStatus('Logged', 'ok');
        })
        .catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('wellness-form').addEventListener('change', (event) => {
      const payload = {};
      event.currentTarget.querySelectorAll('input[type="range"]').forEach((input) => {
        payload[input.name] = Number(input.value);
      });
      api('PUT', '/api/wellness', payload).then(renderWellness).catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('consult').addEventListener('click', () => {
      const journal = document.getElementById('journal-text').value;
      api('POST', '/api/wellness/consult', { journal_entry: journal })
        .then((res) => {
          const prompt = document.getElementById('prompt');
          prompt.textContent = res.prompt;
          prompt.hidden = false;
          return api('GET', '/api/wellness').then(renderWellness);
        })
        .catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('journal-form').addEventListener('submit', (event) => {
      event.preventDefault();
      const form = event.target;
      api('POST', '/api/journal', {
        text: document.getElementById('journal-text').value,
        mood_tags: checked(form, 'tag'),
        activities: checked(form, 'activity')
      })
        .then(() => {
          form.reset();
          setStatus('Saved', 'ok');
          return loadJournal();
        })
        .catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('toggle').addEventListener('click', () => {
      api('POST', '/api/meditation/toggle').then(renderMeditation).catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('reset').addEventListener('click', () => {
      api('POST', '/api/meditation/reset').then(renderMeditation).catch((err) => setStatus(err.message, 'error'));
    });

    document.querySelectorAll('[data-minutes]').forEach((chip) => {
      chip.addEventListener('click', () => {
        api('PUT', '/api/meditation/duration', { minutes: Number(chip.dataset.minutes) })
          .then(renderMeditation)
          .catch((err) => setStatus(err.message, 'error'));
      });
    });

    document.getElementById('sound').addEventListener('change', (event) => {
      api('PUT', '/api/meditation/sound', { sound: event.target.value })
        .then(renderMeditation)
        .catch((err) => setStatus(err.message, 'error'));
    });

    document.querySelectorAll('[data-range]').forEach((chip) => {
      chip.addEventListener('click', () => {
        document.querySelectorAll('[data-range]').forEach((c) => c.classList.toggle('active', c === chip));
        loadInsights(chip.dataset.range).catch((err) => setStatus(err.message, 'error'));
      });
    });

    renderCycle(initial.cycle);
    renderWellness(initial.wellness);
    renderMeditation(initial.meditation);
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cycle::CycleTracker;
    use crate::handlers::to_summary;
    use crate::meditation::MeditationTimer;
    use crate::models::{RatingLabels, WellnessAssessment};
    use chrono::NaiveDate;

    fn wellness() -> WellnessResponse {
        WellnessResponse {
            assessment: WellnessAssessment::default(),
            score: 71,
            band: "Good",
            labels: RatingLabels {
                mood: "Good".into(),
                anxiety: "Mild".into(),
                sleep: "N/A".into(),
                energy: "N/A".into(),
                focus: "Focused".into(),
            },
        }
    }

    #[test]
    fn renders_placeholder_without_period_start() {
        let today = NaiveDate::from_ymd_opt(2026, 4, 2).unwrap();
        let cycle = to_summary(&CycleTracker::default(), today);
        let meditation = MeditationTimer::new(300).snapshot();
        let html = render_index(&PageView {
            cycle: &cycle,
            wellness: &wellness(),
            meditation: &meditation,
        })
        .unwrap();

        assert!(html.contains(r#"id="fertility">Log your period to see predictions<"#));
        assert!(html.contains(r#"id="cycle-day">Not set<"#));
        assert!(html.contains(r#"id="timer">5:00<"#));
        assert!(html.contains(r#"id="score">71<"#));
        assert!(html.contains(r#"value="Breast Tenderness""#));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn renders_predictions_when_start_is_known() {
        let mut tracker = CycleTracker::default();
        tracker.last_period_start = NaiveDate::from_ymd_opt(2024, 1, 1);
        let cycle = to_summary(&tracker, NaiveDate::from_ymd_opt(2024, 1, 3).unwrap());
        let meditation = MeditationTimer::new(60).snapshot();
        let html = render_index(&PageView {
            cycle: &cycle,
            wellness: &wellness(),
            meditation: &meditation,
        })
        .unwrap();

        assert!(html.contains("2023-12-27 - 2024-01-02"));
        assert!(html.contains(r#"id="cycle-day">Day 3<"#));
        assert!(html.contains("Menstrual Phase"));
        assert!(html.contains(r#"id="next-period">2024-01-29<"#));
    }
}
