use crate::models::WellnessAssessment;
use crate::wellness::{Dimension, rating_label};
use tokio::sync::mpsc;
use tracing::info;

/// Message assembled for the assistant from a check-in and journal text.
pub fn build_prompt(assessment: &WellnessAssessment, journal_entry: &str) -> String {
    let journal = if journal_entry.is_empty() {
        "No journal entry provided"
    } else {
        journal_entry
    };

    format!(
        "\nI'd like some mental wellness advice based on my current state:\n\
         \n\
         Mood: {}/10 ({})\n\
         Anxiety Level: {}/10 ({})\n\
         Sleep Quality: {}/10 ({})\n\
         Energy Level: {}/10 ({})\n\
         Focus Level: {}/10 ({})\n\
         \n\
         Journal Entry: {journal}\n\
         \n\
         Based on this information, could you provide some personalized mental wellness recommendations?\n",
        assessment.mood,
        rating_label(Dimension::Mood, assessment.mood),
        assessment.anxiety,
        rating_label(Dimension::Anxiety, assessment.anxiety),
        assessment.sleep,
        rating_label(Dimension::Sleep, assessment.sleep),
        assessment.energy,
        rating_label(Dimension::Energy, assessment.energy),
        assessment.focus,
        rating_label(Dimension::Focus, assessment.focus),
    )
}

/// Stand-in collaborator: receives forwarded prompts and logs them.
pub async fn run_assistant(mut prompts: mpsc::UnboundedReceiver<String>) {
    while let Some(prompt) = prompts.recv().await {
        info!(chars = prompt.len(), "assistant received prompt");
    }
}
