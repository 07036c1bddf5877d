//! Rule-based empathetic companion
//!
//! Picks canned replies by mood level or message category. All randomness
//! flows through the injected RNG, so a seeded companion is reproducible.

pub mod chat;
pub mod recap;
pub mod responses;

pub use chat::{categorize, MessageCategory};

use crate::core::types::MoodLevel;
use crate::journal::JournalStats;
use crate::mood::MoodAssessment;
use rand::seq::SliceRandom;
use rand::Rng;

/// Chat lines kept as context between replies
const HISTORY_WINDOW: usize = 10;

pub struct Companion<R: Rng> {
    rng: R,
    empathetic_ratio: f64,
    history: Vec<String>,
}

impl<R: Rng> Companion<R> {
    pub fn new(rng: R, empathetic_ratio: f64) -> Self {
        Self {
            rng,
            empathetic_ratio: empathetic_ratio.clamp(0.0, 1.0),
            history: Vec::new(),
        }
    }

    fn pick(&mut self, options: &[&'static str]) -> &'static str {
        options.choose(&mut self.rng).copied().unwrap_or_default()
    }

    /// Reply to a mood check-in
    pub fn empathetic_response(&mut self, level: MoodLevel) -> &'static str {
        let replies = responses::mood_replies(level);
        let response = if self.rng.gen_bool(self.empathetic_ratio) {
            self.pick(replies.empathetic)
        } else {
            self.pick(replies.supportive)
        };
        self.history
            .push(format!("Companion (mood {}): {}", level, response));
        response
    }

    pub fn offer_support(&self, level: MoodLevel) -> &'static str {
        responses::support_offer(level)
    }

    /// Up to `count` follow-up questions; all of them when the pool is smaller
    pub fn followup_questions(&mut self, level: MoodLevel, count: usize) -> Vec<&'static str> {
        let pool = responses::followup_pool(level);
        if pool.len() <= count {
            return pool.to_vec();
        }
        pool.choose_multiple(&mut self.rng, count).copied().collect()
    }

    /// Conversational reply for chat mode
    ///
    /// `transcript` replaces the remembered context (last 10 lines) when
    /// non-empty. A known mood is echoed back when the message talks about
    /// feelings.
    pub fn chat_response(
        &mut self,
        message: &str,
        transcript: &[String],
        mood: Option<&MoodAssessment>,
    ) -> String {
        if !transcript.is_empty() {
            let start = transcript.len().saturating_sub(HISTORY_WINDOW);
            self.history = transcript[start..].to_vec();
        }

        let lower = message.to_lowercase();
        let category = categorize(&lower);
        let reply = match category {
            MessageCategory::General if lower.contains('?') => responses::QUESTION_REPLY,
            other => self.pick(responses::chat_pool(other)),
        };

        let response = match mood {
            Some(mood) if lower.contains("feeling") => format!(
                "I remember you mentioned feeling {}. {}",
                mood.description.to_lowercase(),
                reply
            ),
            _ => reply.to_string(),
        };

        self.history.push(format!("User: {message}"));
        self.history.push(format!("Companion: {response}"));
        response
    }

    /// Recap of the week; `None` means there is no journal yet
    pub fn weekly_recap(&mut self, stats: Option<&JournalStats>) -> String {
        let Some(stats) = stats else {
            return responses::QUIET_WEEK_RECAP.to_string();
        };

        let index = self.rng.gen_range(0..recap::RECAP_TEMPLATES.len());
        let template = recap::RECAP_TEMPLATES[index];
        let mut text = template.render(|pool| self.pick(pool));

        if stats.total() > 0 {
            text.push_str("\n\n");
            text.push_str(&recap::entry_count_note(stats.total()));
        }
        text
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
        tracing::debug!("Companion history cleared");
    }
}
