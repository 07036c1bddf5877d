//! Daily reflection and weekly check-in screens

use super::{now, Flow, Session};
use crate::core::error::Result;
use crate::journal::entry::{DATE_FORMAT, TIME_FORMAT};
use crate::journal::JournalEntry;
use crate::mood::{display_scale, suggested_activities, MoodShift};
use crate::ui::{Console, Tone};
use rand::Rng;
use tracing::debug;

const DAILY_QUESTIONS: [&str; 5] = [
    "What's a positive thing that happened today?",
    "What made the day challenging, and how did you handle it?",
    "Did you connect with anyone today, how was that experience?",
    "What would you do differently tomorrow? ",
    "How are you feeling at this moment? (use 1-5 words)",
];

const WEEKLY_QUESTIONS: [&str; 5] = [
    "What do you feel was your biggest accomplishment this week? ",
    "What do you feel was the most challenging this week? ",
    "What support do you need right now? ",
    "What is one goal you would like to set for next week? ",
    "How have you grown or changed this week? ",
];

/// Fills every unanswered question after a SKIP
const SKIPPED: &str = "Skipped";

impl<C: Console, R: Rng> Session<C, R> {
    pub(super) fn daily_reflection(&mut self, name: &str) -> Result<Flow> {
        let when = now();
        self.console
            .say(Tone::Plain, &format!("\n Hello {name}, let's reflect on today..."));
        self.console.say(
            Tone::Plain,
            &format!(
                "\nToday's Date: {}\nCurrent Time: {}",
                when.format(DATE_FORMAT),
                when.format(TIME_FORMAT)
            ),
        );

        if let Some(initial) = &self.initial_mood {
            self.console
                .say(Tone::Info, "\nInitial Mood (from start of session):");
            self.console.say(Tone::Notice, &initial.description);
        }
        self.console.say(Tone::Info, "\nLet's check in with your mood...");
        self.console.say(Tone::Plain, &display_scale());

        let Some(mood) = self.ask_mood(
            "\nHow are you feeling right now? (1-5 or keyword): ",
            "Invalid mood input. Please use 1-5 or a keyword.",
        )?
        else {
            return Ok(Flow::Closed);
        };

        match &self.initial_mood {
            Some(initial) => {
                let shift = MoodShift::between(initial.level, mood.level);
                debug!(session = %self.id, ?shift, "Mood compared with session start");
                self.console
                    .say(Tone::Notice, &format!("\n✓ Current mood: {}", mood.description));
                self.console.say(Tone::Info, &format!("\n{}", shift.message()));
            }
            None => self
                .console
                .say(Tone::Notice, &format!("\n✓ Mood recorded: {}", mood.description)),
        }
        self.companion_reply(&mood);

        let offer = self.companion.offer_support(mood.level);
        self.console.say(Tone::Info, &format!("\n{offer} (yes/no)"));
        let Some(choice) = self.console.read_line("")? else {
            return Ok(Flow::Closed);
        };

        if matches!(choice.trim().to_lowercase().as_str(), "yes" | "y" | "yeah") {
            self.console
                .say(Tone::Success, "\nLet's explore that together...");
            let questions = self
                .companion
                .followup_questions(mood.level, self.config.followup_count);
            self.console
                .say(Tone::Notice, "\nHere are some questions for reflection:");
            for (number, question) in questions.iter().enumerate() {
                self.console
                    .say(Tone::Plain, &format!("\n{}. {}", number + 1, question));
                // Follow-up thoughts stay private to the session
                if self
                    .console
                    .read_line("Your thoughts (or press Enter to skip): ")?
                    .is_none()
                {
                    return Ok(Flow::Closed);
                }
            }
            self.console.say(Tone::Success, "\n✓ Reflection completed");
        } else {
            self.console
                .say(Tone::Info, "\nA few things that might help right now:");
            for activity in suggested_activities(i64::from(mood.level.get())) {
                self.console.say(Tone::Plain, &format!("  • {activity}"));
            }
        }

        let Some(answers) = self.ask_questions(&DAILY_QUESTIONS, "Let me hear your thoughts: ")?
        else {
            return Ok(Flow::Closed);
        };

        self.save_entry(
            name,
            &JournalEntry::Daily {
                when,
                mood: Some(mood.description.clone()),
                answers,
            },
        );
        self.initial_mood = None;
        Ok(Flow::Continue)
    }

    pub(super) fn weekly_check_in(&mut self, name: &str) -> Result<Flow> {
        let when = now();
        self.console
            .say(Tone::Plain, &format!("\n{name}, let's check-in..."));

        let Some(answers) = self.ask_questions(&WEEKLY_QUESTIONS, "Your response: ")? else {
            return Ok(Flow::Closed);
        };
        self.save_entry(name, &JournalEntry::Weekly { when, answers });
        Ok(Flow::Continue)
    }

    /// One answer per question; typing SKIP between questions fills the rest
    /// with "Skipped". `None` when input closes.
    fn ask_questions(&mut self, questions: &[&str], prompt: &str) -> Result<Option<Vec<String>>> {
        let mut answers = Vec::with_capacity(questions.len());

        for (index, question) in questions.iter().enumerate() {
            self.console
                .say(Tone::Plain, &format!("\n{}. {}", index + 1, question));
            let Some(answer) = self.console.read_line(prompt)? else {
                return Ok(None);
            };
            answers.push(answer);

            if index + 1 == questions.len() {
                break;
            }
            let Some(skip) = self
                .console
                .read_line("\nPress ENTER to continue or type 'SKIP' to finish: ")?
            else {
                return Ok(None);
            };
            if skip.trim().eq_ignore_ascii_case("skip") {
                answers.resize(questions.len(), SKIPPED.to_string());
                break;
            }
        }

        Ok(Some(answers))
    }
}
