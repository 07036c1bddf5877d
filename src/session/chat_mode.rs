//! Free-form chat with the companion

use super::{now, Flow, Session};
use crate::core::error::Result;
use crate::journal::JournalEntry;
use crate::mood::{display_scale, resolve_mood};
use crate::ui::{banner, rule, Console, Tone};
use rand::Rng;
use tracing::debug;

const EXIT_WORDS: [&str; 4] = ["exit", "quit", "bye", "goodbye"];
const HELP_WORDS: [&str; 3] = ["help", "commands", "?"];
const MOOD_WORDS: [&str; 3] = ["mood", "how am i feeling", "check mood"];
const SUMMARY_WORDS: [&str; 3] = ["summary", "recap", "my journal"];

impl<C: Console, R: Rng> Session<C, R> {
    pub(super) fn chat_mode(&mut self, name: &str) -> Result<Flow> {
        let separator = rule('=');
        self.console.say(
            Tone::Info,
            &format!("\n{separator}\nCHAT MODE - Talk with your Journal Companion\n{separator}"),
        );
        self.console.say(
            Tone::Success,
            &format!(
                "\nHello {name}! I'm here to listen and chat.\nYou can talk about anything - your day, feelings, thoughts, or just chat.\nType 'exit' to return to the main menu, or 'help' for commands."
            ),
        );

        let mood = self.initial_mood.take();
        let mut transcript = vec![format!("User: Hello {name}! Ready to chat?")];
        if let Some(mood) = &mood {
            transcript.push(format!("User's current mood: {}", mood.description));
        }
        self.console.say(
            Tone::Notice,
            &format!("\nJournal Companion: Hi {name}! How are you feeling today?"),
        );

        let mut sent = 0;
        while sent < self.config.chat_max_messages {
            let Some(input) = self.console.read_line("\nYou: ")? else {
                self.save_chat(name, &transcript);
                return Ok(Flow::Closed);
            };
            let command = input.trim().to_lowercase();

            let message = if EXIT_WORDS.contains(&command.as_str()) {
                self.console.say(
                    Tone::Info,
                    &format!("\nJournal Companion: Thanks for chatting, {name}! I'm here whenever you need to talk."),
                );
                self.save_chat(name, &transcript);
                return Ok(Flow::Continue);
            } else if HELP_WORDS.contains(&command.as_str()) {
                self.show_chat_help();
                continue;
            } else if MOOD_WORDS.contains(&command.as_str()) {
                self.console.say(Tone::Info, "\nQuick Mood Check:");
                self.console.say(Tone::Plain, &display_scale());
                let Some(answer) = self
                    .console
                    .read_line("\nHow are you feeling? (1-5 or keyword): ")?
                else {
                    self.save_chat(name, &transcript);
                    return Ok(Flow::Closed);
                };
                match resolve_mood(&answer) {
                    Some(checked) => {
                        self.console
                            .say(Tone::Notice, &format!("\n✓ Mood noted: {}", checked.description));
                        format!("I'm feeling {}", checked.description.to_lowercase())
                    }
                    None => {
                        self.console
                            .say(Tone::Error, "Couldn't assess mood. Let's continue chatting.");
                        input.trim().to_string()
                    }
                }
            } else if SUMMARY_WORDS.contains(&command.as_str()) {
                format!("Tell me about my journal: {}", self.store.summary(name))
            } else {
                input.trim().to_string()
            };

            transcript.push(format!("You: {message}"));
            self.console.say(Tone::Notice, "\nJournal Companion:");
            self.thinking_pause();
            let response = self
                .companion
                .chat_response(&message, &transcript, mood.as_ref());
            self.console.say(Tone::Success, &response);
            transcript.push(format!("Companion: {response}"));

            sent += 1;
            debug!(session = %self.id, sent, "Chat message answered");

            // An interval of zero disables the periodic save prompt
            if sent.checked_rem(self.config.chat_save_interval) == Some(0) {
                let Some(answer) = self.console.read_line(
                    "\nWould you like to save this conversation to your journal? (yes/no): ",
                )?
                else {
                    self.save_chat(name, &transcript);
                    return Ok(Flow::Closed);
                };
                if super::is_yes(&answer) && self.save_chat(name, &transcript) {
                    transcript.clear();
                    self.companion.clear_history();
                }
            }
        }

        self.console
            .say(Tone::Notice, "\nWe've had a long chat! Let's take a break.");
        self.save_chat(name, &transcript);
        Ok(Flow::Continue)
    }

    fn show_chat_help(&mut self) {
        self.console
            .say(Tone::Info, &format!("\n{}", banner("CHAT MODE COMMANDS")));
        self.console.say(Tone::Notice, "\nAvailable commands:");
        for line in [
            "  • exit/quit/bye - Return to main menu",
            "  • help/commands - Show this help",
            "  • mood - Quick mood check",
            "  • summary/recap - Get journal summary",
        ] {
            self.console.say(Tone::Plain, line);
        }
        self.console.say(Tone::Info, "\nYou can talk about:");
        for line in [
            "  • Your day, feelings, or thoughts",
            "  • Journal entries or reflections",
            "  • Goals, challenges, or achievements",
            "  • Anything on your mind!",
        ] {
            self.console.say(Tone::Plain, line);
        }
    }

    /// Append the tail of the transcript as a chat entry; true when written
    fn save_chat(&mut self, name: &str, transcript: &[String]) -> bool {
        if transcript.is_empty() {
            self.console.say(Tone::Notice, "\nNo conversation to save.");
            return false;
        }

        let start = transcript.len().saturating_sub(self.config.transcript_tail);
        let entry = JournalEntry::Chat {
            when: now(),
            lines: transcript[start..].to_vec(),
        };
        match self.store.append(name, &entry) {
            Ok(_) => {
                self.console
                    .say(Tone::Success, "\n✓ Chat conversation saved to your journal!");
                true
            }
            Err(e) => {
                self.report_save_error(&e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::CompanionConfig;
    use crate::journal::JournalStore;
    use crate::session::SessionOutcome;
    use crate::ui::ScriptedConsole;
    use rand_chacha::rand_core::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use tempfile::TempDir;

    fn session(dir: &TempDir, config: CompanionConfig, inputs: &[&str]) -> Session<ScriptedConsole, ChaCha8Rng> {
        let config = CompanionConfig {
            journal_dir: dir.path().to_path_buf(),
            thinking_delay_ms: 0,
            ..config
        };
        Session::new(
            config,
            ScriptedConsole::new(inputs.iter().copied()),
            ChaCha8Rng::seed_from_u64(21),
        )
        .with_name("Ada")
    }

    #[test]
    fn test_exit_saves_transcript() {
        let dir = TempDir::new().unwrap();
        let mut s = session(
            &dir,
            CompanionConfig::default(),
            &["4", "5", "hello there", "help", "bye", "6"],
        );
        assert_eq!(s.run().unwrap(), SessionOutcome::Completed);

        let transcript = s.console().transcript();
        assert!(transcript.contains("Available commands:"));
        assert!(transcript.contains("Thanks for chatting, Ada!"));

        let journal = JournalStore::new(dir.path()).read("Ada").unwrap().unwrap();
        assert!(journal.contains("Entry Type: Chat Conversation\n"));
        assert!(journal.contains("User: Hello Ada! Ready to chat?\n"));
        assert!(journal.contains("User's current mood: Good\n"));
        assert!(journal.contains("You: hello there\n"));
        assert!(!journal.contains("You: help"));
    }

    #[test]
    fn test_mood_and_summary_commands_rewrite_message() {
        let dir = TempDir::new().unwrap();
        let mut s = session(
            &dir,
            CompanionConfig::default(),
            &["4", "chat", "mood", "a bit sad", "summary", "exit", "6"],
        );
        assert_eq!(s.run().unwrap(), SessionOutcome::Completed);
        assert!(s.console().transcript().contains("✓ Mood noted: Slightly Low"));

        let journal = JournalStore::new(dir.path()).read("Ada").unwrap().unwrap();
        assert!(journal.contains("You: I'm feeling slightly low\n"));
        assert!(journal.contains(
            "You: Tell me about my journal: You haven't made any journal entries yet.\n"
        ));
    }

    #[test]
    fn test_message_cap_and_periodic_save() {
        let dir = TempDir::new().unwrap();
        let config = CompanionConfig {
            chat_max_messages: 4,
            chat_save_interval: 2,
            ..CompanionConfig::default()
        };
        let mut s = session(&dir, config, &["3", "5", "one", "two", "yes", "three", "four", "no", "6"]);
        assert_eq!(s.run().unwrap(), SessionOutcome::Completed);
        assert!(s
            .console()
            .transcript()
            .contains("We've had a long chat! Let's take a break."));

        let journal = JournalStore::new(dir.path()).read("Ada").unwrap().unwrap();
        assert_eq!(journal.matches("Entry Type: Chat Conversation").count(), 2);
        let second = journal.rsplit("Entry Type: Chat Conversation").next().unwrap();
        assert!(second.contains("You: three\n"));
        assert!(!second.contains("You: one\n"));
    }

    #[test]
    fn test_chat_clears_initial_mood() {
        let dir = TempDir::new().unwrap();
        let mut s = session(
            &dir,
            CompanionConfig::default(),
            &["3", "5", "exit", "1", "2", "no", "skip", "skip", "6"],
        );
        assert_eq!(s.run().unwrap(), SessionOutcome::Completed);
        let transcript = s.console().transcript();
        assert!(!transcript.contains("Initial Mood (from start of session):"));
        assert!(transcript.contains("✓ Mood recorded: Low"));
        assert!(!transcript.contains("✓ Current mood"));
    }

    #[test]
    fn test_zero_save_interval_never_prompts() {
        let dir = TempDir::new().unwrap();
        let config = CompanionConfig {
            chat_save_interval: 0,
            ..CompanionConfig::default()
        };
        let mut s = session(&dir, config, &["3", "chat", "hello", "bye", "6"]);
        assert_eq!(s.run().unwrap(), SessionOutcome::Completed);
        assert!(!s
            .console()
            .prompts()
            .iter()
            .any(|p| p.contains("save this conversation")));

        let journal = JournalStore::new(dir.path()).read("Ada").unwrap().unwrap();
        assert!(journal.contains("You: hello\n"));
    }

    #[test]
    fn test_start_in_chat_and_input_closed() {
        let dir = TempDir::new().unwrap();
        let mut s = session(&dir, CompanionConfig::default(), &["2", "rough day"]).start_in_chat(true);
        assert_eq!(s.run().unwrap(), SessionOutcome::InputClosed);

        let journal = JournalStore::new(dir.path()).read("Ada").unwrap().unwrap();
        assert!(journal.contains("You: rough day\n"));
    }
}
