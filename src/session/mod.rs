//! Interactive journaling session
//!
//! Initial mood check-in -> name -> main menu loop. The menu choice goes
//! through the command table; the Default rule feeds the invalid streak and
//! every other rule dispatches one screen.

mod chat_mode;
mod reflection;

use crate::command::{CommandResolver, InvalidStreak, MenuAction, StreakStatus};
use crate::companion::Companion;
use crate::core::config::CompanionConfig;
use crate::core::error::Result;
use crate::core::types::SessionId;
use crate::journal::{JournalEntry, JournalStore};
use crate::mood::{display_scale, mood_color, resolve_mood, MoodAssessment};
use crate::ui::{banner, menu_lines, rule, titled_rule, Console, Tone};
use chrono::{Local, NaiveDateTime};
use rand::Rng;
use std::time::Duration;
use tracing::{debug, info, warn};

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The user chose to exit
    Completed,
    /// Too many unrecognized menu choices in a row
    TooManyInvalidAttempts,
    /// Input ended before the user exited
    InputClosed,
}

/// Whether a screen finished or ran out of input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Closed,
}

pub struct Session<C: Console, R: Rng> {
    id: SessionId,
    config: CompanionConfig,
    store: JournalStore,
    companion: Companion<R>,
    console: C,
    resolver: CommandResolver<'static>,
    streak: InvalidStreak,
    name: Option<String>,
    initial_mood: Option<MoodAssessment>,
    start_in_chat: bool,
}

impl<C: Console, R: Rng> Session<C, R> {
    pub fn new(config: CompanionConfig, console: C, rng: R) -> Self {
        Self {
            id: SessionId::new(),
            store: JournalStore::new(config.journal_dir.clone()),
            companion: Companion::new(rng, config.empathetic_ratio),
            streak: InvalidStreak::new(config.max_invalid_attempts),
            resolver: CommandResolver::standard(),
            console,
            config,
            name: None,
            initial_mood: None,
            start_in_chat: false,
        }
    }

    /// Skip the name prompt
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Skip the initial mood check-in
    pub fn with_initial_mood(mut self, mood: MoodAssessment) -> Self {
        self.initial_mood = Some(mood);
        self
    }

    /// Open chat mode right after setup, before the first menu
    pub fn start_in_chat(mut self, enabled: bool) -> Self {
        self.start_in_chat = enabled;
        self
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn into_console(self) -> C {
        self.console
    }

    pub fn run(&mut self) -> Result<SessionOutcome> {
        info!(session = %self.id, "Session started");
        let outcome = self.run_screens()?;
        info!(session = %self.id, ?outcome, "Session ended");
        Ok(outcome)
    }

    fn run_screens(&mut self) -> Result<SessionOutcome> {
        self.console.say(Tone::Info, "\nJournal Companion Chatbot: ");
        self.console
            .say(Tone::Notice, "✓ Empathetic responses enabled - Ready to listen");
        self.console.say(
            Tone::Highlight,
            "\n✨ NEW: Chat Mode available! Select option 5 to have a conversation. ✨",
        );

        match self.initial_mood.clone() {
            Some(mood) => {
                self.console.say(
                    Tone::Info,
                    &format!("\nInitial mood from command line: {}", mood.description),
                );
                self.companion_reply(&mood);
            }
            None => {
                if self.initial_check_in()? == Flow::Closed {
                    return Ok(SessionOutcome::InputClosed);
                }
            }
        }

        self.welcome();
        let name = match self.name.clone() {
            Some(name) if self.store.path_for(&name).is_ok() => name.trim().to_string(),
            other => {
                if let Some(rejected) = other {
                    warn!(name = %rejected, "Unusable user name, asking again");
                }
                match self.ask_name()? {
                    Some(name) => name,
                    None => return Ok(SessionOutcome::InputClosed),
                }
            }
        };
        self.name = Some(name.clone());
        self.console
            .say(Tone::Plain, &format!("\nWelcome, {name}! I am glad you are here."));
        self.console.say(
            Tone::Plain,
            "Keep in mind, this is your journey - we'll take it one day at a time.",
        );

        if self.start_in_chat && self.chat_mode(&name)? == Flow::Closed {
            return Ok(SessionOutcome::InputClosed);
        }

        self.menu_loop(&name)
    }

    fn welcome(&mut self) {
        self.console.say(
            Tone::Plain,
            &format!("\n{}\n", titled_rule("Welcome to your Journal Companion", '=')),
        );
        self.console
            .say(Tone::Plain, "This is a private space to reflect on your journey.");
        self.console
            .say(Tone::Plain, "All entries will be securely saved on your device.");
        self.console.say(Tone::Plain, "Take your time, there's no rush.\n");
    }

    fn initial_check_in(&mut self) -> Result<Flow> {
        self.console
            .say(Tone::Info, &format!("\n{}", banner("INITIAL MOOD CHECK-IN")));
        self.console.say(
            Tone::Plain,
            "\nBefore we begin, let's check in with how you're feeling right now.\n",
        );
        self.console.say(Tone::Plain, &display_scale());

        let Some(mood) = self.ask_mood(
            "\nHow are you feeling? (1-5 or keyword): ",
            "Invalid input. Please use 1-5 or a keyword.",
        )?
        else {
            return Ok(Flow::Closed);
        };

        self.console
            .say(Tone::Notice, &format!("\n✓ Mood recorded: {}", mood.description));
        self.companion_reply(&mood);
        self.initial_mood = Some(mood);
        Ok(Flow::Continue)
    }

    fn ask_name(&mut self) -> Result<Option<String>> {
        self.console
            .say(Tone::Plain, "As we begin this journey, let's get to know some more ...");
        loop {
            let Some(input) = self
                .console
                .read_line("What is your first name, or what would like to be addressed as? ")?
            else {
                return Ok(None);
            };
            let name = input.trim();
            if name.is_empty() {
                self.console.say(Tone::Plain, "Please enter your name to continue.");
            } else if self.store.path_for(name).is_err() {
                self.console.say(
                    Tone::Error,
                    "That name can't be used for a journal file. Please try another.",
                );
            } else {
                return Ok(Some(name.to_string()));
            }
        }
    }

    fn menu_loop(&mut self, name: &str) -> Result<SessionOutcome> {
        loop {
            let separator = rule('=');
            self.console.say(Tone::Plain, &format!("\n{separator}\n"));
            self.console
                .say(Tone::Plain, &format!("Hello {name}! What would you like to do? "));
            self.console.say(Tone::Plain, &format!("\n{separator}\n"));
            for line in menu_lines(crate::command::command_table()) {
                self.console.say(Tone::Plain, &line);
            }
            self.console.say(Tone::Plain, &format!("\n{}", rule('-')));

            let Some(choice) = self.console.read_line("\n Please select (1-6): ")? else {
                return Ok(SessionOutcome::InputClosed);
            };
            let outcome = self.resolver.evaluate(&choice);
            debug!(session = %self.id, rule = %outcome.rule_id, "Menu choice resolved");

            let Some(action) = outcome.action() else {
                self.console.say(
                    Tone::Error,
                    &format!(
                        "\n{}\n\n'{}' is not a valid option.\nPlease choose one of the options shown above",
                        titled_rule("Invalid Selection", '-'),
                        choice.trim()
                    ),
                );
                match self.streak.record_invalid() {
                    StreakStatus::Retry { .. } => continue,
                    StreakStatus::Exhausted { attempts } => {
                        warn!(session = %self.id, attempts, "Too many invalid menu choices");
                        self.console.say(
                            Tone::Error,
                            &format!(
                                "\n{}\nThe program will now exit to prevent misuse.\nPlease restart when you're ready.\n",
                                titled_rule(
                                    &format!(
                                        "Too many invalid attempts ({attempts}/{}).",
                                        self.streak.limit()
                                    ),
                                    '-'
                                )
                            ),
                        );
                        return Ok(SessionOutcome::TooManyInvalidAttempts);
                    }
                }
            };

            self.console
                .say(Tone::Success, &format!("\n {}", outcome.message));
            let flow = match action {
                MenuAction::DailyReflection => self.daily_reflection(name)?,
                MenuAction::WeeklyCheckIn => self.weekly_check_in(name)?,
                MenuAction::ViewEntries => self.view_entries(name)?,
                MenuAction::WeeklyRecap => self.weekly_recap(name)?,
                MenuAction::Chat => self.chat_mode(name)?,
                MenuAction::Exit => {
                    self.farewell(name);
                    return Ok(SessionOutcome::Completed);
                }
            };
            self.streak.reset();
            if flow == Flow::Closed {
                return Ok(SessionOutcome::InputClosed);
            }
        }
    }

    fn view_entries(&mut self, name: &str) -> Result<Flow> {
        match self.store.read(name) {
            Ok(Some(content)) => {
                self.console.say(
                    Tone::Plain,
                    &format!("\nHere are your previous journal entries, {name}:\n"),
                );
                self.console.say(Tone::Plain, &content);
            }
            Ok(None) => self.console.say(
                Tone::Plain,
                "\nUnfortunately you have not saved a file yet. Your Journal is ready to listen when you are ready to say.",
            ),
            Err(e) => {
                warn!(session = %self.id, error = %e, "Could not read journal entries");
                self.console
                    .say(Tone::Error, &format!("Error reading journal file: {e}"));
            }
        }
        Ok(Flow::Continue)
    }

    fn weekly_recap(&mut self, name: &str) -> Result<Flow> {
        self.console.say(
            Tone::Info,
            &format!("\nGenerating your weekly recap, {name}..."),
        );

        let stats = match self.store.stats(name) {
            Ok(Some(stats)) => stats,
            Ok(None) => {
                self.console.say(
                    Tone::Notice,
                    "No journal entries found yet. Start journaling to get a weekly recap!",
                );
                return Ok(Flow::Continue);
            }
            Err(e) => {
                warn!(session = %self.id, error = %e, "Could not read journal for recap");
                self.console
                    .say(Tone::Error, &format!("Error reading journal file: {e}"));
                return Ok(Flow::Continue);
            }
        };

        self.console.say(
            Tone::Success,
            &format!(
                "\nFound {} journal entries ({} daily, {} weekly, {} chat).",
                stats.total(),
                stats.daily,
                stats.weekly,
                stats.chat
            ),
        );

        let recap = self.companion.weekly_recap(Some(&stats));
        self.console
            .say(Tone::Info, &format!("\n{}", banner("WEEKLY RECAP")));
        self.console.say(Tone::Plain, &format!("\n{recap}"));
        self.console.say(Tone::Info, &format!("\n{}", rule('=')));

        let Some(answer) = self
            .console
            .read_line("\nSave this recap to your journal? (yes/no): ")?
        else {
            return Ok(Flow::Closed);
        };
        if is_yes(&answer) {
            match self.store.append_recap(name, &recap, now()) {
                Ok(_) => self
                    .console
                    .say(Tone::Success, "✓ Recap saved to your journal!"),
                Err(e) => self.report_save_error(&e),
            }
        }
        Ok(Flow::Continue)
    }

    fn farewell(&mut self, name: &str) {
        self.console
            .say(Tone::Info, &format!("\n{}", banner("SESSION COMPLETE")));
        self.console.say(
            Tone::Plain,
            &format!(
                "\nThank you for journaling today, {name}.\nRemember: Progress, not perfection. You've got this!\nHope to see you again soon.\n"
            ),
        );
    }

    /// Re-prompt until the input resolves to a mood; `None` when input closes
    fn ask_mood(&mut self, prompt: &str, retry: &str) -> Result<Option<MoodAssessment>> {
        loop {
            let Some(input) = self.console.read_line(prompt)? else {
                return Ok(None);
            };
            match resolve_mood(&input) {
                Some(mood) => {
                    debug!(session = %self.id, level = %mood.level, "Mood resolved");
                    return Ok(Some(mood));
                }
                None => {
                    debug!(session = %self.id, "Mood input not recognized");
                    self.console.say(Tone::Error, retry);
                }
            }
        }
    }

    /// Companion label followed by a mood-colored empathetic reply
    fn companion_reply(&mut self, mood: &MoodAssessment) {
        self.console.say(Tone::Info, "\nJournal Companion:");
        let response = self.companion.empathetic_response(mood.level);
        self.console.say(
            Tone::Mood(mood_color(i64::from(mood.level.get()))),
            response,
        );
    }

    fn save_entry(&mut self, name: &str, entry: &JournalEntry) {
        match self.store.append(name, entry) {
            Ok(path) => self.console.say(
                Tone::Success,
                &format!("\n✓ Your entry has been saved to {}", path.display()),
            ),
            Err(e) => self.report_save_error(&e),
        }
    }

    fn report_save_error(&mut self, error: &crate::core::error::CompanionError) {
        warn!(session = %self.id, error = %error, "Journal write failed");
        self.console
            .say(Tone::Error, &format!("\nCould not save to your journal: {error}"));
    }

    fn thinking_pause(&mut self) {
        self.console
            .pause(Duration::from_millis(self.config.thinking_delay_ms));
    }
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "yes" | "y")
}
