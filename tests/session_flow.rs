//! End-to-end sessions driven by a scripted console

use journal_companion::core::CompanionConfig;
use journal_companion::journal::JournalStore;
use journal_companion::mood::resolve_mood;
use journal_companion::session::{Session, SessionOutcome};
use journal_companion::ui::{ScriptedConsole, Tone};
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tempfile::TempDir;

fn session(dir: &TempDir, inputs: &[&str]) -> Session<ScriptedConsole, ChaCha8Rng> {
    let config = CompanionConfig {
        journal_dir: dir.path().to_path_buf(),
        thinking_delay_ms: 0,
        ..CompanionConfig::default()
    };
    Session::new(
        config,
        ScriptedConsole::new(inputs.iter().copied()),
        ChaCha8Rng::seed_from_u64(2024),
    )
}

#[test]
fn test_three_invalid_choices_end_the_session() {
    let dir = TempDir::new().unwrap();
    let mut s = session(&dir, &["happy", "Grace", "7", "", "help", "1"]);
    assert_eq!(s.run().unwrap(), SessionOutcome::TooManyInvalidAttempts);

    let console = s.into_console();
    assert_eq!(console.remaining_inputs(), 1);
    let transcript = console.transcript();
    assert!(transcript.contains("'7' is not a valid option."));
    assert!(transcript.contains("Too many invalid attempts (3/3)."));
    assert!(console
        .output()
        .iter()
        .any(|(tone, text)| *tone == Tone::Error && text.contains("prevent misuse")));
    assert!(JournalStore::new(dir.path()).read("Grace").unwrap().is_none());
}

#[test]
fn test_configured_invalid_limit() {
    let dir = TempDir::new().unwrap();
    let config = CompanionConfig {
        journal_dir: dir.path().to_path_buf(),
        max_invalid_attempts: 1,
        ..CompanionConfig::default()
    };
    let mut s = Session::new(
        config,
        ScriptedConsole::new(["3", "Grace", "nope"]),
        ChaCha8Rng::seed_from_u64(1),
    );
    assert_eq!(s.run().unwrap(), SessionOutcome::TooManyInvalidAttempts);
}

#[test]
fn test_full_journey() {
    let dir = TempDir::new().unwrap();
    let inputs = [
        "okay", "Grace",
        // daily reflection
        "daily", "good", "no", "a walk", "", "a late bus", "", "called mum", "", "sleep early", "", "calm",
        // view entries
        "view",
        // recap, saved
        "recap", "y",
        "exit",
    ];
    let mut s = session(&dir, &inputs);
    assert_eq!(s.run().unwrap(), SessionOutcome::Completed);

    let transcript = s.console().transcript();
    assert!(transcript.contains("Here are your previous journal entries, Grace:"));
    assert!(transcript.contains("Found 1 journal entries (1 daily, 0 weekly, 0 chat)."));
    assert!(transcript.contains("Thank you for journaling today, Grace."));

    let journal = JournalStore::new(dir.path()).read("Grace").unwrap().unwrap();
    assert!(journal.contains("Mood: Good\n"));
    assert!(journal.contains("Connections: called mum\n"));
    assert!(journal.contains("Current feelings: calm\n"));
    assert!(journal.contains("Weekly Recap - "));
    assert!(journal.contains("You completed 1 journal entries this week."));
}

#[test]
fn test_preset_mood_and_name_skip_prompts() {
    let dir = TempDir::new().unwrap();
    let mood = resolve_mood("very good").unwrap();
    let mut s = session(&dir, &["6"]).with_name("Grace").with_initial_mood(mood);
    assert_eq!(s.run().unwrap(), SessionOutcome::Completed);

    let console = s.into_console();
    assert_eq!(console.prompts().len(), 1);
    assert!(console
        .transcript()
        .contains("Initial mood from command line: Very Good"));
}

#[test]
fn test_input_closed_before_name() {
    let dir = TempDir::new().unwrap();
    let mut s = session(&dir, &["5"]);
    assert_eq!(s.run().unwrap(), SessionOutcome::InputClosed);
}

#[test]
fn test_same_seed_same_transcript() {
    let run = || {
        let dir = TempDir::new().unwrap();
        let mut s = session(&dir, &["2", "Grace", "chat", "hello", "I feel stressed", "bye", "6"]);
        s.run().unwrap();
        s.into_console().transcript()
    };
    assert_eq!(run(), run());
}
