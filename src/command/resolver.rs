//! Menu command resolution - first-match-wins decision table with a total default

use crate::core::error::{CompanionError, Result};
use ahash::AHashSet;
use serde::Serialize;
use std::fmt;
use std::sync::OnceLock;

/// Identifier of the rule that accepted an input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RuleId {
    R1,
    R2,
    R3,
    R4,
    R5,
    R6,
    Default,
}

impl RuleId {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::R1 => "R1",
            Self::R2 => "R2",
            Self::R3 => "R3",
            Self::R4 => "R4",
            Self::R5 => "R5",
            Self::R6 => "R6",
            Self::Default => "Default",
        }
    }

    /// The menu action this rule stands for (`None` for Default)
    pub fn action(self) -> Option<MenuAction> {
        match self {
            Self::R1 => Some(MenuAction::DailyReflection),
            Self::R2 => Some(MenuAction::WeeklyCheckIn),
            Self::R3 => Some(MenuAction::ViewEntries),
            Self::R4 => Some(MenuAction::WeeklyRecap),
            Self::R5 => Some(MenuAction::Chat),
            Self::R6 => Some(MenuAction::Exit),
            Self::Default => None,
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The six things the main menu can do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    DailyReflection,
    WeeklyCheckIn,
    ViewEntries,
    WeeklyRecap,
    Chat,
    Exit,
}

impl MenuAction {
    pub fn rule_id(self) -> RuleId {
        match self {
            Self::DailyReflection => RuleId::R1,
            Self::WeeklyCheckIn => RuleId::R2,
            Self::ViewEntries => RuleId::R3,
            Self::WeeklyRecap => RuleId::R4,
            Self::Chat => RuleId::R5,
            Self::Exit => RuleId::R6,
        }
    }

    /// Position in the printed menu (1-6)
    pub fn option_number(self) -> u8 {
        match self {
            Self::DailyReflection => 1,
            Self::WeeklyCheckIn => 2,
            Self::ViewEntries => 3,
            Self::WeeklyRecap => 4,
            Self::Chat => 5,
            Self::Exit => 6,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::DailyReflection => "Start a Daily Reflection",
            Self::WeeklyCheckIn => "Complete Weekly Check-in",
            Self::ViewEntries => "View Previous Entries",
            Self::WeeklyRecap => "Get Weekly Recap",
            Self::Chat => "Chat with Companion",
            Self::Exit => "Exit the Program",
        }
    }
}

/// Test applied to the normalized input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate {
    /// Accepts any of the listed (already normalized) phrases
    OneOf(&'static [&'static str]),
    /// Accepts everything
    Always,
}

impl Predicate {
    pub fn accepts(&self, normalized: &str) -> bool {
        match self {
            Self::OneOf(phrases) => phrases.iter().any(|phrase| *phrase == normalized),
            Self::Always => true,
        }
    }
}

/// One row of the decision table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandRule {
    pub predicate: Predicate,
    pub id: RuleId,
    pub message: &'static str,
}

impl CommandRule {
    pub const fn one_of(id: RuleId, phrases: &'static [&'static str], message: &'static str) -> Self {
        Self {
            predicate: Predicate::OneOf(phrases),
            id,
            message,
        }
    }

    pub const fn fallback(message: &'static str) -> Self {
        Self {
            predicate: Predicate::Always,
            id: RuleId::Default,
            message,
        }
    }
}

const STANDARD_RULES: [CommandRule; 7] = [
    CommandRule::one_of(
        RuleId::R1,
        &["1", "one", "daily", "d", "day"],
        "Starting Daily Reflection...",
    ),
    CommandRule::one_of(
        RuleId::R2,
        &["2", "two", "weekly", "w", "week"],
        "Starting Weekly Check-in...",
    ),
    CommandRule::one_of(
        RuleId::R3,
        &["3", "three", "view", "v", "entries", "journal"],
        "Viewing Previous Entries...",
    ),
    CommandRule::one_of(
        RuleId::R4,
        &["4", "four", "recap", "r", "summary"],
        "Generating Weekly Recap...",
    ),
    CommandRule::one_of(
        RuleId::R5,
        &["5", "five", "chat", "c", "talk", "conversation"],
        "Starting Chat Mode...",
    ),
    CommandRule::one_of(
        RuleId::R6,
        &["6", "six", "exit", "e", "quit", "q", "bye"],
        "Exiting Program...",
    ),
    CommandRule::fallback("Invalid choice"),
];

/// Ordered rules plus the catch-all default
///
/// The default is held apart from the ordered rules, so it is always the last
/// rule tried and every input resolves.
#[derive(Debug, Clone)]
pub struct CommandTable {
    rules: Vec<CommandRule>,
    default: CommandRule,
}

impl CommandTable {
    /// Build a table from rules in evaluation order
    ///
    /// The last rule must be the only always-true rule, every phrase must be
    /// normalized (trimmed, lower-case), and no phrase may be accepted by two
    /// rules. Overlap would make rule order load-bearing.
    pub fn new(mut rules: Vec<CommandRule>) -> Result<Self> {
        let default = match rules.pop() {
            Some(rule) if rule.predicate == Predicate::Always => rule,
            Some(rule) => {
                return Err(CompanionError::InvalidRuleTable(format!(
                    "last rule {} is not an always-true default",
                    rule.id
                )))
            }
            None => return Err(CompanionError::InvalidRuleTable("table is empty".into())),
        };

        let mut seen = AHashSet::new();
        for rule in &rules {
            let phrases = match rule.predicate {
                Predicate::OneOf(phrases) => phrases,
                Predicate::Always => {
                    return Err(CompanionError::InvalidRuleTable(format!(
                        "rule {} is always-true but not last",
                        rule.id
                    )))
                }
            };
            for phrase in phrases {
                if phrase.trim().to_lowercase() != *phrase {
                    return Err(CompanionError::InvalidRuleTable(format!(
                        "rule {} phrase {:?} is not normalized",
                        rule.id, phrase
                    )));
                }
                if !seen.insert(*phrase) {
                    return Err(CompanionError::InvalidRuleTable(format!(
                        "phrase {:?} is matched by more than one rule",
                        phrase
                    )));
                }
            }
        }

        Ok(Self { rules, default })
    }

    /// The built-in six-option menu
    pub fn standard() -> Self {
        let (default, rules) = STANDARD_RULES
            .split_last()
            .map(|(last, rest)| (*last, rest.to_vec()))
            .unwrap_or((CommandRule::fallback("Invalid choice"), Vec::new()));
        Self { rules, default }
    }

    /// All rules in evaluation order, default last
    pub fn rules(&self) -> impl Iterator<Item = &CommandRule> {
        self.rules.iter().chain(std::iter::once(&self.default))
    }

    /// First accepting rule for an already-normalized input
    pub fn first_match(&self, normalized: &str) -> &CommandRule {
        self.rules
            .iter()
            .find(|rule| rule.predicate.accepts(normalized))
            .unwrap_or(&self.default)
    }

    /// The first three phrases of each non-default rule, for menu hints
    pub fn primary_choices(&self) -> Vec<(RuleId, &'static [&'static str])> {
        self.rules
            .iter()
            .filter_map(|rule| match rule.predicate {
                Predicate::OneOf(phrases) => Some((rule.id, &phrases[..phrases.len().min(3)])),
                Predicate::Always => None,
            })
            .collect()
    }
}

static COMMAND_TABLE: OnceLock<CommandTable> = OnceLock::new();

/// The process-wide standard table, built on first use
pub fn command_table() -> &'static CommandTable {
    COMMAND_TABLE.get_or_init(CommandTable::standard)
}

/// Result of evaluating one menu input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandOutcome {
    pub rule_id: RuleId,
    pub message: &'static str,
    /// The input exactly as received, before normalization
    pub raw_input: String,
}

impl CommandOutcome {
    pub fn action(&self) -> Option<MenuAction> {
        self.rule_id.action()
    }

    pub fn is_default(&self) -> bool {
        self.rule_id == RuleId::Default
    }
}

/// Evaluates raw menu input against a command table
#[derive(Debug, Clone, Copy)]
pub struct CommandResolver<'a> {
    table: &'a CommandTable,
}

impl<'a> CommandResolver<'a> {
    pub fn new(table: &'a CommandTable) -> Self {
        Self { table }
    }

    /// Total: every input, including "", resolves to exactly one rule
    pub fn evaluate(&self, raw: &str) -> CommandOutcome {
        let normalized = raw.trim().to_lowercase();
        let rule = self.table.first_match(&normalized);
        CommandOutcome {
            rule_id: rule.id,
            message: rule.message,
            raw_input: raw.to_string(),
        }
    }
}

impl CommandResolver<'static> {
    /// Resolver over the process-wide standard table
    pub fn standard() -> Self {
        Self::new(command_table())
    }
}

/// Evaluate against the standard table
pub fn evaluate_command(raw: &str) -> CommandOutcome {
    CommandResolver::standard().evaluate(raw)
}
