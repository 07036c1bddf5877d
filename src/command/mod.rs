//! Menu command pipeline
//!
//! Raw input -> CommandResolver (against CommandTable) -> CommandOutcome -> MenuAction
//! Repeated Default outcomes are the caller's concern (InvalidStreak).

pub mod policy;
pub mod resolver;

pub use policy::{InvalidStreak, StreakStatus};
pub use resolver::{
    command_table, evaluate_command, CommandOutcome, CommandResolver, CommandRule, CommandTable,
    MenuAction, Predicate, RuleId,
};
