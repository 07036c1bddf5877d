//! Terminal presentation: console I/O and shared screen text

pub mod console;
pub mod display;

pub use console::{Console, ScriptedConsole, TerminalConsole, Tone};
pub use display::{banner, menu_lines, rule, titled_rule, SCREEN_WIDTH};
