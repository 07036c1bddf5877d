//! Banner and menu text shared by the session screens

use crate::command::{CommandTable, RuleId};

/// Width of every rule and banner
pub const SCREEN_WIDTH: usize = 64;

pub fn rule(fill: char) -> String {
    fill.to_string().repeat(SCREEN_WIDTH)
}

/// `title` centered in a line of `fill`, extra fill going right
pub fn titled_rule(title: &str, fill: char) -> String {
    let padding = SCREEN_WIDTH.saturating_sub(title.chars().count());
    let left = padding / 2;
    let fill = fill.to_string();
    format!("{}{}{}", fill.repeat(left), title, fill.repeat(padding - left))
}

/// Three-line `=` banner around a section title
pub fn banner(title: &str) -> String {
    format!("{}\n{}\n{}", rule('='), titled_rule(title, '='), rule('='))
}

/// One line per menu option, e.g. `  [1, 'one', 'daily']    - Start a Daily Reflection`
pub fn menu_lines(table: &CommandTable) -> Vec<String> {
    table
        .primary_choices()
        .into_iter()
        .filter_map(|(id, phrases)| id.action().map(|action| (id, action, phrases)))
        .map(|(id, action, phrases)| {
            let choices = phrases
                .iter()
                .map(|phrase| {
                    if phrase.parse::<u8>().is_ok() {
                        phrase.to_string()
                    } else {
                        format!("'{phrase}'")
                    }
                })
                .collect::<Vec<_>>()
                .join(", ");
            let suffix = if id == RuleId::R5 { " (NEW!)" } else { "" };
            format!("  {:<22} - {}{}", format!("[{choices}]"), action.label(), suffix)
        })
        .collect()
}
