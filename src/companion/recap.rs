//! Weekly recap templates

use crate::companion::responses::{
    ENCOURAGEMENTS, INSIGHTS, OBSERVATIONS, QUALITIES, STRENGTHS, THEMES,
};

/// A recap sentence with three placeholders, each filled from its own pool
#[derive(Debug, Clone, Copy)]
pub struct RecapTemplate {
    pub text: &'static str,
    pub slots: [(&'static str, &'static [&'static str]); 3],
}

impl RecapTemplate {
    /// Fill every placeholder using `pick` to choose from each pool
    pub fn render(&self, mut pick: impl FnMut(&'static [&'static str]) -> &'static str) -> String {
        self.slots
            .iter()
            .fold(self.text.to_string(), |text, (placeholder, pool)| {
                text.replace(*placeholder, pick(*pool))
            })
    }
}

pub const RECAP_TEMPLATES: [RecapTemplate; 4] = [
    RecapTemplate {
        text: "Looking back at your journal entries, I notice {observation}. This week, you showed {quality}. Remember: {encouragement}",
        slots: [
            ("{observation}", OBSERVATIONS),
            ("{quality}", QUALITIES),
            ("{encouragement}", ENCOURAGEMENTS),
        ],
    },
    RecapTemplate {
        text: "Your reflections this week revealed {theme}. You demonstrated {strength} in how you approached things. A reminder: {insight}",
        slots: [
            ("{theme}", THEMES),
            ("{strength}", STRENGTHS),
            ("{insight}", INSIGHTS),
        ],
    },
    RecapTemplate {
        text: "Based on your entries, you've been exploring {topic}. Your journey shows {growth}. Keep in mind: {advice}",
        slots: [
            ("{topic}", THEMES),
            ("{growth}", QUALITIES),
            ("{advice}", ENCOURAGEMENTS),
        ],
    },
    RecapTemplate {
        text: "This week's journaling highlights {focus}. I see {progress} in your reflections. Consider this: {suggestion}",
        slots: [
            ("{focus}", OBSERVATIONS),
            ("{progress}", STRENGTHS),
            ("{suggestion}", INSIGHTS),
        ],
    },
];

/// Closing line appended when the journal has entries
pub fn entry_count_note(total: usize) -> String {
    format!(
        "You completed {} journal entries this week. That's a meaningful commitment to your self-reflection practice!",
        total
    )
}
