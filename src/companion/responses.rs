//! Canned response library, keyed by mood level or message category

use crate::companion::chat::MessageCategory;
use crate::core::types::MoodLevel;

/// Reply pools for one mood level
#[derive(Debug, Clone, Copy)]
pub struct MoodReplies {
    /// Acknowledge the feeling
    pub empathetic: &'static [&'static str],
    /// Suggest something to do about it
    pub supportive: &'static [&'static str],
}

pub fn mood_replies(level: MoodLevel) -> MoodReplies {
    match level.get() {
        1 => MoodReplies {
            empathetic: &[
                "I hear you're having a really tough time. That sounds incredibly hard.",
                "I'm so sorry you're feeling this way. Thank you for sharing with me.",
                "It takes courage to acknowledge when things are this difficult. I'm here with you.",
                "This sounds really heavy to carry. Would you like to talk more about what's coming up?",
            ],
            supportive: &[
                "Would it help to take a few deep breaths together?",
                "Sometimes just naming the feeling can help a little. Would you like to try?",
                "I want you to know that your feelings are valid, no matter how dark they seem.",
                "You don't have to go through this alone. Would you like some grounding techniques?",
            ],
        },
        2 => MoodReplies {
            empathetic: &[
                "I can sense you're going through a challenging time. That sounds really difficult.",
                "Thank you for being honest about how you're feeling. That's not easy to do.",
                "It sounds like things feel heavy right now. Would you like to unpack that a bit?",
                "I'm here to listen, without judgment, whenever you're ready to share more.",
            ],
            supportive: &[
                "Would it help to focus on one small, kind thing you can do for yourself right now?",
                "Sometimes writing down what's bothering us can make it feel more manageable.",
                "Remember that feelings come in waves - this one will pass too.",
                "Would you like me to suggest some gentle self-care ideas?",
            ],
        },
        3 => MoodReplies {
            empathetic: &[
                "Thanks for checking in with yourself. Being aware is the first step.",
                "It's okay to feel neutral sometimes - not every day has to be high or low.",
                "How interesting that you're noticing this middle ground. What's that like for you?",
                "Sometimes neutrality can be a sign of balance. What do you think?",
            ],
            supportive: &[
                "This might be a good time to check in with what you need right now.",
                "Would you like to explore what might bring a little more lightness to your day?",
                "Sometimes neutral moments are opportunities for gentle reflection.",
                "Is there something small that might bring you a bit of comfort or joy?",
            ],
        },
        4 => MoodReplies {
            empathetic: &[
                "It's wonderful to hear you're feeling good! That's something to acknowledge.",
                "I'm genuinely happy to hear you're in a positive space today!",
                "This sounds lovely! Would you like to savor this feeling a bit more?",
                "It's great that you're recognizing and enjoying this positive moment!",
            ],
            supportive: &[
                "Would you like to explore what's contributing to this good feeling?",
                "This might be a perfect time for some positive journaling or gratitude practice.",
                "How can you nurture this good feeling?",
                "Would you like to set a small intention to carry this feeling forward?",
            ],
        },
        _ => MoodReplies {
            empathetic: &[
                "WOW! That's amazing to hear! I'm smiling just knowing you're feeling so good!",
                "This is wonderful! Thank you for sharing this positive energy!",
                "I'm genuinely thrilled to hear you're feeling fantastic!",
                "What fantastic news! Would you like to celebrate this feeling with me?",
            ],
            supportive: &[
                "This is a perfect moment to practice gratitude for this feeling.",
                "Would you like to capture this moment in your journal to remember later?",
                "How can you share this positive energy with yourself or others?",
                "This great feeling is something to acknowledge and honor. Well done!",
            ],
        },
    }
}

pub fn support_offer(level: MoodLevel) -> &'static str {
    match level.get() {
        1 => "Would you like some gentle guidance through this difficult moment?",
        2 => "Would you like to explore some coping strategies together?",
        3 => "Would you like to reflect a bit more on what you need right now?",
        4 => "Would you like to build on this positive feeling?",
        _ => "Would you like to celebrate and explore this fantastic feeling?",
    }
}

pub fn followup_pool(level: MoodLevel) -> &'static [&'static str] {
    match level.get() {
        1 => &[
            "What does this heavy feeling feel like in your body?",
            "Is there one small thing that might feel slightly less heavy today?",
            "What would feel supportive right now, even if it's very small?",
            "Can you remember a time when you felt slightly better, even briefly?",
        ],
        2 => &[
            "What's one thing that might help shift this feeling, even a tiny bit?",
            "Is there a person or memory that usually brings you comfort?",
            "What does your body need right now - rest, movement, nourishment?",
            "What would you tell a friend who was feeling this way?",
        ],
        3 => &[
            "What might help you move toward feeling a bit more positive?",
            "Is there something you've been curious about trying?",
            "What small pleasure could you add to your day?",
            "How do you feel about this neutral space?",
        ],
        4 => &[
            "What's contributing to this good feeling?",
            "How can you savor or extend this positive moment?",
            "What would you like to do with this good energy?",
            "Is there someone you'd like to share this feeling with?",
        ],
        _ => &[
            "What's making today so wonderful?",
            "How can you capture this feeling to remember on harder days?",
            "Is there a way to pay this positive feeling forward?",
            "What does this fantastic feeling make you want to do?",
        ],
    }
}

/// Chat replies for a categorized message (`General` has its own pool)
pub fn chat_pool(category: MessageCategory) -> &'static [&'static str] {
    match category {
        MessageCategory::Greeting => &[
            "Hi there! I'm here to listen. How's your day going?",
            "Hello! I'm glad you're here. What's on your mind today?",
            "Hi! I'm ready to chat whenever you are. How are things?",
            "Hello! I'm here to talk about anything you'd like. What's up?",
        ],
        MessageCategory::Feeling => &[
            "I hear you. Tell me more about what that feels like for you.",
            "That sounds significant. Would you like to explore that feeling further?",
            "Thank you for sharing that. How long have you been feeling this way?",
            "I understand. What's been coming up for you with this feeling?",
        ],
        MessageCategory::Journal => &[
            "Your journal is a safe space for all your thoughts and feelings.",
            "It's great that you're reflecting on your journal. What stands out to you?",
            "Journaling can be such a powerful tool. What brings you to it today?",
            "Your reflections matter. Would you like to explore any particular entry?",
        ],
        MessageCategory::Support => &[
            "I'm here to support you. What do you need right now?",
            "You're not alone in this. I'm listening.",
            "Whatever you're going through, your feelings are valid.",
            "Take your time. I'm right here with you.",
        ],
        MessageCategory::Reflection => &[
            "That's an interesting perspective. What makes you think that?",
            "I appreciate you sharing that reflection. How did you come to that insight?",
            "That's a powerful observation. How does that feel to acknowledge?",
            "Thank you for that reflection. What's next for you with this realization?",
        ],
        MessageCategory::General => GENERIC_REPLIES,
    }
}

const GENERIC_REPLIES: &[&str] = &[
    "I hear you. Tell me more about that.",
    "Thank you for sharing that. What comes up for you as you say that?",
    "I'm listening. Would you like to explore that further?",
    "That's interesting. What makes you bring that up?",
    "I appreciate you sharing that. How does that feel to talk about?",
];

/// Fixed reply for uncategorized messages that ask something
pub const QUESTION_REPLY: &str = "That's a thoughtful question. What are your thoughts on it?";

/// Recap used when there is no journal to look back on
pub const QUIET_WEEK_RECAP: &str = "It looks like this was a quiet week for journaling. That's okay! Every season has its rhythm. Sometimes, the space between entries is just as meaningful as the writing itself.";

pub const OBSERVATIONS: &[&str] = &[
    "a mix of different emotions and experiences",
    "some meaningful reflections",
    "progress in your self-awareness",
    "moments of insight and growth",
];

pub const QUALITIES: &[&str] = &[
    "courage in being honest with yourself",
    "resilience in facing challenges",
    "thoughtfulness in your reflections",
    "self-compassion in your journey",
];

pub const ENCOURAGEMENTS: &[&str] = &[
    "every entry is a step forward, no matter how small",
    "your willingness to reflect is itself a form of growth",
    "there's no right or wrong way to feel - only your authentic experience",
    "each day brings new opportunities for understanding",
];

pub const THEMES: &[&str] = &[
    "self-discovery and personal growth",
    "emotional awareness and processing",
    "daily experiences and their meanings",
    "personal challenges and triumphs",
];

pub const STRENGTHS: &[&str] = &[
    "honesty and vulnerability",
    "persistence and dedication",
    "insight and self-awareness",
    "courage and openness",
];

pub const INSIGHTS: &[&str] = &[
    "growth often happens in small, daily moments",
    "your feelings are valuable messengers",
    "reflection is a powerful tool for understanding",
    "every emotion has something to teach us",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_level_has_content() {
        for level in MoodLevel::all() {
            let replies = mood_replies(level);
            assert_eq!(replies.empathetic.len(), 4);
            assert_eq!(replies.supportive.len(), 4);
            assert_eq!(followup_pool(level).len(), 4);
            assert!(support_offer(level).starts_with("Would you like"));
        }
    }

    #[test]
    fn test_chat_pools_nonempty() {
        for category in MessageCategory::ALL {
            assert!(!chat_pool(category).is_empty());
        }
    }
}
