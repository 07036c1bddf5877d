//! Caller-side policy for repeated unrecognized menu input

/// What the caller should do after recording a menu result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakStatus {
    /// Keep prompting; `attempts` unrecognized inputs in a row so far
    Retry { attempts: u32 },
    /// The limit was reached; end the session
    Exhausted { attempts: u32 },
}

/// Counts consecutive unrecognized menu choices
#[derive(Debug, Clone)]
pub struct InvalidStreak {
    count: u32,
    limit: u32,
}

impl InvalidStreak {
    pub fn new(limit: u32) -> Self {
        Self {
            count: 0,
            limit: limit.max(1),
        }
    }

    /// Record one unrecognized choice
    pub fn record_invalid(&mut self) -> StreakStatus {
        self.count += 1;
        if self.count >= self.limit {
            StreakStatus::Exhausted { attempts: self.count }
        } else {
            StreakStatus::Retry { attempts: self.count }
        }
    }

    /// A recognized action clears the streak
    pub fn reset(&mut self) {
        self.count = 0;
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_strikes() {
        let mut streak = InvalidStreak::new(3);
        assert_eq!(streak.record_invalid(), StreakStatus::Retry { attempts: 1 });
        assert_eq!(streak.record_invalid(), StreakStatus::Retry { attempts: 2 });
        assert_eq!(streak.record_invalid(), StreakStatus::Exhausted { attempts: 3 });
    }

    #[test]
    fn test_reset_clears_streak() {
        let mut streak = InvalidStreak::new(3);
        streak.record_invalid();
        streak.record_invalid();
        streak.reset();
        assert_eq!(streak.count(), 0);
        assert_eq!(streak.record_invalid(), StreakStatus::Retry { attempts: 1 });
    }

    #[test]
    fn test_zero_limit_is_one() {
        let mut streak = InvalidStreak::new(0);
        assert_eq!(streak.limit(), 1);
        assert!(matches!(streak.record_invalid(), StreakStatus::Exhausted { .. }));
    }
}
