//! Day challenges: at most one supplementary prompt per camp day.

use serde::{Deserialize, Serialize};

/// A challenge stored for one day of a camp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayChallenge {
    pub day_number: u32,
    pub title: String,
    pub description: String,
}

impl DayChallenge {
    pub fn new(day_number: u32, title: &str, description: &str) -> Self {
        Self {
            day_number,
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    /// Both title and description must carry text; whitespace does not count.
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty() && !self.description.trim().is_empty()
    }

    /// Copy with surrounding whitespace removed, as sent to the server.
    pub fn trimmed(&self) -> Self {
        Self {
            day_number: self.day_number,
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
        }
    }
}

/// Finds the challenge for `day_number`, if any.
pub fn challenge_for_day(challenges: &[DayChallenge], day_number: u32) -> Option<&DayChallenge> {
    challenges.iter().find(|c| c.day_number == day_number)
}
