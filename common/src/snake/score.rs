use crate::defaults::FOOD_POINTS;

/// Current score plus the best score seen so far, including earlier sessions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScoreTracker {
    score: u32,
    high_score: u32,
}

impl ScoreTracker {
    pub fn new(high_score: u32) -> Self {
        Self { score: 0, high_score }
    }

    /// Restores a tracker mid-game. `high_score` may be below `score`; the
    /// next `settle` call raises it.
    #[cfg(test)]
    pub(crate) fn restore(score: u32, high_score: u32) -> Self {
        Self { score, high_score }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Credits one eaten food. Returns the new high score if it was beaten.
    pub fn record_food(&mut self) -> Option<u32> {
        self.score += FOOD_POINTS;
        self.settle()
    }

    /// Raises the high score to the current score if it is higher.
    pub fn settle(&mut self) -> Option<u32> {
        if self.score > self.high_score {
            self.high_score = self.score;
            Some(self.high_score)
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        self.score = 0;
    }
}
