use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::Side;

/// Simulation clock, counted in fixed ticks
#[derive(Debug, Clone, Copy, Default)]
pub struct Time {
    pub tick: u64,
}

impl Time {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Match score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub human: u8,
    pub ai: u8,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Human => self.human = self.human.saturating_add(1),
            Side::Ai => self.ai = self.ai.saturating_add(1),
        }
    }

    pub fn get(&self, side: Side) -> u8 {
        match side {
            Side::Human => self.human,
            Side::Ai => self.ai,
        }
    }

    /// Winner once either side reaches `win_score`; the strictly higher score wins
    pub fn has_winner(&self, win_score: u8) -> Option<Side> {
        if self.human < win_score && self.ai < win_score {
            None
        } else if self.human > self.ai {
            Some(Side::Human)
        } else {
            Some(Side::Ai)
        }
    }
}

/// A counted goal together with the totals after it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoalEvent {
    pub scorer: Side,
    pub score: Score,
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub goal: Option<GoalEvent>,
    pub paddle_hit: Option<Side>,
    pub wall_hit: bool,
    pub respawned: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.goal = None;
        self.paddle_hit = None;
        self.wall_hit = false;
        self.respawned = false;
    }
}

/// Pending paddle targets, drained once per tick
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pub targets: Vec<(Side, Vec2)>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.targets.clear();
    }

    /// Queue a target; a newer target for the same side replaces the older one
    pub fn push_target(&mut self, side: Side, target: Vec2) {
        match self.targets.iter_mut().find(|(s, _)| *s == side) {
            Some(slot) => slot.1 = target,
            None => self.targets.push((side, target)),
        }
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, (Side, Vec2)> {
        self.targets.drain(..)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_increment() {
        let mut score = Score::new();
        score.increment(Side::Human);
        score.increment(Side::Human);
        score.increment(Side::Ai);
        assert_eq!(score, Score { human: 2, ai: 1 });
        assert_eq!(score.get(Side::Human), 2);
        assert_eq!(score.get(Side::Ai), 1);
    }

    #[test]
    fn test_score_has_winner() {
        let mut score = Score::new();
        for _ in 0..2 {
            score.increment(Side::Ai);
        }
        assert_eq!(score.has_winner(3), None, "No winner below threshold");

        score.increment(Side::Ai);
        assert_eq!(score.has_winner(3), Some(Side::Ai));

        let human = Score { human: 3, ai: 1 };
        assert_eq!(human.has_winner(3), Some(Side::Human));
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.goal = Some(GoalEvent {
            scorer: Side::Human,
            score: Score { human: 1, ai: 0 },
        });
        events.paddle_hit = Some(Side::Ai);
        events.wall_hit = true;
        events.respawned = true;

        events.clear();

        assert!(events.goal.is_none());
        assert!(events.paddle_hit.is_none());
        assert!(!events.wall_hit);
        assert!(!events.respawned);
    }

    #[test]
    fn test_input_queue_drains_in_order() {
        let mut queue = InputQueue::new();
        queue.push_target(Side::Human, Vec2::new(1.0, 2.0));
        queue.push_target(Side::Ai, Vec2::new(3.0, 4.0));

        let drained: Vec<_> = queue.drain().collect();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0], (Side::Human, Vec2::new(1.0, 2.0)));
        assert_eq!(queue.targets.len(), 0);
    }

    #[test]
    fn test_input_queue_keeps_latest_target_per_side() {
        let mut queue = InputQueue::new();
        for i in 0..100 {
            queue.push_target(Side::Human, Vec2::new(i as f32, 500.0));
        }
        assert_eq!(queue.targets, vec![(Side::Human, Vec2::new(99.0, 500.0))]);
    }
}
