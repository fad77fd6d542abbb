use glam::Vec2;
use hecs::World;

use crate::systems::drive_ai;
use crate::{
    create_paddle, create_puck, step, Config, Events, GoalEvent, InputQueue, Paddle, Puck, Score,
    Side, Snapshot, Table, Time,
};

/// Owned air hockey state: the only thing that mutates puck and paddles
pub struct Simulation {
    world: World,
    time: Time,
    table: Table,
    config: Config,
    score: Score,
    events: Events,
    queue: InputQueue,
}

impl Simulation {
    pub fn new(config: Config) -> Self {
        let table = Table::new(&config);
        let mut sim = Self {
            world: World::new(),
            time: Time::new(),
            table,
            config,
            score: Score::new(),
            events: Events::new(),
            queue: InputQueue::new(),
        };
        sim.reset_for_new_match();
        sim
    }

    /// Put both paddles on their spawns and a resting puck on the centre spot
    pub fn reset_for_new_match(&mut self) {
        self.world.clear();
        self.time = Time::new();
        self.score = Score::new();
        self.events.clear();
        self.queue.clear();

        for side in [Side::Human, Side::Ai] {
            let pos = self.table.paddle_spawn(side, &self.config);
            create_paddle(&mut self.world, side, pos);
        }
        create_puck(&mut self.world, self.table.puck_spawn(), Vec2::ZERO);
    }

    /// Queue a new target for the human paddle, in table units
    pub fn set_human_target(&mut self, target: Vec2) {
        self.queue.push_target(Side::Human, target);
    }

    /// Advance one fixed tick. Returns the goal scored during it, if any.
    pub fn tick(&mut self) -> Option<GoalEvent> {
        drive_ai(&self.world, &self.config, &self.table, &mut self.queue);

        step(
            &mut self.world,
            &mut self.time,
            &self.table,
            &self.config,
            &mut self.score,
            &mut self.events,
            &mut self.queue,
        );

        self.events.goal
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.world, &self.time, &self.score)
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn tick_count(&self) -> u64 {
        self.time.tick
    }

    pub fn puck(&self) -> Option<Puck> {
        self.world
            .query::<&Puck>()
            .iter()
            .next()
            .map(|(_e, puck)| *puck)
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| *p)
    }

    /// Overwrite the puck's kinematic state (drills and scripted scenarios)
    pub fn place_puck(&mut self, pos: Vec2, vel: Vec2) {
        for (_entity, puck) in self.world.query_mut::<&mut Puck>() {
            *puck = Puck::new(pos, vel);
        }
    }

    /// Teleport a paddle, clamped into its half-plane, and park it there
    pub fn place_paddle(&mut self, side: Side, pos: Vec2) {
        let pos = self.table.clamp_paddle(side, pos);
        for (_entity, paddle) in self.world.query_mut::<&mut Paddle>() {
            if paddle.side == side {
                *paddle = Paddle::new(side, pos);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PuckPhase;

    #[test]
    fn test_new_match_layout() {
        let sim = Simulation::new(Config::new());
        let snap = sim.snapshot();
        assert_eq!(snap.puck, Vec2::new(200.0, 350.0));
        assert_eq!(snap.puck_vel, Vec2::ZERO);
        assert_eq!(snap.human, Vec2::new(200.0, 600.0));
        assert_eq!(snap.ai, Vec2::new(200.0, 100.0));
        assert_eq!(snap.score, Score::new());
        assert_eq!(snap.tick, 0);
    }

    #[test]
    fn test_human_target_is_tracked() {
        let mut sim = Simulation::new(Config::new());
        sim.set_human_target(Vec2::new(100.0, 500.0));
        sim.tick();
        let human = sim.paddle(Side::Human).unwrap();
        assert!((human.pos - Vec2::new(120.0, 520.0)).length() < 1e-3);
        assert_eq!(human.target, Vec2::new(100.0, 500.0));
    }

    #[test]
    fn test_target_persists_between_ticks() {
        let mut sim = Simulation::new(Config::new());
        sim.set_human_target(Vec2::new(100.0, 500.0));
        for _ in 0..20 {
            sim.tick();
        }
        let human = sim.paddle(Side::Human).unwrap();
        assert!((human.pos - Vec2::new(100.0, 500.0)).length() < 1e-2);
    }

    #[test]
    fn test_reset_restores_layout_and_score() {
        let mut sim = Simulation::new(Config::new());
        sim.place_puck(Vec2::new(200.0, 10.0), Vec2::new(0.0, -10.0));
        assert!(sim.tick().is_some());
        assert_eq!(sim.score().human, 1);

        sim.reset_for_new_match();

        assert_eq!(sim.score(), Score::new());
        assert_eq!(sim.tick_count(), 0);
        assert_eq!(sim.puck().unwrap().phase, PuckPhase::Live);
        assert_eq!(sim.snapshot().puck, Vec2::new(200.0, 350.0));
    }

    #[test]
    fn test_place_paddle_clamps() {
        let mut sim = Simulation::new(Config::new());
        sim.place_paddle(Side::Ai, Vec2::new(200.0, 600.0));
        assert_eq!(sim.paddle(Side::Ai).unwrap().pos, Vec2::new(200.0, 322.0));
    }
}
