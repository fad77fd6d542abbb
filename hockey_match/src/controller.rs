use glam::Vec2;
use hockey_core::{
    Config, GoalEvent, PointerMapper, Score, Side, Simulation, Snapshot, Table,
};
use thiserror::Error;

use crate::env::Environment;
use crate::fsm::{MatchAction, MatchFsm, MatchStatus};
use crate::leaderboard::{Leaderboard, LeaderboardStore, MatchRecord};
use crate::schedule::Periodic;
use crate::shortcut::{command_for_key, Command, Modifiers};

/// Longest player name kept; longer input is cut
pub const MAX_NAME_LEN: usize = 10;

/// Frame ticks one `poll` call may run before older debt is dropped
pub const MAX_CATCH_UP_FRAMES: u32 = 6;

const COUNTDOWN_PERIOD_MS: u64 = 1000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatchError {
    #[error("player name is empty")]
    EmptyPlayerName,
    #[error("cannot {action:?} while {from:?}")]
    InvalidTransition {
        from: MatchStatus,
        action: MatchAction,
    },
}

/// Sound cues a front end may play
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sound {
    Hit,
    Wall,
    Goal,
    Win,
    Lose,
}

/// Things that happened during one `poll` call, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchEvent {
    /// Countdown moved to this value
    Countdown(u8),
    /// Countdown finished, play begins
    Kickoff,
    Hit(Side),
    Wall,
    Goal(GoalEvent),
    Finished(MatchRecord),
}

impl MatchEvent {
    pub fn sound(&self) -> Option<Sound> {
        match self {
            MatchEvent::Hit(_) => Some(Sound::Hit),
            MatchEvent::Wall => Some(Sound::Wall),
            MatchEvent::Goal(_) => Some(Sound::Goal),
            MatchEvent::Finished(record) if record.winner == Side::Human => Some(Sound::Win),
            MatchEvent::Finished(_) => Some(Sound::Lose),
            MatchEvent::Countdown(_) | MatchEvent::Kickoff => None,
        }
    }
}

/// Owns one human-vs-AI match from menu to result.
///
/// Two cancellable periodic tasks are polled through `poll`: a one-second
/// countdown task, active only while counting down, and the fixed-rate frame
/// task, active only while playing. Every status change re-arms or cancels
/// them so a stale tick can never touch a reset match.
pub struct MatchController {
    env: Box<dyn Environment>,
    sim: Simulation,
    fsm: MatchFsm,
    pointer: PointerMapper,
    leaderboard: Leaderboard,
    countdown_task: Periodic,
    frame_task: Periodic,
    countdown: u8,
    score: Score,
    winner: Option<Side>,
    player_name: String,
    last_result: Option<MatchRecord>,
}

impl MatchController {
    pub fn new(
        config: Config,
        env: Box<dyn Environment>,
        store: Box<dyn LeaderboardStore>,
    ) -> Self {
        let frame_ms = config.frame_ms();
        let countdown = config.countdown_seconds;
        let sim = Simulation::new(config);
        let pointer = PointerMapper::new(sim.table());

        Self {
            env,
            sim,
            fsm: MatchFsm::new(),
            pointer,
            leaderboard: Leaderboard::new(store),
            countdown_task: Periodic::new(COUNTDOWN_PERIOD_MS),
            frame_task: Periodic::new(frame_ms).with_max_catch_up(MAX_CATCH_UP_FRAMES),
            countdown,
            score: Score::new(),
            winner: None,
            player_name: String::new(),
            last_result: None,
        }
    }

    /// Begin a match from the menu
    pub fn start(&mut self, name: &str) -> Result<(), MatchError> {
        let name = normalize_name(name).ok_or_else(|| {
            log::warn!("Rejected match start: empty player name");
            MatchError::EmptyPlayerName
        })?;
        self.apply(MatchAction::Start)?;
        self.player_name = name;
        self.begin_countdown();
        Ok(())
    }

    /// Play again with the same name from the result screen
    pub fn replay(&mut self) -> Result<(), MatchError> {
        self.apply(MatchAction::Replay)?;
        self.begin_countdown();
        Ok(())
    }

    /// Leave the result screen for the menu
    pub fn go_home(&mut self) -> Result<(), MatchError> {
        self.apply(MatchAction::Home)?;
        self.clear_match();
        Ok(())
    }

    /// Drop whatever is in progress and return to the menu. Nothing is saved.
    pub fn reset(&mut self) {
        let result = self.fsm.transition(MatchAction::Reset);
        if result.from != MatchStatus::Idle {
            log::info!("Match reset from {:?}", result.from);
        }
        self.clear_match();
    }

    /// Pointer/touch position in display coordinates
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        if !self.fsm.accepts_pointer() {
            return;
        }
        match self.pointer.map(Vec2::new(x, y)) {
            Some(target) => self.sim.set_human_target(target),
            None => log::debug!("Ignoring pointer at ({x}, {y})"),
        }
    }

    /// On-screen size of the canvas
    pub fn resize_display(&mut self, width: f32, height: f32) {
        self.pointer.resize(Vec2::new(width, height));
    }

    /// On-screen position of the canvas' top-left corner
    pub fn move_display(&mut self, x: f32, y: f32) {
        self.pointer.set_origin(Vec2::new(x, y));
    }

    /// Returns true when the key was handled
    pub fn key_down(&mut self, key: &str, modifiers: Modifiers) -> bool {
        match command_for_key(key, modifiers) {
            Some(Command::Reset) => {
                self.reset();
                true
            }
            None => false,
        }
    }

    /// Run the countdown and frame tasks owed up to the environment's
    /// current time. The same clock arms the tasks, so schedules stay
    /// consistent.
    pub fn poll(&mut self) -> Vec<MatchEvent> {
        let now = self.env.now();
        self.advance(now)
    }

    fn advance(&mut self, now_ms: u64) -> Vec<MatchEvent> {
        let mut events = Vec::new();

        for _ in 0..self.countdown_task.due(now_ms) {
            if self.countdown <= 1 {
                self.countdown = 0;
                self.countdown_task.cancel();
                if self.apply(MatchAction::CountdownDone).is_ok() {
                    self.frame_task.start(now_ms);
                    events.push(MatchEvent::Kickoff);
                }
                break;
            }
            self.countdown -= 1;
            events.push(MatchEvent::Countdown(self.countdown));
        }

        for _ in 0..self.frame_task.due(now_ms) {
            if !self.fsm.is_playing() {
                break;
            }
            self.frame(&mut events);
        }

        events
    }

    fn frame(&mut self, out: &mut Vec<MatchEvent>) {
        let goal = self.sim.tick();

        let tick_events = self.sim.events();
        if let Some(side) = tick_events.paddle_hit {
            out.push(MatchEvent::Hit(side));
        }
        if tick_events.wall_hit {
            out.push(MatchEvent::Wall);
        }

        if let Some(goal) = goal {
            self.score = goal.score;
            out.push(MatchEvent::Goal(goal));
            if let Some(winner) = self.score.has_winner(self.sim.config().win_score) {
                out.push(MatchEvent::Finished(self.finish(winner)));
            }
        }
    }

    fn finish(&mut self, winner: Side) -> MatchRecord {
        self.frame_task.cancel();
        self.fsm.transition(MatchAction::Finish);
        self.winner = Some(winner);

        let record = MatchRecord::new(
            &self.player_name,
            self.score.human,
            self.score.ai,
            winner,
            self.env.now(),
        );
        log::info!(
            "Match over: {} {}-{} AI, winner {:?}",
            record.player_name,
            record.player_score,
            record.ai_score,
            winner
        );
        self.leaderboard.save_match(record.clone());
        self.last_result = Some(record.clone());
        record
    }

    fn apply(&mut self, action: MatchAction) -> Result<(), MatchError> {
        let result = self.fsm.transition(action);
        if result.success {
            Ok(())
        } else {
            log::warn!("Ignored {action:?} while {:?}", result.from);
            Err(MatchError::InvalidTransition {
                from: result.from,
                action,
            })
        }
    }

    fn begin_countdown(&mut self) {
        self.sim.reset_for_new_match();
        self.score = Score::new();
        self.winner = None;
        self.last_result = None;
        self.countdown = self.sim.config().countdown_seconds;
        self.frame_task.cancel();
        self.countdown_task.start(self.env.now());
    }

    fn clear_match(&mut self) {
        self.countdown_task.cancel();
        self.frame_task.cancel();
        self.sim.reset_for_new_match();
        self.score = Score::new();
        self.winner = None;
        self.last_result = None;
        self.countdown = self.sim.config().countdown_seconds;
    }

    pub fn status(&self) -> MatchStatus {
        self.fsm.state()
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn countdown(&self) -> u8 {
        self.countdown
    }

    pub fn snapshot(&self) -> Snapshot {
        self.sim.snapshot()
    }

    pub fn last_result(&self) -> Option<&MatchRecord> {
        self.last_result.as_ref()
    }

    pub fn leaderboard(&self) -> Vec<MatchRecord> {
        self.leaderboard.get_leaderboard()
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn config(&self) -> &Config {
        self.sim.config()
    }

    pub fn table(&self) -> &Table {
        self.sim.table()
    }

    /// Direct access to the engine for scripted scenarios
    pub fn simulation_mut(&mut self) -> &mut Simulation {
        &mut self.sim
    }
}

/// Trim and cut to `MAX_NAME_LEN` characters; `None` when nothing is left
pub fn normalize_name(raw: &str) -> Option<String> {
    let name: String = raw.trim().chars().take(MAX_NAME_LEN).collect();
    let name = name.trim_end();
    (!name.is_empty()).then(|| name.to_string())
}
