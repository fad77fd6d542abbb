use crate::{Config, Events, GoalEvent, Puck, PuckPhase, Score, Side, Table};
use hecs::World;

/// Handle the puck crossing the top or bottom goal line.
///
/// Inside the goal mouth a live puck scores once and switches to
/// `AwaitingRespawn`; further ticks past the line are ignored until the
/// respawn. Outside the mouth the goal line behaves like a wall.
pub fn check_goal_lines(
    world: &mut World,
    config: &Config,
    table: &Table,
    score: &mut Score,
    events: &mut Events,
) {
    let r = config.puck_radius;
    for (_entity, puck) in world.query_mut::<&mut Puck>() {
        // Top line guards the AI goal, bottom line the human goal
        let (defender, bounced_y, bounced_vy) = if puck.pos.y - r < 0.0 {
            (Side::Ai, r, puck.vel.y.abs())
        } else if puck.pos.y + r > table.height {
            (Side::Human, table.height - r, -puck.vel.y.abs())
        } else {
            continue;
        };

        if table.in_goal_mouth(puck.pos.x) {
            if puck.is_live() {
                let scorer = defender.opponent();
                score.increment(scorer);
                puck.phase = PuckPhase::AwaitingRespawn {
                    ticks_left: config.respawn_delay_ticks,
                    serve_toward: defender,
                };
                events.goal = Some(GoalEvent {
                    scorer,
                    score: *score,
                });
                log::debug!(
                    "Goal for {scorer:?} at x={:.1}, score {}-{}",
                    puck.pos.x,
                    score.human,
                    score.ai
                );
            }
        } else {
            puck.pos.y = bounced_y;
            puck.vel.y = bounced_vy * config.wall_bounce;
            events.wall_hit = true;
        }
    }
}
