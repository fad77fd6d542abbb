//! Scripted pointer for headless matches

use glam::Vec2;
use hockey_core::{Snapshot, Table};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Plays the human side by producing pointer positions, the way a person
/// dragging over the canvas would.
///
/// It guards a spot in front of its own goal and charges the puck once it
/// crosses into the human half. Seeded jitter keeps runs varied but
/// reproducible.
pub struct Autopilot {
    rng: StdRng,
    jitter: f32,
}

impl Autopilot {
    pub fn new(seed: u64, jitter: f32) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            jitter: jitter.max(0.0),
        }
    }

    /// Desired paddle position in table units
    pub fn target(&mut self, snap: &Snapshot, table: &Table) -> Vec2 {
        let guard_y = table.height - table.height / 7.0;
        let base = if snap.puck_live && snap.puck.y > table.midline_y() {
            // Aim slightly below the puck to drive it up the table
            snap.puck + Vec2::new(0.0, 10.0)
        } else {
            Vec2::new(snap.puck.x, guard_y)
        };

        if self.jitter == 0.0 {
            return base;
        }
        let noise = Vec2::new(
            self.rng.gen_range(-self.jitter..=self.jitter),
            self.rng.gen_range(-self.jitter..=self.jitter),
        );
        base + noise
    }

    /// Pointer position in display pixels for a canvas of `display` size
    pub fn pointer(&mut self, snap: &Snapshot, table: &Table, display: Vec2) -> Vec2 {
        let logical = Vec2::new(table.width, table.height);
        self.target(snap, table) * display / logical
    }
}
