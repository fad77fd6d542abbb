//! Character-grid rendering of the table

use std::fmt::Write;

use glam::Vec2;
use hockey_core::{Snapshot, Table};
use hockey_match::MatchStatus;

pub const DEFAULT_COLS: usize = 40;
pub const DEFAULT_ROWS: usize = 35;

/// Rasterises snapshots onto a fixed grid. Holds no game state.
pub struct TextCanvas {
    cols: usize,
    rows: usize,
    size: Vec2,
    mouth: (f32, f32),
}

impl TextCanvas {
    pub fn new(table: &Table, cols: usize, rows: usize) -> Self {
        Self {
            cols: cols.max(1),
            rows: rows.max(1),
            size: Vec2::new(table.width, table.height),
            mouth: table.goal_mouth(),
        }
    }

    pub fn with_default_size(table: &Table) -> Self {
        Self::new(table, DEFAULT_COLS, DEFAULT_ROWS)
    }

    /// Grid cell covering a table point, `None` when off the table
    fn cell(&self, pos: Vec2) -> Option<(usize, usize)> {
        if !pos.is_finite()
            || pos.x < 0.0
            || pos.y < 0.0
            || pos.x > self.size.x
            || pos.y > self.size.y
        {
            return None;
        }
        let col = ((pos.x / self.size.x) * self.cols as f32) as usize;
        let row = ((pos.y / self.size.y) * self.rows as f32) as usize;
        Some((col.min(self.cols - 1), row.min(self.rows - 1)))
    }

    fn goal_column(&self, col: usize) -> bool {
        let x = (col as f32 + 0.5) * self.size.x / self.cols as f32;
        x > self.mouth.0 && x < self.mouth.1
    }

    fn goal_line(&self) -> String {
        let mut line = String::with_capacity(self.cols + 2);
        line.push('+');
        for col in 0..self.cols {
            line.push(if self.goal_column(col) { '=' } else { '-' });
        }
        line.push('+');
        line
    }

    pub fn render(&self, snap: &Snapshot, header: &str) -> String {
        let mut grid = vec![vec![' '; self.cols]; self.rows];

        let (_, mid_row) = self
            .cell(Vec2::new(0.0, self.size.y / 2.0))
            .unwrap_or((0, self.rows / 2));
        grid[mid_row].iter_mut().for_each(|c| *c = '.');

        // Puck last so it stays visible on contact
        for (pos, glyph) in [(snap.ai, 'A'), (snap.human, 'H'), (snap.puck, 'o')] {
            if let Some((col, row)) = self.cell(pos) {
                grid[row][col] = glyph;
            }
        }

        let mut out = String::new();
        let _ = writeln!(out, "{header}");
        let _ = writeln!(
            out,
            "AI {:>2}  |  {:<2} YOU   tick {}",
            snap.score.ai, snap.score.human, snap.tick
        );
        let _ = writeln!(out, "{}", self.goal_line());
        for row in grid {
            let _ = writeln!(out, "|{}|", row.into_iter().collect::<String>());
        }
        let _ = writeln!(out, "{}", self.goal_line());
        out
    }
}

/// One machine-readable frame: match status plus the table snapshot
pub fn frame_json(status: MatchStatus, snap: &Snapshot) -> serde_json::Value {
    serde_json::json!({
        "status": status,
        "snapshot": snap,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use hockey_core::{Config, Simulation};

    fn canvas_and_snapshot() -> (TextCanvas, Snapshot) {
        let sim = Simulation::new(Config::new());
        (TextCanvas::with_default_size(sim.table()), sim.snapshot())
    }

    fn body_rows(frame: &str) -> Vec<&str> {
        // Header, scoreline and top border come first
        frame.lines().skip(3).take(DEFAULT_ROWS).collect()
    }

    #[test]
    fn test_new_match_layout() {
        let (canvas, snap) = canvas_and_snapshot();
        let frame = canvas.render(&snap, "Ann");
        let rows = body_rows(&frame);

        assert_eq!(rows.len(), DEFAULT_ROWS);
        assert_eq!(rows[5].chars().nth(21), Some('A'));
        assert_eq!(rows[30].chars().nth(21), Some('H'));
        assert_eq!(rows[17].chars().nth(21), Some('o'));
        assert_eq!(frame.matches('o').count(), 1);
        assert!(rows[17].contains('.'), "centre line missing");
    }

    #[test]
    fn test_goal_mouths_drawn() {
        let (canvas, snap) = canvas_and_snapshot();
        let frame = canvas.render(&snap, "");
        let lines: Vec<_> = frame.lines().collect();
        let top = lines[2];
        let bottom = lines[lines.len() - 1];
        assert_eq!(top.matches('=').count(), 16);
        assert_eq!(top, bottom);
        assert_eq!(top.len(), DEFAULT_COLS + 2);
    }

    #[test]
    fn test_scoreline() {
        let (canvas, mut snap) = canvas_and_snapshot();
        snap.score.human = 2;
        snap.score.ai = 1;
        let frame = canvas.render(&snap, "Ann");
        assert!(frame.starts_with("Ann\n"));
        assert!(frame.lines().nth(1).unwrap().starts_with("AI  1  |  2"));
    }

    #[test]
    fn test_puck_off_table_is_hidden() {
        let (canvas, mut snap) = canvas_and_snapshot();
        snap.puck = Vec2::new(200.0, -30.0);
        let frame = canvas.render(&snap, "");
        assert_eq!(frame.matches('o').count(), 0);
    }

    #[test]
    fn test_frame_json_shape() {
        let (_canvas, snap) = canvas_and_snapshot();
        let frame = frame_json(MatchStatus::Playing, &snap);
        assert_eq!(frame["status"], "Playing");
        assert_eq!(frame["snapshot"]["tick"], 0);
        assert_eq!(frame["snapshot"]["puck"], serde_json::json!([200.0, 350.0]));
        assert_eq!(frame["snapshot"]["human"], serde_json::json!([200.0, 600.0]));
        assert_eq!(frame["snapshot"]["score"]["ai"], 0);
        assert_eq!(frame["snapshot"]["puck_live"], true);
    }
}
