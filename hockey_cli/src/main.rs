use std::fs;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use glam::Vec2;
use hockey_core::{Config, Side};
use hockey_match::{
    Environment, JsonFileStore, Leaderboard, LeaderboardStore, ManualClock, MatchController,
    MatchEvent, MatchStatus, MemoryStore, SystemEnv,
};

mod autopilot;
mod render;

use autopilot::Autopilot;
use render::TextCanvas;

#[derive(Parser)]
#[command(name = "neon-hockey", version, about = "Air hockey against a simple AI")]
struct Cli {
    /// Leaderboard file (defaults to the platform data directory)
    #[arg(long, global = true)]
    leaderboard: Option<PathBuf>,

    /// Keep the leaderboard in memory only
    #[arg(long, global = true)]
    ephemeral: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play a match with an autopilot on the human paddle
    Play(PlayArgs),
    /// Show recent results, newest first
    Leaderboard {
        #[arg(long, default_value_t = 10)]
        limit: usize,
        /// Print raw JSON records
        #[arg(long)]
        json: bool,
    },
    /// Delete all saved results
    ClearLeaderboard,
}

#[derive(clap::Args)]
struct PlayArgs {
    #[arg(long, default_value = "Player")]
    name: String,

    /// Goals needed to win
    #[arg(long)]
    win_score: Option<u8>,

    /// Seed for the autopilot's pointer jitter
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Pointer jitter in table units
    #[arg(long, default_value_t = 12.0)]
    jitter: f32,

    /// Abandon the match after this many frames
    #[arg(long, default_value_t = 60 * 60 * 5)]
    max_frames: u64,

    /// Draw the table every N frames (0 disables drawing)
    #[arg(long, default_value_t = 30)]
    render_every: u64,

    /// Emit frames as JSON lines instead of text drawings
    #[arg(long)]
    json_frames: bool,

    /// JSON file overriding engine parameters
    #[arg(long)]
    config: Option<PathBuf>,

    /// Run on a simulated clock instead of in real time
    #[arg(long)]
    fast: bool,

    /// Displayed canvas width in pixels
    #[arg(long, default_value_t = 400.0)]
    display_width: f32,

    /// Displayed canvas height in pixels
    #[arg(long, default_value_t = 700.0)]
    display_height: f32,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let store = open_store(cli.leaderboard.as_deref(), cli.ephemeral)?;

    match cli.command {
        Command::Play(args) => play(args, store),
        Command::Leaderboard { limit, json } => show_leaderboard(store, limit, json),
        Command::ClearLeaderboard => {
            Leaderboard::new(store).clear();
            println!("Leaderboard cleared");
            Ok(())
        }
    }
}

fn open_store(path: Option<&Path>, ephemeral: bool) -> Result<Box<dyn LeaderboardStore>> {
    if ephemeral {
        return Ok(Box::new(MemoryStore::new()));
    }
    let store = match path {
        Some(path) => JsonFileStore::new(path),
        None => JsonFileStore::in_data_dir().context("locating leaderboard file")?,
    };
    log::debug!("Leaderboard at {}", store.path().display());
    Ok(Box::new(store))
}

fn load_config(path: Option<&Path>, win_score: Option<u8>) -> Result<Config> {
    let mut config = match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => Config::new(),
    };
    if let Some(win_score) = win_score {
        config.win_score = win_score;
    }
    config.validate()?;
    Ok(config)
}

fn play(args: PlayArgs, store: Box<dyn LeaderboardStore>) -> Result<()> {
    let config = load_config(args.config.as_deref(), args.win_score)?;
    let frame_ms = config.frame_ms();

    // Fast runs share a hand-driven clock with the controller
    let clock = args.fast.then(|| ManualClock::new(SystemEnv.now()));
    let env: Box<dyn Environment> = match &clock {
        Some(clock) => Box::new(clock.clone()),
        None => Box::new(SystemEnv),
    };

    let mut ctrl = MatchController::new(config, env, store);
    let display = Vec2::new(args.display_width, args.display_height);
    ctrl.resize_display(display.x, display.y);

    let canvas = TextCanvas::with_default_size(ctrl.table());
    let mut pilot = Autopilot::new(args.seed, args.jitter);

    ctrl.start(&args.name)?;
    println!("Get ready, {}!", ctrl.player_name());

    let mut frames = 0u64;
    while ctrl.status() != MatchStatus::Ended {
        if frames >= args.max_frames {
            ctrl.reset();
            bail!("match abandoned after {frames} frames");
        }

        if ctrl.status() == MatchStatus::Playing {
            let pointer = pilot.pointer(&ctrl.snapshot(), ctrl.table(), display);
            ctrl.pointer_moved(pointer.x, pointer.y);
        }

        match &clock {
            Some(clock) => {
                clock.advance(frame_ms);
            }
            None => thread::sleep(Duration::from_millis(frame_ms)),
        }
        let events = ctrl.poll();
        for event in &events {
            report(event);
        }

        if ctrl.status() == MatchStatus::Playing {
            frames += 1;
            if args.render_every > 0 && frames % args.render_every == 0 {
                if args.json_frames {
                    println!("{}", render::frame_json(ctrl.status(), &ctrl.snapshot()));
                } else {
                    println!("{}", canvas.render(&ctrl.snapshot(), ctrl.player_name()));
                }
            }
        }
    }

    if let Some(record) = ctrl.last_result() {
        let verdict = match record.winner {
            Side::Human => "You win",
            Side::Ai => "AI wins",
        };
        println!(
            "{verdict}! {} {} - {} AI",
            record.player_name, record.player_score, record.ai_score
        );
    }
    print_records(&ctrl.leaderboard(), 5);
    Ok(())
}

fn report(event: &MatchEvent) {
    if let Some(sound) = event.sound() {
        log::debug!("sound {sound:?}");
    }
    match event {
        MatchEvent::Countdown(n) => println!("{n}..."),
        MatchEvent::Kickoff => println!("GO!"),
        MatchEvent::Goal(goal) => println!(
            "Goal for {}! AI {} - {} you",
            match goal.scorer {
                Side::Human => "you",
                Side::Ai => "the AI",
            },
            goal.score.ai,
            goal.score.human
        ),
        MatchEvent::Hit(_) | MatchEvent::Wall | MatchEvent::Finished(_) => {}
    }
}

fn show_leaderboard(store: Box<dyn LeaderboardStore>, limit: usize, json: bool) -> Result<()> {
    let board = Leaderboard::new(store);
    let records = board.get_leaderboard();
    if json {
        let shown = &records[..records.len().min(limit)];
        println!("{}", serde_json::to_string_pretty(shown)?);
    } else {
        print_records(&records, limit);
    }
    Ok(())
}

fn print_records(records: &[hockey_match::MatchRecord], limit: usize) {
    if records.is_empty() {
        println!("No matches played yet");
        return;
    }
    println!("{:<10} {:>5} {:>5}  WINNER", "PLAYER", "YOU", "AI");
    for r in records.iter().take(limit) {
        let winner = match r.winner {
            Side::Human => "PLAYER",
            Side::Ai => "AI",
        };
        println!(
            "{:<10} {:>5} {:>5}  {winner}",
            r.player_name, r.player_score, r.ai_score
        );
    }
}
