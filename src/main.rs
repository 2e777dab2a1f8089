//! Kickabout headless runner
//!
//! Drives a session with a seeded input script and reports what happened.

use std::path::PathBuf;

use clap::Parser;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use kickabout::Tuning;
use kickabout::consts::SIM_DT;
use kickabout::sim::{Direction, Intent, RenderState, Session, Timestamp, Touch, tick};

/// Command-line options
#[derive(Parser, Debug)]
#[command(name = "kickabout")]
#[command(about = "Run a headless kickabout session", long_about = None)]
struct Options {
    /// Number of 60 Hz ticks to simulate
    #[arg(long, default_value_t = 60 * 60)]
    ticks: u64,

    /// Seed for the scripted input
    #[arg(long, default_value_t = 12345)]
    seed: u64,

    /// Tuning JSON file (defaults when absent)
    #[arg(long)]
    tuning: Option<PathBuf>,

    /// Print the final render state as JSON
    #[arg(long)]
    json: bool,
}

/// Scripted stand-in for a keyboard: holds random directions and taps kick
struct InputScript {
    rng: Pcg32,
    held: Vec<Direction>,
    hold_ticks: u32,
    kick_held_ticks: Option<u32>,
}

impl InputScript {
    fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            held: Vec::new(),
            hold_ticks: 0,
            kick_held_ticks: None,
        }
    }

    fn direction(&mut self) -> Direction {
        match self.rng.random_range(0..4) {
            0 => Direction::Up,
            1 => Direction::Down,
            2 => Direction::Left,
            _ => Direction::Right,
        }
    }

    /// Queue this tick's intents
    fn feed(&mut self, session: &mut Session) {
        if self.hold_ticks == 0 {
            self.held.clear();
            for _ in 0..self.rng.random_range(0..=2) {
                let dir = self.direction();
                self.held.push(dir);
            }
            self.hold_ticks = self.rng.random_range(10..90);
        }
        self.hold_ticks -= 1;
        for dir in &self.held {
            session.push_intent(Intent::Direction(*dir));
        }

        self.kick_held_ticks = match self.kick_held_ticks {
            Some(0) => {
                session.push_intent(Intent::KickRelease);
                None
            }
            Some(remaining) => Some(remaining - 1),
            None if self.rng.random_bool(0.01) => {
                session.push_intent(Intent::KickPress);
                Some(self.rng.random_range(5..120))
            }
            None => None,
        };
    }
}

#[derive(Debug, Default)]
struct Summary {
    dribbles: u32,
    strikes: u32,
    collisions: u32,
    slides: u32,
    max_altitude: f32,
}

fn run(options: &Options) -> Session {
    let tuning = match &options.tuning {
        Some(path) => Tuning::load(path),
        None => Tuning::default(),
    };
    let mut session = Session::new(tuning);
    let mut script = InputScript::new(options.seed);
    let mut summary = Summary::default();

    log::info!("Running {} ticks with seed {}", options.ticks, options.seed);

    for t in 0..options.ticks {
        let now: Timestamp = t * 1000 / 60;
        script.feed(&mut session);
        let report = tick(&mut session, now, SIM_DT);

        match report.touch {
            Touch::Dribbled { .. } => summary.dribbles += 1,
            Touch::Struck { strength } => {
                summary.strikes += 1;
                log::info!("Strike at {}ms with strength {}", now, strength);
            }
            Touch::Collided => summary.collisions += 1,
            Touch::None => {}
        }
        if report.slid {
            summary.slides += 1;
        }
        summary.max_altitude = summary.max_altitude.max(session.ball.altitude);
    }

    log::info!(
        "Done: {} dribble touches, {} strikes, {} collisions, {} slides, peak altitude {:.1}",
        summary.dribbles,
        summary.strikes,
        summary.collisions,
        summary.slides,
        summary.max_altitude
    );
    session
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = Options::parse();

    let session = run(&options);

    if options.json {
        match serde_json::to_string_pretty(&RenderState::capture(&session)) {
            Ok(json) => println!("{json}"),
            Err(e) => log::error!("Could not encode final state: {e}"),
        }
    }
}
