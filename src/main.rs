//! Flappy Sim entry point
//!
//! Headless native runner: drives a session from the autopilot, records each
//! frame into a draw list and logs how the runs went. Real windowing hosts
//! plug their own `Renderer`/`AudioBackend` into the same `Session`.

use std::path::PathBuf;

use clap::Parser;

use flappy_sim::audio::{AudioManager, LogBackend};
use flappy_sim::highscores::DEFAULT_HIGHSCORE_FILE;
use flappy_sim::consts::SIM_HZ;
use flappy_sim::persistence::save_json;
use flappy_sim::platform::{Autopilot, Command, FrameLimiter};
use flappy_sim::renderer::DrawList;
use flappy_sim::settings::DEFAULT_SETTINGS_FILE;
use flappy_sim::sim::GameEvent;
use flappy_sim::{FileHighScoreStore, FrameOutcome, Session, Settings};

/// Flappy Sim - flap through the pipes
#[derive(Parser)]
#[command(version, about = "Headless Flappy Sim runner")]
struct Cli {
    /// Number of frames to simulate
    #[arg(long, default_value_t = 3600)]
    frames: u64,

    /// RNG seed (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Pace frames at 60 Hz instead of running flat out
    #[arg(long)]
    realtime: bool,

    /// Let the bird fall without scripted flaps
    #[arg(long)]
    no_autopilot: bool,

    /// High score file
    #[arg(long, value_name = "PATH", default_value = DEFAULT_HIGHSCORE_FILE)]
    highscore_file: PathBuf,

    /// Settings file
    #[arg(long, value_name = "PATH", default_value = DEFAULT_SETTINGS_FILE)]
    settings: PathBuf,

    /// Directory holding jump/score/hit/die .wav clips
    #[arg(long, value_name = "DIR", default_value = "assets/sounds")]
    sounds: PathBuf,

    /// Dump the last frame's draw commands as JSON
    #[arg(long, value_name = "PATH")]
    dump_frame: Option<PathBuf>,

    /// Write the effective settings back to the settings file and exit
    #[arg(long)]
    write_settings: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let settings = Settings::load(&cli.settings);

    if cli.write_settings {
        if let Err(e) = settings.save(&cli.settings) {
            eprintln!("Error writing {}: {e}", cli.settings.display());
            std::process::exit(1);
        }
        println!("Settings written to {}", cli.settings.display());
        return;
    }

    let seed = cli.seed.unwrap_or_else(rand::random);
    log::info!("Flappy Sim (native) starting...");

    let audio = AudioManager::load(LogBackend, &cli.sounds, &settings);
    let store = FileHighScoreStore::new(&cli.highscore_file);
    let mut session = Session::new(seed, audio, store);

    let mut autopilot = (!cli.no_autopilot).then(|| Autopilot::new(SIM_HZ));
    let mut limiter = cli.realtime.then(|| FrameLimiter::new(SIM_HZ));
    let mut draw_list = DrawList::new();

    let mut frames = 0u64;
    let mut runs = 1u32;
    let mut best_run = 0u32;

    while frames < cli.frames {
        let commands: Vec<_> = autopilot
            .as_mut()
            .and_then(|pilot| pilot.command(session.state()))
            .into_iter()
            .collect();

        if session.frame(&commands) == FrameOutcome::Quit {
            break;
        }
        frames += 1;

        for event in session.last_events() {
            if let GameEvent::Crashed { .. } = event {
                best_run = best_run.max(session.state().score);
            }
        }
        if commands.contains(&Command::Reset) {
            runs += 1;
        }

        draw_list.clear();
        session.render(&settings, &mut draw_list);

        if let Some(limiter) = limiter.as_mut() {
            limiter.wait();
        }
    }

    let state = session.state();
    log::info!(
        "Simulated {} frames over {} run(s): best run {}, current score {}, high score {}",
        frames,
        runs,
        best_run.max(state.score),
        state.score,
        state.high_score
    );
    log::info!(
        "Last frame issued {} draw commands ({} frames presented)",
        draw_list.last_frame_len,
        draw_list.frames
    );

    if let Some(path) = cli.dump_frame {
        match save_json(&path, &draw_list.commands) {
            Ok(()) => log::info!("Frame dumped to {}", path.display()),
            Err(e) => log::warn!("Failed to dump frame to {}: {}", path.display(), e),
        }
    }
}
