mod ui;

use std::fs;
use std::io::stdout;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use crossterm::{ExecutableCommand, cursor};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use notefall_core::{InputEvent, NullAudio, Session, export};

/// Target frame duration (~60 FPS).
const FRAME: Duration = Duration::from_millis(16);

#[derive(Parser)]
#[command(name = "notefall")]
#[command(about = "Four-column falling-note rhythm game", version)]
struct Args {
    /// Path to a beatmap file
    #[arg(default_value = "his_theme.txt")]
    beatmap: PathBuf,

    /// Skip the beatmap and play endless procedural mode
    #[arg(long)]
    endless: bool,

    /// RNG seed for procedural mode
    #[arg(long)]
    seed: Option<u64>,

    /// Write a JSON results entry to this file on exit
    #[arg(long)]
    export_json: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("notefall=warn".parse()?)
                .add_directive("notefall_core=warn".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut session = if args.endless {
        match args.seed {
            Some(seed) => Session::endless_seeded(seed, NullAudio),
            None => Session::endless(NullAudio),
        }
    } else {
        Session::from_file(&args.beatmap, NullAudio)
    };

    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(cursor::Hide)?;

    let result = run(&mut session);

    stdout().execute(cursor::Show)?;
    stdout().execute(LeaveAlternateScreen)?;
    disable_raw_mode()?;

    result?;

    print!(
        "{}",
        export::console::format_results(session.mode_label(), session.stats())
    );

    if let Some(path) = &args.export_json {
        let entry = export::json::results_json(session.mode_label(), session.stats());
        match fs::write(path, serde_json::to_string_pretty(&entry)?) {
            Ok(()) => info!("Wrote results to {:?}", path),
            Err(e) => warn!("Failed to write results to {:?}: {}", path, e),
        }
    }

    Ok(())
}

/// Tick loop: drain input, advance by the measured wall-clock delta,
/// render, sleep out the frame.
fn run(session: &mut Session<NullAudio>) -> Result<()> {
    let mut out = stdout();
    let mut last_frame = Instant::now();

    loop {
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                for input in ui::map_key(&key) {
                    if input == InputEvent::Quit {
                        return Ok(());
                    }
                    session.handle_event(input);
                }
            }
        }

        let now = Instant::now();
        let dt = now.duration_since(last_frame).as_secs_f32();
        last_frame = now;

        session.tick(dt);
        ui::render(&mut out, session)?;

        std::thread::sleep(FRAME);
    }
}
