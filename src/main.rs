use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Parser;
use log::{LevelFilter, info};
use simplelog::{Config, WriteLogger};
use snake_arcade::config::{
    DEFAULT_CELL_SIZE, DEFAULT_HEIGHT_PX, DEFAULT_WIDTH_PX, DisplayConfig, FRAME_INTERVAL,
};
use snake_arcade::game::GameSession;
use snake_arcade::grid::GridGeometry;
use snake_arcade::input::InputHandler;
use snake_arcade::renderer;
use snake_arcade::score::{FileRecordStore, data_dir, record_path};
use snake_arcade::terminal_runtime::{AppTerminal, TerminalSession};

const LOG_FILE_NAME: &str = "snake.log";

/// Eat apples, grow, and stay off the walls.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Stretch the board over the whole terminal.
    #[arg(long)]
    fullscreen: bool,

    /// File holding the record score.
    #[arg(long, value_name = "PATH")]
    record: Option<PathBuf>,

    /// Seed apple placement for a reproducible game.
    #[arg(long)]
    seed: Option<u64>,

    /// Playfield width in pixels.
    #[arg(long, default_value_t = DEFAULT_WIDTH_PX)]
    width: u32,

    /// Playfield height in pixels.
    #[arg(long, default_value_t = DEFAULT_HEIGHT_PX)]
    height: u32,

    /// Edge length of one cell in pixels.
    #[arg(long, default_value_t = DEFAULT_CELL_SIZE)]
    cell_size: u32,

    /// Where to write the log.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Log every apple, not just session boundaries.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    let config = DisplayConfig {
        width_px: cli.width,
        height_px: cli.height,
        cell_size: cli.cell_size,
        fullscreen: cli.fullscreen,
    };
    let geometry = config
        .geometry()
        .map_err(|error| io::Error::new(io::ErrorKind::InvalidInput, error))?;

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let log_path = cli
        .log_file
        .unwrap_or_else(|| data_dir().join(LOG_FILE_NAME));
    if let Err(error) = init_logging(&log_path, level) {
        eprintln!("Logging disabled: {error}");
    }

    let records = cli.record.unwrap_or_else(record_path);
    info!("starting, record file {}", records.display());

    let mut session = TerminalSession::enter()?;
    run(session.terminal_mut(), &config, geometry, &records, cli.seed)
}

fn init_logging(path: &Path, level: LevelFilter) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    WriteLogger::init(level, Config::default(), File::create(path)?)
        .map_err(io::Error::other)
}

fn run(
    terminal: &mut AppTerminal,
    config: &DisplayConfig,
    geometry: GridGeometry,
    records: &Path,
    seed: Option<u64>,
) -> io::Result<()> {
    let mut input = InputHandler::new(FRAME_INTERVAL);
    let mut round = 0;
    let mut game = new_game(geometry, records, seed, round);
    let mut last_frame = Instant::now();

    loop {
        terminal.draw(|frame| renderer::render(frame, &game, config))?;

        let frame_input = input.poll_frame()?;
        if frame_input.quit {
            info!("quit requested");
            break;
        }

        if game.is_over() && frame_input.confirm {
            round += 1;
            game = new_game(geometry, records, seed, round);
            last_frame = Instant::now();
            continue;
        }

        let now = Instant::now();
        let elapsed = now.duration_since(last_frame);
        last_frame = now;

        game.tick(elapsed, frame_input.held);
    }

    Ok(())
}

fn new_game(
    geometry: GridGeometry,
    records: &Path,
    seed: Option<u64>,
    round: u64,
) -> GameSession<FileRecordStore> {
    let store = FileRecordStore::new(records);
    match seed {
        Some(seed) => GameSession::new_with_seed(geometry, store, seed.wrapping_add(round)),
        None => GameSession::new(geometry, store),
    }
}
