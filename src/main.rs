use std::io::{self, Stdout};
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::cursor::{Hide, Show};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use maze_game::audio::{AudioSink, Cue, Silent, TerminalBell};
use maze_game::game::GameState;
use maze_game::input::InputSource;
use maze_game::maze::{self, Grid};
use maze_game::render::Renderer;
use maze_game::Result;

const DEFAULT_ROWS: usize = 30;
const DEFAULT_COLS: usize = 30;
const DEFAULT_TICK_MS: u64 = 70;
const DEFAULT_RENDER_FPS: u64 = 120;

#[derive(Parser)]
#[command(name = "maze")]
#[command(
    author,
    version,
    about = "Walk a randomly carved maze from the top-left corner to the bottom-right one"
)]
struct Cli {
    /// Maze height in cells
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    rows: usize,

    /// Maze width in cells
    #[arg(long, default_value_t = DEFAULT_COLS)]
    cols: usize,

    /// Seed for a reproducible maze
    #[arg(short, long)]
    seed: Option<u64>,

    /// Disable the terminal bell
    #[arg(short, long)]
    mute: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let grid = maze::generate(cli.rows, cli.cols, &mut rng)?;
    let mut audio: Box<dyn AudioSink> = if cli.mute {
        Box::new(Silent)
    } else {
        Box::new(TerminalBell)
    };

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(Hide)?;

    let result = run(&mut stdout, grid, audio.as_mut());

    stdout.execute(Show)?;
    stdout.execute(LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}

fn run(stdout: &mut Stdout, grid: Grid, audio: &mut dyn AudioSink) -> Result<()> {
    let mut game = GameState::new(grid);
    let mut input = InputSource::new();
    let mut renderer = Renderer::new(game.grid().rows(), game.grid().cols());
    let (tick_ms, render_fps) = read_speed_settings();
    let tick_time = Duration::from_millis(tick_ms);
    let frame_time = Duration::from_micros(1_000_000 / render_fps.max(1));
    let mut last_tick = Instant::now();

    loop {
        let frame_start = Instant::now();
        input.poll()?;
        if input.quit_requested() {
            return Ok(());
        }

        if last_tick.elapsed() >= tick_time {
            last_tick = Instant::now();
            if game.apply_held(&input.held_dirs()) {
                audio.play(Cue::Move);
            }
            if game.has_won() {
                renderer.draw(stdout, &game)?;
                audio.play(Cue::Win);
                info!("maze solved in {} moves", game.moves());
                return renderer.win_screen(stdout, &game);
            }
        }
        renderer.draw(stdout, &game)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }
}

fn read_speed_settings() -> (u64, u64) {
    let tick_ms = std::env::var("MAZE_TICK_MS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(DEFAULT_TICK_MS);
    let render_fps = std::env::var("MAZE_FPS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(DEFAULT_RENDER_FPS);
    (tick_ms, render_fps)
}
