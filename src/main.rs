mod display;

use std::fs::OpenOptions;
use std::io::{stdout, BufWriter, Write};
use std::path::Path;
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal, ExecutableCommand,
};
use rand::thread_rng;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use display::TerminalCanvas;
use text_invaders::compute::{handle_key, init_world, tick};
use text_invaders::config::{GameConfig, CONFIG_FILE};
use text_invaders::entities::{GameWorld, Size};
use text_invaders::high_score::{load_table, FileScoreStore};
use text_invaders::input::{Flow, Key};
use text_invaders::scene::render;

/// Smallest terminal the formation fits in at level 1.
const MIN_WIDTH: u16 = 80;
const MIN_HEIGHT: u16 = 40;

// ── Logging ───────────────────────────────────────────────────────────────────

/// Log to a file: the terminal belongs to the game. If the file can't be
/// opened the game simply runs without logs.
fn init_logging(config: &GameConfig) {
    let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)
    else {
        return;
    };
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
}

// ── Input ─────────────────────────────────────────────────────────────────────

fn map_key(event: &KeyEvent) -> Option<Key> {
    match event.code {
        KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => Some(Key::Quit),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Key::Quit),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Key::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Key::Right),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Char(' ') => Some(Key::Confirm),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(Key::Alt),
        _ => None,
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// One key poll per pass; the simulation and the frame only advance once a
/// full frame interval has elapsed.
fn game_loop<W: Write>(
    canvas: &mut TerminalCanvas<W>,
    world: &mut GameWorld,
    store: &FileScoreStore,
    rx: &mpsc::Receiver<Event>,
    frame: Duration,
) -> std::io::Result<()> {
    let mut rng = thread_rng();
    let mut last_frame = Instant::now();

    loop {
        match rx.try_recv() {
            Ok(Event::Key(key_event)) if key_event.kind == KeyEventKind::Press => {
                if let Some(key) = map_key(&key_event) {
                    if handle_key(world, key, store, &mut rng) == Flow::Quit {
                        return Ok(());
                    }
                }
            }
            Ok(Event::Resize(width, height)) => {
                canvas.resize(Size::new(width as i32, height as i32));
            }
            Ok(_) | Err(mpsc::TryRecvError::Empty) => {}
            Err(mpsc::TryRecvError::Disconnected) => return Ok(()),
        }

        let elapsed = last_frame.elapsed();
        if elapsed >= frame {
            last_frame = Instant::now();
            tick(world, &mut rng);
            render(canvas, world)?;
        } else {
            thread::sleep((frame - elapsed).min(Duration::from_millis(1)));
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    let config = GameConfig::load(Path::new(CONFIG_FILE));
    init_logging(&config);

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Terminal events are read on their own thread and forwarded; the loop
    // only ever polls the channel.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = run(&mut out, &rx, &config);

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

fn run<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    config: &GameConfig,
) -> std::io::Result<()> {
    let (width, height) = terminal::size()?;
    if width < MIN_WIDTH || height < MIN_HEIGHT {
        warn!(
            width,
            height,
            "terminal smaller than {}x{}; the swarm will be clipped",
            MIN_WIDTH,
            MIN_HEIGHT
        );
    }
    let window = Size::new(width as i32, height as i32);

    let store = FileScoreStore::new(&config.high_score_file);
    let table = load_table(&store, config.rules.max_high_scores);
    let mut world = init_world(window, config.rules, table, &mut thread_rng());
    info!(width, height, scores = world.table.scores.len(), "starting");

    let mut canvas = TerminalCanvas::new(out, window);
    let frame = Duration::from_secs(1) / config.fps;
    game_loop(&mut canvas, &mut world, &store, rx, frame)?;

    info!(score = world.player.score, "quit");
    Ok(())
}
