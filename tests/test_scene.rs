use std::collections::HashSet;
use std::io;

use text_invaders::canvas::{Canvas, Tint};
use text_invaders::compute::init_world;
use text_invaders::config::Rules;
use text_invaders::entities::*;
use text_invaders::scene::render;

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Off-screen canvas that records what ends up in each cell.
struct GridCanvas {
    size: Size,
    cells: Vec<Vec<char>>,
    underlined: HashSet<(i32, i32)>,
    underline: bool,
    presented: usize,
}

impl GridCanvas {
    fn new(size: Size) -> Self {
        Self {
            size,
            cells: vec![vec![' '; size.width as usize]; size.height as usize],
            underlined: HashSet::new(),
            underline: false,
            presented: 0,
        }
    }

    fn row(&self, y: i32) -> String {
        self.cells[y as usize].iter().collect()
    }

    fn text_at(&self, x: i32, y: i32, len: usize) -> String {
        self.row(y).chars().skip(x as usize).take(len).collect()
    }
}

impl Canvas for GridCanvas {
    fn size(&self) -> Size {
        self.size
    }

    fn clear(&mut self) -> io::Result<()> {
        for row in &mut self.cells {
            row.fill(' ');
        }
        self.underlined.clear();
        Ok(())
    }

    fn set_tint(&mut self, _tint: Tint) -> io::Result<()> {
        Ok(())
    }

    fn set_underline(&mut self, on: bool) -> io::Result<()> {
        self.underline = on;
        Ok(())
    }

    fn draw_char(&mut self, x: i32, y: i32, c: char) -> io::Result<()> {
        if x < 0 || y < 0 || x >= self.size.width || y >= self.size.height {
            return Ok(());
        }
        self.cells[y as usize][x as usize] = c;
        if self.underline {
            self.underlined.insert((x, y));
        }
        Ok(())
    }

    fn present(&mut self) -> io::Result<()> {
        self.presented += 1;
        Ok(())
    }
}

const WINDOW: Size = Size::new(80, 40);

fn make_world(state: GameState) -> GameWorld {
    let table = HighScoreTable {
        scores: Vec::new(),
        capacity: 10,
    };
    let mut w = init_world(WINDOW, Rules::default(), table, &mut StdRng::seed_from_u64(1));
    w.game.state = state;
    w
}

fn draw(world: &GameWorld) -> GridCanvas {
    let mut canvas = GridCanvas::new(WINDOW);
    render(&mut canvas, world).unwrap();
    canvas
}

// ── intro ─────────────────────────────────────────────────────────────────────

#[test]
fn intro_is_centred_and_presented_once() {
    let canvas = draw(&make_world(GameState::Intro));
    assert_eq!(canvas.text_at(28, 18, 25), "WELCOME TO TEXT INVADERS!");
    assert!(canvas.row(19).contains("Press Space Bar to continue"));
    assert!(canvas.row(20).contains("high scores"));
    assert_eq!(canvas.presented, 1);
}

// ── play field ────────────────────────────────────────────────────────────────

#[test]
fn hud_shows_score_lives_and_level() {
    let mut w = make_world(GameState::Play);
    w.player.score = 120;
    w.player.lives = 2;
    w.game.level = 4;
    let canvas = draw(&w);
    assert!(canvas.row(0).starts_with("SCORE: 120, LIVES: 2, LEVEL: 4"));
}

#[test]
fn player_missile_and_shields_are_drawn() {
    let mut w = make_world(GameState::Play);
    w.player.missile = Some(Position::new(40, 30));
    let canvas = draw(&w);
    assert_eq!(canvas.text_at(38, 37, 5), " =A= ");
    assert_eq!(canvas.text_at(38, 38, 5), "=====");
    assert_eq!(canvas.text_at(40, 30, 1), "|");
    assert_eq!(canvas.text_at(11, 32, 7), "/IIIII\\");
    assert_eq!(canvas.text_at(62, 34, 7), "I/   \\I");
}

#[test]
fn dead_player_shows_the_current_explosion_frame() {
    let mut w = make_world(GameState::PlayerDead);
    w.player.animation = 1;
    let canvas = draw(&w);
    assert_eq!(canvas.text_at(38, 37, 5), "'~v~'");
}

#[test]
fn aliens_use_their_row_sprites_and_explosions() {
    let mut w = make_world(GameState::Play);
    w.aliens.cells[0][1] = CellState::Exploding;
    w.aliens.cells[0][2] = CellState::Dead;
    let canvas = draw(&w);

    assert_eq!(canvas.text_at(18, 13, 3), "/M\\");
    assert_eq!(canvas.text_at(22, 13, 3), "\\|/");
    assert_eq!(canvas.text_at(26, 13, 3), "   ");
    assert_eq!(canvas.text_at(18, 16, 3), "dOb");
    assert_eq!(canvas.text_at(18, 25, 3), "{@}");
}

#[test]
fn bombs_and_ufo_are_drawn() {
    let mut w = make_world(GameState::Play);
    w.aliens.bombs[0] = Bomb {
        position: Some(Position::new(5, 20)),
        animation: 1,
    };
    w.ufo.position = Some(Position::new(3, 2));
    let canvas = draw(&w);
    assert_eq!(canvas.text_at(5, 20, 1), "|");
    assert_eq!(canvas.text_at(3, 2, 6), "_/oo\\_");
    assert_eq!(canvas.text_at(3, 3, 6), "=q==p=");
}

#[test]
fn get_ready_banner_only_while_waiting() {
    let mut w = make_world(GameState::Wait);
    w.game.wait_timer = 5;
    assert_eq!(draw(&w).text_at(36, 20, 9), "GET READY");

    w.game.wait_timer = 0;
    assert!(!draw(&w).row(20).contains("GET READY"));
}

// ── menus ─────────────────────────────────────────────────────────────────────

#[test]
fn game_over_underlines_the_selected_letter() {
    let mut w = make_world(GameState::GameOver);
    w.game.name_entry.letters = [1, 14, 1];
    w.game.name_entry.cursor = 1;
    let canvas = draw(&w);

    assert!(canvas.row(13).contains("GAME OVER!"));
    assert!(canvas.row(16).contains("Please Enter your name:"));
    assert_eq!(canvas.text_at(39, 18, 3), "BOB");
    assert!(canvas.underlined.contains(&(40, 18)));
    assert!(!canvas.underlined.contains(&(39, 18)));
    assert!(!canvas.underlined.contains(&(41, 18)));
}

#[test]
fn high_scores_list_in_table_order() {
    let mut w = make_world(GameState::HighScore);
    w.table.scores = vec![
        Score {
            name: "XYZ".into(),
            score: 900,
        },
        Score {
            name: "ABC".into(),
            score: 40,
        },
    ];
    let canvas = draw(&w);

    assert_eq!(canvas.text_at(35, 5, 11), "High Scores");
    assert!(canvas.underlined.contains(&(35, 5)));
    assert_eq!(canvas.text_at(32, 7, 16), "XYZ          900");
    assert_eq!(canvas.text_at(32, 9, 16), "ABC           40");
    assert_eq!(canvas.text_at(32, 11, 16), " ".repeat(16));
}
