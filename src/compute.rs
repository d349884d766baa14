//! Game flow: the phase state machine, key handling, and the per-tick
//! orchestration that drives the player, swarm, shields and UFO.
//!
//! Every function takes the world by exclusive reference; randomness comes
//! through an injected `Rng` so tests can seed it.

use rand::Rng;
use tracing::{debug, info};

use crate::aliens::{init_aliens, missile_hits_alien, resolve_alien_hit, update_aliens};
use crate::config::Rules;
use crate::constants::{MAX_ALPHABET_CHARACTERS, MAX_NUMBER_OF_CHARACTERS_IN_NAME};
use crate::entities::{
    Game, GameState, GameWorld, HighScoreTable, NameEntry, Size, SwarmEvent,
};
use crate::high_score::{record_high_score, ScoreStore};
use crate::input::{Flow, Key};
use crate::player::{advance_missile, init_player, move_player, player_shoot, reset_player};
use crate::shield::{erase_point, init_shields, point_hits_shield};
use crate::ufo::{advance_ufo, init_ufo, launch_ufo, missile_hits_ufo, reset_ufo, should_launch};

// ── Name entry ───────────────────────────────────────────────────────────────

impl NameEntry {
    pub fn new() -> Self {
        Self {
            cursor: 0,
            letters: [0; MAX_NUMBER_OF_CHARACTERS_IN_NAME],
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = (self.cursor + MAX_NUMBER_OF_CHARACTERS_IN_NAME - 1)
            % MAX_NUMBER_OF_CHARACTERS_IN_NAME;
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1) % MAX_NUMBER_OF_CHARACTERS_IN_NAME;
    }

    /// Step the selected letter backwards, wrapping 'A' to 'Z'.
    pub fn letter_up(&mut self) {
        if let Some(letter) = self.letters.get_mut(self.cursor) {
            *letter = (*letter + MAX_ALPHABET_CHARACTERS - 1) % MAX_ALPHABET_CHARACTERS;
        }
    }

    pub fn letter_down(&mut self) {
        if let Some(letter) = self.letters.get_mut(self.cursor) {
            *letter = (*letter + 1) % MAX_ALPHABET_CHARACTERS;
        }
    }

    pub fn letter(&self, slot: usize) -> char {
        self.letters
            .get(slot)
            .map_or('A', |&i| char::from(b'A' + i % MAX_ALPHABET_CHARACTERS))
    }

    pub fn name(&self) -> String {
        (0..MAX_NUMBER_OF_CHARACTERS_IN_NAME)
            .map(|slot| self.letter(slot))
            .collect()
    }
}

impl Default for NameEntry {
    fn default() -> Self {
        Self::new()
    }
}

// ── Constructors ─────────────────────────────────────────────────────────────

pub fn init_game(window: Size, rules: Rules) -> Game {
    Game {
        window,
        state: GameState::Intro,
        wait_timer: 0,
        game_timer: 0,
        level: 1,
        name_entry: NameEntry::new(),
        rules,
    }
}

/// Build the world shown at program start: intro screen, level 1.
pub fn init_world(
    window: Size,
    rules: Rules,
    table: HighScoreTable,
    rng: &mut impl Rng,
) -> GameWorld {
    let game = init_game(window, rules);
    GameWorld {
        player: init_player(window, rules.max_lives),
        shields: init_shields(window, rules.num_shields),
        aliens: init_aliens(window, game.level),
        ufo: init_ufo(rng),
        table,
        game,
    }
}

/// The level after `level`, wrapping back to 1 after `num_levels`.
pub fn next_level(level: u32, num_levels: u32) -> u32 {
    level % num_levels.max(1) + 1
}

fn set_state(game: &mut Game, state: GameState) {
    if game.state != state {
        debug!(from = ?game.state, to = ?state, "phase change");
        game.state = state;
    }
}

fn enter_game_over(game: &mut Game) {
    set_state(game, GameState::GameOver);
    game.name_entry = NameEntry::new();
}

/// Fresh round at the current level: player recentred, shields rebuilt,
/// swarm restored. Score and lives carry over.
pub fn reset_round(world: &mut GameWorld) {
    let window = world.game.window;
    world.game.wait_timer = 0;
    world.game.game_timer = 0;
    reset_player(window, &mut world.player);
    world.shields = init_shields(window, world.game.rules.num_shields);
    world.aliens = init_aliens(window, world.game.level);
}

/// Back to a brand new game at level 1.
pub fn reset_game(world: &mut GameWorld, rng: &mut impl Rng) {
    world.game.level = 1;
    world.game.name_entry = NameEntry::new();
    world.player = init_player(world.game.window, world.game.rules.max_lives);
    reset_ufo(&mut world.ufo, rng);
    reset_round(world);
}

// ── Input ────────────────────────────────────────────────────────────────────

/// Apply one key press according to the current phase.
pub fn handle_key(
    world: &mut GameWorld,
    key: Key,
    store: &impl ScoreStore,
    rng: &mut impl Rng,
) -> Flow {
    let window = world.game.window;
    let step = world.game.rules.player_step;

    match (world.game.state, key) {
        (_, Key::Quit) => return Flow::Quit,

        (GameState::Intro, Key::Confirm) => set_state(&mut world.game, GameState::Play),
        (GameState::Intro, Key::Alt) => set_state(&mut world.game, GameState::HighScore),

        (GameState::Play, Key::Left) => move_player(window, &mut world.player, -step),
        (GameState::Play, Key::Right) => move_player(window, &mut world.player, step),
        (GameState::Play, Key::Confirm) => player_shoot(&mut world.player),

        (GameState::PlayerDead, Key::Confirm) => {
            world.player.lives = world.player.lives.saturating_sub(1);
            world.player.animation = 0;
            if world.player.lives == 0 {
                info!(score = world.player.score, "game over");
                enter_game_over(&mut world.game);
            } else {
                world.game.wait_timer = world.game.rules.death_wait;
                set_state(&mut world.game, GameState::Wait);
            }
        }

        (GameState::GameOver, Key::Left) => world.game.name_entry.move_left(),
        (GameState::GameOver, Key::Right) => world.game.name_entry.move_right(),
        (GameState::GameOver, Key::Up) => world.game.name_entry.letter_up(),
        (GameState::GameOver, Key::Down) => world.game.name_entry.letter_down(),
        (GameState::GameOver, Key::Confirm) => {
            let name = world.game.name_entry.name();
            record_high_score(&mut world.table, store, &name, world.player.score);
            set_state(&mut world.game, GameState::HighScore);
        }

        (GameState::HighScore, Key::Confirm) => {
            set_state(&mut world.game, GameState::Intro);
            reset_game(world, rng);
        }

        _ => {}
    }

    Flow::Continue
}

// ── Per-tick ─────────────────────────────────────────────────────────────────

/// Advance the simulation by one frame.
pub fn tick(world: &mut GameWorld, rng: &mut impl Rng) {
    world.game.game_timer += 1;

    match world.game.state {
        GameState::Play => play_tick(world, rng),
        GameState::PlayerDead => world.player.animation ^= 1,
        GameState::Wait => set_state(&mut world.game, GameState::Play),
        GameState::Intro | GameState::GameOver | GameState::HighScore => {}
    }
}

fn play_tick(world: &mut GameWorld, rng: &mut impl Rng) {
    let window = world.game.window;
    world.game.wait_timer = world.game.wait_timer.saturating_sub(1);

    // ── 1. Player missile vs shields and aliens ──────────────────────────────
    advance_missile(&mut world.player);

    if let Some((index, local)) = point_hits_shield(world.player.missile, &world.shields) {
        world.player.missile = None;
        erase_point(&mut world.shields[index], local);
    }

    if let Some(cell) = missile_hits_alien(world.player.missile, &world.aliens) {
        world.player.missile = None;
        world.player.score += resolve_alien_hit(&mut world.aliens, cell);
    }

    // ── 2. Swarm, bombs, explosions ──────────────────────────────────────────
    let event = update_aliens(
        window,
        &mut world.aliens,
        &world.player,
        &mut world.shields,
        rng,
    );

    // ── 3. Level cleared; wins over a hit or landing on the same tick ────────
    if world.aliens.alive == 0 {
        world.game.level = next_level(world.game.level, world.game.rules.num_levels);
        info!(level = world.game.level, "level cleared");
        set_state(&mut world.game, GameState::Wait);
        reset_round(world);
        return;
    }

    match event {
        SwarmEvent::PlayerHit => {
            set_state(&mut world.game, GameState::PlayerDead);
            return;
        }
        SwarmEvent::ReachedBottom => {
            info!(score = world.player.score, "swarm reached the player");
            enter_game_over(&mut world.game);
            return;
        }
        SwarmEvent::Nothing => {}
    }

    // ── 4. UFO ───────────────────────────────────────────────────────────────
    if world.ufo.position.is_none() {
        let rules = &world.game.rules;
        if should_launch(world.game.game_timer, rules.ufo_period, rules.ufo_offset) {
            launch_ufo(&mut world.ufo);
        }
    } else if missile_hits_ufo(world.player.missile, &world.ufo) {
        world.player.score += world.ufo.points;
        world.player.missile = None;
        reset_ufo(&mut world.ufo, rng);
    } else {
        advance_ufo(window, &mut world.ufo, rng);
    }
}
