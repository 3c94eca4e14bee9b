// GameWorld struct and per-frame update
//
// This module contains the GameWorld struct which owns every moving object and
// the rest of the game state (score, lives, waves, timers, effects). The state
// other than the object list lives in `WorldState`, which is what objects get
// to see through `WorldCallbacks` while the list is being iterated.

use crate::animation::Animation;
use crate::assets::Assets;
use crate::chronometer::Chronometer;
use crate::collision;
use crate::input_system::InputState;
use crate::meteor::Meteor;
use crate::moving_object::MovingObject;
use crate::player::Player;
use crate::save::{ScoreEntry, ScoreStore};
use crate::ui::Message;
use crate::vector::Vector2D;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;
use tracing::{error, info};

use super::callbacks::WorldCallbacks;
use super::config::GameConfig;
use super::types::{AppState, Arena};

/// Everything the world owns except the moving objects.
pub struct WorldState {
    pub(super) config: GameConfig,
    pub(super) arena: Arena,
    pub(super) assets: Assets,
    pub(super) rng: StdRng,
    pub(super) store: Box<dyn ScoreStore>,

    pub(super) messages: Vec<Message>,
    pub(super) explosions: Vec<Animation>,
    /// Objects created during the current pass, appended once it ends.
    pub(super) spawned: Vec<MovingObject>,

    pub(super) score: u32,
    pub(super) lives: i32,
    pub(super) wave: u32,
    /// Number of big meteors the next wave starts with.
    pub(super) meteors: u32,

    pub(super) ufo_spawner: Chronometer,
    pub(super) game_over_timer: Chronometer,
    pub(super) game_over: bool,

    pub(super) player_start: Vector2D,
    /// Player position sampled at the start of the pass.
    pub(super) player_center: Option<Vector2D>,
}

/// GameWorld encapsulates all game entities and world state
pub struct GameWorld {
    pub(super) objects: Vec<MovingObject>,
    pub(super) state: WorldState,
    pub(super) finished: bool,
}

impl GameWorld {
    /// Creates a world with the player at the center and the first wave queued.
    pub fn new(config: GameConfig, assets: Assets, store: Box<dyn ScoreStore>) -> Self {
        debug_assert!(config.validate().is_ok(), "invalid game config: {:?}", config.validate());
        let arena = config.arena();
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut ufo_spawner = Chronometer::new();
        ufo_spawner.run(config.ufo_spawn_interval());

        let player_start = arena.center();
        let player = Player::new(player_start, &assets);

        let state = WorldState {
            arena,
            assets,
            rng,
            store,
            messages: Vec::new(),
            explosions: Vec::new(),
            spawned: Vec::new(),
            score: 0,
            lives: config.starting_lives,
            wave: 0,
            meteors: config.initial_meteors,
            ufo_spawner,
            game_over_timer: Chronometer::new(),
            game_over: false,
            player_start,
            player_center: Some(player_start),
            config,
        };

        let mut world = GameWorld {
            objects: vec![MovingObject::Player(player)],
            state,
            finished: false,
        };
        world.start_wave();
        world
    }

    /// Advances the world by `dt`.
    ///
    /// Returns `Some(AppState::Menu)` exactly once, when the game-over delay has
    /// run out and the score was handed to the store. From then on the world is
    /// finished and every call returns `None`.
    pub fn update(&mut self, dt: Duration, input: &InputState) -> Option<AppState> {
        if self.finished {
            return None;
        }

        self.update_objects(dt, input);

        for explosion in &mut self.state.explosions {
            explosion.advance(dt);
        }
        self.state.explosions.retain(Animation::is_running);

        for message in &mut self.state.messages {
            message.advance(dt);
        }

        if self.state.game_over && !self.state.game_over_timer.is_running() {
            self.persist_score();
            self.finished = true;
            info!(score = self.state.score, wave = self.state.wave, "game finished");
            return Some(AppState::Menu);
        }

        if !self.state.ufo_spawner.is_running() {
            let interval = self.state.config.ufo_spawn_interval();
            self.state.ufo_spawner.run(interval);
            self.state.spawn_ufo();
            self.flush_spawned();
        }

        self.state.game_over_timer.update(dt);
        self.state.ufo_spawner.update(dt);

        if self.objects.iter().any(|object| object.as_meteor().is_some()) {
            return None;
        }

        self.start_wave();
        None
    }

    /// Update pass: move everything, resolve hits, drop the dead, then add
    /// whatever was spawned along the way.
    fn update_objects(&mut self, dt: Duration, input: &InputState) {
        self.state.player_center = self.player().map(|player| player.body().position);

        for object in &mut self.objects {
            if object.is_dead() {
                continue;
            }
            object.update(dt, input, &mut self.state);
        }

        self.resolve_collisions();

        self.objects.retain(|object| !object.is_dead());
        self.flush_spawned();
    }

    fn resolve_collisions(&mut self) {
        for (i, j) in collision::colliding_pairs(&self.objects) {
            let (head, tail) = self.objects.split_at_mut(j);
            let (a, b) = (&mut head[i], &mut tail[0]);

            // An earlier hit this pass may have killed or moved either object
            if !a.can_collide_with(b) || !collision::collides(&*a, &*b) {
                continue;
            }

            a.on_hit(&mut self.state);
            b.on_hit(&mut self.state);
        }
    }

    fn flush_spawned(&mut self) {
        self.objects.append(&mut self.state.spawned);
    }

    /// Appends this game's score to the stored list. Failures are logged and
    /// never stop the transition to the menu.
    fn persist_score(&self) {
        let store = &self.state.store;

        let mut scores = match store.load_scores() {
            Ok(scores) => scores,
            Err(e) => {
                // Leave the unreadable file alone rather than overwrite it
                error!(error = %e, "could not load scores, score not saved");
                return;
            }
        };

        scores.push(ScoreEntry::today(self.state.score));

        if let Err(e) = store.save_scores(&scores) {
            error!(error = %e, "could not save scores");
        }
    }

    pub fn add_score(&mut self, value: u32, position: Vector2D) {
        self.state.add_score(value, position);
    }

    pub fn divide_meteor(&mut self, meteor: &Meteor) {
        self.state.divide_meteor(meteor);
        self.flush_spawned();
    }

    pub fn play_explosion(&mut self, position: Vector2D) {
        self.state.play_explosion(position);
    }

    pub fn subtract_life(&mut self) -> bool {
        self.state.subtract_life()
    }

    pub fn game_over(&mut self) {
        self.state.game_over();
    }

    pub fn start_wave(&mut self) {
        self.state.start_wave();
        self.flush_spawned();
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn lives(&self) -> i32 {
        self.state.lives
    }

    pub fn wave(&self) -> u32 {
        self.state.wave
    }

    pub fn meteor_quota(&self) -> u32 {
        self.state.meteors
    }

    pub fn objects(&self) -> &[MovingObject] {
        &self.objects
    }

    /// Direct access to the object list, for scripted scenarios.
    pub fn objects_mut(&mut self) -> &mut Vec<MovingObject> {
        &mut self.objects
    }

    pub fn player(&self) -> Option<&Player> {
        self.objects
            .iter()
            .filter(|object| !object.is_dead())
            .find_map(MovingObject::as_player)
    }

    pub fn messages(&self) -> &[Message] {
        &self.state.messages
    }

    pub fn explosions(&self) -> &[Animation] {
        &self.state.explosions
    }

    pub fn is_game_over(&self) -> bool {
        self.state.game_over
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn player_start(&self) -> Vector2D {
        self.state.player_start
    }

    pub fn arena(&self) -> Arena {
        self.state.arena
    }

    pub fn config(&self) -> &GameConfig {
        &self.state.config
    }
}
