use asteroids::assets::Assets;
use asteroids::game::constants::FRAME_TIME;
use asteroids::game::{AppState, GameConfig, GameWorld};
use asteroids::input_system::InputState;
use asteroids::meteor::{Meteor, MeteorSize};
use asteroids::moving_object::MovingObject;
use asteroids::save::{ScoreEntry, ScoreError, ScoreStore};
use asteroids::vector::Vector2D;
use std::cell::RefCell;
use std::rc::Rc;

/// Store double that records every save and can be told to fail loading.
#[derive(Clone, Default)]
struct RecordingStore {
    existing: Vec<ScoreEntry>,
    fail_load: bool,
    saves: Rc<RefCell<Vec<Vec<ScoreEntry>>>>,
}

impl ScoreStore for RecordingStore {
    fn load_scores(&self) -> Result<Vec<ScoreEntry>, ScoreError> {
        if self.fail_load {
            return Err(ScoreError::IoError(std::io::Error::other("unreadable")));
        }
        Ok(self.existing.clone())
    }

    fn save_scores(&self, scores: &[ScoreEntry]) -> Result<(), ScoreError> {
        self.saves.borrow_mut().push(scores.to_vec());
        Ok(())
    }
}

fn config() -> GameConfig {
    GameConfig {
        seed: Some(7),
        ..GameConfig::default()
    }
}

fn world_with(store: RecordingStore) -> GameWorld {
    GameWorld::new(config(), Assets::default(), Box::new(store))
}

fn meteors(world: &GameWorld) -> Vec<MeteorSize> {
    world
        .objects()
        .iter()
        .filter_map(MovingObject::as_meteor)
        .map(|meteor| meteor.size())
        .collect()
}

/// Runs frames until the world hands control back, or gives up.
fn run_until_transition(world: &mut GameWorld, max_frames: usize) -> Option<AppState> {
    for _ in 0..max_frames {
        if let Some(next) = world.update(FRAME_TIME, &InputState::NONE) {
            return Some(next);
        }
    }
    None
}

#[test]
fn new_world_starts_first_wave() {
    let world = world_with(RecordingStore::default());

    assert_eq!(meteors(&world), vec![MeteorSize::Big]);
    assert_eq!(world.wave(), 1);
    assert_eq!(world.meteor_quota(), 2);
    assert_eq!(world.score(), 0);
    assert_eq!(world.lives(), 3);
    assert!(world.player().is_some());

    let texts: Vec<_> = world.messages().iter().map(|m| m.text()).collect();
    assert_eq!(texts, vec!["WAVE 1"]);
}

#[test]
fn add_score_posts_message_at_position() {
    let mut world = world_with(RecordingStore::default());
    let at = Vector2D::new(120.0, 80.0);

    world.add_score(100, at);

    assert_eq!(world.score(), 100);
    let message = world.messages().last().unwrap();
    assert_eq!(message.text(), "+100 score");
    assert_eq!(message.position(), at);
    assert!(!message.is_centered());
}

#[test]
fn clearing_meteors_starts_next_wave() {
    let mut world = world_with(RecordingStore::default());

    for object in world.objects_mut().iter_mut() {
        if object.as_meteor().is_some() {
            object.destroy();
        }
    }
    world.update(FRAME_TIME, &InputState::NONE);

    assert_eq!(world.wave(), 2);
    assert_eq!(meteors(&world), vec![MeteorSize::Big, MeteorSize::Big]);
    assert_eq!(world.meteor_quota(), 3);
    assert!(world.messages().iter().any(|m| m.text() == "WAVE 2"));
}

#[test]
fn wave_meteors_alternate_top_and_left_edges() {
    let config = GameConfig {
        initial_meteors: 5,
        ..config()
    };
    let (min, max) = (config.meteor_min_speed, config.meteor_max_speed);
    let world = GameWorld::new(config, Assets::default(), Box::new(RecordingStore::default()));

    let wave: Vec<_> = world.objects().iter().filter_map(MovingObject::as_meteor).collect();
    assert_eq!(wave.len(), 5);

    for (i, meteor) in wave.iter().enumerate() {
        let position = meteor.position();
        if i % 2 == 0 {
            assert_eq!(position.y, 0.0, "meteor {} should enter from the top", i);
            assert!((0.0..1000.0).contains(&position.x));
        } else {
            assert_eq!(position.x, 0.0, "meteor {} should enter from the left", i);
            assert!((0.0..600.0).contains(&position.y));
        }

        let speed = meteor.body().velocity.magnitude();
        assert!(
            speed >= min - 1e-9 && speed <= max + 1e-9,
            "speed {} outside {}..={}",
            speed,
            min,
            max
        );
    }
}

#[test]
fn two_hits_on_last_life_end_the_game_once() {
    let store = RecordingStore::default();
    let saves = Rc::clone(&store.saves);
    let config = GameConfig {
        starting_lives: 1,
        ..config()
    };
    let mut world = GameWorld::new(config, Assets::default(), Box::new(store));

    let at = world.player_start();
    for _ in 0..2 {
        let meteor = Meteor::new(
            at,
            Vector2D::new(1.0, 0.0),
            0.0,
            MeteorSize::Big,
            0,
            &Assets::default(),
        );
        world.objects_mut().push(MovingObject::Meteor(meteor));
    }

    world.update(FRAME_TIME, &InputState::NONE);

    assert!(world.is_game_over());
    assert_eq!(world.lives(), 0);
    assert!(world.player().is_none());
    let game_over_messages = world
        .messages()
        .iter()
        .filter(|m| m.text() == "GAME OVER")
        .count();
    assert_eq!(game_over_messages, 1);

    assert_eq!(run_until_transition(&mut world, 400), Some(AppState::Menu));
    assert_eq!(saves.borrow().len(), 1);
}

#[test]
fn update_never_leaves_dead_objects() {
    let mut world = world_with(RecordingStore::default());

    for _ in 0..600 {
        world.update(FRAME_TIME, &InputState::NONE);
        assert!(world.objects().iter().all(|object| !object.is_dead()));
    }
}

#[test]
fn game_over_saves_once_then_returns_to_menu() {
    let store = RecordingStore {
        existing: vec![ScoreEntry::new(10, "2024-01-01")],
        ..RecordingStore::default()
    };
    let saves = Rc::clone(&store.saves);
    let mut world = world_with(store);

    world.add_score(150, Vector2D::ZERO);
    world.game_over();
    assert!(world.is_game_over());
    assert!(
        world
            .messages()
            .iter()
            .any(|m| m.text() == "GAME OVER" && m.position() == world.player_start())
    );

    let next = run_until_transition(&mut world, 400);
    assert_eq!(next, Some(AppState::Menu));
    assert!(world.is_finished());

    let saves = saves.borrow();
    assert_eq!(saves.len(), 1);
    let saved = &saves[0];
    assert_eq!(saved.len(), 2);
    assert_eq!(saved[0], ScoreEntry::new(10, "2024-01-01"));
    assert_eq!(saved[1].score, world.score());
    drop(saves);

    // Finished worlds stay quiet
    for _ in 0..10 {
        assert_eq!(world.update(FRAME_TIME, &InputState::NONE), None);
    }
}

#[test]
fn unreadable_scores_still_return_to_menu() {
    let store = RecordingStore {
        fail_load: true,
        ..RecordingStore::default()
    };
    let saves = Rc::clone(&store.saves);
    let mut world = world_with(store);

    world.game_over();

    assert_eq!(run_until_transition(&mut world, 400), Some(AppState::Menu));
    assert!(saves.borrow().is_empty());
}

#[test]
fn repeated_game_over_is_ignored() {
    let store = RecordingStore::default();
    let saves = Rc::clone(&store.saves);
    let mut world = world_with(store);

    world.game_over();
    world.game_over();

    let game_over_messages = world
        .messages()
        .iter()
        .filter(|m| m.text() == "GAME OVER")
        .count();
    assert_eq!(game_over_messages, 1);

    assert_eq!(run_until_transition(&mut world, 400), Some(AppState::Menu));
    assert_eq!(saves.borrow().len(), 1);
}
