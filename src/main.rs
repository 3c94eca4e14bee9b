use asteroids::assets::Assets;
use asteroids::frontend::{SdlSurface, TextureTable};
use asteroids::game::config::DEFAULT_CONFIG_PATH;
use asteroids::game::constants::FRAME_TIME;
use asteroids::game::{AppState, GameConfig, GameWorld};
use asteroids::gui::{Menu, MenuOption, draw_loading};
use asteroids::input_system::InputState;
use asteroids::loader::AssetLoader;
use asteroids::save::{JsonScoreStore, ScoreEntry, ScoreStore};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::Color;
use std::path::Path;
use std::time::Instant;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const ASSET_ROOT: &str = "assets/sprites";

/// Reads the score list for the menu. A broken score file just means an empty list.
fn load_scores(score_dir: &Path) -> Vec<ScoreEntry> {
    match JsonScoreStore::new(score_dir).and_then(|store| store.load_scores()) {
        Ok(scores) => scores,
        Err(e) => {
            warn!(error = %e, "could not read scores");
            Vec::new()
        }
    }
}

/// Applies a key press to the menu. Returns the option picked, if any.
fn menu_choice(menu: &mut Menu, keycode: Keycode) -> Option<MenuOption> {
    match keycode {
        Keycode::Up => menu.select_previous(),
        Keycode::Down => menu.select_next(),
        Keycode::Return | Keycode::Space => return Some(menu.selected()),
        Keycode::Escape => return Some(MenuOption::Exit),
        _ => {}
    }
    None
}

fn main() -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let config = GameConfig::load_or_default(DEFAULT_CONFIG_PATH)
        .map_err(|e| format!("Failed to load {}: {}", DEFAULT_CONFIG_PATH, e))?;
    let score_dir = JsonScoreStore::default_directory();

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG)?;

    let window = video_subsystem
        .window("Asteroids", config.width, config.height)
        .position_centered()
        .resizable()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;

    // Set logical size so the arena scales with the window
    canvas
        .set_logical_size(config.width, config.height)
        .map_err(|e| e.to_string())?;

    let texture_creator = canvas.texture_creator();
    let mut event_pump = sdl_context.event_pump()?;

    let (width, height) = (f64::from(config.width), f64::from(config.height));

    let mut state = AppState::Loading;
    let mut loader = Some(AssetLoader::spawn(ASSET_ROOT));
    let mut textures: Option<TextureTable> = None;
    let mut assets = Assets::empty();
    let mut menu: Option<Menu> = None;
    let mut world: Option<GameWorld> = None;

    info!(width = config.width, height = config.height, "window open, loading assets");

    'running: loop {
        let frame_start = Instant::now();

        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => break 'running,
                Event::KeyDown {
                    keycode: Some(keycode),
                    repeat: false,
                    ..
                } => match state {
                    AppState::Menu => match menu.as_mut().and_then(|m| menu_choice(m, keycode)) {
                        Some(MenuOption::Play) => {
                            let store = JsonScoreStore::new(&score_dir)
                                .map_err(|e| format!("Failed to open score store: {}", e))?;
                            world = Some(GameWorld::new(
                                config.clone(),
                                assets.clone(),
                                Box::new(store),
                            ));
                            menu = None;
                            state = AppState::Playing;
                            info!("new game");
                        }
                        Some(MenuOption::Exit) => break 'running,
                        None => {}
                    },
                    AppState::Playing if keycode == Keycode::Escape => {
                        world = None;
                        menu = Some(Menu::new(load_scores(&score_dir)));
                        state = AppState::Menu;
                    }
                    _ => {}
                },
                _ => {}
            }
        }

        match state {
            AppState::Loading => {
                if let Some(active) = loader.as_mut() {
                    active.poll();
                }

                if loader.as_ref().is_some_and(AssetLoader::is_done) {
                    if let Some(finished) = loader.take() {
                        let files = finished.finish()?;
                        let table = TextureTable::from_files(&texture_creator, files)?;
                        assets = table.assets();
                        if !assets.is_complete() {
                            return Err("Asset table is incomplete".to_string());
                        }
                        textures = Some(table);
                    }
                    menu = Some(Menu::new(load_scores(&score_dir)));
                    state = AppState::Menu;
                }
            }
            AppState::Playing => {
                let input = InputState::from_keyboard(&event_pump.keyboard_state());
                let next = world
                    .as_mut()
                    .and_then(|active| active.update(FRAME_TIME, &input));

                if let Some(next) = next {
                    world = None;
                    menu = Some(Menu::new(load_scores(&score_dir)));
                    state = next;
                }
            }
            AppState::Menu => {}
        }

        canvas.set_draw_color(Color::RGB(0, 0, 0));
        canvas.clear();
        {
            let mut surface = SdlSurface::new(&mut canvas, textures.as_ref());
            match state {
                AppState::Loading => {
                    let progress = loader.as_ref().map_or(1.0, AssetLoader::progress);
                    draw_loading(&mut surface, progress, width, height)?;
                }
                AppState::Menu => {
                    if let Some(menu_screen) = menu.as_ref() {
                        menu_screen.draw(&mut surface, width, height)?;
                    }
                }
                AppState::Playing => {
                    if let Some(active) = world.as_mut() {
                        active.draw(&mut surface)?;
                    }
                }
            }
        }
        canvas.present();

        // Cap at 60 FPS
        if let Some(remaining) = FRAME_TIME.checked_sub(frame_start.elapsed()) {
            std::thread::sleep(remaining);
        }
    }

    info!("exiting");
    Ok(())
}
