//! Background asset reader for the loading screen.
//!
//! Reading every image file takes long enough to be worth showing a progress
//! bar. A worker thread reads the files and sends each one back through a
//! channel; the frame loop polls the channel every frame to advance the bar.
//! Textures are still created on the main thread afterwards, since SDL
//! textures can't cross threads.

use crate::assets::SpriteId;
use std::fs;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};
use std::thread::{self, JoinHandle};
use tracing::{debug, warn};

/// One file read by the worker.
#[derive(Debug)]
pub enum LoadEvent {
    Loaded { sprite: SpriteId, bytes: Vec<u8> },
    Failed { sprite: SpriteId, error: String },
}

pub struct AssetLoader {
    rx: Receiver<LoadEvent>,
    handle: Option<JoinHandle<()>>,
    total: usize,
    loaded: Vec<(SpriteId, Vec<u8>)>,
    errors: Vec<String>,
}

impl AssetLoader {
    /// Starts reading every sprite under `root` on a worker thread.
    pub fn spawn(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let sprites = SpriteId::all();
        let total = sprites.len();
        let (tx, rx) = mpsc::channel();

        let handle = thread::spawn(move || {
            for sprite in sprites {
                let path = root.join(sprite.path());
                let event = match fs::read(&path) {
                    Ok(bytes) => LoadEvent::Loaded { sprite, bytes },
                    Err(e) => LoadEvent::Failed {
                        sprite,
                        error: format!("Failed to read {}: {}", path.display(), e),
                    },
                };

                if tx.send(event).is_err() {
                    break; // loader dropped, nobody is waiting
                }
            }
        });

        AssetLoader {
            rx,
            handle: Some(handle),
            total,
            loaded: Vec::with_capacity(total),
            errors: Vec::new(),
        }
    }

    /// Collects whatever the worker has finished so far. Never blocks.
    pub fn poll(&mut self) {
        while let Ok(event) = self.rx.try_recv() {
            self.record(event);
        }
    }

    /// Fraction of files read, in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        if self.total == 0 {
            return 1.0;
        }
        (self.loaded.len() + self.errors.len()) as f32 / self.total as f32
    }

    pub fn is_done(&self) -> bool {
        self.loaded.len() + self.errors.len() >= self.total
    }

    /// Waits for the worker and returns every file it read.
    ///
    /// Fails if any file could not be read.
    pub fn finish(mut self) -> Result<Vec<(SpriteId, Vec<u8>)>, String> {
        if let Some(handle) = self.handle.take() {
            handle
                .join()
                .map_err(|_| "Asset loader thread panicked".to_string())?;
        }
        self.poll();

        if !self.errors.is_empty() {
            return Err(self.errors.join("\n"));
        }
        Ok(self.loaded)
    }

    fn record(&mut self, event: LoadEvent) {
        match event {
            LoadEvent::Loaded { sprite, bytes } => {
                debug!(?sprite, bytes = bytes.len(), "asset read");
                self.loaded.push((sprite, bytes));
            }
            LoadEvent::Failed { sprite, error } => {
                warn!(?sprite, %error, "asset missing");
                self.errors.push(error);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_all_sprites(root: &std::path::Path) {
        for sprite in SpriteId::all() {
            let path = root.join(sprite.path());
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, b"png").unwrap();
        }
    }

    #[test]
    fn test_reads_every_sprite() {
        let dir = tempfile::tempdir().unwrap();
        write_all_sprites(dir.path());

        let loader = AssetLoader::spawn(dir.path());
        let files = loader.finish().unwrap();

        assert_eq!(files.len(), SpriteId::all().len());
        assert!(files.iter().all(|(_, bytes)| bytes == b"png"));
    }

    #[test]
    fn test_progress_reaches_one() {
        let dir = tempfile::tempdir().unwrap();
        write_all_sprites(dir.path());

        let mut loader = AssetLoader::spawn(dir.path());
        while !loader.is_done() {
            loader.poll();
            thread::yield_now();
        }

        assert_eq!(loader.progress(), 1.0);
    }

    #[test]
    fn test_missing_file_fails_finish() {
        let dir = tempfile::tempdir().unwrap();
        write_all_sprites(dir.path());
        fs::remove_file(dir.path().join(SpriteId::Ufo.path())).unwrap();

        let result = AssetLoader::spawn(dir.path()).finish();

        let error = result.unwrap_err();
        assert!(error.contains("ufo.png"));
    }
}
