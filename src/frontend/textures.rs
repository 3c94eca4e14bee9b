//! Texture table
//!
//! Turns the raw image bytes read by the asset loader into SDL textures, and
//! reports their sizes back to the simulation as an `Assets` table.

use crate::assets::{Assets, SpriteId, SpriteSize};
use sdl2::image::LoadTexture;
use sdl2::render::{Texture, TextureCreator};
use sdl2::video::WindowContext;
use std::collections::HashMap;
use tracing::info;

pub struct TextureTable<'a> {
    textures: HashMap<SpriteId, Texture<'a>>,
}

impl<'a> TextureTable<'a> {
    /// Decodes every file into a texture. Fails on the first undecodable image.
    pub fn from_files(
        texture_creator: &'a TextureCreator<WindowContext>,
        files: Vec<(SpriteId, Vec<u8>)>,
    ) -> Result<Self, String> {
        let mut textures = HashMap::with_capacity(files.len());

        for (sprite, bytes) in files {
            let texture = texture_creator
                .load_texture_bytes(&bytes)
                .map_err(|e| format!("Failed to decode {}: {}", sprite.path(), e))?;
            textures.insert(sprite, texture);
        }

        info!(count = textures.len(), "textures created");
        Ok(TextureTable { textures })
    }

    pub fn get(&self, sprite: SpriteId) -> Option<&Texture<'a>> {
        self.textures.get(&sprite)
    }

    /// Sprite dimensions as the simulation sees them.
    pub fn assets(&self) -> Assets {
        let mut assets = Assets::empty();
        for (sprite, texture) in &self.textures {
            let query = texture.query();
            assets.insert(*sprite, SpriteSize::new(query.width, query.height));
        }
        assets
    }
}
