//! Asset table: sprite identifiers and their pixel dimensions.
//!
//! The simulation never touches textures. It only needs to know how big each
//! sprite is (collision radii, centering, HUD layout). The SDL front end builds
//! an `Assets` table from the textures it loaded; tests use `Assets::default()`,
//! which carries the dimensions of the stock sprite pack.

use crate::meteor::MeteorSize;
use std::collections::HashMap;

/// Number of frames in the explosion strip.
pub const EXPLOSION_FRAMES: u8 = 9;

/// Index of the "x" glyph in the digit table (drawn between life icon and count).
pub const TIMES_GLYPH: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteId {
    Player,
    Ufo,
    GreenLaser,
    RedLaser,
    Meteor { size: MeteorSize, variant: u8 },
    Explosion(u8),
    /// Digits 0-9, plus the "x" glyph at `TIMES_GLYPH`.
    Digit(u8),
    Life,
}

impl SpriteId {
    /// Every sprite the game can draw, in loading order.
    pub fn all() -> Vec<SpriteId> {
        let mut sprites = vec![
            SpriteId::Player,
            SpriteId::Ufo,
            SpriteId::GreenLaser,
            SpriteId::RedLaser,
            SpriteId::Life,
        ];

        for size in MeteorSize::ALL {
            for variant in 0..size.variants() {
                sprites.push(SpriteId::Meteor { size, variant });
            }
        }
        sprites.extend((0..EXPLOSION_FRAMES).map(SpriteId::Explosion));
        sprites.extend((0..=TIMES_GLYPH).map(SpriteId::Digit));

        sprites
    }

    /// Image file for this sprite, relative to the asset root.
    pub fn path(&self) -> String {
        match self {
            SpriteId::Player => "ships/player.png".to_string(),
            SpriteId::Ufo => "ships/ufo.png".to_string(),
            SpriteId::GreenLaser => "lasers/green.png".to_string(),
            SpriteId::RedLaser => "lasers/red.png".to_string(),
            SpriteId::Meteor { size, variant } => {
                let size = match size {
                    MeteorSize::Big => "big",
                    MeteorSize::Med => "med",
                    MeteorSize::Small => "small",
                    MeteorSize::Tiny => "tiny",
                };
                format!("meteors/{}{}.png", size, variant + 1)
            }
            SpriteId::Explosion(frame) => format!("explosion/{}.png", frame),
            SpriteId::Digit(TIMES_GLYPH) => "numbers/x.png".to_string(),
            SpriteId::Digit(digit) => format!("numbers/{}.png", digit),
            SpriteId::Life => "others/life.png".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpriteSize {
    pub width: u32,
    pub height: u32,
}

impl SpriteSize {
    pub const fn new(width: u32, height: u32) -> Self {
        SpriteSize { width, height }
    }

    /// Collision radius derived from the sprite width.
    pub fn radius(&self) -> f64 {
        f64::from(self.width) / 2.0
    }
}

#[derive(Debug, Clone)]
pub struct Assets {
    sizes: HashMap<SpriteId, SpriteSize>,
}

impl Assets {
    /// Creates an empty table. The front end fills it while loading textures.
    pub fn empty() -> Self {
        Assets {
            sizes: HashMap::new(),
        }
    }

    pub fn insert(&mut self, sprite: SpriteId, size: SpriteSize) {
        self.sizes.insert(sprite, size);
    }

    pub fn size(&self, sprite: SpriteId) -> SpriteSize {
        match self.sizes.get(&sprite) {
            Some(size) => *size,
            None => {
                debug_assert!(false, "sprite {:?} missing from asset table", sprite);
                SpriteSize::default()
            }
        }
    }

    pub fn radius(&self, sprite: SpriteId) -> f64 {
        self.size(sprite).radius()
    }

    /// True once every sprite in `SpriteId::all()` has an entry.
    pub fn is_complete(&self) -> bool {
        SpriteId::all().iter().all(|id| self.sizes.contains_key(id))
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}

impl Default for Assets {
    fn default() -> Self {
        let mut assets = Assets::empty();

        assets.insert(SpriteId::Player, SpriteSize::new(99, 75));
        assets.insert(SpriteId::Ufo, SpriteSize::new(91, 91));
        assets.insert(SpriteId::GreenLaser, SpriteSize::new(9, 37));
        assets.insert(SpriteId::RedLaser, SpriteSize::new(9, 37));
        assets.insert(SpriteId::Life, SpriteSize::new(33, 26));

        let meteor_sizes = [
            (MeteorSize::Big, [(101, 84), (120, 98), (89, 82), (98, 96)].as_slice()),
            (MeteorSize::Med, [(43, 43), (45, 40)].as_slice()),
            (MeteorSize::Small, [(28, 28), (29, 26)].as_slice()),
            (MeteorSize::Tiny, [(18, 18), (16, 15)].as_slice()),
        ];
        for (size, dims) in meteor_sizes {
            for (variant, (w, h)) in dims.iter().enumerate() {
                assets.insert(
                    SpriteId::Meteor {
                        size,
                        variant: variant as u8,
                    },
                    SpriteSize::new(*w, *h),
                );
            }
        }

        for frame in 0..EXPLOSION_FRAMES {
            assets.insert(SpriteId::Explosion(frame), SpriteSize::new(96, 96));
        }
        for digit in 0..=TIMES_GLYPH {
            assets.insert(SpriteId::Digit(digit), SpriteSize::new(19, 19));
        }

        assets
    }
}
