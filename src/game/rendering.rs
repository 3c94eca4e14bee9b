// Drawing the world: messages, moving objects, explosions, then the HUD

use crate::render::{Drawable, Surface};
use crate::ui::hud;

use super::world::GameWorld;

impl GameWorld {
    /// Draws one frame. Messages that died since the last frame are dropped
    /// here instead of during `update`.
    pub fn draw(&mut self, surface: &mut dyn Surface) -> Result<(), String> {
        for message in &self.state.messages {
            if !message.is_dead() {
                message.draw(surface)?;
            }
        }
        self.state.messages.retain(|message| !message.is_dead());

        for object in &self.objects {
            object.draw(surface)?;
        }

        for explosion in &self.state.explosions {
            explosion.draw(surface)?;
        }

        hud::draw_score(surface, self.state.score, self.state.arena.width)?;
        hud::draw_lives(surface, self.state.lives)
    }
}
