// World events raised by moving objects
//
// Scoring, explosions, meteor splits, lives and game over. These are the
// `WorldCallbacks` the objects call during an update pass; GameWorld exposes
// the same operations for use outside the pass.

use crate::animation::Animation;
use crate::assets::Assets;
use crate::meteor::Meteor;
use crate::moving_object::MovingObject;
use crate::render::{Color, FontSize};
use crate::ui::Message;
use crate::vector::Vector2D;
use rand::RngCore;
use tracing::{debug, info};

use super::callbacks::WorldCallbacks;
use super::types::Arena;
use super::world::WorldState;

impl WorldCallbacks for WorldState {
    fn add_score(&mut self, value: u32, position: Vector2D) {
        self.score += value;
        self.messages.push(Message::new(
            position,
            true,
            format!("+{} score", value),
            Color::WHITE,
            false,
            FontSize::Medium,
        ));
    }

    fn play_explosion(&mut self, position: Vector2D) {
        self.explosions.push(Animation::explosion(&self.assets, position));
    }

    fn divide_meteor(&mut self, meteor: &Meteor) {
        let Some(size) = meteor.size().next() else {
            return;
        };

        for _ in 0..meteor.size().quantity() {
            let child = self.random_meteor(meteor.position(), size);
            self.spawned.push(MovingObject::Meteor(child));
        }
        debug!(?size, count = meteor.size().quantity(), "meteor split");
    }

    fn subtract_life(&mut self) -> bool {
        self.lives -= 1;
        self.lives > 0
    }

    fn game_over(&mut self) {
        if self.game_over {
            debug!("game over already pending");
            return;
        }

        self.messages.push(Message::new(
            self.player_start,
            true,
            "GAME OVER",
            Color::WHITE,
            true,
            FontSize::Big,
        ));
        self.game_over_timer.run(self.config.game_over_delay());
        self.game_over = true;

        info!(score = self.score, wave = self.wave, "game over");
    }

    fn spawn(&mut self, object: MovingObject) {
        self.spawned.push(object);
    }

    fn player_center(&self) -> Option<Vector2D> {
        self.player_center
    }

    fn arena(&self) -> Arena {
        self.arena
    }

    fn assets(&self) -> &Assets {
        &self.assets
    }

    fn rng(&mut self) -> &mut dyn RngCore {
        &mut self.rng
    }
}
