// The capability moving objects use to act on the world
//
// Objects never see the whole GameWorld. During an update pass the world lends
// them its inner state (everything except the object list being iterated)
// through this trait.

use crate::assets::Assets;
use crate::meteor::Meteor;
use crate::moving_object::MovingObject;
use crate::vector::Vector2D;
use rand::RngCore;

use super::types::Arena;

pub trait WorldCallbacks {
    /// Adds `value` to the score and posts a "+value score" message at `position`.
    fn add_score(&mut self, value: u32, position: Vector2D);

    fn play_explosion(&mut self, position: Vector2D);

    /// Spawns the children of a meteor that was just destroyed.
    fn divide_meteor(&mut self, meteor: &Meteor);

    /// Takes a life away. Returns false once no lives remain.
    fn subtract_life(&mut self) -> bool;

    fn game_over(&mut self);

    /// Queues a new object. It joins the world after the current pass.
    fn spawn(&mut self, object: MovingObject);

    /// Center of the live player ship, if there is one.
    fn player_center(&self) -> Option<Vector2D>;

    fn arena(&self) -> Arena;

    fn assets(&self) -> &Assets;

    fn rng(&mut self) -> &mut dyn RngCore;
}
