use crate::render::Renderer;
use crate::{Player, Wall};
use hecs::World;

/// Draw walls, then paddles
pub fn draw_obstacles<R: Renderer + ?Sized>(world: &World, renderer: &mut R) {
    for (_entity, wall) in world.query::<&Wall>().iter() {
        wall.draw(renderer);
    }
    for (_entity, player) in world.query::<&Player>().iter() {
        player.draw(renderer);
    }
}
