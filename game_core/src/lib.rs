pub mod ball;
pub mod components;
pub mod config;
pub mod error;
pub mod map;
pub mod params;
pub mod render;
pub mod resources;
pub mod simulation;
pub mod systems;

pub use ball::*;
pub use components::*;
pub use config::*;
pub use error::*;
pub use map::*;
pub use params::*;
pub use render::*;
pub use resources::*;
pub use simulation::*;

use hecs::World;
use systems::*;

/// Run one frame of the Pong simulation
///
/// Order: paddle input, paddle movement, ball collision checks and responses,
/// ball update (which redraws the ball), then obstacle drawing.
#[allow(clippy::too_many_arguments)]
pub fn step<R: Renderer + ?Sized>(
    world: &mut World,
    time: &mut Time,
    court: &Court,
    config: &Config,
    events: &mut Events,
    intents: &mut IntentQueue,
    renderer: &mut R,
) {
    // Clamp delta to prevent large jumps
    let clamped_delta = time.delta_millis.clamp(0, Params::MAX_DELTA_MILLIS);
    let frame_time = Time::new(clamped_delta, time.now_millis);

    // Clear events at start of frame
    events.clear();

    // 1. Ingest inputs (apply to paddle intents)
    ingest_intents(world, intents);

    // 2. Move paddles based on intents
    move_players(world, &frame_time, court, config);

    // 3. Check collisions (ball vs walls, paddles)
    check_collisions(world, events);

    // 4. Move ball
    move_ball(world, &frame_time, renderer);

    // 5. Draw the rest of the court
    draw_obstacles(world, renderer);

    // Update time
    time.advance(clamped_delta);
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, ball: Ball) -> hecs::Entity {
    world.spawn((ball,))
}

/// Helper to create a paddle entity
pub fn create_player(world: &mut World, player: Player) -> hecs::Entity {
    world.spawn((player, PaddleIntent::new()))
}

/// Helper to create a wall entity
pub fn create_wall(world: &mut World, wall: Wall) -> hecs::Entity {
    world.spawn((wall,))
}

/// Spawn the four court walls
pub fn spawn_court(world: &mut World, court: &Court) -> Vec<hecs::Entity> {
    court
        .walls()
        .into_iter()
        .map(|wall| create_wall(world, wall))
        .collect()
}
