use crate::render::Renderer;
use crate::{Ball, Config, Court, PaddleIntent, Player, Time};
use hecs::World;

/// Apply paddle movement based on intents
pub fn move_players(world: &mut World, time: &Time, court: &Court, config: &Config) {
    for (_entity, (player, intent)) in world.query_mut::<(&mut Player, &PaddleIntent)>() {
        if intent.dir != 0 {
            let delta = intent.dir as f64 * config.paddle_speed * time.delta_millis as f64;
            player.move_by(delta);

            // Clamp to court bounds
            player.center.y = court.clamp_paddle_y(player.center.y, player.size.y / 2.0);
        }
    }
}

/// Advance every ball one frame; each ball redraws itself
pub fn move_ball<R: Renderer + ?Sized>(world: &mut World, time: &Time, renderer: &mut R) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.update(time.delta_millis, renderer);
    }
}
