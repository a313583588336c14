//! Headless Pong runner
//!
//! Usage: `pong_headless [frames] [config.json]`
//!
//! Both paddles follow the ball. The final frame is printed as text;
//! set `RUST_LOG=debug` to see every bounce.

use game_core::{
    ConsoleRenderer, Config, Game, GameError, Params, LEFT_PLAYER, RIGHT_PLAYER,
};
use glam::DVec2;

const DEFAULT_FRAMES: u32 = 600;
const CONSOLE_COLS: usize = 80;
const CONSOLE_ROWS: usize = 30;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), GameError> {
    let mut args = std::env::args().skip(1);

    let frames = match args.next() {
        Some(arg) => arg
            .parse::<u32>()
            .map_err(|e| GameError::InvalidConfig(format!("bad frame count {:?}: {}", arg, e)))?,
        None => DEFAULT_FRAMES,
    };
    let config = match args.next() {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let world_size = DVec2::new(config.court_width, config.court_height);
    let mut game = Game::new(config)?;
    let mut console = ConsoleRenderer::new(CONSOLE_COLS, CONSOLE_ROWS, world_size);

    let mut wall_bounces = 0usize;
    let mut paddle_bounces = 0usize;

    for frame in 0..frames {
        for player_id in [LEFT_PLAYER, RIGHT_PLAYER] {
            let dir = game.tracking_intent(player_id);
            game.push_intent(player_id, dir);
        }

        console.clear();
        game.tick(Params::FRAME_MILLIS, &mut console);

        wall_bounces += game.events.wall_hits.len();
        paddle_bounces += game.events.player_hits.len();

        if frame % 60 == 0 {
            if let Some(ball) = game.ball() {
                log::info!(
                    "frame {} t={}ms ball=({:.1}, {:.1})",
                    frame,
                    game.time.now_millis,
                    ball.cx(),
                    ball.cy()
                );
            }
        }
    }

    print!("{}", console.render());
    log::info!(
        "{} frames: {} wall bounces, {} paddle bounces",
        frames,
        wall_bounces,
        paddle_bounces
    );

    Ok(())
}
