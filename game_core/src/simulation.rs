use glam::DVec2;
use hecs::{Entity, World};

use crate::render::Renderer;
use crate::{
    create_ball, create_player, spawn_court, step, Ball, Config, Court, Events, GameError,
    GameRng, IntentQueue, Player, Side, Time,
};

pub const LEFT_PLAYER: &str = "Player 1";
pub const RIGHT_PLAYER: &str = "Player 2";

/// A self-contained game: court, two paddles and one ball
pub struct Game {
    pub world: World,
    pub time: Time,
    pub court: Court,
    pub config: Config,
    pub events: Events,
    pub intents: IntentQueue,
    pub rng: GameRng,
    ball: Entity,
}

impl Game {
    pub fn new(config: Config) -> Result<Self, GameError> {
        config.validate()?;
        let court = Court::from_config(&config);
        let mut world = World::new();
        let mut rng = GameRng::new(config.seed);

        spawn_court(&mut world, &court);

        // Create paddles
        let paddle_size = DVec2::new(config.paddle_width, config.paddle_height);
        for (id, side) in [(LEFT_PLAYER, Side::Left), (RIGHT_PLAYER, Side::Right)] {
            let center = DVec2::new(court.paddle_x(side), court.center().y);
            create_player(&mut world, Player::new(id, center, paddle_size));
        }

        // Create ball
        let ball = create_ball(&mut world, Ball::from_config(&config, &mut rng)?);

        log::info!(
            "Game ready: court {}x{}, motion {:?}, direction {:?}",
            court.width,
            court.height,
            config.motion,
            config.direction
        );

        Ok(Self {
            world,
            time: Time::new(0, 0),
            court,
            config,
            events: Events::new(),
            intents: IntentQueue::new(),
            rng,
            ball,
        })
    }

    /// Run one frame that started `delta_millis` after the previous one
    pub fn tick<R: Renderer + ?Sized>(&mut self, delta_millis: i64, renderer: &mut R) {
        self.time.delta_millis = delta_millis;
        step(
            &mut self.world,
            &mut self.time,
            &self.court,
            &self.config,
            &mut self.events,
            &mut self.intents,
            renderer,
        );
    }

    pub fn push_intent(&mut self, player_id: &str, dir: i8) {
        self.intents.push_intent(player_id, dir);
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world
            .get::<&Ball>(self.ball)
            .ok()
            .map(|ball| (*ball).clone())
    }

    pub fn player(&self, player_id: &str) -> Option<Player> {
        self.world
            .query::<&Player>()
            .iter()
            .find(|(_e, p)| p.id == player_id)
            .map(|(_e, p)| p.clone())
    }

    /// Paddle direction that follows the ball vertically
    ///
    /// Moves towards the ball's y when it is heading at this paddle, otherwise
    /// drifts back to the court center.
    pub fn tracking_intent(&self, player_id: &str) -> i8 {
        let (Some(ball), Some(player)) = (self.ball(), self.player(player_id)) else {
            return 0;
        };

        let heading_towards = (ball.cx() - player.center.x) * ball.direction().x.as_f64() < 0.0;
        let target_y = if heading_towards {
            ball.cy()
        } else {
            self.court.center().y
        };

        let diff = target_y - player.center.y;
        let deadzone = player.size.y / 4.0;
        if diff > deadzone {
            1
        } else if diff < -deadzone {
            -1
        } else {
            0
        }
    }
}
