use glam::{BVec2, DVec2};

use crate::components::{Color, Direction, Obstacle, ObstacleKind, Orientation, Player, Wall};
use crate::config::{Config, DirectionPolicy, MotionModel};
use crate::error::GameError;
use crate::render::Renderer;
use crate::GameRng;

/// Ball component - the pong ball
///
/// Moves along a sign pair at a fixed speed. Collisions only ever flip one
/// component of the direction; speed and size never change.
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    center: DVec2,
    size: DVec2,
    color: Color,
    speed: f64,
    direction: Direction,
    motion: MotionModel,
}

impl Ball {
    /// Create a ball moving towards (+1, +1).
    ///
    /// `speed` is in pixels per update, or pixels per millisecond under
    /// [`MotionModel::TimeScaled`].
    pub fn new(center: DVec2, size: DVec2, color: Color, speed: f64) -> Result<Self, GameError> {
        if !speed.is_finite() || speed < 0.0 {
            return Err(GameError::InvalidSpeed(speed));
        }
        if !size.is_finite() || size.min_element() < 0.0 {
            return Err(GameError::InvalidSize {
                width: size.x,
                height: size.y,
            });
        }

        log::info!(
            "Ball created at ({}, {}) size {}x{} speed {}",
            center.x,
            center.y,
            size.x,
            size.y,
            speed
        );

        Ok(Self {
            center,
            size,
            color,
            speed,
            direction: Direction::INITIAL,
            motion: MotionModel::default(),
        })
    }

    /// Create a ball whose starting direction is drawn from `rng`.
    pub fn with_random_direction(
        center: DVec2,
        size: DVec2,
        color: Color,
        speed: f64,
        rng: &mut GameRng,
    ) -> Result<Self, GameError> {
        let mut ball = Self::new(center, size, color, speed)?;
        ball.direction = Direction::random(rng);
        Ok(ball)
    }

    /// Create a ball at the court center from configuration
    pub fn from_config(config: &Config, rng: &mut GameRng) -> Result<Self, GameError> {
        let center = DVec2::new(config.court_width / 2.0, config.court_height / 2.0);
        let size = DVec2::new(config.ball_width, config.ball_height);
        let ball = match config.direction {
            DirectionPolicy::Fixed => {
                Self::new(center, size, config.ball_color, config.ball_speed)?
            }
            DirectionPolicy::Random => Self::with_random_direction(
                center,
                size,
                config.ball_color,
                config.ball_speed,
                rng,
            )?,
        };
        Ok(ball.with_motion(config.motion))
    }

    pub fn with_motion(mut self, motion: MotionModel) -> Self {
        self.motion = motion;
        self
    }

    /// Advance one frame and redraw.
    pub fn update<R: Renderer + ?Sized>(&mut self, delta_millis: i64, renderer: &mut R) {
        self.advance(delta_millis);
        self.draw(renderer);
    }

    /// Move without drawing.
    ///
    /// Under [`MotionModel::PerFrame`] `delta_millis` is ignored and the ball
    /// moves exactly `speed` along each axis.
    pub fn advance(&mut self, delta_millis: i64) {
        let step = match self.motion {
            MotionModel::PerFrame => self.speed,
            MotionModel::TimeScaled => self.speed * delta_millis.max(0) as f64,
        };
        self.center += self.direction.as_vec() * step;
        log::trace!("Ball moved to ({}, {})", self.center.x, self.center.y);
    }

    pub fn draw<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        renderer.set_color(self.color);
        renderer.fill_rect(self.center.x, self.center.y, self.size.x, self.size.y);
    }

    /// Per-axis test: is the center distance within the sum of half extents?
    fn axis_hits(&self, center: DVec2, size: DVec2) -> BVec2 {
        let distance = (self.center - center).abs();
        let reach = self.size * 0.5 + size * 0.5;
        distance.cmple(reach)
    }

    /// Single-axis test. Horizontal walls only look at y, vertical walls only at x.
    pub fn check_wall_collision(&self, wall: &Wall) -> bool {
        let hits = self.axis_hits(wall.center, wall.size);
        match wall.orientation {
            Orientation::Horizontal => hits.y,
            Orientation::Vertical => hits.x,
        }
    }

    /// Full overlap test: both axes must be within reach.
    pub fn check_player_collision(&self, player: &Player) -> bool {
        self.axis_hits(player.center, player.size).all()
    }

    /// Collision test chosen by obstacle kind
    pub fn check_collision<O: Obstacle + ?Sized>(&self, obstacle: &O) -> bool {
        let hits = self.axis_hits(obstacle.center(), obstacle.size());
        match obstacle.kind() {
            ObstacleKind::Wall(Orientation::Horizontal) => hits.y,
            ObstacleKind::Wall(Orientation::Vertical) => hits.x,
            ObstacleKind::Player => hits.all(),
        }
    }

    pub fn on_wall_collision(&mut self, orientation: Orientation) {
        match orientation {
            Orientation::Horizontal => self.direction.flip_y(),
            Orientation::Vertical => self.direction.flip_x(),
        }
    }

    /// Wall response keyed by id; unknown ids bounce like side walls.
    pub fn on_wall_collision_id(&mut self, wall_id: &str) {
        let orientation = Orientation::from_wall_id(wall_id);
        if orientation == Orientation::Vertical && !matches!(wall_id, "Left" | "Right") {
            log::debug!("Unknown wall id {:?}, bouncing horizontally", wall_id);
        }
        self.on_wall_collision(orientation);
    }

    /// Paddles always send the ball back along x.
    pub fn on_player_collision(&mut self, player_id: &str) {
        log::debug!("Ball hit player {}", player_id);
        // No special case for hits on the paddle's top or bottom edge
        self.direction.flip_x();
    }

    /// Collision response chosen by obstacle kind
    pub fn on_collision<O: Obstacle + ?Sized>(&mut self, obstacle: &O) {
        match obstacle.kind() {
            ObstacleKind::Wall(orientation) => {
                log::debug!("Ball hit wall {}", obstacle.id());
                self.on_wall_collision(orientation);
            }
            ObstacleKind::Player => self.on_player_collision(obstacle.id()),
        }
    }

    pub fn cx(&self) -> f64 {
        self.center.x
    }

    pub fn cy(&self) -> f64 {
        self.center.y
    }

    pub fn center(&self) -> DVec2 {
        self.center
    }

    pub fn size(&self) -> DVec2 {
        self.size
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn motion(&self) -> MotionModel {
        self.motion
    }
}
