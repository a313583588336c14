use std::str::FromStr;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::render::Renderer;
use crate::GameRng;

/// RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const GRAY: Color = Color::rgb(128, 128, 128);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// A direction component. Always exactly +1 or -1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    pub fn flip(self) -> Self {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }

    pub fn as_f64(self) -> f64 {
        match self {
            Sign::Positive => 1.0,
            Sign::Negative => -1.0,
        }
    }

    pub fn random(rng: &mut GameRng) -> Self {
        use rand::Rng;
        if rng.0.gen_bool(0.5) {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }
}

/// Sign pair the ball moves along
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Direction {
    pub x: Sign,
    pub y: Sign,
}

impl Direction {
    /// (+1, +1)
    pub const INITIAL: Direction = Direction {
        x: Sign::Positive,
        y: Sign::Positive,
    };

    pub fn new(x: Sign, y: Sign) -> Self {
        Self { x, y }
    }

    pub fn random(rng: &mut GameRng) -> Self {
        let x = Sign::random(rng);
        let y = Sign::random(rng);
        Self { x, y }
    }

    pub fn flip_x(&mut self) {
        self.x = self.x.flip();
    }

    pub fn flip_y(&mut self) {
        self.y = self.y.flip();
    }

    pub fn as_vec(&self) -> DVec2 {
        DVec2::new(self.x.as_f64(), self.y.as_f64())
    }
}

impl Default for Direction {
    fn default() -> Self {
        Self::INITIAL
    }
}

/// Which axis a wall blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Top/bottom walls: block movement along y
    Horizontal,
    /// Left/right walls: block movement along x
    Vertical,
}

impl Orientation {
    /// "Top" and "Bottom" are horizontal; every other id is treated as vertical.
    pub fn from_wall_id(id: &str) -> Self {
        match id {
            "Top" | "Bottom" => Orientation::Horizontal,
            _ => Orientation::Vertical,
        }
    }
}

/// The four court boundaries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallSide {
    Top,
    Bottom,
    Left,
    Right,
}

impl WallSide {
    pub const ALL: [WallSide; 4] = [
        WallSide::Top,
        WallSide::Bottom,
        WallSide::Left,
        WallSide::Right,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WallSide::Top => "Top",
            WallSide::Bottom => "Bottom",
            WallSide::Left => "Left",
            WallSide::Right => "Right",
        }
    }

    pub fn orientation(&self) -> Orientation {
        match self {
            WallSide::Top | WallSide::Bottom => Orientation::Horizontal,
            WallSide::Left | WallSide::Right => Orientation::Vertical,
        }
    }
}

impl FromStr for WallSide {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Top" => Ok(WallSide::Top),
            "Bottom" => Ok(WallSide::Bottom),
            "Left" => Ok(WallSide::Left),
            "Right" => Ok(WallSide::Right),
            _ => Err(format!("unknown wall side {:?}", s)),
        }
    }
}

/// Paddle side of the court
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// What the ball hit, decides both the collision test and the response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleKind {
    Wall(Orientation),
    Player,
}

/// Read-only view of a rectangle the ball can collide with
pub trait Obstacle {
    fn center(&self) -> DVec2;
    fn size(&self) -> DVec2;
    fn id(&self) -> &str;
    fn kind(&self) -> ObstacleKind;

    fn cx(&self) -> f64 {
        self.center().x
    }

    fn cy(&self) -> f64 {
        self.center().y
    }

    fn width(&self) -> f64 {
        self.size().x
    }

    fn height(&self) -> f64 {
        self.size().y
    }
}

/// Wall component - a static court boundary
#[derive(Debug, Clone, PartialEq)]
pub struct Wall {
    pub id: String,
    pub center: DVec2,
    pub size: DVec2,
    pub orientation: Orientation,
    pub color: Color,
}

impl Wall {
    /// Orientation is derived from the id ("Top"/"Bottom" are horizontal).
    pub fn new(id: impl Into<String>, center: DVec2, size: DVec2) -> Self {
        let id = id.into();
        let orientation = Orientation::from_wall_id(&id);
        Self::with_orientation(id, center, size, orientation)
    }

    pub fn with_orientation(
        id: impl Into<String>,
        center: DVec2,
        size: DVec2,
        orientation: Orientation,
    ) -> Self {
        Self {
            id: id.into(),
            center,
            size,
            orientation,
            color: Color::GRAY,
        }
    }

    pub fn draw<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        renderer.set_color(self.color);
        renderer.fill_rect(self.center.x, self.center.y, self.size.x, self.size.y);
    }
}

impl Obstacle for Wall {
    fn center(&self) -> DVec2 {
        self.center
    }

    fn size(&self) -> DVec2 {
        self.size
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn kind(&self) -> ObstacleKind {
        ObstacleKind::Wall(self.orientation)
    }
}

/// Player component - a paddle
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: String,
    pub center: DVec2,
    pub size: DVec2,
    pub color: Color,
}

impl Player {
    pub fn new(id: impl Into<String>, center: DVec2, size: DVec2) -> Self {
        Self {
            id: id.into(),
            center,
            size,
            color: Color::GREEN,
        }
    }

    pub fn move_by(&mut self, dy: f64) {
        self.center.y += dy;
    }

    pub fn draw<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        renderer.set_color(self.color);
        renderer.fill_rect(self.center.x, self.center.y, self.size.x, self.size.y);
    }
}

impl Obstacle for Player {
    fn center(&self) -> DVec2 {
        self.center
    }

    fn size(&self) -> DVec2 {
        self.size
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn kind(&self) -> ObstacleKind {
        ObstacleKind::Player
    }
}

/// Movement intent for paddle
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleIntent {
    pub dir: i8, // -1 = up, 0 = stop, 1 = down
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}
