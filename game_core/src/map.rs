use glam::DVec2;

use crate::components::{Side, Wall, WallSide};
use crate::config::Config;
use crate::params::Params;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: DVec2,
    pub max: DVec2,
}

impl Aabb {
    pub fn new(min: DVec2, max: DVec2) -> Self {
        Self { min, max }
    }

    pub fn from_center_size(center: DVec2, size: DVec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn contains(&self, point: DVec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Closed-interval overlap on both axes
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }
}

/// Court definition: the playing area bounded by four walls
#[derive(Debug, Clone)]
pub struct Court {
    pub width: f64,
    pub height: f64,
    pub wall_thickness: f64,
    pub paddle_inset: f64,
}

impl Court {
    pub fn new(width: f64, height: f64, wall_thickness: f64) -> Self {
        Self {
            width,
            height,
            wall_thickness,
            paddle_inset: Params::PADDLE_INSET,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            width: config.court_width,
            height: config.court_height,
            wall_thickness: config.wall_thickness,
            paddle_inset: config.paddle_inset,
        }
    }

    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(DVec2::ZERO, DVec2::new(self.width, self.height))
    }

    /// Wall centred on one edge of the court
    pub fn wall(&self, side: WallSide) -> Wall {
        let t = self.wall_thickness;
        let (center, size) = match side {
            WallSide::Top => (DVec2::new(self.width / 2.0, 0.0), DVec2::new(self.width, t)),
            WallSide::Bottom => (
                DVec2::new(self.width / 2.0, self.height),
                DVec2::new(self.width, t),
            ),
            WallSide::Left => (DVec2::new(0.0, self.height / 2.0), DVec2::new(t, self.height)),
            WallSide::Right => (
                DVec2::new(self.width, self.height / 2.0),
                DVec2::new(t, self.height),
            ),
        };
        Wall::with_orientation(side.as_str(), center, size, side.orientation())
    }

    pub fn walls(&self) -> Vec<Wall> {
        WallSide::ALL.iter().map(|&side| self.wall(side)).collect()
    }

    pub fn paddle_x(&self, side: Side) -> f64 {
        match side {
            Side::Left => self.paddle_inset,
            Side::Right => self.width - self.paddle_inset,
        }
    }

    /// Clamp paddle Y so the paddle stays inside the court
    pub fn clamp_paddle_y(&self, y: f64, half_height: f64) -> f64 {
        y.clamp(half_height, (self.height - half_height).max(half_height))
    }
}

impl Default for Court {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Obstacle, Orientation};

    #[test]
    fn test_aabb_from_center_size() {
        let aabb = Aabb::from_center_size(DVec2::new(10.0, 20.0), DVec2::new(4.0, 6.0));
        assert_eq!(aabb.min, DVec2::new(8.0, 17.0));
        assert_eq!(aabb.max, DVec2::new(12.0, 23.0));
        assert!(aabb.contains(DVec2::new(12.0, 23.0)));
        assert!(!aabb.contains(DVec2::new(12.1, 20.0)));
    }

    #[test]
    fn test_aabb_intersects_touching_edges() {
        let a = Aabb::new(DVec2::ZERO, DVec2::ONE);
        let b = Aabb::new(DVec2::new(1.0, 0.0), DVec2::new(2.0, 1.0));
        let c = Aabb::new(DVec2::new(1.5, 0.0), DVec2::new(2.0, 1.0));
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_court_walls() {
        let court = Court::new(800.0, 600.0, 10.0);
        let walls = court.walls();
        assert_eq!(walls.len(), 4);

        let ids: Vec<&str> = walls.iter().map(|w| w.id()).collect();
        assert_eq!(ids, vec!["Top", "Bottom", "Left", "Right"]);

        let bottom = court.wall(WallSide::Bottom);
        assert_eq!(bottom.center, DVec2::new(400.0, 600.0));
        assert_eq!(bottom.size, DVec2::new(800.0, 10.0));
        assert_eq!(bottom.orientation, Orientation::Horizontal);

        let right = court.wall(WallSide::Right);
        assert_eq!(right.center, DVec2::new(800.0, 300.0));
        assert_eq!(right.orientation, Orientation::Vertical);
    }

    #[test]
    fn test_court_clamp_paddle_y() {
        let court = Court::default();
        let half_height = 30.0;
        assert_eq!(court.clamp_paddle_y(0.0, half_height), half_height);
        assert_eq!(court.clamp_paddle_y(1000.0, half_height), 600.0 - half_height);
        assert_eq!(court.clamp_paddle_y(300.0, half_height), 300.0);
    }

    #[test]
    fn test_court_paddle_x() {
        let court = Court::default();
        assert_eq!(court.paddle_x(Side::Left), 40.0);
        assert_eq!(court.paddle_x(Side::Right), 760.0);
        assert_eq!(court.center(), DVec2::new(400.0, 300.0));
    }
}
