use crate::{Ball, Events, Player, Wall};
use hecs::World;

/// Check every ball against every wall, then every player, and bounce on hits
///
/// All checks for a ball run against its position at the start of the frame,
/// so a ball touching two obstacles responds to both.
pub fn check_collisions(world: &mut World, events: &mut Events) {
    // Collect obstacles first (deterministic: sort by entity ID)
    let mut walls: Vec<_> = world
        .query::<&Wall>()
        .iter()
        .map(|(e, wall)| (e, wall.clone()))
        .collect();
    walls.sort_by_key(|(e, _)| e.id());

    let mut players: Vec<_> = world
        .query::<&Player>()
        .iter()
        .map(|(e, player)| (e, player.clone()))
        .collect();
    players.sort_by_key(|(e, _)| e.id());

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let hit_walls: Vec<&Wall> = walls
            .iter()
            .map(|(_, wall)| wall)
            .filter(|wall| ball.check_wall_collision(wall))
            .collect();
        let hit_players: Vec<&Player> = players
            .iter()
            .map(|(_, player)| player)
            .filter(|player| ball.check_player_collision(player))
            .collect();

        for wall in hit_walls {
            ball.on_wall_collision(wall.orientation);
            log::debug!("Ball bounced off wall {}", wall.id);
            events.wall_hits.push(wall.id.clone());
        }
        for player in hit_players {
            ball.on_player_collision(&player.id);
            events.player_hits.push(player.id.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Direction, Sign, WallSide};
    use crate::{create_ball, create_player, create_wall, Color, Court};
    use glam::DVec2;

    fn ball_at(x: f64, y: f64) -> Ball {
        Ball::new(DVec2::new(x, y), DVec2::new(20.0, 20.0), Color::YELLOW, 5.0).unwrap()
    }

    fn setup_world() -> (World, Events) {
        let mut world = World::new();
        let court = Court::new(800.0, 600.0, 10.0);
        for wall in court.walls() {
            create_wall(&mut world, wall);
        }
        (world, Events::new())
    }

    #[test]
    fn test_ball_bounces_off_top_wall() {
        let (mut world, mut events) = setup_world();
        let entity = create_ball(&mut world, ball_at(400.0, 15.0));

        check_collisions(&mut world, &mut events);

        let ball = world.get::<&Ball>(entity).unwrap();
        assert_eq!(ball.direction(), Direction::new(Sign::Positive, Sign::Negative));
        assert_eq!(events.wall_hits, vec![WallSide::Top.as_str().to_string()]);
        assert!(!events.ball_hit_player());
    }

    #[test]
    fn test_ball_bounces_off_right_wall() {
        let (mut world, mut events) = setup_world();
        let entity = create_ball(&mut world, ball_at(790.0, 300.0));

        check_collisions(&mut world, &mut events);

        let ball = world.get::<&Ball>(entity).unwrap();
        assert_eq!(ball.direction(), Direction::new(Sign::Negative, Sign::Positive));
        assert_eq!(events.wall_hits, vec!["Right".to_string()]);
    }

    #[test]
    fn test_corner_flips_both_axes() {
        let (mut world, mut events) = setup_world();
        let entity = create_ball(&mut world, ball_at(785.0, 585.0));

        check_collisions(&mut world, &mut events);

        let ball = world.get::<&Ball>(entity).unwrap();
        assert_eq!(ball.direction(), Direction::new(Sign::Negative, Sign::Negative));
        assert_eq!(events.wall_hits.len(), 2);
    }

    #[test]
    fn test_no_collision_in_open_court() {
        let (mut world, mut events) = setup_world();
        let entity = create_ball(&mut world, ball_at(400.0, 300.0));

        check_collisions(&mut world, &mut events);

        assert_eq!(world.get::<&Ball>(entity).unwrap().direction(), Direction::INITIAL);
        assert!(!events.ball_hit_wall());
        assert!(!events.ball_hit_player());
    }

    #[test]
    fn test_ball_collides_with_paddle() {
        let mut world = World::new();
        let mut events = Events::new();
        create_player(
            &mut world,
            Player::new("P1", DVec2::new(50.0, 100.0), DVec2::new(10.0, 60.0)),
        );
        let entity = create_ball(&mut world, ball_at(60.0, 100.0));

        check_collisions(&mut world, &mut events);

        assert_eq!(
            world.get::<&Ball>(entity).unwrap().direction(),
            Direction::new(Sign::Negative, Sign::Positive)
        );
        assert_eq!(events.player_hits, vec!["P1".to_string()]);
    }

    #[test]
    fn test_paddle_out_of_reach_vertically() {
        let mut world = World::new();
        let mut events = Events::new();
        create_player(
            &mut world,
            Player::new("P1", DVec2::new(50.0, 100.0), DVec2::new(10.0, 60.0)),
        );
        create_ball(&mut world, ball_at(60.0, 200.0));

        check_collisions(&mut world, &mut events);

        assert!(!events.ball_hit_player());
    }

    #[test]
    fn test_no_collision_when_no_ball() {
        let (mut world, mut events) = setup_world();

        // Should not panic or error
        check_collisions(&mut world, &mut events);

        assert!(!events.ball_hit_wall());
        assert!(!events.ball_hit_player());
    }
}
