use game_core::*;
use glam::DVec2;
use hecs::World;

fn ball_at(x: f64, y: f64, speed: f64) -> Ball {
    Ball::new(DVec2::new(x, y), DVec2::new(20.0, 20.0), Color::YELLOW, speed).unwrap()
}

fn run_frame(
    world: &mut World,
    time: &mut Time,
    court: &Court,
    frame: &mut FrameRecorder,
) -> Events {
    let config = Config::new();
    let mut events = Events::new();
    let mut intents = IntentQueue::new();
    step(world, time, court, &config, &mut events, &mut intents, frame);
    events
}

#[test]
fn test_update_bounce_update_scenario() {
    let mut world = World::new();
    let court = Court::default();
    let mut time = Time::new(16, 0);
    let mut frame = FrameRecorder::new();
    let entity = create_ball(&mut world, ball_at(100.0, 100.0, 5.0));

    run_frame(&mut world, &mut time, &court, &mut frame);
    assert_eq!(
        world.get::<&Ball>(entity).unwrap().center(),
        DVec2::new(105.0, 105.0)
    );

    world.get::<&mut Ball>(entity).unwrap().on_wall_collision_id("Top");
    run_frame(&mut world, &mut time, &court, &mut frame);

    let ball = world.get::<&Ball>(entity).unwrap();
    assert_eq!(ball.center(), DVec2::new(110.0, 100.0));
    assert_eq!(ball.direction(), Direction::new(Sign::Positive, Sign::Negative));
    assert_eq!(time.now_millis, 32);
}

#[test]
fn test_ball_bounces_off_bottom_wall_in_frame() {
    let mut world = World::new();
    let court = Court::new(800.0, 400.0, 10.0);
    spawn_court(&mut world, &court);
    let mut time = Time::new(16, 0);
    let mut frame = FrameRecorder::new();
    let entity = create_ball(&mut world, ball_at(100.0, 385.0, 5.0));

    let events = run_frame(&mut world, &mut time, &court, &mut frame);

    assert_eq!(events.wall_hits, vec!["Bottom".to_string()]);
    // Response happens before the move, so the ball already heads back up
    assert_eq!(
        world.get::<&Ball>(entity).unwrap().center(),
        DVec2::new(105.0, 380.0)
    );
}

#[test]
fn test_ball_stays_in_court_over_long_run() {
    let mut game = Game::new(Config::default()).unwrap();
    let mut frame = FrameRecorder::new();
    let bounds = game.court.bounds();
    let mut wall_bounces = 0;

    for _ in 0..5_000 {
        for player_id in [LEFT_PLAYER, RIGHT_PLAYER] {
            let dir = game.tracking_intent(player_id);
            game.push_intent(player_id, dir);
        }
        frame.clear();
        game.tick(Params::FRAME_MILLIS, &mut frame);
        wall_bounces += game.events.wall_hits.len();

        let ball = game.ball().unwrap();
        assert!(
            bounds.contains(ball.center()),
            "Ball escaped the court at ({}, {})",
            ball.cx(),
            ball.cy()
        );
    }

    assert!(wall_bounces > 0, "Ball should reach the walls");
    assert_eq!(game.ball().unwrap().speed(), Params::BALL_SPEED, "Speed never changes");
}

#[test]
fn test_frame_draws_ball_then_obstacles() {
    let mut game = Game::new(Config::default()).unwrap();
    let mut frame = FrameRecorder::new();

    game.tick(16, &mut frame);

    let rects: Vec<DrawCommand> = frame.rects().copied().collect();
    // Ball, four walls, two paddles
    assert_eq!(rects.len(), 7);
    assert_eq!(
        rects[0],
        DrawCommand::FillRect {
            color: Color::YELLOW,
            cx: 405.0,
            cy: 305.0,
            width: 20.0,
            height: 20.0,
        }
    );
}

#[test]
fn test_config_file_round_trip() {
    let path = std::env::temp_dir().join(format!("pong_config_{}.json", std::process::id()));
    let config = Config {
        motion: MotionModel::TimeScaled,
        ball_speed: 0.3,
        ..Config::default()
    };
    std::fs::write(&path, config.to_json().unwrap()).unwrap();

    let loaded = Config::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(loaded, config);
}
