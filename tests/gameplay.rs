use canvas_pong::input::{PointerMove, SurfaceRect};
use canvas_pong::render::RecordingSurface;
use canvas_pong::sim::{Ball, GameState, ScriptedSource, tick};
use canvas_pong::{Config, Session};
use glam::Vec2;

#[test]
fn test_ball_past_right_edge_is_served_again() {
    let mut rng = ScriptedSource::new(&[0.3, 0.8, 0.7, 0.1]);
    let mut state = GameState::new(Config::default(), &mut rng);
    state.ball = Ball::new(Vec2::new(790.0, 190.0), Vec2::new(6.0, 0.0), 16.0);

    let events = tick(&mut state, &mut rng);

    assert!(events.reset);
    assert_eq!(state.ball.pos, Vec2::new(392.0, 192.0));
    // Third and fourth scripted values: 0.7 -> right, 0.1 -> 6 * -0.8
    assert_eq!(state.ball.vel.x, 6.0);
    assert!((state.ball.vel.y - -4.8).abs() < 1e-4);
}

#[test]
fn test_rally_against_a_tracking_player() {
    // Player follows the ball with the pointer; the ball should come back
    // off the player's paddle at least once.
    let mut session = Session::new(Config::default(), 4242).unwrap();
    let mut surface = RecordingSurface::new();
    session.start();

    let mut player_hits = 0;
    for _ in 0..3000 {
        let ball_center = session.state().ball.center_y();
        session.pointer_moved(
            PointerMove { client_y: ball_center },
            SurfaceRect::default(),
        );
        surface.clear();
        if let Some(events) = session.frame(&mut surface) {
            if events.player_hit {
                player_hits += 1;
            }
        }
    }

    assert!(player_hits > 0);
    assert_eq!(session.state().time_ticks, 3000);
}

#[test]
fn test_custom_surface_size() {
    let config = Config::from_json(r#"{ "surface_width": 640, "surface_height": 480 }"#).unwrap();
    let mut session = Session::new(config, 7).unwrap();
    let state = session.state();

    assert_eq!(state.opponent.x, 640.0 - 15.0 - 20.0);
    assert_eq!(state.player.y, 190.0);
    assert_eq!(state.ball.pos, Vec2::new(312.0, 232.0));

    session.start();
    let mut surface = RecordingSurface::new();
    assert_eq!(session.run_frames(100, &mut surface), 100);
}
