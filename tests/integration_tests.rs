//! Integration tests - full sessions through the public engine API

use blockfall::core::{ConfigError, EngineConfig, GameState, PieceSelector};
use blockfall::types::{GameAction, GamePhase, GravitySpeed, PieceKind, PIECE_KIND_COUNT};

fn started(config: EngineConfig) -> GameState {
    let mut game = GameState::new(config).unwrap();
    assert!(game.start());
    assert!(game.tick(0), "first tick spawns");
    game
}

#[test]
fn test_session_lifecycle() {
    let mut game = GameState::new(EngineConfig::seeded(42)).unwrap();
    assert_eq!(game.phase(), GamePhase::Uninitialized);
    assert!(!game.tick(10_000));
    assert!(!game.move_left());
    assert!(game.active().is_none());

    assert!(game.start());
    assert!(!game.start());
    assert_eq!(game.phase(), GamePhase::Active);

    game.tick(0);
    let piece = game.active().unwrap();
    assert_eq!(piece.y, 0);
    assert_eq!(game.piece_id(), 1);
    assert_eq!(game.queue().len(), 3);
}

#[test]
fn test_spawn_takes_queue_front() {
    let mut game = GameState::new(EngineConfig::seeded(7)).unwrap();
    let expected = game.queue().kinds()[0];
    game.start();
    game.tick(0);
    assert_eq!(game.active().unwrap().kind, expected);
}

#[test]
fn test_gravity_moves_one_row_per_interval() {
    let mut game = started(EngineConfig::seeded(1).with_gravity_ms(100));
    let y0 = game.active().unwrap().y;

    assert!(!game.tick(99));
    assert_eq!(game.active().unwrap().y, y0);
    assert!(game.tick(1));
    assert_eq!(game.active().unwrap().y, y0 + 1);

    // Two intervals in one call run two steps.
    assert!(game.tick(200));
    assert_eq!(game.active().unwrap().y, y0 + 3);
}

#[test]
fn test_successful_action_delays_gravity() {
    let mut game = started(EngineConfig::seeded(3).with_gravity_ms(100));
    let y0 = game.active().unwrap().y;

    game.tick(90);
    assert!(game.move_right());
    assert_eq!(game.time_since_last_action_ms(), 0);
    game.tick(90);
    assert_eq!(game.active().unwrap().y, y0);
    game.tick(10);
    assert_eq!(game.active().unwrap().y, y0 + 1);
}

#[test]
fn test_pause_freezes_everything() {
    let mut game = started(EngineConfig::seeded(5));
    let before = game.active().unwrap();

    assert!(game.apply_action(GameAction::Pause));
    assert!(game.paused());
    assert!(!game.tick(10_000));
    assert!(!game.move_left());
    assert!(!game.hard_drop());
    assert_eq!(game.active().unwrap(), before);

    assert!(game.toggle_pause());
    assert_eq!(game.phase(), GamePhase::Active);
}

#[test]
fn test_hard_drop_locks_and_next_tick_spawns() {
    let mut game = started(EngineConfig::seeded(11));
    assert!(game.hard_drop());
    assert!(game.active().is_none());
    assert_eq!(game.board().locked_count(), 4);

    let event = game.take_last_event().unwrap();
    assert_eq!(event.lines_cleared, 0);
    assert!(!event.game_over);
    assert!(game.take_last_event().is_none());

    assert!(game.tick(0));
    assert!(game.active().is_some());
    assert_eq!(game.piece_id(), 2);
}

#[test]
fn test_hard_drop_matches_soft_drop_to_rest() {
    let mut hard = started(EngineConfig::seeded(99));
    let mut soft = hard.clone();

    hard.hard_drop();

    while soft.soft_drop() {}
    let gravity = soft.gravity_interval_ms();
    soft.tick(gravity);
    assert!(soft.active().is_none());

    assert_eq!(hard.board(), soft.board());
}

#[test]
fn test_o_piece_clears_two_lines_on_narrow_board() {
    // On a 2-wide board the O box spawns at x = -1 and fills both columns.
    let config = (0..500)
        .map(|seed| EngineConfig::seeded(seed).with_board(2, 22))
        .find(|config| {
            let game = GameState::new(config.clone()).unwrap();
            game.queue().kinds()[0] == PieceKind::O
        })
        .expect("some seed deals an O first");

    let mut game = started(config);
    assert_eq!(game.active().unwrap().x, -1);
    assert!(game.hard_drop());
    assert_eq!(game.lines(), 2);
    assert_eq!(game.board().locked_count(), 0);
    assert_eq!(game.take_last_event().unwrap().lines_cleared, 2);
}

#[test]
fn test_board_narrower_than_every_shape_ends_on_spawn() {
    let mut game = GameState::new(EngineConfig::seeded(1).with_board(1, 22)).unwrap();
    game.start();
    game.tick(0);
    assert!(game.game_over());
    assert!(game.active().is_none());
}

#[test]
fn test_stacking_until_game_over() {
    let mut game = started(EngineConfig::seeded(2024));
    for _ in 0..1_000 {
        if game.game_over() {
            break;
        }
        game.hard_drop();
        game.tick(0);
    }

    assert!(game.game_over());
    assert!(game.active().is_none());
    assert!(!game.tick(1_000));
    assert!(!game.move_left());
    assert!(!game.rotate_clockwise());
    assert!(!game.toggle_pause());

    let lines = game.lines();
    let snapshot = game.snapshot();
    assert_eq!(snapshot.phase, GamePhase::GameOver);
    assert_eq!(snapshot.lines, lines);
}

#[test]
fn test_restart_resets_session() {
    let mut game = started(EngineConfig::seeded(8));
    game.hard_drop();
    game.tick(0);
    game.hard_drop();

    assert!(game.restart());
    assert_eq!(game.episode_id(), 1);
    assert_eq!(game.phase(), GamePhase::Active);
    assert_eq!(game.lines(), 0);
    assert_eq!(game.piece_id(), 0);
    assert_eq!(game.board().locked_count(), 0);
    assert!(game.active().is_none());

    game.tick(0);
    assert!(game.active().is_some());
}

#[test]
fn test_restart_is_deterministic_per_episode() {
    let mut a = GameState::new(EngineConfig::seeded(77)).unwrap();
    let mut b = GameState::new(EngineConfig::seeded(77)).unwrap();
    a.start();
    b.start();
    a.restart();
    b.restart();
    assert_eq!(a.queue().kinds(), b.queue().kinds());
}

#[test]
fn test_gravity_setters() {
    let mut game = started(EngineConfig::seeded(4));
    assert_eq!(game.gravity_interval_ms(), 250);

    game.set_speed(GravitySpeed::Fast);
    assert_eq!(game.gravity_interval_ms(), 100);

    assert_eq!(
        game.set_gravity_interval_ms(0),
        Err(ConfigError::ZeroGravityInterval(0))
    );
    assert_eq!(game.gravity_interval_ms(), 100);
    assert!(game.set_gravity_interval_ms(40).is_ok());
    assert_eq!(game.gravity_interval_ms(), 40);
}

#[test]
fn test_invalid_config_is_rejected() {
    assert!(GameState::new(EngineConfig::default().with_lookahead(0)).is_err());
    assert!(GameState::new(EngineConfig::default().with_board(10, 2)).is_err());
}

#[test]
fn test_selector_is_roughly_uniform() {
    let mut selector = PieceSelector::new(123);
    let mut counts = [0u32; PIECE_KIND_COUNT];
    let draws = 10_000;
    for _ in 0..draws {
        counts[selector.select_index()] += 1;
    }

    let expected = 1.0 / PIECE_KIND_COUNT as f64;
    for (i, &count) in counts.iter().enumerate() {
        let share = f64::from(count) / f64::from(draws);
        assert!(
            (share - expected).abs() < 0.03,
            "{:?} dealt {:.3} of the time",
            PieceKind::ALL[i],
            share
        );
    }
}

#[test]
fn test_snapshot_serializes_to_json() {
    let game = started(EngineConfig::seeded(6));
    let snapshot = game.snapshot();
    let value = serde_json::to_value(&snapshot).unwrap();

    assert_eq!(value["width"], 10);
    assert_eq!(value["height"], 22);
    assert_eq!(value["board"].as_array().unwrap().len(), 22);
    assert_eq!(value["next_queue"].as_array().unwrap().len(), 3);
    assert_eq!(value["phase"], "active");
    assert_eq!(value["lines"], 0);
    assert!(value["active"].is_object());
    assert!(value["ghost_offset"].as_u64().unwrap() > 0);
}
