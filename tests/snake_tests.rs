use brick_game::score::HighScoreFile;
use brick_game::snake::{backdrop, Game};
use brick_game::types::{Direction, Phase, Point, UserAction};

use std::sync::atomic::{AtomicU32, Ordering};

static FILE_ID: AtomicU32 = AtomicU32::new(0);

fn test_score_file() -> HighScoreFile {
    let id = FILE_ID.fetch_add(1, Ordering::Relaxed);
    let path = std::env::temp_dir().join(format!(
        "brick_snake_it_{}_{}.txt",
        std::process::id(),
        id
    ));
    let _ = std::fs::remove_file(&path);
    HighScoreFile::new(path)
}

fn new_game(seed: u32) -> Game {
    let mut game = Game::with_score_file(seed, test_score_file());
    game.apply_input(UserAction::Start, false);
    game
}

#[test]
fn test_initial_body_and_heading() {
    let game = new_game(1);
    assert_eq!(game.head(), Point::new(5, 9));
    assert_eq!(game.body().len(), 4);
    assert_eq!(game.direction(), Direction::Up);
    assert!(game.food().is_some());
}

#[test]
fn test_arrow_inputs_steer() {
    let mut game = new_game(1);

    game.apply_input(UserAction::Left, false);
    assert_eq!(game.direction(), Direction::Left);

    game.advance(600);
    assert_eq!(game.head(), Point::new(4, 9));
}

#[test]
fn test_reverse_input_ignored() {
    let mut game = new_game(1);
    game.apply_input(UserAction::Down, false);
    assert_eq!(game.direction(), Direction::Up);
}

#[test]
fn test_turn_debounce_across_advance() {
    let mut game = new_game(1);

    game.apply_input(UserAction::Left, false);
    game.apply_input(UserAction::Down, false);
    assert_eq!(game.direction(), Direction::Left);

    game.advance(600);
    game.apply_input(UserAction::Down, false);
    assert_eq!(game.direction(), Direction::Down);
}

#[test]
fn test_sprint_steps_immediately() {
    let mut game = new_game(1);
    let head = game.head();
    game.apply_input(UserAction::Action, true);
    assert_eq!(game.head(), Point::new(head.x, head.y - 1));
}

#[test]
fn test_pause_blocks_everything_but_resume() {
    let mut game = new_game(1);
    game.apply_input(UserAction::Pause, false);
    let head = game.head();

    game.advance(10_000);
    game.apply_input(UserAction::Left, false);
    game.apply_input(UserAction::Action, true);
    assert_eq!(game.head(), head);
    assert_eq!(game.direction(), Direction::Up);

    game.apply_input(UserAction::Pause, false);
    assert_eq!(game.phase(), Phase::Running);
}

#[test]
fn test_running_into_wall_loses() {
    let mut game = new_game(1);
    // Head starts at (5, 9) heading up; ten steps hit the top wall
    for _ in 0..10 {
        game.apply_input(UserAction::Action, true);
    }
    assert_eq!(game.phase(), Phase::Lost);
}

#[test]
fn test_terminate_from_lost() {
    let mut game = new_game(1);
    for _ in 0..10 {
        game.apply_input(UserAction::Action, true);
    }
    game.apply_input(UserAction::Terminate, false);
    assert_eq!(game.phase(), Phase::Quit);
}

#[test]
fn test_same_seed_same_food_sequence() {
    let a = new_game(555);
    let b = new_game(555);
    assert_eq!(a.food(), b.food());
}

#[test]
fn test_backdrop_is_a_two_tone_checkerboard() {
    for y in 0..20u8 {
        for x in 0..10u8 {
            let v = backdrop(x, y);
            assert!(v == 12 || v == 13);
            if x > 0 {
                assert_ne!(v, backdrop(x - 1, y));
            }
        }
    }
}
