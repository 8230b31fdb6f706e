//! Integration tests for the tick simulation.

use std::collections::VecDeque;

use tui_snake::core::{grid, GameRng, GameState};
use tui_snake::types::{Cue, Direction, MOVE_INTERVAL_MS};

/// RNG state whose next 1-in-4 roll is guaranteed true (or false).
fn rng_with_roll(wanted: bool) -> GameRng {
    (0u32..)
        .map(GameRng::new)
        .find(|rng| {
            let mut draw = rng.clone();
            draw.one_in(4) == wanted
        })
        .expect("an LCG state with the wanted roll exists")
}

#[test]
fn test_eating_grows_snake_and_rescores() {
    let mut game = GameState::new(1);
    game.snake = VecDeque::from([44]);
    game.apple = Some(45);

    game.step();

    assert_eq!(game.snake, VecDeque::from([45, 44]));
    assert_eq!(game.score, 1);
    assert_eq!(game.take_cue(), Some(Cue::Eat));
    let apple = game.apple.expect("apple respawns");
    assert!(apple != 44 && apple != 45);
    assert!(!game.game_over);
}

#[test]
fn test_boundary_exit_moving_up_from_corner() {
    let mut game = GameState::new(1);
    game.snake = VecDeque::from([1]);
    game.apple = Some(100);
    game.request_direction(Direction::Up);

    game.step();

    assert!(game.game_over);
    assert_eq!(game.snake, VecDeque::from([1]));
    assert_eq!(game.take_cue(), Some(Cue::GameOver));
}

#[test]
fn test_boundary_exit_moving_left_from_corner() {
    let mut game = GameState::new(1);
    game.snake = VecDeque::from([1]);
    game.apple = Some(100);
    // Left reverses the initial heading, so set it directly.
    game.direction = Direction::Left;

    game.step();

    assert!(game.game_over);
    assert_eq!(game.snake, VecDeque::from([1]));
}

#[test]
fn test_self_collision_into_body_is_fatal() {
    let mut game = GameState::new(1);
    game.snake = VecDeque::from([5, 15, 25, 35, 45, 44, 43]);
    game.apple = Some(100);
    game.request_direction(Direction::Down);

    game.step();

    assert!(game.game_over);
    assert_eq!(game.snake.len(), 7);
    assert_eq!(game.take_cue(), Some(Cue::GameOver));
}

#[test]
fn test_moving_onto_vacating_tail_is_safe() {
    let mut game = GameState::new(1);
    // 2x2 loop: 1-2 on row 0, 11-12 on row 1.
    game.snake = VecDeque::from([12, 11, 1, 2]);
    game.apple = Some(99);
    game.request_direction(Direction::Up);

    game.step();

    assert!(!game.game_over);
    assert_eq!(game.snake, VecDeque::from([2, 12, 11, 1]));
}

#[test]
fn test_moving_onto_tail_while_eating_is_fatal() {
    let mut game = GameState::new(1);
    game.snake = VecDeque::from([12, 11, 1, 2]);
    // The tail does not vacate on an eating move.
    game.apple = Some(2);
    game.request_direction(Direction::Up);

    game.step();

    assert!(game.game_over);
}

#[test]
fn test_bomb_collision_is_fatal() {
    let mut game = GameState::new(1);
    game.snake = VecDeque::from([44]);
    game.apple = Some(100);
    game.bomb = Some(45);

    game.step();

    assert!(game.game_over);
    assert_eq!(game.take_cue(), Some(Cue::GameOver));
}

#[test]
fn test_adjacent_apple_turns_into_bomb_on_forced_roll() {
    let mut game = GameState::new(1);
    game.snake = VecDeque::from([41]);
    // Apple is adjacent to the cell the head moves onto (42).
    game.apple = Some(52);
    game.rng = rng_with_roll(true);

    game.step();

    assert_eq!(game.snake, VecDeque::from([42]));
    assert_eq!(game.bomb, Some(52));
    assert_eq!(game.apple, None);
}

#[test]
fn test_adjacent_apple_survives_failed_roll() {
    let mut game = GameState::new(1);
    game.snake = VecDeque::from([41]);
    game.apple = Some(52);
    game.rng = rng_with_roll(false);

    game.step();

    assert_eq!(game.bomb, None);
    assert_eq!(game.apple, Some(52));
}

#[test]
fn test_bomb_reverts_to_apple_after_fuse() {
    let mut game = GameState::new(1);
    game.snake = VecDeque::from([41]);
    game.apple = Some(52);
    game.rng = rng_with_roll(true);
    game.step();
    assert_eq!(game.bomb, Some(52));

    // 7 movement intervals = 2100 ms > 2000 ms fuse; the head keeps moving
    // right along row 4, away from the bomb.
    for _ in 0..7 {
        game.tick(MOVE_INTERVAL_MS);
    }

    assert!(!game.game_over);
    assert_eq!(game.apple, Some(52));
    assert_eq!(game.bomb, None);
}

#[test]
fn test_bomb_fuse_runs_from_arming_not_from_tick_start() {
    let mut game = GameState::new(1);
    game.snake = VecDeque::from([41]);
    game.apple = Some(52);
    game.rng = rng_with_roll(true);

    // The movement step at the end of this interval arms the bomb; none of
    // the interval's 300 ms may count against the 2000 ms fuse.
    game.tick(MOVE_INTERVAL_MS);
    assert_eq!(game.bomb, Some(52));

    // 1700 ms after arming the bomb is still live...
    for _ in 0..5 {
        game.tick(MOVE_INTERVAL_MS);
    }
    game.tick(200);
    assert_eq!(game.bomb, Some(52));
    assert_eq!(game.apple, None);

    // ...and exactly 2000 ms after arming it reverts to the apple.
    game.tick(100);
    game.tick(200);
    assert_eq!(game.bomb, None);
    assert_eq!(game.apple, Some(52));
}

#[test]
fn test_boost_hidden_phase_runs_from_consumption_not_from_tick_start() {
    let mut game = GameState::new(1);
    game.snake = VecDeque::from([14, 13, 12]);
    game.apple = Some(99);
    game.boost = Some(15);

    // The step at the end of this interval consumes the boost and re-arms
    // the 15 000 ms hidden phase; the interval itself must not count.
    game.tick(MOVE_INTERVAL_MS);
    assert_eq!(game.snake, VecDeque::from([15]));
    assert_eq!(game.boost, None);

    // Patrol 15 -> 25 -> 24 -> 14 -> 15 so movement never ends the game.
    let patrol = [
        Direction::Down,
        Direction::Left,
        Direction::Up,
        Direction::Right,
    ];
    // 49 intervals = 14 700 ms after consumption: still hidden.
    for i in 0..49 {
        game.request_direction(patrol[i % 4]);
        game.tick(MOVE_INTERVAL_MS);
        assert!(!game.game_over);
    }
    assert_eq!(game.boost, None);

    // One more interval reaches 15 000 ms: the boost respawns.
    game.request_direction(patrol[49 % 4]);
    game.tick(MOVE_INTERVAL_MS);
    assert!(game.boost.is_some());
}

#[test]
fn test_bomb_never_reverts_after_game_over() {
    let mut game = GameState::new(1);
    game.snake = VecDeque::from([41]);
    game.apple = Some(52);
    game.rng = rng_with_roll(true);
    game.step();
    assert_eq!(game.bomb, Some(52));

    game.game_over = true;
    game.tick(10_000);

    assert_eq!(game.bomb, Some(52));
    assert_eq!(game.apple, None);
}

#[test]
fn test_boost_consumption_shrinks_snake_to_one() {
    let mut game = GameState::new(1);
    game.snake = VecDeque::from([14, 13, 12]);
    game.apple = Some(99);
    game.boost = Some(15);

    game.step();

    assert_eq!(game.snake, VecDeque::from([15]));
    assert_eq!(game.boost, None);
    assert_eq!(game.score, 0);
    assert_eq!(game.take_cue(), Some(Cue::Eat));
}

#[test]
fn test_boost_cycle_spawns_after_hidden_phase_and_expires() {
    let mut game = GameState::new(1);
    // Keep the apple far from the 2x2 patrol loop below.
    game.apple = Some(100);
    assert_eq!(game.boost, None);

    // Patrol 44 -> 45 -> 55 -> 54 -> 44 so movement never ends the game.
    let patrol = [
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Up,
    ];
    let drive = |game: &mut GameState, ticks: usize, from: usize| {
        for i in 0..ticks {
            game.request_direction(patrol[(from + i) % 4]);
            game.tick(MOVE_INTERVAL_MS);
            assert!(!game.game_over);
        }
    };

    // 50 intervals = 15 000 ms: the boost activates.
    drive(&mut game, 50, 0);
    assert!(game.boost.is_some());

    // 17 more intervals = 5 100 ms > 5 000 ms active window.
    drive(&mut game, 17, 50 % 4);
    assert_eq!(game.boost, None);
}

#[test]
fn test_full_board_apple_is_a_win() {
    let mut game = GameState::new(1);
    // Body covers cells 1..=99, head on 99; the last free cell is 100.
    game.snake = (1..=99u16).rev().collect();
    game.apple = Some(100);

    game.step();

    assert!(game.won);
    assert!(game.game_over);
    assert_eq!(game.apple, None);
    assert_eq!(game.snake.len(), 100);
    assert_eq!(game.score, 1);
    assert_eq!(game.take_cue(), Some(Cue::Eat));
}

#[test]
fn test_length_invariant_and_no_body_overlap() {
    let mut game = GameState::new(99);
    for _ in 0..300 {
        if game.game_over {
            break;
        }
        let head = *game.snake.front().unwrap();
        // Prefer the current heading, otherwise any legal turn.
        let dir = [
            game.direction,
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ]
        .into_iter()
        .find(|&d| d != game.direction.opposite() && grid::step(head, d).is_some())
        .unwrap();
        game.request_direction(dir);

        let before = game.snake.len();
        game.step();
        let after = game.snake.len();
        assert!(
            after == before || after == before + 1 || after == 1,
            "length went {before} -> {after}"
        );

        let head = *game.snake.front().unwrap();
        assert_eq!(
            game.snake.iter().filter(|&&c| c == head).count(),
            1,
            "head overlaps body"
        );
    }
}

#[test]
fn test_locked_or_reversed_requests_never_change_state() {
    let mut game = GameState::new(5);
    game.apple = Some(1);

    // Opposite of the current heading: rejected.
    game.request_direction(Direction::Left);
    assert_eq!(game.direction, Direction::Right);

    // Accepted change locks out the rest until the next step.
    game.request_direction(Direction::Up);
    game.request_direction(Direction::Left);
    game.request_direction(Direction::Right);
    assert_eq!(game.direction, Direction::Up);

    game.step();
    game.request_direction(Direction::Left);
    assert_eq!(game.direction, Direction::Left);
}

#[test]
fn test_same_seed_and_inputs_replay_identically() {
    let script = [
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Up,
        Direction::Right,
        Direction::Down,
    ];

    let mut a = GameState::new(7);
    let mut b = GameState::new(7);
    for dir in script {
        a.request_direction(dir);
        b.request_direction(dir);
        a.tick(MOVE_INTERVAL_MS);
        b.tick(MOVE_INTERVAL_MS);
    }

    assert_eq!(a, b);
}
