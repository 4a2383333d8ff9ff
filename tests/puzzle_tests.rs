use cyclic::board::Board;
use cyclic::grid::{Direction, Grid, Size};
use cyclic::orientation::Orientation;
use cyclic::session::Session;
use cyclic::stage;

use rand::SeedableRng;
use rand_xorshift::XorShiftRng;
use std::time::Duration;

// Fixed seed for deterministic tests
const TEST_SEED: u64 = 42;

fn create_test_board(width: usize, height: usize) -> Board {
    Board::new(Size::new(width, height))
}

fn orientations(board: &Board) -> Vec<Orientation> {
    board.grid.iter().map(|(_, _, &value)| value).collect()
}

#[test]
fn test_press_rotates_plus_shape() {
    let mut board = create_test_board(3, 1);
    let affected = board.press(1, 0);

    // Pressed panel comes first, then its in-bounds neighbors
    assert_eq!(affected[0], (1, 0));
    assert_eq!(affected.len(), 3);
    assert!(affected.contains(&(0, 0)));
    assert!(affected.contains(&(2, 0)));

    assert_eq!(orientations(&board), vec![Orientation::Right; 3]);
    assert!(board.is_solved());
}

#[test]
fn test_press_corner_leaves_rest_untouched() {
    let mut board = create_test_board(2, 2);
    let affected = board.press(0, 0);

    assert_eq!(affected.len(), 3);
    assert_eq!(board.grid.get(0, 0), Some(&Orientation::Right));
    assert_eq!(board.grid.get(1, 0), Some(&Orientation::Right));
    assert_eq!(board.grid.get(0, 1), Some(&Orientation::Right));
    assert_eq!(board.grid.get(1, 1), Some(&Orientation::Up));
    assert!(!board.is_solved());
}

#[test]
fn test_press_center_affects_five() {
    let mut board = create_test_board(3, 3);
    let affected = board.press(1, 1);

    assert_eq!(affected.len(), 5);

    for (x, y, &orientation) in &board.grid {
        let expected = if affected.contains(&(x, y)) {
            Orientation::Right
        } else {
            Orientation::Up
        };

        assert_eq!(orientation, expected);
    }
}

#[test]
fn test_four_presses_cancel_out() {
    let mut board = create_test_board(3, 3);
    let pristine = board.clone();

    for _ in 0..4 {
        board.press(1, 2);
    }

    assert_eq!(board, pristine);
}

#[test]
fn test_press_order_does_not_matter() {
    let mut first = create_test_board(4, 3);
    let mut second = create_test_board(4, 3);

    let presses = [(0, 0), (2, 1), (3, 2), (2, 1), (1, 0)];

    for &(x, y) in &presses {
        first.press(x, y);
    }

    for &(x, y) in presses.iter().rev() {
        second.press(x, y);
    }

    assert_eq!(first, second);
}

#[test]
fn test_solved_detects_any_uniform_orientation() {
    let mut board = create_test_board(2, 2);

    for y in 0..2 {
        for x in 0..2 {
            board.grid.set(x, y, Orientation::Left).unwrap();
        }
    }

    assert!(board.is_solved());
}

#[test]
fn test_orientation_turn_cycle() {
    assert_eq!(Orientation::default(), Orientation::Up);
    assert_eq!(Orientation::Up.rotated(), Orientation::Right);
    assert_eq!(Orientation::Right.rotated(), Orientation::Down);
    assert_eq!(Orientation::Down.rotated(), Orientation::Left);
    assert_eq!(Orientation::Left.rotated(), Orientation::Up);

    for orientation in Orientation::ALL {
        assert_eq!(Orientation::from_index(orientation.index()), orientation);
    }
}

#[test]
fn test_scramble_deterministic_with_seed() {
    let mut first = create_test_board(5, 4);
    let mut second = create_test_board(5, 4);

    let mut rng1 = XorShiftRng::seed_from_u64(TEST_SEED);
    let mut rng2 = XorShiftRng::seed_from_u64(TEST_SEED);

    let trace1 = first.scramble(20, &mut rng1);
    let trace2 = second.scramble(20, &mut rng2);

    assert_eq!(trace1, trace2);
    assert_eq!(first, second);
}

#[test]
fn test_scramble_trace_stays_in_bounds() {
    let mut board = create_test_board(4, 2);
    let mut rng = XorShiftRng::seed_from_u64(TEST_SEED);

    let trace = board.scramble(8, &mut rng);

    assert_eq!(trace.len(), 8);

    for (x, y) in trace {
        assert!(x < 4);
        assert!(y < 2);
    }
}

#[test]
fn test_session_seed_reproducibility() {
    let size = Size::new(4, 4);
    let first = Session::new(size, 16, TEST_SEED);
    let second = Session::new(size, 16, TEST_SEED);

    assert_eq!(first.seed(), TEST_SEED);
    assert_eq!(first.scramble_presses(), 16);
    assert_eq!(orientations(first.board()), orientations(second.board()));
    assert_eq!(first.solution(), second.solution());
}

#[test]
fn test_session_tracks_player_presses() {
    // One scramble press cannot clear a board bigger than its own plus
    let mut session = Session::new(Size::new(3, 3), 1, TEST_SEED);

    assert!(!session.solved());
    assert_eq!(session.presses(), 0);

    let outcome = session.press(1, 1).unwrap();

    assert_eq!(outcome.affected[0], (1, 1));
    assert!(!outcome.solved);
    assert_eq!(session.presses(), 1);
}

#[test]
fn test_session_reports_clear_on_winning_press() {
    let mut session = Session::new(Size::new(3, 3), 1, TEST_SEED);
    let solution = session.solution();

    // Undoing a single scramble press takes three more turns of the same panel
    assert_eq!(solution.len(), 3);
    assert_eq!(solution[0], solution[1]);
    assert_eq!(solution[1], solution[2]);

    let (x, y) = solution[0];

    assert!(!session.press(x, y).unwrap().solved);
    assert!(!session.press(x, y).unwrap().solved);

    let outcome = session.press(x, y).unwrap();
    assert!(outcome.solved);
    assert!(session.solved());

    // Cleared sessions ignore further input
    assert!(session.press(x, y).is_none());
    assert_eq!(session.presses(), 3);
}

#[test]
fn test_session_solution_clears_board() {
    let mut session = Session::new(Size::new(4, 4), 16, TEST_SEED);

    for (x, y) in session.solution() {
        if session.press(x, y).is_none() {
            break;
        }
    }

    assert!(session.solved());
}

#[test]
fn test_session_solution_after_extra_moves() {
    let mut session = Session::new(Size::new(4, 4), 16, TEST_SEED);

    session.press(0, 0);
    session.press(3, 3);
    session.press(1, 2);

    for (x, y) in session.solution() {
        if session.press(x, y).is_none() {
            break;
        }
    }

    assert!(session.solved());
}

#[test]
fn test_grid_neighbor_positions() {
    let grid = Grid::new(3, 3, &mut |x, y| x * 10 + y);

    // Corner cell (0,0)
    assert_eq!(grid.neighbor_position(0, 0, Direction::Up), None);
    assert_eq!(grid.neighbor_position(0, 0, Direction::Left), None);
    assert_eq!(grid.neighbor_position(0, 0, Direction::Right), Some((1, 0)));
    assert_eq!(grid.neighbor_position(0, 0, Direction::Down), Some((0, 1)));

    // Center cell (1,1)
    assert_eq!(grid.neighbor_position(1, 1, Direction::Up), Some((1, 0)));
    assert_eq!(grid.neighbor_position(1, 1, Direction::Right), Some((2, 1)));
    assert_eq!(grid.neighbor_position(1, 1, Direction::Down), Some((1, 2)));
    assert_eq!(grid.neighbor_position(1, 1, Direction::Left), Some((0, 1)));

    // Edge cell (2,1)
    assert_eq!(grid.neighbor_position(2, 1, Direction::Right), None);
    assert_eq!(grid.neighbor_position(2, 1, Direction::Up), Some((2, 0)));
}

#[test]
fn test_grid_creation_consistency() {
    let grid = Grid::new(4, 3, &mut |x, y| x + y);

    assert_eq!(grid.size(), 12);
    assert_eq!(grid.width(), 4);
    assert_eq!(grid.height(), 3);

    for x in 0..4 {
        for y in 0..3 {
            assert_eq!(grid.get(x, y), Some(&(x + y)));
        }
    }

    assert_eq!(grid.get(4, 0), None);
    assert_eq!(grid.get(0, 3), None);
}

#[test]
fn test_size_parsing() {
    assert_eq!("3x4".parse::<Size>(), Ok(Size::new(3, 4)));
    assert_eq!("10x1".parse::<Size>(), Ok(Size::new(10, 1)));

    assert!("0x2".parse::<Size>().is_err());
    assert!("3x".parse::<Size>().is_err());
    assert!("junk".parse::<Size>().is_err());
}

#[test]
fn test_stage_catalog() {
    assert!(!stage::STAGES.is_empty());

    let classic = stage::find("classic").unwrap();
    assert_eq!(classic.size, Size::new(3, 3));

    assert!(stage::find("does-not-exist").is_none());

    for stage in stage::STAGES {
        assert!(stage.size.width >= 1);
        assert!(stage.size.height >= 1);
    }
}

#[cfg(feature = "cli")]
#[test]
fn test_move_parsing() {
    use cyclic::cli::Move;

    assert_eq!("2,1".parse::<Move>(), Ok(Move { x: 2, y: 1 }));
    assert_eq!(" 0 , 3 ".parse::<Move>(), Ok(Move { x: 0, y: 3 }));

    assert!("2".parse::<Move>().is_err());
    assert!("a,1".parse::<Move>().is_err());
    assert!("1,b".parse::<Move>().is_err());
    assert!("".parse::<Move>().is_err());
}

#[cfg(feature = "cli")]
#[test]
fn test_app_rejects_out_of_bounds_move() {
    use cyclic::app::App;
    use cyclic::cli::{AppConfig, Move};

    let config = AppConfig {
        stage_name: None,
        size: Size::new(3, 3),
        scramble_presses: Some(1),
        seed: Some(TEST_SEED),
        moves: vec![Move { x: 3, y: 0 }],
        autoplay: false,
        show_steps: false,
    };

    // User-supplied moves become an error, not a board panic
    let error = App::new(config).run().unwrap_err();

    assert!(error.to_string().contains("move out of bounds"));
}

#[cfg(feature = "cli")]
#[test]
fn test_app_autoplay_clears_board() {
    use cyclic::app::App;
    use cyclic::cli::AppConfig;

    let config = AppConfig {
        stage_name: None,
        size: Size::new(3, 3),
        scramble_presses: Some(9),
        seed: Some(TEST_SEED),
        moves: Vec::new(),
        autoplay: true,
        show_steps: false,
    };

    assert!(App::new(config).run().is_ok());
}

// Edge case tests
#[test]
fn test_scramble_zero_presses_is_noop() {
    let mut board = create_test_board(3, 3);
    let pristine = board.clone();
    let mut rng = XorShiftRng::seed_from_u64(TEST_SEED);

    let trace = board.scramble(0, &mut rng);

    assert!(trace.is_empty());
    assert_eq!(board, pristine);
    assert!(board.is_solved());
}

#[test]
fn test_session_instant_clear() {
    let mut session = Session::new(Size::new(3, 3), 0, TEST_SEED);

    assert!(session.solved());
    assert_eq!(session.elapsed(), Duration::ZERO);

    // A cleared session refuses further presses
    assert!(session.press(1, 1).is_none());
    assert_eq!(session.presses(), 0);
}

#[test]
fn test_single_panel_board() {
    let mut board = create_test_board(1, 1);
    assert!(board.is_solved());

    let affected = board.press(0, 0);
    assert_eq!(affected, vec![(0, 0)]);
    assert!(board.is_solved());
}

#[test]
fn test_session_single_panel_always_cleared() {
    let mut session = Session::new(Size::new(1, 1), 5, TEST_SEED);

    assert!(session.solved());
    assert_eq!(session.elapsed(), Duration::ZERO);
    assert!(session.press(0, 0).is_none());
}
