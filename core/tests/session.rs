use std::thread;

use bombgrid_core::*;

fn mined_board(size: i64, mines: &[CellIndex]) -> Board {
    let config = GameConfig::new(size).unwrap();
    Board::new(MineLayout::from_mine_indices(config, mines).unwrap())
}

#[test]
fn reveal_without_board_fails() {
    let session = Session::new();

    assert!(!session.has_board());
    assert_eq!(session.reveal(0), Err(GameError::NoBoard));
}

#[test]
fn start_creates_fresh_board() {
    let session = Session::new();

    let config = session.start(5).unwrap();
    let board = session.snapshot().unwrap();

    assert_eq!(config.size(), 5);
    assert_eq!(board.config(), config);
    assert_eq!(board.mine_indices().len(), 5);
    assert!(board.revealed().is_empty());
    assert_eq!(board.state(), GameState::InProgress);
}

#[test]
fn invalid_size_keeps_previous_board() {
    let session = Session::new();
    session.replace(mined_board(4, &[3, 7]));
    session.reveal(0).unwrap();
    let before = session.snapshot();

    assert_eq!(session.start(1), Err(GameError::InvalidSize));
    assert_eq!(session.start(-1), Err(GameError::InvalidSize));
    assert_eq!(session.start_from_input("abc"), Err(GameError::InvalidSize));
    assert_eq!(session.start_from_input(""), Err(GameError::InvalidSize));

    assert_eq!(session.snapshot(), before);
}

#[test]
fn new_game_replaces_lost_board() {
    let session = Session::new();
    session.replace(mined_board(4, &[3, 7]));
    assert!(session.reveal(3).unwrap().hit_mine());

    session.start_from_input("3").unwrap();
    let board = session.snapshot().unwrap();

    assert_eq!(board.size(), 3);
    assert_eq!(board.state(), GameState::InProgress);
    assert!(board.revealed().is_empty());
}

#[test]
fn restart_discards_board() {
    let session = Session::new();
    session.start_with_seed(GameConfig::new(3).unwrap(), 1);

    assert!(session.restart().is_some());
    assert!(session.snapshot().is_none());
    assert_eq!(session.reveal_at((0, 0)), Err(GameError::NoBoard));
}

#[test]
fn seeded_start_is_reproducible() {
    let first = Session::new();
    let second = Session::new();
    let config = GameConfig::new(8).unwrap();

    first.start_with_seed(config, 42);
    second.start_with_seed(config, 42);

    assert_eq!(first.snapshot(), second.snapshot());
}

#[test]
fn racing_reveals_report_one_mine_hit() {
    let session = Session::new();
    session.replace(mined_board(4, &[3, 7]));

    let hits = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| session.reveal(3).unwrap()))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .filter(|outcome| outcome.hit_mine())
            .count()
    });

    let board = session.snapshot().unwrap();
    assert_eq!(hits, 1);
    assert_eq!(board.revealed(), [3]);
    assert_eq!(board.state(), GameState::Lost);
}

#[test]
fn racing_safe_reveals_never_duplicate() {
    let session = Session::new();
    session.replace(mined_board(6, &[]));

    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for index in 0..36 {
                    session.reveal(index).unwrap();
                }
            });
        }
    });

    let board = session.snapshot().unwrap();
    let mut revealed = board.revealed().to_vec();
    revealed.sort_unstable();
    assert_eq!(revealed, (0..36).collect::<Vec<CellIndex>>());
}

fn assert_consistent(board: &Board) {
    let opened = board
        .iter_cells()
        .filter(|(_, cell)| cell.is_revealed())
        .count();
    assert_eq!(board.revealed().len(), opened);
    assert!(board.revealed().iter().all(|&index| board.is_revealed(index)));
    assert_eq!(board.mine_indices().len(), board.config().mine_count() as usize);

    match board.triggered_mine() {
        Some(index) => {
            assert_eq!(board.state(), GameState::Lost);
            assert!(board.has_mine_at(index));
            assert_eq!(board.revealed().last(), Some(&index));
        }
        None => {
            assert_eq!(board.state(), GameState::InProgress);
            assert!(board.revealed().iter().all(|&index| !board.has_mine_at(index)));
        }
    }
}

#[test]
fn restarting_while_revealing_never_mixes_boards() {
    let session = Session::new();
    let small = GameConfig::new(4).unwrap();
    let large = GameConfig::new(9).unwrap();
    session.start_with_seed(small, 0);

    thread::scope(|scope| {
        scope.spawn(|| {
            for seed in 0..200 {
                let config = if seed % 2 == 0 { large } else { small };
                session.start_with_seed(config, seed);
            }
        });
        scope.spawn(|| {
            for round in 0..2000 {
                // indices past a 4x4 board are rejected
                match session.reveal(round % 81) {
                    Ok(_) | Err(GameError::InvalidIndex) => {}
                    Err(err) => panic!("unexpected error: {err}"),
                }
            }
        });
        scope.spawn(|| {
            for _ in 0..500 {
                assert_consistent(&session.snapshot().unwrap());
            }
        });
    });

    assert_consistent(&session.snapshot().unwrap());
}
