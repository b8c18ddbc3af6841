use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use tictactoe::{
    Game, GameStatus, MoveError, MoveSource, Player, RandomPlayer, Seat, Symbol, Taunts,
    TurnDriver,
};

type Journal = Rc<RefCell<Vec<String>>>;

/// Plays a fixed list of cells and records everything it is told.
struct Scripted {
    tag: &'static str,
    moves: VecDeque<usize>,
    journal: Journal,
    retry: bool,
}

impl Scripted {
    fn new(tag: &'static str, moves: &[usize], journal: &Journal) -> Self {
        Self {
            tag,
            moves: moves.iter().copied().collect(),
            journal: journal.clone(),
            retry: false,
        }
    }

    fn retrying(mut self) -> Self {
        self.retry = true;
        self
    }
}

impl MoveSource for Scripted {
    fn select_move(&mut self, _game: &Game, _rng: &mut SmallRng) -> anyhow::Result<usize> {
        let m = self
            .moves
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("{} ran out of moves", self.tag))?;
        self.journal.borrow_mut().push(format!("{}:{}", self.tag, m));
        Ok(m)
    }

    fn move_rejected(&mut self, index: usize, err: MoveError) -> anyhow::Result<()> {
        self.journal
            .borrow_mut()
            .push(format!("{}:rejected:{}", self.tag, index));
        if self.retry {
            Ok(())
        } else {
            Err(anyhow::anyhow!(err))
        }
    }

    fn announce(&mut self, line: &str) -> anyhow::Result<()> {
        self.journal
            .borrow_mut()
            .push(format!("{}:heard:{}", self.tag, line));
        Ok(())
    }
}

fn new_game() -> Game {
    Game::new([
        Player::new("human", Symbol::Cross),
        Player::new("I", Symbol::Nought),
    ])
    .unwrap()
}

#[test]
fn test_scripted_left_column_win() {
    let journal = Journal::default();
    let mut human = Scripted::new("h", &[0, 3, 6], &journal);
    let mut computer = Scripted::new("c", &[1, 2], &journal);
    let mut rng = SmallRng::seed_from_u64(1);
    let mut game = new_game();

    let status = TurnDriver::new()
        .play(&mut game, &mut human, &mut computer, &mut rng)
        .unwrap();

    assert_eq!(status, GameStatus::Won(Symbol::Cross));
    assert_eq!(game.winner_name(), Some("human"));
    assert_eq!(game.moves_made(), 5);
    assert_eq!(
        *journal.borrow(),
        vec!["h:0", "c:1", "h:3", "c:2", "h:6"]
    );
}

#[test]
fn test_computer_never_moves_after_terminal() {
    let journal = Journal::default();
    // Human completes the top row on its third move; the computer has a
    // fourth move queued that must never be requested.
    let mut human = Scripted::new("h", &[0, 1, 2], &journal);
    let mut computer = Scripted::new("c", &[3, 4, 5], &journal);
    let mut rng = SmallRng::seed_from_u64(2);
    let mut game = new_game();

    TurnDriver::new()
        .play(&mut game, &mut human, &mut computer, &mut rng)
        .unwrap();

    assert_eq!(*journal.borrow(), vec!["h:0", "c:3", "h:1", "c:4", "h:2"]);
    assert_eq!(computer.moves.len(), 1);
}

#[test]
fn test_rejected_move_retried_by_same_seat() {
    let journal = Journal::default();
    let mut human = Scripted::new("h", &[0, 0, 9, 3, 6], &journal).retrying();
    let mut computer = Scripted::new("c", &[1, 2], &journal);
    let mut rng = SmallRng::seed_from_u64(3);
    let mut game = new_game();

    let status = TurnDriver::new()
        .play(&mut game, &mut human, &mut computer, &mut rng)
        .unwrap();

    assert_eq!(status, GameStatus::Won(Symbol::Cross));
    assert_eq!(
        *journal.borrow(),
        vec![
            "h:0",
            "c:1",
            "h:0",
            "h:rejected:0",
            "h:9",
            "h:rejected:9",
            "h:3",
            "c:2",
            "h:6",
        ]
    );
}

#[test]
fn test_rejection_is_an_error_for_non_interactive_sources() {
    let journal = Journal::default();
    let mut human = Scripted::new("h", &[0, 3], &journal);
    let mut computer = Scripted::new("c", &[0], &journal);
    let mut rng = SmallRng::seed_from_u64(4);
    let mut game = new_game();

    let err = TurnDriver::new()
        .play(&mut game, &mut human, &mut computer, &mut rng)
        .unwrap_err();
    assert!(err.to_string().contains("already taken"));
    assert_eq!(game.moves_made(), 1);
}

#[test]
fn test_take_turn_refuses_finished_game() {
    let journal = Journal::default();
    let mut game = new_game();
    for i in [0, 4, 8] {
        assert!(game.apply_move(Symbol::Cross, i));
    }
    assert!(game.is_terminal());

    let mut human = Scripted::new("h", &[1], &journal);
    let mut computer = Scripted::new("c", &[2], &journal);
    let mut rng = SmallRng::seed_from_u64(5);
    let driver = TurnDriver::new();
    assert!(driver
        .take_turn(&mut game, Seat::Second, &mut computer, &mut human, &mut rng)
        .is_err());
    assert!(journal.borrow().is_empty());
    assert_eq!(game.moves_made(), 3);
}

#[test]
fn test_taunts_reach_the_other_seat() {
    let journal = Journal::default();
    let mut human = Scripted::new("h", &[0, 3, 6], &journal);
    let mut computer = RandomPlayer::with_taunts(Taunts::from_phrases(["one", "two", "three"]));
    let mut rng = SmallRng::seed_from_u64(6);
    let mut game = new_game();

    // The random computer may block the column, so only check the first
    // two turns.
    let driver = TurnDriver::new();
    driver
        .take_turn(&mut game, Seat::First, &mut human, &mut computer, &mut rng)
        .unwrap();
    driver
        .take_turn(&mut game, Seat::Second, &mut computer, &mut human, &mut rng)
        .unwrap();

    assert_eq!(*journal.borrow(), vec!["h:0", "h:heard:one"]);
    assert_eq!(game.moves_made(), 2);
    assert_eq!(game.board().occupied(), 2);
}

#[test]
fn test_random_vs_random_always_finishes() {
    let driver = TurnDriver::new();
    for seed in 0..200 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut game = new_game();
        let mut a = RandomPlayer::new();
        let mut b = RandomPlayer::new();
        let status = driver.play(&mut game, &mut a, &mut b, &mut rng).unwrap();

        assert!(status.is_over());
        assert!(game.moves_made() >= 5 && game.moves_made() <= 9);
        assert_eq!(game.board().occupied(), game.moves_made());
        let crosses = game
            .board()
            .cells()
            .iter()
            .filter(|c| c.symbol() == Some(Symbol::Cross))
            .count();
        let noughts = game.moves_made() - crosses;
        // first seat is never behind and never more than one move ahead
        assert!(crosses == noughts || crosses == noughts + 1);
        if let GameStatus::Won(s) = status {
            let last = if crosses > noughts { Symbol::Cross } else { Symbol::Nought };
            assert_eq!(s, last);
        }
    }
}

#[test]
fn test_same_seed_same_game() {
    let driver = TurnDriver::new();
    let run = |seed| {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut game = new_game();
        driver
            .play(&mut game, &mut RandomPlayer::new(), &mut RandomPlayer::new(), &mut rng)
            .unwrap();
        *game.board()
    };
    assert_eq!(run(42), run(42));
}
