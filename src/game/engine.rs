use log::{debug, info};

use super::{Board, Cell, Player, PlayerId};
use crate::error::MoveError;

/// How the engine looks for four-in-a-row after each move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WinScan {
    /// Rescan every cell of the board for a run owned by the mover.
    #[default]
    Full,
    /// Only check runs passing through the piece just placed.
    LastMove,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(PlayerId),
    Tied,
}

/// Result of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The game goes on; carries the player whose turn it now is.
    Continued(PlayerId),
    Won(PlayerId),
    Tied,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    players: [Player; 2],
    current_player: PlayerId,
    status: GameStatus,
    scan: WinScan,
    move_count: usize,
    last_move: Option<(usize, usize)>,
}

impl GameEngine {
    /// Start a game on an empty `rows` x `columns` board. Player one moves first.
    pub fn new(
        player_one: Player,
        player_two: Player,
        rows: usize,
        columns: usize,
    ) -> Result<Self, MoveError> {
        Ok(GameEngine {
            board: Board::new(rows, columns)?,
            players: [player_one, player_two],
            current_player: PlayerId::One,
            status: GameStatus::InProgress,
            scan: WinScan::default(),
            move_count: 0,
            last_move: None,
        })
    }

    /// Select the win-scan strategy.
    pub fn with_scan(mut self, scan: WinScan) -> Self {
        self.scan = scan;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        match id {
            PlayerId::One => &self.players[0],
            PlayerId::Two => &self.players[1],
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn scan(&self) -> WinScan {
        self.scan
    }

    pub fn is_game_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// (row, column) of the most recent accepted move
    pub fn last_move(&self) -> Option<(usize, usize)> {
        self.last_move
    }

    /// Read-only cell query for rendering; `None` when off the board.
    pub fn get_cell(&self, row: usize, column: usize) -> Option<Cell> {
        self.board.try_get(row, column)
    }

    /// Drop the current player's piece into `column`.
    ///
    /// Either the move is applied in full (board, and possibly status or turn)
    /// or an error is returned and nothing changes.
    pub fn drop_piece(&mut self, column: usize) -> Result<MoveOutcome, MoveError> {
        if self.is_game_over() {
            debug!("rejecting drop in column {column}: game is over");
            return Err(MoveError::GameAlreadyOver);
        }

        let row = match self.board.landing_row(column)? {
            Some(row) => row,
            None => {
                debug!("rejecting drop in column {column}: column full");
                return Err(MoveError::ColumnFull(column));
            }
        };

        let mover = self.current_player;
        self.board.place(row, column, mover);
        self.move_count += 1;
        self.last_move = Some((row, column));
        debug!("{mover} dropped into column {column}, landed on row {row}");

        if self.is_win_for(mover, row, column) {
            self.status = GameStatus::Won(mover);
            info!("{mover} ({}) wins after {} moves", self.player(mover).name, self.move_count);
            return Ok(MoveOutcome::Won(mover));
        }

        // A board-filling move that also wins was handled above.
        if self.board.is_full() {
            self.status = GameStatus::Tied;
            info!("game tied after {} moves", self.move_count);
            return Ok(MoveOutcome::Tied);
        }

        self.current_player = mover.other();
        Ok(MoveOutcome::Continued(self.current_player))
    }

    /// Pure variant of [`GameEngine::drop_piece`]: returns the successor
    /// state and leaves `self` untouched.
    pub fn apply_move(&self, column: usize) -> Result<(GameEngine, MoveOutcome), MoveError> {
        let mut next = self.clone();
        let outcome = next.drop_piece(column)?;
        Ok((next, outcome))
    }

    /// Start over with the same players, dimensions and scan strategy.
    pub fn restart(&mut self) {
        self.board = self.board.cleared();
        self.current_player = PlayerId::One;
        self.status = GameStatus::InProgress;
        self.move_count = 0;
        self.last_move = None;
        debug!("game restarted");
    }

    fn is_win_for(&self, player: PlayerId, row: usize, column: usize) -> bool {
        match self.scan {
            WinScan::Full => self.board.has_run_anywhere(player),
            WinScan::LastMove => self.board.has_run_through(row, column, player),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::PieceColor;

    /// Alternating sequence that fills a 6x7 board without any four-in-a-row.
    const TIE_SEQUENCE: [usize; 42] = [
        5, 3, 2, 3, 1, 5, 3, 1, 0, 1, 4, 1, 2, 5, 0, 5, 6, 6, 2, 0, 6, 0, 4, 2, 3, 0, 3, 4, 2,
        3, 2, 6, 0, 4, 1, 1, 5, 4, 4, 5, 6, 6,
    ];

    /// Alternating sequence whose 42nd (board-filling) drop completes a
    /// horizontal run for player two along the top row.
    const FILLING_WIN_SEQUENCE: [usize; 42] = [
        4, 1, 6, 2, 1, 0, 1, 4, 4, 2, 4, 1, 3, 6, 3, 3, 1, 0, 4, 6, 6, 1, 2, 3, 2, 3, 2, 2, 6,
        5, 5, 0, 5, 4, 6, 5, 5, 5, 0, 0, 0, 3,
    ];

    fn players() -> (Player, Player) {
        (
            Player::new("Ruby", PieceColor::by_name("Ruby").unwrap()),
            Player::new("Sapphire", PieceColor::by_name("Sapphire").unwrap()),
        )
    }

    fn game(rows: usize, columns: usize) -> GameEngine {
        let (one, two) = players();
        GameEngine::new(one, two, rows, columns).unwrap()
    }

    fn play_all(game: &mut GameEngine, moves: &[usize]) -> MoveOutcome {
        let mut outcome = MoveOutcome::Continued(game.current_player());
        for &col in moves {
            outcome = game.drop_piece(col).unwrap();
        }
        outcome
    }

    #[test]
    fn test_initial_state() {
        let game = game(6, 7);
        assert_eq!(game.current_player(), PlayerId::One);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(!game.is_game_over());
        assert_eq!(game.move_count(), 0);
        assert_eq!(game.last_move(), None);
        assert_eq!(game.scan(), WinScan::Full);
        assert_eq!(game.player(PlayerId::Two).name, "Sapphire");
    }

    #[test]
    fn test_invalid_dimensions() {
        let (one, two) = players();
        assert_eq!(
            GameEngine::new(one, two, 0, 7),
            Err(MoveError::InvalidDimensions { rows: 0, columns: 7 })
        );
    }

    #[test]
    fn test_oversized_dimensions_return_error() {
        let (one, two) = players();
        assert_eq!(
            GameEngine::new(one, two, usize::MAX, 2),
            Err(MoveError::InvalidDimensions {
                rows: usize::MAX,
                columns: 2
            })
        );
    }

    #[test]
    fn test_drop_switches_turn() {
        let mut game = game(6, 7);
        assert_eq!(game.drop_piece(3), Ok(MoveOutcome::Continued(PlayerId::Two)));
        assert_eq!(game.get_cell(5, 3), Some(Cell::Occupied(PlayerId::One)));
        assert_eq!(game.last_move(), Some((5, 3)));
        assert_eq!(game.drop_piece(3), Ok(MoveOutcome::Continued(PlayerId::One)));
        assert_eq!(game.get_cell(4, 3), Some(Cell::Occupied(PlayerId::Two)));
        assert_eq!(game.move_count(), 2);
    }

    #[test]
    fn test_invalid_column_leaves_state_unchanged() {
        let mut game = game(6, 7);
        game.drop_piece(0).unwrap();
        let before = game.clone();
        assert_eq!(
            game.drop_piece(7),
            Err(MoveError::InvalidColumn { column: 7, columns: 7 })
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_full_column_rejected_without_mutation() {
        let mut game = game(6, 7);
        for _ in 0..6 {
            game.drop_piece(2).unwrap();
        }
        let before = game.clone();
        assert_eq!(game.drop_piece(2), Err(MoveError::ColumnFull(2)));
        assert_eq!(game, before);
        assert_eq!(game.current_player(), PlayerId::One);
    }

    #[test]
    fn test_vertical_win_on_six_columns_by_seven_rows() {
        let mut game = game(7, 6);
        // One stacks column 0, Two plays column 1 in between.
        let outcome = play_all(&mut game, &[0, 1, 0, 1, 0, 1, 0]);
        assert_eq!(outcome, MoveOutcome::Won(PlayerId::One));
        assert_eq!(game.status(), GameStatus::Won(PlayerId::One));
        // No turn switch after the winning move.
        assert_eq!(game.current_player(), PlayerId::One);
        assert!(game.is_game_over());
    }

    #[test]
    fn test_horizontal_win() {
        let mut game = game(6, 7);
        let outcome = play_all(&mut game, &[0, 0, 1, 1, 2, 2, 3]);
        assert_eq!(outcome, MoveOutcome::Won(PlayerId::One));
    }

    #[test]
    fn test_win_is_only_checked_for_mover() {
        let mut game = game(6, 7);
        // Two completes a run; the outcome names Two, not One.
        let outcome = play_all(&mut game, &[6, 0, 6, 1, 5, 2, 6, 3]);
        assert_eq!(outcome, MoveOutcome::Won(PlayerId::Two));
    }

    #[test]
    fn test_move_after_win_rejected() {
        let mut game = game(7, 6);
        play_all(&mut game, &[0, 1, 0, 1, 0, 1, 0]);
        let before = game.clone();
        assert_eq!(game.drop_piece(3), Err(MoveError::GameAlreadyOver));
        assert_eq!(game, before);
    }

    #[test]
    fn test_tie_on_final_drop() {
        for scan in [WinScan::Full, WinScan::LastMove] {
            let mut game = game(6, 7).with_scan(scan);
            let (last, rest) = TIE_SEQUENCE.split_last().unwrap();
            for &col in rest {
                assert!(matches!(game.drop_piece(col), Ok(MoveOutcome::Continued(_))));
            }
            assert_eq!(game.drop_piece(*last), Ok(MoveOutcome::Tied));
            assert_eq!(game.status(), GameStatus::Tied);
            assert!(game.board().is_full());
            assert_eq!(game.drop_piece(0), Err(MoveError::GameAlreadyOver));
        }
    }

    #[test]
    fn test_win_takes_precedence_over_tie() {
        for scan in [WinScan::Full, WinScan::LastMove] {
            let mut game = game(6, 7).with_scan(scan);
            let outcome = play_all(&mut game, &FILLING_WIN_SEQUENCE);
            assert!(game.board().is_full());
            assert_eq!(outcome, MoveOutcome::Won(PlayerId::Two));
            assert_eq!(game.status(), GameStatus::Won(PlayerId::Two));
        }
    }

    #[test]
    fn test_small_board_always_ties() {
        let mut game = game(3, 3);
        let outcome = play_all(&mut game, &[0, 0, 0, 1, 1, 1, 2, 2, 2]);
        assert_eq!(outcome, MoveOutcome::Tied);
    }

    #[test]
    fn test_apply_move_is_pure() {
        let game = game(6, 7);
        let (next, outcome) = game.apply_move(4).unwrap();
        assert_eq!(outcome, MoveOutcome::Continued(PlayerId::Two));
        assert_eq!(game.get_cell(5, 4), Some(Cell::Empty));
        assert_eq!(next.get_cell(5, 4), Some(Cell::Occupied(PlayerId::One)));
        assert_eq!(game.current_player(), PlayerId::One);
        assert!(game.apply_move(9).is_err());
    }

    #[test]
    fn test_restart() {
        let mut game = game(7, 6).with_scan(WinScan::LastMove);
        play_all(&mut game, &[0, 1, 0, 1, 0, 1, 0]);
        game.restart();
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.current_player(), PlayerId::One);
        assert_eq!(game.move_count(), 0);
        assert_eq!(game.board().rows(), 7);
        assert_eq!(game.board().columns(), 6);
        assert_eq!(game.scan(), WinScan::LastMove);
        assert_eq!(game.get_cell(6, 0), Some(Cell::Empty));
    }

    #[test]
    fn test_get_cell_out_of_range() {
        let game = game(6, 7);
        assert_eq!(game.get_cell(6, 0), None);
        assert_eq!(game.get_cell(0, 7), None);
    }
}
