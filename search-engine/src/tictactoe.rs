//! 井字棋测试博弈
//!
//! 契约的参考实现，仅用于测试引擎。3×3 棋盘按行优先编号 0-8，
//! 后继按格号升序枚举，效用为胜 +1 / 负 -1 / 平 0。

use game_core::{Game, Player, PositionKey, Result};

/// 全部 8 条连线（行、列、对角线）
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// 格子内容
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    X,
    O,
}

/// 井字棋局面
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// 空盘
    pub fn empty() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// 从字符串解析：`X`、`O`、`-` 依次填入 0-8 号格，其他字符忽略
    ///
    /// 例如 `"X-O -X- O--"`。
    pub fn parse(text: &str) -> Self {
        let mut cells = [Cell::Empty; 9];
        let mut index = 0;
        for c in text.chars() {
            let cell = match c {
                'X' => Cell::X,
                'O' => Cell::O,
                '-' => Cell::Empty,
                _ => continue,
            };
            assert!(index < 9, "more than 9 cells in board text");
            cells[index] = cell;
            index += 1;
        }
        assert_eq!(index, 9, "board text must describe 9 cells");
        Self { cells }
    }

    /// 获取格子内容
    pub fn cell(&self, index: usize) -> Cell {
        self.cells[index]
    }

    fn mark_of(player: Player) -> Cell {
        match player {
            Player::First => Cell::X,
            Player::Second => Cell::O,
        }
    }

    fn has_won(&self, mark: Cell) -> bool {
        LINES
            .iter()
            .any(|line| line.iter().all(|&i| self.cells[i] == mark))
    }

    fn is_full(&self) -> bool {
        self.cells.iter().all(|&c| c != Cell::Empty)
    }

    fn count(&self, mark: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == mark).count()
    }

    /// 对 `mark` 仍开放的连线数（线上没有对方棋子）
    fn open_lines(&self, mark: Cell) -> i32 {
        let opponent = match mark {
            Cell::X => Cell::O,
            Cell::O => Cell::X,
            Cell::Empty => unreachable!(),
        };
        LINES
            .iter()
            .filter(|line| line.iter().all(|&i| self.cells[i] != opponent))
            .count() as i32
    }
}

/// 井字棋博弈
pub struct TicTacToe;

impl Game for TicTacToe {
    type State = Board;
    /// 落子的格号
    type Action = usize;

    fn root_state(&self) -> Board {
        Board::empty()
    }

    fn successors(&self, state: &Board) -> Vec<(Board, usize)> {
        let mark = Board::mark_of(self.player_to_move(state));

        let mut successors = Vec::new();
        for index in 0..9 {
            if state.cells[index] == Cell::Empty {
                let mut next = state.clone();
                next.cells[index] = mark;
                successors.push((next, index));
            }
        }
        successors
    }

    fn is_terminal(&self, state: &Board) -> bool {
        state.has_won(Cell::X) || state.has_won(Cell::O) || state.is_full()
    }

    fn utility(&self, state: &Board, player: Player) -> i32 {
        if state.has_won(Board::mark_of(player)) {
            1
        } else if state.has_won(Board::mark_of(player.opponent())) {
            -1
        } else {
            0
        }
    }

    fn evaluate(&self, state: &Board, player: Player) -> Result<i32> {
        let own = Board::mark_of(player);
        let other = Board::mark_of(player.opponent());
        Ok(state.open_lines(own) - state.open_lines(other))
    }

    fn player_to_move(&self, state: &Board) -> Player {
        // 双方落子数相等时轮到先手
        if state.count(Cell::X) == state.count(Cell::O) {
            Player::First
        } else {
            Player::Second
        }
    }

    fn position_key(&self, state: &Board) -> Option<PositionKey> {
        // 三进制编码，键与局面一一对应
        let mut key = 0u64;
        for &cell in &state.cells {
            let digit = match cell {
                Cell::Empty => 0,
                Cell::X => 1,
                Cell::O => 2,
            };
            key = key * 3 + digit;
        }
        Some(PositionKey(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_to_move_derived_from_marks() {
        let game = TicTacToe;

        assert_eq!(game.player_to_move(&Board::empty()), Player::First);
        assert_eq!(
            game.player_to_move(&Board::parse("X-- --- ---")),
            Player::Second
        );
        assert_eq!(
            game.player_to_move(&Board::parse("X-- -O- ---")),
            Player::First
        );
    }

    #[test]
    fn test_successors_in_cell_order() {
        let game = TicTacToe;
        let board = Board::parse("XO- -X- ---");

        let actions: Vec<usize> = game
            .successors(&board)
            .into_iter()
            .map(|(_, action)| action)
            .collect();
        assert_eq!(actions, vec![2, 3, 5, 6, 7, 8]);
    }

    #[test]
    fn test_successor_places_mover_mark() {
        let game = TicTacToe;
        let board = Board::parse("X-- --- ---");

        // 轮到 O：后继在空格落 O
        let (next, action) = game.successors(&board).into_iter().next().unwrap();
        assert_eq!(action, 1);
        assert_eq!(next.cell(1), Cell::O);
    }

    #[test]
    fn test_terminal_and_utility() {
        let game = TicTacToe;

        let x_row = Board::parse("XXX OO- ---");
        assert!(game.is_terminal(&x_row));
        assert_eq!(game.utility(&x_row, Player::First), 1);
        assert_eq!(game.utility(&x_row, Player::Second), -1);

        let o_diagonal = Board::parse("O-X -OX --O");
        assert!(game.is_terminal(&o_diagonal));
        assert_eq!(game.utility(&o_diagonal, Player::First), -1);

        let draw = Board::parse("XOX XXO OXO");
        assert!(game.is_terminal(&draw));
        assert_eq!(game.utility(&draw, Player::First), 0);

        assert!(!game.is_terminal(&Board::empty()));
    }

    #[test]
    fn test_evaluate_open_line_differential() {
        let game = TicTacToe;

        // 空盘对称
        assert_eq!(game.evaluate(&Board::empty(), Player::First).unwrap(), 0);

        // X 占中心：X 开放 8 条线，O 剩 4 条
        let center = Board::parse("--- -X- ---");
        assert_eq!(game.evaluate(&center, Player::First).unwrap(), 4);
        assert_eq!(game.evaluate(&center, Player::Second).unwrap(), -4);
    }

    #[test]
    fn test_position_key_matches_semantic_equality() {
        let game = TicTacToe;

        let a = Board::parse("X-O -X- O--");
        let b = Board::parse("X - O / - X - / O - -");
        assert_eq!(game.position_key(&a), game.position_key(&b));

        let c = Board::parse("X-O -X- O-X");
        assert_ne!(game.position_key(&a), game.position_key(&c));
    }
}
