//! 通用对抗搜索引擎
//!
//! 包含:
//! - Minimax 递归搜索
//! - Alpha-Beta 剪枝（可选）
//! - 置换表记忆化（可选）
//! - 深度受限搜索 + 启发式回退（可选）
//!
//! 四种算法变体（朴素 / 剪枝 / 置换表 / 两者皆有）由同一个参数化
//! 递归过程实现，在任意有限博弈树上返回相同的最佳动作与价值。
//! 具体博弈通过 [`game_core::Game`] 契约接入。

mod search;
mod transposition;

#[cfg(test)]
mod tictactoe;

pub use search::{SearchConfig, SearchEngine};
pub use transposition::{TableStats, TranspositionTable};

pub use game_core::{ActionValue, Game, Player, PositionKey, Result, SearchError};
