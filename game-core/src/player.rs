//! 玩家标识

use serde::{Deserialize, Serialize};

/// 玩家（先手 / 后手）
///
/// 由局面内容推导（见 [`Game::player_to_move`](crate::Game::player_to_move)），
/// 引擎不保存轮到谁走的会话状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// 先手
    First,
    /// 后手
    Second,
}

impl Player {
    /// 获取对方玩家
    pub fn opponent(self) -> Self {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }
}
