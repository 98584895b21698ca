//! 对抗搜索共享契约库
//!
//! 包含:
//! - 玩家标识 (Player)
//! - 抽象博弈契约 (Game trait)
//! - 搜索结果单元 (ActionValue)
//! - 局面语义键 (PositionKey)
//! - 错误类型定义 (SearchError)

mod error;
mod game;
mod player;
mod value;

pub use error::{Result, SearchError};
pub use game::{Game, PositionKey};
pub use player::Player;
pub use value::ActionValue;
