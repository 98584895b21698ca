//! 错误类型定义

use thiserror::Error;

/// 搜索错误
///
/// 所有错误都是致命的：搜索没有部分结果语义，错误立即上报调用方，不重试。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// 博弈未提供评估函数（深度受限搜索需要）
    #[error("no evaluation function provided - a depth-limited search requires the game to implement evaluate()")]
    EvaluationUnsupported,

    /// 局面未提供语义键（置换表需要）
    #[error("no position key provided - the transposition table requires the game to implement position_key()")]
    PositionKeyUnsupported,

    /// 契约违反：非终局局面没有任何后继
    #[error("contract violation: non-terminal state produced no successors")]
    MissingSuccessors,
}

/// 搜索操作结果类型
pub type Result<T> = std::result::Result<T, SearchError>;
