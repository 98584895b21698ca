//! 搜索结果单元

/// 动作-价值对
///
/// 引擎的结果单元：最佳动作及其回传价值。`action` 为 `None` 表示叶子
/// 评估（终局效用或深度截断处的启发式值）；根调用只在根本身就是终局时
/// 才返回 `None`。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionValue<A> {
    /// 最佳动作（叶子评估时为 `None`）
    pub action: Option<A>,
    /// 从固定的最大化玩家视角回传的价值
    pub value: i32,
}

impl<A> ActionValue<A> {
    /// 创建动作-价值对
    pub fn new(action: A, value: i32) -> Self {
        Self {
            action: Some(action),
            value,
        }
    }

    /// 创建叶子评估结果（无动作）
    pub fn leaf(value: i32) -> Self {
        Self {
            action: None,
            value,
        }
    }
}
