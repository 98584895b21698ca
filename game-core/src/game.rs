//! 抽象博弈契约
//!
//! 引擎唯一的外部边界：具体博弈实现此 trait，引擎只通过这些查询操作
//! 走博弈树，不持有任何可变的博弈对象。

use crate::error::{Result, SearchError};
use crate::player::Player;

/// 局面语义键
///
/// 对不透明局面的语义指纹：相等的局面必须产生相等的键，不同的局面
/// 应产生不同的键。只在启用置换表时需要。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionKey(pub u64);

/// 两人零和完全信息博弈契约
///
/// 所有操作都是对给定局面的查询。局面与动作对引擎完全不透明，由具体
/// 博弈通过关联类型提供，不存在运行时向下转型。
///
/// 两个可选能力通过带默认实现的方法建模：
/// - [`evaluate`](Game::evaluate)：深度受限搜索需要，默认返回
///   [`SearchError::EvaluationUnsupported`]；
/// - [`position_key`](Game::position_key)：置换表需要，默认返回 `None`。
pub trait Game {
    /// 局面类型：创建后不可变的博弈快照
    type State;
    /// 动作类型：不携带行为，仅用于向调用方报告所选走法
    type Action;

    /// 获取博弈当前的根局面（调用方未显式给出根时的搜索起点）
    fn root_state(&self) -> Self::State;

    /// 生成局面的全部合法后继，配上产生它的动作
    ///
    /// 终局局面返回空序列。序列顺序决定同值动作的决胜顺序：价值严格
    /// 最优的最先枚举者胜出。
    fn successors(&self, state: &Self::State) -> Vec<(Self::State, Self::Action)>;

    /// 判断局面是否终局（无合法走法，或胜负/平局已定）
    fn is_terminal(&self, state: &Self::State) -> bool;

    /// 终局效用：从 `player` 视角看终局结果的价值
    ///
    /// 只在 `is_terminal` 成立时有定义。具体标度由博弈决定（如胜 +1、
    /// 负 -1、平 0），引擎不假设严格的零和取反对称性。
    fn utility(&self, state: &Self::State, player: Player) -> i32;

    /// 启发式评估：深度限制截断非终局分支时使用
    ///
    /// 不支持深度受限搜索的博弈保留默认实现即可；届时错误会从
    /// 搜索调用传出，而不是被默默当作 0。
    fn evaluate(&self, state: &Self::State, player: Player) -> Result<i32> {
        let _ = (state, player);
        Err(SearchError::EvaluationUnsupported)
    }

    /// 推导轮到谁走
    ///
    /// 必须只依赖局面内容，与引擎的搜索历史无关。
    fn player_to_move(&self, state: &Self::State) -> Player;

    /// 局面的语义键（置换表能力）
    ///
    /// 无法提供语义键的博弈保留默认实现即可；启用置换表后首次触表
    /// 即报 [`SearchError::PositionKeyUnsupported`]，不会退化为按
    /// 同一性比较。
    fn position_key(&self, state: &Self::State) -> Option<PositionKey> {
        let _ = state;
        None
    }
}
