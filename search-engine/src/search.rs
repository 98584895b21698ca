//! 搜索引擎
//!
//! 实现 Minimax 递归搜索，可选 Alpha-Beta 剪枝、置换表与深度限制。
//! 四个开关组合共用同一个递归过程，只在截断检查与查表两处分支。

use game_core::{ActionValue, Game, Player, Result, SearchError};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::transposition::{TableStats, TranspositionTable};

/// 搜索配置
///
/// 算法变体开关加可选深度限制。默认无剪枝、无置换表、无限深度
/// （只在终局处停止）。剪枝与置换表正交组合，四种组合在任意有限
/// 博弈树上返回相同的最佳动作与价值，只有访问的节点数不同。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// 启用 Alpha-Beta 剪枝
    pub use_pruning: bool,
    /// 启用置换表（要求博弈提供局面语义键）
    pub use_transposition: bool,
    /// 深度限制，`None` 表示搜索到终局（受限时博弈必须提供评估函数）
    pub depth_limit: Option<u32>,
}

impl SearchConfig {
    /// 朴素 Minimax：无剪枝、无置换表、无限深度
    pub fn minimax() -> Self {
        Self {
            use_pruning: false,
            use_transposition: false,
            depth_limit: None,
        }
    }

    /// 开启剪枝
    pub fn with_pruning(mut self) -> Self {
        self.use_pruning = true;
        self
    }

    /// 开启置换表
    pub fn with_transposition(mut self) -> Self {
        self.use_transposition = true;
        self
    }

    /// 设置深度限制
    pub fn with_depth_limit(mut self, depth: u32) -> Self {
        self.depth_limit = Some(depth);
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::minimax()
    }
}

/// 搜索引擎
///
/// 单线程、同步、调用内不可重入：`search_with` 在每条分支到达终局或
/// 深度截断后才返回，没有暂停点、取消或超时。置换表是调用私有的
/// 可变状态，每次调用开始时清空。
pub struct SearchEngine<G: Game> {
    game: G,
    config: SearchConfig,
    /// 本次调用固定的最大化玩家，所有价值回传都以其视角表达
    player: Player,
    table: TranspositionTable,
    nodes_visited: u64,
    leaf_evaluations: u64,
}

impl<G: Game> SearchEngine<G> {
    /// 以默认配置创建引擎
    pub fn new(game: G) -> Self {
        Self::with_config(game, SearchConfig::default())
    }

    /// 以指定配置创建引擎
    pub fn with_config(game: G, config: SearchConfig) -> Self {
        let root = game.root_state();
        let player = game.player_to_move(&root);
        Self {
            game,
            config,
            player,
            table: TranspositionTable::new(),
            nodes_visited: 0,
            leaf_evaluations: 0,
        }
    }

    /// 从博弈当前根局面搜索（引擎配置）
    pub fn search(&mut self) -> Result<ActionValue<G::Action>> {
        let root = self.game.root_state();
        self.search_with(&root, self.config)
    }

    /// 从指定根局面搜索（引擎配置）
    pub fn search_from(&mut self, root: &G::State) -> Result<ActionValue<G::Action>> {
        self.search_with(root, self.config)
    }

    /// 从博弈当前根局面做深度受限搜索
    pub fn search_to_depth(&mut self, depth: u32) -> Result<ActionValue<G::Action>> {
        let root = self.game.root_state();
        let config = self.config.with_depth_limit(depth);
        self.search_with(&root, config)
    }

    /// 搜索最佳走法（规范形式）
    ///
    /// 根局面不必等于博弈的当前根。最大化玩家在调用开始时固定为
    /// `player_to_move(root)`，整个递归不再重算。同值动作取
    /// `successors` 枚举顺序中最先出现者，结果确定。
    pub fn search_with(
        &mut self,
        root: &G::State,
        config: SearchConfig,
    ) -> Result<ActionValue<G::Action>> {
        let saved = self.config;
        self.config = config;
        self.player = self.game.player_to_move(root);
        self.table.clear();
        self.nodes_visited = 0;
        self.leaf_evaluations = 0;

        debug!(player = ?self.player, ?config, "search start");

        let result = self.search_node(root, 0, i32::MIN, i32::MAX, true);
        self.config = saved;

        let action_value = result?;
        debug!(
            value = action_value.value,
            nodes = self.nodes_visited,
            table_hit_rate = self.table.stats().hit_rate(),
            "search done"
        );
        Ok(action_value)
    }

    /// 获取博弈
    pub fn game(&self) -> &G {
        &self.game
    }

    /// 获取引擎配置
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// 上次搜索访问的节点数
    pub fn nodes_visited(&self) -> u64 {
        self.nodes_visited
    }

    /// 上次搜索的叶子评估次数（终局效用 + 启发式评估）
    pub fn leaf_evaluations(&self) -> u64 {
        self.leaf_evaluations
    }

    /// 上次搜索的置换表统计
    pub fn table_stats(&self) -> TableStats {
        self.table.stats()
    }

    /// 递归搜索一个节点
    ///
    /// `maximizing` 为真时取后继价值的最大者（轮到最大化玩家），为假
    /// 时取最小者。终局检查先于深度检查：终局局面总是返回效用，深度
    /// 限制只截断非终局分支。
    fn search_node(
        &mut self,
        state: &G::State,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> Result<ActionValue<G::Action>> {
        self.nodes_visited += 1;

        if self.game.is_terminal(state) {
            self.leaf_evaluations += 1;
            return Ok(ActionValue::leaf(self.game.utility(state, self.player)));
        }

        if let Some(limit) = self.config.depth_limit {
            if depth >= limit {
                self.leaf_evaluations += 1;
                return Ok(ActionValue::leaf(self.game.evaluate(state, self.player)?));
            }
        }

        let mut best = ActionValue::leaf(if maximizing { i32::MIN } else { i32::MAX });
        let mut expanded = false;

        for (next, action) in self.game.successors(state) {
            expanded = true;

            let value = if self.config.use_transposition {
                self.cached_value(&next, depth, alpha, beta, maximizing)?
            } else {
                self.search_node(&next, depth + 1, alpha, beta, !maximizing)?.value
            };

            // 严格优于才替换：同值动作保留最先枚举者
            let improved = if maximizing {
                value > best.value
            } else {
                value < best.value
            };
            if improved {
                best = ActionValue::new(action, value);
            }

            if self.config.use_pruning {
                if maximizing {
                    if best.value >= beta {
                        return Ok(best); // Beta 截断
                    }
                    alpha = alpha.max(best.value);
                } else {
                    if best.value <= alpha {
                        return Ok(best); // Alpha 截断
                    }
                    beta = beta.min(best.value);
                }
            }
        }

        if !expanded {
            // 非终局局面必须有后继，否则是契约违反
            return Err(SearchError::MissingSuccessors);
        }

        Ok(best)
    }

    /// 经置换表求后继局面的价值
    ///
    /// 命中直接复用缓存价值；未命中则递归计算后存入。动作永远取当前
    /// 后继边，不从缓存取。
    fn cached_value(
        &mut self,
        state: &G::State,
        depth: u32,
        alpha: i32,
        beta: i32,
        maximizing: bool,
    ) -> Result<i32> {
        let key = self
            .game
            .position_key(state)
            .ok_or(SearchError::PositionKeyUnsupported)?;

        if let Some(value) = self.table.probe(key) {
            return Ok(value);
        }

        let value = self
            .search_node(state, depth + 1, alpha, beta, !maximizing)?
            .value;

        // 剪枝开启时只缓存精确值：严格落在子节点搜索窗口内部的价值
        // 才是真实的 minimax 价值，窗口边界上或以外的只是上/下界
        if !self.config.use_pruning || (alpha < value && value < beta) {
            self.table.store(key, value);
        }

        Ok(value)
    }
}
