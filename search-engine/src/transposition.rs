//! 置换表
//!
//! 缓存本次搜索中已计算过的局面价值，避免经不同走法序列到达同一
//! 局面时重复展开。
//!
//! 生命周期为单次搜索调用：每次 `search_with` 开始时清空。价值绑定
//! 本次调用固定的最大化玩家视角，跨调用复用会得到错误结果。

use std::collections::HashMap;

use game_core::PositionKey;

/// 置换表
///
/// 从局面语义键到已计算价值的映射。只存价值不存动作：动作总是来自
/// 当前的后继边，缓存动作既多余又有陈旧风险。
#[derive(Debug, Default)]
pub struct TranspositionTable {
    /// 键 -> 价值
    entries: HashMap<PositionKey, i32>,
    /// 查询次数
    probes: u64,
    /// 命中次数
    hits: u64,
}

impl TranspositionTable {
    /// 创建空表
    pub fn new() -> Self {
        Self::default()
    }

    /// 查询键对应的价值
    pub fn probe(&mut self, key: PositionKey) -> Option<i32> {
        self.probes += 1;
        let value = self.entries.get(&key).copied();
        if value.is_some() {
            self.hits += 1;
        }
        value
    }

    /// 存储键对应的价值
    pub fn store(&mut self, key: PositionKey, value: i32) {
        self.entries.insert(key, value);
    }

    /// 清空表（每次新搜索开始时调用）
    pub fn clear(&mut self) {
        self.entries.clear();
        self.probes = 0;
        self.hits = 0;
    }

    /// 当前条目数
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 表是否为空
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 获取统计信息
    pub fn stats(&self) -> TableStats {
        TableStats {
            entries: self.entries.len(),
            probes: self.probes,
            hits: self.hits,
        }
    }
}

/// 置换表统计信息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableStats {
    pub entries: usize,
    pub probes: u64,
    pub hits: u64,
}

impl TableStats {
    /// 命中率
    pub fn hit_rate(&self) -> f64 {
        if self.probes == 0 {
            0.0
        } else {
            self.hits as f64 / self.probes as f64
        }
    }
}
