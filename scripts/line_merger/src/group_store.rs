//! 该模块定义了 `GroupStore`，按前缀收集内容片段的有序容器。
//!
//! 主要职责包括：
//! 1. 以前缀第一次出现的顺序记录所有不同的前缀。
//! 2. 为每个前缀按输入顺序保存其全部内容片段。
//! 3. 将分组渲染为最终写入文件的文本。

use std::collections::HashMap;

/// 按前缀分组的内容片段。
///
/// 分组本身保存在 `Vec` 中以保持插入顺序，`HashMap` 只负责从前缀
/// 找到分组下标，因此每个前缀只会出现一次。
#[derive(Debug, Clone, Default)]
pub struct GroupStore {
    /// 按首次出现顺序排列的 (前缀, 片段列表)。
    groups: Vec<(String, Vec<String>)>,
    /// 前缀到 `groups` 下标的索引。
    index: HashMap<String, usize>,
}

impl GroupStore {
    /// 创建一个新的、空的 `GroupStore`。
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// 将一个内容片段追加到前缀对应的分组。
    ///
    /// 如果该前缀尚不存在，会在末尾新建一个分组。
    /// 空前缀和空片段都会被保留。
    pub fn add(&mut self, prefix: &str, fragment: &str) {
        let idx = match self.index.get(prefix) {
            Some(&idx) => idx,
            None => {
                let idx = self.groups.len();
                self.groups.push((prefix.to_string(), Vec::new()));
                self.index.insert(prefix.to_string(), idx);
                idx
            }
        };
        self.groups[idx].1.push(fragment.to_string());
    }

    /// 不同前缀的个数。
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// 消耗自身并渲染为最终输出文本。
    ///
    /// 每个分组一行，格式为 `前缀: 片段1 片段2 ...`，行之间以换行分隔，
    /// 末尾恰好一个换行。没有任何分组时返回 `"\n"`。
    #[must_use]
    pub fn into_output_string(self) -> String {
        let mut out = self
            .groups
            .into_iter()
            .map(|(prefix, fragments)| format!("{}: {}", prefix, fragments.join(" ")))
            .collect::<Vec<_>>()
            .join("\n");
        out.push('\n');
        out
    }
}
