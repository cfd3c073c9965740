//! 定义了行合并过程中使用的核心数据类型。

use std::{fmt, io, path::PathBuf};

use thiserror::Error;

//=============================================================================
// 1. 错误枚举
//=============================================================================

/// 定义合并过程中可能发生的错误。
///
/// 只有文件访问会失败；没有冒号的行不算错误，会被直接跳过。
#[derive(Error, Debug)]
pub enum MergeError {
    /// 无法打开或读取输入文件（包括内容不是合法的 UTF-8）。
    #[error("无法读取输入文件 {path:?}: {source}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// 无法创建或写入输出文件。
    #[error("无法写入输出文件 {path:?}: {source}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// 合并操作的结果别名。
pub type MergeResult<T> = Result<T, MergeError>;

//=============================================================================
// 2. 行结构
//=============================================================================

/// 一行被成功拆分后的结果。
///
/// `prefix` 和 `content` 都已去除首尾空白，借用自原始行。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedLine<'a> {
    /// 第一个冒号之前的文本
    pub prefix: &'a str,
    /// 第一个冒号之后的文本，可能还包含冒号
    pub content: &'a str,
}

//=============================================================================
// 3. 合并统计
//=============================================================================

/// 一次合并过程中收集到的计数。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// 读取到的总行数
    pub lines_read: usize,
    /// 含有冒号、被并入分组的行数
    pub lines_merged: usize,
    /// 没有冒号而被跳过的行数
    pub lines_skipped: usize,
    /// 输出的合并行数，即不同前缀的个数
    pub groups: usize,
}

impl fmt::Display for MergeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "共读取 {} 行，合并 {} 行，跳过 {} 行，输出 {} 个分组",
            self.lines_read, self.lines_merged, self.lines_skipped, self.groups
        )
    }
}
