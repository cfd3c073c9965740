//! 读取输入文件、按前缀合并并写出结果。

use std::fs;
use std::path::Path;

use crate::group_store::GroupStore;
use crate::line_parser::{parse_line, split_lines};
use crate::types::{MergeError, MergeReport, MergeResult};

/// 在内存中合并一段文本。
///
/// 文本按 `\r\n`、`\n` 或单独的 `\r` 拆分成行，没有冒号的行会被跳过。
///
/// # 返回
///
/// 返回 (输出文本, 合并统计)。输出文本总以一个换行结尾。
#[must_use]
pub fn merge_content(text: &str) -> (String, MergeReport) {
    let mut store = GroupStore::new();
    let mut report = MergeReport::default();

    for (line_idx, line) in split_lines(text).into_iter().enumerate() {
        report.lines_read += 1;
        match parse_line(line) {
            Some(parsed) => {
                store.add(parsed.prefix, parsed.content);
                report.lines_merged += 1;
            }
            None => {
                log::debug!("第 {} 行没有冒号，已跳过: {:?}", line_idx + 1, line);
                report.lines_skipped += 1;
            }
        }
    }

    report.groups = store.group_count();
    (store.into_output_string(), report)
}

/// 合并 `input` 文件中的行，并将结果写入 `output`。
///
/// `output` 会被创建或覆盖，`input` 不会被修改。
/// 读取失败时不会触碰 `output`。
///
/// # Errors
///
/// * `MergeError::ReadInput` - 输入文件不存在、不可读或不是 UTF-8 文本。
/// * `MergeError::WriteOutput` - 输出路径无法打开或写入。
pub fn merge(input: &Path, output: &Path) -> MergeResult<MergeReport> {
    log::info!("正在读取输入文件: {:?}", input);
    let text = fs::read_to_string(input).map_err(|source| MergeError::ReadInput {
        path: input.to_path_buf(),
        source,
    })?;

    let (merged, report) = merge_content(&text);
    log::info!("{report}");

    log::info!("正在将结果写入文件: {:?}", output);
    fs::write(output, merged).map_err(|source| MergeError::WriteOutput {
        path: output.to_path_buf(),
        source,
    })?;

    Ok(report)
}
