//! 将文本拆分为行，再将单行拆分为前缀和内容。

use crate::types::ParsedLine;

/// 分隔前缀与内容的字符。
pub const DELIMITER: u8 = b':';

/// 找到行中第一个冒号的字节位置。
///
/// 冒号是 ASCII 字符，不会出现在多字节 UTF-8 序列内部，
/// 所以返回的位置一定落在字符边界上。
fn find_first_delimiter(line: &str) -> Option<usize> {
    line.as_bytes().iter().position(|&b| b == DELIMITER)
}

/// 将文本拆分为行。
///
/// `\r\n`、`\n` 和单独的 `\r` 都视为行结束符。结尾的行结束符不会产生额外的空行。
#[must_use]
pub fn split_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut idx = 0;
    while idx < bytes.len() {
        match bytes[idx] {
            b'\n' => {
                lines.push(&text[start..idx]);
                idx += 1;
                start = idx;
            }
            b'\r' => {
                lines.push(&text[start..idx]);
                idx += if bytes.get(idx + 1) == Some(&b'\n') { 2 } else { 1 };
                start = idx;
            }
            _ => idx += 1,
        }
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

/// 解析一行文本。
///
/// # 参数
///
/// * `line` - 不含换行符的一行文本。
///
/// # 返回
///
/// * `Some(ParsedLine)` - 行中含有冒号，前缀和内容均已去除首尾空白。
/// * `None` - 行中没有冒号，调用方应跳过该行。
#[must_use]
pub fn parse_line(line: &str) -> Option<ParsedLine<'_>> {
    let pos = find_first_delimiter(line)?;
    Some(ParsedLine {
        prefix: line[..pos].trim(),
        content: line[pos + 1..].trim(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines_terminators() {
        assert_eq!(split_lines("a\nb\r\nc\rd"), vec!["a", "b", "c", "d"]);
        assert_eq!(split_lines("A: x\rB: y\rA: z\r"), vec!["A: x", "B: y", "A: z"]);
        assert_eq!(split_lines("a\n\nb\n"), vec!["a", "", "b"]);
        assert_eq!(split_lines("a\r\r\nb"), vec!["a", "", "b"]);
        assert_eq!(split_lines(""), Vec::<&str>::new());
        assert_eq!(split_lines("\n"), vec![""]);
    }

    #[test]
    fn test_parse_line_basic() {
        assert_eq!(
            parse_line("A: hello"),
            Some(ParsedLine {
                prefix: "A",
                content: "hello"
            })
        );
        assert_eq!(
            parse_line("  key  :   value with spaces  \r"),
            Some(ParsedLine {
                prefix: "key",
                content: "value with spaces"
            })
        );
    }

    #[test]
    fn test_parse_line_only_first_colon_splits() {
        let parsed = parse_line("time: 12:30:45").unwrap();
        assert_eq!(parsed.prefix, "time");
        assert_eq!(parsed.content, "12:30:45");
    }

    #[test]
    fn test_parse_line_without_colon() {
        assert_eq!(parse_line("no colon here"), None);
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line("   "), None);
    }

    #[test]
    fn test_parse_line_empty_parts() {
        let parsed = parse_line(": orphan").unwrap();
        assert_eq!(parsed.prefix, "");
        assert_eq!(parsed.content, "orphan");

        let parsed = parse_line("A:").unwrap();
        assert_eq!(parsed.prefix, "A");
        assert_eq!(parsed.content, "");
    }

    #[test]
    fn test_parse_line_multibyte() {
        let parsed = parse_line("歌手：不是冒号: 周杰伦").unwrap();
        assert_eq!(parsed.prefix, "歌手：不是冒号");
        assert_eq!(parsed.content, "周杰伦");
    }
}
