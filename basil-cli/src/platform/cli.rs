//! CLI 格式化输出
//!
//! 提供命令行友好的错误显示和源码上下文打印。

use basil_api::BasilError;

/// 打印错误并显示源代码上下文
///
/// Prints `Kind: details`; when the error has a position and `source` is
/// known, the surrounding lines follow with a caret under the column.
pub fn print_error_with_source(e: &BasilError, source: Option<&str>) {
    eprintln!("{}", e.to_report());

    if let (Some(error_line), Some(col), Some(source)) = (e.line(), e.column(), source) {
        print_source_context(source, error_line, col);
    }
}

/// 打印源代码上下文（显示错误行前后几行）
pub fn print_source_context(source: &str, error_line: usize, error_col: usize) {
    const CONTEXT_LINES: usize = 2;

    let lines: Vec<&str> = source.lines().collect();
    let total_lines = lines.len();

    if error_line == 0 || error_line > total_lines {
        return;
    }

    let start_line = error_line.saturating_sub(CONTEXT_LINES).max(1);
    let end_line = (error_line + CONTEXT_LINES).min(total_lines);
    let width = end_line.to_string().len();

    eprintln!("{}|--", "-".repeat(width + 1));
    for line_idx in start_line..=end_line {
        eprintln!("{}", format_line(line_idx, lines[line_idx - 1], width));
        if line_idx == error_line {
            // 列号按字符计
            let marker = " ".repeat(error_col.saturating_sub(1));
            eprintln!("{} | {}^", " ".repeat(width), marker);
        }
    }
    eprintln!("{}|--", "-".repeat(width + 1));
}

/// Numbered source echo for `--show-source`, newline-terminated
pub fn source_listing(source: &str) -> String {
    let lines: Vec<&str> = source.lines().collect();
    let width = lines.len().max(1).to_string().len().max(3);
    let mut out = String::from("[Source]\n");
    for (i, line) in lines.iter().enumerate() {
        out.push_str(&format_line(i + 1, line, width));
        out.push('\n');
    }
    out.push_str("[Tokens]\n");
    out
}

/// `  3 | text`, right-aligned to `width`
pub fn format_line(number: usize, text: &str, width: usize) -> String {
    format!("{:>width$} | {}", number, text, width = width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_alignment() {
        assert_eq!(format_line(3, "1+1", 3), "  3 | 1+1");
        assert_eq!(format_line(12, "x", 2), "12 | x");
    }

    #[test]
    fn test_source_listing() {
        assert_eq!(
            source_listing("1+1\n'a'"),
            "[Source]\n  1 | 1+1\n  2 | 'a'\n[Tokens]\n"
        );
    }
}
