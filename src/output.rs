//! Table rendering for parsed schedule expressions.

use crate::parser::ScheduleResult;

/// Label column width, plus one separating space. Labels longer than
/// this are not truncated, they push the value column right.
const LABEL_WIDTH: usize = 13;

/// Renders a parse result as an aligned label/value table.
///
/// One row per field in slot order, followed by a `command` row. Rows
/// are joined with newlines; there is no trailing newline.
///
/// # Examples
///
/// ```
/// let result = cronex::parse("0 0 1 1 0 /bin/true").unwrap();
/// let table = cronex::table(&result);
/// assert!(table.starts_with("minute        0\n"));
/// assert!(table.ends_with("command       /bin/true"));
/// ```
pub fn table(result: &ScheduleResult) -> String {
    let mut rows: Vec<String> = result
        .fields
        .iter()
        .map(|field| row(&field.label, &join_values(&field.values, " ")))
        .collect();
    rows.push(row("command", &result.command));
    rows.join("\n")
}

/// Formats one table row: a left-justified label padded to the label
/// column width, one space, then the value.
pub fn row(label: &str, value: &str) -> String {
    format!("{:<width$} {}", label, value, width = LABEL_WIDTH)
}

fn join_values(values: &[u32], sep: &str) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<String>>()
        .join(sep)
}
