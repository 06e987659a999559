//! Plain-text table rendering.
//!
//! Columns are separated by two spaces and underlined with dashes. A
//! column whose every cell parses as a number is right-aligned, anything
//! else is left-aligned.

fn is_numeric(cell: &str) -> bool {
    cell.trim().parse::<f64>().is_ok()
}

fn format_line<'a>(
    cells: impl Iterator<Item = &'a str>,
    widths: &[usize],
    numeric: &[bool],
) -> String {
    let line = cells
        .enumerate()
        .map(|(col, cell)| {
            if numeric[col] {
                format!("{cell:>width$}", width = widths[col])
            } else {
                format!("{cell:<width$}", width = widths[col])
            }
        })
        .collect::<Vec<_>>()
        .join("  ");
    line.trim_end().to_string()
}

pub fn render<H: AsRef<str>>(headers: &[H], rows: &[Vec<String>]) -> String {
    let columns = headers.len();
    let mut widths: Vec<usize> = headers
        .iter()
        .map(|h| h.as_ref().chars().count())
        .collect();
    let mut numeric = vec![!rows.is_empty(); columns];

    for row in rows {
        for (col, cell) in row.iter().take(columns).enumerate() {
            widths[col] = widths[col].max(cell.chars().count());
            numeric[col] &= is_numeric(cell);
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_line(headers.iter().map(|h| h.as_ref()), &widths, &numeric));
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  "),
    );
    for row in rows {
        lines.push(format_line(
            row.iter().take(columns).map(String::as_str),
            &widths,
            &numeric,
        ));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_left_numbers_right() {
        let rows = vec![
            vec!["outlook".to_string(), "0.246750".to_string()],
            vec!["temp".to_string(), "0.029223".to_string()],
        ];
        let out = render(&["attribute", "gain"], &rows);
        let expected = "\
attribute      gain
---------  --------
outlook    0.246750
temp       0.029223";
        assert_eq!(out, expected);
    }

    #[test]
    fn header_only_table() {
        let out = render(&["#", "class"], &[]);
        assert_eq!(out, "#  class\n-  -----");
    }

    #[test]
    fn mixed_column_is_left_aligned() {
        let rows = vec![vec!["10".to_string()], vec!["x".to_string()]];
        let out = render(&["v"], &rows);
        assert_eq!(out, "v\n--\n10\nx");
    }
}
