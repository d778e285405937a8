//! Plain-text table layout for the view page.

const COLUMN_GAP: &str = "  ";

/// Lays out `headers` and `rows` as aligned text lines.
///
/// The second line is a dash rule under each header. Line breaks inside a
/// cell are flattened to spaces so every record stays on one line.
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> Vec<String> {
    let rows: Vec<Vec<String>> = rows
        .iter()
        .map(|row| row.iter().map(|cell| flatten(cell)).collect())
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let rule: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(join_padded(headers.iter().copied(), &widths));
    lines.push(join_padded(rule.iter().map(String::as_str), &widths));
    for row in &rows {
        lines.push(join_padded(row.iter().map(String::as_str), &widths));
    }
    lines
}

fn join_padded<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    padded.join(COLUMN_GAP).trim_end().to_string()
}

fn flatten(cell: &str) -> String {
    cell.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::render_table;

    #[test]
    fn columns_align_to_widest_cell() {
        let rows = vec![
            vec!["1".to_string(), "Radio".to_string()],
            vec!["12".to_string(), "Pump".to_string()],
        ];
        let lines = render_table(&["ID", "Item"], &rows);
        assert_eq!(
            lines,
            vec![
                "ID  Item".to_string(),
                "--  -----".to_string(),
                "1   Radio".to_string(),
                "12  Pump".to_string(),
            ]
        );
    }

    #[test]
    fn multi_line_cells_are_flattened() {
        let rows = vec![vec!["No power\nafter drop".to_string()]];
        let lines = render_table(&["Problem"], &rows);
        assert_eq!(lines[2], "No power after drop");
    }
}
