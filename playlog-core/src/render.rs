use std::io::{self, Write};

/// Width of every header column: the longest cell (in chars) among the
/// header and all rows.
pub fn column_widths<R: AsRef<[String]>>(header: &[String], rows: &[R]) -> Vec<usize> {
    header
        .iter()
        .enumerate()
        .map(|(i, name)| {
            rows.iter()
                .filter_map(|r| r.as_ref().get(i))
                .map(|cell| cell.chars().count())
                .fold(name.chars().count(), usize::max)
        })
        .collect()
}

/// `+----+---+` with `joint = '+'`, `|----|---|` with `joint = '|'`.
pub fn separator(widths: &[usize], joint: char) -> String {
    let mut s = String::new();
    s.push(joint);
    for w in widths {
        s.push_str(&"-".repeat(*w));
        s.push(joint);
    }
    s
}

pub fn line(cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, w)| format!("{cell:<w$}"))
        .collect();
    format!("|{}|", padded.join("|"))
}

/// Widths are computed over `all_rows` so the layout does not depend on the
/// order in which `rows` are printed.
pub fn write_table<W: Write>(
    out: &mut W,
    header: &[String],
    all_rows: &[Vec<String>],
    rows: &[&Vec<String>],
) -> io::Result<()> {
    let widths = column_widths(header, all_rows);
    writeln!(out, "{}", separator(&widths, '+'))?;
    writeln!(out, "{}", line(header, &widths))?;
    writeln!(out, "{}", separator(&widths, '|'))?;
    for row in rows {
        writeln!(out, "{}", line(row, &widths))?;
    }
    writeln!(out, "{}", separator(&widths, '+'))
}
