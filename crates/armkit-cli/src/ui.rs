use armkit::engine::trajectory::{TIME_COLUMN, Trajectory};

/// Renders rows as a right-aligned, space separated table with a header line.
pub fn render_table(headers: &[String], rows: &[Vec<String>]) -> String {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            rows.iter()
                .filter_map(|r| r.get(i))
                .map(String::len)
                .chain(std::iter::once(h.len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let line = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(c, w)| format!("{:>w$}", c, w = w))
            .collect::<Vec<_>>()
            .join("  ")
    };

    let mut out = line(headers);
    out.push('\n');
    for row in rows {
        out.push_str(&line(row));
        out.push('\n');
    }
    out
}

/// Renders a trajectory with one row per time point.
pub fn render_trajectory(trajectory: &Trajectory) -> String {
    let headers: Vec<String> = std::iter::once(TIME_COLUMN)
        .chain(trajectory.column_names())
        .map(str::to_string)
        .collect();
    let rows: Vec<Vec<String>> = trajectory
        .times()
        .iter()
        .enumerate()
        .map(|(i, t)| {
            std::iter::once(format!("{:.4}", t))
                .chain(trajectory.columns().map(|(_, values)| format!("{:.6e}", values[i])))
                .collect()
        })
        .collect();
    render_table(&headers, &rows)
}
