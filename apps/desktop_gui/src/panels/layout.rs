//! Flow-layout helpers shared by the panel builder and the renderer.

/// Splits `tags` into consecutive rows of at most `per_row` entries.
pub fn tag_rows(tags: &[String], per_row: usize) -> Vec<Vec<String>> {
    tags.chunks(per_row.max(1))
        .map(|row| row.to_vec())
        .collect()
}

/// Left edges of `widths` laid out left-to-right with `gap` between items,
/// with the whole group centered in `available`. A group wider than the
/// available space starts at zero.
pub fn centered_row_offsets(available: f32, widths: &[f32], gap: f32) -> Vec<f32> {
    let total = group_width(widths, gap);
    let mut x = ((available - total) / 2.0).max(0.0);
    widths
        .iter()
        .map(|width| {
            let left = x;
            x += width + gap;
            left
        })
        .collect()
}

pub fn group_width(widths: &[f32], gap: f32) -> f32 {
    let gaps = widths.len().saturating_sub(1) as f32 * gap;
    widths.iter().sum::<f32>() + gaps
}
