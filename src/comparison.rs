use crate::payloads::{DiffLine, DiffResult, DiffStats, LineKind};
use crate::text_processing::split_lines;
use std::time::Instant;
use tracing::debug;

/// Positional comparison of two text blobs.
///
/// Both line sequences are walked by shared index; there is no
/// alignment search, so a line inserted near the top shifts every
/// later position into `Modified`. Any two strings produce a result.
pub fn compare_lines(text_a: &str, text_b: &str) -> DiffResult {
    let start = Instant::now();

    let lines_a = split_lines(text_a);
    let lines_b = split_lines(text_b);

    let total_lines = lines_a.len().max(lines_b.len());
    let mut left_lines = Vec::with_capacity(total_lines);
    let mut right_lines = Vec::with_capacity(total_lines);

    let mut added = 0;
    let mut removed = 0;
    let mut modified = 0;

    for i in 0..total_lines {
        if i >= lines_a.len() {
            // Line only exists in text B (added)
            right_lines.push(DiffLine {
                content: lines_b[i].to_string(),
                kind: LineKind::Added,
                line_number: Some(i + 1),
            });
            left_lines.push(DiffLine {
                content: String::new(),
                kind: LineKind::Normal,
                line_number: None,
            });
            added += 1;
        } else if i >= lines_b.len() {
            // Line only exists in text A (removed)
            left_lines.push(DiffLine {
                content: lines_a[i].to_string(),
                kind: LineKind::Removed,
                line_number: Some(i + 1),
            });
            right_lines.push(DiffLine {
                content: String::new(),
                kind: LineKind::Normal,
                line_number: None,
            });
            removed += 1;
        } else if lines_a[i] == lines_b[i] {
            // Lines are identical
            left_lines.push(DiffLine {
                content: lines_a[i].to_string(),
                kind: LineKind::Normal,
                line_number: Some(i + 1),
            });
            right_lines.push(DiffLine {
                content: lines_b[i].to_string(),
                kind: LineKind::Normal,
                line_number: Some(i + 1),
            });
        } else {
            // Same position, different content
            left_lines.push(DiffLine {
                content: lines_a[i].to_string(),
                kind: LineKind::Modified,
                line_number: Some(i + 1),
            });
            right_lines.push(DiffLine {
                content: lines_b[i].to_string(),
                kind: LineKind::Modified,
                line_number: Some(i + 1),
            });
            modified += 1;
        }
    }

    let stats = DiffStats {
        added,
        removed,
        modified,
        similarity: similarity_percentage(total_lines, added + removed + modified),
    };

    debug!(
        total_lines,
        added,
        removed,
        modified,
        similarity = stats.similarity,
        duration_ms = start.elapsed().as_millis() as u64,
        "line comparison complete"
    );

    DiffResult {
        left_lines,
        right_lines,
        stats,
    }
}

fn similarity_percentage(total_lines: usize, changed: usize) -> u8 {
    if total_lines == 0 {
        return 100;
    }
    let unchanged = total_lines - changed;
    (unchanged as f64 / total_lines as f64 * 100.0).round() as u8
}
