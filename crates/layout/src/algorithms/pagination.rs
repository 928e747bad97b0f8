pub struct BreakAnalysis {
    pub should_break: bool,
    pub remaining_height: f32,
}

// Absorbs float drift from summing line heights.
const EPSILON: f32 = 0.01;

/// Checks whether an element of `height` placed at `cursor_y` stays above
/// `content_bottom`.
pub fn check_fit(cursor_y: f32, height: f32, content_bottom: f32) -> BreakAnalysis {
    let available = (content_bottom - cursor_y).max(0.0);
    BreakAnalysis {
        should_break: height > available + EPSILON,
        remaining_height: available,
    }
}

/// True when the cursor has passed the block-level break line.
pub fn is_near_bottom(cursor_y: f32, break_line: f32) -> bool {
    cursor_y > break_line + EPSILON
}

/// Greedily takes leading rows while they fit in `available` after `header_height`.
///
/// Returns the number of rows taken. Zero means not even the first row fits.
pub fn rows_that_fit(header_height: f32, row_heights: &[f32], available: f32) -> usize {
    let mut used = header_height;
    let mut count = 0;
    for height in row_heights {
        if used + height > available + EPSILON {
            break;
        }
        used += height;
        count += 1;
    }
    count
}
