//! Drag gesture policy.
//!
//! Only the horizontal offset at release matters here; the visual side of
//! dragging lives in the card component.

/// What the pointer tracking reports when a card is let go.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragRelease {
    pub offset_x: f64,
}

pub const DEFAULT_MOVE_THRESHOLD: f64 = 100.0;

/// Column index a released card should go to, or `None` when the drag was
/// too short and the card springs back.
///
/// Drags past either edge clamp to the first or last column, so the result
/// can be the current column. Moving there is a no-op.
pub fn destination_column(
    current_index: usize,
    column_count: usize,
    release: DragRelease,
    threshold: f64,
) -> Option<usize> {
    if column_count == 0 || release.offset_x.abs() <= threshold {
        return None;
    }

    let last = column_count - 1;
    let target = if release.offset_x > 0.0 {
        current_index.saturating_add(1).min(last)
    } else {
        current_index.saturating_sub(1)
    };
    Some(target.min(last))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn released(offset_x: f64) -> DragRelease {
        DragRelease { offset_x }
    }

    #[test]
    fn short_drags_spring_back() {
        assert_eq!(destination_column(1, 3, released(0.0), DEFAULT_MOVE_THRESHOLD), None);
        assert_eq!(destination_column(1, 3, released(99.9), DEFAULT_MOVE_THRESHOLD), None);
        assert_eq!(destination_column(1, 3, released(-100.0), DEFAULT_MOVE_THRESHOLD), None);
        assert_eq!(destination_column(1, 3, released(100.0), DEFAULT_MOVE_THRESHOLD), None);
    }

    #[test]
    fn long_drags_step_one_column() {
        assert_eq!(destination_column(1, 3, released(100.5), DEFAULT_MOVE_THRESHOLD), Some(2));
        assert_eq!(destination_column(1, 3, released(-250.0), DEFAULT_MOVE_THRESHOLD), Some(0));
        // Distance beyond the threshold never skips columns.
        assert_eq!(destination_column(0, 3, released(900.0), DEFAULT_MOVE_THRESHOLD), Some(1));
    }

    #[test]
    fn edge_drags_clamp_to_current_column() {
        assert_eq!(destination_column(0, 3, released(-300.0), DEFAULT_MOVE_THRESHOLD), Some(0));
        assert_eq!(destination_column(2, 3, released(300.0), DEFAULT_MOVE_THRESHOLD), Some(2));
    }

    #[test]
    fn custom_threshold_is_honoured() {
        assert_eq!(destination_column(0, 3, released(30.0), 25.0), Some(1));
        assert_eq!(destination_column(0, 3, released(30.0), 50.0), None);
    }

    #[test]
    fn no_columns_means_no_destination() {
        assert_eq!(destination_column(0, 0, released(500.0), DEFAULT_MOVE_THRESHOLD), None);
    }
}
