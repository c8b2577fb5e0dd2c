//! Release-time snap resolution.
//!
//! When a pointer lifts mid-interval the cursor must pick a mark: nearest
//! wins, with an anti-collision override so two independent snaps can never
//! land both cursors on the same mark. The exact-halfway offset decides
//! nothing at all; the cursor keeps its fractional position. That gap is
//! long-standing behavior and is kept on purpose (see DESIGN.md).

use crate::cursor::CursorSide;

/// Decides which mark a just-released cursor should snap to.
///
/// Returns `None` when no snap should start: the cursor already rests
/// exactly on a mark, or the fractional offset is exactly 0.5.
///
/// `other_target` is the counterpart cursor's current target mark (its
/// settled index, or its animation target while one is in flight — the two
/// are kept equal by the coordinator). When the candidate would land on it
/// and the cursors are within one mark of each other, the released cursor
/// yields: the left cursor falls back to `floor`, the right cursor to
/// `ceil`.
pub fn resolve_release_target(
    side: CursorSide,
    continuous: f32,
    other_continuous: f32,
    other_target: usize,
) -> Option<usize> {
    let lower = continuous.floor();
    let higher = continuous.ceil();
    let offset = continuous - lower;

    if offset == 0.0 {
        return None;
    }

    match side {
        CursorSide::Left => {
            if offset < 0.5 {
                // Moving down never collides: the right cursor sits above.
                Some(lower as usize)
            } else if offset > 0.5 {
                let mut next = higher as usize;
                if (continuous - other_continuous).abs() <= 1.0 && next == other_target {
                    next = lower as usize;
                }
                Some(next)
            } else {
                None
            }
        }
        CursorSide::Right => {
            if offset > 0.5 {
                Some(higher as usize)
            } else if offset < 0.5 {
                let mut next = lower as usize;
                if (continuous - other_continuous).abs() <= 1.0 && next == other_target {
                    next = higher as usize;
                }
                Some(next)
            } else {
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_left_snaps_to_nearest_mark() {
        assert_eq!(
            resolve_release_target(CursorSide::Left, 2.3, 5.0, 5),
            Some(2)
        );
        assert_eq!(
            resolve_release_target(CursorSide::Left, 2.6, 5.0, 5),
            Some(3)
        );
    }

    #[test]
    fn test_right_snaps_to_nearest_mark() {
        assert_eq!(
            resolve_release_target(CursorSide::Right, 3.7, 0.0, 0),
            Some(4)
        );
        assert_eq!(
            resolve_release_target(CursorSide::Right, 3.2, 0.0, 0),
            Some(3)
        );
    }

    #[test]
    fn test_integral_position_decides_nothing() {
        assert_eq!(resolve_release_target(CursorSide::Left, 2.0, 5.0, 5), None);
        assert_eq!(resolve_release_target(CursorSide::Right, 4.0, 1.0, 1), None);
    }

    #[test]
    fn test_exact_midpoint_decides_nothing() {
        // Documents the preserved halfway gap: a release at exactly .5
        // keeps the fractional position with no snap in either direction.
        assert_eq!(resolve_release_target(CursorSide::Left, 2.5, 5.0, 5), None);
        assert_eq!(resolve_release_target(CursorSide::Right, 2.5, 0.0, 0), None);
    }

    #[test]
    fn test_left_yields_lower_when_target_collides() {
        // Right sits on mark 3; left released at 2.7 would round to 3.
        assert_eq!(
            resolve_release_target(CursorSide::Left, 2.7, 3.0, 3),
            Some(2)
        );
        // Same rounding with the right cursor far away goes through.
        assert_eq!(
            resolve_release_target(CursorSide::Left, 2.7, 5.0, 5),
            Some(3)
        );
    }

    #[test]
    fn test_right_yields_higher_when_target_collides() {
        // Left sits on mark 2; right released at 2.3 would round to 2.
        assert_eq!(
            resolve_release_target(CursorSide::Right, 2.3, 2.0, 2),
            Some(3)
        );
        assert_eq!(
            resolve_release_target(CursorSide::Right, 2.3, 0.0, 0),
            Some(2)
        );
    }

    #[test]
    fn test_collision_override_needs_proximity() {
        // Candidate equals the other target but the cursors are more than
        // one mark apart: no override.
        assert_eq!(
            resolve_release_target(CursorSide::Left, 2.7, 4.2, 3),
            Some(3)
        );
    }
}
