//! Bucket strip geometry
//!
//! The strip is split into equal-width slices across the full board width.

/// Slice index containing `x`, clamped into `[0, total - 1]`
///
/// Positions at or past either edge map to the outermost bucket. Zero
/// buckets, a non-positive width or a NaN position all yield 0.
pub fn bucket_index_for(x: f32, width: f32, total: usize) -> usize {
    if total == 0 || width.is_nan() || width <= 0.0 {
        return 0;
    }
    // NaN.max(0.0) is 0.0, and the float-to-int cast saturates
    let slice = (x / width * total as f32).floor().max(0.0);
    (slice as usize).min(total - 1)
}

/// Horizontal extent `(left, right)` of a bucket
pub fn bucket_bounds(index: usize, width: f32, total: usize) -> Option<(f32, f32)> {
    if index >= total {
        return None;
    }
    let slice = width / total as f32;
    Some((index as f32 * slice, (index + 1) as f32 * slice))
}

/// Horizontal center of a bucket
pub fn bucket_center(index: usize, width: f32, total: usize) -> Option<f32> {
    bucket_bounds(index, width, total).map(|(left, right)| (left + right) / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_reference_slices() {
        assert_eq!(bucket_index_for(0.0, 600.0, 13), 0);
        assert_eq!(bucket_index_for(300.0, 600.0, 13), 6);
        assert_eq!(bucket_index_for(599.9, 600.0, 13), 12);
    }

    #[test]
    fn test_edges_clamp() {
        assert_eq!(bucket_index_for(600.0, 600.0, 13), 12);
        assert_eq!(bucket_index_for(1e9, 600.0, 13), 12);
        assert_eq!(bucket_index_for(-5.0, 600.0, 13), 0);
        assert_eq!(bucket_index_for(f32::NEG_INFINITY, 600.0, 13), 0);
        assert_eq!(bucket_index_for(f32::INFINITY, 600.0, 13), 12);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(bucket_index_for(300.0, 600.0, 0), 0);
        assert_eq!(bucket_index_for(f32::NAN, 600.0, 13), 0);
        assert_eq!(bucket_index_for(300.0, 0.0, 13), 0);
    }

    #[test]
    fn test_bounds_cover_width() {
        let (left, _) = bucket_bounds(0, 600.0, 13).unwrap();
        let (_, right) = bucket_bounds(12, 600.0, 13).unwrap();
        assert_eq!(left, 0.0);
        assert!((right - 600.0).abs() < 1e-3);
        assert!(bucket_bounds(13, 600.0, 13).is_none());
    }

    #[test]
    fn test_center_maps_back() {
        for i in 0..13 {
            let x = bucket_center(i, 600.0, 13).unwrap();
            assert_eq!(bucket_index_for(x, 600.0, 13), i);
        }
    }

    proptest! {
        #[test]
        fn prop_index_always_in_range(x in any::<f32>(), total in 1usize..64) {
            let index = bucket_index_for(x, 600.0, total);
            prop_assert!(index < total);
        }
    }
}
