use super::guide::Guide;
use super::turn::{TURN_ANGLE_THRESHOLD_DEG, TurnType};
use crate::geo::Coordinate;
use crate::geo::math::{bearing_degrees, distance_meters, signed_angle_diff};
use itertools::Itertools;

/// Minimum length of the segment entering a turn for that turn to get its
/// own guide. Sharp turns on shorter segments are merged into the next one,
/// which swallows closely spaced direction noise.
pub const MIN_TURN_SPACING_M: u32 = 20;

/// Converts an ordered path of coordinates into an ordered list of turn
/// guides.
///
/// Interior points are scanned in path order. Straight stretches only add
/// to the running accumulated distance; a qualifying bearing change emits a
/// guide carrying the accumulated distance plus the entering segment.
///
/// # Arguments
/// * `path` - The route coordinates. Fewer than 3 points yield no guides.
///
/// # Returns
/// The guides in strictly increasing `path_index` order.
pub fn generate_guides(path: &[Coordinate]) -> Vec<Guide> {
    if path.len() < 3 {
        return Vec::new();
    }
    let mut guides = Vec::new();
    let mut accumulated_m: u32 = 0;
    for (i, (prev, cur, next)) in path.iter().tuple_windows().enumerate() {
        let path_index = i + 1;
        let prev_bearing = bearing_degrees(*prev, *cur);
        let next_bearing = bearing_degrees(*cur, *next);
        let abs_angle = signed_angle_diff(prev_bearing, next_bearing).abs();
        let segment_m = distance_meters(*prev, *cur);

        if abs_angle < TURN_ANGLE_THRESHOLD_DEG {
            accumulated_m += segment_m;
            continue;
        }

        if segment_m >= MIN_TURN_SPACING_M || guides.is_empty() {
            let turn = TurnType::classify(prev_bearing, next_bearing);
            guides.push(Guide::new(*cur, accumulated_m + segment_m, turn, path_index));
            accumulated_m = 0;
        } else {
            // Sharp but too close to the previous turn, fold into the next.
            accumulated_m += segment_m;
        }
    }
    guides
}
