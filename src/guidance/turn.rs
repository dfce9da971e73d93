use crate::geo::math::signed_angle_diff;
use std::collections::HashMap;
use std::sync::LazyLock;
use strum_macros::EnumIter;

/// Angular difference below which a bearing change does not count as a turn.
pub const TURN_ANGLE_THRESHOLD_DEG: f64 = 15.0;

/// Boundary between a slight turn and a regular turn.
const SLIGHT_TURN_MAX_DEG: f64 = 45.0;

/// Boundary between a regular turn and a U-turn.
const REGULAR_TURN_MAX_DEG: f64 = 135.0;

/// The seven turn categories the classifier produces. There is no
/// unclassified state, every bearing change maps onto one of these.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, EnumIter)]
pub enum TurnType {
    Straight,
    SlightRight,
    Right,
    UTurnRight,
    SlightLeft,
    Left,
    UTurnLeft,
}

impl TurnType {
    /// Returns the spoken/displayed label for this turn.
    pub fn label(&self) -> &'static str { TURN_LABEL_LOOKUP[self] }

    /// Classifies the turn between two consecutive bearings.
    ///
    /// The signed difference is normalized into `(-180, 180]`; a positive
    /// rotation is labeled left, a negative one right.
    ///
    /// # Arguments
    /// * `prev_bearing` - The bearing of the segment entering the turn point.
    /// * `next_bearing` - The bearing of the segment leaving the turn point.
    ///
    /// # Returns
    /// The classified `TurnType`.
    pub fn classify(prev_bearing: f64, next_bearing: f64) -> Self {
        let diff = signed_angle_diff(prev_bearing, next_bearing);
        let abs_angle = diff.abs();
        if abs_angle < TURN_ANGLE_THRESHOLD_DEG {
            TurnType::Straight
        } else if diff > 0.0 {
            if abs_angle < SLIGHT_TURN_MAX_DEG {
                TurnType::SlightLeft
            } else if abs_angle < REGULAR_TURN_MAX_DEG {
                TurnType::Left
            } else {
                TurnType::UTurnLeft
            }
        } else if abs_angle < SLIGHT_TURN_MAX_DEG {
            TurnType::SlightRight
        } else if abs_angle < REGULAR_TURN_MAX_DEG {
            TurnType::Right
        } else {
            TurnType::UTurnRight
        }
    }
}

static TURN_LABEL_LOOKUP: LazyLock<HashMap<TurnType, &'static str>> = LazyLock::new(|| {
    let mut lookup = HashMap::new();
    let labels = vec![
        (TurnType::Straight, "직진"),
        (TurnType::SlightRight, "약간 우회전"),
        (TurnType::Right, "우회전"),
        (TurnType::UTurnRight, "우측 유턴"),
        (TurnType::SlightLeft, "약간 좌회전"),
        (TurnType::Left, "좌회전"),
        (TurnType::UTurnLeft, "좌측 유턴"),
    ];

    for (turn, label) in labels {
        lookup.insert(turn, label);
    }
    lookup
});
