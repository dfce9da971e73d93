use super::turn::TurnType;
use crate::geo::Coordinate;

/// One turn instruction anchored to a point on the route.
///
/// `path_index` is the index of `position` in the originating path; the
/// extractor emits guides in strictly increasing `path_index` order.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Guide {
    position: Coordinate,
    cumulative_distance_m: u32,
    turn_type: TurnType,
    path_index: usize,
}

impl Guide {
    pub const fn new(
        position: Coordinate,
        cumulative_distance_m: u32,
        turn_type: TurnType,
        path_index: usize,
    ) -> Self {
        Self { position, cumulative_distance_m, turn_type, path_index }
    }

    pub const fn position(&self) -> Coordinate { self.position }

    pub const fn cumulative_distance_m(&self) -> u32 { self.cumulative_distance_m }

    pub const fn turn_type(&self) -> TurnType { self.turn_type }

    pub const fn path_index(&self) -> usize { self.path_index }
}
