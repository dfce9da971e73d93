use super::guide::Guide;
use super::session::NavigationSession;
use super::turn::TurnType;
use crate::geo::Coordinate;
use crate::geo::math::distance_meters;

/// Guides farther away than this are not worth announcing yet.
pub const GUIDE_RELEVANCE_CAP_M: u32 = 1000;

/// Below this rounded distance the turn is imminent and announced without
/// a distance figure.
pub const IMMINENT_TURN_M: u32 = 10;

/// Within this distance of the destination the walker has arrived.
pub const ARRIVAL_RADIUS_M: u32 = 5;

/// Spoken and displayed when the walker reaches the destination.
pub const ARRIVAL_INSTRUCTION: &str = "목적지에 도착했습니다";

/// Derives the current human-readable instruction for the walker.
///
/// Pure given the session and position; `None` means the instruction
/// should stay unchanged.
///
/// # Arguments
/// * `session` - The active navigation session.
/// * `position` - The walker's current position.
///
/// # Returns
/// The new instruction string, or `None` to leave the current one as is.
pub fn instruction_for(session: &NavigationSession, position: Coordinate) -> Option<String> {
    if let Some(destination) = session.destination() {
        if distance_meters(position, destination) <= ARRIVAL_RADIUS_M {
            return Some(String::from(ARRIVAL_INSTRUCTION));
        }
    }

    if session.guides().is_empty() || session.route_path().is_empty() {
        return direct_to_destination(session, position);
    }

    let closest_path_index = closest_path_index(session.route_path(), position);
    let next_guide = session
        .guides()
        .iter()
        .filter(|g| g.path_index() > closest_path_index)
        .min_by_key(|g| distance_meters(position, g.position()))
        .or_else(|| {
            // Past every remaining guide, fall back to the globally closest.
            session.guides().iter().min_by_key(|g| distance_meters(position, g.position()))
        });

    if let Some(guide) = next_guide {
        let guide_dist = distance_meters(position, guide.position());
        if guide_dist < GUIDE_RELEVANCE_CAP_M {
            return Some(format_guide_instruction(guide, guide_dist));
        }
    }
    direct_to_destination(session, position)
}

/// Returns whether an instruction is the generic go-straight filler. Filler
/// text is shown on screen but withheld from the speech collaborator so a
/// long straight stretch does not spam the walker.
pub fn is_straight_filler(instruction: &str) -> bool {
    instruction.ends_with(TurnType::Straight.label())
}

fn direct_to_destination(session: &NavigationSession, position: Coordinate) -> Option<String> {
    let destination = session.destination()?;
    let remaining = distance_meters(position, destination);
    if remaining > 0 {
        Some(format!("{remaining}m 앞 {}", TurnType::Straight.label()))
    } else {
        None
    }
}

/// Index of the path point closest to `position`, first occurrence wins.
pub(crate) fn closest_path_index(path: &[Coordinate], position: Coordinate) -> usize {
    let mut closest = 0;
    let mut closest_dist = u32::MAX;
    for (i, point) in path.iter().enumerate() {
        let dist = distance_meters(position, *point);
        if dist < closest_dist {
            closest = i;
            closest_dist = dist;
        }
    }
    closest
}

fn format_guide_instruction(guide: &Guide, guide_dist: u32) -> String {
    let rounded = ((guide_dist + 5) / 10) * 10;
    if rounded < IMMINENT_TURN_M {
        format!("잠시 후 {}", guide.turn_type().label())
    } else {
        format!("{rounded}m 앞 {}", guide.turn_type().label())
    }
}
