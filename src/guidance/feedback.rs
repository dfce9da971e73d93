use super::session::NavigationSession;
use super::tracker::closest_path_index;
use crate::collaborators::haptics::HapticIntensity;
use crate::geo::Coordinate;
use crate::geo::math::bearing_degrees;
use std::time::Duration;

/// Cadence of the haptic feedback tick while navigating.
pub const HAPTIC_TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Cadence of the spoken clock-direction announcement while navigating.
pub const CLOCK_ANNOUNCE_INTERVAL: Duration = Duration::from_secs(15);

/// Minimum planar offset (~11 m) between the walker and a path point for
/// that point to serve as the arrow target. Anything closer is dominated
/// by bearing noise.
pub const MIN_TARGET_OFFSET_DEG: f64 = 0.0001;

/// Clock hours that mean "roughly straight ahead" and are not announced.
pub const SUPPRESSED_CLOCK_HOURS: [u32; 3] = [11, 12, 1];

/// Compass bearing from the walker to the point the arrow should aim at.
///
/// Scans the points after the one nearest the walker and picks the first
/// offset by more than `MIN_TARGET_OFFSET_DEG`, falling back to the path's
/// last point, or to the destination when no route is installed.
///
/// # Returns
/// The target bearing, or `None` when neither a route nor a destination
/// exists.
pub fn bearing_to_target(session: &NavigationSession) -> Option<f64> {
    let position = session.current_position();
    let path = session.route_path();
    if !path.is_empty() {
        let nearest = closest_path_index(path, position);
        let target = path[nearest + 1..]
            .iter()
            .find(|p| planar_offset_deg(position, **p) > MIN_TARGET_OFFSET_DEG)
            .copied()
            .unwrap_or(path[path.len() - 1]);
        return Some(bearing_degrees(position, target));
    }
    session.destination().map(|destination| bearing_degrees(position, destination))
}

/// Rotation of the on-screen arrow relative to the walker's heading.
///
/// With a known heading this is the target bearing in the walker's frame;
/// without one it is the absolute target bearing; without any target it
/// is `0.0`.
pub fn arrow_rotation(session: &NavigationSession) -> f64 {
    let Some(bearing) = bearing_to_target(session) else {
        return 0.0;
    };
    match session.heading() {
        Some(heading) => (bearing - heading).rem_euclid(360.0),
        None => bearing,
    }
}

/// Selects the haptic tier for the current tick.
///
/// # Returns
/// `None` when heading or target bearing is unavailable, so no tier fires.
pub fn haptic_tier(session: &NavigationSession) -> Option<HapticIntensity> {
    let heading = session.heading()?;
    let bearing = bearing_to_target(session)?;
    let rotation = (bearing - heading).rem_euclid(360.0);
    let normalized = rotation.min(360.0 - rotation).clamp(0.0, 180.0);
    Some(tier_for(normalized))
}

/// Maps a normalized angular error in `[0, 180]` onto an impact tier.
pub fn tier_for(normalized_angle: f64) -> HapticIntensity {
    if normalized_angle <= 10.0 {
        HapticIntensity::Heavy
    } else if normalized_angle <= 30.0 {
        HapticIntensity::Strong
    } else if normalized_angle <= 60.0 {
        HapticIntensity::Medium
    } else if normalized_angle <= 90.0 {
        HapticIntensity::Light
    } else {
        HapticIntensity::Faint
    }
}

/// Expresses an arrow rotation as an hour on the clock face, `0 -> 12`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn clock_hour(rotation: f64) -> u32 {
    let hour = ((rotation / 30.0).round() as u32) % 12;
    if hour == 0 { 12 } else { hour }
}

/// Derives the periodic clock-direction announcement.
///
/// # Returns
/// The announcement string, or `None` when the walker already faces the
/// target (hours 11, 12 and 1).
pub fn clock_announcement(session: &NavigationSession) -> Option<String> {
    let hour = clock_hour(arrow_rotation(session));
    if SUPPRESSED_CLOCK_HOURS.contains(&hour) {
        None
    } else {
        Some(format!("{hour}시 방향에 목적지가 있습니다"))
    }
}

fn planar_offset_deg(a: Coordinate, b: Coordinate) -> f64 {
    ((b.lat() - a.lat()).powi(2) + (b.lon() - a.lon()).powi(2)).sqrt()
}
