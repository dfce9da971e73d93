use super::coordinate::Coordinate;

/// Mean Earth radius in meters used for the haversine distance.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Computes the haversine great-circle distance between two coordinates.
///
/// The `asin` argument is clamped to `[-1, 1]` so floating rounding can
/// never produce a NaN central angle.
///
/// # Arguments
/// * `a` - The first coordinate.
/// * `b` - The second coordinate.
///
/// # Returns
/// The distance in meters, rounded to the nearest meter.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn distance_meters(a: Coordinate, b: Coordinate) -> u32 {
    let d_lat = (b.lat() - a.lat()).to_radians();
    let d_lon = (b.lon() - a.lon()).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat().to_radians().cos() * b.lat().to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let central_angle = 2.0 * h.sqrt().clamp(-1.0, 1.0).asin();
    (EARTH_RADIUS_M * central_angle).round() as u32
}

/// Computes the initial bearing from `a` towards `b`.
///
/// # Arguments
/// * `a` - The origin coordinate.
/// * `b` - The target coordinate.
///
/// # Returns
/// The compass bearing in degrees within `[0, 360)`. The bearing from a
/// point to itself is defined as `0.0` rather than NaN.
pub fn bearing_degrees(a: Coordinate, b: Coordinate) -> f64 {
    if a == b {
        return 0.0;
    }
    let lat_a = a.lat().to_radians();
    let lat_b = b.lat().to_radians();
    let d_lon = (b.lon() - a.lon()).to_radians();
    let y = d_lon.sin() * lat_b.cos();
    let x = lat_a.cos() * lat_b.sin() - lat_a.sin() * lat_b.cos() * d_lon.cos();
    y.atan2(x).to_degrees().rem_euclid(360.0)
}

/// Normalizes the signed angular difference between two bearings into
/// `(-180, 180]`.
///
/// # Arguments
/// * `from` - The bearing rotated away from, in degrees.
/// * `to` - The bearing rotated towards, in degrees.
///
/// # Returns
/// The signed rotation in degrees within `(-180, 180]`.
pub fn signed_angle_diff(from: f64, to: f64) -> f64 {
    let diff = (to - from).rem_euclid(360.0);
    if diff > 180.0 { diff - 360.0 } else { diff }
}
