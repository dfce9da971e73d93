use super::coordinate::Coordinate;
use super::math::{bearing_degrees, distance_meters, signed_angle_diff};
use rand::Rng;

fn random_coordinate() -> Coordinate {
    let mut rng = rand::rng();
    Coordinate::new(rng.random_range(-80.0..80.0), rng.random_range(-180.0..180.0))
}

#[test]
fn test_distance_to_self_is_zero() {
    for _ in 0..50 {
        let c = random_coordinate();
        assert_eq!(distance_meters(c, c), 0);
    }
}

#[test]
fn test_distance_is_symmetric() {
    for _ in 0..50 {
        let a = random_coordinate();
        let b = random_coordinate();
        assert_eq!(distance_meters(a, b), distance_meters(b, a));
    }
}

#[test]
fn test_distance_one_degree_of_latitude() {
    let a = Coordinate::new(0.0, 0.0);
    let b = Coordinate::new(1.0, 0.0);
    let dist = distance_meters(a, b);
    // One degree of latitude on the 6371 km sphere is ~111.2 km.
    assert!((111_000..=111_400).contains(&dist), "got {dist}m");
}

#[test]
fn test_bearing_range_and_self() {
    for _ in 0..50 {
        let a = random_coordinate();
        let b = random_coordinate();
        let bearing = bearing_degrees(a, b);
        assert!((0.0..360.0).contains(&bearing), "got {bearing}");
    }
    let c = random_coordinate();
    assert_eq!(bearing_degrees(c, c), 0.0);
}

#[test]
fn test_bearing_cardinal_directions() {
    let origin = Coordinate::new(0.0, 0.0);
    assert!((bearing_degrees(origin, Coordinate::new(1.0, 0.0)) - 0.0).abs() < 0.1);
    assert!((bearing_degrees(origin, Coordinate::new(0.0, 1.0)) - 90.0).abs() < 0.1);
    assert!((bearing_degrees(origin, Coordinate::new(-1.0, 0.0)) - 180.0).abs() < 0.1);
    assert!((bearing_degrees(origin, Coordinate::new(0.0, -1.0)) - 270.0).abs() < 0.1);
}

#[test]
fn test_signed_angle_diff_normalization() {
    assert!((signed_angle_diff(350.0, 10.0) - 20.0).abs() < f64::EPSILON);
    assert!((signed_angle_diff(10.0, 350.0) + 20.0).abs() < f64::EPSILON);
    assert!((signed_angle_diff(0.0, 180.0) - 180.0).abs() < f64::EPSILON);
    assert!((signed_angle_diff(90.0, 90.0)).abs() < f64::EPSILON);
    for _ in 0..50 {
        let mut rng = rand::rng();
        let from = rng.random_range(0.0..360.0);
        let to = rng.random_range(0.0..360.0);
        let diff = signed_angle_diff(from, to);
        assert!(diff > -180.0 && diff <= 180.0, "got {diff}");
    }
}
