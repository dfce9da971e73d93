use std::fmt::{Display, Formatter};

/// A geographic coordinate in decimal degrees.
///
/// This struct is an immutable value type. It crosses the routing wire,
/// therefore it derives the serde traits.
#[derive(Debug, PartialEq, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct Coordinate {
    /// Latitude in decimal degrees, positive north.
    lat: f64,
    /// Longitude in decimal degrees, positive east.
    lon: f64,
}

impl Coordinate {
    /// Creates a new coordinate from latitude and longitude in decimal degrees.
    ///
    /// # Arguments
    /// * `lat` - The latitude component.
    /// * `lon` - The longitude component.
    ///
    /// # Returns
    /// A new `Coordinate` value.
    pub const fn new(lat: f64, lon: f64) -> Self { Self { lat, lon } }

    /// Returns the latitude in decimal degrees.
    pub const fn lat(&self) -> f64 { self.lat }

    /// Returns the longitude in decimal degrees.
    pub const fn lon(&self) -> f64 { self.lon }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

impl From<(f64, f64)> for Coordinate {
    /// Creates a `Coordinate` from a `(lat, lon)` tuple.
    fn from(tuple: (f64, f64)) -> Self { Self::new(tuple.0, tuple.1) }
}
