pub mod haptics;
pub mod location;
pub mod routing;
pub mod speech;
