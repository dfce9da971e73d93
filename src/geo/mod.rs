pub(crate) mod coordinate;
pub(crate) mod math;
#[cfg(test)]
mod tests;

pub use coordinate::Coordinate;
