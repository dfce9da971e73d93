use crate::geo::Coordinate;
use crate::geo::math::{bearing_degrees, distance_meters};
use crate::info;
use rand::Rng;
use std::time::Duration;
use tokio::sync::mpsc::Sender;
use tokio_util::sync::CancellationToken;

/// Fixed cadence at which the location collaborator delivers fixes.
pub const LOCATION_UPDATE_INTERVAL: Duration = Duration::from_secs(5);

/// One position fix delivered by the location collaborator.
///
/// `heading` is the compass course in degrees and may be unavailable,
/// e.g. while the receiver is stationary.
#[derive(Debug, Clone, Copy)]
pub struct PositionUpdate {
    position: Coordinate,
    heading: Option<f64>,
}

impl PositionUpdate {
    pub const fn new(position: Coordinate, heading: Option<f64>) -> Self {
        Self { position, heading }
    }

    pub const fn position(&self) -> Coordinate { self.position }

    pub const fn heading(&self) -> Option<f64> { self.heading }
}

/// Replays a walk along a coordinate path at pedestrian speed, standing in
/// for a live GPS feed. Fixes carry a small jitter so downstream consumers
/// never see perfectly clean input.
pub struct RouteWalker {
    path: Vec<Coordinate>,
    speed_mps: f64,
}

impl RouteWalker {
    /// Magnitude of the per-fix coordinate jitter in degrees (~0.5 m).
    const FIX_JITTER_DEG: f64 = 0.5e-5;

    pub fn new(path: Vec<Coordinate>, speed_mps: f64) -> Self { Self { path, speed_mps } }

    /// Walks the path segment by segment, sending one `PositionUpdate` per
    /// `LOCATION_UPDATE_INTERVAL` until the path is exhausted or the token
    /// is cancelled.
    pub async fn run(self, tx: Sender<PositionUpdate>, c_tok: CancellationToken) {
        let step_m = self.speed_mps * LOCATION_UPDATE_INTERVAL.as_secs_f64();
        let mut segment = 0usize;
        let mut traveled_in_segment = 0.0f64;
        loop {
            if segment + 1 >= self.path.len() {
                info!("Route walker reached the end of its path");
                return;
            }
            let start = self.path[segment];
            let end = self.path[segment + 1];
            let segment_len = f64::from(distance_meters(start, end)).max(1.0);
            let fraction = (traveled_in_segment / segment_len).min(1.0);
            let heading = bearing_degrees(start, end);
            let fix = {
                let mut rng = rand::rng();
                let jitter = Self::FIX_JITTER_DEG;
                Coordinate::new(
                    start.lat()
                        + (end.lat() - start.lat()) * fraction
                        + rng.random_range(-jitter..jitter),
                    start.lon()
                        + (end.lon() - start.lon()) * fraction
                        + rng.random_range(-jitter..jitter),
                )
            };
            if tx.send(PositionUpdate::new(fix, Some(heading))).await.is_err() {
                return;
            }

            traveled_in_segment += step_m;
            while segment + 1 < self.path.len()
                && traveled_in_segment >= f64::from(distance_meters(self.path[segment], self.path[segment + 1])).max(1.0)
            {
                traveled_in_segment -=
                    f64::from(distance_meters(self.path[segment], self.path[segment + 1])).max(1.0);
                segment += 1;
            }

            tokio::select! {
                () = c_tok.cancelled() => return,
                () = tokio::time::sleep(LOCATION_UPDATE_INTERVAL) => {}
            }
        }
    }
}
