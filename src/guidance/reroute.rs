use super::session::NavigationSession;
use super::tracker;
use crate::collaborators::haptics::HapticSink;
use crate::collaborators::routing::RouteProvider;
use crate::geo::Coordinate;
use crate::geo::math::distance_meters;
use crate::{error, info, warn};
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;

/// Distance from the nearest route point beyond which the walker counts as
/// off-route.
pub const DEVIATION_THRESHOLD_M: u32 = 30;

/// Watches each position fix for route deviation and orchestrates the
/// single-flight recalculation against the routing collaborator.
pub struct RerouteCoordinator {
    session: Arc<RwLock<NavigationSession>>,
    routing: Arc<dyn RouteProvider>,
    haptics: Arc<dyn HapticSink>,
    c_tok: CancellationToken,
}

impl RerouteCoordinator {
    pub fn new(
        session: Arc<RwLock<NavigationSession>>,
        routing: Arc<dyn RouteProvider>,
        haptics: Arc<dyn HapticSink>,
        c_tok: CancellationToken,
    ) -> Self {
        Self { session, routing, haptics, c_tok }
    }

    /// Evaluates one position fix.
    ///
    /// Refreshes the remaining distance and the instruction, recomputes the
    /// deviation flag (never sticky) and, on a fresh deviation, fires the
    /// warning haptic and issues exactly one reroute request. While a
    /// request is in flight further fixes are absorbed unchanged.
    pub async fn evaluate(&self, position: Coordinate) {
        let mut session = self.session.write().await;
        let Some(destination) = session.destination() else { return };
        if session.route_path().is_empty() || session.is_recalculating() {
            return;
        }

        session.set_distance_remaining(distance_meters(position, destination));
        if let Some(instruction) = tracker::instruction_for(&session, position) {
            session.set_instruction(instruction);
        }

        let min_dist_to_path = session
            .route_path()
            .iter()
            .map(|p| distance_meters(position, *p))
            .min()
            .unwrap_or(u32::MAX);

        if min_dist_to_path > DEVIATION_THRESHOLD_M {
            session.set_deviation(true);
            session.begin_recalculation();
            drop(session);
            self.haptics.warning();
            warn!("Off route by {min_dist_to_path}m, requesting recalculation");
            self.spawn_reroute(position, destination);
        } else {
            session.set_deviation(false);
        }
    }

    /// Issues the asynchronous reroute request. The task resolves the
    /// session either with the fetched path or with the two-point straight
    /// fallback; a failure never reaches the caller. Cancelling the token
    /// drops the task before it can touch a torn-down session.
    fn spawn_reroute(&self, origin: Coordinate, destination: Coordinate) {
        let session = Arc::clone(&self.session);
        let routing = Arc::clone(&self.routing);
        let c_tok = self.c_tok.clone();
        tokio::spawn(async move {
            let fetched = tokio::select! {
                () = c_tok.cancelled() => return,
                res = routing.fetch_route(origin, destination) => res,
            };
            let mut session = session.write().await;
            match fetched {
                Ok(path) if !path.is_empty() => {
                    info!("Recalculated route with {} points", path.len());
                    session.install_route(path);
                }
                Ok(_) => {
                    error!("Routing returned an empty path, falling back to a straight route");
                    session.install_route(vec![origin, destination]);
                }
                Err(e) => {
                    error!("Recalculation failed ({e}), falling back to a straight route");
                    session.install_route(vec![origin, destination]);
                }
            }
            session.finish_recalculation();
        });
    }
}
