#![allow(dead_code, clippy::similar_names)]
#![warn(clippy::shadow_reuse, clippy::shadow_same, clippy::builtin_type_shadow)]
mod collaborators;
mod geo;
mod guidance;
mod keychain;
mod logger;

use crate::collaborators::location::RouteWalker;
use crate::geo::Coordinate;
use crate::guidance::{GuidanceSupervisor, NavigationSession};
use crate::keychain::Keychain;
use std::{env, sync::Arc};
use tokio::sync::{RwLock, mpsc};

/// Average pedestrian speed used by the route walker.
const WALKING_SPEED_MPS: f64 = 1.4;

/// Seoul City Hall.
const DEFAULT_START: (f64, f64) = (37.5665, 126.9780);
/// Gyeongbokgung main gate.
const DEFAULT_DEST: (f64, f64) = (37.5796, 126.9770);

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() {
    let base_url_var = env::var("STROLL_BASE_URL");
    let base_url = base_url_var.as_ref().map_or("http://localhost:33000", |v| v.as_str());
    let start = coordinate_from_env("STROLL_START", DEFAULT_START);
    let destination = coordinate_from_env("STROLL_DEST", DEFAULT_DEST);

    let keychain = Keychain::new(base_url);
    info!("Fetching initial route from {start} to {destination}");
    let path = match keychain.routing().fetch_route(start, destination).await {
        Ok(p) => p,
        Err(e) => {
            warn!("Initial route fetch failed ({e}), guiding along a straight path");
            vec![start, destination]
        }
    };

    let mut session = NavigationSession::new(start, Some(destination));
    session.install_route(path.clone());
    info!(
        "Route installed with {} points and {} guides",
        session.route_path().len(),
        session.guides().len()
    );
    let session = Arc::new(RwLock::new(session));

    let supervisor = Arc::new(GuidanceSupervisor::new(
        Arc::clone(&session),
        keychain.routing(),
        keychain.haptics(),
        keychain.speech(),
    ));

    let (position_tx, position_rx) = mpsc::channel(16);
    let walker = RouteWalker::new(path, WALKING_SPEED_MPS);
    let walker_tok = supervisor.cancellation_token();
    tokio::spawn(async move {
        walker.run(position_tx, walker_tok).await;
    });

    Arc::clone(&supervisor).run(position_rx).await;
}

/// Reads a `"lat,lon"` coordinate from the environment, falling back to a
/// default when the variable is unset.
fn coordinate_from_env(var: &str, default: (f64, f64)) -> Coordinate {
    match env::var(var) {
        Ok(value) => {
            let mut parts = value.split(',').map(str::trim).map(str::parse::<f64>);
            match (parts.next(), parts.next()) {
                (Some(Ok(lat)), Some(Ok(lon))) => Coordinate::new(lat, lon),
                _ => fatal!("{var} must be \"lat,lon\", got \"{value}\""),
            }
        }
        Err(_) => Coordinate::from(default),
    }
}
