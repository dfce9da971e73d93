use super::feedback::{self, CLOCK_ANNOUNCE_INTERVAL, HAPTIC_TICK_INTERVAL};
use super::reroute::RerouteCoordinator;
use super::session::NavigationSession;
use super::tracker::{self, ARRIVAL_RADIUS_M};
use crate::collaborators::haptics::HapticSink;
use crate::collaborators::location::PositionUpdate;
use crate::collaborators::routing::RouteProvider;
use crate::collaborators::speech::SpeechSink;
use crate::{event, info};
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::sync::mpsc::Receiver;
use tokio::time::{Instant, interval_at};
use tokio_util::sync::CancellationToken;

/// Owns one running guidance session: consumes the location collaborator's
/// fixes, drives the reroute coordinator and runs the 100 ms haptic tick
/// and the 15 s clock announcement on one shared cancellation token, so
/// stopping guidance tears everything down together.
pub struct GuidanceSupervisor {
    session: Arc<RwLock<NavigationSession>>,
    reroute: RerouteCoordinator,
    haptics: Arc<dyn HapticSink>,
    speech: Arc<dyn SpeechSink>,
    c_tok: CancellationToken,
}

impl GuidanceSupervisor {
    /// Creates a supervisor for the given session and collaborators.
    pub fn new(
        session: Arc<RwLock<NavigationSession>>,
        routing: Arc<dyn RouteProvider>,
        haptics: Arc<dyn HapticSink>,
        speech: Arc<dyn SpeechSink>,
    ) -> Self {
        let c_tok = CancellationToken::new();
        let reroute = RerouteCoordinator::new(
            Arc::clone(&session),
            routing,
            Arc::clone(&haptics),
            c_tok.clone(),
        );
        Self { session, reroute, haptics, speech, c_tok }
    }

    pub fn session(&self) -> Arc<RwLock<NavigationSession>> { Arc::clone(&self.session) }

    pub fn cancellation_token(&self) -> CancellationToken { self.c_tok.clone() }

    /// Stops guidance. All periodic tasks and any in-flight reroute fall
    /// out of their loops on the shared token.
    pub fn stop(&self) { self.c_tok.cancel(); }

    /// Runs the guidance loop until the session is stopped.
    ///
    /// Position fixes are processed strictly sequentially; the two feedback
    /// ticks only ever read the session.
    pub async fn run(self: Arc<Self>, mut position_rx: Receiver<PositionUpdate>) {
        let mut haptic_tick =
            interval_at(Instant::now() + HAPTIC_TICK_INTERVAL, HAPTIC_TICK_INTERVAL);
        let mut announce_tick =
            interval_at(Instant::now() + CLOCK_ANNOUNCE_INTERVAL, CLOCK_ANNOUNCE_INTERVAL);
        let mut last_spoken: Option<String> = None;
        loop {
            tokio::select! {
                () = self.c_tok.cancelled() => {
                    info!("Guidance stopped, feedback ticks torn down");
                    return;
                }
                Some(update) = position_rx.recv() => {
                    self.on_position_update(update, &mut last_spoken).await;
                }
                _ = haptic_tick.tick() => self.on_haptic_tick().await,
                _ = announce_tick.tick() => self.on_announce_tick().await,
            }
        }
    }

    async fn on_position_update(&self, update: PositionUpdate, last_spoken: &mut Option<String>) {
        {
            let mut session = self.session.write().await;
            session.update_position(update.position(), update.heading());
        }
        self.reroute.evaluate(update.position()).await;

        let (instruction, remaining) = {
            let session = self.session.read().await;
            (String::from(session.current_instruction()), session.distance_remaining_m())
        };
        // Filler straight-ahead text stays on screen but is never spoken,
        // and an unchanged instruction is not re-vocalized.
        if !instruction.is_empty()
            && last_spoken.as_deref() != Some(instruction.as_str())
            && !tracker::is_straight_filler(&instruction)
        {
            self.speech.speak(&instruction);
            *last_spoken = Some(instruction.clone());
        }

        if remaining.is_some_and(|m| m <= ARRIVAL_RADIUS_M) {
            info!("Destination reached, stopping guidance");
            self.stop();
        }
    }

    async fn on_haptic_tick(&self) {
        let session = self.session.read().await;
        if let Some(tier) = feedback::haptic_tier(&session) {
            event!("Haptic tick fires {tier}");
            self.haptics.impact(tier);
        }
    }

    async fn on_announce_tick(&self) {
        let session = self.session.read().await;
        if let Some(announcement) = feedback::clock_announcement(&session) {
            self.speech.speak(&announcement);
        }
    }
}
