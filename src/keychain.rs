use crate::collaborators::haptics::{HapticSink, LogHaptics};
use crate::collaborators::routing::{RouteProvider, RoutingClient};
use crate::collaborators::speech::{LogSpeech, SpeechSink};
use std::sync::Arc;

/// Struct bundling the engine's external collaborators, providing shared
/// access to the routing backend and the haptic and speech outputs.
#[derive(Clone)]
pub struct Keychain {
    /// The HTTP routing client used to fetch and recalculate routes.
    routing: Arc<RoutingClient>,
    /// The haptic output for directional feedback and deviation warnings.
    haptics: Arc<dyn HapticSink>,
    /// The speech output for turn instructions and clock announcements.
    speech: Arc<dyn SpeechSink>,
}

impl Keychain {
    /// Creates a new `Keychain` with the log-only haptic and speech sinks.
    ///
    /// # Arguments
    /// - `base_url`: The base URL of the routing backend.
    ///
    /// # Returns
    /// A new instance of `Keychain` containing initialized collaborators.
    pub fn new(base_url: &str) -> Self {
        Self {
            routing: Arc::new(RoutingClient::new(base_url)),
            haptics: Arc::new(LogHaptics),
            speech: Arc::new(LogSpeech),
        }
    }

    /// Provides a cloned reference to the routing collaborator.
    pub fn routing(&self) -> Arc<dyn RouteProvider> {
        Arc::clone(&self.routing) as Arc<dyn RouteProvider>
    }

    /// Provides a cloned reference to the haptic collaborator.
    pub fn haptics(&self) -> Arc<dyn HapticSink> { Arc::clone(&self.haptics) }

    /// Provides a cloned reference to the speech collaborator.
    pub fn speech(&self) -> Arc<dyn SpeechSink> { Arc::clone(&self.speech) }
}
