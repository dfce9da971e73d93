pub(crate) mod extractor;
pub(crate) mod feedback;
pub(crate) mod guide;
pub(crate) mod reroute;
pub(crate) mod session;
pub(crate) mod supervisor;
pub(crate) mod tracker;
pub(crate) mod turn;

pub use guide::Guide;
pub use reroute::RerouteCoordinator;
pub use session::NavigationSession;
pub use supervisor::GuidanceSupervisor;
pub use turn::TurnType;
