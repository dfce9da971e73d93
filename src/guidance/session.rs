use super::extractor::generate_guides;
use super::guide::Guide;
use crate::geo::Coordinate;

/// The live state of one guidance run.
///
/// Exactly one session exists while navigation is active. It is shared as
/// `Arc<RwLock<NavigationSession>>` between the position loop and the
/// read-only feedback ticks, and destroyed when guidance stops.
#[derive(Debug)]
pub struct NavigationSession {
    current_position: Coordinate,
    destination: Option<Coordinate>,
    route_path: Vec<Coordinate>,
    guides: Vec<Guide>,
    is_recalculating: bool,
    has_deviation: bool,
    current_instruction: String,
    distance_remaining_m: Option<u32>,
    heading: Option<f64>,
}

impl NavigationSession {
    /// Creates a fresh session at the given start position.
    pub fn new(start: Coordinate, destination: Option<Coordinate>) -> Self {
        Self {
            current_position: start,
            destination,
            route_path: Vec::new(),
            guides: Vec::new(),
            is_recalculating: false,
            has_deviation: false,
            current_instruction: String::new(),
            distance_remaining_m: None,
            heading: None,
        }
    }

    pub fn current_position(&self) -> Coordinate { self.current_position }

    pub fn destination(&self) -> Option<Coordinate> { self.destination }

    pub fn route_path(&self) -> &[Coordinate] { &self.route_path }

    pub fn guides(&self) -> &[Guide] { &self.guides }

    pub fn is_recalculating(&self) -> bool { self.is_recalculating }

    pub fn has_deviation(&self) -> bool { self.has_deviation }

    pub fn current_instruction(&self) -> &str { &self.current_instruction }

    pub fn distance_remaining_m(&self) -> Option<u32> { self.distance_remaining_m }

    pub fn heading(&self) -> Option<f64> { self.heading }

    /// Applies one position fix. A fix without a course keeps the last
    /// known heading, receivers drop the course while standing still.
    pub fn update_position(&mut self, position: Coordinate, heading: Option<f64>) {
        self.current_position = position;
        if heading.is_some() {
            self.heading = heading;
        }
    }

    /// Installs a new route and rederives the guides from it. This is the
    /// only way `guides` is ever written, so the list always matches
    /// `route_path`.
    pub fn install_route(&mut self, path: Vec<Coordinate>) {
        self.guides = generate_guides(&path);
        self.route_path = path;
    }

    /// Marks a reroute request as in flight (single-flight guard).
    pub fn begin_recalculation(&mut self) { self.is_recalculating = true; }

    /// Clears the in-flight and deviation flags after a reroute resolved,
    /// successfully or via the fallback path.
    pub fn finish_recalculation(&mut self) {
        self.is_recalculating = false;
        self.has_deviation = false;
    }

    pub fn set_deviation(&mut self, deviating: bool) { self.has_deviation = deviating; }

    pub fn set_instruction(&mut self, instruction: String) {
        self.current_instruction = instruction;
    }

    pub fn set_distance_remaining(&mut self, meters: u32) {
        self.distance_remaining_m = Some(meters);
    }
}
