/// Tuning constants for the force field and integrator.
///
/// The defaults were tuned against a roughly 60 Hz frame rate. There is no
/// delta-time scaling, so slower displays see slower motion.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationParameters {
	/// Spring constant pulling every node toward the view center.
	pub center_pull: f64,
	/// Gap added to the sum of two radii before repulsion stops.
	pub repulsion_padding: f64,
	pub repulsion: f64,
	/// Pull of a skill toward its category.
	pub group_pull: f64,
	/// Pull of a category toward the core.
	pub core_pull: f64,
	/// Velocity multiplier applied every tick, in (0, 1).
	pub damping: f64,
	/// Floor for the distance between two coincident nodes.
	pub min_distance: f64,
}

impl Default for SimulationParameters {
	fn default() -> Self {
		Self {
			center_pull: 0.005,
			repulsion_padding: 20.0,
			repulsion: 0.05,
			group_pull: 0.015,
			core_pull: 0.01,
			damping: 0.92,
			min_distance: 1e-3,
		}
	}
}
