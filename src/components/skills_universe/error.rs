/// Invalid node configuration, detected when the universe is built.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum LayoutError {
	#[error("duplicate node id `{0}`")]
	DuplicateId(String),
	#[error("node `{id}` has non-positive radius {radius}")]
	InvalidRadius { id: String, radius: f64 },
	#[error("no core node in configuration")]
	MissingCore,
	#[error("more than one core node: `{first}` and `{second}`")]
	MultipleCores { first: String, second: String },
	#[error("skill `{id}` references missing category `{parent}`")]
	MissingParent { id: String, parent: String },
	#[error("skill `{id}` references `{parent}`, which is not a category")]
	ParentNotCategory { id: String, parent: String },
}
