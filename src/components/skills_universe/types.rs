/// Hierarchical tag deciding which node a node is attracted to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeGroup {
	/// The single central identity node.
	Core,
	/// A skill category, pulled toward the core.
	Category,
	/// A skill, pulled toward the category node whose id is `category`.
	Skill { category: String },
}

impl NodeGroup {
	pub fn skill(category: impl Into<String>) -> Self {
		Self::Skill {
			category: category.into(),
		}
	}

	pub fn is_core(&self) -> bool {
		matches!(self, Self::Core)
	}

	pub fn is_category(&self) -> bool {
		matches!(self, Self::Category)
	}
}

/// Static description of a node, as supplied at construction.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeDescriptor {
	pub id: String,
	pub name: String,
	pub group: NodeGroup,
	pub radius: f64,
}

impl NodeDescriptor {
	pub fn new(
		id: impl Into<String>,
		name: impl Into<String>,
		group: NodeGroup,
		radius: f64,
	) -> Self {
		Self {
			id: id.into(),
			name: name.into(),
			group,
			radius,
		}
	}
}
