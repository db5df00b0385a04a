use std::collections::HashMap;

use rand::Rng;

use super::error::LayoutError;
use super::types::{NodeDescriptor, NodeGroup};

/// A node in the universe: fixed identity plus mutable kinematic state.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
	pub id: String,
	pub name: String,
	pub group: NodeGroup,
	pub radius: f64,
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	/// Index of the node this one is attracted to, resolved at build time.
	pub parent: Option<usize>,
}

impl Node {
	pub fn position(&self) -> (f64, f64) {
		(self.x, self.y)
	}

	#[cfg(test)]
	pub fn velocity(&self) -> (f64, f64) {
		(self.vx, self.vy)
	}

	pub fn contains(&self, x: f64, y: f64) -> bool {
		let (dx, dy) = (self.x - x, self.y - y);
		dx * dx + dy * dy <= self.radius * self.radius
	}
}

/// Builds the node set, scattering positions uniformly over `[0, width) × [0, height)`.
///
/// Fails without producing any nodes if ids repeat, a radius is not positive,
/// there is not exactly one core, or a skill points at anything but an
/// existing category.
pub fn build_nodes<R: Rng + ?Sized>(
	descriptors: &[NodeDescriptor],
	width: f64,
	height: f64,
	rng: &mut R,
) -> Result<Vec<Node>, LayoutError> {
	let mut index_of: HashMap<&str, usize> = HashMap::with_capacity(descriptors.len());
	let mut core: Option<usize> = None;

	for (i, desc) in descriptors.iter().enumerate() {
		if index_of.insert(desc.id.as_str(), i).is_some() {
			return Err(LayoutError::DuplicateId(desc.id.clone()));
		}
		if !(desc.radius.is_finite() && desc.radius > 0.0) {
			return Err(LayoutError::InvalidRadius {
				id: desc.id.clone(),
				radius: desc.radius,
			});
		}
		if desc.group.is_core() {
			if let Some(first) = core {
				return Err(LayoutError::MultipleCores {
					first: descriptors[first].id.clone(),
					second: desc.id.clone(),
				});
			}
			core = Some(i);
		}
	}
	let core = core.ok_or(LayoutError::MissingCore)?;

	let parents = descriptors
		.iter()
		.map(|desc| match &desc.group {
			NodeGroup::Core => Ok(None),
			NodeGroup::Category => Ok(Some(core)),
			NodeGroup::Skill { category } => {
				let &idx = index_of.get(category.as_str()).ok_or_else(|| {
					LayoutError::MissingParent {
						id: desc.id.clone(),
						parent: category.clone(),
					}
				})?;
				if !descriptors[idx].group.is_category() {
					return Err(LayoutError::ParentNotCategory {
						id: desc.id.clone(),
						parent: category.clone(),
					});
				}
				Ok(Some(idx))
			}
		})
		.collect::<Result<Vec<_>, _>>()?;

	let mut nodes: Vec<Node> = descriptors
		.iter()
		.zip(parents)
		.map(|(desc, parent)| Node {
			id: desc.id.clone(),
			name: desc.name.clone(),
			group: desc.group.clone(),
			radius: desc.radius,
			x: 0.0,
			y: 0.0,
			vx: 0.0,
			vy: 0.0,
			parent,
		})
		.collect();
	scatter_nodes(&mut nodes, width, height, rng);
	Ok(nodes)
}

/// Places every node uniformly at random over `[0, width) × [0, height)` at rest.
pub fn scatter_nodes<R: Rng + ?Sized>(nodes: &mut [Node], width: f64, height: f64, rng: &mut R) {
	for node in nodes {
		node.x = scatter(rng, width);
		node.y = scatter(rng, height);
		node.vx = 0.0;
		node.vy = 0.0;
	}
}

fn scatter<R: Rng + ?Sized>(rng: &mut R, extent: f64) -> f64 {
	if extent > 0.0 {
		rng.gen_range(0.0..extent)
	} else {
		0.0
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	use super::*;

	fn descriptors() -> Vec<NodeDescriptor> {
		vec![
			NodeDescriptor::new("me", "Me", NodeGroup::Core, 30.0),
			NodeDescriptor::new("backend", "Backend", NodeGroup::Category, 20.0),
			NodeDescriptor::new("rust", "Rust", NodeGroup::skill("backend"), 12.0),
		]
	}

	#[test]
	fn scatters_inside_bounds_at_rest() {
		let mut rng = SmallRng::seed_from_u64(7);
		let nodes = build_nodes(&descriptors(), 800.0, 600.0, &mut rng).unwrap();
		assert_eq!(nodes.len(), 3);
		for node in &nodes {
			assert!((0.0..800.0).contains(&node.x));
			assert!((0.0..600.0).contains(&node.y));
			assert_eq!(node.velocity(), (0.0, 0.0));
		}
	}

	#[test]
	fn resolves_hierarchical_parents() {
		let mut rng = SmallRng::seed_from_u64(7);
		let nodes = build_nodes(&descriptors(), 800.0, 600.0, &mut rng).unwrap();
		let parents: Vec<_> = nodes.iter().map(|n| n.parent).collect();
		assert_eq!(parents, vec![None, Some(0), Some(1)]);
	}

	#[test]
	fn duplicate_id_fails() {
		let mut descs = descriptors();
		descs.push(NodeDescriptor::new("x", "X", NodeGroup::Category, 10.0));
		descs.push(NodeDescriptor::new("x", "X again", NodeGroup::Category, 10.0));
		let mut rng = SmallRng::seed_from_u64(1);
		assert_eq!(
			build_nodes(&descs, 800.0, 600.0, &mut rng),
			Err(LayoutError::DuplicateId("x".into()))
		);
	}

	#[test]
	fn missing_parent_fails() {
		let mut descs = descriptors();
		descs.push(NodeDescriptor::new("sql", "SQL", NodeGroup::skill("database"), 10.0));
		let mut rng = SmallRng::seed_from_u64(1);
		assert_eq!(
			build_nodes(&descs, 800.0, 600.0, &mut rng),
			Err(LayoutError::MissingParent {
				id: "sql".into(),
				parent: "database".into(),
			})
		);
	}

	#[test]
	fn skill_parent_must_be_category() {
		let mut descs = descriptors();
		descs.push(NodeDescriptor::new("axum", "Axum", NodeGroup::skill("rust"), 10.0));
		let mut rng = SmallRng::seed_from_u64(1);
		assert_eq!(
			build_nodes(&descs, 800.0, 600.0, &mut rng),
			Err(LayoutError::ParentNotCategory {
				id: "axum".into(),
				parent: "rust".into(),
			})
		);
	}

	#[test]
	fn core_count_is_exactly_one() {
		let mut rng = SmallRng::seed_from_u64(1);
		let none = vec![NodeDescriptor::new("a", "A", NodeGroup::Category, 10.0)];
		assert_eq!(
			build_nodes(&none, 800.0, 600.0, &mut rng),
			Err(LayoutError::MissingCore)
		);

		let mut two = descriptors();
		two.push(NodeDescriptor::new("me2", "Me too", NodeGroup::Core, 30.0));
		assert_eq!(
			build_nodes(&two, 800.0, 600.0, &mut rng),
			Err(LayoutError::MultipleCores {
				first: "me".into(),
				second: "me2".into(),
			})
		);
	}

	#[test]
	fn rejects_non_positive_radius() {
		let mut descs = descriptors();
		descs[2].radius = 0.0;
		let mut rng = SmallRng::seed_from_u64(1);
		assert!(matches!(
			build_nodes(&descs, 800.0, 600.0, &mut rng),
			Err(LayoutError::InvalidRadius { .. })
		));
	}

	#[test]
	fn zero_sized_surface_scatters_to_origin() {
		let mut rng = SmallRng::seed_from_u64(3);
		let nodes = build_nodes(&descriptors(), 0.0, 0.0, &mut rng).unwrap();
		assert!(nodes.iter().all(|n| n.position() == (0.0, 0.0)));
	}
}
