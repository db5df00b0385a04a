//! Force field over an immutable snapshot of the node set.

use super::node::Node;
use super::params::SimulationParameters;
use super::types::NodeGroup;

const GOLDEN_ANGLE: f64 = 2.399_963_229_728_653;

/// Unit vector pushing `index` away from a coincident `other`. Each pair gets
/// its own axis; the two members get opposite directions.
fn split_direction(index: usize, other: usize) -> (f64, f64) {
	let (lo, hi) = (index.min(other), index.max(other));
	let angle = (lo * 31 + hi) as f64 * GOLDEN_ANGLE;
	let (ux, uy) = (angle.cos(), angle.sin());
	if index == lo {
		(-ux, -uy)
	} else {
		(ux, uy)
	}
}

/// Force acting on `nodes[index]`: center pull, then pairwise repulsion, then
/// hierarchical attraction, accumulated in that order.
///
/// `center` is `None` while the surface has no area, which skips the center pull.
pub fn force_on(
	index: usize,
	nodes: &[Node],
	center: Option<(f64, f64)>,
	params: &SimulationParameters,
) -> (f64, f64) {
	let node = &nodes[index];
	let (mut fx, mut fy) = (0.0, 0.0);

	if let Some((cx, cy)) = center {
		fx += (cx - node.x) * params.center_pull;
		fy += (cy - node.y) * params.center_pull;
	}

	for (j, other) in nodes.iter().enumerate() {
		if j == index {
			continue;
		}
		let (dx, dy) = (node.x - other.x, node.y - other.y);
		let dist = (dx * dx + dy * dy).sqrt();
		let min_dist = node.radius + other.radius + params.repulsion_padding;
		if dist >= min_dist {
			continue;
		}
		let (ux, uy) = if dist < params.min_distance {
			split_direction(index, j)
		} else {
			(dx / dist, dy / dist)
		};
		let push = (min_dist - dist.max(params.min_distance)) * params.repulsion;
		fx += ux * push;
		fy += uy * push;
	}

	if let Some(parent) = node.parent.map(|p| &nodes[p]) {
		let k = match node.group {
			NodeGroup::Skill { .. } => params.group_pull,
			NodeGroup::Category => params.core_pull,
			NodeGroup::Core => 0.0,
		};
		fx += (parent.x - node.x) * k;
		fy += (parent.y - node.y) * k;
	}

	(fx, fy)
}

/// Forces for every node, all read from the same snapshot. The held node
/// gets a zero force but still repels the others from where it is.
pub fn compute_forces(
	nodes: &[Node],
	center: Option<(f64, f64)>,
	held: Option<usize>,
	params: &SimulationParameters,
) -> Vec<(f64, f64)> {
	(0..nodes.len())
		.map(|i| {
			if held == Some(i) {
				(0.0, 0.0)
			} else {
				force_on(i, nodes, center, params)
			}
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn node(id: &str, group: NodeGroup, radius: f64, x: f64, y: f64, parent: Option<usize>) -> Node {
		Node {
			id: id.into(),
			name: id.into(),
			group,
			radius,
			x,
			y,
			vx: 0.0,
			vy: 0.0,
			parent,
		}
	}

	fn approx(a: (f64, f64), b: (f64, f64)) -> bool {
		(a.0 - b.0).abs() < 1e-12 && (a.1 - b.1).abs() < 1e-12
	}

	#[test]
	fn center_pull_only_for_isolated_core() {
		let nodes = vec![node("core", NodeGroup::Core, 10.0, 100.0, 200.0, None)];
		let params = SimulationParameters::default();
		let f = force_on(0, &nodes, Some((400.0, 300.0)), &params);
		assert!(approx(f, (300.0 * 0.005, 100.0 * 0.005)));
	}

	#[test]
	fn zero_area_surface_skips_center_pull() {
		let nodes = vec![node("core", NodeGroup::Core, 10.0, 100.0, 200.0, None)];
		let f = force_on(0, &nodes, None, &SimulationParameters::default());
		assert_eq!(f, (0.0, 0.0));
	}

	#[test]
	fn repulsion_pushes_apart_within_min_distance() {
		let nodes = vec![
			node("core", NodeGroup::Core, 10.0, 0.0, 0.0, None),
			node("cat", NodeGroup::Category, 10.0, 30.0, 0.0, Some(0)),
		];
		let params = SimulationParameters {
			core_pull: 0.0,
			..Default::default()
		};
		// min distance is 10 + 10 + 20 = 40, overlap 10
		let f0 = force_on(0, &nodes, None, &params);
		let f1 = force_on(1, &nodes, None, &params);
		assert!(approx(f0, (-0.5, 0.0)));
		assert!(approx(f1, (0.5, 0.0)));
	}

	#[test]
	fn no_repulsion_at_or_beyond_min_distance() {
		let nodes = vec![
			node("core", NodeGroup::Core, 10.0, 0.0, 0.0, None),
			node("cat", NodeGroup::Category, 10.0, 0.0, 40.0, Some(0)),
		];
		let f = force_on(0, &nodes, None, &SimulationParameters::default());
		assert_eq!(f, (0.0, 0.0));
	}

	#[test]
	fn coincident_nodes_split_without_nan() {
		let nodes = vec![
			node("core", NodeGroup::Core, 10.0, 50.0, 50.0, None),
			node("cat", NodeGroup::Category, 10.0, 50.0, 50.0, Some(0)),
		];
		let params = SimulationParameters::default();
		let (f0, f1) = (force_on(0, &nodes, None, &params), force_on(1, &nodes, None, &params));
		assert!(f0.0.is_finite() && f0.1.is_finite());
		assert_eq!(f0, (-f1.0, -f1.1));
		assert!(f0.0 != 0.0 && f0.1 != 0.0);
	}

	#[test]
	fn coincident_pairs_split_on_different_axes() {
		let (a, b) = (split_direction(0, 1), split_direction(2, 5));
		assert!((a.0 * a.0 + a.1 * a.1 - 1.0).abs() < 1e-12);
		assert_eq!(split_direction(1, 0), (-a.0, -a.1));
		// not parallel
		assert!((a.0 * b.1 - a.1 * b.0).abs() > 1e-3);
	}

	#[test]
	fn hierarchy_pulls_children_not_parents() {
		let nodes = vec![
			node("core", NodeGroup::Core, 5.0, 400.0, 300.0, None),
			node("cat", NodeGroup::Category, 5.0, 100.0, 100.0, Some(0)),
			node("leaf", NodeGroup::skill("cat"), 5.0, 700.0, 500.0, Some(1)),
		];
		let params = SimulationParameters::default();
		assert_eq!(force_on(0, &nodes, None, &params), (0.0, 0.0));
		assert!(approx(
			force_on(1, &nodes, None, &params),
			(300.0 * 0.01, 200.0 * 0.01)
		));
		assert!(approx(
			force_on(2, &nodes, None, &params),
			(-600.0 * 0.015, -400.0 * 0.015)
		));
	}

	#[test]
	fn same_snapshot_gives_identical_forces() {
		let nodes = vec![
			node("core", NodeGroup::Core, 30.0, 410.0, 290.0, None),
			node("cat", NodeGroup::Category, 20.0, 400.0, 310.0, Some(0)),
			node("leaf", NodeGroup::skill("cat"), 12.0, 395.0, 305.0, Some(1)),
		];
		let params = SimulationParameters::default();
		let center = Some((400.0, 300.0));
		assert_eq!(
			compute_forces(&nodes, center, None, &params),
			compute_forces(&nodes, center, None, &params)
		);
	}

	#[test]
	fn held_node_receives_nothing_but_still_repels() {
		let nodes = vec![
			node("core", NodeGroup::Core, 10.0, 0.0, 0.0, None),
			node("cat", NodeGroup::Category, 10.0, 30.0, 0.0, Some(0)),
		];
		let params = SimulationParameters::default();
		let forces = compute_forces(&nodes, Some((0.0, 0.0)), Some(1), &params);
		assert_eq!(forces[1], (0.0, 0.0));
		assert!(forces[0].0 < 0.0);
	}
}
