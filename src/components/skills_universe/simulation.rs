use std::collections::HashSet;

use log::{debug, info};
use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};

use super::error::LayoutError;
use super::forces::compute_forces;
use super::interaction::DragState;
use super::node::{Node, build_nodes, scatter_nodes};
use super::params::SimulationParameters;
use super::types::NodeDescriptor;

/// Per-frame easing rates for the hover highlight.
const HIGHLIGHT_IN: f64 = 0.029;
const HIGHLIGHT_OUT: f64 = 0.02;

#[derive(Clone, Debug, Default)]
pub struct HoverState {
	pub node: Option<usize>,
	pub neighbors: HashSet<usize>,
	pub highlight_t: f64,
	pub prev_node: Option<usize>,
	pub prev_neighbors: HashSet<usize>,
}

/// Advances a snapshot by one tick and returns the next node set.
///
/// Every force is read from `nodes` before any position changes. The held
/// node is carried over untouched.
pub fn step(
	nodes: &[Node],
	center: Option<(f64, f64)>,
	held: Option<usize>,
	params: &SimulationParameters,
) -> Vec<Node> {
	let forces = compute_forces(nodes, center, held, params);
	nodes
		.iter()
		.zip(forces)
		.enumerate()
		.map(|(i, (node, (fx, fy)))| {
			let mut next = node.clone();
			if held != Some(i) {
				next.vx = (node.vx + fx) * params.damping;
				next.vy = (node.vy + fy) * params.damping;
				next.x = node.x + next.vx;
				next.y = node.y + next.vy;
			}
			next
		})
		.collect()
}

/// Owns the node set and everything that mutates it between frames.
pub struct Simulation {
	pub(super) nodes: Vec<Node>,
	pub(super) params: SimulationParameters,
	pub(super) drag: DragState,
	pub hover: HoverState,
	pub width: f64,
	pub height: f64,
	rng: SmallRng,
}

impl Simulation {
	pub fn new<R: Rng + ?Sized>(
		descriptors: &[NodeDescriptor],
		width: f64,
		height: f64,
		params: SimulationParameters,
		rng: &mut R,
	) -> Result<Self, LayoutError> {
		let nodes = build_nodes(descriptors, width, height, rng)?;
		info!("Skills universe built with {} nodes", nodes.len());
		Ok(Self {
			nodes,
			params,
			drag: DragState::default(),
			hover: HoverState::default(),
			width,
			height,
			rng: SmallRng::seed_from_u64(rng.next_u64()),
		})
	}

	pub fn nodes(&self) -> &[Node] {
		&self.nodes
	}

	pub fn index_of(&self, id: &str) -> Option<usize> {
		self.nodes.iter().position(|n| n.id == id)
	}

	#[cfg(test)]
	pub fn node(&self, id: &str) -> Option<&Node> {
		self.index_of(id).map(|i| &self.nodes[i])
	}

	pub fn has_area(&self) -> bool {
		self.width > 0.0 && self.height > 0.0
	}

	/// Target of the center pull, absent while the surface has no area.
	pub fn center(&self) -> Option<(f64, f64)> {
		self.has_area().then(|| (self.width / 2.0, self.height / 2.0))
	}

	pub fn tick(&mut self) {
		self.nodes = step(&self.nodes, self.center(), self.drag.held, &self.params);

		let (target, rate) = if self.hover.node.is_some() {
			(1.0, HIGHLIGHT_IN)
		} else {
			(0.0, HIGHLIGHT_OUT)
		};
		self.hover.highlight_t += (target - self.hover.highlight_t) * rate;
		if self.hover.node.is_none() && self.hover.highlight_t < 0.01 {
			self.hover.highlight_t = 0.0;
			self.hover.prev_node = None;
			self.hover.prev_neighbors.clear();
		}
	}

	/// Updates the center target. The first resize to a real area after
	/// having none scatters the nodes over it, since they were all built at
	/// the origin.
	pub fn resize(&mut self, width: f64, height: f64) {
		debug!("Skills universe resized to {}x{}", width, height);
		let had_area = self.has_area();
		self.width = width;
		self.height = height;
		if !had_area && self.has_area() {
			scatter_nodes(&mut self.nodes, width, height, &mut self.rng);
		}
	}

	/// Topmost node under the point, in draw order.
	pub fn node_at(&self, x: f64, y: f64) -> Option<usize> {
		self.nodes.iter().rposition(|n| n.contains(x, y))
	}

	/// Parent and children of a node.
	pub fn neighbors_of(&self, idx: usize) -> HashSet<usize> {
		self.nodes
			.iter()
			.enumerate()
			.filter(|&(i, n)| n.parent == Some(idx) || self.nodes[idx].parent == Some(i))
			.map(|(i, _)| i)
			.collect()
	}

	pub fn set_hover(&mut self, node: Option<usize>) {
		if self.hover.node == node {
			return;
		}
		let was_hovering = self.hover.node.is_some();

		// Keep the outgoing highlight so it can fade
		if was_hovering && node.is_none() {
			self.hover.prev_node = self.hover.node.take();
			self.hover.prev_neighbors = std::mem::take(&mut self.hover.neighbors);
		} else {
			self.hover.prev_node = None;
			self.hover.prev_neighbors.clear();
		}

		self.hover.node = node;
		self.hover.neighbors = node.map(|idx| self.neighbors_of(idx)).unwrap_or_default();
	}

	pub fn is_highlighted(&self, idx: usize) -> bool {
		self.hover.node == Some(idx)
			|| self.hover.neighbors.contains(&idx)
			|| self.hover.prev_node == Some(idx)
			|| self.hover.prev_neighbors.contains(&idx)
	}

	pub fn is_hovered(&self, idx: usize) -> bool {
		self.hover.node == Some(idx) || self.hover.prev_node == Some(idx)
	}

	pub fn has_active_highlight(&self) -> bool {
		self.hover.node.is_some() || self.hover.prev_node.is_some()
	}
}
