//! Pointer-driven dragging. At most one node is held at a time; a second
//! press while one is held is ignored.

use log::debug;

use super::simulation::Simulation;

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub held: Option<usize>,
}

impl Simulation {
	pub fn held(&self) -> Option<usize> {
		self.drag.held
	}

	/// Holds the node with `id`. Returns whether a node is now newly held.
	pub fn on_pointer_down(&mut self, id: &str) -> bool {
		self.index_of(id).is_some_and(|idx| self.hold(idx))
	}

	/// Hit-tests the press position and holds whatever node is under it.
	pub fn on_pointer_down_at(&mut self, x: f64, y: f64) -> bool {
		self.node_at(x, y).is_some_and(|idx| self.hold(idx))
	}

	fn hold(&mut self, idx: usize) -> bool {
		if self.drag.held.is_some() {
			return false;
		}
		debug!("Holding node {}", self.nodes[idx].id);
		self.drag.held = Some(idx);
		self.set_hover(None);
		true
	}

	/// Moves the held node to `(x, y)` in surface coordinates, or updates
	/// hover when nothing is held.
	pub fn on_pointer_move(&mut self, x: f64, y: f64) {
		match self.drag.held {
			Some(idx) => {
				let node = &mut self.nodes[idx];
				node.x = x;
				node.y = y;
				node.vx = 0.0;
				node.vy = 0.0;
			}
			None => {
				let hovered = self.node_at(x, y);
				self.set_hover(hovered);
			}
		}
	}

	pub fn on_pointer_up(&mut self) {
		self.release();
	}

	pub fn on_pointer_leave(&mut self) {
		self.release();
		self.set_hover(None);
	}

	fn release(&mut self) {
		if let Some(idx) = self.drag.held.take() {
			let node = &mut self.nodes[idx];
			debug!("Released node {}", node.id);
			node.vx = 0.0;
			node.vy = 0.0;
		}
	}
}
