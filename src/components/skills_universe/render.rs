use super::simulation::Simulation;
use super::types::NodeGroup;

pub const BACKGROUND: &str = "#0f172a";
const CORE_FILL: &str = "#f8fafc";
const COLORS: &[&str] = &["#38bdf8", "#a78bfa", "#f472b6", "#34d399", "#fbbf24", "#fb7185"];

#[derive(Clone, Debug, PartialEq)]
pub struct LineStyle {
	pub color: String,
	pub width: f64,
	pub alpha: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CircleStyle {
	pub fill: String,
	pub stroke: String,
	pub line_width: f64,
	pub alpha: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
	pub color: String,
	pub font: String,
	pub alpha: f64,
}

/// Any 2D target the universe can be drawn onto.
pub trait Surface {
	fn clear(&mut self, _width: f64, _height: f64) {}
	fn draw_line(&mut self, from: (f64, f64), to: (f64, f64), style: &LineStyle);
	fn draw_circle(&mut self, center: (f64, f64), radius: f64, style: &CircleStyle);
	fn draw_text(&mut self, text: &str, center: (f64, f64), style: &TextStyle);
}

fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

/// Palette slot per node: categories in declaration order, skills share
/// their category's slot, the core has none.
fn palette(sim: &Simulation) -> Vec<Option<usize>> {
	let mut next = 0;
	let mut slots: Vec<Option<usize>> = sim
		.nodes()
		.iter()
		.map(|node| {
			node.group.is_category().then(|| {
				next += 1;
				(next - 1) % COLORS.len()
			})
		})
		.collect();
	for (i, node) in sim.nodes().iter().enumerate() {
		if let (NodeGroup::Skill { .. }, Some(parent)) = (&node.group, node.parent) {
			slots[i] = slots[parent];
		}
	}
	slots
}

/// Draws one frame: parent links first, then nodes with centered labels.
/// Does nothing while the surface has no area.
pub fn render(sim: &Simulation, surface: &mut impl Surface) {
	if !sim.has_area() {
		return;
	}
	surface.clear(sim.width, sim.height);

	let slots = palette(sim);
	let (has_highlight, t) = (sim.has_active_highlight(), ease_out_cubic(sim.hover.highlight_t));
	let dim = |lit: bool| if has_highlight && !lit { 1.0 - 0.7 * t } else { 1.0 };

	for (i, node) in sim.nodes().iter().enumerate() {
		let Some(p) = node.parent else {
			continue;
		};
		let parent = &sim.nodes()[p];
		let lit = sim.is_highlighted(i) && sim.is_highlighted(p);
		let color = slots[i].map_or(CORE_FILL, |s| COLORS[s]);
		surface.draw_line(
			parent.position(),
			node.position(),
			&LineStyle {
				color: color.into(),
				width: if lit { 1.5 + t } else { 1.5 },
				alpha: 0.35 * dim(lit),
			},
		);
	}

	for (i, node) in sim.nodes().iter().enumerate() {
		let lit = sim.is_highlighted(i);
		let alpha = dim(lit);
		let radius = if has_highlight && sim.is_hovered(i) {
			node.radius * (1.0 + 0.2 * t)
		} else {
			node.radius
		};
		let color = slots[i].map_or(CORE_FILL, |s| COLORS[s]);
		let (fill, stroke, font) = match node.group {
			NodeGroup::Core => (CORE_FILL, COLORS[0], "bold 14px sans-serif"),
			NodeGroup::Category => (color, CORE_FILL, "bold 12px sans-serif"),
			NodeGroup::Skill { .. } => (BACKGROUND, color, "10px sans-serif"),
		};
		let text_color = if node.group.is_core() { BACKGROUND } else { CORE_FILL };

		surface.draw_circle(
			node.position(),
			radius,
			&CircleStyle {
				fill: fill.into(),
				stroke: stroke.into(),
				line_width: if sim.held() == Some(i) { 3.0 } else { 1.5 },
				alpha,
			},
		);
		surface.draw_text(
			&node.name,
			node.position(),
			&TextStyle {
				color: text_color.into(),
				font: font.into(),
				alpha,
			},
		);
	}
}
