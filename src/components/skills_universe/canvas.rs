use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::render::{BACKGROUND, CircleStyle, LineStyle, Surface, TextStyle};

/// [`Surface`] backed by a 2D canvas context.
pub struct CanvasSurface<'a> {
	ctx: &'a CanvasRenderingContext2d,
}

impl<'a> CanvasSurface<'a> {
	pub fn new(ctx: &'a CanvasRenderingContext2d) -> Self {
		Self { ctx }
	}
}

impl Surface for CanvasSurface<'_> {
	fn clear(&mut self, width: f64, height: f64) {
		self.ctx.set_global_alpha(1.0);
		self.ctx.set_fill_style_str(BACKGROUND);
		self.ctx.fill_rect(0.0, 0.0, width, height);
	}

	fn draw_line(&mut self, (x1, y1): (f64, f64), (x2, y2): (f64, f64), style: &LineStyle) {
		let ctx = self.ctx;
		ctx.set_global_alpha(style.alpha);
		ctx.set_stroke_style_str(&style.color);
		ctx.set_line_width(style.width);
		ctx.begin_path();
		ctx.move_to(x1, y1);
		ctx.line_to(x2, y2);
		ctx.stroke();
		ctx.set_global_alpha(1.0);
	}

	fn draw_circle(&mut self, (x, y): (f64, f64), radius: f64, style: &CircleStyle) {
		let ctx = self.ctx;
		ctx.set_global_alpha(style.alpha);
		ctx.begin_path();
		let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(&style.fill);
		ctx.fill();
		ctx.set_stroke_style_str(&style.stroke);
		ctx.set_line_width(style.line_width);
		ctx.stroke();
		ctx.set_global_alpha(1.0);
	}

	fn draw_text(&mut self, text: &str, (x, y): (f64, f64), style: &TextStyle) {
		let ctx = self.ctx;
		ctx.set_global_alpha(style.alpha);
		ctx.set_fill_style_str(&style.color);
		ctx.set_font(&style.font);
		ctx.set_text_align("center");
		ctx.set_text_baseline("middle");
		let _ = ctx.fill_text(text, x, y);
		ctx.set_global_alpha(1.0);
	}
}
