use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::warn;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use super::canvas::CanvasSurface;
use super::params::SimulationParameters;
use super::render;
use super::run_loop::RunLoop;
use super::simulation::Simulation;
use super::types::NodeDescriptor;

type SharedSimulation = Rc<RefCell<Option<Simulation>>>;

/// Browser bindings that live as long as one mounted universe.
struct Mount {
	run_loop: RunLoop,
	resize: Closure<dyn FnMut()>,
}

impl Drop for Mount {
	fn drop(&mut self) {
		self.run_loop.stop();
		if let Some(win) = web_sys::window() {
			let _ = win
				.remove_event_listener_with_callback("resize", self.resize.as_ref().unchecked_ref());
		}
	}
}

fn surface_size(canvas: &HtmlCanvasElement, width: Option<f64>, height: Option<f64>) -> (f64, f64) {
	let parent = canvas.parent_element();
	(
		width.unwrap_or_else(|| parent.as_ref().map_or(800.0, |p| p.client_width() as f64)),
		height.unwrap_or_else(|| parent.as_ref().map_or(600.0, |p| p.client_height() as f64)),
	)
}

fn pointer_position(canvas: &HtmlCanvasElement, ev: &MouseEvent) -> (f64, f64) {
	let rect = canvas.get_bounding_client_rect();
	(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	)
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok()??.dyn_into().ok()
}

#[component]
pub fn SkillsUniverse(
	#[prop(into)] nodes: Signal<Vec<NodeDescriptor>>,
	#[prop(optional)] params: Option<SimulationParameters>,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: SharedSimulation = Rc::new(RefCell::new(None));
	let mount = StoredValue::new_local(None::<Mount>);
	let (error, set_error) = signal(None::<String>);
	let state_init = state.clone();

	Effect::new(move |_| {
		let descriptors = nodes.get();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};
		let Some(ctx) = context_2d(&canvas) else {
			warn!("Canvas has no 2d context, skills universe disabled");
			return;
		};

		let (w, h) = surface_size(&canvas, width, height);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let mut rng = SmallRng::seed_from_u64((js_sys::Math::random() * u64::MAX as f64) as u64);
		let params = params.clone().unwrap_or_default();
		match Simulation::new(&descriptors, w, h, params, &mut rng) {
			Ok(sim) => {
				*state_init.borrow_mut() = Some(sim);
				set_error.set(None);
			}
			Err(err) => {
				warn!("Skills universe not mounted: {}", err);
				*state_init.borrow_mut() = None;
				set_error.set(Some(err.to_string()));
				mount.set_value(None);
				return;
			}
		}

		let state_anim = state_init.clone();
		let Some(run_loop) = RunLoop::start(move || {
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				s.tick();
				render::render(s, &mut CanvasSurface::new(&ctx));
			}
		}) else {
			return;
		};

		let (state_resize, canvas_resize) = (state_init.clone(), canvas.clone());
		let resize: Closure<dyn FnMut()> = Closure::new(move || {
			let (nw, nh) = surface_size(&canvas_resize, width, height);
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			if let Some(ref mut s) = *state_resize.borrow_mut() {
				s.resize(nw, nh);
			}
		});
		let _ = window.add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref());

		// Replacing the previous mount tears its loop and listener down
		mount.set_value(Some(Mount { run_loop, resize }));
	});

	on_cleanup(move || {
		mount.try_update_value(|m| m.take());
	});

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let (x, y) = pointer_position(&canvas, &ev);
		if let Some(ref mut s) = *state_md.borrow_mut() {
			s.on_pointer_down_at(x, y);
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let (x, y) = pointer_position(&canvas, &ev);
		if let Some(ref mut s) = *state_mm.borrow_mut() {
			s.on_pointer_move(x, y);
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_mu.borrow_mut() {
			s.on_pointer_up();
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.on_pointer_leave();
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="skills-universe-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			style="display: block; cursor: grab;"
		/>
		{move || error.get().map(|e| view! { <p class="skills-universe-error">{e}</p> })}
	}
}
