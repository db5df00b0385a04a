use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::info;
use wasm_bindgen::prelude::*;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// A self-rescheduling `requestAnimationFrame` loop.
///
/// Frames never overlap: the next one is requested only after the current
/// callback returns. Stopping cancels the pending frame and drops the
/// callback; dropping the loop stops it.
pub struct RunLoop {
	callback: FrameCallback,
	pending: Rc<Cell<Option<i32>>>,
}

impl RunLoop {
	/// Starts calling `on_frame` once per animation frame. Returns `None`
	/// without a window to schedule against.
	pub fn start(mut on_frame: impl FnMut() + 'static) -> Option<Self> {
		let window = web_sys::window()?;
		let callback: FrameCallback = Rc::new(RefCell::new(None));
		let pending = Rc::new(Cell::new(None));
		let (callback_inner, pending_inner) = (callback.clone(), pending.clone());

		*callback.borrow_mut() = Some(Closure::new(move || {
			pending_inner.set(None);
			on_frame();
			if let (Some(win), Some(cb)) = (web_sys::window(), callback_inner.borrow().as_ref()) {
				pending_inner.set(win.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
			}
		}));
		if let Some(ref cb) = *callback.borrow() {
			pending.set(window.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
		}
		info!("Run loop started");

		Some(Self { callback, pending })
	}

	pub fn stop(&self) {
		if let (Some(id), Some(win)) = (self.pending.take(), web_sys::window()) {
			let _ = win.cancel_animation_frame(id);
		}
		if self.callback.borrow_mut().take().is_some() {
			info!("Run loop stopped");
		}
	}
}

impl Drop for RunLoop {
	fn drop(&mut self) {
		self.stop();
	}
}
