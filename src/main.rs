use leptos::prelude::*;
use skills_universe::{App, init_logging};

fn main() {
	init_logging();
	mount_to_body(App);
}
