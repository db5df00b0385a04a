use leptos::prelude::*;

use crate::catalog;
use crate::components::skills_universe::SkillsUniverse;

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let nodes = Signal::derive(catalog::descriptors);

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<section id="skills" class="skills-section">
				<div class="skills-universe">
					<SkillsUniverse nodes=nodes />
				</div>
				<div class="skills-overlay">
					<h1>"My Skills"</h1>
					<p class="subtitle">"Drag a skill to pull it around. Hover to see its category."</p>
				</div>
			</section>
		</ErrorBoundary>
	}
}
