//! The skills shown in the universe: one core, a node per category, a node
//! per skill sized by proficiency.

use crate::components::skills_universe::{NodeDescriptor, NodeGroup};

const CORE_RADIUS: f64 = 10.0;
const CATEGORY_RADIUS: f64 = 7.0;

struct Category {
	id: &'static str,
	title: &'static str,
	skills: &'static [(&'static str, u8)],
}

const CATEGORIES: &[Category] = &[
	Category {
		id: "frontend",
		title: "Frontend",
		skills: &[
			("React.js", 85),
			("Next.js", 80),
			("TypeScript", 75),
			("TailwindCSS", 85),
			("HTML/CSS/JS", 90),
			("Material-UI", 75),
		],
	},
	Category {
		id: "backend",
		title: "Backend",
		skills: &[
			("Node.js", 80),
			("Express.js", 80),
			("Python", 85),
			("Flask", 75),
			("REST APIs", 85),
			("Prisma", 75),
		],
	},
	Category {
		id: "ai",
		title: "AI/ML",
		skills: &[
			("TensorFlow", 80),
			("Scikit-learn", 80),
			("NLP", 85),
			("Computer Vision", 75),
			("Hugging Face", 70),
			("OpenCV", 75),
		],
	},
	Category {
		id: "database",
		title: "Database",
		skills: &[
			("MySQL", 85),
			("MongoDB", 75),
			("PostgreSQL", 70),
			("Firebase", 75),
		],
	},
	Category {
		id: "tools",
		title: "Tools & DevOps",
		skills: &[
			("Git/GitHub", 90),
			("Docker", 70),
			("Vercel", 85),
			("AWS S3", 70),
			("Postman", 85),
			("VS Code", 90),
		],
	},
];

/// Radius of a skill node at the given proficiency (0-100).
///
/// Sizes stay small next to the repulsion padding so the settled cluster
/// keeps every circle clear of its neighbours.
pub fn skill_radius(level: u8) -> f64 {
	2.0 + f64::from(level) / 25.0
}

fn slug(name: &str) -> String {
	let mut out = String::with_capacity(name.len());
	for c in name.chars() {
		if c.is_ascii_alphanumeric() {
			out.push(c.to_ascii_lowercase());
		} else if !out.ends_with('-') {
			out.push('-');
		}
	}
	out.trim_matches('-').to_string()
}

pub fn descriptors() -> Vec<NodeDescriptor> {
	let mut out = vec![NodeDescriptor::new("me", "Me", NodeGroup::Core, CORE_RADIUS)];
	for category in CATEGORIES {
		out.push(NodeDescriptor::new(
			category.id,
			category.title,
			NodeGroup::Category,
			CATEGORY_RADIUS,
		));
		out.extend(category.skills.iter().map(|&(name, level)| {
			NodeDescriptor::new(
				format!("{}-{}", category.id, slug(name)),
				name,
				NodeGroup::skill(category.id),
				skill_radius(level),
			)
		}));
	}
	out
}
