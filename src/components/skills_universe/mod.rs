mod canvas;
mod component;
mod error;
mod forces;
mod interaction;
mod node;
mod params;
mod render;
mod run_loop;
mod simulation;
mod types;

pub use component::SkillsUniverse;
pub use types::{NodeDescriptor, NodeGroup};
