pub mod skills_universe;
