mod generator;
mod prompt;

pub use generator::IdeaGenerator;
pub use prompt::{IDEA_COUNT, Topic, build_prompt, extract_ideas};
