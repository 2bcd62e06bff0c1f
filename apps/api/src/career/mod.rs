// Career details, suggestions, and transition roadmaps.

pub mod advisor;
pub mod handlers;
pub mod prompts;
