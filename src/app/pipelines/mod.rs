pub mod dependency_pipeline;
pub mod seed_pipeline;

pub use dependency_pipeline::DependencyPipeline;
pub use seed_pipeline::SeedPipeline;
