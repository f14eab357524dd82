// Adapters layer: concrete implementations of the domain ports.

pub mod maven;
pub mod output;
pub mod source;

pub use maven::{MavenRunner, MavenSettings};
pub use output::{MemorySink, StdoutSink};
pub use source::{FileSource, StaticSource};
