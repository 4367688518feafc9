pub mod collector;
pub mod history;
pub mod registry;
pub mod sampler;
pub mod snapshot;
pub mod source;
