pub mod document;
pub mod extract;
pub mod ids;
pub mod mappings;
pub mod models;
pub mod pipeline;
mod result;
pub mod services;

pub use pipeline::{run, Mart, PipelineInput, PipelineOptions};
pub use result::Result;
