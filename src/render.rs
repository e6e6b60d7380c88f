pub mod pipeline;
pub mod surface;
