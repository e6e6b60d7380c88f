pub mod address;
pub mod decode;
pub mod preload;
pub mod sequence;
