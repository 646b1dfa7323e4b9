pub mod apply;
pub mod render;
pub mod resolve;
