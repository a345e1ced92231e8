//! "Dream up your backdrop" demo: a theme goes to the hosted text model,
//! the resulting idea goes to the hosted image model.

pub mod demo;
pub mod gemini;
pub mod workflow;

pub use demo::BackdropDemo;
