pub mod error;
pub mod schema;
pub mod icon;
pub mod markup;
pub mod traits;
pub mod registry;
pub mod render;
pub mod process_steps;


pub use error::*;
pub use schema::*;
pub use traits::*;
pub use registry::*;
pub use render::FormEngine;
pub use process_steps::{process_steps, ProcessSteps, ProcessStepsContext};
