pub mod color;
pub mod config;
pub mod connections;
pub mod constants;
pub mod driver;
pub mod error;
pub mod lifecycle;
pub mod particle;
pub mod sim;
pub mod stats;
pub mod surface;

pub use color::*;
pub use config::*;
pub use connections::*;
pub use constants::*;
pub use driver::*;
pub use error::FieldError;
pub use lifecycle::*;
pub use particle::*;
pub use sim::*;
pub use stats::*;
pub use surface::*;
