pub mod background;
pub mod breathing;
pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod gpu;
pub mod input;
pub mod morph;
pub mod particles;
pub mod resume;
pub mod section;
pub mod shapes;
pub mod state;

pub static PARTICLES_WGSL: &str = include_str!("../shaders/particles.wgsl");
pub static BACKGROUND_WGSL: &str = include_str!("../shaders/background.wgsl");

pub use background::*;
pub use breathing::*;
pub use color::*;
pub use config::*;
pub use constants::*;
pub use error::*;
pub use gpu::*;
pub use input::*;
pub use morph::*;
pub use particles::*;
pub use resume::*;
pub use section::*;
pub use shapes::*;
pub use state::*;
