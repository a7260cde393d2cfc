pub mod camera;
pub mod config;
pub mod constants;
pub mod error;
pub mod gate;
pub mod helix;
pub mod mesh;
pub mod motion;
pub mod page;
pub mod scene;

pub use camera::*;
pub use config::*;
pub use constants::*;
pub use error::*;
pub use gate::*;
pub use helix::*;
pub use motion::*;
pub use scene::*;

// Shaders bundled as string constants
pub static HELIX_WGSL: &str = include_str!("../../shaders/helix.wgsl");
