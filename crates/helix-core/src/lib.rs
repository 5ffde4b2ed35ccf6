pub mod camera;
pub mod cards;
pub mod catalog;
pub mod constants;
pub mod helix;
pub mod mapping;
pub mod particles;
pub mod picking;
pub mod progress;
pub mod scene;
pub mod selection;
pub mod skeleton;
pub mod smoothing;
pub mod state;

pub use camera::*;
pub use cards::*;
pub use catalog::*;
pub use constants::*;
pub use helix::*;
pub use mapping::*;
pub use particles::*;
pub use picking::*;
pub use progress::*;
pub use scene::*;
pub use selection::*;
pub use skeleton::*;
pub use smoothing::*;
pub use state::*;
