pub mod camera;
pub mod constants;
pub mod gesture;
pub mod layout;
pub mod mailbox;
pub mod mesh;
pub mod mode;
pub mod particles;
pub mod sensor;
pub mod sim;

pub use camera::*;
pub use constants::*;
pub use gesture::*;
pub use layout::*;
pub use mailbox::*;
pub use mode::*;
pub use particles::*;
pub use sensor::*;
pub use sim::*;
