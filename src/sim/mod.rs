//! Ring simulation module
//!
//! Everything that decides where orbs are lives here. This module must stay
//! pure and platform free:
//! - Time is supplied by the caller (monotonic milliseconds)
//! - No rendering or socket dependencies
//! - Events are applied between frames, never during one

pub mod easing;
pub mod event;
pub mod layout;
pub mod orb;
pub mod projector;
pub mod pulse;
pub mod scene;

pub use easing::{ease_in_out_cubic, lerp, lerp_angle, shortest_arc};
pub use event::{EventSender, SceneEvent};
pub use layout::{layout_angles, layout_angles_from};
pub use orb::{Orb, OrbSet, Resize, Tween};
pub use projector::{ProjectedNode, Projector};
pub use pulse::{Pulse, glow_intensity};
pub use scene::Scene;
