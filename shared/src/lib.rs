//! Selection and rotation engine for a "spin the wheel" prize picker.
//!
//! Shared between the browser front end, which animates the wheel, and the
//! server, which exposes the prize generation API.

pub mod api;
pub mod constants;
pub mod draw;
pub mod easing;
pub mod engine;
pub mod geometry;
pub mod palette;
pub mod prize;
pub mod prize_list;
pub mod weights;
pub mod wheel;

pub use engine::{EngineState, SpinEngine, SpinFrame, SpinOutcome, SpinPhase, SPIN_DURATION_MS};
pub use prize::Prize;
pub use prize_list::{PrizeList, PrizeListError, MIN_PRIZES};
pub use wheel::Wheel;
