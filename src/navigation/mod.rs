//! Navigation engine - the single source of truth for the active card.
//!
//! ## Architecture
//!
//! `NavigationState` is the pure index/mode state machine. `AutoplayTimer`
//! tracks the one pending autoplay tick, identified by a generation-stamped
//! `TickToken`. `CarouselEngine` ties both together and reads time through a
//! `Clock` so hosts can drive it from a real timer or a test clock.
//!
//! ## Modules
//!
//! - `state` - Active index and playback mode, circular stepping
//! - `autoplay` - Pending tick bookkeeping and stale-tick detection
//! - `clock` - Time source abstraction (`SystemClock`, `ManualClock`)
//! - `engine` - `CarouselEngine`, the public navigation surface

mod autoplay;
mod clock;
mod engine;
mod state;

pub use autoplay::{AutoplayTimer, TickToken};
pub use clock::{Clock, ManualClock, SystemClock};
pub use engine::{CarouselEngine, TickOutcome};
pub use state::NavigationState;
