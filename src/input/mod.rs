//! Input adapter - turns clicks, keys and timer ticks into engine commands.
//!
//! Every user-originated input goes through `apply_input`, which switches the
//! engine to manual mode before navigating. That single choke point is what
//! keeps "any interaction stops autoplay" uniform across controls.
//!
//! ## Modules
//!
//! - `adapter` - `CarouselInput`, `NavKey` and `apply_input`
//! - `keys` - `KeyboardHub`, a scoped listener registry with RAII release

mod adapter;
mod keys;

pub use adapter::{CarouselInput, NavKey, apply_input};
pub use keys::{KeySubscription, KeyboardHub};
