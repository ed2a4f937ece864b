//! Walkthrough driver for `cowlink`.
//!
//! Replays a scripted session against a `CowList<i32>`: prepends, appends,
//! positional inserts and removals, a map, and an offset lookup from the
//! end cursor. The binary logs every stage; the logic lives here so it can
//! be tested without a subscriber.

pub mod config;
pub mod scenario;

pub use config::{ConfigError, WalkthroughConfig};
pub use scenario::{Report, ScenarioError, Stage, run};
