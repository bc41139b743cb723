#![forbid(unsafe_code)]

pub mod flow;
pub mod model;
pub mod state;
pub mod time;

pub use flow::{BASE_PREFIX, FlowController, FlowError, Screen, scenario_at};
pub use state::SessionState;
pub use time::Clock;
