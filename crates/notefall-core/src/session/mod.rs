//! Top-level play session: phase machine, tick loop, and input
//! dispatch.

mod state;

pub use state::{InputEvent, JudgmentDisplay, Session, SessionPhase};
