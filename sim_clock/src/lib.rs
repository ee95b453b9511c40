//! # Simulated Clock
//!
//! Cooperative time for the bridge simulator.
//!
//! ## Philosophy
//!
//! **Determinism enables thorough testing.**
//!
//! Nothing in the bridge sleeps or spawns. Delays are entries in a timer
//! queue, and time only moves when the owner of the clock advances it.
//! Scripted sessions advance time instantly; interactive sessions advance it
//! by measured wall-clock time.
//!
//! ## Key Types
//!
//! - [`Duration`] / [`Instant`]: simulated time arithmetic
//! - [`SimClock`]: monotonic simulated clock anchored to a wall-clock epoch
//! - [`TimerQueue`]: deadline-ordered queue, FIFO among equal deadlines

pub mod clock;
pub mod time;
pub mod timer_queue;

pub use clock::SimClock;
pub use time::{Duration, Instant};
pub use timer_queue::{TimerEntry, TimerQueue};
