//! Ring Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert Traits, den Richtungs-Zustand und die Ring-Logik.

#![no_std]

pub mod button;
pub mod config;
pub mod cycler;
pub mod direction;
pub mod ring;
pub mod setup;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use button::{ButtonHandler, SetupError, configure_buttons, pin_bit};
pub use cycler::{LedCycler, next_index};
pub use direction::DirectionState;
pub use ring::{LedRing, SlotStatus};
pub use setup::{Startup, start_up};
pub use traits::{BlinkDelay, ButtonLine, LedLine, LineError};
pub use types::{ButtonId, ButtonPress, Direction, RING_SIZE};
