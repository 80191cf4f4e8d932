// Library-Root: Hardware-Anbindung des LED-Rings
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod buttons;
pub mod config;
pub mod hal;
pub mod led_ring;

// Re-exports von ring-core
pub use ring_core::{Direction, DirectionState, LedRing, SetupError, SlotStatus, start_up};
