//! Start-Sequenz: erst Taster, dann LEDs
//!
//! Taster-Fehler sind fatal (kein Ring, keine LED-Aktivität),
//! LED-Fehler deaktivieren nur den betroffenen Slot.

use crate::button::{SetupError, configure_buttons};
use crate::ring::{LedRing, SlotStatus};
use crate::traits::{ButtonLine, LedLine};
use crate::types::RING_SIZE;

/// Ergebnis einer erfolgreichen Start-Sequenz
pub struct Startup<L> {
    pub ring: LedRing<L>,
    pub slots: [SlotStatus; RING_SIZE],
}

/// Richtet Taster und LEDs ein
///
/// Schlägt ein Taster fehl, werden die LEDs nicht angefasst.
pub fn start_up<B: ButtonLine, L: LedLine>(
    buttons: &mut [B],
    leds: [Option<L>; RING_SIZE],
) -> Result<Startup<L>, SetupError> {
    configure_buttons(buttons)?;
    let (ring, slots) = LedRing::configure(leds);
    Ok(Startup { ring, slots })
}
