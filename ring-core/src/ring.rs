//! LED-Ring: die geordnete Menge der nutzbaren Ausgangsleitungen
//!
//! Slots, deren Leitung fehlt oder nicht konfiguriert werden kann, werden
//! beim Einrichten aussortiert. Die Reihenfolge der übrigen LEDs bleibt
//! erhalten, der Ring schließt sich über die verbleibenden LEDs.

use heapless::Vec;

use crate::traits::{LedLine, LineError};
use crate::types::RING_SIZE;

/// Ergebnis der Einrichtung eines Ring-Slots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SlotStatus {
    /// LED ist eingerichtet und Teil des Rings
    Ready { pin: u8 },
    /// Board beschreibt für diesen Slot keine LED
    Missing,
    /// LED ist dauerhaft deaktiviert
    Disabled { pin: u8, error: LineError },
}

/// Ring aus bis zu [`RING_SIZE`] LEDs
pub struct LedRing<L> {
    leds: Vec<L, RING_SIZE>,
}

impl<L: LedLine> LedRing<L> {
    /// Richtet alle Slots ein und baut den Ring aus den nutzbaren LEDs
    ///
    /// Fehler sind nicht fatal: der betroffene Slot wird nur übersprungen.
    /// Eingerichtete LEDs werden auf low gesetzt.
    pub fn configure(slots: [Option<L>; RING_SIZE]) -> (Self, [SlotStatus; RING_SIZE]) {
        let mut leds = Vec::new();
        let mut statuses = [SlotStatus::Missing; RING_SIZE];

        for (slot, status) in slots.into_iter().zip(statuses.iter_mut()) {
            let Some(mut led) = slot else {
                continue;
            };
            let pin = led.pin();

            let result = if led.is_ready() {
                led.configure_output()
            } else {
                Err(LineError::NotReady)
            };

            *status = match result {
                Ok(()) => {
                    led.set(false);
                    // Kapazität == RING_SIZE, kann nicht überlaufen
                    let _ = leds.push(led);
                    SlotStatus::Ready { pin }
                }
                Err(error) => SlotStatus::Disabled { pin, error },
            };
        }

        (Self { leds }, statuses)
    }

    /// Anzahl der nutzbaren LEDs
    pub fn len(&self) -> usize {
        self.leds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leds.is_empty()
    }

    /// Schaltet die LED an Position `index`; außerhalb des Rings passiert nichts
    pub fn set(&mut self, index: usize, high: bool) {
        if let Some(led) = self.leds.get_mut(index) {
            led.set(high);
        }
    }

    /// Pin der LED an Position `index`
    pub fn pin(&self, index: usize) -> Option<u8> {
        self.leds.get(index).map(LedLine::pin)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for SlotStatus {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            SlotStatus::Ready { pin } => defmt::write!(fmt, "Ready {{ pin: {} }}", pin),
            SlotStatus::Missing => defmt::write!(fmt, "Missing"),
            SlotStatus::Disabled { pin, error } => {
                defmt::write!(fmt, "Disabled {{ pin: {}, error: {} }}", pin, error)
            }
        }
    }
}
