//! Geteilter Richtungs-Zustand zwischen Interrupt und Hauptschleife
//!
//! Genau ein Schreiber (Taster-Interrupt) und genau ein Leser (LED-Cycler).
//! Ein einzelnes `AtomicU8` reicht: der Wert ist ein Tag, keine Struktur,
//! daher kein Lock und keine Critical Section nötig.

use core::sync::atomic::{AtomicU8, Ordering};

use crate::types::Direction;

/// Atomare Zelle für die aktuelle [`Direction`]
///
/// Kann als `static` angelegt werden und ist dann aus ISR und Task nutzbar.
pub struct DirectionState {
    raw: AtomicU8,
}

impl DirectionState {
    /// Neuer Zustand mit Default-Richtung (Clockwise)
    pub const fn new() -> Self {
        Self::with_direction(Direction::Clockwise)
    }

    pub const fn with_direction(direction: Direction) -> Self {
        Self {
            raw: AtomicU8::new(direction.as_raw()),
        }
    }

    /// Überschreibt die Richtung (aus dem Interrupt-Kontext aufrufbar)
    ///
    /// Release-Store: der nächste `get()` sieht diesen Wert.
    pub fn set(&self, direction: Direction) {
        self.raw.store(direction.as_raw(), Ordering::Release);
    }

    /// Liest die zuletzt gesetzte Richtung
    pub fn get(&self) -> Direction {
        Direction::from_raw(self.raw.load(Ordering::Acquire))
    }
}

impl Default for DirectionState {
    fn default() -> Self {
        Self::new()
    }
}
