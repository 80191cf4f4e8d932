//! Taster-Behandlung: Flanken-Interrupt → Richtungs-Zustand
//!
//! Ein einziger Handler ist an beide Eingangsleitungen gebunden. Der
//! Interrupt liefert eine Bitmaske der ausgelösten Pins, daraus wird der
//! Taster bestimmt. Kein Debounce: jede gemeldete Flanke zählt.

use crate::direction::DirectionState;
use crate::traits::{ButtonLine, LineError};
use crate::types::{ButtonId, ButtonPress};

/// Bit eines Pins in der Interrupt-Bitmaske
///
/// Pins ab 32 passen nicht in die Maske und ergeben 0.
pub const fn pin_bit(pin: u8) -> u32 {
    if pin < 32 { 1u32 << pin } else { 0 }
}

/// Fataler Fehler beim Einrichten eines Tasters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetupError {
    pub pin: u8,
    pub error: LineError,
}

/// Handler für die Richtungs-Taster
///
/// Läuft im Interrupt-Kontext: blockiert nie und schreibt nur den Zustand.
pub struct ButtonHandler<'a> {
    direction: &'a DirectionState,
    button_one_mask: u32,
    button_two_mask: u32,
}

impl<'a> ButtonHandler<'a> {
    /// Erstellt den Handler für die beiden Taster-Pins
    pub const fn new(direction: &'a DirectionState, button_one_pin: u8, button_two_pin: u8) -> Self {
        Self {
            direction,
            button_one_mask: pin_bit(button_one_pin),
            button_two_mask: pin_bit(button_two_pin),
        }
    }

    /// Pins, für die dieser Handler registriert ist
    pub const fn line_mask(&self) -> u32 {
        self.button_one_mask | self.button_two_mask
    }

    /// Behandelt einen Interrupt mit der Bitmaske `pins`
    ///
    /// Taster 1 hat Vorrang, wenn beide Bits gleichzeitig gesetzt sind.
    /// Payloads ohne eines der beiden Bits ändern nichts und liefern `None`.
    pub fn on_interrupt(&self, pins: u32) -> Option<ButtonPress> {
        let button = if pins & self.button_one_mask != 0 {
            ButtonId::One
        } else if pins & self.button_two_mask != 0 {
            ButtonId::Two
        } else {
            return None;
        };

        let direction = button.direction();
        self.direction.set(direction);

        Some(ButtonPress { button, direction })
    }
}

/// Richtet alle Taster als Eingang mit Flanken-Interrupt ein
///
/// Bricht beim ersten Fehler ab; der Aufrufer darf dann den Ring nicht starten.
pub fn configure_buttons<B: ButtonLine>(buttons: &mut [B]) -> Result<(), SetupError> {
    for button in buttons.iter_mut() {
        let pin = button.pin();
        let fail = |error| SetupError { pin, error };

        if !button.is_ready() {
            return Err(fail(LineError::NotReady));
        }
        button.configure_input().map_err(fail)?;
        button.enable_edge_interrupt().map_err(fail)?;
    }
    Ok(())
}

#[cfg(feature = "defmt")]
impl defmt::Format for SetupError {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "SetupError {{ pin: {}, error: {} }}", self.pin, self.error)
    }
}
