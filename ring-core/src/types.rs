//! Core Types für die LED-Ring-Steuerung
//!
//! Datenstrukturen ohne Hardware-Dependencies

/// Anzahl der LEDs im Ring
pub const RING_SIZE: usize = 4;

/// Drehrichtung des leuchtenden Punktes im Ring
///
/// `repr(u8)`, damit der Wert als ein einziges Wort in einem Atomic
/// abgelegt werden kann (siehe [`crate::DirectionState`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Direction {
    /// Index wird erhöht (+1)
    #[default]
    Clockwise = 1,
    /// Index wird verringert (-1)
    CounterClockwise = 0,
}

impl Direction {
    /// Roh-Wert für die atomare Ablage
    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    /// Gegenstück zu [`Direction::as_raw`]
    ///
    /// Unbekannte Werte können nicht entstehen, solange nur `as_raw()`
    /// geschrieben wird; sie werden trotzdem auf die Default-Richtung abgebildet.
    pub const fn from_raw(raw: u8) -> Self {
        match raw {
            0 => Direction::CounterClockwise,
            _ => Direction::Clockwise,
        }
    }
}

/// Die beiden Richtungs-Taster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ButtonId {
    /// Taster 1 → gegen den Uhrzeigersinn
    One,
    /// Taster 2 → im Uhrzeigersinn
    Two,
}

impl ButtonId {
    /// Nummer wie auf dem Board beschriftet (1 oder 2)
    pub const fn number(self) -> u8 {
        match self {
            ButtonId::One => 1,
            ButtonId::Two => 2,
        }
    }

    /// Richtung, die ein Druck auf diesen Taster auslöst
    pub const fn direction(self) -> Direction {
        match self {
            ButtonId::One => Direction::CounterClockwise,
            ButtonId::Two => Direction::Clockwise,
        }
    }
}

/// Ergebnis einer behandelten Flanke
///
/// Existiert nur für die Dauer des Interrupt-Handlers ("Triggered"),
/// danach ist der Taster wieder im Idle-Zustand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ButtonPress {
    pub button: ButtonId,
    pub direction: Direction,
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for Direction {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Direction::Clockwise => defmt::write!(fmt, "Clockwise"),
            Direction::CounterClockwise => defmt::write!(fmt, "CounterClockwise"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ButtonPress {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "ButtonPress {{ button: {}, direction: {} }}",
            self.button.number(),
            self.direction
        )
    }
}
