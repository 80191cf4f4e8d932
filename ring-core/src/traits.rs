//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.

/// Fehler-Typ für die Konfiguration einer GPIO-Leitung
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LineError {
    /// Die zugrundeliegende Hardware ist beim Start nicht verfügbar
    NotReady,
    /// Richtung (Input/Output) konnte nicht gesetzt werden
    ConfigFailed,
    /// Interrupt-Modus konnte nicht gesetzt werden
    InterruptFailed,
}

/// Trait für eine LED-Ausgangsleitung
///
/// # Implementierungen
/// - **Production:** GpioLedLine (esp-hal `Output`)
/// - **Testing:** MockLedLine (in-memory Mock)
pub trait LedLine {
    /// GPIO-Nummer (nur für Diagnose)
    fn pin(&self) -> u8;

    /// Ist die Hardware hinter der Leitung vorhanden?
    fn is_ready(&self) -> bool;

    /// Konfiguriert die Leitung als Ausgang
    fn configure_output(&mut self) -> Result<(), LineError>;

    /// Setzt die Leitung high/low
    ///
    /// Fire-and-forget: ein Fehler beim Schalten ist nicht beobachtbar.
    fn set(&mut self, high: bool);
}

/// Trait für eine Taster-Eingangsleitung
///
/// # Implementierungen
/// - **Production:** GpioButtonLine (esp-hal `Input`)
/// - **Testing:** MockButtonLine (in-memory Mock)
pub trait ButtonLine {
    /// GPIO-Nummer, bestimmt auch das Bit im Interrupt-Payload
    fn pin(&self) -> u8;

    /// Ist die Hardware hinter der Leitung vorhanden?
    fn is_ready(&self) -> bool;

    /// Konfiguriert die Leitung als Eingang
    fn configure_input(&mut self) -> Result<(), LineError>;

    /// Aktiviert den Interrupt auf die aktive Flanke
    fn enable_edge_interrupt(&mut self) -> Result<(), LineError>;
}

/// Trait für die Pause zwischen zwei Ring-Schritten
///
/// Einzige Stelle, an der der Cycler die CPU abgibt.
#[allow(async_fn_in_trait)]
pub trait BlinkDelay {
    async fn delay_ms(&mut self, ms: u64);
}

#[cfg(feature = "defmt")]
impl defmt::Format for LineError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            LineError::NotReady => defmt::write!(fmt, "NotReady"),
            LineError::ConfigFailed => defmt::write!(fmt, "ConfigFailed"),
            LineError::InterruptFailed => defmt::write!(fmt, "InterruptFailed"),
        }
    }
}
