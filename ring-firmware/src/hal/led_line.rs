// LED-Ausgangsleitung über esp-hal GPIO

use esp_hal::gpio::{AnyPin, Level, Output, OutputConfig, Pin};
use ring_core::{LedLine, LineError};

/// Real Hardware LED Line
///
/// Hält bis zu `configure_output()` nur den rohen Pin; erst dort wird
/// der GPIO als Ausgang (low) eingerichtet. Vorher ist `set()` wirkungslos.
pub struct GpioLedLine {
    pin: Option<AnyPin<'static>>,
    output: Option<Output<'static>>,
    gpio: u8,
}

impl GpioLedLine {
    /// Erstellt eine LED-Leitung, ohne den GPIO anzufassen
    ///
    /// # Parameter
    /// - `pin`: GPIO Peripheral der LED
    /// - `gpio`: GPIO-Nummer (für Logging)
    pub fn new(pin: impl Pin + 'static, gpio: u8) -> Self {
        Self {
            pin: Some(pin.degrade()),
            output: None,
            gpio,
        }
    }
}

impl LedLine for GpioLedLine {
    fn pin(&self) -> u8 {
        self.gpio
    }

    fn is_ready(&self) -> bool {
        self.pin.is_some() || self.output.is_some()
    }

    fn configure_output(&mut self) -> Result<(), LineError> {
        if self.output.is_some() {
            return Ok(());
        }
        let pin = self.pin.take().ok_or(LineError::NotReady)?;
        self.output = Some(Output::new(pin, Level::Low, OutputConfig::default()));
        Ok(())
    }

    fn set(&mut self, high: bool) {
        if let Some(output) = self.output.as_mut() {
            output.set_level(Level::from(high));
        }
    }
}
