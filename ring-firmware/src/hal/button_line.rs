// Taster-Eingangsleitung über esp-hal GPIO

use esp_hal::gpio::{AnyPin, Event, Input, InputConfig, Pin, Pull};
use ring_core::{ButtonLine, LineError, pin_bit};

/// Real Hardware Button Line
///
/// Taster sind active low (Pull-Up), die aktive Flanke ist daher die fallende.
/// Der GPIO wird erst in `configure_input()` als Eingang eingerichtet.
pub struct GpioButtonLine {
    pin: Option<AnyPin<'static>>,
    input: Option<Input<'static>>,
    gpio: u8,
}

impl GpioButtonLine {
    /// Erstellt eine Taster-Leitung, ohne den GPIO anzufassen
    ///
    /// # Parameter
    /// - `pin`: GPIO Peripheral des Tasters
    /// - `gpio`: GPIO-Nummer (Bit im Interrupt-Payload)
    pub fn new(pin: impl Pin + 'static, gpio: u8) -> Self {
        Self {
            pin: Some(pin.degrade()),
            input: None,
            gpio,
        }
    }

    /// Liest und quittiert den Interrupt dieser Leitung
    ///
    /// Gibt das Pin-Bit zurück, wenn die Leitung ausgelöst hat, sonst 0.
    /// Nur aus dem Interrupt-Handler aufrufen.
    pub fn take_interrupt(&mut self) -> u32 {
        match self.input.as_mut() {
            Some(input) if input.is_interrupt_set() => {
                input.clear_interrupt();
                pin_bit(self.gpio)
            }
            _ => 0,
        }
    }
}

impl ButtonLine for GpioButtonLine {
    fn pin(&self) -> u8 {
        self.gpio
    }

    fn is_ready(&self) -> bool {
        // Pins ab 32 passen nicht in die Interrupt-Bitmaske
        pin_bit(self.gpio) != 0 && (self.pin.is_some() || self.input.is_some())
    }

    fn configure_input(&mut self) -> Result<(), LineError> {
        if self.input.is_some() {
            return Ok(());
        }
        let pin = self.pin.take().ok_or(LineError::NotReady)?;
        self.input = Some(Input::new(pin, InputConfig::default().with_pull(Pull::Up)));
        Ok(())
    }

    fn enable_edge_interrupt(&mut self) -> Result<(), LineError> {
        let input = self.input.as_mut().ok_or(LineError::InterruptFailed)?;
        input.listen(Event::FallingEdge);
        Ok(())
    }
}
