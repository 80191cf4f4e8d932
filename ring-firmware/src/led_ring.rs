// LED-Ring auf der Hardware: Start-Log und Endlosschleife

use defmt::{info, warn};
use ring_core::{LedCycler, LedRing, SlotStatus};

use crate::buttons::direction;
use crate::config::BLINK_TIME_MS;
use crate::hal::{EmbassyDelay, GpioLedLine};

/// Loggt das Ergebnis der LED-Einrichtung pro Slot
pub fn log_slots(slots: &[SlotStatus]) {
    for (slot, status) in slots.iter().enumerate() {
        match status {
            SlotStatus::Ready { pin } => info!("Set up LED at pin {}", pin),
            SlotStatus::Missing => warn!("LED slot {} has no line; ignoring it", slot),
            SlotStatus::Disabled { pin, error } => {
                warn!("LED at pin {} failed to configure ({}); ignoring it", pin, error)
            }
        }
    }
}

/// Lässt den Ring endlos laufen
///
/// Läuft im Hauptkontext; die Taster greifen nur über den Richtungs-Zustand ein.
pub async fn run_led_ring(ring: LedRing<GpioLedLine>) -> ! {
    info!(
        "LED ring running: {} LEDs, {} ms per step",
        ring.len(),
        BLINK_TIME_MS
    );

    let mut cycler = LedCycler::new(ring, direction(), EmbassyDelay, BLINK_TIME_MS);
    cycler.run().await
}
