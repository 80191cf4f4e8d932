// Blink-Pause über den Embassy-Timer

use embassy_time::{Duration, Timer};
use ring_core::BlinkDelay;

/// Async Delay: gibt die CPU während der Blink-Zeit an den Executor zurück
pub struct EmbassyDelay;

impl BlinkDelay for EmbassyDelay {
    async fn delay_ms(&mut self, ms: u64) {
        Timer::after(Duration::from_millis(ms)).await;
    }
}
