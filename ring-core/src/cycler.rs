//! LED-Cycler: lässt einen leuchtenden Punkt im Ring umlaufen
//!
//! Ablauf pro Schritt:
//! 1. LED am aktiven Index einschalten
//! 2. Blink-Zeit warten (einziger Suspend-Punkt)
//! 3. LED ausschalten
//! 4. Richtung genau einmal lesen
//! 5. Index um +1 / -1 modulo Ringgröße weiterschalten
//!
//! Der aktive Index gehört ausschließlich dem Cycler. Eine Richtungs-Änderung
//! während der Wartezeit wirkt auf den Index-Wechsel am Ende desselben Schritts.

use crate::direction::DirectionState;
use crate::ring::LedRing;
use crate::traits::{BlinkDelay, LedLine};
use crate::types::Direction;

/// Nächster Index im Ring der Größe `len`
///
/// Bleibt immer in `[0, len)`; bei leerem Ring ist das Ergebnis 0.
pub const fn next_index(index: usize, len: usize, direction: Direction) -> usize {
    if len == 0 {
        return 0;
    }
    let index = index % len;
    match direction {
        Direction::Clockwise => (index + 1) % len,
        Direction::CounterClockwise => (index + len - 1) % len,
    }
}

/// Treibt den Ring in der Hauptschleife
pub struct LedCycler<'a, L, D> {
    ring: LedRing<L>,
    direction: &'a DirectionState,
    delay: D,
    blink_ms: u64,
    active: usize,
}

impl<'a, L: LedLine, D: BlinkDelay> LedCycler<'a, L, D> {
    /// Erstellt den Cycler; Start bei Index 0
    pub fn new(ring: LedRing<L>, direction: &'a DirectionState, delay: D, blink_ms: u64) -> Self {
        Self {
            ring,
            direction,
            delay,
            blink_ms,
            active: 0,
        }
    }

    /// Aktueller Index im Ring
    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn ring(&self) -> &LedRing<L> {
        &self.ring
    }

    pub fn delay(&self) -> &D {
        &self.delay
    }

    /// Führt genau einen Schritt aus
    ///
    /// Ohne nutzbare LEDs wird nur die Blink-Zeit gewartet.
    pub async fn step(&mut self) {
        if self.ring.is_empty() {
            self.delay.delay_ms(self.blink_ms).await;
            return;
        }

        self.ring.set(self.active, true);
        self.delay.delay_ms(self.blink_ms).await;
        self.ring.set(self.active, false);

        let direction = self.direction.get();
        self.active = next_index(self.active, self.ring.len(), direction);
    }

    /// Endlosschleife, endet nur mit Reset
    pub async fn run(&mut self) -> ! {
        loop {
            self.step().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::LineError;
    use core::cell::Cell;
    use embassy_futures::block_on;

    #[test]
    fn test_next_index_clockwise_wraps() {
        assert_eq!(next_index(0, 4, Direction::Clockwise), 1);
        assert_eq!(next_index(3, 4, Direction::Clockwise), 0);
    }

    #[test]
    fn test_next_index_counter_clockwise_wraps() {
        assert_eq!(next_index(0, 4, Direction::CounterClockwise), 3);
        assert_eq!(next_index(2, 4, Direction::CounterClockwise), 1);
    }

    #[test]
    fn test_next_index_small_rings() {
        assert_eq!(next_index(0, 1, Direction::Clockwise), 0);
        assert_eq!(next_index(0, 1, Direction::CounterClockwise), 0);
        assert_eq!(next_index(5, 0, Direction::Clockwise), 0);
        assert_eq!(next_index(7, 3, Direction::Clockwise), 2);
    }

    struct CountingLed<'c> {
        pin: u8,
        high_count: &'c Cell<usize>,
    }

    impl LedLine for CountingLed<'_> {
        fn pin(&self) -> u8 {
            self.pin
        }

        fn is_ready(&self) -> bool {
            true
        }

        fn configure_output(&mut self) -> Result<(), LineError> {
            Ok(())
        }

        fn set(&mut self, high: bool) {
            if high {
                self.high_count.set(self.high_count.get() + 1);
            }
        }
    }

    #[derive(Default)]
    struct CountingDelay {
        calls: usize,
        total_ms: u64,
    }

    impl BlinkDelay for CountingDelay {
        async fn delay_ms(&mut self, ms: u64) {
            self.calls += 1;
            self.total_ms += ms;
        }
    }

    #[test]
    fn test_step_advances_and_waits() {
        let high_count = Cell::new(0);
        let led = |pin| {
            Some(CountingLed {
                pin,
                high_count: &high_count,
            })
        };
        let (ring, _) = LedRing::configure([led(1), led(2), led(4), led(3)]);
        let state = DirectionState::new();
        let mut cycler = LedCycler::new(ring, &state, CountingDelay::default(), 500);

        block_on(cycler.step());
        block_on(cycler.step());

        assert_eq!(cycler.active_index(), 2);
        assert_eq!(high_count.get(), 2);
        assert_eq!(cycler.delay().calls, 2);
        assert_eq!(cycler.delay().total_ms, 1000);
    }

    #[test]
    fn test_empty_ring_keeps_cadence() {
        let (ring, _) = LedRing::<CountingLed>::configure([None, None, None, None]);
        let state = DirectionState::new();
        let mut cycler = LedCycler::new(ring, &state, CountingDelay::default(), 500);

        block_on(cycler.step());

        assert_eq!(cycler.active_index(), 0);
        assert_eq!(cycler.delay().calls, 1);
    }
}
