//! Gemeinsame Mocks für die Host-Tests
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use ring_core::{BlinkDelay, ButtonLine, Direction, DirectionState, LedLine, LineError, RING_SIZE};

// ============================================================================
// Event-Log
// ============================================================================

/// Alles, was Cycler und LEDs nach außen tun, in Reihenfolge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    On(u8),
    Off(u8),
    Wait(u64),
    /// LED-Leitung als Ausgang eingerichtet
    LedConfigured(u8),
    /// Taster-Leitung als Eingang eingerichtet
    ButtonConfigured(u8),
}

pub type EventLog = Rc<RefCell<Vec<Event>>>;

pub fn new_log() -> EventLog {
    Rc::new(RefCell::new(Vec::new()))
}

/// Pins in der Reihenfolge, in der sie eingeschaltet wurden
pub fn lit_sequence(log: &EventLog) -> Vec<u8> {
    log.borrow()
        .iter()
        .filter_map(|e| match e {
            Event::On(pin) => Some(*pin),
            _ => None,
        })
        .collect()
}

/// Maximale Anzahl gleichzeitig leuchtender LEDs über den ganzen Log
pub fn max_lit_at_once(log: &EventLog) -> usize {
    let mut lit: Vec<u8> = Vec::new();
    let mut max = 0;
    for event in log.borrow().iter() {
        match event {
            Event::On(pin) => {
                if !lit.contains(pin) {
                    lit.push(*pin);
                }
            }
            Event::Off(pin) => lit.retain(|p| p != pin),
            _ => {}
        }
        max = max.max(lit.len());
    }
    max
}

// ============================================================================
// Mock LED Line
// ============================================================================

pub struct MockLedLine {
    pub pin: u8,
    pub ready: bool,
    pub config_result: Result<(), LineError>,
    log: EventLog,
}

impl MockLedLine {
    pub fn new(pin: u8, log: &EventLog) -> Self {
        Self {
            pin,
            ready: true,
            config_result: Ok(()),
            log: log.clone(),
        }
    }

    pub fn not_ready(mut self) -> Self {
        self.ready = false;
        self
    }

    pub fn failing(mut self, error: LineError) -> Self {
        self.config_result = Err(error);
        self
    }
}

impl LedLine for MockLedLine {
    fn pin(&self) -> u8 {
        self.pin
    }

    fn is_ready(&self) -> bool {
        self.ready
    }

    fn configure_output(&mut self) -> Result<(), LineError> {
        self.config_result?;
        self.log.borrow_mut().push(Event::LedConfigured(self.pin));
        Ok(())
    }

    fn set(&mut self, high: bool) {
        let event = if high {
            Event::On(self.pin)
        } else {
            Event::Off(self.pin)
        };
        self.log.borrow_mut().push(event);
    }
}

/// Ring mit vier funktionierenden LEDs, Pins 0..4 in Ring-Reihenfolge
pub fn healthy_ring(log: &EventLog) -> [Option<MockLedLine>; RING_SIZE] {
    [0, 1, 2, 3].map(|pin| Some(MockLedLine::new(pin, log)))
}

// ============================================================================
// Mock Button Line
// ============================================================================

pub struct MockButtonLine {
    pub pin: u8,
    pub ready: bool,
    pub input_result: Result<(), LineError>,
    pub interrupt_result: Result<(), LineError>,
    pub interrupt_enabled: bool,
    log: Option<EventLog>,
}

impl MockButtonLine {
    pub fn new(pin: u8) -> Self {
        Self {
            pin,
            ready: true,
            input_result: Ok(()),
            interrupt_result: Ok(()),
            interrupt_enabled: false,
            log: None,
        }
    }

    /// Wie `new()`, schreibt die Eingangs-Konfiguration zusätzlich in den Log
    pub fn logged(pin: u8, log: &EventLog) -> Self {
        Self {
            log: Some(log.clone()),
            ..Self::new(pin)
        }
    }
}

impl ButtonLine for MockButtonLine {
    fn pin(&self) -> u8 {
        self.pin
    }

    fn is_ready(&self) -> bool {
        self.ready
    }

    fn configure_input(&mut self) -> Result<(), LineError> {
        self.input_result?;
        if let Some(log) = &self.log {
            log.borrow_mut().push(Event::ButtonConfigured(self.pin));
        }
        Ok(())
    }

    fn enable_edge_interrupt(&mut self) -> Result<(), LineError> {
        self.interrupt_result?;
        self.interrupt_enabled = true;
        Ok(())
    }
}

// ============================================================================
// Mock Delay
// ============================================================================

/// Delay, das während der Wartezeit einen "Interrupt" simulieren kann
///
/// `flips` enthält (Nummer des Wartens, beginnend bei 0, neue Richtung).
pub struct MockDelay<'a> {
    log: EventLog,
    state: &'a DirectionState,
    flips: Vec<(usize, Direction)>,
    pub calls: usize,
}

impl<'a> MockDelay<'a> {
    pub fn new(log: &EventLog, state: &'a DirectionState) -> Self {
        Self {
            log: log.clone(),
            state,
            flips: Vec::new(),
            calls: 0,
        }
    }

    pub fn flip_during(mut self, wait: usize, direction: Direction) -> Self {
        self.flips.push((wait, direction));
        self
    }
}

impl BlinkDelay for MockDelay<'_> {
    async fn delay_ms(&mut self, ms: u64) {
        self.log.borrow_mut().push(Event::Wait(ms));
        for (wait, direction) in &self.flips {
            if *wait == self.calls {
                self.state.set(*direction);
            }
        }
        self.calls += 1;
    }
}
