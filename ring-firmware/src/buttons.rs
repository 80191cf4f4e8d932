// Taster-Interrupt: schreibt die Drehrichtung für den LED-Ring
//
// Einziger Schreiber von DIRECTION ist der GPIO-Interrupt,
// einziger Leser ist der LedCycler in der Hauptschleife.

use core::cell::RefCell;

use critical_section::{CriticalSection, Mutex};
use defmt::info;
use esp_hal::{handler, ram};
use ring_core::{ButtonHandler, DirectionState};

use crate::config::{BUTTON_ONE_GPIO, BUTTON_TWO_GPIO};
use crate::hal::GpioButtonLine;

/// Aktuelle Drehrichtung (atomar, kein Lock)
static DIRECTION: DirectionState = DirectionState::new();

/// Handler für beide Taster
static HANDLER: ButtonHandler<'static> =
    ButtonHandler::new(&DIRECTION, BUTTON_ONE_GPIO, BUTTON_TWO_GPIO);

/// Taster-Leitungen, damit der Interrupt sie quittieren kann
static BUTTONS: Mutex<RefCell<Option<[GpioButtonLine; 2]>>> = Mutex::new(RefCell::new(None));

/// Richtungs-Zustand für den Cycler
pub fn direction() -> &'static DirectionState {
    &DIRECTION
}

/// Übergibt die eingerichteten Taster an den Interrupt-Handler
///
/// Muss in derselben Critical Section passieren, in der `listen()` aufgerufen
/// wurde, sonst kann ein Interrupt ohne quittierbare Leitung auflaufen.
pub fn install(cs: CriticalSection<'_>, buttons: [GpioButtonLine; 2]) {
    BUTTONS.borrow_ref_mut(cs).replace(buttons);
}

/// GPIO Interrupt Handler
///
/// Sammelt die ausgelösten Pins als Bitmaske und gibt sie an den
/// ButtonHandler. Blockiert nie.
#[handler]
#[ram]
pub fn button_interrupt_handler() {
    let pins = critical_section::with(|cs| {
        BUTTONS
            .borrow_ref_mut(cs)
            .as_mut()
            .map(|buttons| buttons.iter_mut().fold(0, |pins, b| pins | b.take_interrupt()))
            .unwrap_or(0)
    });

    // Nur Bits der registrierten Taster weitergeben
    if let Some(press) = HANDLER.on_interrupt(pins & HANDLER.line_mask()) {
        info!("Button {} pressed", press.button.number());
    }
}
