// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Embassy Async Runtime
use defmt::{error, info};
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::gpio::Io;
use esp_hal::timer::timg::TimerGroup;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use esp_led_ring::buttons::{self, button_interrupt_handler};
use esp_led_ring::config::{BUTTON_ONE_GPIO, BUTTON_TWO_GPIO, HALT_SLEEP_SECS, LED_GPIOS};
use esp_led_ring::hal::{GpioButtonLine, GpioLedLine};
use esp_led_ring::led_ring::{log_slots, run_led_ring};
use esp_led_ring::start_up;

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Richtet Taster und LEDs ein und lässt danach den LED-Ring im
/// Hauptkontext laufen. Schlägt ein Taster fehl, startet der Ring nie.
#[esp_rtos::main]
async fn main(_spawner: Spawner) -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    // GPIO Interrupt Handler registrieren, bevor ein Pin auf Flanken hört
    let mut io = Io::new(peripherals.IO_MUX);
    io.set_interrupt_handler(button_interrupt_handler);

    let mut button_lines = [
        GpioButtonLine::new(peripherals.GPIO9, BUTTON_ONE_GPIO),
        GpioButtonLine::new(peripherals.GPIO18, BUTTON_TWO_GPIO),
    ];

    // Ring-Reihenfolge LED1-LED2-LED4-LED3
    let led_lines = [
        Some(GpioLedLine::new(peripherals.GPIO0, LED_GPIOS[0])),
        Some(GpioLedLine::new(peripherals.GPIO1, LED_GPIOS[1])),
        Some(GpioLedLine::new(peripherals.GPIO3, LED_GPIOS[2])),
        Some(GpioLedLine::new(peripherals.GPIO2, LED_GPIOS[3])),
    ];

    // GPIOs werden erst in start_up() konfiguriert: Taster zuerst, dann LEDs.
    // listen() und Übergabe an den Handler in einer Critical Section; die
    // Taster werden auch im Fehlerfall übergeben, damit der Interrupt
    // bereits aktivierte Leitungen quittieren kann.
    let startup = critical_section::with(|cs| {
        let startup = start_up(&mut button_lines, led_lines);
        buttons::install(cs, button_lines);
        startup
    });

    match startup {
        Ok(startup) => {
            info!(
                "Buttons ready on pins {} and {}",
                BUTTON_ONE_GPIO, BUTTON_TWO_GPIO
            );
            log_slots(&startup.slots);
            run_led_ring(startup.ring).await
        }
        Err(e) => {
            error!("Button setup failed: {}; LED ring not started", e);
            loop {
                Timer::after(Duration::from_secs(HALT_SLEEP_SECS)).await;
            }
        }
    }
}
