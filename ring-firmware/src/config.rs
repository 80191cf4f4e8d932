// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen

use ring_core::RING_SIZE;
use ring_core::config::blink_time_ms;

// ============================================================================
// Taster Konfiguration
// ============================================================================

/// GPIO-Pin für Taster 1 (BOOT-Taster, active low)
/// Druck → gegen den Uhrzeigersinn
pub const BUTTON_ONE_GPIO: u8 = 9;

/// GPIO-Pin für Taster 2 (extern, active low)
/// Druck → im Uhrzeigersinn
pub const BUTTON_TWO_GPIO: u8 = 18;

// ============================================================================
// LED Konfiguration
// ============================================================================

/// GPIO-Pins der vier LEDs in Ring-Reihenfolge
/// Verdrahtet als LED1-LED2-LED4-LED3, damit +1 zur physisch benachbarten LED führt
pub const LED_GPIOS: [u8; RING_SIZE] = [0, 1, 3, 2];

/// Blink-Zeit pro LED in Millisekunden
/// Default 500 ms, überschreibbar per BLINK_TIME_MS (Environment oder .env)
pub const BLINK_TIME_MS: u64 = blink_time_ms(option_env!("BLINK_TIME_MS"));

/// Schlaf-Intervall, wenn der Start fehlgeschlagen ist
pub const HALT_SLEEP_SECS: u64 = 3600;
