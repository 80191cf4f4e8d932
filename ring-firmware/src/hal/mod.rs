// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul implementiert die Traits aus ring-core
// für die esp-hal GPIOs und den Embassy-Timer.

pub mod button_line;
pub mod delay;
pub mod led_line;

pub use button_line::GpioButtonLine;
pub use delay::EmbassyDelay;
pub use led_line::GpioLedLine;
