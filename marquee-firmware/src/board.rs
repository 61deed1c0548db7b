//! Board bindings for RP2040 cabinet controllers
//!
//! | Function        | Peripheral          | Pins          |
//! |-----------------|---------------------|---------------|
//! | Game link       | UART0               | GPIO0 / GPIO1 |
//! | Marquee strip   | PIO0 SM0 + DMA_CH0  | GPIO6         |
//! | Fixture R / G   | PWM slice 4 A / B   | GPIO8 / GPIO9 |
//! | Fixture B       | PWM slice 5 A       | GPIO10        |

use embassy_rp::pwm::Config as PwmConfig;
use embassy_rp::uart;
use marquee_hal::{DataBits, Parity, StopBits, UartConfig};

/// PWM counter top for the fixture channels (125 MHz / 25000 = 5 kHz)
const FIXTURE_PWM_TOP: u16 = 25_000;

/// Translate link settings into the RP2040 UART configuration
pub fn uart_config(config: &UartConfig) -> uart::Config {
    let mut cfg = uart::Config::default();
    cfg.baudrate = config.baudrate;
    cfg.data_bits = match config.data_bits {
        DataBits::Seven => uart::DataBits::DataBits7,
        DataBits::Eight => uart::DataBits::DataBits8,
    };
    cfg.parity = match config.parity {
        Parity::None => uart::Parity::ParityNone,
        Parity::Even => uart::Parity::ParityEven,
        Parity::Odd => uart::Parity::ParityOdd,
    };
    cfg.stop_bits = match config.stop_bits {
        StopBits::One => uart::StopBits::STOP1,
        StopBits::Two => uart::StopBits::STOP2,
    };
    cfg
}

/// PWM slice configuration for the fixture, all channels off
pub fn fixture_pwm_config() -> PwmConfig {
    let mut cfg = PwmConfig::default();
    cfg.top = FIXTURE_PWM_TOP;
    cfg.compare_a = 0;
    cfg.compare_b = 0;
    cfg
}
