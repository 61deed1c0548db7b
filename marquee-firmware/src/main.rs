//! Marquee - Cabinet Lighting Firmware
//!
//! Reads the game's lights stream from UART0 and drives a 100-pixel
//! marquee strip plus an analog RGB bass fixture. Everything runs in one
//! cooperative loop: poll the link, render, push the frame, yield.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_futures::yield_now;
use embassy_rp::bind_interrupts;
use embassy_rp::peripherals::{PIO0, UART0};
use embassy_rp::pio::{InterruptHandler as PioInterruptHandler, Pio};
use embassy_rp::pio_programs::ws2812::{Grb, PioWs2812, PioWs2812Program};
use embassy_rp::pwm::Pwm;
use embassy_rp::uart::{BufferedInterruptHandler, Uart};
use embassy_time::Instant;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use marquee_core::traits::RgbFixture;
use marquee_core::{Controller, STRIP_LEN};
use marquee_drivers::fixture::PwmFixture;
use marquee_drivers::serial::IoUart;
use marquee_hal::UartConfig;

mod board;
mod config;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
    PIO0_IRQ_0 => PioInterruptHandler<PIO0>;
});

// UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 64]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 256]> = StaticCell::new();

/// Uptime in milliseconds; wraps after ~49 days, which the cadences tolerate
fn now_ms() -> u32 {
    Instant::now().as_millis() as u32
}

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Marquee firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = config::load_config();
    config::log_summary(&config);

    // Game link on UART0
    let link_config = UartConfig::with_baudrate(config.link.baudrate);
    let tx_buf = TX_BUF.init([0u8; 64]);
    let rx_buf = RX_BUF.init([0u8; 256]);
    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, board::uart_config(&link_config));
    let mut link = IoUart::new(uart.into_buffered(Irqs, tx_buf, rx_buf));
    info!("UART0 initialized at {} baud", link_config.baudrate);

    // Marquee strip on PIO0
    let Pio {
        mut common, sm0, ..
    } = Pio::new(p.PIO0, Irqs);
    let program = PioWs2812Program::new(&mut common);
    let mut strip: PioWs2812<'_, PIO0, 0, STRIP_LEN, Grb> =
        PioWs2812::new(&mut common, sm0, p.DMA_CH0, p.PIN_6, &program);
    info!("Strip initialized, {} pixels", STRIP_LEN);

    // Bass fixture on PWM slices 4 and 5
    let pwm_config = board::fixture_pwm_config();
    let (red, green) =
        Pwm::new_output_ab(p.PWM_SLICE4, p.PIN_8, p.PIN_9, pwm_config.clone()).split();
    let (blue, _) = Pwm::new_output_a(p.PWM_SLICE5, p.PIN_10, pwm_config).split();
    let mut fixture = PwmFixture::new_common_cathode(unwrap!(red), unwrap!(green), unwrap!(blue));
    info!("Fixture initialized");

    let mut controller = Controller::new(&config, now_ms());
    let mut zones = controller.zones();
    info!("Lighting loop running");

    loop {
        let cycle = controller.cycle(now_ms(), &mut link);

        if let Some(byte) = cycle.byte {
            trace!("Link rx: {=u8:#04x}", byte);
        }
        if let Some(e) = cycle.error {
            warn!("Link error: {:?}", e);
        }
        if let Some(reason) = cycle.dropped {
            trace!("Dropped line: {:?}", reason);
        }
        if controller.zones() != zones {
            zones = controller.zones();
            debug!("Zones: {:?}", zones);
        }
        if !cycle.edges.is_empty() {
            debug!("Edges: {:?} at hue {}", cycle.edges, controller.hue());
        }
        if cycle.flushed {
            info!("All zones lit, link flushed");
        }
        if cycle.heartbeat {
            trace!("Heartbeat sent");
        }

        strip.write(controller.frame()).await;

        if let Err(e) = fixture.set_rgb(cycle.fixture) {
            warn!("Fixture error: {:?}", e);
        }

        yield_now().await;
    }
}
