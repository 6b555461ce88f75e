//! Siren Firmware — Main Entry Point
//!
//! One cooperative polling loop, hexagonal layout:
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                    Adapters (outer ring)                   │
//! │                                                            │
//! │  UartSerial    HardwareAdapter   Esp32TimeAdapter          │
//! │  (SerialPort)  (SignalPort)      (TimePort) BlockingDelay  │
//! │  LogEventSink (EventSink)                                  │
//! │                                                            │
//! │  ──────────────── Port Trait Boundary ───────────────      │
//! │                                                            │
//! │  ┌──────────────────────────────────────────────────┐      │
//! │  │          SirenService (pure logic)               │      │
//! │  │  line reader · command dispatch · tone sweep     │      │
//! │  └──────────────────────────────────────────────────┘      │
//! └────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use embedded_hal::delay::DelayNs;
use log::info;

use siren::adapters::hardware::HardwareAdapter;
use siren::adapters::log_sink::LogEventSink;
use siren::adapters::time::{BlockingDelay, Esp32TimeAdapter};
use siren::adapters::uart::UartSerial;
use siren::app::service::SirenService;
use siren::config::SirenConfig;
use siren::drivers::buzzer::BuzzerDriver;
use siren::drivers::hw_init;
use siren::drivers::status_led::StatusLeds;
use siren::error::Error;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  Siren v{}                        ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Configuration ──────────────────────────────────────
    let config = SirenConfig::default();
    config.validate().map_err(Error::from)?;

    // ── 3. Peripherals ────────────────────────────────────────
    if let Err(e) = hw_init::init_peripherals() {
        // Without outputs there is nothing useful to do; halt loudly.
        log::error!("HAL init failed: {} — halting", e);
        return Err(Error::from(e).into());
    }
    let mut serial = match UartSerial::new(&config) {
        Ok(uart) => uart,
        Err(e) => {
            log::error!("UART init failed: {} — halting", e);
            return Err(Error::from(e).into());
        }
    };

    // ── 4. Adapters ───────────────────────────────────────────
    let mut hw = HardwareAdapter::new(BuzzerDriver::new(), StatusLeds::on_board());
    let clock = Esp32TimeAdapter::new();
    let mut delay = BlockingDelay::new();
    let mut log_sink = LogEventSink::new();

    // ── 5. Application service ────────────────────────────────
    let mut app = SirenService::new(config.clone());
    app.start(&mut hw, &mut log_sink);

    info!("System ready. Listening for ON/OFF at {} baud.", config.baud_rate);

    // ── 6. Polling loop ───────────────────────────────────────
    loop {
        app.poll(&mut serial, &mut hw, &clock, &mut delay, &mut log_sink);

        // Let the FreeRTOS idle task run (keeps the idle-task watchdog fed).
        delay.delay_ms(config.loop_yield_ms);
    }
}
