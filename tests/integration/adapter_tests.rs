//! The service driving the real (host-simulated) adapters and drivers.

use std::rc::Rc;

use siren::adapters::hardware::HardwareAdapter;
use siren::adapters::log_sink::LogEventSink;
use siren::adapters::uart::UartSerial;
use siren::app::alarm::AlarmState;
use siren::app::service::SirenService;
use siren::config::SirenConfig;
use siren::drivers::buzzer::{BuzzerDriver, BuzzerState};
use siren::drivers::status_led::{LedLevels, StatusLeds};

use super::mock_hw::{MockClock, MockDelay, Timeline};

#[test]
fn hardware_adapter_follows_commands() {
    let config = SirenConfig::default();
    let t = Rc::new(Timeline::default());
    let clock = MockClock(t.clone());
    let mut delay = MockDelay(t.clone());
    let mut uart = UartSerial::new(&config).unwrap();
    let mut hw = HardwareAdapter::new(BuzzerDriver::new(), StatusLeds::on_board());
    let mut sink = LogEventSink::new();

    let mut app = SirenService::new(config);
    app.start(&mut hw, &mut sink);
    assert_eq!(
        hw.led_levels(),
        LedLevels {
            green: true,
            red: false,
            amber: false
        }
    );
    assert_eq!(hw.buzzer_state(), BuzzerState::Silent);

    uart.inject(b"ON\n");
    app.poll(&mut uart, &mut hw, &clock, &mut delay, &mut sink);
    assert_eq!(app.alarm(), AlarmState::Active);
    assert_eq!(
        hw.led_levels(),
        LedLevels {
            green: false,
            red: true,
            amber: false
        }
    );
    assert_eq!(hw.buzzer_state(), BuzzerState::Tone { freq_hz: 800 });

    t.advance(20);
    app.poll(&mut uart, &mut hw, &clock, &mut delay, &mut sink);
    assert_eq!(hw.buzzer_state(), BuzzerState::Tone { freq_hz: 840 });

    uart.inject(b"OFF\r\n");
    app.poll(&mut uart, &mut hw, &clock, &mut delay, &mut sink);
    assert_eq!(hw.buzzer_state(), BuzzerState::Silent);
    assert_eq!(
        hw.led_levels(),
        LedLevels {
            green: true,
            red: false,
            amber: false
        }
    );
}
