//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter     | Implements   | Connects to                  |
//! |-------------|--------------|------------------------------|
//! | `hardware`  | SignalPort   | LEDC buzzer, LED GPIOs       |
//! | `log_sink`  | EventSink    | Serial log output            |
//! | `time`      | TimePort     | ESP32 system timer           |
//! |             | DelayNs      | FreeRTOS / ROM delay         |
//! | `uart`      | SerialPort   | ESP-IDF UART driver          |

pub mod hardware;
pub mod log_sink;
pub mod time;
pub mod uart;
