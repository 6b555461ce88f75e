//! GPIO / peripheral pin assignments for the siren board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers.

// ---------------------------------------------------------------------------
// Buzzer (passive piezo, driven by LEDC PWM at the tone frequency)
// ---------------------------------------------------------------------------

pub const BUZZER_GPIO: i32 = 8;

// ---------------------------------------------------------------------------
// Status LEDs (discrete, active HIGH)
// ---------------------------------------------------------------------------

/// Green: alarm idle.
pub const LED_GREEN_GPIO: i32 = 9;
/// Red: alarm active.
pub const LED_RED_GPIO: i32 = 10;
/// Amber: command acknowledgment blink.
pub const LED_AMBER_GPIO: i32 = 11;

// ---------------------------------------------------------------------------
// UART command link
// ---------------------------------------------------------------------------

pub const UART_PORT: i32 = 1;
pub const UART_TX_GPIO: i32 = 17;
pub const UART_RX_GPIO: i32 = 18;
/// Driver RX ring buffer size (bytes). Must exceed the hardware FIFO (128).
pub const UART_RX_BUFFER: i32 = 256;

// ---------------------------------------------------------------------------
// PWM configuration
// ---------------------------------------------------------------------------

/// 50 % duty at 8-bit resolution: square wave for the piezo.
pub const BUZZER_TONE_DUTY: u8 = 128;
/// Frequency the buzzer timer is configured with at boot (output stays at duty 0).
pub const BUZZER_BOOT_FREQ_HZ: u32 = 800;
