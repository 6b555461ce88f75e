//! UART adapter — the serial command link behind [`SerialPort`].
//!
//! - **`target_os = "espidf"`** — installs the ESP-IDF UART driver on
//!   [`pins::UART_PORT`] at the configured baud rate (8N1, no flow control)
//!   and reads with a zero-tick timeout, so `read` never blocks.
//! - **`not(target_os = "espidf")`** — an in-memory receive queue. Bytes
//!   are injected with [`UartSerial::inject`] (host simulation and tests).

use crate::config::SirenConfig;
use crate::error::SerialError;
#[cfg(target_os = "espidf")]
use crate::pins;
use crate::serial::transport::SerialPort;

#[cfg(target_os = "espidf")]
use esp_idf_sys::*;

pub struct UartSerial {
    #[cfg(target_os = "espidf")]
    port: uart_port_t,
    #[cfg(not(target_os = "espidf"))]
    rx: std::collections::VecDeque<u8>,
}

#[cfg(target_os = "espidf")]
impl UartSerial {
    /// Configure pins and line settings, then install the RX driver.
    pub fn new(config: &SirenConfig) -> Result<Self, SerialError> {
        let port = pins::UART_PORT;
        let uart_cfg = uart_config_t {
            baud_rate: config.baud_rate as i32,
            data_bits: uart_word_length_t_UART_DATA_8_BITS,
            parity: uart_parity_t_UART_PARITY_DISABLE,
            stop_bits: uart_stop_bits_t_UART_STOP_BITS_1,
            flow_ctrl: uart_hw_flowcontrol_t_UART_HW_FLOWCTRL_DISABLE,
            ..Default::default()
        };

        // SAFETY: called once from main() before the loop; the port is not
        // used by anything else (the console runs on UART0).
        unsafe {
            let ret = uart_param_config(port, &uart_cfg);
            if ret != ESP_OK as i32 {
                return Err(SerialError::ParamConfigFailed(ret));
            }
            let ret = uart_set_pin(
                port,
                pins::UART_TX_GPIO,
                pins::UART_RX_GPIO,
                UART_PIN_NO_CHANGE,
                UART_PIN_NO_CHANGE,
            );
            if ret != ESP_OK as i32 {
                return Err(SerialError::PinConfigFailed(ret));
            }
            let ret = uart_driver_install(
                port,
                pins::UART_RX_BUFFER,
                0,
                0,
                core::ptr::null_mut(),
                0,
            );
            if ret != ESP_OK as i32 {
                return Err(SerialError::DriverInstallFailed(ret));
            }
        }

        log::info!("uart: UART{} up at {} baud (8N1)", port, config.baud_rate);
        Ok(Self { port })
    }
}

#[cfg(target_os = "espidf")]
impl SerialPort for UartSerial {
    type Error = SerialError;

    fn available(&self) -> bool {
        let mut len: usize = 0;
        // SAFETY: driver installed in new(); len is a valid out-pointer.
        let ret = unsafe { uart_get_buffered_data_len(self.port, &mut len) };
        ret == ESP_OK as i32 && len > 0
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, SerialError> {
        // SAFETY: buf is valid for buf.len() bytes; zero-tick timeout
        // returns whatever the driver has buffered.
        let n = unsafe {
            uart_read_bytes(
                self.port,
                buf.as_mut_ptr().cast(),
                buf.len() as u32,
                0,
            )
        };
        if n < 0 {
            return Err(SerialError::ReadFailed(n));
        }
        Ok(n as usize)
    }
}

#[cfg(not(target_os = "espidf"))]
impl UartSerial {
    /// Simulation link: nothing to configure.
    pub fn new(config: &SirenConfig) -> Result<Self, SerialError> {
        log::info!("uart(sim): in-memory link at {} baud", config.baud_rate);
        Ok(Self {
            rx: std::collections::VecDeque::new(),
        })
    }

    /// Queue bytes as if they had arrived on the wire.
    pub fn inject(&mut self, bytes: &[u8]) {
        self.rx.extend(bytes);
    }
}

#[cfg(not(target_os = "espidf"))]
impl SerialPort for UartSerial {
    type Error = SerialError;

    fn available(&self) -> bool {
        !self.rx.is_empty()
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, SerialError> {
        let mut n = 0;
        while n < buf.len() {
            match self.rx.pop_front() {
                Some(b) => {
                    buf[n] = b;
                    n += 1;
                }
                None => break,
            }
        }
        Ok(n)
    }
}
