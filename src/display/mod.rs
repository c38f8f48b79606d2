//! Display bring-up: find the panel on the bus or give up for good.

pub mod blink;

pub use blink::ErrorBlink;

use crate::error::DisplayError;
use tracing::{info, warn};

/// The display driver's initialization entry point.
pub trait Display {
    fn try_init(&mut self, address: u8) -> Result<(), DisplayError>;
}

/// Try each bus address in order and return the first that answers.
pub fn init_with_fallback<D: Display>(
    display: &mut D,
    addresses: &[u8],
) -> Result<u8, DisplayError> {
    if addresses.is_empty() {
        return Err(DisplayError::NoAddresses);
    }

    for &address in addresses {
        match display.try_init(address) {
            Ok(()) => {
                info!("[Display] ready at {:#04x}", address);
                return Ok(address);
            }
            Err(e) => warn!("[Display] {}, trying next address", e),
        }
    }

    Err(DisplayError::NotFound {
        tried: addresses.to_vec(),
    })
}

/// Stand-in panel for headless runs. Answers on one address, or none.
#[derive(Debug, Clone, Default)]
pub struct HeadlessDisplay {
    address: Option<u8>,
    attempts: Vec<u8>,
}

impl HeadlessDisplay {
    pub fn new(address: Option<u8>) -> Self {
        Self {
            address,
            attempts: Vec::new(),
        }
    }

    /// Addresses probed so far, in order.
    pub fn attempts(&self) -> &[u8] {
        &self.attempts
    }
}

impl Display for HeadlessDisplay {
    fn try_init(&mut self, address: u8) -> Result<(), DisplayError> {
        self.attempts.push(address);
        if self.address == Some(address) {
            Ok(())
        } else {
            Err(DisplayError::NotResponding { address })
        }
    }
}
