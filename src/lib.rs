//! Bootstrap libusb from an Android supplied file descriptor and hand the
//! resulting device handle to a HackRF setup routine.
//!
//! The platform side (permission intent, `UsbDeviceConnection`) stays in
//! the host application; this crate starts at the file descriptor it
//! produces.

mod context;
mod device;
pub mod error;
pub mod ids;

pub use context::{UsbContext, UsbOption};
pub use device::{DeviceHandle, DeviceIdentity};
pub use error::{Error, Result};
