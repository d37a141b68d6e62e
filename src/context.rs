use std::ptr::null_mut;

use libusb_src::*;
use log::trace;

use crate::error::*;

/// Owned libusb context, created through [UsbContext::builder].
///
/// Dropping the context calls `libusb_exit`; every handle wrapped against
/// it must be gone by then.
pub struct UsbContext {
    ptr: *mut libusb_context,
}

unsafe impl Send for UsbContext {}
unsafe impl Sync for UsbContext {}

/// Options that must reach libusb before the context exists.
pub struct UsbOption {
    ptr: *mut libusb_context,
}

impl UsbOption {
    /// Skip enumeration of USB devices. In particular, this might be needed
    /// on Android if you don't have authority to access USB devices in
    /// general.
    #[cfg(all(not(target_os = "android"), unix))]
    pub fn no_device_discovery(&mut self) -> Result<&mut Self> {
        self.set_no_discovery()?;
        Ok(self)
    }

    #[cfg(unix)]
    fn set_no_discovery(&mut self) -> Result {
        unsafe {
            let r = libusb_set_option(self.ptr, LIBUSB_OPTION_NO_DEVICE_DISCOVERY);
            check_err(r)?;
        }
        Ok(())
    }

    /// Create the context. A failed option leaves no context behind.
    pub fn init(&mut self) -> Result<UsbContext> {
        // An Android process has no authority for a bus scan; the granted
        // file descriptor is the only device it may touch.
        #[cfg(target_os = "android")]
        self.set_no_discovery()?;

        unsafe {
            let mut ptr = self.ptr;
            let r = libusb_init(&mut ptr);
            check_err(r)?;
            Ok(UsbContext { ptr })
        }
    }
}

impl UsbContext {
    pub fn builder() -> UsbOption {
        UsbOption { ptr: null_mut() }
    }

    pub fn init_default() -> Result<Self> {
        Self::builder().init()
    }

    pub(crate) fn as_raw(&self) -> *mut libusb_context {
        self.ptr
    }
}

impl Drop for UsbContext {
    fn drop(&mut self) {
        unsafe {
            if !self.ptr.is_null() {
                libusb_exit(self.ptr);
            }
        }
        trace!("drop usb context");
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_init_default() {
        let ctx = UsbContext::init_default().unwrap();
        assert!(!ctx.as_raw().is_null());
    }

    #[cfg(all(not(target_os = "android"), unix))]
    #[test]
    fn test_no_device_discovery() {
        let ctx = UsbContext::builder()
            .no_device_discovery().unwrap()
            .init().unwrap();
        assert!(!ctx.as_raw().is_null());
    }
}
