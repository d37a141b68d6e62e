use std::ffi::CStr;
#[cfg(unix)]
use std::os::unix::io::RawFd;
use std::ptr::null_mut;

use libusb_src::*;
use log::trace;

use crate::context::UsbContext;
use crate::error::*;

/// Owned handle to an open USB device, closed on drop.
///
/// This is the value handed to a setup routine; the routine keeps it inside
/// whatever device object it builds, or drops it to give the device back.
#[derive(Debug)]
pub struct DeviceHandle(*mut libusb_device_handle);

unsafe impl Send for DeviceHandle {}
unsafe impl Sync for DeviceHandle {}

impl Drop for DeviceHandle {
    fn drop(&mut self) {
        unsafe {
            if !self.0.is_null() {
                libusb_close(self.0);
            }
        }
        trace!("drop device handle");
    }
}

/// Vendor/product identity read back from an open handle, enough for a
/// setup routine to decide what it is talking to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceIdentity {
    pub vid: u16,
    pub pid: u16,
    pub serial_index: u8,
}

impl DeviceHandle {
    pub fn claim_interface(&self, interface_number: u8) -> Result {
        unsafe {
            check_err(libusb_claim_interface(self.0, interface_number as _))?;
            Ok(())
        }
    }

    pub fn release_interface(&self, interface_number: u8) -> Result {
        unsafe {
            check_err(libusb_release_interface(self.0, interface_number as _))?;
            Ok(())
        }
    }

    pub fn get_string_descriptor_ascii(&self, index: u8) -> Result<String> {
        unsafe {
            let mut buff = [0u8; 1024];
            let _ = check_err(libusb_get_string_descriptor_ascii(self.0, index, buff.as_mut_ptr(), 1024))?;
            let c = CStr::from_ptr(buff.as_ptr() as _);
            Ok(c.to_string_lossy().to_string())
        }
    }

    pub fn identity(&self) -> Result<DeviceIdentity> {
        unsafe {
            let dev = libusb_get_device(self.0);
            let mut des = libusb_device_descriptor::default();
            check_err(libusb_get_device_descriptor(dev, &mut des))?;
            Ok(DeviceIdentity {
                vid: des.idVendor,
                pid: des.idProduct,
                serial_index: des.iSerialNumber,
            })
        }
    }

    pub fn serial_number(&self) -> Result<String> {
        let des = self.identity()?;
        self.get_string_descriptor_ascii(des.serial_index)
    }
}

impl UsbContext {
    /// Wrap a platform-specific system device handle and obtain a
    /// [DeviceHandle] for the underlying device.
    ///
    /// On Android the file descriptor comes out of `UsbDeviceConnection`
    /// once the permission flow has run; on Linux it must be a valid file
    /// descriptor opened on the device node. The descriptor must remain
    /// open until the handle is dropped; it is not closed with it.
    ///
    /// This is a non-blocking function; no requests are sent over the bus.
    #[cfg(unix)]
    pub fn wrap_fd(&self, fd: RawFd) -> Result<DeviceHandle> {
        if fd < 0 {
            return Err(Error::InvalidParam);
        }
        unsafe {
            let mut handle = null_mut();
            check_err(libusb_wrap_sys_device(self.as_raw(), fd as _, &mut handle))?;
            if handle.is_null() {
                return Err(Error::NotFound);
            }
            Ok(DeviceHandle(handle))
        }
    }

    /// Wrap `fd` and hand the resulting handle to `setup`, the routine that
    /// performs device-specific configuration. Whatever `setup` returns is
    /// returned verbatim.
    #[cfg(unix)]
    pub fn open_device_with_fd<T, S>(&self, fd: RawFd, setup: S) -> Result<T>
    where
        S: FnOnce(DeviceHandle) -> Result<T>,
    {
        let handle = self.wrap_fd(fd)?;
        setup(handle)
    }
}

#[cfg(all(test, unix))]
mod test {
    use std::fs::File;
    use std::os::unix::io::AsRawFd;

    use super::*;

    #[test]
    fn negative_fd_rejected_before_libusb() {
        let ctx = UsbContext::init_default().unwrap();
        let mut setup_ran = false;
        let r: Result<()> = ctx.open_device_with_fd(-1, |_| {
            setup_ran = true;
            Ok(())
        });
        assert_eq!(r.unwrap_err(), Error::InvalidParam);
        assert!(!setup_ran);
    }

    #[test]
    fn non_usb_fd_reports_libusb_code() {
        let ctx = UsbContext::init_default().unwrap();
        let f = File::open("/dev/null").unwrap();
        let e = ctx.wrap_fd(f.as_raw_fd()).unwrap_err();
        let code = e.libusb_code().expect("wrap failure carries the libusb code");
        assert!(code < 0);
    }
}
