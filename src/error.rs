use std::ffi::c_int;
use std::result;

use libusb_src::*;

pub type Result<T = ()> = result::Result<T, Error>;

/// Failure surface of the fd bootstrap. [Error::Libusb] keeps the raw
/// status the library reported, so diagnostic callers can still read the
/// exact code.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid parameter")]
    InvalidParam,

    #[error("Entity not found")]
    NotFound,

    #[error("libusb error {0}: {}", strerror(*.0))]
    Libusb(i32),
}

impl Error {
    /// Raw libusb status for [Error::Libusb], `None` otherwise.
    pub fn libusb_code(&self) -> Option<i32> {
        match self {
            Error::Libusb(code) => Some(*code),
            _ => None,
        }
    }
}

fn strerror(code: i32) -> &'static str {
    match code {
        LIBUSB_ERROR_IO            => "input/output error",
        LIBUSB_ERROR_INVALID_PARAM => "invalid parameter",
        LIBUSB_ERROR_ACCESS        => "access denied (insufficient permissions)",
        LIBUSB_ERROR_NO_DEVICE     => "no such device (it may have been disconnected)",
        LIBUSB_ERROR_NOT_FOUND     => "entity not found",
        LIBUSB_ERROR_BUSY          => "resource busy",
        LIBUSB_ERROR_TIMEOUT       => "operation timed out",
        LIBUSB_ERROR_OVERFLOW      => "overflow",
        LIBUSB_ERROR_PIPE          => "pipe error",
        LIBUSB_ERROR_INTERRUPTED   => "system call interrupted (perhaps due to signal)",
        LIBUSB_ERROR_NO_MEM        => "insufficient memory",
        LIBUSB_ERROR_NOT_SUPPORTED => "operation not supported or unimplemented on this platform",
        _ => "unknown libusb error",
    }
}

pub(crate) fn check_err(r: c_int) -> Result<i32> {
    if r >= 0 { Ok(r as _) } else { Err(Error::Libusb(r as _)) }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn check_err_passes_non_negative() {
        assert_eq!(check_err(0).unwrap(), 0);
        assert_eq!(check_err(17).unwrap(), 17);
    }

    #[test]
    fn check_err_keeps_code() {
        let e = check_err(LIBUSB_ERROR_ACCESS).unwrap_err();
        assert_eq!(e, Error::Libusb(LIBUSB_ERROR_ACCESS));
        assert_eq!(e.libusb_code(), Some(LIBUSB_ERROR_ACCESS));
    }

    #[test]
    fn display_names_the_cause() {
        let msg = Error::Libusb(LIBUSB_ERROR_NO_DEVICE).to_string();
        assert!(msg.contains("no such device"));
        assert!(msg.contains(&LIBUSB_ERROR_NO_DEVICE.to_string()));
        assert_eq!(Error::InvalidParam.libusb_code(), None);
    }
}
