use std::fmt::{Display, Formatter};

pub const HACKRF_USB_VID: u16 = 0x1d50;
pub const HACKRF_JAWBREAKER_USB_PID: u16 = 0x604b;
pub const HACKRF_ONE_USB_PID: u16 = 0x6089;
pub const RAD1O_USB_PID: u16 = 0xcc15;

/// HackRF boards that enumerate over USB.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Board {
    Jawbreaker,
    HackrfOne,
    Rad1o,
}

impl Board {
    pub fn from_usb_pid(pid: u16) -> Option<Board> {
        match pid {
            HACKRF_JAWBREAKER_USB_PID => Some(Board::Jawbreaker),
            HACKRF_ONE_USB_PID => Some(Board::HackrfOne),
            RAD1O_USB_PID => Some(Board::Rad1o),
            _ => None,
        }
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Board::Jawbreaker => "Jawbreaker",
            Board::HackrfOne => "HackRF One",
            Board::Rad1o => "rad1o",
        };
        write!(f, "{}", name)
    }
}

/// Filter for the platform device list, so permission is only requested
/// for devices a HackRF setup routine can actually use.
pub fn is_hackrf(vid: u16, pid: u16) -> bool {
    vid == HACKRF_USB_VID && Board::from_usb_pid(pid).is_some()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn known_boards() {
        assert_eq!(Board::from_usb_pid(0x604b), Some(Board::Jawbreaker));
        assert_eq!(Board::from_usb_pid(0x6089), Some(Board::HackrfOne));
        assert_eq!(Board::from_usb_pid(0xcc15), Some(Board::Rad1o));
        assert_eq!(Board::from_usb_pid(0x6000), None);
    }

    #[test]
    fn hackrf_id_filter() {
        assert!(is_hackrf(HACKRF_USB_VID, HACKRF_ONE_USB_PID));
        assert!(!is_hackrf(0x1d6b, HACKRF_ONE_USB_PID));
        assert!(!is_hackrf(HACKRF_USB_VID, 0x0001));
    }

    #[test]
    fn board_names() {
        assert_eq!(Board::HackrfOne.to_string(), "HackRF One");
        assert_eq!(Board::Rad1o.to_string(), "rad1o");
    }
}
