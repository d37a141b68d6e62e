use log::{info, LevelFilter};

use hackrf_android::{ids, Error, UsbContext};

fn main() {
    let _ = env_logger::builder().filter_level(LevelFilter::Debug).is_test(true).try_init();

    let fd: i32 = std::env::args()
        .nth(1)
        .expect("usage: open_fd <fd>")
        .parse()
        .expect("fd must be an integer");

    let ctx = UsbContext::builder()
        .no_device_discovery().unwrap()
        .init().unwrap();

    let board = ctx
        .open_device_with_fd(fd, |handle| {
            let id = handle.identity()?;
            if !ids::is_hackrf(id.vid, id.pid) {
                return Err(Error::NotFound);
            }
            handle.claim_interface(0)?;
            if let Ok(sn) = handle.serial_number() {
                info!("serial: {sn}");
            }
            Ok(ids::Board::from_usb_pid(id.pid))
        })
        .unwrap();

    if let Some(board) = board {
        info!("opened {board}");
    }
}
