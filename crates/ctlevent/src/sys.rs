//! Raw bindings to the ALSA control interface.
//!
//! Mirrors the parts of `<sound/asound.h>` the channel touches: the
//! subscribe-events ioctl and the size of one event record.

use std::os::unix::io::RawFd;
use std::path::{Path, PathBuf};

// ── ioctl ──

pub const SNDRV_CTL_IOCTL_MAGIC: u8 = b'U';
pub const SNDRV_CTL_SUBSCRIBE_EVENTS_NR: u8 = 0x16;

const SNDRV_CTL_ELEM_ID_NAME_MAXLEN: usize = 44;

cfg_if::cfg_if! {
    if #[cfg(target_os = "linux")] {
        // ioctl number: _IOWR('U', 0x16, int)
        nix::ioctl_readwrite!(
            snd_ctl_subscribe_events,
            SNDRV_CTL_IOCTL_MAGIC,
            SNDRV_CTL_SUBSCRIBE_EVENTS_NR,
            libc::c_int
        );
    } else {
        /// No ALSA control interface here: every request is rejected
        /// the way the kernel rejects an unknown ioctl.
        pub unsafe fn snd_ctl_subscribe_events(
            _fd: libc::c_int,
            _data: *mut libc::c_int,
        ) -> nix::Result<libc::c_int> {
            Err(nix::errno::Errno::ENOTTY)
        }
    }
}

// ── Event record (struct snd_ctl_event) ──
//
// Only the size matters to the channel; the layout is kept so the size
// tracks the header.

#[repr(C)]
#[derive(Clone, Copy)]
#[allow(dead_code)]
pub(crate) struct SndCtlElemId {
    numid: u32,
    iface: i32,
    device: u32,
    subdevice: u32,
    name: [u8; SNDRV_CTL_ELEM_ID_NAME_MAXLEN],
    index: u32,
}

#[repr(C)]
#[derive(Clone, Copy)]
#[allow(dead_code)]
pub(crate) struct SndCtlEventElem {
    mask: u32,
    id: SndCtlElemId,
}

#[repr(C)]
#[derive(Clone, Copy)]
#[allow(dead_code)]
pub(crate) union SndCtlEventData {
    elem: SndCtlEventElem,
    data8: [u8; 60],
}

#[repr(C)]
#[derive(Clone, Copy)]
#[allow(dead_code)]
pub(crate) struct SndCtlEvent {
    kind: i32,
    data: SndCtlEventData,
}

/// Bytes in one event record; one `read(2)` of this size drains one event.
pub const SND_CTL_EVENT_SIZE: usize = std::mem::size_of::<SndCtlEvent>();

// ── Helpers: open / close a control device ──

/// `/dev/snd/controlC<card>`
pub fn control_path(card: u32) -> PathBuf {
    PathBuf::from(format!("/dev/snd/controlC{}", card))
}

/// Open a control device read/write with `O_CLOEXEC` and hand back the raw fd.
///
/// The caller owns the fd and must release it with `close_control`.
pub fn open_control(path: &Path) -> std::io::Result<RawFd> {
    use std::os::unix::fs::OpenOptionsExt;
    use std::os::unix::io::IntoRawFd;

    let file = std::fs::OpenOptions::new()
        .read(true)
        .write(true)
        .custom_flags(libc::O_CLOEXEC)
        .open(path)?;
    Ok(file.into_raw_fd())
}

pub fn close_control(fd: RawFd) -> std::io::Result<()> {
    if fd < 0 {
        return Ok(());
    }
    let ret = unsafe { libc::close(fd) };
    if ret < 0 {
        return Err(std::io::Error::last_os_error());
    }
    Ok(())
}
