use std::time::{Duration, SystemTime, UNIX_EPOCH};

use libc::stat;

use super::FileType;

/// A snapshot of the metadata of a file, as returned by `stat(2)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    pub size: i64,                 // st_size
    pub file_type: FileType,       // st_mode
    pub mode: u32,                 // st_mode
    pub uid: u32,                  // st_uid
    pub gid: u32,                  // st_gid
    pub time_accessed: (i64, i64), // st_atime, st_atime_nsec
    pub time_modified: (i64, i64), // st_mtime, st_mtime_nsec
    pub time_changed: (i64, i64),  // st_ctime, st_ctime_nsec
    pub links: u64,                // st_nlink
    pub inode_num: u64,            // st_ino
}

impl Metadata {
    #[allow(clippy::unnecessary_cast)]
    pub(crate) const fn from_stat(raw: stat) -> Metadata {
        Metadata {
            size: raw.st_size as i64,
            file_type: FileType::from_stat_mode(raw.st_mode),
            mode: raw.st_mode as u32,
            uid: raw.st_uid,
            gid: raw.st_gid,
            time_accessed: (raw.st_atime as i64, raw.st_atime_nsec as i64),
            time_modified: (raw.st_mtime as i64, raw.st_mtime_nsec as i64),
            time_changed: (raw.st_ctime as i64, raw.st_ctime_nsec as i64),
            links: raw.st_nlink as u64,
            inode_num: raw.st_ino as u64,
        }
    }

    /// The permission bits, including the setuid, setgid and sticky bits.
    pub const fn permissions(&self) -> u32 {
        self.mode & 0o7777
    }

    pub fn accessed(&self) -> SystemTime {
        system_time(self.time_accessed)
    }

    pub fn modified(&self) -> SystemTime {
        system_time(self.time_modified)
    }

    pub fn changed(&self) -> SystemTime {
        system_time(self.time_changed)
    }
}

fn system_time((secs, nanos): (i64, i64)) -> SystemTime {
    let nanos = Duration::from_nanos(nanos.clamp(0, 999_999_999) as u64);
    if secs >= 0 {
        UNIX_EPOCH + Duration::from_secs(secs as u64) + nanos
    } else {
        UNIX_EPOCH - Duration::from_secs(secs.unsigned_abs()) + nanos
    }
}
