use std::fmt::Debug;
use std::{io, mem};

use tracing::{error, trace};

/// Describes a family of raw handles: which value means "no handle" and how to close one.
pub trait HandleTraits {
    type Raw: Copy + PartialEq + Debug;

    fn invalid() -> Self::Raw;

    /// Closes `raw`, which is never the invalid value.
    fn close(raw: Self::Raw) -> io::Result<()>;
}

/// An owned raw handle that is closed exactly once, either explicitly or on drop.
pub struct UniqueHandle<T: HandleTraits> {
    raw: T::Raw,
}

impl<T: HandleTraits> UniqueHandle<T> {
    /// Takes ownership of `raw`.
    pub fn new(raw: T::Raw) -> UniqueHandle<T> {
        UniqueHandle { raw }
    }

    pub fn invalid() -> UniqueHandle<T> {
        UniqueHandle::new(T::invalid())
    }

    pub fn is_valid(&self) -> bool {
        self.raw != T::invalid()
    }

    /// The raw handle, still owned by this wrapper.
    pub fn get(&self) -> T::Raw {
        self.raw
    }

    /// Gives up ownership of the raw handle, leaving this wrapper invalid.
    pub fn release(&mut self) -> T::Raw {
        mem::replace(&mut self.raw, T::invalid())
    }

    /// Closes the current handle unless it is `raw` itself, then takes ownership of `raw`.
    pub fn reset(&mut self, raw: T::Raw) -> io::Result<bool> {
        if self.raw != raw {
            self.close()?;
            self.raw = raw;
        }
        Ok(self.is_valid())
    }

    pub fn swap(&mut self, other: &mut UniqueHandle<T>) {
        mem::swap(&mut self.raw, &mut other.raw);
    }

    /// Closes the handle now. The wrapper is invalid afterwards, even if closing failed.
    pub fn close(&mut self) -> io::Result<()> {
        if !self.is_valid() {
            return Ok(());
        }
        let raw = self.release();
        trace!(?raw, "closing handle");
        T::close(raw)
    }
}

impl<T: HandleTraits> Debug for UniqueHandle<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("UniqueHandle").field(&self.raw).finish()
    }
}

impl<T: HandleTraits> Default for UniqueHandle<T> {
    fn default() -> Self {
        UniqueHandle::invalid()
    }
}

impl<T: HandleTraits> Drop for UniqueHandle<T> {
    fn drop(&mut self) {
        // Drop can't return the error and panicking here could abort an existing unwind.
        if let Err(err) = self.close() {
            error!(%err, "error while dropping handle");
        }
    }
}

/// Unix file descriptors, where -1 is the invalid value.
#[cfg(all(unix, feature = "handles"))]
#[derive(Debug)]
pub struct FdTraits;

#[cfg(all(unix, feature = "handles"))]
impl HandleTraits for FdTraits {
    type Raw = libc::c_int;

    fn invalid() -> libc::c_int {
        -1
    }

    fn close(raw: libc::c_int) -> io::Result<()> {
        // SAFETY: The handle is owned and never used again, whatever the outcome.
        if unsafe { libc::close(raw) } == -1 {
            return Err(io::Error::last_os_error());
        }
        Ok(())
    }
}

/// An owned unix file descriptor.
#[cfg(all(unix, feature = "handles"))]
pub type FdHandle = UniqueHandle<FdTraits>;

/// Opens `path` read only and wraps the descriptor.
#[cfg(all(unix, feature = "handles"))]
pub fn open_read_only(path: &std::ffi::CStr) -> io::Result<FdHandle> {
    // SAFETY: `path` is a valid nul-terminated string for the duration of the call.
    match unsafe { libc::open(path.as_ptr(), libc::O_RDONLY) } {
        -1 => Err(io::Error::last_os_error()),
        fd => Ok(FdHandle::new(fd)),
    }
}
