#[cfg(feature = "parking-lot")]
pub use parking_lot::{Mutex, MutexGuard};
#[cfg(not(feature = "parking-lot"))]
pub use std::sync::{Mutex, MutexGuard, PoisonError};

/// Acquires `mutex`, normalizing the two backing guard APIs.
///
/// With `parking-lot` this cannot fail; with the std mutex a poisoned
/// lock becomes `Error::LockPoisoned`.
#[cfg(feature = "parking-lot")]
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> crate::Result<MutexGuard<'_, T>> {
    Ok(mutex.lock())
}

#[cfg(not(feature = "parking-lot"))]
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> crate::Result<MutexGuard<'_, T>> {
    mutex.lock().map_err(Into::into)
}
