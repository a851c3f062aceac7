//! Mutex shim: `std::sync::Mutex` (poison-ignoring) under `std`, `spin::Mutex`
//! on `no_std` targets. Handler methods hold the state lock for their whole
//! body, which serializes tick and button callbacks.

#[cfg(feature = "std")]
pub struct Mutex<T>(std::sync::Mutex<T>);

#[cfg(feature = "std")]
impl<T> Mutex<T> {
    pub const fn new(value: T) -> Self {
        Self(std::sync::Mutex::new(value))
    }

    pub fn lock(&self) -> std::sync::MutexGuard<'_, T> {
        self.0
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[cfg(all(not(feature = "std"), feature = "spin"))]
pub use spin::Mutex;
