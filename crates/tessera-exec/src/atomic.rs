//! Atomic cells usable through an [`AtomicStrategy`](crate::AtomicStrategy).
//!
//! Each cell exposes two add paths: the best mechanism the host offers for
//! its type (`fetch_add_native`) and an explicit compare-and-swap loop
//! (`fetch_add_cas`). Policies pick one; kernels never call either
//! directly.
//!
//! All operations use `Relaxed` ordering. Accumulated values are read after
//! the parallel loop has joined, and the join provides the happens-before
//! edge.

use std::sync::atomic::{AtomicI32, AtomicI64, AtomicU32, AtomicU64, AtomicUsize, Ordering};

/// A memory location that supports atomic addition.
pub trait AtomicCell: Send + Sync {
    /// The plain value stored in the cell.
    type Value: Copy + Send + Sync;

    /// Read the current value.
    fn load(&self) -> Self::Value;

    /// Overwrite the current value.
    fn store(&self, value: Self::Value);

    /// Add using the best mechanism available for this type.
    fn fetch_add_native(&self, value: Self::Value) -> Self::Value;

    /// Add using a compare-and-swap retry loop.
    fn fetch_add_cas(&self, value: Self::Value) -> Self::Value;
}

/// An `f64` stored as its bit pattern in an [`AtomicU64`].
///
/// There is no hardware float add on the host, so both add paths are
/// compare-and-swap based; they differ only in how the retry is driven.
#[derive(Debug, Default)]
pub struct AtomicF64 {
    bits: AtomicU64,
}

impl AtomicF64 {
    /// Create a cell holding `value`.
    pub const fn new(value: f64) -> Self {
        Self {
            bits: AtomicU64::new(value.to_bits()),
        }
    }

    /// Consume the cell and return its value.
    pub fn into_inner(self) -> f64 {
        f64::from_bits(self.bits.into_inner())
    }
}

impl AtomicCell for AtomicF64 {
    type Value = f64;

    #[inline]
    fn load(&self) -> f64 {
        f64::from_bits(self.bits.load(Ordering::Relaxed))
    }

    #[inline]
    fn store(&self, value: f64) {
        self.bits.store(value.to_bits(), Ordering::Relaxed);
    }

    #[inline]
    fn fetch_add_native(&self, value: f64) -> f64 {
        let prev = self
            .bits
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |b| {
                Some((f64::from_bits(b) + value).to_bits())
            });
        match prev {
            Ok(b) | Err(b) => f64::from_bits(b),
        }
    }

    #[inline]
    fn fetch_add_cas(&self, value: f64) -> f64 {
        let mut current = self.bits.load(Ordering::Relaxed);
        loop {
            let next = (f64::from_bits(current) + value).to_bits();
            match self.bits.compare_exchange_weak(
                current,
                next,
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(prev) => return f64::from_bits(prev),
                Err(actual) => current = actual,
            }
        }
    }
}

macro_rules! impl_integer_cell {
    ($($atomic:ty => $value:ty),* $(,)?) => {
        $(
            impl AtomicCell for $atomic {
                type Value = $value;

                #[inline]
                fn load(&self) -> $value {
                    <$atomic>::load(self, Ordering::Relaxed)
                }

                #[inline]
                fn store(&self, value: $value) {
                    <$atomic>::store(self, value, Ordering::Relaxed);
                }

                #[inline]
                fn fetch_add_native(&self, value: $value) -> $value {
                    <$atomic>::fetch_add(self, value, Ordering::Relaxed)
                }

                #[inline]
                fn fetch_add_cas(&self, value: $value) -> $value {
                    let mut current = <$atomic>::load(self, Ordering::Relaxed);
                    loop {
                        match <$atomic>::compare_exchange_weak(
                            self,
                            current,
                            current.wrapping_add(value),
                            Ordering::Relaxed,
                            Ordering::Relaxed,
                        ) {
                            Ok(prev) => return prev,
                            Err(actual) => current = actual,
                        }
                    }
                }
            }
        )*
    };
}

impl_integer_cell! {
    AtomicI32 => i32,
    AtomicI64 => i64,
    AtomicU32 => u32,
    AtomicU64 => u64,
    AtomicUsize => usize,
}
