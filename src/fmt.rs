//! Logging macros
//!
//! Thin wrappers over the `defmt` macros so the driver can log without
//! forcing a global logger on users. With the `defmt` feature disabled the
//! macros evaluate nothing beyond borrowing their arguments.

#![allow(unused_macros)]

#[cfg(feature = "defmt")]
macro_rules! trace {
    ($($arg:tt)*) => (::defmt::trace!($($arg)*));
}

#[cfg(not(feature = "defmt"))]
macro_rules! trace {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {{
        let _ = ($( &$arg ),*);
    }};
}

#[cfg(feature = "defmt")]
macro_rules! debug {
    ($($arg:tt)*) => (::defmt::debug!($($arg)*));
}

#[cfg(not(feature = "defmt"))]
macro_rules! debug {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {{
        let _ = ($( &$arg ),*);
    }};
}

#[cfg(feature = "defmt")]
macro_rules! warn {
    ($($arg:tt)*) => (::defmt::warn!($($arg)*));
}

#[cfg(not(feature = "defmt"))]
macro_rules! warn {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {{
        let _ = ($( &$arg ),*);
    }};
}
