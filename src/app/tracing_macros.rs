//! Per-event logging that compiles away in release builds.

#[cfg(debug_assertions)]
macro_rules! trace_event {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
macro_rules! trace_event {
    ($($arg:tt)*) => {};
}

#[cfg(debug_assertions)]
macro_rules! debug_event {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
macro_rules! debug_event {
    ($($arg:tt)*) => {};
}

pub(crate) use debug_event;
pub(crate) use trace_event;
