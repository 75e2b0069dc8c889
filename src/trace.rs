//! Optional instrumentation hooks for the fill pipeline.
//!
//! With the `tracing` feature enabled these forward to `tracing` spans and
//! events; without it they compile away so the solve path carries no
//! overhead. Only the two shapes the pipeline uses exist: a plain named
//! span and a keyed measurement event.

/// Opens an info-level span covering one fill call.
#[cfg(feature = "tracing")]
macro_rules! trace_span {
    ($name:expr) => {
        tracing::info_span!($name)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_span {
    ($name:expr) => {
        $crate::trace::DisabledSpan
    };
}

/// Records pipeline measurements such as unknown and channel counts.
#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        tracing::info!(name: $name, $($key = $value),+)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        // Values are still evaluated so disabled builds flag the same
        // type errors and unused variables as enabled ones.
        let _ = ($($value),+);
    };
}

pub(crate) use trace_event;
pub(crate) use trace_span;

/// Stand-in span guard when the `tracing` feature is off.
#[cfg(not(feature = "tracing"))]
pub(crate) struct DisabledSpan;

#[cfg(not(feature = "tracing"))]
impl DisabledSpan {
    /// Mirrors `tracing::Span::entered` so call sites stay identical.
    pub(crate) fn entered(self) -> Self {
        self
    }
}
