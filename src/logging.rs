/// Development-only console logging
///
/// The `log!` macro forwards to `leptos::logging::log!`, which writes to the
/// browser console on wasm and to stdout elsewhere (tests, benches). It is
/// compiled out of release builds unless the `console_logging` feature is on.
/// Failures the user should know about go through `leptos::logging::error!`
/// or `warn!` directly.
///
/// # Examples
///
/// ```rust
/// use transit_map::log;
///
/// let stops = 4;
/// log!("Route received with {stops} stops");
/// ```
#[macro_export]
macro_rules! log {
    ($($arg:tt)+) => {
        #[cfg(any(debug_assertions, feature = "console_logging"))]
        {
            leptos::logging::log!($($arg)+);
        }
    };
}
