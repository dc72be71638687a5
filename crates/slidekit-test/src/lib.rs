//! Testing harness for Slidekit sliders.
//!
//! # Examples
//!
//! ```
//! use slidekit_core::Rect;
//! use slidekit_test::Harness;
//! use slidekit_widgets::SliderProps;
//!
//! let mut harness = Harness::slider(SliderProps::new(), Rect::new(0.0, 0.0, 200.0, 20.0)).unwrap();
//! harness.click(100.0);
//! harness.assert_value(50.0).assert_idle_listeners();
//! ```

mod harness;

pub use harness::Harness;

use tracing_subscriber::EnvFilter;

/// Install a test-friendly `tracing` subscriber once per process.
///
/// The filter comes from `RUST_LOG`, falling back to debug output from the
/// core and widget crates.
/// Later calls are no-ops.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("slidekit_core=debug,slidekit_widgets=debug"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
