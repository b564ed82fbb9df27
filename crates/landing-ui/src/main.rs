//! WASM entry point
//!
//! Trunk compiles this binary and loads it at the end of the landing page.

fn main() {
    // Set up panic hook for better error messages in browser console
    console_error_panic_hook::set_once();

    if let Err(e) = landing_ui::start() {
        e.log("landing-ui");
    }
}
