fn main() {
    dioxus::logger::initialize_default();

    // The app only has a web renderer; native builds exist for the test suite.
    #[cfg(target_arch = "wasm32")]
    dioxus::launch(stylescope_web::App);
}
