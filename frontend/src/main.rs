//! Entry point for the WASM application

pub fn main() {
    galactic_frontend::start();
}
