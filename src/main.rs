#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

mod carousel;
mod content;
mod easing;
mod marquee;
mod nav;
mod scroll;
mod spotlight;

#[cfg(target_arch = "wasm32")]
mod frontend;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("This site is frontend-only. Run `trunk serve` or `trunk build --release`.");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}
