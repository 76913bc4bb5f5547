pub mod backdrop;
pub mod config;
pub mod contact;
pub mod counters;
pub mod filter;
pub mod links;
pub mod log;
pub mod menu;
pub mod motion;
pub mod pointer;
pub mod preloader;
pub mod scroll;
pub mod theme;
pub mod toast;
pub mod typing;

#[cfg(target_arch = "wasm32")]
pub mod frontend;
