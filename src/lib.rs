pub mod anchor;
pub mod config;
pub mod contact;
pub mod content;
pub mod error;
pub mod geometry;
pub mod header;
pub mod logging;
pub mod modal;
pub mod particles;
pub mod reveal;
pub mod ripple;
pub mod skills;
pub mod tilt;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
pub mod frontend;
