pub mod animation;
pub mod config;
pub mod filter;
pub mod pointer;
pub mod projects;
pub mod sections;
pub mod theme;

#[cfg(target_arch = "wasm32")]
pub mod frontend;
