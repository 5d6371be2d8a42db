pub mod headless;
#[cfg(feature = "gui")]
pub mod pixels;
