//! Application Configuration
//!
//! Fixed settings, provided to components through context.

/// Settings that are not user-editable
#[derive(Debug, Clone, Copy)]
pub struct AppConfig {
    /// localStorage key holding the saved week
    pub storage_key: &'static str,
    /// Days shown in the strip
    pub days_per_strip: usize,
    /// How long a notice stays up before dismissing itself
    pub notice_timeout_ms: u32,
    pub log_level: log::Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: "brutalistTodoData",
            days_per_strip: 7,
            notice_timeout_ms: 6000,
            log_level: if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info },
        }
    }
}
