//! Configuration sections

pub mod app;
pub mod dispatch;
pub mod logging;
pub mod singleton;

pub use app::AppConfig;
pub use dispatch::DispatchConfig;
pub use logging::LoggingConfig;
pub use singleton::SingletonConfig;
