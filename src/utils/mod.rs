// Thu Aug 27 2026 - Alex

pub mod logging;
pub mod string;

pub use string::StringUtils;
