// Thu Aug 27 2026 - Alex

pub mod banner;

pub use banner::{Banner, BannerStyle};
