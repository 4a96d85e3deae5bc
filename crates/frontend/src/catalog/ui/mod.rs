pub mod filter_bar;
pub mod platform_grid;
pub mod product_grid;
pub mod stats_banner;

pub use filter_bar::PlatformFilterBar;
pub use platform_grid::PlatformGrid;
pub use product_grid::ProductGrid;
pub use stats_banner::StatsBanner;
