mod models;
mod symbol;
mod timestamp;
mod window;

pub use models::{
    format_market_cap, format_price, ChartPoint, CompanyOverview, Mover, MoversBoard, Stock,
    Watchlist, WatchlistId,
};
pub use symbol::Symbol;
pub use timestamp::UtcDateTime;
pub use window::{SeriesFunction, Window};
