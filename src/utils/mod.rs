pub mod dom;
pub mod shared;
pub mod tickers;
