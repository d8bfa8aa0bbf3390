pub mod coinranking;
pub mod file;
pub mod synthetic;

pub use coinranking::{CoinrankingSource, DEFAULT_FETCH_URL, FETCH_URL_ENV};
pub use file::FileSource;
pub use synthetic::{SyntheticSource, DEFAULT_SYNTHETIC_POINTS};
