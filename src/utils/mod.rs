mod errors;
pub mod logging;
pub mod query;

pub use errors::Error;

pub type Result<T> = std::result::Result<T, Error>;
