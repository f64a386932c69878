mod film;
mod search;

pub use film::*;
pub use search::*;
