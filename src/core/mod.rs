pub mod cache;
pub mod extract;
pub mod fetch;
pub mod options;
pub mod response;
pub mod video;
