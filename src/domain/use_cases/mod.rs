pub mod articles;
pub mod collection;
pub mod extractors;
pub mod seed;
pub mod session;
pub mod singleton;
