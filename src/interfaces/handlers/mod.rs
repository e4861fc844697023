pub mod articles;
pub mod collection;
pub mod home;
pub mod session;
pub mod singleton;
pub mod system;
