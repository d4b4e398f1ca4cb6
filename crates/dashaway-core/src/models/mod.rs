pub mod analysis;
pub mod category;
pub mod history;
pub mod segment;
pub mod session;
