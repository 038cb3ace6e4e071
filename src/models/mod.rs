pub mod medication;
pub mod session;

pub use medication::*;
pub use session::*;
