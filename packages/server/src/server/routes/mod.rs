// HTTP routes
pub mod chat;
pub mod health;
pub mod payment;

pub use chat::*;
pub use health::*;
pub use payment::*;
