pub mod credential;
pub mod error;
pub mod gate;
pub mod resolver;
pub mod secret;
