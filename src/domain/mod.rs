pub mod links;
pub mod session;
pub mod suggestions;
