pub mod annotation;
pub mod direct_link;
pub mod resolve;
pub mod selection;
pub mod session;
