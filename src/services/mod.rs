// Service exports
pub mod routing;

pub use routing::RouteClient;
