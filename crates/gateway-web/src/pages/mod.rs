//! Page Components

mod gateway;

pub use gateway::GatewayPage;
