pub mod session_controller;

pub use session_controller::configure_session_routes;
