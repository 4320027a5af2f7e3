//! Command implementations.

pub mod config;
pub mod process;
pub mod route;
pub mod serve;

pub use self::config::execute_config;
pub use self::process::execute_process;
pub use self::route::execute_route;
pub use self::serve::execute_serve;
