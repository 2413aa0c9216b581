pub mod conf;
pub mod control;
pub mod control_state;
pub mod error;
pub mod output;
pub mod process;
pub mod session;
pub mod store;
