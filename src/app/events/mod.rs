//! Intent- und Command-Events der Anwendung.

pub mod command;
pub mod intent;

pub use command::AppCommand;
pub use intent::AppIntent;
