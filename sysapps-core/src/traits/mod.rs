//! Collaborator abstraction trait definition

mod script_runner;
mod system_probe;
mod tree_store;

pub use script_runner::ScriptRunner;
pub use system_probe::SystemProbe;
pub use tree_store::TreeStore;
