pub mod automation;
pub mod echo;
