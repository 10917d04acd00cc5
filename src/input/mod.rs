use thiserror::Error;

pub mod command_line;
pub mod protocol_interpreter;
pub mod uci_interpreter;
pub mod terminal_interpreter;
pub mod stdin;

#[derive(Error, Debug, Clone, Eq, PartialEq)]
#[error("Protocol not supported: {0}")]
pub struct ProtocolSupportError(pub String);
