/*!
Error taxonomy for the C-Lesh engine.

Five kinds, matching the fatal-condition table the engine must distinguish:
config parsing, program/table loading, memory-bounds and stack faults,
decode faults (unknown opcode/tag/operator), and host I/O failures. Every
variant here is fatal: on construction the caller sets `Registers::status`
to `Status::Error` and the run stops. There is no recoverable error path.
*/

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("config error: {message}")]
    Config { message: String },

    #[error("load error: {message}")]
    Load { message: String },

    #[error("address fault: {message}")]
    AddressFault { message: String },

    #[error("decode error: {message}")]
    Decode { message: String },

    #[error("host error: {message}")]
    Host { message: String },
}

impl EngineError {
    pub fn config(message: impl Into<String>) -> Self {
        EngineError::Config { message: message.into() }
    }

    pub fn load(message: impl Into<String>) -> Self {
        EngineError::Load { message: message.into() }
    }

    pub fn address_fault(message: impl Into<String>) -> Self {
        EngineError::AddressFault { message: message.into() }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        EngineError::Decode { message: message.into() }
    }

    pub fn host(message: impl Into<String>) -> Self {
        EngineError::Host { message: message.into() }
    }
}

pub type EngineResult<T> = Result<T, EngineError>;
