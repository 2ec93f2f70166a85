pub mod dto;
pub mod handler;
pub mod parser;

pub use dto::{EchoResponseDto, QueryParameter};
pub use handler::{handle_echo, handle_healthcheck};
pub use parser::{QueryParseError, parse_query};
