#![forbid(unsafe_code)]
//! mailaudit_lib — analyse des en-têtes e-mail (MVP)

pub mod message;
pub use message::{
    HeaderParseError,
    MessageError,
    RawMessage,
    load_message,
    parse_message,
};

pub mod extract;
pub use extract::{BasicInfo, extract_basic_info};

pub mod route;
pub use route::{Hop, IP_NOT_FOUND, reconstruct_route};

pub mod auth;
pub use auth::{AuthReport, AuthVerdict, Mechanism, classify_auth};
