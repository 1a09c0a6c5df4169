//! Protocol Module
//!
//! Defines the wire protocol for client-server communication.
//!
//! ## Protocol Format
//!
//! One JSON document per newline-terminated line, in both directions.
//!
//! ### Request
//! ```text
//! { "type": "query" | "add" | "remove" | "update" | "addmeaning",
//!   "word": string?,
//!   "meanings": [string]?,      // add
//!   "meaning": string?,         // addmeaning
//!   "oldMeaning": string?,      // update
//!   "newMeaning": string? }     // update, '~'-joined when multiple
//! ```
//! `type` is matched case-insensitively. Field presence is validated by
//! the request processor, not the codec.
//!
//! ### Response
//! ```text
//! { "status": "success" | "error",
//!   "message": string,
//!   "data": [string]? }         // successful query only
//! ```

mod request;
mod response;
mod codec;

pub use request::{Request, RequestKind};
pub use response::{Response, Status};
pub use codec::{
    parse_request, read_line, read_response, write_request, write_response,
    INVALID_FORMAT_MESSAGE, MEANING_SEPARATOR, OLD_NEW_SEPARATOR,
};
