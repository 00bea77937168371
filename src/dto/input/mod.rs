mod notification_payload;
mod webhook_source;

pub use notification_payload::*;
pub use webhook_source::*;
