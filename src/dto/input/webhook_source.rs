use strum::{Display, EnumString};

///
/// Tool that sent the webhook. Taken from the last segment
/// of the inbound path, e.g. `/webhooks/keel`.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum WebhookSource {
    Keel,
}
