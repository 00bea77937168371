use super::{parse_message, ParsedMessage};
use crate::dto::{input, output};

pub const EMBED_TITLE: &str = "Deployment Update";
///
/// RGB `0x326FE5`, kept in decimal like the wire format
///
pub const EMBED_COLOR: u32 = 3305445;
pub const IMAGE_FIELD_NAME: &str = "Image";

///
/// Build the embed describing a deployment event.
///
/// Reference token found in the message is put into a single
/// `Image` field. `created_at` is forwarded without validation.
///
pub fn create_embed(payload: &input::NotificationPayload) -> output::ChatEmbed {
    let ParsedMessage {
        description,
        reference,
    } = parse_message(&payload.message);

    let fields = reference
        .map(|reference| output::ChatEmbedField {
            name: IMAGE_FIELD_NAME.to_string(),
            value: reference,
            inline: false,
        })
        .into_iter()
        .collect();

    let timestamp = Some(payload.created_at.clone()).filter(|timestamp| !timestamp.is_empty());

    output::ChatEmbed {
        title: EMBED_TITLE.to_string(),
        description,
        url: None,
        color: EMBED_COLOR,
        timestamp,
        fields,
    }
}
