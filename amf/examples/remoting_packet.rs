use amf::{AmfFormat, AmfHeader, AmfMessage, AmfObject, AmfValue, Encoder};
use tracing::{error, info};

fn main() {
    tracing_subscriber::fmt::init();

    let mut encoder = Encoder::with_format(AmfFormat::Amf0);

    let credentials = AmfObject::new()
        .with("userid", "admin")
        .with("password", "secret");
    let headers = [AmfHeader::new("Credentials", false, credentials)];
    let messages = [AmfMessage::new(
        "EchoService.echo",
        "/1",
        vec![
            "hello".into(),
            42.into(),
            AmfValue::Array(vec![true.into(), AmfValue::Null]),
        ],
    )];

    if let Err(err) = encoder.write_amf_packet(&headers, &messages) {
        error!(%err, "Failed to encode packet");
        return;
    }

    let packet = encoder.take_bytes();
    let hex: String = packet.iter().map(|b| format!("{b:02x}")).collect();
    info!(len = packet.len(), hex, "Encoded AMF0 packet");

    let mut encoder = Encoder::default();
    let value = AmfValue::Object(AmfObject::typed("flex.Point").with("x", 1).with("y", 2.5));
    match encoder.write_object(&value) {
        Ok(()) => info!(bytes = ?encoder.bytes(), "Encoded AMF3 typed object"),
        Err(err) => error!(%err, "Failed to encode object"),
    }
}
