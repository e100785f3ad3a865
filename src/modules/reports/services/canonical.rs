use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::core::Result;

/// Render a value to its canonical wire form.
///
/// The output is both the HTTP body and the exact byte string the HMAC is
/// computed over, so it must be deterministic: identical field values always
/// yield identical bytes, independent of construction order. Two properties
/// guarantee that here: the value is first converted to a `serde_json::Value`,
/// whose object maps are `BTreeMap`s and therefore iterate keys in
/// lexicographic order, and scalars use serde_json's locale-independent
/// encodings. Objects render with a four-space indent; the indentation is part
/// of the signed bytes, not cosmetic.
///
/// Unset optional fields render as `null` rather than being dropped, so a
/// request's canonical form always carries its full field set.
pub fn to_canonical_json<T: Serialize>(value: &T) -> Result<String> {
    let tree = serde_json::to_value(value)?;

    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    tree.serialize(&mut serializer)?;

    // serde_json only emits valid UTF-8
    Ok(String::from_utf8(buf).expect("canonical JSON is UTF-8"))
}
