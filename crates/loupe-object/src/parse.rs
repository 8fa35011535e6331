use crate::error::{ParseError, ParseResult};
use crate::record::{FieldMap, ObjectInfo, ObjectKind};
use crate::split::Separator;

/// Decode a decompressed object envelope into its structured record.
///
/// The envelope is `<type> <size>\0<body>`. The body divides at the first
/// blank line into a field block (lines of `key value` pairs) and a
/// free-text message; without a blank line the whole body is the field
/// block and the message is empty. Decoding is all-or-nothing: a missing
/// NUL boundary or a header without a type/size pair fails the whole call.
///
/// Non-commit bodies pass through the same splits. Their envelopes are
/// identical; only commit field blocks carry meaning, and binary bodies
/// (trees) simply produce fields nothing looks at.
pub fn parse_object(raw: &[u8]) -> ParseResult<ObjectInfo> {
    let text = String::from_utf8_lossy(raw);

    let mut envelope = Separator::literal("\0").split(&text, 2).into_iter();
    let header = envelope
        .next()
        .ok_or_else(|| ParseError::Malformed("empty object".into()))?;
    let body = envelope
        .next()
        .ok_or_else(|| ParseError::Malformed("missing NUL between header and body".into()))?;

    let space = Separator::literal(" ");
    let mut header_parts = space.split(&header, 2).into_iter();
    let tag = header_parts
        .next()
        .ok_or_else(|| ParseError::Malformed("empty object header".into()))?;
    let declared_size = header_parts
        .next()
        .ok_or_else(|| ParseError::Malformed("header lacks a type/size pair".into()))?;

    let mut sections = Separator::literal("\n\n").split(&body, 2).into_iter();
    let field_block = sections.next().unwrap_or_default();
    let message = sections.next().unwrap_or_default();

    let mut fields = FieldMap::new();
    for line in Separator::literal("\n").split(&field_block, 0) {
        if line.is_empty() {
            continue;
        }
        let mut kv = space.split(&line, 2).into_iter();
        let key = kv.next().unwrap_or_default();
        let value = kv.next().unwrap_or_default();
        fields.push(key, value);
    }

    Ok(ObjectInfo {
        kind: ObjectKind::from_tag(&tag),
        declared_size,
        message,
        fields,
    })
}
