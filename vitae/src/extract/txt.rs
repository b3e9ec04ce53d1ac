use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8, WINDOWS_1252};
use tracing::debug;

/// Candidate encodings tried strictly, in order, when no BOM is present.
/// windows-1252 is the WHATWG superset that covers latin-1 and cp1252
/// bodies; it accepts any byte sequence, so in practice the ladder ends
/// there and the UTF-16 entries only matter for BOM-less exotics.
const CANDIDATES: &[&Encoding] = &[UTF_8, WINDOWS_1252, UTF_16LE, UTF_16BE];

/// Decode plain-text bytes. Never fails: a BOM wins if present and valid,
/// then the candidate ladder, then lossy UTF-8 with replacement characters.
///
/// The BOM sniff comes first because UTF-16 text files carry one in
/// practice, and windows-1252 would otherwise decode them into mojibake.
pub fn decode(bytes: &[u8]) -> String {
    if let Some((encoding, bom_length)) = Encoding::for_bom(bytes) {
        if let Some(text) =
            encoding.decode_without_bom_handling_and_without_replacement(&bytes[bom_length..])
        {
            debug!(encoding = encoding.name(), "Decoded text file via BOM");
            return text.into_owned();
        }
    }

    for encoding in CANDIDATES {
        if let Some(text) = encoding.decode_without_bom_handling_and_without_replacement(bytes) {
            debug!(encoding = encoding.name(), "Decoded text file");
            return text.into_owned();
        }
    }

    String::from_utf8_lossy(bytes).into_owned()
}
