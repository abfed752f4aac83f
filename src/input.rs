use std::borrow::Cow;
use std::io::{self, BufRead};

use tracing::debug;

/// Reads one line without its `\n` / `\r\n` terminator. Returns None on EOF.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD instead of failing
/// the read, so one bad line never ends a load or a session.
pub fn read_line_lossy<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    if reader.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }

    let line = match String::from_utf8_lossy(&buf) {
        Cow::Borrowed(s) => s.to_string(),
        Cow::Owned(s) => {
            debug!("replaced invalid UTF-8 in input line");
            s
        }
    };
    Ok(Some(
        line.trim_end_matches('\n').trim_end_matches('\r').to_string(),
    ))
}
