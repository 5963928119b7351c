/// Minimum trimmed length for a buffer to count as a candidate entry.
const MIN_ENTRY_LEN: usize = 5;

/// Split loosely formatted source text into candidate top-level entries.
///
/// Locates the first `{` and the last `}`, then walks the text between them
/// counting brace depth. Whenever depth returns to 0 immediately after a `,`,
/// the accumulated buffer is emitted as one entry; a non-trivial trailing
/// buffer is emitted after the walk. This is a deliberate depth-counting
/// state machine, not a parser: a `,` inside a top-level string literal will
/// split an entry, which is an accepted tolerance of the strategy.
///
/// Never fails; text without a `{` yields an empty list.
pub fn scan_entries(text: &str) -> Vec<String> {
    let Some(first) = text.find('{') else {
        return Vec::new();
    };
    let last = text.rfind('}').unwrap_or(first);
    if last <= first {
        return Vec::new();
    }
    let inner = &text[first + 1..last];

    let mut entries = Vec::new();
    let mut buffer = String::new();
    let mut depth: i32 = 0;

    for ch in inner.chars() {
        if ch == '{' {
            depth += 1;
        }
        if ch == '}' {
            depth -= 1;
        }
        buffer.push(ch);
        if depth == 0 && ch == ',' {
            if buffer.trim().len() > MIN_ENTRY_LEN {
                entries.push(std::mem::take(&mut buffer));
            } else {
                buffer.clear();
            }
        }
    }
    if buffer.trim().len() > MIN_ENTRY_LEN {
        entries.push(buffer);
    }

    entries
}
