/// Longest message the chat service accepts.
pub const MESSAGE_LIMIT: usize = 2000;

/// Splits a `separator` joined list into chunks no longer than `limit`,
/// breaking only between items where possible.
pub fn split_message(text: &str, separator: &str, limit: usize) -> Vec<String> {
    let mut chunks = vec![];
    let mut current = String::new();

    for item in text.split(separator) {
        let extra = if current.is_empty() { 0 } else { separator.len() };

        if !current.is_empty() && current.len() + extra + item.len() > limit {
            chunks.push(std::mem::take(&mut current));
        } else if !current.is_empty() {
            current.push_str(separator);
        }

        if item.len() > limit {
            // A single item too long to fit, cut it on char boundaries.
            let mut rest = item;
            while rest.len() > limit {
                let mut cut = limit;
                while !rest.is_char_boundary(cut) {
                    cut -= 1;
                }
                chunks.push(rest[..cut].to_owned());
                rest = &rest[cut..];
            }
            current.push_str(rest);
        } else {
            current.push_str(item);
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}
