const NUL: u32 = 0;
const SPACE: u32 = b' ' as u32;
const QUOTE: u32 = b'"' as u32;
const BACKSLASH: u32 = b'\\' as u32;

/// Find the sub-command in a raw invocation text.
///
/// The first word is this program's own name. It ends at the first space that is not inside double
/// quotes, and a backslash always skips the unit after it. Spaces after the first word are skipped
/// and the rest of the text is returned untouched, or `None` when nothing is left.
///
/// The text ends at its first NUL unit or at the end of the slice.
pub fn extract_command<T>(invocation: &[T]) -> Option<&[T]>
where
    T: Copy + Into<u32>,
{
    let text = match invocation.iter().position(|c| (*c).into() == NUL) {
        Some(end) => &invocation[..end],
        None => invocation,
    };

    let mut quoted = false;
    let mut cursor = 0;
    let mut found_separator = false;
    while cursor < text.len() {
        let c = text[cursor].into();
        cursor += 1;
        match c {
            SPACE if !quoted => {
                found_separator = true;
                break;
            }
            BACKSLASH => cursor += 1,
            QUOTE => quoted = !quoted,
            _ => {}
        }
    }

    if !found_separator {
        return None;
    }

    while cursor < text.len() && text[cursor].into() == SPACE {
        cursor += 1;
    }

    if cursor >= text.len() {
        return None;
    }

    Some(&text[cursor..])
}

/// [`extract_command`] over UTF-8 text.
///
/// Every character the scanner reacts to is ASCII, so the returned slice always starts on a
/// character boundary.
pub fn extract_command_str(invocation: &str) -> Option<&str> {
    let command = extract_command(invocation.as_bytes())?;
    let start = command.as_ptr() as usize - invocation.as_ptr() as usize;
    invocation.get(start..start + command.len())
}
