//! Decoding of raw terminal input into the handful of keys the shell reacts to.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Enter,
    Up,
    Down,
    Left,
    Right,
    Tab,
    Backspace,
    Escape,
    CtrlC,
    CtrlD,
    CtrlL,
    CtrlO,
    Text(String),
    Unknown(String),
}

/// Splits one chunk read from stdin into keys, in order.
///
/// Printable runs are coalesced into a single [`Key::Text`]. Unrecognized escape sequences
/// surface as [`Key::Unknown`] with their raw bytes.
pub fn decode_keys(data: &str) -> Vec<Key> {
    let mut keys = Vec::new();
    let mut text = String::new();
    let mut chars = data.char_indices().peekable();

    while let Some((start, ch)) = chars.next() {
        let key = match ch {
            '\r' => {
                if matches!(chars.peek(), Some((_, '\n'))) {
                    chars.next();
                }
                Key::Enter
            }
            '\n' => Key::Enter,
            '\t' => Key::Tab,
            '\x7f' | '\x08' => Key::Backspace,
            '\x03' => Key::CtrlC,
            '\x04' => Key::CtrlD,
            '\x0c' => Key::CtrlL,
            '\x0f' => Key::CtrlO,
            '\x1b' => decode_escape(data, start, &mut chars),
            ch if ch.is_control() => Key::Unknown(ch.to_string()),
            ch => {
                text.push(ch);
                continue;
            }
        };

        if !text.is_empty() {
            keys.push(Key::Text(std::mem::take(&mut text)));
        }
        keys.push(key);
    }

    if !text.is_empty() {
        keys.push(Key::Text(text));
    }
    keys
}

fn decode_escape(
    data: &str,
    start: usize,
    chars: &mut std::iter::Peekable<std::str::CharIndices<'_>>,
) -> Key {
    let introducer = match chars.peek() {
        Some(&(_, introducer @ ('[' | 'O'))) => {
            chars.next();
            introducer
        }
        _ => return Key::Escape,
    };

    // SS3 sequences carry exactly one final character; CSI runs until a final byte.
    let mut end = data.len();
    for (index, ch) in chars.by_ref() {
        if introducer == 'O' || ('\x40'..='\x7e').contains(&ch) {
            end = index + ch.len_utf8();
            break;
        }
    }

    let raw = &data[start..end];
    match raw {
        "\x1b[A" | "\x1bOA" => Key::Up,
        "\x1b[B" | "\x1bOB" => Key::Down,
        "\x1b[C" | "\x1bOC" => Key::Right,
        "\x1b[D" | "\x1bOD" => Key::Left,
        _ => Key::Unknown(raw.to_string()),
    }
}
