pub const fn wrap_decrement(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    if index == 0 {
        len - 1
    } else {
        index - 1
    }
}

pub const fn wrap_increment(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    (index + 1) % len
}

/// Line-editing keys shared by the text inputs. Returns `true` if consumed.
pub fn edit_text(buffer: &mut String, key: crossterm::event::KeyCode) -> bool {
    use crossterm::event::KeyCode;

    match key {
        KeyCode::Char(c) => buffer.push(c),
        KeyCode::Backspace => {
            buffer.pop();
        }
        KeyCode::Esc => buffer.clear(),
        _ => return false,
    }
    true
}
