#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCommand {
    CloseModal,
    MoveFocus(Direction),
    Ignore,
}

/// Maps a document-level `KeyboardEvent.key`.
pub fn global_key(key: &str) -> KeyCommand {
    match key {
        "Escape" => KeyCommand::CloseModal,
        "ArrowLeft" => KeyCommand::MoveFocus(Direction::Previous),
        "ArrowRight" => KeyCommand::MoveFocus(Direction::Next),
        _ => KeyCommand::Ignore,
    }
}

/// Enter and Space on a focused episode card press its play button.
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

/// Card index that should receive focus, wrapping at both ends.
pub fn wrap_focus(current: usize, len: usize, direction: Direction) -> Option<usize> {
    if len == 0 || current >= len {
        return None;
    }
    Some(match direction {
        Direction::Previous if current == 0 => len - 1,
        Direction::Previous => current - 1,
        Direction::Next if current == len - 1 => 0,
        Direction::Next => current + 1,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case(0, Direction::Previous, Some(3))]
    #[case(3, Direction::Next, Some(0))]
    #[case(1, Direction::Next, Some(2))]
    #[case(2, Direction::Previous, Some(1))]
    #[case(4, Direction::Next, None)]
    fn focus_wraps(#[case] current: usize, #[case] direction: Direction, #[case] expected: Option<usize>) {
        assert_eq!(wrap_focus(current, 4, direction), expected);
    }

    #[test]
    fn single_card_wraps_to_itself() {
        assert_eq!(wrap_focus(0, 1, Direction::Next), Some(0));
        assert_eq!(wrap_focus(0, 1, Direction::Previous), Some(0));
        assert_eq!(wrap_focus(0, 0, Direction::Next), None);
    }

    #[rstest]
    #[case("Escape", KeyCommand::CloseModal)]
    #[case("ArrowLeft", KeyCommand::MoveFocus(Direction::Previous))]
    #[case("ArrowRight", KeyCommand::MoveFocus(Direction::Next))]
    #[case("ArrowUp", KeyCommand::Ignore)]
    #[case("Enter", KeyCommand::Ignore)]
    fn global_keys(#[case] key: &str, #[case] expected: KeyCommand) {
        assert_eq!(global_key(key), expected);
    }

    #[rstest]
    #[case("Enter", true)]
    #[case(" ", true)]
    #[case("Spacebar", false)]
    #[case("Tab", false)]
    fn activation_keys(#[case] key: &str, #[case] expected: bool) {
        assert_eq!(is_activation_key(key), expected);
    }
}
