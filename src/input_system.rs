/// Per-frame snapshot of the controls the ship reads.
///
/// The frame driver samples the keyboard once per frame and hands this value to
/// `GameWorld::update`. Nothing inside the simulation reads global key state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub up: bool,
    pub left: bool,
    pub right: bool,
    pub shoot: bool,
}

impl InputState {
    pub const NONE: InputState = InputState {
        up: false,
        left: false,
        right: false,
        shoot: false,
    };

    /// Samples arrows + space from the SDL keyboard state.
    #[cfg(feature = "sdl")]
    pub fn from_keyboard(keyboard_state: &sdl2::keyboard::KeyboardState) -> Self {
        use sdl2::keyboard::Scancode;

        InputState {
            up: keyboard_state.is_scancode_pressed(Scancode::Up),
            left: keyboard_state.is_scancode_pressed(Scancode::Left),
            right: keyboard_state.is_scancode_pressed(Scancode::Right),
            shoot: keyboard_state.is_scancode_pressed(Scancode::Space),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_no_input() {
        assert_eq!(InputState::default(), InputState::NONE);
    }
}
