use sdl2::event::Event;
use sdl2::keyboard::{Keycode, Scancode};
use sdl2::mouse::MouseButton;
use sdl2::EventPump;

/// Menu-level actions produced from raw input
///
/// Screens never look at key codes directly; they react to these actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Up,
    Down,
    Left,
    Right,
    Confirm,
    Back,
    /// Window was closed
    Quit,
}

/// Input context determines which actions are available
///
/// A key that means nothing on the current screen produces no action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Title screen list menu: up/down/confirm
    TitleScreen,
    /// Options list menu: up/down/back
    Options,
    /// Play screen: back only
    Play,
    /// Image carousels: left/right/back
    CharCreation,
    /// Character grid: all four arrows
    Picker,
    /// Nothing but closing the window
    Passive,
}

/// InputSystem translates SDL2 events into [`MenuAction`]s
///
/// Only key presses count: SDL2 key repeats are dropped so holding an arrow
/// moves a cursor exactly once.
pub struct InputSystem {
    /// Current input context
    pub context: InputContext,
}

impl InputSystem {
    pub fn new(context: InputContext) -> Self {
        InputSystem { context }
    }

    /// Drains pending SDL2 events and returns the actions they map to
    pub fn poll_events(&self, event_pump: &mut EventPump) -> Vec<MenuAction> {
        event_pump
            .poll_iter()
            .filter_map(|event| self.map_event(&event))
            .collect()
    }

    /// Maps one SDL2 event to an action
    ///
    /// Closing the window quits in every context. Repeated key downs from a
    /// held key produce nothing.
    pub fn map_event(&self, event: &Event) -> Option<MenuAction> {
        match event {
            Event::Quit { .. } => Some(MenuAction::Quit),
            Event::KeyDown {
                keycode: Some(key),
                repeat: false,
                ..
            } => self.map_key(*key),
            _ => None,
        }
    }

    /// Maps a freshly pressed key to an action in the current context
    pub fn map_key(&self, key: Keycode) -> Option<MenuAction> {
        let action = match key {
            Keycode::Up => MenuAction::Up,
            Keycode::Down => MenuAction::Down,
            Keycode::Left => MenuAction::Left,
            Keycode::Right => MenuAction::Right,
            Keycode::Return | Keycode::KpEnter | Keycode::Space => MenuAction::Confirm,
            Keycode::Escape => MenuAction::Back,
            _ => return None,
        };

        self.accepts(action).then_some(action)
    }

    fn accepts(&self, action: MenuAction) -> bool {
        use MenuAction::*;

        match self.context {
            InputContext::TitleScreen => matches!(action, Up | Down | Confirm),
            InputContext::Options => matches!(action, Up | Down | Back),
            InputContext::Play => matches!(action, Back),
            InputContext::CharCreation => matches!(action, Left | Right | Back),
            InputContext::Picker => matches!(action, Up | Down | Left | Right),
            InputContext::Passive => false,
        }
    }
}

/// Snapshot of what is currently held down
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldInput {
    pub cursor: (i32, i32),
    pub left_button: bool,
    pub right_button: bool,
    pub middle_button: bool,
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl HeldInput {
    /// Reads the current mouse and keyboard state
    ///
    /// The cursor is in window coordinates.
    pub fn capture(event_pump: &EventPump) -> Self {
        let mouse = event_pump.mouse_state();
        let keys = event_pump.keyboard_state();

        HeldInput {
            cursor: (mouse.x(), mouse.y()),
            left_button: mouse.is_mouse_button_pressed(MouseButton::Left),
            right_button: mouse.is_mouse_button_pressed(MouseButton::Right),
            middle_button: mouse.is_mouse_button_pressed(MouseButton::Middle),
            up: keys.is_scancode_pressed(Scancode::Up),
            down: keys.is_scancode_pressed(Scancode::Down),
            left: keys.is_scancode_pressed(Scancode::Left),
            right: keys.is_scancode_pressed(Scancode::Right),
        }
    }

    /// Text shown by the inputs demo
    ///
    /// Each held input reports on a fixed line so messages do not jump
    /// around as buttons are pressed and released.
    pub fn describe(&self) -> String {
        let mut lines = vec![format!("X: {}, Y: {}", self.cursor.0, self.cursor.1)];

        let held = [
            (self.left_button, "YOU'RE PRESSING THE 'LEFT' MOUSE BUTTON."),
            (self.right_button, "YOU'RE PRESSING THE 'RIGHT' MOUSE BUTTON."),
            (self.middle_button, "YOU'RE PRESSING THE 'MIDDLE' MOUSE BUTTON."),
            (self.up, "YOU'RE PRESSING THE 'UP' BUTTON."),
            (self.down, "YOU'RE PRESSING THE 'DOWN' BUTTON."),
            (self.left, "YOU'RE PRESSING THE 'LEFT' BUTTON."),
            (self.right, "YOU'RE PRESSING THE 'RIGHT' BUTTON."),
        ];

        for (pressed, message) in held {
            lines.push(if pressed { message.to_string() } else { String::new() });
        }

        // Drop trailing blank lines
        while lines.last().is_some_and(|line| line.is_empty()) {
            lines.pop();
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdl2::keyboard::Mod;

    #[test]
    fn test_title_screen_keys() {
        let input = InputSystem::new(InputContext::TitleScreen);
        assert_eq!(input.map_key(Keycode::Up), Some(MenuAction::Up));
        assert_eq!(input.map_key(Keycode::Down), Some(MenuAction::Down));
        assert_eq!(input.map_key(Keycode::Return), Some(MenuAction::Confirm));
        assert_eq!(input.map_key(Keycode::Escape), None);
        assert_eq!(input.map_key(Keycode::Left), None);
    }

    #[test]
    fn test_options_keys() {
        let input = InputSystem::new(InputContext::Options);
        assert_eq!(input.map_key(Keycode::Escape), Some(MenuAction::Back));
        assert_eq!(input.map_key(Keycode::Down), Some(MenuAction::Down));
        assert_eq!(input.map_key(Keycode::Return), None);
    }

    #[test]
    fn test_char_creation_keys() {
        let input = InputSystem::new(InputContext::CharCreation);
        assert_eq!(input.map_key(Keycode::Left), Some(MenuAction::Left));
        assert_eq!(input.map_key(Keycode::Right), Some(MenuAction::Right));
        assert_eq!(input.map_key(Keycode::Up), None);
    }

    #[test]
    fn test_picker_keys() {
        let input = InputSystem::new(InputContext::Picker);
        for key in [Keycode::Up, Keycode::Down, Keycode::Left, Keycode::Right] {
            assert!(input.map_key(key).is_some());
        }
        assert_eq!(input.map_key(Keycode::Escape), None);
    }

    #[test]
    fn test_passive_context_ignores_keys() {
        let input = InputSystem::new(InputContext::Passive);
        assert_eq!(input.map_key(Keycode::Up), None);
        assert_eq!(input.map_key(Keycode::Return), None);
    }

    #[test]
    fn test_context_switching() {
        let mut input = InputSystem::new(InputContext::TitleScreen);
        assert_eq!(input.map_key(Keycode::Escape), None);

        input.context = InputContext::Play;
        assert_eq!(input.map_key(Keycode::Escape), Some(MenuAction::Back));
    }

    const ALL_CONTEXTS: [InputContext; 6] = [
        InputContext::TitleScreen,
        InputContext::Options,
        InputContext::Play,
        InputContext::CharCreation,
        InputContext::Picker,
        InputContext::Passive,
    ];

    fn key_down(key: Keycode, repeat: bool) -> Event {
        Event::KeyDown {
            timestamp: 0,
            window_id: 0,
            keycode: Some(key),
            scancode: None,
            keymod: Mod::NOMOD,
            repeat,
        }
    }

    #[test]
    fn test_key_press_maps_to_action() {
        let input = InputSystem::new(InputContext::TitleScreen);
        assert_eq!(input.map_event(&key_down(Keycode::Down, false)), Some(MenuAction::Down));
        assert_eq!(input.map_event(&key_down(Keycode::Return, false)), Some(MenuAction::Confirm));
    }

    #[test]
    fn test_key_repeat_is_ignored() {
        let input = InputSystem::new(InputContext::Picker);
        for key in [Keycode::Up, Keycode::Down, Keycode::Left, Keycode::Right] {
            assert_eq!(input.map_event(&key_down(key, true)), None);
            assert!(input.map_event(&key_down(key, false)).is_some());
        }
    }

    #[test]
    fn test_window_close_quits_in_every_context() {
        for context in ALL_CONTEXTS {
            let input = InputSystem::new(context);
            assert_eq!(
                input.map_event(&Event::Quit { timestamp: 0 }),
                Some(MenuAction::Quit)
            );
        }
    }

    #[test]
    fn test_key_up_is_ignored() {
        let input = InputSystem::new(InputContext::TitleScreen);
        let event = Event::KeyUp {
            timestamp: 0,
            window_id: 0,
            keycode: Some(Keycode::Up),
            scancode: None,
            keymod: Mod::NOMOD,
            repeat: false,
        };
        assert_eq!(input.map_event(&event), None);
    }

    #[test]
    fn test_describe_idle() {
        let held = HeldInput {
            cursor: (12, 34),
            ..Default::default()
        };
        assert_eq!(held.describe(), "X: 12, Y: 34");
    }

    #[test]
    fn test_describe_keeps_line_positions() {
        let held = HeldInput {
            cursor: (0, 0),
            up: true,
            ..Default::default()
        };
        assert_eq!(
            held.describe(),
            "X: 0, Y: 0\n\n\n\nYOU'RE PRESSING THE 'UP' BUTTON."
        );
    }
}
