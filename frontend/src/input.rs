use std::collections::HashMap;

use msx_core::core::machine::InputButton;
use sdl2::keyboard::Scancode;

/// Maps SDL scancodes to machine button IDs.
pub struct KeyMap {
    map: HashMap<Scancode, u8>,
}

impl KeyMap {
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Bind a scancode to a machine button ID.
    pub fn bind(&mut self, scancode: Scancode, button_id: u8) {
        self.map.insert(scancode, button_id);
    }

    /// Look up the machine button ID for a scancode.
    pub fn get(&self, scancode: Scancode) -> Option<u8> {
        self.map.get(&scancode).copied()
    }
}

/// Build a default key map for the MSX keyboard-matrix buttons named in
/// `input_map()`. Uses name-based matching so the host key a button lands on
/// doesn't depend on the matrix row/column it happens to be wired to.
pub fn default_key_map(buttons: &[InputButton]) -> KeyMap {
    let mut km = KeyMap::new();

    for button in buttons {
        let scancode = match button.name {
            "Space" => Some(Scancode::Space),
            "Home" => Some(Scancode::Home),
            "Up" => Some(Scancode::Up),
            "Down" => Some(Scancode::Down),
            "Left" => Some(Scancode::Left),
            "Right" => Some(Scancode::Right),
            "Enter" => Some(Scancode::Return),
            "Escape" => Some(Scancode::Escape),

            _ => None,
        };

        if let Some(sc) = scancode {
            km.bind(sc, button.id);
        }
    }

    km
}
