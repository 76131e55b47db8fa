//! Key mapping and command dispatch for peruse.
//!
//! Bindings are fixed at build time; the map exists so keypress handling
//! reads as a command match instead of raw key codes.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// A browsing-mode command bound to one or more keys.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Command {
    MoveUp,
    MoveDown,
    Select,
    Back,
    ToggleHidden,
    OpenSearch,
    ShowHelp,
    ShowSettings,
    Quit,
}

/// Key + modifiers as used in the keymap.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug)]
pub(crate) struct Key {
    pub(crate) code: KeyCode,
    pub(crate) modifiers: KeyModifiers,
}

/// Mapping from [Key] to [Command].
pub(crate) struct Keymap {
    map: HashMap<Key, Command>,
}

impl Keymap {
    #[rustfmt::skip]
    pub(crate) fn new() -> Self {
        let mut map = HashMap::new();

        macro_rules! bind {
            ($code:expr, $mods:expr, $cmd:expr) => {
                map.insert(Key { code: $code, modifiers: $mods }, $cmd);
            };
            ($code:expr, $cmd:expr) => {
                bind!($code, KeyModifiers::NONE, $cmd);
            };
        }

        use Command as C;

        bind!(KeyCode::Char('k'),   C::MoveUp);
        bind!(KeyCode::Up,          C::MoveUp);
        bind!(KeyCode::Char('j'),   C::MoveDown);
        bind!(KeyCode::Down,        C::MoveDown);
        bind!(KeyCode::Char('l'),   C::Select);
        bind!(KeyCode::Right,       C::Select);
        bind!(KeyCode::Enter,       C::Select);
        bind!(KeyCode::Char('h'),   C::Back);
        bind!(KeyCode::Left,        C::Back);
        bind!(KeyCode::Backspace,   C::Back);
        bind!(KeyCode::Char('.'),   C::ToggleHidden);
        bind!(KeyCode::Char('/'),   C::OpenSearch);
        bind!(KeyCode::Char('f'),   KeyModifiers::CONTROL, C::OpenSearch);
        bind!(KeyCode::Char('?'),   C::ShowHelp);
        bind!(KeyCode::Char('s'),   C::ShowSettings);
        bind!(KeyCode::Char('q'),   C::Quit);

        Keymap { map }
    }

    /// Looks up the command for a given key event.
    pub(crate) fn lookup(&self, key: KeyEvent) -> Option<Command> {
        let k = Key {
            code: key.code,
            modifiers: key.modifiers,
        };

        if let Some(cmd) = self.map.get(&k).copied() {
            return Some(cmd);
        }

        // Some terminals report shifted characters with SHIFT still set.
        if matches!(key.code, KeyCode::Char(_)) && key.modifiers.contains(KeyModifiers::SHIFT) {
            let k2 = Key {
                code: key.code,
                modifiers: key.modifiers - KeyModifiers::SHIFT,
            };
            return self.map.get(&k2).copied();
        }
        None
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self::new()
    }
}
