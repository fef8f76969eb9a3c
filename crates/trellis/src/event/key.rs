//! Keyboard input primitives.
use std::ops::Add;

/// Modifier key state.
#[derive(Default, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Mods {
    /// Shift is active.
    pub shift: bool,
    /// Control is active.
    pub ctrl: bool,
    /// Alt is active.
    pub alt: bool,
    /// Super (command / windows key) is active.
    pub logo: bool,
}

impl Mods {
    /// No modifiers pressed.
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
        logo: false,
    };
    /// Shift only.
    pub const SHIFT: Self = Self {
        shift: true,
        ..Self::NONE
    };
    /// Control only.
    pub const CTRL: Self = Self {
        ctrl: true,
        ..Self::NONE
    };
    /// Alt only.
    pub const ALT: Self = Self {
        alt: true,
        ..Self::NONE
    };
}

impl Add<Self> for Mods {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self {
            shift: self.shift || other.shift,
            ctrl: self.ctrl || other.ctrl,
            alt: self.alt || other.alt,
            logo: self.logo || other.logo,
        }
    }
}

/// Logical key codes, already normalised by the platform backend.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum KeyCode {
    /// A printable character.
    Char(char),
    /// Function key F1-F24.
    F(u8),
    /// Backspace.
    Backspace,
    /// Enter / return.
    Enter,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Home.
    Home,
    /// End.
    End,
    /// Page up.
    PageUp,
    /// Page down.
    PageDown,
    /// Tab.
    Tab,
    /// Delete.
    Delete,
    /// Insert.
    Insert,
    /// Escape.
    Esc,
}

impl From<char> for KeyCode {
    fn from(c: char) -> Self {
        Self::Char(c)
    }
}

/// Key transition.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum KeyAction {
    /// Key went down.
    Press,
    /// Key auto-repeat while held.
    Repeat,
    /// Key went up.
    Release,
}

/// A single keyboard event.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Key {
    /// Active modifiers.
    pub mods: Mods,
    /// The key.
    pub code: KeyCode,
    /// Press, repeat or release.
    pub action: KeyAction,
}

impl Key {
    /// A key press with no modifiers.
    pub fn press(code: impl Into<KeyCode>) -> Self {
        Self {
            mods: Mods::NONE,
            code: code.into(),
            action: KeyAction::Press,
        }
    }

    /// The same key as a release.
    pub fn released(self) -> Self {
        Self {
            action: KeyAction::Release,
            ..self
        }
    }
}

impl Add<KeyCode> for Mods {
    type Output = Key;

    fn add(self, code: KeyCode) -> Self::Output {
        Key {
            mods: self,
            code,
            action: KeyAction::Press,
        }
    }
}

impl Add<char> for Mods {
    type Output = Key;

    fn add(self, c: char) -> Self::Output {
        self + KeyCode::Char(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combine() {
        let k = (Mods::CTRL + Mods::SHIFT) + 'a';
        assert!(k.mods.ctrl && k.mods.shift && !k.mods.alt);
        assert_eq!(k.code, KeyCode::Char('a'));
        assert_eq!(k.action, KeyAction::Press);
        assert_eq!(Key::press(KeyCode::Esc).released().action, KeyAction::Release);
    }
}
