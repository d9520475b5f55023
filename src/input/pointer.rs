//! Raw pointer events as delivered by the host surface.

use crate::constants::{BUTTON_AUXILIARY, BUTTON_PRIMARY, BUTTON_SECONDARY};
use serde::{Deserialize, Serialize};

/// Bit mask of pressed buttons, using the host's `buttons` encoding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ButtonMask(pub u8);

impl ButtonMask {
    pub const NONE: Self = Self(0);
    pub const PRIMARY: Self = Self(BUTTON_PRIMARY);
    pub const SECONDARY: Self = Self(BUTTON_SECONDARY);
    pub const AUXILIARY: Self = Self(BUTTON_AUXILIARY);

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Exactly the primary button, nothing else held.
    #[inline]
    pub fn is_primary_only(self) -> bool {
        self == Self::PRIMARY
    }

    #[inline]
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl std::ops::BitOr for ButtonMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Keyboard modifiers held while the event fired.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Self::NONE
        }
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Self::NONE
        }
    }
}

/// What the pointer was over when the event fired.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PointerTarget {
    /// The empty canvas background
    #[default]
    Canvas,
    /// A node, pin or menu widget that let the event bubble up
    Widget,
}

/// A pointer event in viewport (client) coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerEvent {
    pub client_x: f32,
    pub client_y: f32,
    pub buttons: ButtonMask,
    pub modifiers: Modifiers,
    pub target: PointerTarget,
}

impl PointerEvent {
    pub fn new(client_x: f32, client_y: f32, buttons: ButtonMask) -> Self {
        Self {
            client_x,
            client_y,
            buttons,
            modifiers: Modifiers::NONE,
            target: PointerTarget::Canvas,
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn on_widget(mut self) -> Self {
        self.target = PointerTarget::Widget;
        self
    }
}
