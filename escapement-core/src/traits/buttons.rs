//! Button input boundary

/// The two physical controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonId {
    /// Control A
    A,
    /// Control B
    B,
}

impl ButtonId {
    /// Both buttons in polling order
    pub const ALL: [ButtonId; 2] = [ButtonId::A, ButtonId::B];

    /// Index into per-button arrays
    pub const fn index(self) -> usize {
        match self {
            ButtonId::A => 0,
            ButtonId::B => 1,
        }
    }
}

/// Raw button levels
///
/// Implementations report the electrical state only; debouncing and
/// gesture classification happen in [`crate::input`].
pub trait ButtonSource {
    /// Check whether a button is currently held down
    fn is_pressed(&self, button: ButtonId) -> bool;
}
