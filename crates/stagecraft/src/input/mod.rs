//! Input device abstraction
//!
//! The engine never talks to a concrete event source. Embedders implement
//! [`InputDevice`] over whatever they have (terminal, window library, a
//! scripted sequence in tests) and the loop polls it once per iteration.
//! Scenes and layers read it through their contexts.

use crate::error::EngineError;
use bitflags::bitflags;

/// Input capability trait implemented by embedders
///
/// `poll` pumps the underlying event source and `end_frame` closes the
/// frame so edge queries (`was_pressed`, `was_released`) reset. The loop
/// calls both once per iteration, in that order.
pub trait InputDevice {
    /// Pump the underlying event source
    fn poll(&mut self) -> Result<(), EngineError>;

    /// Close the current input frame
    fn end_frame(&mut self);

    /// Whether the key is currently held
    fn is_down(&self, key: KeyCode) -> bool;

    /// Whether the key went down during this frame
    fn was_pressed(&self, key: KeyCode) -> bool;

    /// Whether the key went up during this frame
    fn was_released(&self, key: KeyCode) -> bool;

    /// Current pointer state
    fn pointer(&self) -> PointerState {
        PointerState::default()
    }
}

/// Input device that reports nothing
///
/// Useful for headless runs and tests that exercise rendering without
/// input.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullInput;

impl InputDevice for NullInput {
    fn poll(&mut self) -> Result<(), EngineError> {
        Ok(())
    }

    fn end_frame(&mut self) {}

    fn is_down(&self, _key: KeyCode) -> bool {
        false
    }

    fn was_pressed(&self, _key: KeyCode) -> bool {
        false
    }

    fn was_released(&self, _key: KeyCode) -> bool {
        false
    }
}

/// Pointer position and button state
///
/// Coordinates are surface cells, matching the drawing coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerState {
    /// Column of the pointer
    pub x: i32,

    /// Row of the pointer
    pub y: i32,

    /// Buttons currently held
    pub buttons: MouseButtons,
}

bitflags! {
    /// Pointer buttons currently held
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct MouseButtons: u8 {
        /// Primary button
        const LEFT = 1;
        /// Secondary button
        const RIGHT = 1 << 1;
        /// Wheel button
        const MIDDLE = 1 << 2;
    }
}

/// Key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// Letter key `A`
    A,
    /// Letter key `B`
    B,
    /// Letter key `C`
    C,
    /// Letter key `D`
    D,
    /// Letter key `E`
    E,
    /// Letter key `F`
    F,
    /// Letter key `G`
    G,
    /// Letter key `H`
    H,
    /// Letter key `I`
    I,
    /// Letter key `J`
    J,
    /// Letter key `K`
    K,
    /// Letter key `L`
    L,
    /// Letter key `M`
    M,
    /// Letter key `N`
    N,
    /// Letter key `O`
    O,
    /// Letter key `P`
    P,
    /// Letter key `Q`
    Q,
    /// Letter key `R`
    R,
    /// Letter key `S`
    S,
    /// Letter key `T`
    T,
    /// Letter key `U`
    U,
    /// Letter key `V`
    V,
    /// Letter key `W`
    W,
    /// Letter key `X`
    X,
    /// Letter key `Y`
    Y,
    /// Letter key `Z`
    Z,
    /// Digit key `0`
    Digit0,
    /// Digit key `1`
    Digit1,
    /// Digit key `2`
    Digit2,
    /// Digit key `3`
    Digit3,
    /// Digit key `4`
    Digit4,
    /// Digit key `5`
    Digit5,
    /// Digit key `6`
    Digit6,
    /// Digit key `7`
    Digit7,
    /// Digit key `8`
    Digit8,
    /// Digit key `9`
    Digit9,
    /// Space bar
    Space,
    /// Enter key
    Enter,
    /// Escape key
    Escape,
    /// Tab key
    Tab,
    /// Backspace key
    Backspace,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
    /// Page-up key
    PageUp,
    /// Page-down key
    PageDown,
    /// Home key
    Home,
    /// End key
    End,
}
