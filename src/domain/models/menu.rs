use super::Overlay;
use super::PersonaId;

/// What activating a menu row does. Each behavior that touches the composer
/// also closes the hosting overlay, applied in the same synchronous step so
/// no frame renders one effect without the other.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuBehavior {
    /// Stage templated text into the composer for the user to complete.
    StageComposer(&'static str),
    /// Stage text and submit it immediately.
    StageAndSubmit(&'static str),
    OpenOverlay(Overlay),
    SwitchPersona(PersonaId),
}

/// One row of an overlay content table. Pure display and dispatch data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuEntry {
    pub icon: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub behavior: MenuBehavior,
}
