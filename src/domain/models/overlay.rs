use serde_derive::Deserialize;
use serde_derive::Serialize;

/// A modal panel occluding the conversation view. At most one is visible at
/// a time; the overlay controller owns that invariant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Overlay {
    QuickActions,
    PersonaPicker,
    ToolCatalog,
    Cooking,
    History,
    Settings,
}

impl Overlay {
    pub fn title(&self) -> &'static str {
        match self {
            Overlay::QuickActions => return "Quick Actions",
            Overlay::PersonaPicker => return "Personas",
            Overlay::ToolCatalog => return "All Tools",
            Overlay::Cooking => return "Cooking",
            Overlay::History => return "History",
            Overlay::Settings => return "Settings",
        }
    }
}
