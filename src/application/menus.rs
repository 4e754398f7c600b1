#[cfg(test)]
#[path = "menus_test.rs"]
mod tests;

use crate::domain::models::MenuBehavior;
use crate::domain::models::MenuEntry;
use crate::domain::models::Overlay;
use crate::infrastructure::personas::PersonaRegistry;

pub fn quick_actions() -> Vec<MenuEntry> {
    return vec![
        MenuEntry {
            icon: "🔍",
            name: "Search Web",
            description: "Find information online",
            behavior: MenuBehavior::StageComposer("Search for "),
        },
        MenuEntry {
            icon: "🖼️",
            name: "Create Image",
            description: "Generate visual content",
            behavior: MenuBehavior::StageComposer("Create an image of "),
        },
        MenuEntry {
            icon: "📝",
            name: "Write Content",
            description: "Create documents or text",
            behavior: MenuBehavior::StageComposer("Write "),
        },
        MenuEntry {
            icon: "💡",
            name: "Brainstorm",
            description: "Generate creative ideas",
            behavior: MenuBehavior::StageComposer("Brainstorm ideas for "),
        },
        MenuEntry {
            icon: "📅",
            name: "Plan Schedule",
            description: "Organize your time",
            behavior: MenuBehavior::StageComposer("Plan my schedule for "),
        },
        MenuEntry {
            icon: "🧮",
            name: "Calculate",
            description: "Solve math problems",
            behavior: MenuBehavior::StageComposer("Calculate "),
        },
    ];
}

pub fn tool_catalog() -> Vec<MenuEntry> {
    return vec![
        MenuEntry {
            icon: "👨‍🍳",
            name: "Cooking",
            description: "Recipe search and cooking help",
            behavior: MenuBehavior::OpenOverlay(Overlay::Cooking),
        },
        MenuEntry {
            icon: "📚",
            name: "History",
            description: "View conversation history",
            behavior: MenuBehavior::OpenOverlay(Overlay::History),
        },
        MenuEntry {
            icon: "⚙️",
            name: "Settings",
            description: "Configure preferences",
            behavior: MenuBehavior::OpenOverlay(Overlay::Settings),
        },
        MenuEntry {
            icon: "🔗",
            name: "Integrations",
            description: "Connect external services",
            behavior: MenuBehavior::StageAndSubmit("Settings"),
        },
        MenuEntry {
            icon: "📊",
            name: "Analytics",
            description: "Usage statistics",
            behavior: MenuBehavior::StageComposer("Show my usage analytics"),
        },
        MenuEntry {
            icon: "🎨",
            name: "Creative Tools",
            description: "Art and design assistance",
            behavior: MenuBehavior::StageComposer("Help me with creative projects"),
        },
        MenuEntry {
            icon: "💼",
            name: "Business Tools",
            description: "Professional assistance",
            behavior: MenuBehavior::StageComposer("Help me with business tasks"),
        },
        MenuEntry {
            icon: "🎓",
            name: "Learning",
            description: "Educational support",
            behavior: MenuBehavior::StageComposer("Help me learn about "),
        },
    ];
}

pub fn persona_picker() -> Vec<MenuEntry> {
    return PersonaRegistry::list()
        .iter()
        .map(|persona| {
            return MenuEntry {
                icon: persona.icon,
                name: persona.name,
                description: persona.description,
                behavior: MenuBehavior::SwitchPersona(persona.id),
            };
        })
        .collect::<Vec<MenuEntry>>();
}

/// Returns the content table for overlays that are plain menus. Cooking,
/// History, and Settings render their own panels.
pub fn entries_for(overlay: Overlay) -> Option<Vec<MenuEntry>> {
    match overlay {
        Overlay::QuickActions => return Some(quick_actions()),
        Overlay::PersonaPicker => return Some(persona_picker()),
        Overlay::ToolCatalog => return Some(tool_catalog()),
        _ => return None,
    }
}
