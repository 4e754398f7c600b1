#[cfg(test)]
#[path = "overlay_test.rs"]
mod tests;

use crate::domain::models::Overlay;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CookingFilter {
    #[default]
    All,
    Ingredients,
    Instructions,
}

impl CookingFilter {
    pub fn cycle(&self) -> CookingFilter {
        match self {
            CookingFilter::All => return CookingFilter::Ingredients,
            CookingFilter::Ingredients => return CookingFilter::Instructions,
            CookingFilter::Instructions => return CookingFilter::All,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CookingFilter::All => return "All Recipes",
            CookingFilter::Ingredients => return "Ingredients",
            CookingFilter::Instructions => return "Cooking Instructions",
        }
    }
}

/// Single-slot state machine arbitrating which modal panel is visible.
/// Opening is last-request-wins with no stacking; closing only takes effect
/// when the caller names the overlay that is actually active, so a stale
/// close from an already-replaced panel can never hide its successor.
#[derive(Debug, Default)]
pub struct OverlayController {
    active: Option<Overlay>,
    pub cooking_query: String,
    pub cooking_filter: CookingFilter,
}

impl OverlayController {
    pub fn active(&self) -> Option<Overlay> {
        return self.active;
    }

    pub fn is_open(&self, overlay: Overlay) -> bool {
        return self.active == Some(overlay);
    }

    /// Replaces whatever is currently visible. The Cooking search field's
    /// staged text lives only while Cooking stays the active overlay.
    pub fn open(&mut self, overlay: Overlay) {
        if self.active != Some(overlay) {
            self.cooking_query.clear();
        }

        self.active = Some(overlay);
    }

    /// No-op unless `overlay` is the one currently visible.
    pub fn close(&mut self, overlay: Overlay) {
        if self.active == Some(overlay) {
            self.active = None;
            self.cooking_query.clear();
        }
    }
}
