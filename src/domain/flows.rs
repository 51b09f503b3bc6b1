// src/domain/flows.rs

use crate::domain::category::Category;

/// Which of the two onboarding/browsing flows a category belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceFlow {
    /// Shops, centres and offices with a fixed premises.
    Business,
    /// Individuals offering their own labour or skill.
    Individual,
}

impl ServiceFlow {
    pub const ALL: [ServiceFlow; 2] = [ServiceFlow::Business, ServiceFlow::Individual];

    /// Classify a backend category id. Unknown ids have no flow.
    pub fn for_category_id(id: u32) -> Option<Self> {
        Category::from_id(id).map(Self::for_category)
    }

    pub fn for_category(category: Category) -> Self {
        match category {
            Category::Caricature | Category::DailyWage | Category::Cook => ServiceFlow::Individual,
            Category::CraftShop
            | Category::Photocopy
            | Category::Courier
            | Category::PackersMovers
            | Category::PetClinic
            | Category::Supplier
            | Category::Corporate => ServiceFlow::Business,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ServiceFlow::Business => "Shops & Services",
            ServiceFlow::Individual => "Skilled Individuals",
        }
    }

    /// Categories in this flow, in directory order.
    pub fn categories(self) -> impl Iterator<Item = Category> {
        Category::ALL
            .into_iter()
            .filter(move |c| Self::for_category(*c) == self)
    }
}
