// src/domain/category.rs

use std::fmt;

/// A directory vertical. Each one has its own endpoint family on the remote
/// API and its own raw record schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Caricature,
    CraftShop,
    Photocopy,
    Courier,
    PackersMovers,
    PetClinic,
    DailyWage,
    Cook,
    Supplier,
    Corporate,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::Caricature,
        Category::CraftShop,
        Category::Photocopy,
        Category::Courier,
        Category::PackersMovers,
        Category::PetClinic,
        Category::DailyWage,
        Category::Cook,
        Category::Supplier,
        Category::Corporate,
    ];

    /// URL path segment used by the front end.
    pub fn slug(self) -> &'static str {
        match self {
            Category::Caricature => "caricature",
            Category::CraftShop => "craft-shop",
            Category::Photocopy => "photocopy",
            Category::Courier => "courier",
            Category::PackersMovers => "packers-movers",
            Category::PetClinic => "pet-clinic",
            Category::DailyWage => "daily-wage",
            Category::Cook => "cook",
            Category::Supplier => "supplier",
            Category::Corporate => "corporate",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.slug() == slug)
    }

    /// Numeric id used by the backend's category tables.
    pub fn id(self) -> u32 {
        match self {
            Category::Caricature => 1,
            Category::CraftShop => 2,
            Category::Photocopy => 3,
            Category::Courier => 4,
            Category::PackersMovers => 5,
            Category::PetClinic => 6,
            Category::DailyWage => 7,
            Category::Cook => 8,
            Category::Supplier => 9,
            Category::Corporate => 10,
        }
    }

    pub fn from_id(id: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.id() == id)
    }

    /// The `<Category>` part of `getNearby<Category>`, `add<Category>Service`, etc.
    pub fn endpoint_stem(self) -> &'static str {
        match self {
            Category::Caricature => "Caricature",
            Category::CraftShop => "CraftShop",
            Category::Photocopy => "PhotocopyCentre",
            Category::Courier => "Courier",
            Category::PackersMovers => "PackersMovers",
            Category::PetClinic => "PetClinic",
            Category::DailyWage => "DailyWage",
            Category::Cook => "Cook",
            Category::Supplier => "Supplier",
            Category::Corporate => "Corporate",
        }
    }

    /// Key under which the API nests category-specific fields.
    pub fn nested_data_key(self) -> &'static str {
        match self {
            Category::CraftShop | Category::Courier | Category::Corporate => "businessData",
            Category::Caricature | Category::PackersMovers | Category::PetClinic => "serviceData",
            Category::Photocopy => "centreData",
            Category::DailyWage => "jobData",
            Category::Cook => "cookData",
            Category::Supplier => "supplierData",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Category::Caricature => "Caricature Artists",
            Category::CraftShop => "Craft Shops",
            Category::Photocopy => "Photocopy Centres",
            Category::Courier => "Courier Offices",
            Category::PackersMovers => "Packers & Movers",
            Category::PetClinic => "Pet Clinics",
            Category::DailyWage => "Daily Wage Workers",
            Category::Cook => "Cooks",
            Category::Supplier => "Suppliers",
            Category::Corporate => "Corporate Services",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
