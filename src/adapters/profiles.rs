// src/adapters/profiles.rs
//
// Per-category configuration consumed by `CategoryAdapter`.

use crate::adapters::samples::{self, SampleProvider};
use crate::domain::Category;

#[derive(Debug)]
pub struct CategoryProfile {
    pub category: Category,
    /// Phone numbers keyed by record id, used when the record carries none.
    pub phones: &'static [(&'static str, &'static str)],
    /// Gallery images keyed by record id, used when the record carries none.
    pub images: &'static [(&'static str, &'static [&'static str])],
    /// Badges every card in the category shows.
    pub default_tags: &'static [&'static str],
    /// Service chips when the record lists none of its own.
    pub services: &'static [&'static str],
    /// Whether cards offer a WhatsApp action.
    pub whatsapp: bool,
}

impl CategoryProfile {
    pub fn phone_for(&self, id: &str) -> Option<&'static str> {
        self.phones.iter().find(|(key, _)| *key == id).map(|(_, phone)| *phone)
    }

    pub fn images_for(&self, id: &str) -> &'static [&'static str] {
        self.images
            .iter()
            .find(|(key, _)| *key == id)
            .map(|(_, images)| *images)
            .unwrap_or(&[])
    }

    pub fn samples(&self) -> &'static [SampleProvider] {
        samples::samples_for(self.category)
    }
}

static PROFILES: [CategoryProfile; 10] = [
    CategoryProfile {
        category: Category::Caricature,
        phones: &[("caricature-1", "98450 11223"), ("caricature-2", "+91 99001 22334")],
        images: &[("caricature-2", &["/static/samples/caricature-2a.jpg"])],
        default_tags: &["Verified"],
        services: &["Party caricatures", "Wedding sketches"],
        whatsapp: true,
    },
    CategoryProfile {
        category: Category::CraftShop,
        phones: &[("craft-shop-1", "080-2663 4455")],
        images: &[],
        default_tags: &[],
        services: &["Art supplies", "Stationery"],
        whatsapp: false,
    },
    CategoryProfile {
        category: Category::Photocopy,
        phones: &[("photocopy-1", "98860 77889"), ("photocopy-2", "97400 12121")],
        images: &[("photocopy-2", &["/static/samples/photocopy-2a.jpg", "/static/samples/photocopy-2b.jpg"])],
        default_tags: &[],
        services: &["Photocopy", "Printing", "Scanning"],
        whatsapp: false,
    },
    CategoryProfile {
        category: Category::Courier,
        phones: &[("courier-1", "9876543210")],
        images: &[],
        default_tags: &["Verified"],
        services: &["Domestic courier", "Document delivery"],
        whatsapp: true,
    },
    CategoryProfile {
        category: Category::PackersMovers,
        phones: &[("packers-movers-1", "98453 00001"), ("packers-movers-2", "98453 00002")],
        images: &[],
        default_tags: &["Verified"],
        services: &["Packing", "Loading & unloading", "Relocation"],
        whatsapp: true,
    },
    CategoryProfile {
        category: Category::PetClinic,
        phones: &[("pet-clinic-1", "080-4123 9900")],
        images: &[],
        default_tags: &[],
        services: &["Consultation", "Vaccination"],
        whatsapp: false,
    },
    CategoryProfile {
        category: Category::DailyWage,
        phones: &[("daily-wage-1", "90080 45671"), ("daily-wage-2", "90080 45672")],
        images: &[],
        default_tags: &[],
        services: &["General labour"],
        whatsapp: true,
    },
    CategoryProfile {
        category: Category::Cook,
        phones: &[("cook-1", "99860 33445")],
        images: &[],
        default_tags: &["Verified"],
        services: &["Home cooking", "Catering"],
        whatsapp: true,
    },
    CategoryProfile {
        category: Category::Supplier,
        phones: &[("supplier-1", "080-2222 1111")],
        images: &[],
        default_tags: &[],
        services: &["Wholesale supply"],
        whatsapp: false,
    },
    CategoryProfile {
        category: Category::Corporate,
        phones: &[("corporate-1", "080-6700 1234"), ("corporate-2", "080-6700 5678")],
        images: &[],
        default_tags: &["Verified"],
        services: &["Business services"],
        whatsapp: false,
    },
];

pub fn profile(category: Category) -> &'static CategoryProfile {
    // PROFILES is indexed by category id, starting at 1.
    &PROFILES[category.id() as usize - 1]
}
