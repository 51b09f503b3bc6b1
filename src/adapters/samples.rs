// src/adapters/samples.rs
//
// Read-only fallback listings, shown before a live search has run.
// Phone numbers live in the per-category phone tables in `profiles.rs`.

use crate::domain::Category;

#[derive(Debug)]
pub struct SampleProvider {
    pub id: &'static str,
    pub title: &'static str,
    pub location: &'static str,
    pub distance_km: Option<f64>,
    pub rating: Option<f64>,
    pub rating_count: Option<u64>,
    pub open_now: Option<bool>,
    /// (lat, lng)
    pub coordinates: Option<(f64, f64)>,
    pub photos: &'static [&'static str],
    pub tags: &'static [&'static str],
    pub services: &'static [&'static str],
}

const EMPTY: SampleProvider = SampleProvider {
    id: "",
    title: "",
    location: "",
    distance_km: None,
    rating: None,
    rating_count: None,
    open_now: None,
    coordinates: None,
    photos: &[],
    tags: &[],
    services: &[],
};

pub static CARICATURE: [SampleProvider; 2] = [
    SampleProvider {
        id: "caricature-1",
        title: "Inkline Caricatures",
        location: "Church Street, Bengaluru",
        distance_km: Some(1.2),
        rating: Some(4.8),
        rating_count: Some(96),
        open_now: Some(true),
        coordinates: Some((12.9756, 77.6050)),
        photos: &[
            "/static/samples/caricature-1a.jpg",
            "/static/samples/caricature-1b.jpg",
            "/static/samples/caricature-1c.jpg",
        ],
        tags: &["Trending"],
        services: &["Live events", "Digital portraits"],
    },
    SampleProvider {
        id: "caricature-2",
        title: "Quick Sketch Studio",
        location: "Indiranagar 100ft Road",
        distance_km: Some(3.4),
        rating: Some(4.3),
        rating_count: Some(21),
        ..EMPTY
    },
];

pub static CRAFT_SHOP: [SampleProvider; 2] = [
    SampleProvider {
        id: "craft-shop-1",
        title: "Paper & Thread",
        location: "Jayanagar 4th Block",
        distance_km: Some(0.8),
        rating: Some(4.5),
        rating_count: Some(143),
        open_now: Some(true),
        coordinates: Some((12.9250, 77.5938)),
        photos: &["/static/samples/craft-shop-1a.jpg", "/static/samples/craft-shop-1b.jpg"],
        tags: &["GST"],
        services: &["Gift wrapping", "Custom orders"],
    },
    SampleProvider {
        id: "craft-shop-2",
        title: "Handmade Haven",
        location: "Commercial Street",
        distance_km: Some(2.9),
        open_now: Some(false),
        ..EMPTY
    },
];

pub static PHOTOCOPY: [SampleProvider; 2] = [
    SampleProvider {
        id: "photocopy-1",
        title: "Xerox Point",
        location: "Near BTM Layout Bus Stop",
        distance_km: Some(0.3),
        rating: Some(4.1),
        rating_count: Some(58),
        open_now: Some(true),
        coordinates: Some((12.9166, 77.6101)),
        photos: &["/static/samples/photocopy-1a.jpg"],
        tags: &[],
        services: &["Colour prints", "Spiral binding", "Lamination"],
    },
    SampleProvider {
        id: "photocopy-2",
        title: "Print Hub",
        location: "Koramangala 5th Block",
        distance_km: Some(1.7),
        rating: Some(3.9),
        rating_count: Some(12),
        ..EMPTY
    },
];

pub static COURIER: [SampleProvider; 2] = [
    SampleProvider {
        id: "courier-1",
        title: "Swift Couriers",
        location: "MG Road, Bengaluru",
        distance_km: Some(1.0),
        rating: Some(4.4),
        rating_count: Some(210),
        open_now: Some(true),
        coordinates: Some((12.97, 77.59)),
        photos: &[
            "/static/samples/courier-1a.jpg",
            "/static/samples/courier-1b.jpg",
            "/static/samples/courier-1c.jpg",
        ],
        tags: &["GST"],
        services: &["Same-day delivery", "International"],
    },
    SampleProvider {
        id: "courier-2",
        title: "Parcel Point",
        location: "Malleshwaram 8th Cross",
        distance_km: Some(4.2),
        ..EMPTY
    },
];

pub static PACKERS_MOVERS: [SampleProvider; 2] = [
    SampleProvider {
        id: "packers-movers-1",
        title: "SafeShift Packers",
        location: "Whitefield Main Road",
        distance_km: Some(2.2),
        rating: Some(4.6),
        rating_count: Some(75),
        open_now: Some(true),
        coordinates: Some((12.9698, 77.7500)),
        photos: &["/static/samples/packers-movers-1a.jpg", "/static/samples/packers-movers-1b.jpg"],
        tags: &["Trending"],
        services: &["Home shifting", "Vehicle transport", "Storage"],
    },
    SampleProvider {
        id: "packers-movers-2",
        title: "City Movers",
        location: "Hebbal Ring Road",
        distance_km: Some(6.5),
        rating: Some(4.0),
        ..EMPTY
    },
];

pub static PET_CLINIC: [SampleProvider; 2] = [
    SampleProvider {
        id: "pet-clinic-1",
        title: "Paws & Claws Clinic",
        location: "HSR Layout Sector 2",
        distance_km: Some(1.5),
        rating: Some(4.9),
        rating_count: Some(312),
        open_now: Some(true),
        coordinates: Some((12.9116, 77.6474)),
        photos: &["/static/samples/pet-clinic-1a.jpg", "/static/samples/pet-clinic-1b.jpg"],
        tags: &[],
        services: &["Vaccination", "Grooming", "Surgery"],
    },
    SampleProvider {
        id: "pet-clinic-2",
        title: "Happy Tails Vet",
        location: "Banashankari 2nd Stage",
        distance_km: Some(5.1),
        open_now: Some(false),
        ..EMPTY
    },
];

pub static DAILY_WAGE: [SampleProvider; 2] = [
    SampleProvider {
        id: "daily-wage-1",
        title: "Ramesh Kumar",
        location: "Yeshwanthpur",
        distance_km: Some(2.0),
        rating: Some(4.2),
        rating_count: Some(17),
        open_now: None,
        coordinates: Some((13.0280, 77.5400)),
        photos: &["/static/samples/daily-wage-1a.jpg"],
        tags: &[],
        services: &["Painting", "Loading"],
    },
    SampleProvider {
        id: "daily-wage-2",
        title: "Lakshmi Devi",
        location: "Rajajinagar",
        distance_km: Some(3.3),
        ..EMPTY
    },
];

pub static COOK: [SampleProvider; 2] = [
    SampleProvider {
        id: "cook-1",
        title: "Anita's Home Kitchen",
        location: "Basavanagudi",
        distance_km: Some(1.9),
        rating: Some(4.7),
        rating_count: Some(64),
        open_now: Some(true),
        coordinates: Some((12.9416, 77.5738)),
        photos: &["/static/samples/cook-1a.jpg", "/static/samples/cook-1b.jpg"],
        tags: &["Trending"],
        services: &["South Indian", "Party orders"],
    },
    SampleProvider {
        id: "cook-2",
        title: "Chef Manoj",
        location: "Electronic City Phase 1",
        distance_km: Some(8.4),
        rating: Some(4.1),
        rating_count: Some(9),
        ..EMPTY
    },
];

pub static SUPPLIER: [SampleProvider; 2] = [
    SampleProvider {
        id: "supplier-1",
        title: "Sri Balaji Traders",
        location: "KR Market",
        distance_km: Some(2.6),
        rating: Some(4.0),
        rating_count: Some(33),
        open_now: Some(true),
        coordinates: Some((12.9634, 77.5770)),
        photos: &["/static/samples/supplier-1a.jpg"],
        tags: &["GST"],
        services: &["Wholesale", "Bulk delivery"],
    },
    SampleProvider {
        id: "supplier-2",
        title: "Metro Packaging Supplies",
        location: "Peenya Industrial Area",
        distance_km: Some(9.8),
        ..EMPTY
    },
];

pub static CORPORATE: [SampleProvider; 2] = [
    SampleProvider {
        id: "corporate-1",
        title: "Brightpath Consulting",
        location: "UB City, Vittal Mallya Road",
        distance_km: Some(1.4),
        rating: Some(4.6),
        rating_count: Some(41),
        open_now: Some(true),
        coordinates: Some((12.9716, 77.5963)),
        photos: &["/static/samples/corporate-1a.jpg", "/static/samples/corporate-1b.jpg"],
        tags: &["GST"],
        services: &["Payroll", "Compliance", "Audit"],
    },
    SampleProvider {
        id: "corporate-2",
        title: "Northstar Facility Services",
        location: "Outer Ring Road, Marathahalli",
        distance_km: Some(7.0),
        ..EMPTY
    },
];

pub fn samples_for(category: Category) -> &'static [SampleProvider] {
    match category {
        Category::Caricature => &CARICATURE,
        Category::CraftShop => &CRAFT_SHOP,
        Category::Photocopy => &PHOTOCOPY,
        Category::Courier => &COURIER,
        Category::PackersMovers => &PACKERS_MOVERS,
        Category::PetClinic => &PET_CLINIC,
        Category::DailyWage => &DAILY_WAGE,
        Category::Cook => &COOK,
        Category::Supplier => &SUPPLIER,
        Category::Corporate => &CORPORATE,
    }
}
