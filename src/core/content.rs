//! Display copy for the page sections.

/// One product card in the catalogue grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogueItem {
    pub id: u32,
    pub title: &'static str,
    pub material: &'static str,
    pub image: &'static str,
}

/// Vertical alignment of a gallery piece on the track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryPosition {
    Top,
    Middle,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryItem {
    pub id: u32,
    pub title: &'static str,
    pub material: &'static str,
    pub image: &'static str,
    pub position: GalleryPosition,
}

macro_rules! upload {
    ($file:literal) => {
        concat!(
            "https://slelguoygbfzlpylpxfs.supabase.co/storage/v1/render/image/public/document-uploads/",
            $file
        )
    };
}

pub const BRAND: &str = "Furnions";
pub const TAGLINE: &str = "Aesthetic Furniture";
pub const HERO_WORDS: (&str, &str) = ("FUR", "NICALLY");

pub const CATALOGUE: &[CatalogueItem] = &[
    CatalogueItem {
        id: 1,
        title: "Wall Wine Rack",
        material: "Reclaimed Wood",
        image: upload!("download-10-1765648710123.jpg"),
    },
    CatalogueItem {
        id: 2,
        title: "Sculptural Wine Holder",
        material: "Solid Mango Wood",
        image: upload!("Handcrafted-Natural-Unique-Solid-Wood-Bottle-Wine-Rack-1765648709555.jpg"),
    },
    CatalogueItem {
        id: 3,
        title: "Nesting Tables",
        material: "Walnut & Carved Inlay",
        image: upload!("download-9-1765648709813.jpg"),
    },
    CatalogueItem {
        id: 4,
        title: "Cylindrical Side Table",
        material: "Sheesham Wood",
        image: upload!("download-8-1765648709896.jpg"),
    },
    CatalogueItem {
        id: 5,
        title: "Bear Table Stand",
        material: "Hand-Carved Acacia",
        image: upload!("Side-Tables-_-Living-Room-Side-Tables-1765648709459.jpg"),
    },
    CatalogueItem {
        id: 6,
        title: "Leaf Coaster Set",
        material: "Engraved Oak",
        image: upload!("These-would-be-great-designs_-1765648710031.jpg"),
    },
    CatalogueItem {
        id: 7,
        title: "Monogram Cutting Board",
        material: "Hickory & Walnut",
        image: upload!("download-7-1765648709681.jpg"),
    },
    CatalogueItem {
        id: 8,
        title: "Striped Cutting Boards",
        material: "Multi-Wood Composition",
        image: upload!("10-DIY-Kitchen-Decoration-Ideas-1765648710000.jpg"),
    },
    CatalogueItem {
        id: 9,
        title: "Decorative Board Stands",
        material: "Carved & Freestanding",
        image: upload!("Custom-Engraved-Wooden-Cutting-Board-Set-1765648709917.jpg"),
    },
    CatalogueItem {
        id: 10,
        title: "Tiered Bamboo Organizers",
        material: "Natural Bamboo & Wire",
        image: upload!("download-6-1765648710295.jpg"),
    },
];

pub const GALLERY: &[GalleryItem] = &[
    GalleryItem {
        id: 1,
        title: "Wall Wine Rack",
        material: "Reclaimed Wood & Brass",
        image: upload!("download-10-1765648710123.jpg"),
        position: GalleryPosition::Top,
    },
    GalleryItem {
        id: 2,
        title: "Sculptural Wine Holder",
        material: "Solid Mango Wood",
        image: upload!("Handcrafted-Natural-Unique-Solid-Wood-Bottle-Wine-Rack-1765648709555.jpg"),
        position: GalleryPosition::Bottom,
    },
    GalleryItem {
        id: 3,
        title: "Bear Table Stand",
        material: "Hand-Carved Acacia",
        image: upload!("Side-Tables-_-Living-Room-Side-Tables-1765648709459.jpg"),
        position: GalleryPosition::Middle,
    },
    GalleryItem {
        id: 4,
        title: "Nesting Tables",
        material: "Walnut & Carved Inlay",
        image: upload!("download-9-1765648709813.jpg"),
        position: GalleryPosition::Top,
    },
    GalleryItem {
        id: 5,
        title: "Striped Cutting Boards",
        material: "Multi-Wood Composition",
        image: upload!("10-DIY-Kitchen-Decoration-Ideas-1765648710000.jpg"),
        position: GalleryPosition::Bottom,
    },
    GalleryItem {
        id: 6,
        title: "Tiered Organizers",
        material: "Natural Bamboo & Wire",
        image: upload!("download-6-1765648710295.jpg"),
        position: GalleryPosition::Middle,
    },
];

pub const SOCIAL_LINKS: &[&str] = &["Instagram", "Pinterest", "Facebook"];
pub const COPYRIGHT: &str = "© 2025-2026 FURNIONS. All rights reserved. Crafted with intention.";
