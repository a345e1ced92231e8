//! Static copy for the landing page: navigation, booth catalog, feature grid
//! and the market series.

pub const COMPANY_NAME: &str = "The Chithram Company";
pub const CONTACT_EMAIL: &str = "hello@chithram.co";
pub const TAGLINE: &str = "Capture Moments. Create Memories. Elevate Your Events.";
pub const HERO_IMAGE: &str = "https://picsum.photos/seed/hero/1920/1080";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub id: &'static str,
    pub name: &'static str,
}

pub const HOME_SECTION: &str = "home";

pub const NAV_ENTRIES: &[NavEntry] = &[
    NavEntry { id: HOME_SECTION, name: "Home" },
    NavEntry { id: "problem", name: "Problem" },
    NavEntry { id: "solution", name: "Our Booths" },
    NavEntry { id: "features", name: "Features" },
    NavEntry { id: "market", name: "Market" },
    NavEntry { id: "demo", name: "AI Demo" },
    NavEntry { id: "contact", name: "Contact" },
];

pub fn section_ids() -> Vec<&'static str> {
    NAV_ENTRIES.iter().map(|entry| entry.id).collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Camera,
    VideoCamera,
    Share,
    Sparkles,
    Photo,
    PaintBrush,
    Globe,
    Heart,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Camera => "📸",
            Icon::VideoCamera => "🎥",
            Icon::Share => "📲",
            Icon::Sparkles => "✨",
            Icon::Photo => "🖼️",
            Icon::PaintBrush => "🎨",
            Icon::Globe => "🌐",
            Icon::Heart => "❤️",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Video,
    Digital,
    Physical,
    Generative,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Video => "video",
            Category::Digital => "digital",
            Category::Physical => "physical",
            Category::Generative => "generative",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category.label(),
        }
    }

    pub fn matches(self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => product.category == category,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Product {
    pub name: &'static str,
    pub category: Category,
    pub vibe: &'static str,
    pub mechanic: &'static str,
    pub features: &'static str,
    pub delivery: &'static str,
    pub ideal_for: &'static str,
    pub image: &'static str,
    pub icon: Icon,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Feature {
    pub name: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MarketDatum {
    pub label: &'static str,
    pub value: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Problem {
    pub title: &'static str,
    pub body: &'static str,
}

/// `"all"` followed by every category in the order it first appears.
pub fn category_filters(products: &[Product]) -> Vec<CategoryFilter> {
    let mut filters = vec![CategoryFilter::All];
    for product in products {
        let filter = CategoryFilter::Only(product.category);
        if !filters.contains(&filter) {
            filters.push(filter);
        }
    }
    filters
}

pub fn filter_products(products: &[Product], filter: CategoryFilter) -> Vec<&Product> {
    products.iter().filter(|product| filter.matches(product)).collect()
}

pub const PROBLEMS: &[Problem] = &[
    Problem {
        title: "Boring Photos",
        body: "Standard event photography often feels staged and lacks the genuine fun of the moment.",
    },
    Problem {
        title: "Low Engagement",
        body: "Guests take a quick photo and move on. There's no lasting interaction or shareable experience.",
    },
    Problem {
        title: "Lost Memories",
        body: "Digital photos get lost in camera rolls, and physical prints are rare. The magic of the event fades.",
    },
];

pub const PRODUCTS: &[Product] = &[
    Product {
        name: "360 Photobooth",
        category: Category::Video,
        vibe: "High-energy, dynamic, slow-motion video content ready for Instagram and TikTok.",
        mechanic: "Guests stand on a platform while a rotating camera arm captures a 360-degree slow-motion video.",
        features: "360-degree rotation, adjustable speed (slow-mo/boomerang), custom video overlays (music, branding), remote control operation.",
        delivery: "HD Video file sent instantly via email/SMS.",
        ideal_for: "Product Launches, High-end Weddings, Gala Dinners, Parties requiring maximum guest spectacle.",
        image: "https://picsum.photos/seed/360photo/800/600",
        icon: Icon::VideoCamera,
    },
    Product {
        name: "Digital Selfie (iPad)",
        category: Category::Digital,
        vibe: "Flexible, sleek, and instantly gratifying—the ultimate social media content creator.",
        mechanic: "An elegant, portable photo booth using high-quality iPad technology for capturing content.",
        features: "Still Photos, Animated GIFs, Boomerang GIFs, color-changing LED ambient lighting, skin-smoothening filters, live online galleries.",
        delivery: "Digital files (JPEG, GIF) shared via QR code, SMS, or email.",
        ideal_for: "Trade Shows, Retail Activations, Smaller Venues, or as a secondary content station.",
        image: "https://picsum.photos/seed/digitalselfie/800/600",
        icon: Icon::Share,
    },
    Product {
        name: "AI Photobooth",
        category: Category::Generative,
        vibe: "Hyper-personalized, artistic, and entirely unique content creation driven by text and visual prompts.",
        mechanic: "Uses advanced generative AI models to take a guest photo and transform their likeness into new artistic styles and contexts.",
        features: "AI-based image generation, style transfer (painting, sketch), avatar creation, customized themes, real-time digital enhancement.",
        delivery: "High-resolution, artistic image file, shared via email/QR code.",
        ideal_for: "Forward-thinking Tech Events, Art Galas, Luxury Brand Experiences, Events focused on innovation.",
        image: "https://picsum.photos/seed/aibooth/800/600",
        icon: Icon::Sparkles,
    },
    Product {
        name: "Magic Mirror",
        category: Category::Digital,
        vibe: "Elegant, theatrical, and highly interactive. The photo booth is disguised as a stylish, full-length mirror.",
        mechanic: "A full-length mirror provides visual guidance via animations and voice prompts while a hidden DSLR captures the photo.",
        features: "Interactive touchscreen, customizable animations, voice guidance, digital photo signing, emoji stamping, social sharing.",
        delivery: "Instant physical prints (strip or 4x6) and digital sharing.",
        ideal_for: "Weddings, Fashion Events, Formal Corporate Galas.",
        image: "https://picsum.photos/seed/magicmirror/800/600",
        icon: Icon::Share,
    },
    Product {
        name: "Classic Photobooth",
        category: Category::Physical,
        vibe: "Intimate, nostalgic, and providing a classic physical keepsake.",
        mechanic: "Traditional, enclosed booth providing privacy for intimate and playful poses.",
        features: "Classic black and white or color options, instant physical photo strips, iconic design.",
        delivery: "Physical photo strips (often two copies per session).",
        ideal_for: "Retro Themes, Weddings, Any event where a physical, lasting souvenir is prioritized.",
        image: "https://picsum.photos/seed/classicbooth/800/600",
        icon: Icon::Photo,
    },
    Product {
        name: "AR Booth",
        category: Category::Digital,
        vibe: "Blending the real and virtual worlds to create imaginative, fantastical photos and videos.",
        mechanic: "Integrates digital 3D props, masks, characters, and environments that interact with the user's movements in real-time.",
        features: "Real-time face tracking, virtual prop placement, themed digital backgrounds, motion-activated effects.",
        delivery: "Branded photos/videos with digital overlays, shared instantly.",
        ideal_for: "Tech Conferences, Comic-Cons, Themed Parties, Gaming Activations.",
        image: "https://picsum.photos/seed/arbooth/800/600",
        icon: Icon::Share,
    },
    Product {
        name: "Mosaic Wall",
        category: Category::Physical,
        vibe: "Turning individual moments into one grand, collaborative piece of art.",
        mechanic: "Guest photos are instantly printed and placed onto a board to form a much larger, pre-designed mosaic image.",
        features: "Real-time photo curation, creation of a massive final image, available in physical (stickers) or digital formats.",
        delivery: "Physical prints placed on a wall; final digital mosaic image.",
        ideal_for: "Long-duration Events, Team Building, Large-scale Corporate Anniversaries, Community Events.",
        image: "https://picsum.photos/seed/mosaicwall/800/600",
        icon: Icon::Photo,
    },
    Product {
        name: "Boomerang Booth",
        category: Category::Video,
        vibe: "Simple, fast, and purpose-built for creating instantly viral social media loops.",
        mechanic: "Optimized to capture short bursts of photos and instantly stitch them into a seamless, back-and-forth looping video.",
        features: "High frame rate capture, rapid processing, strong focus on instant social media sharing (SMS, Airdrop).",
        delivery: "Looping video file (often a GIF or MP4).",
        ideal_for: "Casual Events, Music Festivals, University Events, Quick Brand Activations.",
        image: "https://picsum.photos/seed/boomerang/800/600",
        icon: Icon::VideoCamera,
    },
    Product {
        name: "180 Photobooth",
        category: Category::Video,
        vibe: "Creating a cinematic, 'Matrix-style' bullet-time effect or a panoramic video clip.",
        mechanic: "Uses multiple cameras in a semi-circle to capture simultaneous images, stitched into a single, moving sequence.",
        features: "Specialty video capture, frozen motion effect, unique perspective.",
        delivery: "Short, high-impact video clip (often MP4 or GIF).",
        ideal_for: "High-concept Brand Activations, Movie Premières, Events focusing on technical innovation.",
        image: "https://picsum.photos/seed/180booth/800/600",
        icon: Icon::VideoCamera,
    },
];

pub const FEATURES: &[Feature] = &[
    Feature {
        name: "Instant Digital Sharing",
        description: "Guests receive photos, GIFs, and videos instantly via email or QR code.",
        icon: Icon::Share,
    },
    Feature {
        name: "AI Backgrounds",
        description: "Generate unique backdrops on the fly with our integrated AI technology.",
        icon: Icon::Sparkles,
    },
    Feature {
        name: "Custom Branding",
        description: "Fully customizable interfaces, overlays, and prints to match your event theme.",
        icon: Icon::PaintBrush,
    },
    Feature {
        name: "High-Quality Prints",
        description: "Lab-quality, smudge-proof prints available in seconds for a tangible memory.",
        icon: Icon::Photo,
    },
    Feature {
        name: "Live Online Gallery",
        description: "A real-time gallery of all captures, accessible to all guests during and after the event.",
        icon: Icon::Globe,
    },
    Feature {
        name: "Premium Props & Support",
        description: "A curated collection of props and a dedicated on-site attendant to ensure everything runs smoothly.",
        icon: Icon::Heart,
    },
];

pub const MARKET_DATA: &[MarketDatum] = &[
    MarketDatum { label: "Weddings", value: 450 },
    MarketDatum { label: "Corporate Events", value: 300 },
    MarketDatum { label: "Private Parties", value: 200 },
    MarketDatum { label: "Brand Activations", value: 250 },
    MarketDatum { label: "Festivals", value: 150 },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filters_start_with_all_then_first_seen_order() {
        assert_eq!(
            category_filters(PRODUCTS),
            vec![
                CategoryFilter::All,
                CategoryFilter::Only(Category::Video),
                CategoryFilter::Only(Category::Digital),
                CategoryFilter::Only(Category::Generative),
                CategoryFilter::Only(Category::Physical),
            ]
        );
    }

    #[test]
    fn test_filter_all_keeps_catalog_order() {
        let all = filter_products(PRODUCTS, CategoryFilter::All);
        assert_eq!(all.len(), PRODUCTS.len());
        assert!(all.iter().zip(PRODUCTS).all(|(a, b)| *a == b));
    }

    #[test]
    fn test_filter_by_category() {
        for category in [Category::Video, Category::Digital, Category::Physical, Category::Generative] {
            let expected: Vec<&Product> = PRODUCTS.iter().filter(|p| p.category == category).collect();
            assert_eq!(filter_products(PRODUCTS, CategoryFilter::Only(category)), expected);
        }

        let names: Vec<&str> = filter_products(PRODUCTS, CategoryFilter::Only(Category::Video))
            .iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, ["360 Photobooth", "Boomerang Booth", "180 Photobooth"]);
    }

    #[test]
    fn test_filter_on_empty_catalog() {
        assert_eq!(category_filters(&[]), vec![CategoryFilter::All]);
        assert!(filter_products(&[], CategoryFilter::Only(Category::Video)).is_empty());
    }

    #[test]
    fn test_nav_starts_at_home_and_ids_are_unique() {
        let ids = section_ids();
        assert_eq!(ids.first(), Some(&HOME_SECTION));
        let mut deduped = ids.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len());
    }
}
