//! Static project records for the galleries. Defined at build time and never
//! mutated; `label` is a location for the bento grid and a filter category
//! for the portfolio grid.

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub label: &'static str,
    pub image: &'static str,
    /// Bento layout hint: "", "wide", "tall" or "feature".
    pub span: &'static str,
}

pub const SELECTED_WORKS: [Project; 6] = [
    Project {
        id: 1,
        title: "Penthouse Suite",
        label: "Manhattan, NY",
        image: "https://images.unsplash.com/photo-1600607687939-ce8a6c25118c?q=80&w=2053&auto=format&fit=crop",
        span: "feature",
    },
    Project {
        id: 2,
        title: "Modern Villa",
        label: "Beverly Hills, CA",
        image: "https://images.unsplash.com/photo-1600566753190-17f0baa2a6c3?q=80&w=2070&auto=format&fit=crop",
        span: "",
    },
    Project {
        id: 3,
        title: "Coastal Retreat",
        label: "Malibu, CA",
        image: "https://images.unsplash.com/photo-1600585154340-be6161a56a0c?q=80&w=2070&auto=format&fit=crop",
        span: "",
    },
    Project {
        id: 4,
        title: "Urban Loft",
        label: "Brooklyn, NY",
        image: "https://images.unsplash.com/photo-1600573472550-8090b5e0745e?q=80&w=2070&auto=format&fit=crop",
        span: "tall",
    },
    Project {
        id: 5,
        title: "Minimalist Home",
        label: "San Francisco, CA",
        image: "https://images.unsplash.com/photo-1600047509807-ba8f99d2cdde?q=80&w=2084&auto=format&fit=crop",
        span: "",
    },
    Project {
        id: 6,
        title: "Classic Estate",
        label: "Greenwich, CT",
        image: "https://images.unsplash.com/photo-1600566753086-00f18fb6b3ea?q=80&w=2070&auto=format&fit=crop",
        span: "wide",
    },
];

pub const PORTFOLIO: [Project; 8] = [
    Project {
        id: 1,
        title: "Serene Master Bedroom",
        label: "bedroom",
        image: "https://images.unsplash.com/photo-1616594039964-ae9021a400a0?q=80&w=2070&auto=format&fit=crop",
        span: "",
    },
    Project {
        id: 2,
        title: "Grand Entrance Hall",
        label: "hall",
        image: "https://images.unsplash.com/photo-1618221195710-dd6b41faaea6?q=80&w=2070&auto=format&fit=crop",
        span: "",
    },
    Project {
        id: 3,
        title: "Marble Island Kitchen",
        label: "kitchen",
        image: "https://images.unsplash.com/photo-1556911220-bff31c812dba?q=80&w=2068&auto=format&fit=crop",
        span: "",
    },
    Project {
        id: 4,
        title: "Carved Pooja Mandir",
        label: "pooja",
        image: "https://images.unsplash.com/photo-1604578762246-41134e37f9cc?q=80&w=2070&auto=format&fit=crop",
        span: "",
    },
    Project {
        id: 5,
        title: "Guest Bedroom Retreat",
        label: "bedroom",
        image: "https://images.unsplash.com/photo-1617325247661-675ab4b64ae2?q=80&w=2071&auto=format&fit=crop",
        span: "",
    },
    Project {
        id: 6,
        title: "Sunlit Family Hall",
        label: "hall",
        image: "https://images.unsplash.com/photo-1618220179428-22790b461013?q=80&w=2127&auto=format&fit=crop",
        span: "",
    },
    Project {
        id: 7,
        title: "Walnut Galley Kitchen",
        label: "kitchen",
        image: "https://images.unsplash.com/photo-1600489000022-c2086d79f9d4?q=80&w=2070&auto=format&fit=crop",
        span: "",
    },
    Project {
        id: 8,
        title: "Brass Accent Pooja Room",
        label: "pooja",
        image: "https://images.unsplash.com/photo-1600210491892-03d54c0aaf87?q=80&w=2070&auto=format&fit=crop",
        span: "",
    },
];
