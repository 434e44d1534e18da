//! Static copy for the page.

use crate::state::grid::TechItem;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub id: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Episode {
    pub number: u32,
    pub title: &'static str,
    pub summary: &'static str,
    pub runtime: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextCard {
    pub title: &'static str,
    pub origin: &'static str,
    pub excerpt: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub blurb: &'static str,
}

pub const NAV_LINKS: [NavLink; 5] = [
    NavLink { id: "home", label: "Home" },
    NavLink { id: "episodes", label: "Episodes" },
    NavLink { id: "technology", label: "Technology" },
    NavLink { id: "texts", label: "Texts" },
    NavLink { id: "newsletter", label: "Subscribe" },
];

pub const EPISODES: [Episode; 4] = [
    Episode {
        number: 1,
        title: "The Gears of Antikythera",
        summary: "A bronze calculator pulled from a shipwreck, and what it says about Greek astronomy.",
        runtime: "42 min",
    },
    Episode {
        number: 2,
        title: "Vimanas and the Dream of Flight",
        summary: "Sanskrit flying palaces read as early design documents for aviation.",
        runtime: "38 min",
    },
    Episode {
        number: 3,
        title: "Concrete That Outlived Rome",
        summary: "Why harbour walls poured two thousand years ago are still getting stronger.",
        runtime: "45 min",
    },
    Episode {
        number: 4,
        title: "Libraries of Clay",
        summary: "Cuneiform archives as the first distributed storage system.",
        runtime: "40 min",
    },
];

pub fn tech_items() -> Vec<TechItem> {
    vec![
        TechItem {
            ancient: "Antikythera Mechanism",
            modern: "Analog Computer",
            description: "Interlocking bronze gears predicted eclipses and planetary positions decades in advance.",
            category: Some("computing"),
            connector: true,
        },
        TechItem {
            ancient: "Vimana",
            modern: "Aircraft",
            description: "Texts describe flying vehicles with detailed notes on materials and propulsion.",
            category: Some("flight"),
            connector: true,
        },
        TechItem {
            ancient: "Roman Concrete",
            modern: "Self-healing Concrete",
            description: "Volcanic ash and seawater grow crystals that seal cracks over centuries.",
            category: Some("materials"),
            connector: true,
        },
        TechItem {
            ancient: "Clay Tablet Archive",
            modern: "Distributed Storage",
            description: "Duplicate records kept in separate cities survived fires that destroyed the originals.",
            category: None,
            connector: false,
        },
    ]
}

pub const TEXT_CARDS: [TextCard; 3] = [
    TextCard {
        title: "Vaimanika Shastra",
        origin: "Sanskrit",
        excerpt: "On the construction of aerial cars and the metals fit for them.",
    },
    TextCard {
        title: "De Architectura",
        origin: "Latin",
        excerpt: "Vitruvius on lime, pozzolana and the setting of harbour works.",
    },
    TextCard {
        title: "Enuma Anu Enlil",
        origin: "Akkadian",
        excerpt: "Omens read from the sky, catalogued tablet by tablet.",
    },
];

pub const THEMES: [Theme; 3] = [
    Theme {
        name: "Lost Knowledge",
        blurb: "Techniques that vanished and had to be rediscovered.",
    },
    Theme {
        name: "Myth as Specification",
        blurb: "Stories that read like requirements documents.",
    },
    Theme {
        name: "Durable Engineering",
        blurb: "Things built to last millennia, and why they did.",
    },
];
