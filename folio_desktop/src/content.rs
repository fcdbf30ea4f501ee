//! Static page content: the Rust analogue of the page markup.
//!
//! Everything the view renders that is not state lives here, so the
//! logic modules stay free of copy.

use crate::constants::{HERO_HEIGHT, SECTION_HEIGHT};

/// Fixed greeting that never animates.
pub const GREETING_PREFIX: &str = "Hello! I'm ";
/// The name the typewriter types and erases.
pub const ANIMATED_NAME: &str = "Avery Lindqvist";
pub const TAGLINE: &str = "Software engineer crafting playful, fast interfaces.";

pub const ABOUT_BODY: &str = "I build desktop and web applications with a soft \
spot for animation, typography, and tools that feel alive. When I'm not \
shipping, I'm probably tweaking a particle system nobody asked for.";

/// Page sections reachable from the navigation overlay, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    About,
    Projects,
    Education,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::About,
        Section::Projects,
        Section::Education,
        Section::Contact,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Education => "Education",
            Section::Contact => "Contact",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Section::About => 0,
            Section::Projects => 1,
            Section::Education => 2,
            Section::Contact => 3,
        }
    }

    /// Scroll offset of the section inside the page scrollable. Sections
    /// have fixed heights, so targets are plain arithmetic.
    pub fn scroll_offset(&self) -> f32 {
        HERO_HEIGHT + self.index() as f32 * SECTION_HEIGHT
    }
}

pub struct Project {
    pub title: &'static str,
    pub summary: &'static str,
    pub stack: &'static str,
}

pub const PROJECTS: [Project; 3] = [
    Project {
        title: "Drift",
        summary: "A generative wallpaper engine that renders thousands of \
particles into layered, slowly evolving scenes.",
        stack: "Rust · wgpu",
    },
    Project {
        title: "Ledgerline",
        summary: "Personal finance dashboard with keyboard-first entry and \
instant full-text search across a decade of statements.",
        stack: "Rust · SQLite",
    },
    Project {
        title: "Marginalia",
        summary: "A margin-notes reader that syncs highlights between the \
desktop and a pocket e-ink device.",
        stack: "Rust · gRPC",
    },
];

pub struct EducationItem {
    pub years: &'static str,
    pub school: &'static str,
    pub degree: &'static str,
}

pub const EDUCATION: [EducationItem; 3] = [
    EducationItem {
        years: "2019 – 2021",
        school: "Uppsala University",
        degree: "M.Sc. Computer Science",
    },
    EducationItem {
        years: "2016 – 2019",
        school: "Uppsala University",
        degree: "B.Sc. Computer Science",
    },
    EducationItem {
        years: "2015",
        school: "Katedralskolan",
        degree: "Natural Sciences Programme",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_offsets_are_ordered() {
        let offsets: Vec<f32> = Section::ALL.iter().map(|s| s.scroll_offset()).collect();
        for pair in offsets.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert_eq!(Section::About.scroll_offset(), HERO_HEIGHT);
    }

    #[test]
    fn test_indices_match_page_order() {
        for (i, section) in Section::ALL.iter().enumerate() {
            assert_eq!(section.index(), i);
        }
    }
}
