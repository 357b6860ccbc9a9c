//! Static portfolio content: profile, projects and the built-in photo list.

/// Owner profile shown on the home view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub greeting: &'static str,
    pub name: &'static str,
    pub about_heading: &'static str,
    pub about: &'static str,
    pub location: &'static str,
    pub avatar_path: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub year: &'static str,
}

/// A photo bundled with the portfolio (used when no gallery store is reachable).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Photo {
    pub id: i64,
    pub src: &'static str,
    pub alt: &'static str,
}

pub const PROFILE: Profile = Profile {
    greeting: "Hi",
    name: "I'm Tatsuki",
    about_heading: "About Me",
    about: "I'm a high school app developer who loves AI and is eager to take on the challenge of developing LLMs.",
    location: "from Shiga, Japan",
    avatar_path: "/images/profile/profile.jpg",
};

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Kotoba+",
        description: "An app that lets you look up words and save them to knowledge cards.",
        year: "2025",
    },
    Project {
        title: "Lala+",
        description: "A learning app where AI generates questions from images.",
        year: "2025",
    },
    Project {
        title: "Mojisu",
        description: "A sleek app that counts characters.",
        year: "2025",
    },
    Project {
        title: "BranchDo",
        description: "An app where AI breaks down tasks into smaller steps.",
        year: "2024",
    },
    Project {
        title: "Osero",
        description: "A simple Othello game.",
        year: "2023",
    },
];

pub const PHOTOS: &[Photo] = &[
    Photo { id: 1, src: "/images/gallery/photo-1.jpg", alt: "Gallery Photo 1" },
    Photo { id: 2, src: "/images/gallery/photo-2.jpg", alt: "Gallery Photo 2" },
    Photo { id: 3, src: "/images/gallery/photo-3.jpg", alt: "Gallery Photo 3" },
    Photo { id: 4, src: "/images/gallery/photo-4.jpg", alt: "Gallery Photo 4" },
    Photo { id: 5, src: "/images/gallery/photo-5.jpg", alt: "Gallery Photo 5" },
    Photo { id: 6, src: "/images/gallery/photo-6.jpg", alt: "Gallery Photo 6" },
    Photo { id: 7, src: "/images/gallery/photo-7.jpg", alt: "Gallery Photo 7" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projects_are_newest_first() {
        let years: Vec<&str> = PROJECTS.iter().map(|p| p.year).collect();
        let mut sorted = years.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(years, sorted);
    }

    #[test]
    fn test_photo_ids_are_unique() {
        let mut ids: Vec<i64> = PHOTOS.iter().map(|p| p.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), PHOTOS.len());
    }
}
