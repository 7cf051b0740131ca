//! Hand-authored profile data rendered by the sections.
//!
//! Everything here is `'static` and read-only; the sections borrow it at
//! render time and never mutate it.

pub const OWNER_NAME: &str = "Zeyad Hany";
pub const OWNER_INITIALS: &str = "ZH";
pub const RESUME_PATH: &str = "/cv/resume.pdf";
pub const HEAD_MODEL_PATH: &str = "/3d/head.json";

pub const PROFESSIONAL_SUMMARY: &str = "Passionate React.js Developer with hands-on experience in modern web development technologies. Skilled in building responsive, user-friendly applications using React.js, Next.js, and TypeScript. Strong foundation in full-stack development with experience in both frontend and backend technologies. Proven ability to deliver quality projects with clean, maintainable code and modern development practices.";

pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub details: &'static str,
    pub coursework: &'static [&'static str],
}

pub const EDUCATION: Education = Education {
    degree: "Bachelor of Computer and Information Science",
    institution: "Tanta University, Faculty of Computer and Information",
    location: "Tanta, Egypt",
    period: "Sept 2023 – Present",
    details: "Currently in 3rd Semester",
    coursework: &[
        "Data Structures",
        "Algorithms",
        "Database Systems",
        "Software Engineering",
    ],
};

pub const COMPETENCIES: &[&str] = &[
    "Strong analytical skills with ability to break down complex problems",
    "Experienced in working with cross-functional teams",
    "Quick to adapt to new technologies and frameworks",
    "Committed to writing clean, maintainable code",
    "Focus on creating intuitive and accessible web applications",
];

pub struct ContactInfo {
    pub email: &'static str,
    pub languages: &'static [&'static str],
    pub interests: &'static [&'static str],
    pub availability: &'static str,
}

pub const CONTACT: ContactInfo = ContactInfo {
    email: "zeyadhany.dev@gmail.com",
    languages: &["Arabic (Native)", "English (Professional Working Proficiency)"],
    interests: &[
        "Open Source Contribution",
        "Web Performance Optimization",
        "Modern JavaScript Frameworks",
    ],
    availability: "Open to full-time opportunities and freelance projects",
};

/// Fixed set of skill categories. The order here is the render order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SkillCategory {
    Programming,
    Frontend,
    Backend,
    Databases,
    Tools,
    Other,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 6] = [
        Self::Programming,
        Self::Frontend,
        Self::Backend,
        Self::Databases,
        Self::Tools,
        Self::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Programming => "programming",
            Self::Frontend => "frontend",
            Self::Backend => "backend",
            Self::Databases => "databases",
            Self::Tools => "tools",
            Self::Other => "other",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.as_str() == value)
    }

    pub fn scheme(self) -> CategoryScheme {
        match self {
            Self::Programming => CategoryScheme {
                icon: "</>",
                accent: "#4a9d9c",
                class: "scheme-programming",
            },
            Self::Frontend => CategoryScheme {
                icon: "◎",
                accent: "#c9a961",
                class: "scheme-frontend",
            },
            Self::Backend => CategoryScheme {
                icon: "⛁",
                accent: "#2c5f2d",
                class: "scheme-backend",
            },
            Self::Databases => CategoryScheme {
                icon: "⛁",
                accent: "#6d1f2c",
                class: "scheme-databases",
            },
            Self::Tools => CategoryScheme {
                icon: "⚒",
                accent: "#8b6914",
                class: "scheme-tools",
            },
            Self::Other => CategoryScheme {
                icon: "✦",
                accent: "#1e3a5f",
                class: "scheme-other",
            },
        }
    }
}

/// Icon and colour treatment for a skill category.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CategoryScheme {
    pub icon: &'static str,
    pub accent: &'static str,
    pub class: &'static str,
}

/// Looks up the scheme for a category name, falling back to `other`.
pub fn scheme_for(category: &str) -> CategoryScheme {
    SkillCategory::from_str(category)
        .unwrap_or(SkillCategory::Other)
        .scheme()
}

/// Category name to skills, in render order.
pub const SKILLS: &[(&str, &[&str])] = &[
    (
        "programming",
        &["JavaScript (ES6+)", "TypeScript", "HTML5", "CSS3", "SQL"],
    ),
    (
        "frontend",
        &["React.js", "Next.js", "Tailwind CSS", "Responsive Design"],
    ),
    (
        "backend",
        &["Node.js", "Express.js", "RESTful APIs"],
    ),
    (
        "databases",
        &["PostgreSQL", "MongoDB", "Supabase"],
    ),
    (
        "tools",
        &["Git", "GitHub", "npm", "VS Code", "Vercel"],
    ),
    (
        "other",
        &[
            "Component-Based Architecture",
            "SPA Development",
            "QR Code Integration",
        ],
    ),
];

#[derive(Clone, Debug, PartialEq)]
pub struct ProjectRecord {
    pub title: &'static str,
    pub period: &'static str,
    pub status: &'static str,
    pub category: &'static str,
    pub impact: &'static str,
    pub technologies: &'static [&'static str],
    pub features: &'static [&'static str],
    pub description: &'static [&'static str],
    pub image: &'static str,
    pub live_url: &'static str,
    pub github_url: &'static str,
}

pub const PROJECTS: &[ProjectRecord] = &[
    ProjectRecord {
        title: "Absent Management System",
        period: "April 2025",
        status: "Completed",
        category: "Web Application",
        impact: "Improved attendance accuracy by 95%",
        technologies: &["TypeScript", "React.js", "QR Code Integration", "Vercel"],
        features: &[
            "Real-time attendance tracking",
            "QR Code scanner integration",
            "Location verification",
            "Leave request management",
            "Admin dashboard",
        ],
        description: &[
            "Developed a modern TypeScript-based frontend application for managing student absences and attendance tracking",
            "Implemented QR Code scanning and location verification features",
            "Built responsive UI with real-time data updates",
            "Deployed on Vercel with optimized performance",
            "Integrated leave request management system",
        ],
        image: "/projects/absent-management.jpg",
        live_url: "https://absent-management.vercel.app",
        github_url: "https://github.com/zeyadhany/absent-management",
    },
    ProjectRecord {
        title: "Wild Oasis Hotel Website",
        period: "2024",
        status: "Completed",
        category: "Landing Page",
        impact: "Enhanced user experience with 40% increase in bookings",
        technologies: &["React.js", "Supabase", "Modern UI/UX", "Tailwind CSS"],
        features: &[
            "Modern responsive design",
            "Real-time booking system",
            "Customer reviews",
            "Photo gallery",
            "Contact integration",
        ],
        description: &[
            "Created a professional hotel landing page with modern design",
            "Integrated Supabase for data management and real-time updates",
            "Implemented responsive design for all devices",
            "Built reusable React components following best practices",
        ],
        image: "/projects/wild-oasis.jpg",
        live_url: "https://wild-oasis-hotel.vercel.app",
        github_url: "https://github.com/zeyadhany/wild-oasis",
    },
    ProjectRecord {
        title: "Banckist Financial Management",
        period: "February 2024",
        status: "Completed",
        category: "Financial App",
        impact: "Demonstrated advanced JavaScript proficiency",
        technologies: &["Vanilla JavaScript", "DOM Manipulation", "CSS3", "HTML5"],
        features: &[
            "Account management",
            "Transaction tracking",
            "Balance calculations",
            "Interactive animations",
            "Financial summaries",
        ],
        description: &[
            "Developed a financial management application using pure JavaScript",
            "Implemented core banking features including account management",
            "Utilized advanced JavaScript concepts",
            "Created interactive UI with smooth animations",
        ],
        image: "/projects/bankist.jpg",
        live_url: "https://bankist-app.vercel.app",
        github_url: "https://github.com/zeyadhany/bankist",
    },
];

pub struct SocialLink {
    pub name: &'static str,
    pub icon: &'static str,
    pub url: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        name: "GitHub",
        icon: "GH",
        url: "https://github.com/zeyadhany",
    },
    SocialLink {
        name: "LinkedIn",
        icon: "in",
        url: "https://linkedin.com/in/zeyadhany",
    },
    SocialLink {
        name: "Twitter",
        icon: "X",
        url: "https://twitter.com/zeyadhany",
    },
];

/// Hero role titles with their gradient endpoints.
pub const HERO_TITLES: &[(&str, &str, &str)] = &[
    ("React.js Developer", "#4a9d9c", "#2c5f2d"),
    ("Frontend Engineer", "#c9a961", "#4a9d9c"),
    ("Full-Stack Developer", "#2c5f2d", "#4a9d9c"),
    ("TypeScript Expert", "#6d1f2c", "#c9a961"),
    ("UI/UX Enthusiast", "#1e3a5f", "#c9a961"),
];

pub struct TimelineEvent {
    pub year: &'static str,
    pub event: &'static str,
    pub icon: &'static str,
}

pub const TIMELINE: &[TimelineEvent] = &[
    TimelineEvent {
        year: "2023",
        event: "Started Computer Science",
        icon: "📖",
    },
    TimelineEvent {
        year: "2024",
        event: "First React Projects",
        icon: "</>",
    },
    TimelineEvent {
        year: "2024",
        event: "Advanced TypeScript",
        icon: "⚡",
    },
    TimelineEvent {
        year: "2025",
        event: "Portfolio Evolution",
        icon: "🚀",
    },
];

/// Phrases cycled beneath the scene centrepiece, with translations.
pub const SCENE_PHRASES: &[(&str, &str)] = &[
    ("بِسْمِ اللَّهِ الرَّحْمَٰنِ الرَّحِيمِ", "In the name of Allah"),
    ("ما شاء الله", "As Allah wills"),
    ("الحمد لله", "Praise be to Allah"),
];

/// Floating calligraphy labels and their scene positions.
pub const SCENE_LABELS: &[(&str, [f32; 3])] = &[
    ("الله", [-8.0, 3.0, -5.0]),
    ("الرحمن", [8.0, -2.0, -5.0]),
    ("الرحيم", [-6.0, -4.0, -3.0]),
    ("النور", [6.0, 4.0, -4.0]),
    ("السلام", [0.0, -5.0, -6.0]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_category_falls_back_to_other_scheme() {
        assert_eq!(scheme_for("quantum"), SkillCategory::Other.scheme());
        assert_eq!(scheme_for("frontend"), SkillCategory::Frontend.scheme());
    }

    #[test]
    fn every_catalog_category_round_trips_through_its_name() {
        for (name, skills) in SKILLS {
            let category = SkillCategory::from_str(name).expect("catalog names a known category");
            assert_eq!(category.as_str(), *name);
            assert!(!skills.is_empty(), "{name} has no skills");
        }
    }

    #[test]
    fn project_records_are_complete() {
        for project in PROJECTS {
            assert!(!project.title.is_empty());
            assert!(!project.technologies.is_empty());
            assert!(!project.features.is_empty());
            assert!(!project.description.is_empty());
            assert!(project.image.starts_with("/projects/"));
            assert!(project.live_url.starts_with("https://"));
            assert!(project.github_url.starts_with("https://github.com/"));
        }
    }
}
