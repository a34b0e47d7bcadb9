//! Static portfolio content and the derived views over it.
//!
//! Everything here is compiled in. The only runtime choice is a filter
//! selection, and every filtered list is a pure function of that selection
//! and the tables below; nothing is ever mutated.

/// Owner details used across the page.
pub const OWNER_NAME: &str = "Vighnesh Parab";
pub const BRAND: &str = "Vighnesh";
pub const BRAND_SUFFIX: &str = ".dev";
pub const AVATAR_URL: &str = "https://avatars.githubusercontent.com/u/134200694?v=4";
pub const RESUME_URL: &str = "/resume.pdf";
pub const ALL_PROJECTS_URL: &str = "https://github.com/vighnesh129?tab=repositories";

/// Phrases cycled by the hero typewriter.
pub const HERO_PHRASES: &[&str] = &[
    "Web Developer 💻",
    "MERN Stack Developer 🚀",
    "Creative Problem Solver 🧠",
    "Tech Explorer 🔍",
    "UI/UX Enthusiast 🎨",
    "Full-Stack Innovator 🧑‍💻",
    "Code Craftsman 🛠️",
    "Lifelong Learner 📚",
    "API Integrator ⚙️",
    "Open Source Contributor 🌐",
];

/// A navigable page section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavSection {
    /// Stable element id; nav links address `#{id}`
    pub id: &'static str,
    pub label: &'static str,
    /// Gets the sparkle badge in the nav
    pub special: bool,
}

impl NavSection {
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

/// Sections in render order. The scroll spy tracks them in this order.
pub const NAV_SECTIONS: &[NavSection] = &[
    NavSection { id: "home", label: "Home", special: false },
    NavSection { id: "about", label: "About", special: false },
    NavSection { id: "projects", label: "Projects", special: false },
    NavSection { id: "skills", label: "Skills", special: true },
    NavSection { id: "education", label: "Education", special: false },
    NavSection { id: "contact", label: "Contact", special: false },
];

/// Ids of [`NAV_SECTIONS`], in order.
pub fn section_ids() -> impl Iterator<Item = &'static str> {
    NAV_SECTIONS.iter().map(|s| s.id)
}

// === About ===

/// A "what I do" focus area badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusArea {
    pub name: &'static str,
    /// Accent colour for the badge
    pub color: &'static str,
}

pub const FOCUS_AREAS: &[FocusArea] = &[
    FocusArea { name: "Frontend", color: "#6366f1" },
    FocusArea { name: "Backend", color: "#14b8a6" },
    FocusArea { name: "Fullstack", color: "#ec4899" },
    FocusArea { name: "Database", color: "#eab308" },
    FocusArea { name: "Version Control", color: "#374151" },
    FocusArea { name: "Cloud", color: "#f97316" },
    FocusArea { name: "DevOps", color: "#3b82f6" },
];

/// Technologies shown under "Tech I Love".
pub const TECH_STACK: &[&str] = &[
    "TypeScript",
    "Next.js",
    "Tailwind CSS",
    "React",
    "Node.js",
    "MongoDB",
    "Express.js",
    "Git",
    "Docker",
];

// === Projects ===

/// Broad kind of a showcased project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectKind {
    Fullstack,
    Backend,
    Mobile,
}

impl ProjectKind {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectKind::Fullstack => "Fullstack",
            ProjectKind::Backend => "Backend",
            ProjectKind::Mobile => "Mobile",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub repo_url: &'static str,
    /// Deployed demo, when there is one
    pub live_url: Option<&'static str>,
    pub tags: &'static [&'static str],
    pub kind: ProjectKind,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Farming Recommendation Platform",
        description: "AI-powered platform offering crop recommendations based on location, weather, and soil data. Helping farmers optimize yields with data-driven insights.",
        image: "https://images.unsplash.com/photo-1500382017468-9049fed747ef?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=80",
        repo_url: "https://github.com/vighnesh129/farming-recommendation",
        live_url: None,
        tags: &["AI", "React", "Node.js"],
        kind: ProjectKind::Fullstack,
    },
    Project {
        title: "Hostel Harmony System",
        description: "Comprehensive hostel management system that streamlines room allocation, fee management, and student communication with real-time updates.",
        image: "https://images.unsplash.com/photo-1560448204-e02f11c3d0e2?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=80",
        repo_url: "https://github.com/vighnesh129/hostel-harmony-system",
        live_url: None,
        tags: &["MERN", "Redux", "JWT"],
        kind: ProjectKind::Fullstack,
    },
    Project {
        title: "Smart Office System",
        description: "Modern office management platform integrating meeting scheduling, complaint handling, visitor logs, and resource management with IoT capabilities.",
        image: "https://images.unsplash.com/photo-1522071820081-009f0129c71c?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=80",
        repo_url: "https://github.com/vighnesh129/smart-office-system",
        live_url: None,
        tags: &["IoT", "Next.js", "Firebase"],
        kind: ProjectKind::Fullstack,
    },
    Project {
        title: "TravelPlanner",
        description: "Interactive travel planning app that helps users create detailed itineraries, track bookings, and discover local attractions with personalized recommendations.",
        image: "https://images.unsplash.com/photo-1506929562872-bb421503ef21?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=80",
        repo_url: "https://github.com/vighnesh129/travel-planner",
        live_url: None,
        tags: &["React Native", "Maps API", "MongoDB"],
        kind: ProjectKind::Mobile,
    },
];

// === Skills ===

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillCategory {
    Frontend,
    Backend,
    Database,
    Tools,
}

impl SkillCategory {
    pub fn all() -> &'static [SkillCategory] {
        &[
            SkillCategory::Frontend,
            SkillCategory::Backend,
            SkillCategory::Database,
            SkillCategory::Tools,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            SkillCategory::Frontend => "Frontend",
            SkillCategory::Backend => "Backend",
            SkillCategory::Database => "Database",
            SkillCategory::Tools => "Tools",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Proficiency, 0–100
    pub level: u8,
    pub category: SkillCategory,
    pub color: &'static str,
}

const fn skill(name: &'static str, level: u8, category: SkillCategory, color: &'static str) -> Skill {
    Skill { name, level, category, color }
}

pub const SKILLS: &[Skill] = &[
    skill("HTML", 90, SkillCategory::Frontend, "#14b8a6"),
    skill("CSS", 85, SkillCategory::Frontend, "#3b82f6"),
    skill("JavaScript", 80, SkillCategory::Frontend, "#eab308"),
    skill("React", 75, SkillCategory::Frontend, "#06b6d4"),
    skill("Vue.js", 70, SkillCategory::Frontend, "#22c55e"),
    skill("Next.js", 70, SkillCategory::Frontend, "#6366f1"),
    skill("Node.js", 85, SkillCategory::Backend, "#22c55e"),
    skill("Express.js", 80, SkillCategory::Backend, "#2563eb"),
    skill("PHP", 70, SkillCategory::Backend, "#ec4899"),
    skill("Java", 60, SkillCategory::Backend, "#9333ea"),
    skill("MongoDB", 80, SkillCategory::Database, "#84cc16"),
    skill("MySQL", 70, SkillCategory::Database, "#60a5fa"),
    skill("PostgreSQL", 65, SkillCategory::Database, "#ef4444"),
    skill("Redis", 60, SkillCategory::Database, "#14b8a6"),
    skill("Git", 90, SkillCategory::Tools, "#6b7280"),
    skill("Docker", 85, SkillCategory::Tools, "#1d4ed8"),
    skill("Figma", 70, SkillCategory::Tools, "#f472b6"),
    skill("Jira", 60, SkillCategory::Tools, "#2dd4bf"),
];

/// Skill category selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum SkillFilter {
    #[default]
    All,
    Only(SkillCategory),
}

impl SkillFilter {
    pub fn all() -> Vec<SkillFilter> {
        std::iter::once(SkillFilter::All)
            .chain(SkillCategory::all().iter().map(|c| SkillFilter::Only(*c)))
            .collect()
    }

    pub fn label(&self) -> &'static str {
        match self {
            SkillFilter::All => "All Skills",
            SkillFilter::Only(c) => c.label(),
        }
    }

    /// Stable key, used for pill values and marquee scopes.
    pub fn key(&self) -> &'static str {
        match self {
            SkillFilter::All => "all",
            SkillFilter::Only(SkillCategory::Frontend) => "frontend",
            SkillFilter::Only(SkillCategory::Backend) => "backend",
            SkillFilter::Only(SkillCategory::Database) => "database",
            SkillFilter::Only(SkillCategory::Tools) => "tools",
        }
    }

    pub fn from_key(key: &str) -> Option<SkillFilter> {
        SkillFilter::all().into_iter().find(|f| f.key() == key)
    }

    pub fn matches(&self, skill: &Skill) -> bool {
        match self {
            SkillFilter::All => true,
            SkillFilter::Only(c) => skill.category == *c,
        }
    }
}

/// Skills of one category, in table order.
pub fn skills_in(category: SkillCategory) -> impl Iterator<Item = &'static Skill> {
    SKILLS.iter().filter(move |s| s.category == category)
}

const ROW_LIMIT: usize = 8;

/// The three marquee rows for a filter selection.
///
/// "All" shows frontend+backend, database+tools and a mixed row, each
/// capped at eight cards. A single category is split into three
/// near-equal chunks.
pub fn skill_rows(filter: SkillFilter) -> [Vec<&'static Skill>; 3] {
    match filter {
        SkillFilter::All => {
            let pick = |cats: &[SkillCategory]| -> Vec<&'static Skill> {
                SKILLS
                    .iter()
                    .filter(|s| cats.contains(&s.category))
                    .take(ROW_LIMIT)
                    .collect()
            };
            [
                pick(&[SkillCategory::Frontend, SkillCategory::Backend]),
                pick(&[SkillCategory::Database, SkillCategory::Tools]),
                SKILLS.iter().take(ROW_LIMIT).collect(),
            ]
        }
        SkillFilter::Only(category) => {
            let skills: Vec<&'static Skill> = skills_in(category).collect();
            let chunk = skills.len().div_ceil(3);
            let split = |from: usize, to: usize| -> Vec<&'static Skill> {
                let from = from.min(skills.len());
                let to = to.min(skills.len());
                skills[from..to].to_vec()
            };
            [split(0, chunk), split(chunk, 2 * chunk), split(2 * chunk, skills.len())]
        }
    }
}

/// Human label for a proficiency level.
pub fn level_label(level: u8) -> &'static str {
    if level >= 80 {
        "Expert"
    } else if level >= 70 {
        "Advanced"
    } else {
        "Intermediate"
    }
}

// === Education ===

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub years: &'static str,
    pub description: &'static str,
    pub achievements: &'static [&'static str],
}

pub const EDUCATION: &[Education] = &[
    Education {
        degree: "Bachelor of Science in Computer Science",
        institution: "University of Technology",
        years: "2018 - 2022",
        description: "Specialized in Software Engineering with minor in Data Science",
        achievements: &["Dean's List all semesters", "Led team project that won Hackathon 2021"],
    },
    Education {
        degree: "High School Diploma",
        institution: "Tech Magnet High School",
        years: "2014 - 2018",
        description: "Focus on STEM curriculum with advanced programming courses",
        achievements: &["Valedictorian", "President of Coding Club"],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Certification {
    pub title: &'static str,
    pub issuer: &'static str,
    pub year: &'static str,
    pub badge: &'static str,
    pub credential_url: &'static str,
    pub skills: &'static [&'static str],
}

pub const CERTIFICATIONS: &[Certification] = &[
    Certification {
        title: "AWS Certified Solutions Architect",
        issuer: "Amazon Web Services",
        year: "2023",
        badge: "/aws-badge.png",
        credential_url: "https://www.credly.com/badges/12345",
        skills: &["Cloud Architecture", "AWS Services", "Security"],
    },
    Certification {
        title: "Google Professional Data Engineer",
        issuer: "Google Cloud",
        year: "2022",
        badge: "/google-badge.png",
        credential_url: "https://www.credential.net/12345",
        skills: &["Big Data", "ML Pipeline", "Data Analytics"],
    },
    Certification {
        title: "Meta Front-End Developer",
        issuer: "Meta (Facebook)",
        year: "2023",
        badge: "/meta-badge.png",
        credential_url: "https://www.coursera.org/professional-certificates/meta-front-end-developer",
        skills: &["React", "JavaScript", "Responsive Design"],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CourseCategory {
    Frontend,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Course {
    pub title: &'static str,
    pub platform: &'static str,
    pub year: &'static str,
    pub hours: u16,
    pub category: CourseCategory,
    pub completed: bool,
    pub certificate: bool,
    /// Percent done for courses still in progress
    pub progress: Option<u8>,
}

pub const COURSES: &[Course] = &[
    Course {
        title: "Advanced React and Redux",
        platform: "Udemy",
        year: "2023",
        hours: 24,
        category: CourseCategory::Frontend,
        completed: true,
        certificate: true,
        progress: None,
    },
    Course {
        title: "Machine Learning Specialization",
        platform: "Coursera",
        year: "2022",
        hours: 60,
        category: CourseCategory::Data,
        completed: true,
        certificate: true,
        progress: None,
    },
    Course {
        title: "Full-Stack Web Development",
        platform: "edX",
        year: "2023",
        hours: 48,
        category: CourseCategory::Frontend,
        completed: true,
        certificate: true,
        progress: None,
    },
    Course {
        title: "Data Science and Analytics",
        platform: "DataCamp",
        year: "2023",
        hours: 30,
        category: CourseCategory::Data,
        completed: false,
        certificate: false,
        progress: Some(75),
    },
];

/// Course list selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum CourseFilter {
    #[default]
    All,
    Only(CourseCategory),
}

impl CourseFilter {
    pub fn all() -> &'static [CourseFilter] {
        &[
            CourseFilter::All,
            CourseFilter::Only(CourseCategory::Frontend),
            CourseFilter::Only(CourseCategory::Data),
        ]
    }

    /// Short label for the dropdown button.
    pub fn label(&self) -> &'static str {
        match self {
            CourseFilter::All => "All",
            CourseFilter::Only(CourseCategory::Frontend) => "Frontend",
            CourseFilter::Only(CourseCategory::Data) => "Data Science",
        }
    }

    /// Longer label for dropdown entries.
    pub fn menu_label(&self) -> &'static str {
        match self {
            CourseFilter::All => "All Courses",
            CourseFilter::Only(CourseCategory::Frontend) => "Frontend Development",
            CourseFilter::Only(CourseCategory::Data) => "Data Science",
        }
    }
}

pub fn filter_courses(filter: CourseFilter) -> Vec<&'static Course> {
    COURSES
        .iter()
        .filter(|c| match filter {
            CourseFilter::All => true,
            CourseFilter::Only(category) => c.category == category,
        })
        .collect()
}

/// Aggregate figures for the learning-progress panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LearningStats {
    pub completed_hours: u32,
    pub certificates: usize,
    pub courses: usize,
}

pub fn learning_stats() -> LearningStats {
    LearningStats {
        completed_hours: COURSES
            .iter()
            .filter(|c| c.completed)
            .map(|c| u32::from(c.hours))
            .sum(),
        certificates: COURSES.iter().filter(|c| c.certificate).count() + CERTIFICATIONS.len(),
        courses: COURSES.len(),
    }
}

// === Contact ===

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactInfo {
    pub title: &'static str,
    pub content: &'static str,
    pub href: Option<&'static str>,
}

pub const CONTACT_INFO: &[ContactInfo] = &[
    ContactInfo { title: "Location", content: "Virar East India", href: None },
    ContactInfo {
        title: "Email",
        content: "vighneshparab83@gmail.com",
        href: Some("mailto:vighneshparab83@gmail.com"),
    },
    ContactInfo { title: "Phone", content: "+91 92233 57837", href: Some("tel:+919223357837") },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialKind {
    GitHub,
    LinkedIn,
    Twitter,
    Instagram,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub name: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        kind: SocialKind::GitHub,
        name: "GitHub",
        href: "https://github.com/vighneshparab",
    },
    SocialLink {
        kind: SocialKind::LinkedIn,
        name: "LinkedIn",
        href: "https://www.linkedin.com/in/vighnesh-parab-a210a9258",
    },
    SocialLink {
        kind: SocialKind::Twitter,
        name: "Twitter",
        href: "https://twitter.com/yourusername",
    },
    SocialLink {
        kind: SocialKind::Instagram,
        name: "Instagram",
        href: "https://www.instagram.com/mr_vignesh20",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_ids_are_unique() {
        let ids: Vec<_> = section_ids().collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(ids.len(), sorted.len());
        assert_eq!(ids[0], "home");
    }

    #[test]
    fn all_rows_are_capped() {
        let rows = skill_rows(SkillFilter::All);
        assert_eq!(rows[0].len(), 8);
        assert_eq!(rows[1].len(), 8);
        assert_eq!(rows[2].len(), 8);
        assert!(rows[0].iter().all(|s| matches!(
            s.category,
            SkillCategory::Frontend | SkillCategory::Backend
        )));
    }

    #[test]
    fn category_rows_partition_the_category() {
        for category in SkillCategory::all() {
            let rows = skill_rows(SkillFilter::Only(*category));
            let flat: Vec<_> = rows.iter().flatten().map(|s| s.name).collect();
            let expected: Vec<_> = skills_in(*category).map(|s| s.name).collect();
            assert_eq!(flat, expected);
        }
        // 6 frontend skills -> chunks of 2
        let rows = skill_rows(SkillFilter::Only(SkillCategory::Frontend));
        assert_eq!(rows.iter().map(Vec::len).collect::<Vec<_>>(), vec![2, 2, 2]);
        // 4 backend skills -> chunks of 2, 2, 0
        let rows = skill_rows(SkillFilter::Only(SkillCategory::Backend));
        assert_eq!(rows.iter().map(Vec::len).collect::<Vec<_>>(), vec![2, 2, 0]);
    }

    #[test]
    fn level_labels() {
        assert_eq!(level_label(90), "Expert");
        assert_eq!(level_label(80), "Expert");
        assert_eq!(level_label(79), "Advanced");
        assert_eq!(level_label(70), "Advanced");
        assert_eq!(level_label(69), "Intermediate");
    }

    #[test]
    fn skill_filter_keys_roundtrip() {
        for filter in SkillFilter::all() {
            assert_eq!(SkillFilter::from_key(filter.key()), Some(filter));
        }
        assert_eq!(SkillFilter::from_key("cooking"), None);
    }

    #[test]
    fn course_filter_is_derived() {
        assert_eq!(filter_courses(CourseFilter::All).len(), COURSES.len());
        let data = filter_courses(CourseFilter::Only(CourseCategory::Data));
        assert_eq!(data.len(), 2);
        assert!(data.iter().all(|c| c.category == CourseCategory::Data));
        // Selecting a filter never shrinks the source table.
        assert_eq!(filter_courses(CourseFilter::All).len(), COURSES.len());
    }

    #[test]
    fn learning_stats_count_completed_hours() {
        let stats = learning_stats();
        assert_eq!(stats.completed_hours, 24 + 60 + 48);
        assert_eq!(stats.certificates, 3 + CERTIFICATIONS.len());
    }

    #[test]
    fn skill_levels_are_percentages() {
        assert!(SKILLS.iter().all(|s| s.level <= 100));
    }
}
