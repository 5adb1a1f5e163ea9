//! Static page content: section ids, skills, projects, and profile copy.
//!
//! Pure data. The page renders it and the nav bar scrolls between the
//! `Section` ids; nothing here changes at runtime.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

/// Scroll targets exposed by the page, in document order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Self; 5] = [Self::Home, Self::About, Self::Skills, Self::Projects, Self::Contact];

    /// DOM id of the section element.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    /// Nav bar label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }
}

/// Icon family shown on a skill card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkillIcon {
    Code,
    Database,
    Brain,
    Chart,
    Trend,
    Cloud,
    Server,
    Globe,
    Chip,
}

impl SkillIcon {
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Code => "</>",
            Self::Database => "DB",
            Self::Brain => "AI",
            Self::Chart => "▤",
            Self::Trend => "↗",
            Self::Cloud => "☁",
            Self::Server => "▣",
            Self::Globe => "◍",
            Self::Chip => "▦",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub category: &'static str,
    pub icon: SkillIcon,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub impact: &'static str,
    pub code_url: &'static str,
    pub demo_url: &'static str,
}

/// Headline number on the about section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Highlight {
    pub value: &'static str,
    pub label: &'static str,
    pub accent: &'static str,
}

/// One line of the contact details list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactDetail {
    pub label: &'static str,
    pub value: &'static str,
}

pub const OWNER_NAME: &str = "Macpherson Zelu";
pub const HEADLINE: &str = "Certified Data Scientist &";
pub const HEADLINE_ACCENT: &str = "Web/Full Stack Developer";
pub const TAGLINE: &str = "Transforming complex data into actionable insights while leveraging AI to build robust and fast websites and software solutions.";
pub const SUMMARY: &str = "Results-oriented professional with a proven track record of applying advanced analytics, statistical modeling, and modern web development to drive strategic insights and optimize operations.";
pub const PROFILE_IMAGE: &str = "/assets/profile.png";

pub const ABOUT_HEADING: &str = "Passionate About Data-Driven Solutions & Modern Web Development";
pub const ABOUT_PARAGRAPHS: [&str; 3] = [
    "As a certified Data Scientist with extensive experience in machine learning, statistical analysis, and data visualization, I specialize in transforming raw data into meaningful insights that drive strategic business decisions. Currently serving as Head of Administration at Seat of Grace Chapel International in Accra, Ghana.",
    "My expertise extends beyond data science into web and full stack development, where I leverage AI to build robust and fast websites and software solutions. I successfully apply data-driven methodologies to enhance efficiency and inform key decisions related to membership engagement and resource allocation.",
    "I believe that the intersection of data science and modern web development creates powerful opportunities to build intelligent, data-driven applications that solve real-world problems and create positive impact.",
];

pub const HIGHLIGHTS: [Highlight; 4] = [
    Highlight { value: "3+", label: "Years Experience", accent: "blue" },
    Highlight { value: "25+", label: "Projects Completed", accent: "green" },
    Highlight { value: "10+", label: "Clients Served", accent: "purple" },
    Highlight { value: "95%", label: "Success Rate", accent: "orange" },
];

pub const SKILLS: [Skill; 18] = [
    Skill { name: "Python", category: "Programming", icon: SkillIcon::Code },
    Skill { name: "R", category: "Programming", icon: SkillIcon::Code },
    Skill { name: "SQL", category: "Database", icon: SkillIcon::Database },
    Skill { name: "Java/Scala", category: "Big Data", icon: SkillIcon::Code },
    Skill { name: "Machine Learning", category: "AI/ML", icon: SkillIcon::Brain },
    Skill { name: "Deep Learning", category: "AI/ML", icon: SkillIcon::Brain },
    Skill { name: "NLP", category: "AI/ML", icon: SkillIcon::Brain },
    Skill { name: "Data Visualization", category: "Analytics", icon: SkillIcon::Chart },
    Skill { name: "Statistical Analysis", category: "Analytics", icon: SkillIcon::Trend },
    Skill { name: "Tableau", category: "Tools", icon: SkillIcon::Chart },
    Skill { name: "Power BI", category: "Tools", icon: SkillIcon::Chart },
    Skill { name: "AWS", category: "Cloud", icon: SkillIcon::Cloud },
    Skill { name: "Azure", category: "Cloud", icon: SkillIcon::Cloud },
    Skill { name: "Docker", category: "DevOps", icon: SkillIcon::Server },
    Skill { name: "Kubernetes", category: "DevOps", icon: SkillIcon::Server },
    Skill { name: "React", category: "Web Dev", icon: SkillIcon::Globe },
    Skill { name: "Full Stack", category: "Web Dev", icon: SkillIcon::Globe },
    Skill { name: "AI Integration", category: "AI/ML", icon: SkillIcon::Chip },
];

pub const PROJECTS: [Project; 4] = [
    Project {
        title: "Church Administration Analytics Platform",
        description: "Developed comprehensive statistical analysis system for membership demographics, attendance patterns, and engagement levels to inform strategic planning and ministry development.",
        technologies: &["Python", "SQL", "Tableau", "Statistical Modeling"],
        impact: "Enhanced efficiency in church administration and informed key decisions for 2000+ members",
        code_url: "#",
        demo_url: "#",
    },
    Project {
        title: "Financial Forecasting & Resource Optimization",
        description: "Built predictive models to analyze giving trends and financial patterns, forecasting budgetary needs and optimizing resource allocation across various ministries.",
        technologies: &["Python", "Pandas", "Scikit-learn", "Power BI"],
        impact: "Improved financial decision-making and resource allocation efficiency by 35%",
        code_url: "#",
        demo_url: "#",
    },
    Project {
        title: "Interactive KPI Dashboard System",
        description: "Created and maintained key performance indicators for organizational health including volunteer retention, participation rates, and visitor assimilation metrics.",
        technologies: &["Python", "SQL", "Dashboard Design", "ETL"],
        impact: "Enabled data-driven leadership decisions with real-time insights and reporting",
        code_url: "#",
        demo_url: "#",
    },
    Project {
        title: "AI-Powered Web Applications",
        description: "Leveraging AI to build robust and fast websites and software solutions, integrating machine learning capabilities into web development projects.",
        technologies: &["React", "Node.js", "TensorFlow", "AI APIs"],
        impact: "Delivered cutting-edge web solutions with AI integration for enhanced user experience",
        code_url: "#",
        demo_url: "#",
    },
];

pub const CONTACT_PITCH: &str = "I'm always interested in new opportunities and challenging projects. Whether you need data analysis, machine learning solutions, AI-powered web applications, or full stack development, I'd love to hear from you.";

pub const CONTACT_DETAILS: [ContactDetail; 3] = [
    ContactDetail { label: "Email", value: "maczelu@gmail.com" },
    ContactDetail { label: "Phone", value: "+233240326761" },
    ContactDetail { label: "Location", value: "Accra, Ghana | Available for Remote Work" },
];

pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/macpherson-zelu";
pub const GITHUB_URL: &str = "#";

pub const FOOTER_NOTICE: &str = "© 2025 Macpherson Zelu. All rights reserved.";
pub const FOOTER_TAGLINE: &str = "Certified Data Scientist & Web/Full Stack Developer | Transforming Data into Insights & Building AI-Powered Solutions";
