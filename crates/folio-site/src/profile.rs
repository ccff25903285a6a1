//! Résumé content for the home page.
//!
//! Like the project registry, this is compiled in. Asset paths are relative
//! to the static directory and get the site base path prepended when
//! rendered.

/// An outbound link with a label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
}

/// One position in the experience section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Experience {
    pub role: &'static str,
    pub organization: &'static str,
    pub period: &'static str,
    pub logo: &'static str,
    pub highlights: Vec<&'static str>,
    pub links: Vec<Link>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Education {
    pub degree: &'static str,
    pub school: &'static str,
    pub period: &'static str,
}

/// A labelled group of technologies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TechGroup {
    pub title: &'static str,
    pub items: Vec<&'static str>,
}

/// A contact row: label on the left, link on the right.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Contact {
    pub kind: &'static str,
    pub link: Link,
}

/// Everything the home page shows apart from the projects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub location: &'static str,
    pub portrait: &'static str,
    pub about: &'static str,
    pub socials: Vec<Link>,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub tech_stack: Vec<TechGroup>,
    pub contacts: Vec<Contact>,
    pub footer: &'static str,
}

impl Profile {
    pub fn builtin() -> Self {
        Self {
            name: "Tzu-Han Lin",
            role: "Software Engineer",
            location: "Brooklyn, New York",
            portrait: "/tzu.JPG",
            about: "I create things.",
            socials: vec![
                Link {
                    label: "LinkedIn",
                    href: "https://linkedin.com/in/tzuhanlin",
                },
                Link {
                    label: "GitHub",
                    href: "https://github.com/hhtzuhh",
                },
            ],
            experience: vec![
                Experience {
                    role: "Full Stack Engineer",
                    organization: "Kean University",
                    period: "2024.9 - NOW",
                    logo: "/kean.png",
                    highlights: vec![
                        "Developed full-stack applications with ASP.NET and ReactJS, using \
                         MongoDB for dynamic schema management to streamline data migration \
                         and reduce inter-departmental communication costs for reporting.",
                        "Built an event-driven reporting system using Kafka for asynchronous \
                         report processing, notifications, and PDF generation.",
                    ],
                    links: Vec::new(),
                },
                Experience {
                    role: "Research Assistant",
                    organization: "Kean University",
                    period: "2023.5 - 2023.9",
                    logo: "/kean.png",
                    highlights: vec![
                        "Developed a novel weakly supervised learning framework for breast \
                         ultrasound image segmentation.",
                        "Research accepted by the 46th Annual IEEE Engineering in Medicine and \
                         Biology Society Conference.",
                    ],
                    links: vec![Link {
                        label: "IEEE Paper Link",
                        href: "https://ieeexplore.ieee.org/document/10781719",
                    }],
                },
            ],
            education: vec![
                Education {
                    degree: "MS in Computer Information Systems",
                    school: "Kean University",
                    period: "2022.1 - 2024.5",
                },
                Education {
                    degree: "BS in Medical Science",
                    school: "National Tsing Hua University",
                    period: "2013.9 - 2017.6",
                },
            ],
            tech_stack: vec![
                TechGroup {
                    title: "Programming Languages",
                    items: vec!["C", "C#", "Python", "Java", "JavaScript", "TypeScript", "Go"],
                },
                TechGroup {
                    title: "Databases & Caching",
                    items: vec!["MongoDB", "MySQL", "PostgreSQL", "Redis", "DynamoDB"],
                },
                TechGroup {
                    title: "Web Frameworks",
                    items: vec![
                        "Django",
                        "FastAPI",
                        "Spring Boot",
                        ".NET Core",
                        "React",
                        "Next.js",
                    ],
                },
                TechGroup {
                    title: "Development Tools",
                    items: vec!["Git", "Kafka", "Docker", "Kubernetes"],
                },
            ],
            contacts: vec![
                Contact {
                    kind: "Email",
                    link: Link {
                        label: "hhtzuhh@gmail.com",
                        href: "mailto:hhtzuhh@gmail.com",
                    },
                },
                Contact {
                    kind: "LinkedIn",
                    link: Link {
                        label: "/in/tzuhanlin",
                        href: "https://linkedin.com/in/tzuhanlin",
                    },
                },
            ],
            footer: "© 2025 Resume by Tzu-Han Lin",
        }
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::builtin()
    }
}
