//! Static content for the non-scored phases: introduction and career guidance.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RoleSummary {
    pub role: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntroductionContent {
    pub title: &'static str,
    pub summary: &'static str,
    pub field_overview: &'static str,
    pub focus_areas: &'static [&'static str],
    pub impact_areas: &'static [&'static str],
    pub typical_roles: &'static [RoleSummary],
}

pub static INTRODUCTION: IntroductionContent = IntroductionContent {
    title: "Operations Management Career Assessment",
    summary: "This comprehensive assessment will help determine whether you're a good fit for pursuing \
a career or upskilling in Operations Management based on psychological, aptitude, and career alignment factors.",
    field_overview: "Operations Management (OM) focuses on designing, overseeing, and optimizing processes in \
manufacturing, services, logistics, supply chains, and delivery systems. It's essential for \
organizational efficiency and customer satisfaction.",
    focus_areas: &[
        "Process optimization and design",
        "Supply chain management",
        "Quality control and improvement",
        "Resource allocation and planning",
    ],
    impact_areas: &[
        "Cost reduction and efficiency",
        "Customer satisfaction",
        "Competitive advantage",
        "Organizational growth",
    ],
    typical_roles: &[
        RoleSummary {
            role: "Operations Manager",
            description: "Oversee end-to-end processes in production/service delivery",
        },
        RoleSummary {
            role: "Supply Chain Analyst",
            description: "Use data to streamline and optimize supply chains",
        },
        RoleSummary {
            role: "Logistics Manager",
            description: "Coordinate and manage product movement and storage",
        },
        RoleSummary {
            role: "Production Planner",
            description: "Schedule and coordinate manufacturing processes",
        },
        RoleSummary {
            role: "Process Improvement Consultant",
            description: "Identify and implement process optimizations",
        },
        RoleSummary {
            role: "Project Manager (Operations)",
            description: "Plan and execute operational projects on time and budget",
        },
    ],
};

#[derive(Debug, Serialize)]
pub struct CareerPath {
    pub title: &'static str,
    pub description: &'static str,
    pub responsibilities: &'static [&'static str],
    pub salary: &'static str,
    pub growth: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Course {
    pub title: &'static str,
    pub duration: &'static str,
    pub provider: &'static str,
}

#[derive(Debug, Serialize)]
pub struct LearningPath {
    pub beginner: &'static [Course],
    pub intermediate: &'static [Course],
    pub advanced: &'static [Course],
}

#[derive(Debug, Serialize)]
pub struct SkillGaps {
    pub current: &'static [&'static str],
    pub target: &'static [&'static str],
    pub recommendations: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct AlternativeField {
    pub title: &'static str,
    pub fit: &'static str,
    pub transition: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerGuidanceContent {
    pub career_paths: &'static [CareerPath],
    pub learning_path: LearningPath,
    pub skill_gaps: SkillGaps,
    pub alternative_fields: &'static [AlternativeField],
}

pub static CAREER_GUIDANCE: CareerGuidanceContent = CareerGuidanceContent {
    career_paths: &[
        CareerPath {
            title: "Operations Manager",
            description: "Oversees end-to-end processes in production/service delivery",
            responsibilities: &[
                "Process optimization",
                "Team coordination",
                "Performance monitoring",
                "Cost management",
            ],
            salary: "$65,000 - $95,000",
            growth: "High demand, 8% growth expected",
        },
        CareerPath {
            title: "Supply Chain Analyst",
            description: "Uses data to streamline and optimize supply chains",
            responsibilities: &[
                "Data analysis",
                "Vendor management",
                "Logistics planning",
                "Risk assessment",
            ],
            salary: "$55,000 - $80,000",
            growth: "Very high demand, 12% growth expected",
        },
        CareerPath {
            title: "Process Improvement Consultant",
            description: "Identifies and implements process optimizations",
            responsibilities: &[
                "Process mapping",
                "Lean implementation",
                "Change management",
                "Training delivery",
            ],
            salary: "$70,000 - $110,000",
            growth: "Strong demand in digital transformation",
        },
        CareerPath {
            title: "Business Process Analyst",
            description: "Maps and improves internal business processes",
            responsibilities: &[
                "Process documentation",
                "Gap analysis",
                "Solution design",
                "Stakeholder management",
            ],
            salary: "$60,000 - $85,000",
            growth: "Steady growth, especially in tech",
        },
    ],
    learning_path: LearningPath {
        beginner: &[
            Course {
                title: "Operations Fundamentals",
                duration: "2-3 weeks",
                provider: "Coursera/edX",
            },
            Course {
                title: "Supply Chain Basics",
                duration: "2-3 weeks",
                provider: "LinkedIn Learning",
            },
            Course {
                title: "Excel for Operations",
                duration: "1-2 weeks",
                provider: "Microsoft Learn",
            },
        ],
        intermediate: &[
            Course {
                title: "Lean Six Sigma Yellow Belt",
                duration: "4-6 weeks",
                provider: "ASQ/Coursera",
            },
            Course {
                title: "Process Mapping & Analysis",
                duration: "3-4 weeks",
                provider: "Udemy/Skillshare",
            },
            Course {
                title: "Operations Analytics",
                duration: "4-5 weeks",
                provider: "Coursera",
            },
        ],
        advanced: &[
            Course {
                title: "ERP Systems (SAP/Oracle)",
                duration: "6-8 weeks",
                provider: "Vendor Training",
            },
            Course {
                title: "Operations Research",
                duration: "8-10 weeks",
                provider: "University Course",
            },
            Course {
                title: "Strategic Operations Management",
                duration: "6-8 weeks",
                provider: "Executive Education",
            },
        ],
    },
    skill_gaps: SkillGaps {
        current: &["Analytical thinking", "Problem solving", "Attention to detail"],
        target: &[
            "Lean/Six Sigma",
            "Excel mastery",
            "KPIs & metrics",
            "ERP systems",
            "Project management",
        ],
        recommendations: &[
            "Focus on Excel advanced functions and pivot tables",
            "Get certified in Lean Six Sigma methodology",
            "Learn basic SQL for data analysis",
            "Understand key operations KPIs and dashboards",
        ],
    },
    alternative_fields: &[
        AlternativeField {
            title: "Business Intelligence",
            fit: "High analytical skills, data-driven thinking",
            transition: "Focus on data visualization and SQL skills",
        },
        AlternativeField {
            title: "Product Management",
            fit: "Systems thinking, process orientation",
            transition: "Learn user research and product strategy",
        },
        AlternativeField {
            title: "Customer Success",
            fit: "Process improvement, stakeholder management",
            transition: "Develop customer relationship and communication skills",
        },
    ],
};
