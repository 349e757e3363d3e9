//! Static question bank for the three scored phases.
//!
//! Every question is either a 5-point agreement item or a multiple-choice item
//! with exactly one correct option. The bank is compiled in; nothing is loaded at runtime.

use serde::Serialize;

/// Agreement levels offered for every Likert item, in ascending order (1–5).
pub static LIKERT_LABELS: [&str; 5] = [
    "Strongly Disagree",
    "Disagree",
    "Neutral",
    "Agree",
    "Strongly Agree",
];

pub const LIKERT_MIN: u8 = 1;
pub const LIKERT_MAX: u8 = 5;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Question {
    Likert {
        prompt: &'static str,
    },
    MultipleChoice {
        prompt: &'static str,
        options: &'static [&'static str],
        #[serde(skip_serializing)]
        correct: usize,
    },
}

impl Question {
    const fn likert(prompt: &'static str) -> Self {
        Question::Likert { prompt }
    }

    const fn choice(prompt: &'static str, options: &'static [&'static str], correct: usize) -> Self {
        Question::MultipleChoice {
            prompt,
            options,
            correct,
        }
    }

    /// Returns true if `value` is something an answer widget for this question could produce.
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            Question::Likert { .. } => value
                .parse::<u8>()
                .map(|v| (LIKERT_MIN..=LIKERT_MAX).contains(&v))
                .unwrap_or(false),
            Question::MultipleChoice { options, .. } => value
                .parse::<usize>()
                .map(|i| i < options.len())
                .unwrap_or(false),
        }
    }
}

/// A named group of questions scored together into one sub-score.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Subsection {
    pub title: &'static str,
    pub description: &'static str,
    pub questions: &'static [Question],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ScoringMethod {
    /// Mean agreement level rescaled from 1–5 to 0–100.
    LikertMean,
    /// Share of questions answered with the designated correct option.
    Correctness,
}

/// The three questionnaire phases of the assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionKind {
    Psychometric,
    Technical,
    Wiscar,
}

impl SectionKind {
    pub fn subsections(self) -> &'static [Subsection] {
        match self {
            SectionKind::Psychometric => PSYCHOMETRIC,
            SectionKind::Technical => TECHNICAL,
            SectionKind::Wiscar => WISCAR,
        }
    }

    pub fn scoring_method(self) -> ScoringMethod {
        match self {
            SectionKind::Psychometric | SectionKind::Wiscar => ScoringMethod::LikertMean,
            SectionKind::Technical => ScoringMethod::Correctness,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            SectionKind::Psychometric => "Understanding Your Psychological Fit",
            SectionKind::Technical => "Technical & Aptitude Assessment",
            SectionKind::Wiscar => "Comprehensive Readiness Assessment",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Psychometric
// ────────────────────────────────────────────────────────────────────────────

pub static PSYCHOMETRIC: &[Subsection] = &[
    Subsection {
        title: "Interest Scale",
        description: "How curious and engaged are you about managing systems, processes, and resources?",
        questions: &[
            Question::likert("I find myself naturally drawn to understanding how things work in organizations"),
            Question::likert("I enjoy analyzing workflows and identifying bottlenecks"),
            Question::likert("I'm interested in learning about supply chain and logistics"),
            Question::likert("I like the idea of optimizing processes for better efficiency"),
            Question::likert("I find satisfaction in creating order from chaos"),
        ],
    },
    Subsection {
        title: "Personality Compatibility",
        description: "Assessing your personality traits against successful OM professionals",
        questions: &[
            Question::likert("I prefer structured, predictable work environments"),
            Question::likert("I pay close attention to details and rarely make careless mistakes"),
            Question::likert("I remain calm and focused when faced with tight deadlines"),
            Question::likert("I enjoy coordinating with multiple teams and stakeholders"),
            Question::likert("I prefer data-driven decision making over intuition"),
        ],
    },
    Subsection {
        title: "Cognitive Style & Preferences",
        description: "Understanding how you prefer to work and think",
        questions: &[
            Question::likert("I prefer having clear procedures and guidelines to follow"),
            Question::likert("I work better with concrete, measurable goals than abstract concepts"),
            Question::likert("I enjoy stability and consistent routines in my work"),
            Question::likert("I prefer analytical problem-solving over creative brainstorming"),
            Question::likert("I like working with systems and processes more than people"),
        ],
    },
    Subsection {
        title: "Motivation Type",
        description: "What drives you in your career and work life",
        questions: &[
            Question::likert("I'm motivated by improving efficiency and reducing waste"),
            Question::likert("I find satisfaction in helping organizations run smoothly"),
            Question::likert("I'm driven by measurable results and KPIs"),
            Question::likert("I enjoy the stability that comes with process-oriented work"),
            Question::likert("I'm motivated by solving complex logistical challenges"),
        ],
    },
];

// ────────────────────────────────────────────────────────────────────────────
// Technical & aptitude
// ────────────────────────────────────────────────────────────────────────────

pub static TECHNICAL: &[Subsection] = &[
    Subsection {
        title: "General Aptitude",
        description: "Testing logical reasoning, basic numeracy, and pattern recognition",
        questions: &[
            Question::choice(
                "If a factory produces 240 units in 8 hours, how many units does it produce per hour?",
                &["20", "25", "30", "35"],
                2,
            ),
            Question::choice(
                "A company's efficiency improved by 15% this quarter. If they produced 2000 units last quarter, how many did they produce this quarter?",
                &["2150", "2300", "2250", "2400"],
                1,
            ),
            Question::choice(
                "In a sequence: 2, 6, 18, 54, ?, what comes next?",
                &["108", "162", "216", "270"],
                1,
            ),
            Question::choice(
                "If Process A takes 4 hours and Process B takes 6 hours, working together they complete the job in:",
                &["2.4 hours", "3.2 hours", "5 hours", "10 hours"],
                0,
            ),
            Question::choice(
                "A warehouse has a 20% error rate. If 500 orders are processed, approximately how many will have errors?",
                &["50", "75", "100", "125"],
                2,
            ),
        ],
    },
    Subsection {
        title: "Prerequisite Knowledge",
        description: "Basic statistics, Excel/spreadsheet familiarity, and business process awareness",
        questions: &[
            Question::choice(
                "What does 'standard deviation' measure in a dataset?",
                &["The average value", "The spread of data points", "The highest value", "The trend direction"],
                1,
            ),
            Question::choice(
                "In Excel, what function would you use to find the average of cells A1 to A10?",
                &["=SUM(A1:A10)", "=AVERAGE(A1:A10)", "=COUNT(A1:A10)", "=MEDIAN(A1:A10)"],
                1,
            ),
            Question::choice(
                "What is a KPI in business context?",
                &[
                    "Key Personnel Indicator",
                    "Key Performance Indicator",
                    "Key Process Improvement",
                    "Key Product Information",
                ],
                1,
            ),
            Question::choice(
                "Which chart type is best for showing trends over time?",
                &["Pie chart", "Bar chart", "Line chart", "Scatter plot"],
                2,
            ),
            Question::choice(
                "What does ROI stand for?",
                &["Return on Investment", "Rate of Interest", "Risk of Investment", "Revenue over Income"],
                0,
            ),
        ],
    },
    Subsection {
        title: "Operations-Specific Knowledge",
        description: "Inventory control, Lean/Agile basics, supply chain concepts, and process optimization",
        questions: &[
            Question::choice(
                "What is the primary goal of Just-In-Time (JIT) inventory management?",
                &["Maximize inventory", "Reduce holding costs", "Increase safety stock", "Automate ordering"],
                1,
            ),
            Question::choice(
                "In Lean methodology, what does 'waste' typically refer to?",
                &["Physical garbage", "Non-value-adding activities", "Defective products only", "Employee breaks"],
                1,
            ),
            Question::choice(
                "What is a bottleneck in operations management?",
                &[
                    "A type of container",
                    "The fastest process step",
                    "The slowest process step that limits overall output",
                    "A quality control checkpoint",
                ],
                2,
            ),
            Question::choice(
                "EOQ stands for:",
                &[
                    "Economic Order Quantity",
                    "Efficient Operations Quality",
                    "Emergency Order Queue",
                    "Expected Output Quality",
                ],
                0,
            ),
            Question::choice(
                "What is the main purpose of a supply chain?",
                &[
                    "To store products",
                    "To manage employees",
                    "To move products from suppliers to customers",
                    "To handle customer complaints",
                ],
                2,
            ),
            Question::choice(
                "In process improvement, what does DMAIC stand for?",
                &[
                    "Define, Measure, Analyze, Improve, Control",
                    "Design, Manage, Act, Implement, Check",
                    "Develop, Monitor, Assess, Integrate, Complete",
                    "Direct, Modify, Adjust, Inspect, Conclude",
                ],
                0,
            ),
        ],
    },
];

// ────────────────────────────────────────────────────────────────────────────
// WISCAR readiness framework
// ────────────────────────────────────────────────────────────────────────────

pub static WISCAR: &[Subsection] = &[
    Subsection {
        title: "Will",
        description: "Drive, grit, and consistency in pursuing goals",
        questions: &[
            Question::likert("I consistently follow through on commitments, even when it gets difficult"),
            Question::likert("I maintain focus on long-term goals despite short-term obstacles"),
            Question::likert("I actively seek out challenging projects that push my capabilities"),
            Question::likert("I persist through setbacks and learn from failures"),
            Question::likert("I maintain high standards for my work even under pressure"),
        ],
    },
    Subsection {
        title: "Interest",
        description: "Curiosity and perceived value in operations management",
        questions: &[
            Question::likert("I genuinely enjoy learning about business processes and systems"),
            Question::likert("I find operations management topics intellectually stimulating"),
            Question::likert("I see clear value in developing operations management skills"),
            Question::likert("I'm excited about the career opportunities in this field"),
            Question::likert("I would study operations management even if not required"),
        ],
    },
    Subsection {
        title: "Skill",
        description: "Existing soft and technical skills relevant to OM",
        questions: &[
            Question::likert("I have strong analytical and problem-solving abilities"),
            Question::likert("I'm effective at coordinating multiple tasks and deadlines"),
            Question::likert("I communicate well with different types of stakeholders"),
            Question::likert("I have experience with data analysis and spreadsheet tools"),
            Question::likert("I'm skilled at identifying inefficiencies and improvement opportunities"),
        ],
    },
    Subsection {
        title: "Cognitive Readiness",
        description: "Learning speed and problem-solving capacity",
        questions: &[
            Question::likert("I quickly grasp new concepts and frameworks"),
            Question::likert("I can think systematically about complex problems"),
            Question::likert("I learn effectively from both theoretical and practical materials"),
            Question::likert("I can adapt my thinking when new information becomes available"),
            Question::likert("I process and synthesize information from multiple sources well"),
        ],
    },
    Subsection {
        title: "Ability to Learn",
        description: "Feedback receptivity and learning persistence",
        questions: &[
            Question::likert("I actively seek feedback to improve my performance"),
            Question::likert("I remain motivated to learn even when topics are challenging"),
            Question::likert("I can learn effectively through various methods (reading, practice, discussion)"),
            Question::likert("I apply lessons learned from one situation to new contexts"),
            Question::likert("I maintain curiosity and ask questions to deepen understanding"),
        ],
    },
    Subsection {
        title: "Real-world Alignment",
        description: "Fit with actual job roles and work settings",
        questions: &[
            Question::likert("I thrive in structured, process-oriented work environments"),
            Question::likert("I'm comfortable working with data, metrics, and KPIs"),
            Question::likert("I enjoy collaborating with cross-functional teams"),
            Question::likert("I'm motivated by improving efficiency and reducing waste"),
            Question::likert("I can handle the pace and pressure of operations roles"),
        ],
    },
];
