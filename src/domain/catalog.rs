//! Static study data shown by the panels
//!
//! Every table here is a `&'static` literal. Nothing in the application
//! mutates it; panels only iterate it to build their views.

use crate::domain::section::Section;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StudySession {
    pub date: &'static str,
    pub hours: f64,
    pub score: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubjectProgress {
    pub subject: &'static str,
    pub progress: u8,
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PerformanceBucket {
    pub name: &'static str,
    pub value: u8,
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatTone {
    Primary,
    Success,
    Accent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatCard {
    pub label: &'static str,
    pub value: &'static str,
    pub caption: &'static str,
    /// Caption is a trend indicator rather than plain text
    pub trending: bool,
    pub tone: StatTone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentStatus {
    Processed,
    Processing,
}

impl DocumentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            DocumentStatus::Processed => "Processed",
            DocumentStatus::Processing => "Processing",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LibraryDocument {
    pub id: u32,
    pub title: &'static str,
    pub kind: &'static str,
    pub size: &'static str,
    pub upload_date: &'static str,
    pub status: DocumentStatus,
    pub subjects: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecommendationKind {
    Urgent,
    Opportunity,
    Reinforcement,
    Preparation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recommendation {
    pub id: u32,
    pub kind: RecommendationKind,
    pub title: &'static str,
    pub description: &'static str,
    pub priority: Priority,
    pub estimated_time: &'static str,
    pub confidence: u8,
    pub tags: &'static [&'static str],
    pub action: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TipKind {
    Clock,
    Trend,
    Target,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StudyTip {
    pub kind: TipKind,
    pub title: &'static str,
    pub tip: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickAction {
    pub title: &'static str,
    pub caption: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub section: Section,
    pub badge: Option<&'static str>,
}

pub const STUDY_SESSIONS: &[StudySession] = &[
    StudySession { date: "2024-01-01", hours: 2.5, score: 78 },
    StudySession { date: "2024-01-02", hours: 3.2, score: 82 },
    StudySession { date: "2024-01-03", hours: 1.8, score: 75 },
    StudySession { date: "2024-01-04", hours: 4.1, score: 88 },
    StudySession { date: "2024-01-05", hours: 2.9, score: 85 },
    StudySession { date: "2024-01-06", hours: 3.7, score: 92 },
    StudySession { date: "2024-01-07", hours: 2.3, score: 79 },
];

pub const SUBJECTS: &[SubjectProgress] = &[
    SubjectProgress { subject: "Mathematics", progress: 85, color: "#3b82f6" },
    SubjectProgress { subject: "Science", progress: 72, color: "#10b981" },
    SubjectProgress { subject: "History", progress: 68, color: "#f59e0b" },
    SubjectProgress { subject: "Literature", progress: 91, color: "#8b5cf6" },
];

pub const PERFORMANCE: &[PerformanceBucket] = &[
    PerformanceBucket { name: "Excellent", value: 35, color: "#10b981" },
    PerformanceBucket { name: "Good", value: 45, color: "#3b82f6" },
    PerformanceBucket { name: "Needs Work", value: 20, color: "#f59e0b" },
];

pub const STAT_CARDS: &[StatCard] = &[
    StatCard {
        label: "Study Hours",
        value: "24.5",
        caption: "+12% from last week",
        trending: true,
        tone: StatTone::Primary,
    },
    StatCard {
        label: "Avg Score",
        value: "84%",
        caption: "+5% improvement",
        trending: true,
        tone: StatTone::Success,
    },
    StatCard {
        label: "Completed",
        value: "47",
        caption: "Documents processed",
        trending: false,
        tone: StatTone::Accent,
    },
    StatCard {
        label: "AI Insights",
        value: "127",
        caption: "Recommendations given",
        trending: false,
        tone: StatTone::Primary,
    },
];

pub const LIBRARY: &[LibraryDocument] = &[
    LibraryDocument {
        id: 1,
        title: "Advanced Calculus Notes",
        kind: "PDF",
        size: "2.4 MB",
        upload_date: "2024-01-15",
        status: DocumentStatus::Processed,
        subjects: &["Mathematics", "Calculus"],
    },
    LibraryDocument {
        id: 2,
        title: "World War II Timeline",
        kind: "DOCX",
        size: "1.8 MB",
        upload_date: "2024-01-14",
        status: DocumentStatus::Processing,
        subjects: &["History"],
    },
    LibraryDocument {
        id: 3,
        title: "Shakespeare Analysis",
        kind: "PDF",
        size: "3.1 MB",
        upload_date: "2024-01-13",
        status: DocumentStatus::Processed,
        subjects: &["Literature", "English"],
    },
];

pub const RECOMMENDATIONS: &[Recommendation] = &[
    Recommendation {
        id: 1,
        kind: RecommendationKind::Urgent,
        title: "Focus on Calculus Derivatives",
        description: "Your recent quiz scores show difficulty with derivative rules. Spend 30-45 minutes reviewing the chain rule and product rule.",
        priority: Priority::High,
        estimated_time: "45 min",
        confidence: 92,
        tags: &["Mathematics", "Calculus", "Practice"],
        action: "Start Review",
    },
    Recommendation {
        id: 2,
        kind: RecommendationKind::Opportunity,
        title: "Strengthen Historical Timeline Knowledge",
        description: "You're doing well with historical analysis, but timeline memorization could use work. Try the chronology flashcards.",
        priority: Priority::Medium,
        estimated_time: "20 min",
        confidence: 78,
        tags: &["History", "Memory", "Flashcards"],
        action: "Practice Now",
    },
    Recommendation {
        id: 3,
        kind: RecommendationKind::Reinforcement,
        title: "Literature Analysis Skills",
        description: "Excellent progress in literary analysis! Consider tackling more complex texts to maintain momentum.",
        priority: Priority::Low,
        estimated_time: "60 min",
        confidence: 85,
        tags: &["Literature", "Analysis", "Advanced"],
        action: "Continue",
    },
    Recommendation {
        id: 4,
        kind: RecommendationKind::Preparation,
        title: "Upcoming Physics Quiz Prep",
        description: "Based on your study pattern, review thermodynamics concepts before tomorrow's quiz.",
        priority: Priority::High,
        estimated_time: "35 min",
        confidence: 88,
        tags: &["Physics", "Quiz Prep", "Thermodynamics"],
        action: "Prepare",
    },
];

pub const STUDY_TIPS: &[StudyTip] = &[
    StudyTip {
        kind: TipKind::Clock,
        title: "Optimal Study Time",
        tip: "Your peak performance is between 2-4 PM. Schedule challenging topics during this window.",
    },
    StudyTip {
        kind: TipKind::Trend,
        title: "Progress Pattern",
        tip: "You show 23% better retention with spaced repetition. Use the built-in scheduler.",
    },
    StudyTip {
        kind: TipKind::Target,
        title: "Goal Achievement",
        tip: "You're 78% towards your monthly goal. 3 more study sessions will get you there!",
    },
];

pub const QUICK_ACTIONS: &[QuickAction] = &[
    QuickAction { title: "Generate Quiz", caption: "From recent materials" },
    QuickAction { title: "AI Tutor", caption: "Ask questions" },
    QuickAction { title: "Schedule Study", caption: "Plan sessions" },
];

pub const HERO_FEATURES: &[&str] = &[
    "Document Processing",
    "Smart Assessments",
    "AI Recommendations",
    "Progress Tracking",
];

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { section: Section::Dashboard, badge: None },
    NavItem { section: Section::Upload, badge: None },
    NavItem { section: Section::Recommendations, badge: Some("3") },
    NavItem { section: Section::Library, badge: None },
];
