//! Static reference content shown in the dashboard panels
//!
//! These tables are presentation data, not configuration: they describe the
//! Product Owner framework itself and only change with a new release.

use crate::types::{Activity, ControlRow, Impact, Section, TimelinePhase};

/// The six high-impact responsibility areas.
pub const ACTIVITIES: &[Activity] = &[
    Activity {
        title: "Strategy & Vision",
        description: "Define the product's north star, aligning business objectives with real market needs.",
        frequency: "Quarterly",
        impact: Impact::Critical,
    },
    Activity {
        title: "Product Discovery",
        description: "Continuous user research to validate hypotheses before committing development resources.",
        frequency: "Continuous",
        impact: Impact::High,
    },
    Activity {
        title: "Backlog Health",
        description: "Ruthless prioritization on ROI, urgency, and technical feasibility to maximize delivered value.",
        frequency: "Weekly",
        impact: Impact::High,
    },
    Activity {
        title: "Stakeholder Management",
        description: "Negotiate expectations and broker communication between the engineering team and business leads.",
        frequency: "Daily",
        impact: Impact::Medium,
    },
    Activity {
        title: "Outcome Validation",
        description: "Post-launch data analysis to confirm whether shipped features achieved the intended impact.",
        frequency: "End of sprint",
        impact: Impact::Critical,
    },
    Activity {
        title: "Risk Management",
        description: "Identify legal, technical, or market bottlenecks that could compromise the roadmap.",
        frequency: "Biweekly",
        impact: Impact::Medium,
    },
];

/// The four phases of the PO lifecycle.
pub const WORKPLAN: &[TimelinePhase] = &[
    TimelinePhase {
        phase: "Phase 1: Strategy & Alignment",
        status: "Foundation",
        tasks: [
            "North Star metric definition",
            "Customer persona mapping",
            "Market-fit analysis",
        ],
    },
    TimelinePhase {
        phase: "Phase 2: Discovery & Design",
        status: "Definition",
        tasks: [
            "Low-fidelity prototyping",
            "Usability testing",
            "User story definition",
        ],
    },
    TimelinePhase {
        phase: "Phase 3: Continuous Delivery",
        status: "Execution",
        tasks: [
            "Sprint planning",
            "Backlog refinement",
            "Tech debt management",
        ],
    },
    TimelinePhase {
        phase: "Phase 4: Measure & Optimize",
        status: "Growth",
        tasks: [
            "A/B testing",
            "Conversion funnel analysis",
            "Stakeholder feedback",
        ],
    },
];

/// The strategic controls matrix.
pub const CONTROLS: &[ControlRow] = &[
    ControlRow {
        artifact: "OKRs (Objectives & Key Results)",
        responsibility: "Keep the team aligned with company goals",
        indicator: "Completion level",
    },
    ControlRow {
        artifact: "Burndown Chart / Velocity",
        responsibility: "Predict delivery dates and surface blockers",
        indicator: "Team consistency",
    },
    ControlRow {
        artifact: "User Feedback Loop",
        responsibility: "Validate that features solve the problem",
        indicator: "NPS / CSAT",
    },
    ControlRow {
        artifact: "Risk Matrix",
        responsibility: "Anticipate compliance or technical failures",
        indicator: "Exposure level",
    },
    ControlRow {
        artifact: "Experiment Backlog",
        responsibility: "Prioritize what to learn over what to build",
        indicator: "Validated hypotheses",
    },
    ControlRow {
        artifact: "DORA Metrics",
        responsibility: "Technical health of the delivery flow",
        indicator: "Lead time / change failure",
    },
];

/// The six responsibility-area cards.
pub fn activities() -> &'static [Activity] {
    ACTIVITIES
}

/// The four lifecycle phases.
pub fn workplan() -> &'static [TimelinePhase] {
    WORKPLAN
}

/// The six-row controls matrix.
pub fn controls() -> &'static [ControlRow] {
    CONTROLS
}

/// Title and subtitle for a section's main header.
pub fn section_header(section: Section) -> (&'static str, &'static str) {
    match section {
        Section::Activities => (
            "High-Impact Responsibilities",
            "The six critical dimensions where a Product Owner's time secures the return on investment.",
        ),
        Section::Workplan => (
            "PO Working Roadmap",
            "A structured process from strategic conception to scaling the solution.",
        ),
        Section::Controls => (
            "Business & Product Controls",
            "Tools and artifacts to stay on course, mitigate risk, and communicate progress.",
        ),
        Section::Kpis => (
            "Generated Metrics Dashboard",
            "Metrics derived specifically for your product context through AI analysis.",
        ),
    }
}
