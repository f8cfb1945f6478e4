//! Project background shown by the `about` view.

use serde::Serialize;

#[derive(Clone, Copy, Debug, Serialize)]
pub struct Inspiration {
    pub author: &'static str,
    pub title: &'static str,
    pub url: &'static str,
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct About {
    pub summary: &'static str,
    pub inspiration: Inspiration,
    pub mission: &'static str,
    /// Qualities every example in the catalog aims for.
    pub mission_points: &'static [&'static str],
    pub usage: &'static str,
    pub usage_points: &'static [&'static str],
    pub closing: &'static str,
}

pub const ABOUT: About = About {
    summary: "This project is a comprehensive library of UX patterns for error messages, \
designed to help developers create more user-friendly error experiences across digital products.",
    inspiration: Inspiration {
        author: "Andy Bell",
        title: "How to write error messages that actually help users, rather than frustrate them",
        url: "https://piccalil.li/blog/how-to-write-error-messages-that-actually-help-users-rather-than-frustrate-them/",
    },
    mission: "We believe that well-crafted error messages can transform frustrating user \
experiences into helpful ones. This library aims to provide practical examples of error message \
patterns that:",
    mission_points: &[
        "Are clear, specific, and actionable",
        "Use human-friendly language",
        "Avoid technical jargon",
        "Provide clear next steps",
        "Maintain a consistent voice and tone",
        "Consider accessibility best practices",
    ],
    usage: "Browse through our categorized examples of error messages to:",
    usage_points: &[
        "Compare poor error messages with improved versions",
        "Understand the principles that make error messages effective",
        "Apply these patterns in your own applications",
        "Use our guidelines to create consistent error experiences",
    ],
    closing: "We hope this resource helps you create more empathetic, helpful user experiences \
through better error messages.",
};
