//! Editorial guidance for writing error messages.
//!
//! This content is fixed at compile time and never searched; it backs the
//! `guidelines` view of the browser.

use serde::Serialize;

#[derive(Clone, Copy, Debug, Serialize)]
pub struct Principle {
    pub number: u8,
    pub title: &'static str,
    /// Copy to avoid, paired with `prefer`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avoid: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefer: Option<&'static str>,
    pub rationale: &'static str,
    #[serde(skip_serializing_if = "no_points")]
    pub points: &'static [&'static str],
}

fn no_points(points: &&'static [&'static str]) -> bool {
    points.is_empty()
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct TemplatePart {
    pub name: &'static str,
    pub guidance: &'static str,
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct MessageTemplate {
    pub parts: &'static [TemplatePart],
    pub pattern: &'static str,
    pub example: &'static str,
}

pub const INTRODUCTION: &str = "Effective error messages can turn a moment of user frustration \
into a helpful experience. Follow these core principles to create error messages that guide and \
support your users.";

const PRINCIPLES: &[Principle] = &[
    Principle {
        number: 1,
        title: "Be Human and Conversational",
        avoid: Some("Error 404: Requested resource not found."),
        prefer: Some(
            "We can't find the page you're looking for. It might have moved or been renamed.",
        ),
        rationale: "Use natural language that a person would actually say. Avoid technical \
jargon or system-oriented language that focuses on what went wrong from a technical perspective.",
        points: &[],
    },
    Principle {
        number: 2,
        title: "Be Specific and Clear",
        avoid: Some("Invalid input."),
        prefer: Some("Please enter a phone number with 10 digits, like (555) 555-1234."),
        rationale: "Tell users exactly what went wrong and how to fix it. Vague error messages \
force users to guess what the problem might be, leading to frustration and repeated errors.",
        points: &[],
    },
    Principle {
        number: 3,
        title: "Use Active Voice",
        avoid: Some("Your password has been entered incorrectly."),
        prefer: Some("The password you entered doesn't match our records. Please try again."),
        rationale: "Active voice makes messages clearer and more direct. It also avoids sounding \
accusatory by focusing on the action rather than the person who performed it.",
        points: &[],
    },
    Principle {
        number: 4,
        title: "Offer a Solution",
        avoid: Some("Payment failed."),
        prefer: Some(
            "We couldn't process your payment. Please check your card details or try a \
different payment method.",
        ),
        rationale: "Always include guidance on how to resolve the issue. Give users a clear path \
forward, whether it's retrying with different input, contacting support, or using an alternative \
approach.",
        points: &[],
    },
    Principle {
        number: 5,
        title: "Be Considerate with Humor",
        avoid: Some("Oops! You broke the internet! 🤪"),
        prefer: Some(
            "We're having trouble connecting to the server. Please check your internet \
connection and try again.",
        ),
        rationale: "While humor can sometimes lighten the mood, it can also come across as \
flippant when users are trying to complete important tasks. Be especially careful with humor in \
error situations that might cause real user stress or concern.",
        points: &[],
    },
    Principle {
        number: 6,
        title: "Use Visual Cues Appropriately",
        avoid: None,
        prefer: None,
        rationale: "Error messages should be visually distinct but not alarming. Use color, \
icons, and placement to make errors noticeable without creating unnecessary anxiety.",
        points: &[
            "Use red sparingly and purposefully",
            "Position error messages close to the relevant field or action",
            "Use consistent styling for all error messages",
            "Make sure error states meet accessibility contrast requirements",
        ],
    },
];

pub const MESSAGE_TEMPLATE: MessageTemplate = MessageTemplate {
    parts: &[
        TemplatePart {
            name: "What happened",
            guidance: "Clearly state the error in plain language",
        },
        TemplatePart {
            name: "Why it happened",
            guidance: "Provide context (when it's helpful and not technical)",
        },
        TemplatePart {
            name: "How to fix it",
            guidance: "Give specific guidance on next steps",
        },
    ],
    pattern: "[What happened]. This usually happens because [why it happened]. Try [how to fix it].",
    example: "We couldn't save your changes. This usually happens because of a temporary \
connection issue. Try saving again or check your internet connection.",
};

/// Core principles in reading order.
pub fn principles() -> &'static [Principle] {
    PRINCIPLES
}
