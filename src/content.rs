//! Campaign copy: headline, story, share message, and testimonials.
//!
//! Everything user-facing and campaign-specific lives here so the components
//! stay generic over the content they render.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

/// Browser tab title.
pub const PAGE_TITLE: &str = "GiveSpark — Help Amal Finish School";

/// Hero headline.
pub const CAMPAIGN_HEADLINE: &str = "Help Amal Finish School";

/// Hero sub-headline.
pub const CAMPAIGN_SUBHEAD: &str =
    "Amal Haider is one exam season away from her intermediate certificate. \
     Her family cannot cover the fees alone — you can close the gap.";

/// Message attached to social shares.
pub const SHARE_MESSAGE: &str =
    "Help Amal complete her education! She needs PKR 50,000 for her final \
     exams. Every contribution matters.";

/// Story paragraphs, revealed as the reader scrolls.
pub const STORY_PARAGRAPHS: [&str; 3] = [
    "Amal grew up in a two-room house in Lahore, the first in her family to \
     make it past primary school. She has topped her class three years \
     running while tutoring neighbourhood children in the evenings.",
    "This spring her father's workshop closed, and with it the money set \
     aside for exam registration, textbooks, and the commute to the exam \
     centre. Without the fees paid by the deadline, she sits the year out.",
    "Every rupee raised here goes to a named cost on her fee schedule. When \
     the goal is met, the campaign closes — nothing is collected beyond it.",
];

/// A named cost on the fee schedule, shown as an impact card.
pub struct ImpactCard {
    /// Whole rupees.
    pub amount: u64,
    /// What the amount pays for.
    pub label: &'static str,
}

/// Impact cards in the story section.
pub const IMPACT_CARDS: [ImpactCard; 3] = [
    ImpactCard { amount: 1_000, label: "Registers one exam subject" },
    ImpactCard { amount: 5_000, label: "Covers textbooks for a full term" },
    ImpactCard { amount: 10_000, label: "Pays a month of travel and meals" },
];

/// A supporter quote in the carousel.
pub struct Testimonial {
    /// The quote body.
    pub quote: &'static str,
    /// Who said it.
    pub name: &'static str,
    /// Their relationship to the campaign.
    pub role: &'static str,
}

/// Testimonials shown in the carousel, in rotation order.
pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "Amal is the most determined student I have taught in twenty \
                years. She does not need talent — she has that. She needs \
                the fees paid.",
        name: "Rukhsana Bibi",
        role: "Mathematics teacher",
    },
    Testimonial {
        quote: "She tutored my son for free all winter. Helping her sit her \
                exams is the least this street can do.",
        name: "Imran Qureshi",
        role: "Neighbour",
    },
    Testimonial {
        quote: "We split a desk for two years. Half the notes in my file are \
                in her handwriting. She has to be in that exam hall.",
        name: "Sana Tariq",
        role: "Classmate",
    },
];
