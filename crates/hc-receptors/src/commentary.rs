//! Canned per-system commentary.
//!
//! Commentary is banded three ways ([`CommentaryBand`]) rather than the four
//! tiers used for system notes, and mentions the most recent reports.

use hc_core::entities::NutrientReport;
use hc_core::enums::{BodySystem, CommentaryBand};

/// How many of the latest reports are named in commentary.
pub const RECENT_NUTRIENT_LIMIT: usize = 5;

/// Phrase used when no nutrients were reported.
pub const NO_TRACKED_NUTRIENTS: &str = "no tracked nutrients yet";

/// Comma-joined names of the last [`RECENT_NUTRIENT_LIMIT`] reports, in input order.
#[must_use]
pub fn recent_nutrients(reports: &[NutrientReport]) -> String {
    let start = reports.len().saturating_sub(RECENT_NUTRIENT_LIMIT);
    let recent = &reports[start..];

    if recent.is_empty() {
        return NO_TRACKED_NUTRIENTS.to_string();
    }

    recent
        .iter()
        .map(|r| r.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Commentary for `system_id` at the given efficiency.
///
/// Ids outside the four known body systems get a generic template that quotes
/// the efficiency rounded to the nearest integer.
#[must_use]
pub fn commentary(system_id: &str, efficiency: f64, reports: &[NutrientReport]) -> String {
    let nutrients = recent_nutrients(reports);

    let Ok(system) = system_id.parse::<BodySystem>() else {
        return format!(
            "The {system_id} system is running at {:.0}% efficiency. Recent intake: {nutrients}.",
            efficiency.round()
        );
    };

    let band = CommentaryBand::for_efficiency(efficiency);
    let level = band.label();

    match (system, band) {
        (BodySystem::Intestinal, CommentaryBand::Strong) => format!(
            "Your absorption patterns show {level} transporter activity today. \
             Recent intake ({nutrients}) is creating good conditions for uptake at the brush border."
        ),
        (BodySystem::Intestinal, CommentaryBand::Moderate) => format!(
            "Intestinal uptake is {level}. Some of your recent intake ({nutrients}) competes for \
             shared transporters; consider spacing minerals two hours apart."
        ),
        (BodySystem::Intestinal, CommentaryBand::Weak) => format!(
            "Absorption is {level} right now. Competing factors in your recent intake \
             ({nutrients}) are crowding the same transporters; separate them across meals."
        ),
        (BodySystem::Hepatic, CommentaryBand::Strong) => format!(
            "Liver processing shows {level} support. Conversion and storage pathways are well \
             supplied by your recent intake ({nutrients})."
        ),
        (BodySystem::Hepatic, CommentaryBand::Moderate) => format!(
            "Hepatic activity is {level}. Your recent intake ({nutrients}) covers the basics; \
             B-vitamins and sulfur-rich foods would strengthen detoxification phases."
        ),
        (BodySystem::Hepatic, CommentaryBand::Weak) => format!(
            "Hepatic processing looks {level}. Recent intake ({nutrients}) is not giving the \
             liver much to work with; add cofactors for conversion and detoxification."
        ),
        (BodySystem::Circulatory, CommentaryBand::Strong) => format!(
            "Nutrient delivery is {level}. Transport proteins are carrying your recent intake \
             ({nutrients}) to tissues efficiently."
        ),
        (BodySystem::Circulatory, CommentaryBand::Moderate) => format!(
            "Circulatory transport is {level}. Recent intake ({nutrients}) is reaching tissues, \
             though steadier meal timing would keep carrier levels even."
        ),
        (BodySystem::Circulatory, CommentaryBand::Weak) => format!(
            "Transport capacity is {level}. Recent intake ({nutrients}) may not be reaching \
             tissues well; hydration and mineral balance can help."
        ),
        (BodySystem::Cellular, CommentaryBand::Strong) => format!(
            "Cellular utilization is {level}. Mitochondria are well supplied by your recent \
             intake ({nutrients})."
        ),
        (BodySystem::Cellular, CommentaryBand::Moderate) => format!(
            "Cellular energy production is {level}. Recent intake ({nutrients}) covers part of \
             what mitochondria need; antioxidants and CoQ10 sources would round it out."
        ),
        (BodySystem::Cellular, CommentaryBand::Weak) => format!(
            "Cellular utilization is {level}. Recent intake ({nutrients}) leaves gaps in energy \
             and repair cofactors."
        ),
    }
}
