//! Pre-built Test Fixtures
//!
//! Ready-to-use FNOL documents for the common routing scenarios. The texts
//! are deliberately written the way real notices arrive: mixed label
//! spellings, bullets, currency symbols and CRLF line endings.

use crate::builders::FnolDocumentBuilder;

/// Fixture documents for triage tests
pub struct FnolFixtures;

impl FnolFixtures {
    /// Complete auto claim below the fast-track threshold
    pub fn fast_track_auto() -> String {
        FnolDocumentBuilder::new().build()
    }

    /// Complete injury claim with modest damage
    pub fn injury_claim() -> String {
        FnolDocumentBuilder::new()
            .with_claim_type("Injury")
            .with_estimated_damage("$12,000")
            .with_initial_estimate("$12,000")
            .with_description("Passenger suffered whiplash in a low speed collision")
            .build()
    }

    /// Complete claim whose description mentions a staged accident
    pub fn staged_collision() -> String {
        FnolDocumentBuilder::new()
            .with_description("Witness believes the collision was staged by both drivers")
            .build()
    }

    /// Complete claim whose initial estimate is five times the damage
    pub fn inflated_initial_estimate() -> String {
        FnolDocumentBuilder::new()
            .with_estimated_damage("$10,000")
            .with_initial_estimate("$50,000")
            .build()
    }

    /// A notice written with alternate labels, bullets and CRLF endings
    pub fn alternate_labels_property() -> String {
        [
            "ACME Mutual - Property Loss Notice",
            "",
            "* Policy No: HO-55-1200",
            "* Insured Name: Priya Natarajan",
            "* Policy Period: 2024-02-01 to 2025-01-31",
            "* Date of Loss: 2024-06-02",
            "* Time of Loss: 23:10",
            "* Location of Loss: 14 Elm Court, Riverton",
            "* Description of Loss: Burst pipe flooded the basement.",
            "  Water damage to drywall and flooring.",
            "",
            "* Claimant: Priya Natarajan",
            "* Phone: 555-0199",
            "* Property Type: Single family home",
            "* Registration: PARCEL-88-12",
            "* Damage Estimate: USD 32,500",
            "* Type of Claim: Property",
            "* Documents: Photos; plumber invoice",
            "* Preliminary Estimate: USD 30,000",
        ]
        .join("\r\n")
    }

    /// An unstructured email with no recognisable labels
    pub fn unstructured_email() -> String {
        "Hi,\n\nSomeone backed into my car in the parking lot yesterday. \
         Please call me back.\n\nThanks,\nSam"
            .to_string()
    }
}
