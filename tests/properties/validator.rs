//! Property tests for the validator.

use proptest::prelude::*;

use arsenal::models::{Catalog, RawDate, ResourceEntry};
use arsenal::validate::{validate_catalog, Severity};
use arsenal::vocabulary::Vocabulary;

fn arb_entry() -> impl Strategy<Value = ResourceEntry> {
    (
        "[a-z0-9-]{0,16}",
        ".{0,64}",
        ".{0,80}",
        proptest::collection::vec("[A-Za-z-]{1,16}", 0..4),
        proptest::option::of("[0-9-]{0,12}"),
    )
        .prop_map(|(id, title, url, tags, added)| ResourceEntry {
            id,
            title,
            url,
            tags,
            added: added.map(RawDate::new),
            ..ResourceEntry::default()
        })
}

fn small_vocab() -> Vocabulary {
    serde_yaml_ng::from_str(
        r#"
domains: [Security]
types: [Tool]
maturity: [Battle-tested]
effort: [Low]
tags: [containers]
good_for: [production]
"#,
    )
    .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: validation never panics and never errors on data
    /// content, whatever the entries look like.
    #[test]
    fn property_validate_never_panics(
        entries in proptest::collection::vec(arb_entry(), 0..12),
    ) {
        let catalog = Catalog { resources: entries };
        let report = validate_catalog(&catalog, &small_vocab(), &[]);
        prop_assert_eq!(
            report.violations.len(),
            report.fatals() + report.warnings()
        );
    }

    /// PROPERTY: is_valid is exactly "no fatal violations".
    #[test]
    fn property_is_valid_matches_fatals(
        entries in proptest::collection::vec(arb_entry(), 0..12),
    ) {
        let catalog = Catalog { resources: entries };
        let report = validate_catalog(&catalog, &small_vocab(), &[]);
        prop_assert_eq!(report.is_valid(), report.fatals() == 0);
    }

    /// PROPERTY: fatal_lines lists one line per fatal violation, each
    /// carrying the id/field prefix.
    #[test]
    fn property_fatal_lines_match_fatals(
        entries in proptest::collection::vec(arb_entry(), 0..12),
    ) {
        let catalog = Catalog { resources: entries };
        let report = validate_catalog(&catalog, &small_vocab(), &[]);

        let lines = report.fatal_lines();
        prop_assert_eq!(lines.len(), report.fatals());
        for (line, violation) in lines.iter().zip(
            report.violations.iter().filter(|v| v.severity == Severity::Fatal)
        ) {
            let prefix = format!("{}/{}:", violation.entry_id, violation.field);
            prop_assert!(
                line.starts_with(&prefix),
                "line {:?} does not start with {:?}",
                line,
                prefix
            );
        }
    }
}
