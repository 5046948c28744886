//! Property tests for grouping and ordering determinism.

use proptest::prelude::*;

use arsenal::models::ResourceEntry;
use arsenal::render::group::{group_by_domain, sort_by_stars};
use arsenal::vocabulary::{Term, Vocabulary};

const DOMAINS: &[&str] = &["Security", "DevOps-SRE", "Systems-Tools"];

fn arb_entry() -> impl Strategy<Value = ResourceEntry> {
    (
        "[a-z]{1,12}",
        "[A-Za-z0-9 ]{1,20}",
        proptest::option::of(0u64..1_000_000),
        proptest::sample::subsequence(DOMAINS.to_vec(), 0..=DOMAINS.len()),
    )
        .prop_map(|(id, title, stars, domains)| ResourceEntry {
            id,
            title,
            github_stars: stars,
            domains: domains.into_iter().map(String::from).collect(),
            ..ResourceEntry::default()
        })
}

fn vocab() -> Vocabulary {
    Vocabulary {
        domains: DOMAINS.iter().map(|d| Term::plain(*d)).collect(),
        ..Vocabulary::default()
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: sorting is deterministic - a second sort of the same
    /// slice changes nothing.
    #[test]
    fn property_sort_is_stable_under_repetition(
        entries in proptest::collection::vec(arb_entry(), 0..24),
    ) {
        let mut first: Vec<&ResourceEntry> = entries.iter().collect();
        sort_by_stars(&mut first);
        let mut second = first.clone();
        sort_by_stars(&mut second);
        let first_ids: Vec<&str> = first.iter().map(|e| e.id.as_str()).collect();
        let second_ids: Vec<&str> = second.iter().map(|e| e.id.as_str()).collect();
        prop_assert_eq!(first_ids, second_ids);
    }

    /// PROPERTY: stars order is non-increasing, with missing counts last.
    #[test]
    fn property_stars_descending(
        entries in proptest::collection::vec(arb_entry(), 0..24),
    ) {
        let mut sorted: Vec<&ResourceEntry> = entries.iter().collect();
        sort_by_stars(&mut sorted);

        for pair in sorted.windows(2) {
            match (pair[0].github_stars, pair[1].github_stars) {
                (Some(a), Some(b)) => prop_assert!(a >= b),
                (None, Some(_)) => prop_assert!(false, "None must sort last"),
                _ => {}
            }
        }
    }

    /// PROPERTY: every entry in a domain group declares that domain, and
    /// every entry with a declared domain appears in that group.
    #[test]
    fn property_group_membership_exact(
        entries in proptest::collection::vec(arb_entry(), 0..24),
    ) {
        let groups = group_by_domain(&entries, &vocab());

        for (domain, members) in &groups {
            prop_assert!(!members.is_empty(), "empty groups are omitted");
            for member in members {
                prop_assert!(member.domains.iter().any(|d| d == domain));
            }
        }

        for entry in &entries {
            for domain in &entry.domains {
                let group = groups.iter().find(|(name, _)| name == domain);
                let members = &group.expect("declared domain must have a group").1;
                prop_assert!(members.iter().any(|m| std::ptr::eq(*m, entry)));
            }
        }
    }

    /// PROPERTY: groups follow vocabulary order.
    #[test]
    fn property_groups_in_vocabulary_order(
        entries in proptest::collection::vec(arb_entry(), 0..24),
    ) {
        let groups = group_by_domain(&entries, &vocab());
        let positions: Vec<usize> = groups
            .iter()
            .map(|(name, _)| DOMAINS.iter().position(|d| d == name).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
