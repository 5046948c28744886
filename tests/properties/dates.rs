//! Property tests for flexible date parsing and ordering.

use proptest::prelude::*;

use arsenal::models::FlexibleDate;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: parsing never panics on arbitrary small input.
    #[test]
    fn property_parse_never_panics(s in "(?s).{0,32}") {
        let _ = s.parse::<FlexibleDate>();
    }

    /// PROPERTY: a well-formed full date round-trips through Display.
    #[test]
    fn property_full_date_round_trips(
        year in 1970i32..=2100,
        month in 1u32..=12,
        day in 1u32..=28,
    ) {
        let s = format!("{year:04}-{month:02}-{day:02}");
        let date: FlexibleDate = s.parse().expect("constructed date must parse");
        prop_assert_eq!(date.to_string(), s);
    }

    /// PROPERTY: a well-formed year-month date round-trips through Display.
    #[test]
    fn property_year_month_round_trips(
        year in 1970i32..=2100,
        month in 1u32..=12,
    ) {
        let s = format!("{year:04}-{month:02}");
        let date: FlexibleDate = s.parse().expect("constructed date must parse");
        prop_assert_eq!(date.to_string(), s);
    }

    /// PROPERTY: ordering is consistent with the numeric components, with
    /// coarser granularity sorting before finer at equal prefixes.
    #[test]
    fn property_ordering_by_components(
        y1 in 2000i32..=2030,
        y2 in 2000i32..=2030,
        m in 1u32..=12,
    ) {
        let year_only: FlexibleDate = format!("{y1:04}").parse().unwrap();
        let with_month: FlexibleDate = format!("{y2:04}-{m:02}").parse().unwrap();

        if y1 == y2 {
            prop_assert!(year_only < with_month);
        } else {
            prop_assert_eq!(year_only < with_month, y1 < y2);
        }
    }

    /// PROPERTY: out-of-range months never parse.
    #[test]
    fn property_bad_month_rejected(year in 1970i32..=2100, month in 13u32..=99) {
        let s = format!("{year:04}-{month:02}");
        prop_assert!(s.parse::<FlexibleDate>().is_err());
    }
}
