// Search ordering and matching guard rails.
mod support;

use anyhow::Result;
use proptest::prelude::*;
use ux_error_catalog::{CatalogIndex, SearchResult, search};

use support::{bundled, fixture_category, fixture_document, fixture_example, write_catalog};

fn hits(index: &CatalogIndex, query: &str) -> Vec<(bool, String)> {
    search(index, query)
        .into_iter()
        .map(|hit| (hit.is_category(), hit.id().to_string()))
        .collect()
}

#[test]
fn declined_matches_only_the_declined_card_example() {
    let results = search(bundled(), "declined");
    assert_eq!(results.len(), 1);
    match results[0] {
        SearchResult::Error { id, .. } => assert_eq!(id, "payment-declined"),
        SearchResult::Category { id, .. } => panic!("unexpected category hit {id}"),
    }
}

#[test]
fn payment_lists_category_then_examples_in_dataset_order() {
    assert_eq!(
        hits(bundled(), "payment"),
        vec![
            (true, "payment".to_string()),
            (false, "payment-declined".to_string()),
            (false, "payment-expired-card".to_string()),
            (false, "insufficient-balance".to_string()),
        ]
    );
}

#[test]
fn search_is_case_insensitive() {
    assert_eq!(search(bundled(), "PAYMENT"), search(bundled(), "payment"));
    assert_eq!(search(bundled(), "Offline"), search(bundled(), "oFFLINE"));
}

#[test]
fn blank_queries_are_empty() {
    assert!(search(bundled(), "").is_empty());
    assert!(search(bundled(), "   ").is_empty());
}

#[test]
fn unmatched_query_is_empty() {
    assert!(search(bundled(), "zzzz-no-such-thing").is_empty());
}

#[test]
fn categories_precede_examples() {
    // "validation" hits two category descriptions and several example tags.
    let results = hits(bundled(), "validation");
    assert_eq!(
        results,
        vec![
            (true, "form-input".to_string()),
            (true, "validation".to_string()),
            (false, "required-field".to_string()),
            (false, "invalid-email".to_string()),
            (false, "duplicate-username".to_string()),
        ]
    );
}

#[test]
fn dangling_example_is_still_searchable() {
    assert_eq!(
        hits(bundled(), "session"),
        vec![(false, "session-expired".to_string())]
    );
}

#[test]
fn each_searched_field_can_match_on_its_own() -> Result<()> {
    let mut only_bad = fixture_example("bad-msg", "c", "Plain", &[]);
    only_bad["bad_example"]["message"] = "quokka in bad copy".into();
    let mut only_good = fixture_example("good-msg", "c", "Plain", &[]);
    only_good["good_example"]["message"] = "quokka in good copy".into();
    let mut only_context = fixture_example("ctx", "c", "Plain", &[]);
    only_context["context"] = "quokka context".into();
    let only_title = fixture_example("title", "c", "Quokka title", &[]);
    let only_tag = fixture_example("tag", "c", "Plain", &["QUOKKA"]);
    let mut only_explanation = fixture_example("explanation", "c", "Plain", &[]);
    only_explanation["good_example"]["explanation"] = "quokka".into();

    let file = write_catalog(&fixture_document(
        vec![
            fixture_category("c", "Plain", "nothing here"),
            fixture_category("q", "Other", "a quokka description"),
        ],
        vec![
            only_bad,
            only_good,
            only_context,
            only_title,
            only_tag,
            only_explanation,
        ],
    ))?;
    let index = CatalogIndex::load(file.path())?;
    assert_eq!(
        hits(&index, "quokka"),
        vec![
            (true, "q".to_string()),
            (false, "bad-msg".to_string()),
            (false, "good-msg".to_string()),
            (false, "ctx".to_string()),
            (false, "title".to_string()),
            (false, "tag".to_string()),
        ]
    );
    Ok(())
}

proptest! {
    #[test]
    fn ascii_case_never_changes_results(query in "[a-zA-Z ]{0,12}") {
        let lower = search(bundled(), &query.to_ascii_lowercase());
        let upper = search(bundled(), &query.to_ascii_uppercase());
        prop_assert_eq!(lower, upper);
    }

    #[test]
    fn search_is_idempotent(query in "\\PC{0,10}") {
        prop_assert_eq!(search(bundled(), &query), search(bundled(), &query));
    }

    #[test]
    fn results_are_grouped_and_in_catalog_order(query in "[a-z]{1,4}") {
        let index = bundled();
        let results = search(index, &query);
        let split = results.iter().take_while(|hit| hit.is_category()).count();
        prop_assert!(results[split..].iter().all(|hit| !hit.is_category()));

        let category_positions: Vec<usize> = results[..split]
            .iter()
            .map(|hit| {
                index
                    .categories()
                    .iter()
                    .position(|category| category.id == hit.id())
                    .unwrap()
            })
            .collect();
        prop_assert!(category_positions.windows(2).all(|pair| pair[0] < pair[1]));

        let example_positions: Vec<usize> = results[split..]
            .iter()
            .map(|hit| {
                index
                    .examples()
                    .iter()
                    .position(|example| example.id == hit.id())
                    .unwrap()
            })
            .collect();
        prop_assert!(example_positions.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
