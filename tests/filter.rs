mod common;

use osint_hub::application::services::FilterService;
use osint_hub::domain::entities::{Category, FilterState, RenderedEntry, TagQueryMode};

fn entry(url: &str, label: &str, tags: &[&str]) -> RenderedEntry {
    RenderedEntry::new(
        url.to_string(),
        tags.iter().map(|t| t.to_string()).collect(),
        label.to_string(),
    )
}

#[test]
fn test_selected_tag_hides_other_entries() {
    let entries = vec![
        entry("https://viewdns.info/dnsrecord/?domain=a.com", "viewdns.info", &["DNS", "Hosting"]),
        entry("https://who.is/whois/a.com", "who.is", &["Whois"]),
    ];
    let filter = FilterState::with_tags(["DNS"]);

    let visibility = FilterService::default().classify_visibility(&entries, &filter);
    assert_eq!(visibility, [true, false]);
}

#[test]
fn test_cert_query_against_crt_sh() {
    let entries = vec![entry("https://crt.sh/?q=a.com", "crt.sh", &["Certificates"])];
    let filter = FilterState::with_query("cert");

    let legacy = FilterService::new(TagQueryMode::Legacy);
    assert_eq!(legacy.classify_visibility(&entries, &filter), [false]);

    let contains = FilterService::new(TagQueryMode::Contains);
    assert_eq!(contains.classify_visibility(&entries, &filter), [true]);
}

#[test]
fn test_identity_filter_on_builtin_generation() {
    let generator = common::create_test_generator();
    let generation = generator.generate(Category::Username, "alice").unwrap();

    let visibility =
        FilterService::default().classify_visibility(&generation.entries, &FilterState::new());

    assert_eq!(visibility.len(), generation.entries.len());
    assert!(visibility.iter().all(|v| *v));
}

#[test]
fn test_every_tag_of_universe_selects_something() {
    let generator = common::create_test_generator();
    let service = FilterService::default();
    let generation = generator.generate(Category::Domain, "example.com").unwrap();

    for tag in generation.tags.iter() {
        let filter = FilterState::with_tags([tag]);
        let visible = service.visible_entries(&generation.entries, &filter);

        assert!(!visible.is_empty(), "{tag}");
        assert!(visible.iter().all(|e| e.has_tag(tag)));
    }
}

#[test]
fn test_tag_selection_is_union() {
    let generator = common::create_test_generator();
    let service = FilterService::default();
    let generation = generator.generate(Category::Domain, "example.com").unwrap();

    let whois = service.visible_indices(&generation.entries, &FilterState::with_tags(["Whois"]));
    let ssl = service.visible_indices(&generation.entries, &FilterState::with_tags(["SSL/TLS"]));
    let both = service.visible_indices(
        &generation.entries,
        &FilterState::with_tags(["Whois", "SSL/TLS"]),
    );

    let mut expected: Vec<usize> = whois.into_iter().chain(ssl).collect();
    expected.sort_unstable();
    expected.dedup();
    assert_eq!(both, expected);
}

#[test]
fn test_legacy_query_containing_a_tag_matches_it() {
    let generator = common::create_test_generator();
    let service = FilterService::new(TagQueryMode::Legacy);
    let generation = generator.generate(Category::Domain, "example.com").unwrap();

    let filter = FilterState::with_query("VIEWDNS");
    let visible = service.visible_entries(&generation.entries, &filter);

    assert!(visible.iter().any(|e| e.display_label == "viewdns.info"));
    assert!(
        visible
            .iter()
            .any(|e| e.display_label != "viewdns.info" && e.has_tag("DNS"))
    );
}

#[test]
fn test_text_and_tags_combine() {
    let generator = common::create_test_generator();
    let service = FilterService::new(TagQueryMode::Contains);
    let generation = generator.generate(Category::Domain, "example.com").unwrap();

    let filter = FilterState {
        selected_tags: ["DNS".to_string()].into(),
        text_query: "VIEWDNS".to_string(),
    };
    let visible = service.visible_entries(&generation.entries, &filter);

    assert!(!visible.is_empty());
    assert!(
        visible
            .iter()
            .all(|e| e.has_tag("DNS") && e.display_label == "viewdns.info")
    );
}
