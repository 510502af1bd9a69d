mod common;

use osint_hub::domain::entities::{Category, TagQueryMode};

#[test]
fn test_session_walkthrough() {
    let mut session = common::create_test_session(Category::Domain, TagQueryMode::Legacy);
    assert_eq!(session.value(), "");

    session.set_value("example.com").unwrap();
    let crt = common::position_of(session.entries(), "https://crt.sh/?q=example.com");

    assert!(session.toggle_tag("Whois"));
    let visible: Vec<_> = session.visible_entries().iter().map(|(i, _)| *i).collect();
    assert!(!visible.contains(&crt));

    assert_eq!(session.toggle_mark(crt), Some(true));
    assert_eq!(session.marked_urls(), ["https://crt.sh/?q=example.com"]);

    assert!(
        session
            .launch_urls()
            .iter()
            .all(|url| !url.contains("crt.sh"))
    );

    session.clear_filters();
    assert_eq!(session.launch_urls().len(), session.entries().len());
}

#[test]
fn test_session_category_switch() {
    let mut session = common::create_test_session(Category::Domain, TagQueryMode::Legacy);
    session.set_value("example.com").unwrap();
    session.set_text_query("git");
    session.toggle_tag("DNS");
    session.toggle_mark(0);

    session.select_category(Category::Username).unwrap();
    session.set_value("alice").unwrap();

    assert!(session.filter().selected_tags.is_empty());
    assert!(session.marked_urls().is_empty());
    assert!(
        session
            .launch_urls()
            .contains(&"https://github.com/alice")
    );
}

#[test]
fn test_session_contains_mode_matches_partial_tag() {
    let mut session = common::create_test_session(Category::Domain, TagQueryMode::Contains);
    session.set_value("example.com").unwrap();
    session.set_text_query("cert");

    assert!(
        session
            .visible_entries()
            .iter()
            .any(|(_, e)| e.url == "https://crt.sh/?q=example.com")
    );
    assert!(
        !session
            .launch_urls()
            .contains(&"https://crt.sh/?q=example.com")
    );
}

#[test]
fn test_session_launch_list_needs_query_in_label_or_url() {
    let mut session = common::create_test_session(Category::Domain, TagQueryMode::Legacy);
    session.set_value("example.com").unwrap();
    session.set_text_query("dns records");

    assert!(!session.visible_entries().is_empty());
    assert!(session.launch_urls().is_empty());

    session.set_text_query("viewdns");
    let launch = session.launch_urls();
    assert!(!launch.is_empty());
    assert!(launch.iter().all(|url| url.contains("viewdns")));
}

#[test]
fn test_session_notes_survive_category_switch() {
    let mut session = common::create_test_session(Category::Domain, TagQueryMode::Legacy);
    session.set_notes("alice uses the same handle on gitlab");

    session.select_category(Category::Username).unwrap();
    session.set_value("alice").unwrap();

    assert_eq!(session.notes(), "alice uses the same handle on gitlab");
}

#[test]
fn test_session_tag_suggestions() {
    let session = common::create_test_session(Category::Domain, TagQueryMode::Legacy);

    let suggestions = session.tag_suggestions("dns");
    assert!(suggestions.contains(&"DNS"));
    assert!(suggestions.contains(&"DNSSEC"));
    assert!(suggestions.iter().all(|t| t.to_lowercase().starts_with("dns")));
}
