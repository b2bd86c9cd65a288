use super::*;

// =============================================================
// Embedded asset
// =============================================================

#[test]
fn embedded_catalog_parses() {
    let sections = parse_catalog(CATALOG_JSON).unwrap();
    assert!(!sections.is_empty());
}

#[test]
fn embedded_catalog_starts_with_fundamentals() {
    let sections = sections();
    assert_eq!(sections[0].title, "Fundamentals");
    let keys: Vec<&str> = sections[0].entries.iter().map(|e| e.key.as_str()).collect();
    assert_eq!(keys, vec!["HTML", "CSS", "JavaScript", "Accessibility"]);
}

#[test]
fn embedded_catalog_accessors_share_one_copy() {
    let a = sections().as_ptr();
    let b = sections().as_ptr();
    assert_eq!(a, b);
}

// =============================================================
// Topic normalization
// =============================================================

fn parse_one_entry(topics_json: &str) -> ContentEntry {
    let json = format!(
        r#"{{"sections":[{{"title":"S","content":[{{"key":"K","description":"d","topics":{topics_json}}}]}}]}}"#
    );
    let mut sections = parse_catalog(&json).unwrap();
    sections.remove(0).entries.remove(0)
}

#[test]
fn bare_string_topic_normalizes_to_title_only() {
    let entry = parse_one_entry(r#"["HTTPS"]"#);
    assert_eq!(entry.topics.len(), 1);
    assert_eq!(entry.topics[0].title, "HTTPS");
    assert_eq!(entry.topics[0].description, None);
    assert!(entry.topics[0].links.is_empty());
}

#[test]
fn titled_topic_with_url_gains_a_self_named_link() {
    let entry = parse_one_entry(r#"[{"title":"Flex","description":"layout","url":"https://x.test/flex"}]"#);
    let topic = &entry.topics[0];
    assert_eq!(topic.title, "Flex");
    assert_eq!(topic.description.as_deref(), Some("layout"));
    assert_eq!(topic.links.len(), 1);
    assert_eq!(topic.links[0].name, "Flex");
    assert_eq!(topic.links[0].url, "https://x.test/flex");
}

#[test]
fn name_keyed_topic_is_accepted() {
    let entry = parse_one_entry(r#"[{"name":"ARIA","description":"roles","url":"https://x.test/aria"}]"#);
    assert_eq!(entry.topics[0].title, "ARIA");
}

#[test]
fn resource_list_topic_keeps_all_links() {
    let entry = parse_one_entry(
        r#"[{"title":"Forms","description":"input","resources":[{"name":"A","url":"https://a.test"},{"name":"B","url":"https://b.test"}]}]"#,
    );
    let topic = &entry.topics[0];
    assert_eq!(topic.links.len(), 2);
    assert_eq!(topic.links[0].name, "A");
    assert_eq!(topic.links[1].name, "B");
}

#[test]
fn url_link_precedes_resource_links() {
    let entry = parse_one_entry(
        r#"[{"title":"T","url":"https://primary.test","resources":[{"name":"Extra","url":"https://extra.test"}]}]"#,
    );
    let topic = &entry.topics[0];
    assert_eq!(topic.links[0].url, "https://primary.test");
    assert_eq!(topic.links[1].url, "https://extra.test");
}

#[test]
fn mixed_topic_shapes_coexist_in_one_entry() {
    let entry = parse_one_entry(r#"["Plain", {"title":"Rich","url":"https://r.test"}]"#);
    assert_eq!(entry.topics.len(), 2);
    assert!(entry.topics[0].links.is_empty());
    assert_eq!(entry.topics[1].links.len(), 1);
}

#[test]
fn invalid_catalog_json_is_an_error() {
    assert!(parse_catalog("{\"sections\": 3}").is_err());
}

// =============================================================
// Real-data spot checks
// =============================================================

#[test]
fn security_topics_are_bare_strings() {
    let security = sections().iter().find(|s| s.title == "Security").unwrap();
    let topics = &security.entries[0].topics;
    assert_eq!(topics.len(), 6);
    assert!(topics.iter().all(|t| t.description.is_none() && t.links.is_empty()));
}

#[test]
fn accessibility_topics_survive_name_keying() {
    let fundamentals = sections().iter().find(|s| s.title == "Fundamentals").unwrap();
    let accessibility = fundamentals.entries.iter().find(|e| e.key == "Accessibility").unwrap();
    assert_eq!(accessibility.topics.len(), 12);
    assert_eq!(accessibility.topics[0].title, "The Why of Accessibility");
    assert_eq!(accessibility.topics[0].links.len(), 1);
}

#[test]
fn html_topics_keep_their_resource_lists() {
    let fundamentals = sections().iter().find(|s| s.title == "Fundamentals").unwrap();
    let html = fundamentals.entries.iter().find(|e| e.key == "HTML").unwrap();
    let basic_tags = html.topics.iter().find(|t| t.title == "Basic Tags").unwrap();
    assert_eq!(basic_tags.links.len(), 3);
}
