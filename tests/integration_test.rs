// Integration tests for closetx
use closetx::prelude::*;
use closetx::{categories_match, colors_match, pattern_matches, DuplicatePair};
use serde_json::json;
use std::sync::Arc;
use std::thread;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn full_tee(color: &str, neckline: &str, sleeves: &str) -> ItemAttributes {
    ItemAttributes::new("top", "t-shirt")
        .with(Attribute::Color, color)
        .with(Attribute::Pattern, "Solid")
        .with(Attribute::Neckline, neckline)
        .with(Attribute::Sleeves, sleeves)
        .with(Attribute::Silhouette, "Regular")
        .with(Attribute::Style, "Casual")
}

fn sample_records() -> Vec<ItemAttributes> {
    vec![
        full_tee("Black", "Crew", "Short"),
        full_tee("Navy", "V-Neck", "Long"),
        ItemAttributes::new("top", "t-shirt")
            .with(Attribute::Color, "Teal")
            .with(Attribute::Pattern, "plain"),
        ItemAttributes::new("bottom", "jeans")
            .with(Attribute::Color, "Blue")
            .with(Attribute::Silhouette, "Bootcut")
            .with(Attribute::Rise, "Mid"),
        ItemAttributes::new("bottom", "jeans")
            .with(Attribute::Color, "Navy")
            .with(Attribute::Silhouette, "Skinny")
            .with(Attribute::Length, "Cropped"),
        ItemAttributes::new("footwear", "boots")
            .with(Attribute::Color, "Brown")
            .with(Attribute::BootHeight, "Ankle")
            .with(Attribute::Material, "Leather"),
        ItemAttributes::new("outerwear", "coat")
            .with(Attribute::Color, "Camel")
            .with(Attribute::Style, "undefined"),
        ItemAttributes::default(),
    ]
}

#[test]
fn test_spec_scenarios() {
    init_tracing();

    let a = ItemAttributes::new("top", "t-shirt")
        .with(Attribute::Color, "Black")
        .with(Attribute::Neckline, "Crew")
        .with(Attribute::Sleeves, "Short")
        .with(Attribute::Style, "Casual");
    let b = ItemAttributes::new("top", "t-shirt")
        .with(Attribute::Color, "Black")
        .with(Attribute::Neckline, "Crew")
        .with(Attribute::Sleeves, "Long")
        .with(Attribute::Style, "Casual");
    assert_eq!(calculate_similarity_score(&a, &b), 86);

    let high = ItemAttributes::new("footwear", "heels")
        .with(Attribute::Color, "Black")
        .with(Attribute::HeelHeight, "High")
        .with(Attribute::Style, "Elegant");
    let low = ItemAttributes::new("footwear", "heels")
        .with(Attribute::Color, "Black")
        .with(Attribute::HeelHeight, "Low")
        .with(Attribute::Style, "Elegant");
    assert_eq!(calculate_similarity_score(&high, &low), 60);
}

#[test]
fn test_scores_always_in_range() {
    init_tracing();
    let records = sample_records();
    for a in &records {
        for b in &records {
            let score = calculate_similarity_score(a, b);
            assert!(score <= 100, "score {} out of range", score);
            assert_eq!(score_breakdown(a, b).score, score);
        }
    }
}

#[test]
fn test_category_gate_property() {
    let records = sample_records();
    for a in &records {
        for b in &records {
            if !categories_match(a, b) {
                assert_eq!(calculate_similarity_score(a, b), 0);
            }
        }
    }
}

#[test]
fn test_perfect_match_scores_100() {
    let a = full_tee("Navy", "Crew", "Short");
    let b = full_tee("Teal", "crew", "SHORT").with(Attribute::Pattern, "");
    // Pattern only on one side is not applicable; the rest match.
    assert_eq!(calculate_similarity_score(&a, &b), 100);
    assert_eq!(calculate_similarity_score(&a, &a), 100);
}

#[test]
fn test_case_insensitivity() {
    fn recase(item: &ItemAttributes, f: fn(&str) -> String) -> ItemAttributes {
        let mut out = ItemAttributes {
            category: item.category.as_deref().map(f),
            subcategory: item.subcategory.as_deref().map(f),
            ..ItemAttributes::default()
        };
        for attribute in Attribute::ALL {
            if let Some(value) = item.get(attribute) {
                out = out.with(attribute, f(value));
            }
        }
        out
    }

    let records = sample_records();
    for a in &records {
        for b in &records {
            let expected = calculate_similarity_score(a, b);
            let upper_a = recase(a, str::to_uppercase);
            let lower_b = recase(b, str::to_lowercase);
            assert_eq!(calculate_similarity_score(&upper_a, &lower_b), expected);
        }
    }
}

#[test]
fn test_no_common_attributes_is_zero() {
    let a = ItemAttributes::new("outerwear", "jacket").with(Attribute::Length, "Cropped");
    let b = ItemAttributes::new("outerwear", "jacket").with(Attribute::Material, "Denim");
    assert_eq!(calculate_similarity_score(&a, &b), 0);

    let breakdown = score_breakdown(&a, &b);
    assert!(breakdown.same_category);
    assert!(!breakdown.comparable());
}

#[test]
fn test_matchers_from_root_crate() {
    assert!(colors_match(Some("Navy"), Some("Blue")));
    assert!(!colors_match(Some("Black"), Some("Grey")));
    assert!(pattern_matches(Some(""), Some("solid")));
    assert!(pattern_matches(Some("solid"), Some("plain")));
    assert!(pattern_matches(Some("plain"), Some("")));
    assert!(!pattern_matches(Some("Striped"), Some("Floral")));
    assert_eq!(closetx::matchers::COLOR_FAMILIES.len(), 11);
}

#[test]
fn test_records_from_json() {
    let items: Vec<WardrobeItem> = serde_json::from_value(json!([
        {"id": "w-1", "category": "Footwear", "subcategory": "Boots", "color": "Tan", "bootHeight": "Knee"},
        {"id": "w-2", "category": "footwear", "subcategory": "boots", "color": "Cognac", "bootHeight": "knee", "heelHeight": "Flat"},
        {"id": 3, "category": "footwear", "subcategory": "sneakers", "color": "Tan"}
    ]))
    .unwrap();

    // color 35 + bootHeight 20 of 55
    assert_eq!(
        calculate_similarity_score(&items[0].attributes, &items[1].attributes),
        100
    );
    assert_eq!(items[2].id, ItemId::Integer(3));

    let detector = DuplicateDetector::default();
    let pairs: Vec<DuplicatePair> = detector.find_duplicate_pairs(&items);
    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].first, ItemId::from("w-1"));
}

#[test]
fn test_detector_config_file() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, r#"{{"threshold": 60, "includeBreakdown": true}}"#).unwrap();
    let config = DetectorConfig::from_file(file.path()).unwrap();
    let detector = DuplicateDetector::new(config).unwrap();

    let wardrobe: Vec<WardrobeItem> = sample_records()
        .into_iter()
        .enumerate()
        .map(|(i, attributes)| WardrobeItem::new(i as u64, attributes))
        .collect();
    let candidate = full_tee("Black", "Crew", "Long");

    let matches = detector.find_duplicates(&candidate, &wardrobe);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].id, ItemId::Integer(0));
    let breakdown = matches[0].breakdown.as_ref().unwrap();
    assert_eq!(breakdown.mismatches().collect::<Vec<_>>(), vec![Attribute::Sleeves]);
}

#[test]
fn test_concurrent_scoring() {
    let records = Arc::new(sample_records());
    let expected: Vec<u8> = records
        .iter()
        .flat_map(|a| records.iter().map(move |b| calculate_similarity_score(a, b)))
        .collect();
    let expected = Arc::new(expected);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let records = Arc::clone(&records);
            let expected = Arc::clone(&expected);
            thread::spawn(move || {
                let scores: Vec<u8> = records
                    .iter()
                    .flat_map(|a| records.iter().map(move |b| calculate_similarity_score(a, b)))
                    .collect();
                assert_eq!(scores, *expected);
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
