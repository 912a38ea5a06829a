use super::GuideIndex;

#[test]
fn it_retrieves_a_matching_document() {
    let context = GuideIndex::retrieve("tell me about a waterfall near ranchi").unwrap();
    assert!(context.starts_with("Relevant Information: "));
    assert!(context.contains("Dassam Falls"));
}

#[test]
fn it_retrieves_multiple_documents() {
    let context = GuideIndex::retrieve("souvenir temple shopping in deoghar").unwrap();
    assert!(context.contains("Dhokra Art"));
    assert!(context.contains("Wooden Crafts and Toys"));
    assert!(context.contains("Baidyanath Jyotirlinga Temple"));
}

#[test]
fn it_matches_case_insensitively() {
    let context = GuideIndex::retrieve("NETARHAT").unwrap();
    assert!(context.contains("Queen of Chotanagpur"));
}

#[test]
fn it_matches_whole_tokens_only() {
    // "waterfalls" is not the keyword "waterfall".
    assert!(GuideIndex::retrieve("waterfalls").is_none());
}

#[test]
fn it_returns_none_without_matches() {
    assert!(GuideIndex::retrieve("what is the weather like").is_none());
    assert!(GuideIndex::retrieve("").is_none());
}

#[test]
fn it_covers_sites_culture_and_artisans() {
    let artisans = super::GUIDE_DOCUMENTS
        .iter()
        .filter(|doc| return doc.kind == super::DocumentKind::Artisan)
        .count();
    let sites = super::GUIDE_DOCUMENTS
        .iter()
        .filter(|doc| return doc.kind == super::DocumentKind::Site)
        .count();

    assert_eq!(artisans, 2);
    assert_eq!(sites, 3);
}
