use super::Intent;

#[test]
fn it_parses_intents() {
    assert_eq!(Intent::parse("itinerary"), Some(Intent::Itinerary));
    assert_eq!(Intent::parse("souvenir"), Some(Intent::Souvenir));
    assert_eq!(Intent::parse("location"), Some(Intent::Location));
    assert_eq!(Intent::parse("language"), Some(Intent::Language));
}

#[test]
fn it_rejects_unknown_intents() {
    assert_eq!(Intent::parse("weather"), None);
    assert_eq!(Intent::parse(""), None);
}

#[test]
fn it_falls_back_to_language_help() {
    assert_eq!(Intent::fallback(), Intent::Language);
}
