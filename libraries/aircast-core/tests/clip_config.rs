/// Integration tests for clip configuration parsing
use aircast_core::xml::Element;
use aircast_core::{AircastError, Clip, ClipId, MetadataKey, Playlength};

fn parse(source: &str) -> Element {
    Element::parse(source).expect("well-formed element")
}

#[test]
fn parses_attribute_form_clip() {
    let element = parse(r#"<audioClip id="42" playlength="01:02:03" title="Intro"/>"#);
    let clip = Clip::from_config(&element).unwrap();

    assert_eq!(clip.id().map(ClipId::as_str), Some("42"));
    assert_eq!(clip.title(), Some("Intro"));
    assert_eq!(clip.playlength(), Some(Playlength::from_hms(1, 2, 3)));
    assert_eq!(clip.uri(), None);
}

#[test]
fn attribute_values_are_mirrored_into_the_record() {
    let element = parse(r#"<audioClip id="42" playlength="01:02:03" title="Intro"/>"#);
    let clip = Clip::from_config(&element).unwrap();

    assert_eq!(clip.get_metadata(&MetadataKey::Title), Some("Intro"));
    // The literal attribute text is stored, not a re-rendered form.
    assert_eq!(clip.get_metadata(&MetadataKey::Extent), Some("01:02:03"));

    let fragment = clip.metadata_xml().unwrap();
    assert!(fragment.contains("<metadata"));
    assert!(fragment.contains("<dc:title>Intro</dc:title>"));
    assert!(fragment.contains("<dcterms:extent>01:02:03</dcterms:extent>"));
}

#[test]
fn adopts_uri_attribute_without_store_interaction() {
    let element =
        parse(r#"<audioClip id="1" playlength="00:00:01" title="t" uri="/music/a.mp3"/>"#);
    let clip = Clip::from_config(&element).unwrap();

    assert_eq!(clip.uri(), Some("/music/a.mp3"));
    assert_eq!(
        clip.get_metadata(&MetadataKey::parse("uri")),
        None,
        "the locator must never enter the metadata record",
    );
}

#[test]
fn reads_title_and_playlength_from_metadata_child() {
    let element = parse(
        "<audioClip id=\"9\">\
            <metadata xmlns:dc=\"http://purl.org/dc/elements/1.1/\" \
                      xmlns:dcterms=\"http://purl.org/dc/terms/\">\
                <dcterms:extent>00:01:00</dcterms:extent>\
                <dc:title>From metadata</dc:title>\
            </metadata>\
         </audioClip>",
    );
    let clip = Clip::from_config(&element).unwrap();

    assert_eq!(clip.title(), Some("From metadata"));
    assert_eq!(clip.playlength(), Some(Playlength::from_hms(0, 1, 0)));
    // The imported fragment root carries the identifier.
    assert!(clip.metadata_xml().unwrap().starts_with("<audioClip id=\"9\">"));
}

#[test]
fn attributes_win_over_metadata_child_values() {
    let element = parse(
        "<audioClip id=\"1\" playlength=\"00:00:10\" title=\"A\">\
            <metadata>\
                <dc:title>B</dc:title>\
                <dcterms:extent>09:09:09</dcterms:extent>\
            </metadata>\
         </audioClip>",
    );
    let clip = Clip::from_config(&element).unwrap();

    assert_eq!(clip.title(), Some("A"));
    assert_eq!(clip.playlength(), Some(Playlength::from_hms(0, 0, 10)));
    // The record itself was replaced wholesale by the metadata child.
    assert_eq!(clip.get_metadata(&MetadataKey::Title), Some("B"));
    assert_eq!(clip.get_metadata(&MetadataKey::Extent), Some("09:09:09"));
}

#[test]
fn empty_extent_element_means_zero_duration() {
    let element = parse(
        "<audioClip id=\"1\" title=\"t\">\
            <metadata><dcterms:extent/></metadata>\
         </audioClip>",
    );
    let clip = Clip::from_config(&element).unwrap();
    assert_eq!(clip.playlength(), Some(Playlength::ZERO));
}

#[test]
fn empty_title_element_means_empty_title() {
    let element = parse(
        "<audioClip id=\"1\" playlength=\"00:00:01\">\
            <metadata><dc:title/></metadata>\
         </audioClip>",
    );
    let clip = Clip::from_config(&element).unwrap();
    assert_eq!(clip.title(), Some(""));
}

#[test]
fn rejects_wrong_element_name() {
    let element = parse(r#"<playlist id="1"/>"#);
    let err = Clip::from_config(&element).unwrap_err();
    assert!(matches!(err, AircastError::InvalidConfigElement(name) if name == "playlist"));
}

#[test]
fn rejects_missing_id_attribute() {
    let element = parse(r#"<audioClip playlength="00:00:01" title="t"/>"#);
    let err = Clip::from_config(&element).unwrap_err();
    assert!(matches!(err, AircastError::MissingAttribute(name) if name == "id"));
}

#[test]
fn rejects_second_metadata_child() {
    let element = parse(
        "<audioClip id=\"1\" playlength=\"00:00:01\" title=\"t\">\
            <metadata/>\
            <metadata/>\
         </audioClip>",
    );
    let err = Clip::from_config(&element).unwrap_err();
    assert!(matches!(err, AircastError::TooManyMetadataElements));
}

#[test]
fn rejects_unresolved_playlength() {
    let element = parse(r#"<audioClip id="1" title="t"/>"#);
    let err = Clip::from_config(&element).unwrap_err();
    assert!(matches!(err, AircastError::MissingRequiredField(field) if field == "playlength"));
}

#[test]
fn rejects_unresolved_title() {
    let element = parse(r#"<audioClip id="1" playlength="00:00:01"/>"#);
    let err = Clip::from_config(&element).unwrap_err();
    assert!(matches!(err, AircastError::MissingRequiredField(field) if field == "title"));
}

#[test]
fn rejects_malformed_playlength_attribute() {
    let element = parse(r#"<audioClip id="1" playlength="not-a-duration" title="t"/>"#);
    let err = Clip::from_config(&element).unwrap_err();
    assert!(matches!(err, AircastError::InvalidPlaylength(_)));
}

#[test]
fn failed_configuration_leaves_the_clip_unchanged() {
    let mut clip = Clip::new();
    let element = parse(
        "<audioClip id=\"1\" playlength=\"00:00:01\" title=\"t\">\
            <metadata/>\
            <metadata/>\
         </audioClip>",
    );
    assert!(clip.configure(&element).is_err());

    assert!(clip.id().is_none());
    assert!(clip.title().is_none());
    assert!(clip.playlength().is_none());
    assert!(clip.metadata_xml().is_none());
}

#[test]
fn already_set_fields_are_not_overwritten() {
    let mut clip = Clip::with_fields(
        Some(ClipId::new("existing")),
        "Existing title",
        Playlength::from_hms(0, 0, 10),
        None,
    );
    let element = parse(r#"<audioClip id="other" playlength="00:00:20" title="Other"/>"#);
    clip.configure(&element).unwrap();

    assert_eq!(clip.id().map(ClipId::as_str), Some("existing"));
    assert_eq!(clip.title(), Some("Existing title"));
    assert_eq!(clip.playlength(), Some(Playlength::from_hms(0, 0, 10)));
}

#[test]
fn summary_round_trips_through_the_parser() {
    let element = parse(r#"<audioClip id="42" playlength="01:02:03" title="Intro"/>"#);
    let clip = Clip::from_config(&element).unwrap();

    let reparsed = Clip::from_config(&parse(&clip.summary_xml())).unwrap();
    assert_eq!(reparsed.id(), clip.id());
    assert_eq!(reparsed.title(), clip.title());
    assert_eq!(reparsed.playlength(), clip.playlength());
}

// Summary attributes are escaped rather than emitted byte-for-byte, so the
// round trip holds for titles carrying XML metacharacters.
#[test]
fn summary_escapes_attribute_values() {
    let clip = Clip::with_fields(
        Some(ClipId::new("42")),
        "say \"hi\" & <go>",
        Playlength::from_hms(0, 0, 1),
        None,
    );
    let summary = clip.summary_xml();
    assert!(!summary.contains("<go>"));

    let reparsed = Clip::from_config(&parse(&summary)).unwrap();
    assert_eq!(reparsed.title(), Some("say \"hi\" & <go>"));
}

#[test]
fn summary_of_an_unconfigured_clip_renders_defaults() {
    let summary = Clip::new().summary_xml();
    assert_eq!(summary, r#"<audioClip id="" playlength="00:00:00" title=""/>"#);
}
