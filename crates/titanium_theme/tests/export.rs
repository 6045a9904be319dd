use serde_json::json;
use titanium_theme::{Easing, FontWeight, Tokens};

#[test]
fn table_serializes_with_camel_case_keys() {
    let value = serde_json::to_value(Tokens::titanium()).unwrap();

    for group in [
        "colors",
        "spacing",
        "typography",
        "shapes",
        "shadows",
        "touch",
        "animations",
    ] {
        assert!(value.get(group).is_some(), "missing group {group}");
    }

    assert_eq!(value["colors"]["bgPrimary"], json!("#f0f2f5"));
    assert_eq!(value["colors"]["accentPrimaryHover"], json!("#0044cc"));
    assert_eq!(value["colors"]["statusWarningText"], json!("#cc8800"));
    assert_eq!(value["typography"]["fontDisplay"], json!("Inter"));
    assert_eq!(value["typography"]["text2xl"], json!(24.0));
    assert_eq!(value["shapes"]["chamferXl"], json!(30.0));
    assert_eq!(value["shapes"]["borderWidthSm"], json!(1.0));
    assert_eq!(value["shadows"]["md"]["offsetY"], json!(4.0));
    assert_eq!(value["shadows"]["xl"]["elevation"], json!(10));
    assert_eq!(value["touch"]["minTargetSize"], json!(44.0));
}

#[test]
fn spacing_keys_are_scale_steps_not_field_names() {
    let value = serde_json::to_value(Tokens::titanium().spacing).unwrap();

    assert_eq!(value["0"], json!(0.0));
    assert_eq!(value["4"], json!(16.0));
    assert_eq!(value["32"], json!(128.0));

    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 14);
    assert!(object.keys().all(|k| k.parse::<u32>().is_ok()));
}

#[test]
fn weights_are_numbers_and_easing_is_a_css_keyword() {
    let value = serde_json::to_value(Tokens::titanium()).unwrap();

    assert_eq!(value["typography"]["weightRegular"], json!(400));
    assert_eq!(value["typography"]["weightBold"], json!(700));
    assert_eq!(value["animations"]["easingStandard"], json!("ease-in-out"));
    assert_eq!(value["animations"]["durationFast"], json!(150));
}

#[test]
fn colors_serialize_as_hex_strings() {
    let value = serde_json::to_value(Tokens::titanium().colors).unwrap();
    let object = value.as_object().unwrap();

    assert_eq!(object.len(), 39);
    for (key, color) in object {
        let text = color.as_str().unwrap_or_else(|| panic!("{key} not a string"));
        assert!(
            text.starts_with('#') && text.len() == 7,
            "{key} should be an opaque hex string, got {text}"
        );
    }
}

#[test]
fn table_round_trips_through_json() {
    let original = Tokens::titanium();
    let text = serde_json::to_string(&original).unwrap();
    let parsed: Tokens = serde_json::from_str(&text).unwrap();

    assert_eq!(
        serde_json::to_value(&parsed).unwrap(),
        serde_json::to_value(&original).unwrap()
    );
}

#[test]
fn out_of_set_weights_and_easings_are_rejected() {
    assert!(serde_json::from_str::<FontWeight>("450").is_err());
    assert!(serde_json::from_str::<FontWeight>("\"bold\"").is_err());
    assert!(serde_json::from_str::<Easing>("\"bounce\"").is_err());
}
