use super::*;

#[test]
fn field_input_id_prefixes_name() {
    assert_eq!(field_input_id("user-name"), "field-user-name");
    assert_eq!(field_input_id("password"), "field-password");
}

#[test]
fn password_input_type_follows_visibility() {
    assert_eq!(password_input_type(false), "password");
    assert_eq!(password_input_type(true), "text");
}

#[test]
fn visibility_toggle_label_describes_next_action() {
    assert_eq!(visibility_toggle_label(false), "display the password");
    assert_eq!(visibility_toggle_label(true), "hide the password");
}

#[test]
fn visibility_icon_differs_per_state() {
    assert_ne!(visibility_icon(false), visibility_icon(true));
}
