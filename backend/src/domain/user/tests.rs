//! Regression coverage for this module.

use super::*;
use rstest::rstest;

fn sample_user() -> User {
    User::new(
        UserId::random(),
        Email::new("a@b.com").expect("valid email"),
        UserName::new("Ada").expect("valid name"),
        About::new("Analyst").expect("valid about"),
        AvatarUrl::new("http://example.com/a.png").expect("valid avatar"),
    )
}

#[rstest]
#[case("not-a-uuid")]
#[case("")]
#[case("3fa85f64-5717-4562-b3fc")]
fn user_id_rejects_malformed_input(#[case] raw: &str) {
    assert_eq!(UserId::parse(raw), Err(UserValidationError::InvalidId));
}

#[test]
fn user_id_round_trips_through_strings() {
    let id = UserId::random();
    let parsed = UserId::parse(id.to_string()).expect("uuid text form");
    assert_eq!(parsed, id);
}

#[rstest]
#[case("a@b.com", true)]
#[case("  a@b.com  ", true)]
#[case("first.last@sub.example.org", true)]
#[case("missing-at.example.com", false)]
#[case("@b.com", false)]
#[case("a@", false)]
#[case("a@nodot", false)]
#[case("a@.com", false)]
#[case("a b@c.com", false)]
fn email_validation(#[case] raw: &str, #[case] ok: bool) {
    assert_eq!(Email::new(raw).is_ok(), ok, "email: {raw:?}");
}

#[test]
fn email_is_trimmed() {
    let email = Email::new("  a@b.com ").expect("valid email");
    assert_eq!(email.as_ref(), "a@b.com");
}

#[rstest]
#[case(1, false)]
#[case(2, true)]
#[case(30, true)]
#[case(31, false)]
fn name_length_limits(#[case] length: usize, #[case] ok: bool) {
    assert_eq!(UserName::new("a".repeat(length)).is_ok(), ok);
}

#[rstest]
#[case(1, false)]
#[case(2, true)]
#[case(200, true)]
#[case(201, false)]
fn about_length_limits(#[case] length: usize, #[case] ok: bool) {
    assert_eq!(About::new("x".repeat(length)).is_ok(), ok);
}

#[rstest]
#[case("http://x", true)]
#[case("https://example.com/pic.png", true)]
#[case("ftp://example.com/pic.png", false)]
#[case("not a url", false)]
#[case("/relative/path.png", false)]
fn avatar_must_be_absolute_http_url(#[case] raw: &str, #[case] ok: bool) {
    assert_eq!(AvatarUrl::new(raw).is_ok(), ok, "avatar: {raw:?}");
}

#[test]
fn serialized_user_exposes_profile_fields_only() {
    let user = sample_user();
    let value = serde_json::to_value(&user).expect("serializable");
    let object = value.as_object().expect("object");
    let mut keys: Vec<_> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["about", "avatar", "email", "id", "name"]);
}

#[test]
fn profile_updates_replace_only_their_fields() {
    let user = sample_user();
    let id = *user.id();
    let updated = user.clone().with_profile(
        UserName::new("Grace").expect("valid name"),
        About::new("Rear Admiral").expect("valid about"),
    );
    assert_eq!(updated.id(), &id);
    assert_eq!(updated.name().as_ref(), "Grace");
    assert_eq!(updated.avatar(), user.avatar());
}
