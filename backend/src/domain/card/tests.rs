//! Regression coverage for this module.

use super::*;
use rstest::rstest;

fn sample_card(owner: UserId) -> Card {
    Card::new(
        CardName::new("Lake view").expect("valid name"),
        CardLink::new("https://example.com/lake.jpg").expect("valid link"),
        owner,
    )
}

#[rstest]
#[case(1, false)]
#[case(2, true)]
#[case(30, true)]
#[case(31, false)]
fn card_name_length_limits(#[case] length: usize, #[case] ok: bool) {
    assert_eq!(CardName::new("n".repeat(length)).is_ok(), ok);
}

#[rstest]
#[case("https://example.com/x.jpg", true)]
#[case("http://x", true)]
#[case("file:///etc/passwd", false)]
#[case("nonsense", false)]
fn card_link_must_be_absolute_http_url(#[case] raw: &str, #[case] ok: bool) {
    assert_eq!(CardLink::new(raw).is_ok(), ok, "link: {raw:?}");
}

#[test]
fn card_id_rejects_malformed_input() {
    assert_eq!(CardId::parse("abc"), Err(CardValidationError::InvalidId));
}

#[test]
fn likes_behave_as_a_set() {
    let owner = UserId::random();
    let liker = UserId::random();
    let mut card = sample_card(owner);

    card.add_like(liker);
    card.add_like(liker);
    assert_eq!(card.likes(), [liker]);

    card.remove_like(&liker);
    card.remove_like(&liker);
    assert!(card.likes().is_empty());
}

#[test]
fn new_cards_start_unliked_and_owned() {
    let owner = UserId::random();
    let card = sample_card(owner);
    assert_eq!(card.owner(), &owner);
    assert!(card.likes().is_empty());
}

#[test]
fn serialized_card_uses_camel_case_keys() {
    let card = sample_card(UserId::random());
    let value = serde_json::to_value(&card).expect("serializable");
    let object = value.as_object().expect("object");
    assert!(object.contains_key("createdAt"));
    assert!(object.contains_key("owner"));
    assert!(object.contains_key("likes"));
}
