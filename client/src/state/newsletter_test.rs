use super::*;

#[test]
fn malformed_address_is_rejected() {
    let status = submit_newsletter("not-an-email");
    assert_eq!(status, NEWSLETTER_REJECTED);
    assert!(status.is_error());
    assert_eq!(status.style(), "color: #ffd1d1");
}

#[test]
fn well_formed_address_is_accepted() {
    let status = submit_newsletter("user@example.com");
    assert_eq!(status, NEWSLETTER_ACCEPTED);
    assert!(!status.is_error());
}

#[test]
fn empty_field_is_rejected() {
    assert_eq!(submit_newsletter(""), NEWSLETTER_REJECTED);
}

#[test]
fn rejected_address_stays_in_the_field() {
    let status = submit_newsletter("not-an-email");
    assert_eq!(next_value("not-an-email", status), "not-an-email");
}

#[test]
fn accepted_address_clears_the_field() {
    let status = submit_newsletter("user@example.com");
    assert_eq!(next_value("user@example.com", status), "");
}
