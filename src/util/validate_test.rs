use super::*;

// =============================================================
// Email shape
// =============================================================

#[test]
fn accepts_plain_addresses() {
    assert!(is_valid_email("a@b.com"));
    assert!(is_valid_email("user.name@example.co.uk"));
}

#[test]
fn rejects_missing_or_doubled_at_signs() {
    assert!(!is_valid_email("plainaddress"));
    assert!(!is_valid_email("a@b@c"));
}

#[test]
fn rejects_empty_sides_and_whitespace() {
    assert!(!is_valid_email("@b.com"));
    assert!(!is_valid_email("a@"));
    assert!(!is_valid_email("a b@c.com"));
}

// =============================================================
// Form-level rules
// =============================================================

#[test]
fn login_requires_both_fields() {
    assert_eq!(login_input("", "x"), Err("Email is required"));
    assert_eq!(login_input("a@b.com", ""), Err("Password is required"));
    assert_eq!(login_input("not-an-email", "x"), Err("Invalid email address"));
    assert_eq!(login_input("a@b.com", "x"), Ok(()));
}

#[test]
fn login_trims_surrounding_whitespace_from_email() {
    assert_eq!(login_input("  a@b.com  ", "x"), Ok(()));
}

#[test]
fn register_enforces_the_username_minimum() {
    assert_eq!(register_input("", "a@b.com", "x"), Err("Username is required"));
    assert_eq!(
        register_input("ab", "a@b.com", "x"),
        Err("Username must be at least 3 characters")
    );
    assert_eq!(register_input("abc", "a@b.com", "x"), Ok(()));
}
