use super::*;

#[test]
fn validate_enquiry_accepts_complete_form() {
    assert_eq!(validate_enquiry("Priya", " priya@example.com ", "Need a resume"), Ok(()));
}

#[test]
fn validate_enquiry_requires_name_and_message() {
    assert_eq!(
        validate_enquiry("  ", "p@x.com", "hi"),
        Err("Please fill in your name and a message.")
    );
    assert_eq!(
        validate_enquiry("Priya", "p@x.com", "\n"),
        Err("Please fill in your name and a message.")
    );
}

#[test]
fn validate_enquiry_rejects_bad_email() {
    assert_eq!(
        validate_enquiry("Priya", "priya.example.com", "hi"),
        Err("Please enter a valid email address.")
    );
}
