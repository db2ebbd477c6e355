use super::*;

fn valid_form() -> ContactForm {
    ContactForm {
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        subject: "Hello".to_string(),
        message: "0123456789".to_string(),
    }
}

#[test]
fn it_accepts_a_complete_form() {
    assert_eq!(valid_form().validate(), Ok(()));
}

#[test]
fn it_rejects_short_messages() {
    let mut form = valid_form();
    form.message = "012345678".to_string();

    let errors = form.validate().unwrap_err();
    assert_eq!(
        errors.message.as_deref(),
        Some("Message must be at least 10 characters long")
    );
    assert!(errors.name.is_none());
    assert!(errors.email.is_none());
    assert!(errors.subject.is_none());
}

#[test]
fn it_counts_characters_not_bytes() {
    let mut form = valid_form();
    form.message = "éééééééééé".to_string();
    assert_eq!(form.validate(), Ok(()));
}

#[test]
fn it_reports_every_invalid_field() {
    let form = ContactForm {
        name: "   ".to_string(),
        email: "not-an-email".to_string(),
        subject: "".to_string(),
        message: "hi".to_string(),
    };

    let errors = form.validate().unwrap_err();
    assert_eq!(errors.get(ContactField::Name), Some("Name is required"));
    assert_eq!(
        errors.get(ContactField::Email),
        Some("Please enter a valid email address")
    );
    assert_eq!(errors.get(ContactField::Subject), Some("Subject is required"));
    assert!(errors.get(ContactField::Message).is_some());
}

#[test]
fn it_validates_email_shape() {
    assert!(validate_email("a@b.co").is_none());
    assert!(validate_email("a@b").is_some());
    assert!(validate_email("a b@c.com").is_some());
    assert!(validate_email("@c.com").is_some());
}

#[test]
fn it_suggests_common_domains_for_typos() {
    assert_eq!(
        suggest_email("a@gmail.co"),
        Some("Did you mean a@gmail.com?".to_string())
    );
    assert_eq!(suggest_email("a@gmail.com"), None);
    assert_eq!(suggest_email("a@example.org"), None);
    assert_eq!(suggest_email("broken"), None);
}

#[test]
fn it_clears_a_single_field_error() {
    let mut errors = ContactForm::default().validate().unwrap_err();
    errors.clear(ContactField::Name);
    assert!(errors.name.is_none());
    assert!(errors.email.is_some());
}

#[test]
fn it_cycles_fields() {
    assert_eq!(ContactField::Name.next(), ContactField::Email);
    assert_eq!(ContactField::Message.next(), ContactField::Name);
    assert_eq!(ContactField::Name.previous(), ContactField::Message);
}
