//! Contact form behavior through the update path.

use folio_gui::app::App;
use folio_gui::component::ToastType;
use folio_gui::message::{ContactMessage, Message};
use folio_gui::state::{AppState, ContactField, Settings};

fn app() -> App {
    App {
        state: AppState::with_settings(Settings::default()),
    }
}

fn fill_valid(app: &mut App) {
    let _ = app.update(Message::Contact(ContactMessage::NameChanged(
        "Ada Lovelace".into(),
    )));
    let _ = app.update(Message::Contact(ContactMessage::EmailChanged(
        "ada@example.com".into(),
    )));
    let _ = app.update(Message::Contact(ContactMessage::MessageChanged(
        "I have a project for you.".into(),
    )));
}

#[test]
fn submit_with_empty_form_blocks_and_shows_every_error() {
    let mut app = app();
    let _ = app.update(Message::Contact(ContactMessage::Submit));

    assert!(!app.state.contact.in_flight);
    for field in [ContactField::Name, ContactField::Email, ContactField::Message] {
        assert!(
            app.state.contact.visible_error(field).is_some(),
            "expected visible error for {field:?}"
        );
    }
}

#[test]
fn nine_character_message_blocks_ten_passes() {
    let mut app = app();
    fill_valid(&mut app);

    let _ = app.update(Message::Contact(ContactMessage::MessageChanged(
        "123456789".into(),
    )));
    let _ = app.update(Message::Contact(ContactMessage::Submit));
    assert!(!app.state.contact.in_flight);

    let _ = app.update(Message::Contact(ContactMessage::MessageChanged(
        "1234567890".into(),
    )));
    let _ = app.update(Message::Contact(ContactMessage::Submit));
    assert!(app.state.contact.in_flight);
}

#[test]
fn successful_delivery_clears_the_form_and_raises_a_toast() {
    let mut app = app();
    fill_valid(&mut app);
    let _ = app.update(Message::Contact(ContactMessage::Submit));
    let _ = app.update(Message::Contact(ContactMessage::Finished(Ok(()))));

    assert!(app.state.contact.submit_error.is_none());
    assert!(app.state.contact.name.is_empty());
    assert!(app.state.contact.message.is_empty());
    assert!(!app.state.contact.in_flight);

    let toast = app.state.toast.as_ref().expect("success toast");
    assert_eq!(toast.toast_type, ToastType::Success);
}

#[test]
fn failed_delivery_keeps_the_draft_for_another_try() {
    let mut app = app();
    fill_valid(&mut app);
    let _ = app.update(Message::Contact(ContactMessage::Submit));
    let _ = app.update(Message::Contact(ContactMessage::Finished(Err(
        "server unavailable".into(),
    ))));

    assert_eq!(
        app.state.contact.submit_error.as_deref(),
        Some("server unavailable")
    );
    assert_eq!(app.state.contact.name, "Ada Lovelace");
    assert!(app.state.toast.is_none(), "failures stay inline");

    let _ = app.update(Message::Contact(ContactMessage::DismissStatus));
    assert!(app.state.contact.submit_error.is_none());
}

#[test]
fn editing_a_field_clears_the_failure_banner() {
    let mut app = app();
    fill_valid(&mut app);
    let _ = app.update(Message::Contact(ContactMessage::Submit));
    let _ = app.update(Message::Contact(ContactMessage::Finished(Err(
        "timed out".into(),
    ))));
    assert!(app.state.contact.submit_error.is_some());

    let _ = app.update(Message::Contact(ContactMessage::NameChanged("A".into())));
    assert!(app.state.contact.submit_error.is_none());
}
