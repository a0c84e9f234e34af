//! Text field component with validation display.

use iced::widget::{Space, column, row, text, text_input};
use iced::{Element, Length, Theme};
use iced_fonts::lucide;

use crate::theme::{PortfolioColors, styles};

/// A text input field with label, optional required marker, and an inline
/// validation error line.
///
/// # Example
/// ```ignore
/// TextField::new("Name", &form.name, "Your name", |s| {
///     Message::Contact(ContactMessage::NameChanged(s))
/// })
/// .required(true)
/// .error(form.visible_error(ContactField::Name).map(|e| e.message(ContactField::Name)))
/// .view()
/// ```
pub struct TextField<M> {
    label: String,
    value: String,
    placeholder: String,
    on_change: Box<dyn Fn(String) -> M>,
    required: bool,
    disabled: bool,
    error: Option<String>,
}

impl<M: Clone + 'static> TextField<M> {
    /// Create a new text field.
    pub fn new(
        label: impl Into<String>,
        value: &str,
        placeholder: impl Into<String>,
        on_change: impl Fn(String) -> M + 'static,
    ) -> Self {
        Self {
            label: label.into(),
            value: value.to_string(),
            placeholder: placeholder.into(),
            on_change: Box::new(on_change),
            required: false,
            disabled: false,
            error: None,
        }
    }

    /// Mark the field as required.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Disable input (while a submission is in flight).
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set an error message to display under the input.
    pub fn error(mut self, error: Option<impl Into<String>>) -> Self {
        self.error = error.map(Into::into);
        self
    }

    /// Build the text field element.
    pub fn view(self) -> Element<'static, M> {
        let has_error = self.error.is_some();

        let label_text = if self.required {
            format!("{} *", self.label)
        } else {
            self.label.clone()
        };

        let error_el: Element<'static, M> = if let Some(err) = self.error {
            row![
                lucide::circle_alert().size(12).style(|theme: &Theme| {
                    iced::widget::text::Style {
                        color: Some(theme.extended_palette().danger.base.color),
                    }
                }),
                Space::new().width(4.0),
                text(err).size(11).style(|theme: &Theme| {
                    iced::widget::text::Style {
                        color: Some(theme.extended_palette().danger.base.color),
                    }
                }),
            ]
            .into()
        } else {
            Space::new().height(0.0).into()
        };

        let mut input = text_input(&self.placeholder, &self.value)
            .padding([10.0, 12.0])
            .size(14)
            .width(Length::Fill)
            .style(if has_error {
                styles::text_input_error
            } else {
                styles::text_input_default
            });

        if !self.disabled {
            let on_change = self.on_change;
            input = input.on_input(move |s| on_change(s));
        }

        column![
            text(label_text).size(12).style(|theme: &Theme| {
                iced::widget::text::Style {
                    color: Some(theme.folio().text_muted),
                }
            }),
            Space::new().height(4.0),
            input,
            error_el,
        ]
        .spacing(2.0)
        .into()
    }
}
