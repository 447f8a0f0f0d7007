// SPDX-License-Identifier: MPL-2.0
//! Sign-up form with client-side validation.
//!
//! Submission is cancelled when a validity check fails; either way the
//! form enters its "validated" state so per-field pass/fail styling shows
//! from then on.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{button, text, text_input, Column, Container, Text};
use iced::{Element, Length, Theme};

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 8;

/// The validated field values handed to the parent on success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub department: Option<String>,
}

/// Form state.
#[derive(Debug, Clone, Default)]
pub struct State {
    full_name: String,
    email: String,
    password: String,
    department: String,
    /// Set on first submit attempt; enables per-field error display.
    validated: bool,
}

/// Messages emitted by the form.
#[derive(Debug, Clone)]
pub enum Message {
    FullNameChanged(String),
    EmailChanged(String),
    PasswordChanged(String),
    DepartmentChanged(String),
    Submitted,
}

/// Effects the parent application must act on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// All checks passed; the parent owns what happens next.
    Submit(SubmittedForm),
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles a form message.
    pub fn handle_message(&mut self, message: Message) -> Effect {
        match message {
            Message::FullNameChanged(value) => {
                self.full_name = value;
                Effect::None
            }
            Message::EmailChanged(value) => {
                self.email = value;
                Effect::None
            }
            Message::PasswordChanged(value) => {
                self.password = value;
                Effect::None
            }
            Message::DepartmentChanged(value) => {
                self.department = value;
                Effect::None
            }
            Message::Submitted => {
                self.validated = true;

                if !self.is_valid() {
                    // Cancelled: the validated flag keeps errors visible.
                    return Effect::None;
                }

                let department = self.department.trim();
                Effect::Submit(SubmittedForm {
                    full_name: self.full_name.trim().to_string(),
                    email: self.email.trim().to_string(),
                    password: self.password.clone(),
                    department: if department.is_empty() {
                        None
                    } else {
                        Some(department.to_string())
                    },
                })
            }
        }
    }

    /// Clears every field and the validated flag.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether a submit attempt has happened.
    #[must_use]
    pub fn is_validated(&self) -> bool {
        self.validated
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.full_name_error().is_none()
            && self.email_error().is_none()
            && self.password_error().is_none()
    }

    fn full_name_error(&self) -> Option<&'static str> {
        if self.full_name.trim().is_empty() {
            Some("signup-error-name-required")
        } else {
            None
        }
    }

    fn email_error(&self) -> Option<&'static str> {
        if is_plausible_email(self.email.trim()) {
            None
        } else {
            Some("signup-error-email-invalid")
        }
    }

    fn password_error(&self) -> Option<&'static str> {
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            Some("signup-error-password-short")
        } else {
            None
        }
    }

    /// Field errors shown once the form is validated.
    fn visible_errors(&self) -> Vec<&'static str> {
        if !self.validated {
            return Vec::new();
        }
        [
            self.full_name_error(),
            self.email_error(),
            self.password_error(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

/// Loose shape check, not RFC compliance: something before the `@`, a dot
/// somewhere in the domain.
fn is_plausible_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
        }
        None => false,
    }
}

/// Renders the sign-up screen.
pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let title = Text::new(i18n.tr("signup-title")).size(typography::TITLE_LG);

    let full_name = text_input(&i18n.tr("signup-full-name-placeholder"), &state.full_name)
        .on_input(Message::FullNameChanged)
        .padding(spacing::XS);

    let email = text_input(&i18n.tr("signup-email-placeholder"), &state.email)
        .on_input(Message::EmailChanged)
        .padding(spacing::XS);

    let password = text_input(&i18n.tr("signup-password-placeholder"), &state.password)
        .on_input(Message::PasswordChanged)
        .secure(true)
        .padding(spacing::XS);

    let department = text_input(&i18n.tr("signup-department-placeholder"), &state.department)
        .on_input(Message::DepartmentChanged)
        .padding(spacing::XS);

    let submit = button(Text::new(i18n.tr("signup-submit-button")))
        .on_press(Message::Submitted)
        .padding([spacing::XS, spacing::LG])
        .style(styles::button::primary);

    let mut form = Column::new()
        .spacing(spacing::SM)
        .push(title)
        .push(full_name)
        .push(email)
        .push(password)
        .push(department)
        .push(submit);

    for error_key in state.visible_errors() {
        form = form.push(
            Text::new(i18n.tr(error_key))
                .size(typography::BODY_SM)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::DANGER_500),
                }),
        );
    }

    let panel = Container::new(form)
        .width(Length::Fixed(sizing::FORM_WIDTH))
        .padding(spacing::LG)
        .style(styles::container::panel);

    Container::new(panel)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .padding(spacing::XL)
        .into()
}
