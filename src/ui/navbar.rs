// SPDX-License-Identifier: MPL-2.0
//! Top navigation bar: brand, catalogue section links, notification
//! inbox button with unread badge, and the session area.

use crate::api::EventKind;
use crate::i18n::fluent::I18n;
use crate::session::Session;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, tooltip, Container, Row, Space, Text};
use iced::{Element, Length};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub session: Option<&'a Session>,
    pub unread_count: usize,
    /// Section links only act on the catalogue screen.
    pub on_catalogue: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    OpenCatalogue,
    OpenNotifications,
    OpenSignUp,
    SectionLinkClicked(EventKind),
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let brand = button(Text::new(ctx.i18n.tr("window-title")).size(typography::TITLE_MD))
        .on_press(Message::OpenCatalogue)
        .padding(spacing::XS)
        .style(styles::button::link);

    let mut row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(brand);

    if ctx.on_catalogue {
        for kind in EventKind::ALL {
            let link = button(Text::new(ctx.i18n.tr(kind.heading_key())).size(typography::BODY))
                .on_press(Message::SectionLinkClicked(kind))
                .padding(spacing::XXS)
                .style(styles::button::link);
            row = row.push(link);
        }
    }

    row = row.push(Space::new().width(Length::Fill).height(Length::Shrink));

    let bell_label = if ctx.unread_count > 0 {
        format!(
            "{} ({})",
            ctx.i18n.tr("navbar-notifications-button"),
            ctx.unread_count
        )
    } else {
        ctx.i18n.tr("navbar-notifications-button")
    };
    let bell = button(Text::new(bell_label).size(typography::BODY))
        .on_press(Message::OpenNotifications)
        .padding(spacing::XS)
        .style(styles::button::link);
    row = row.push(styles::tooltip::styled(
        bell,
        ctx.i18n.tr("navbar-notifications-tooltip"),
        tooltip::Position::Bottom,
    ));

    if ctx.unread_count > 0 {
        let badge = Container::new(
            Text::new(ctx.unread_count.to_string()).size(typography::CAPTION),
        )
        .padding([spacing::XXS / 2.0, spacing::XXS])
        .style(styles::container::badge);
        row = row.push(badge);
    }

    match ctx.session {
        Some(session) => {
            row = row.push(
                Text::new(session.display_name.clone())
                    .size(typography::BODY),
            );
        }
        None => {
            let sign_up = button(Text::new(ctx.i18n.tr("navbar-signup-button")))
                .on_press(Message::OpenSignUp)
                .padding(spacing::XS)
                .style(styles::button::primary);
            row = row.push(styles::tooltip::styled(
                sign_up,
                ctx.i18n.tr("navbar-signup-tooltip"),
                tooltip::Position::Bottom,
            ));
        }
    }

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::navbar)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_renders_anonymous_on_catalogue() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            session: None,
            unread_count: 0,
            on_catalogue: true,
        };
        let _element = view(ctx);
    }

    #[test]
    fn navbar_renders_signed_in_with_unread_badge() {
        let i18n = I18n::default();
        let session = Session {
            display_name: "Avery Quinn".to_string(),
        };
        let ctx = ViewContext {
            i18n: &i18n,
            session: Some(&session),
            unread_count: 4,
            on_catalogue: false,
        };
        let _element = view(ctx);
    }
}
