// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Composes the navbar, the active screen, and the two floating layers
//! (busy overlay, toast stack) into one element tree.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::session::Session;
use crate::ui::components::busy_overlay;
use crate::ui::design_tokens::spacing;
use crate::ui::{catalogue, feed, navbar, search_bar, sign_up, toasts};
use iced::alignment::Horizontal;
use iced::widget::{Column, Container, Stack};
use iced::{Element, Length, Padding};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub session: Option<&'a Session>,
    pub search: &'a search_bar::State,
    pub catalogue: &'a catalogue::State,
    pub feed: &'a feed::State,
    pub sign_up: &'a sign_up::State,
    pub overlay: &'a busy_overlay::State,
    pub toasts: &'a toasts::Manager,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar_view = navbar::view(navbar::ViewContext {
        i18n: ctx.i18n,
        session: ctx.session,
        unread_count: ctx.feed.unread_count(),
        on_catalogue: ctx.screen == Screen::Catalogue,
    })
    .map(Message::Navbar);

    let mut root = Column::new().push(navbar_view);

    if ctx.screen == Screen::Catalogue {
        let search_view = search_bar::view(ctx.search, ctx.i18n).map(Message::Search);
        root = root.push(
            Container::new(search_view)
                .width(Length::Fill)
                .align_x(Horizontal::Right)
                .padding(Padding {
                    top: spacing::XS,
                    right: spacing::MD,
                    bottom: spacing::XXS,
                    left: spacing::MD,
                }),
        );
    }

    let screen_view: Element<'_, Message> = match ctx.screen {
        Screen::Catalogue => catalogue::view(ctx.catalogue, ctx.i18n).map(Message::Catalogue),
        Screen::Notifications => feed::view(ctx.feed, ctx.i18n).map(Message::Feed),
        Screen::SignUp => sign_up::view(ctx.sign_up, ctx.i18n).map(Message::SignUp),
    };

    root = root.push(
        Container::new(screen_view)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    let mut stack = Stack::new().push(
        Container::new(root)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    if ctx.overlay.is_active() {
        stack = stack.push(busy_overlay::view(ctx.overlay, ctx.i18n));
    }

    stack = stack.push(toasts::view::overlay(ctx.toasts, ctx.i18n).map(Message::Toast));

    stack.into()
}
