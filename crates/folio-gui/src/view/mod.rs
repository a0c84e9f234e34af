//! Page views.
//!
//! The page is one scrollable column of sections; each section view is a
//! pure function of the state.

pub mod contact;
pub mod gallery;
pub mod hero;
pub mod skills;
pub mod timeline;

use iced::widget::{column, container, scrollable};
use iced::{Element, Length};

use crate::message::Message;
use crate::state::AppState;
use crate::theme::{SPACING_XL, SPACING_XXL};

/// Scrollable id of the page, used for programmatic scrolling.
pub fn page_scroll_id() -> iced::widget::Id {
    iced::widget::Id::new("page")
}

/// Build the full page.
pub fn view_page(state: &AppState) -> Element<'_, Message> {
    let sections = column![
        hero::view(state),
        skills::view(state),
        gallery::view(state),
        timeline::view(state),
        contact::view(state),
    ]
    .spacing(SPACING_XXL)
    .padding([SPACING_XL, SPACING_XXL])
    .max_width(1100.0);

    scrollable(container(sections).width(Length::Fill).center_x(Length::Fill))
        .id(page_scroll_id())
        .on_scroll(Message::PageScrolled)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
