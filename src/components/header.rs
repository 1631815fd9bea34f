//! Header component

use gpui::{div, FontWeight, IntoElement, ParentElement, SharedString, Styled};

use crate::app::App;

impl App {
    pub fn render_header(&self) -> impl IntoElement {
        let theme = &self.theme;
        let count = self.manager.employees().len();

        div()
            .w_full()
            .px_4()
            .py_3()
            .bg(theme.background_secondary)
            .border_b_1()
            .border_color(theme.border)
            .flex()
            .items_center()
            .justify_between()
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_3()
                    .child(div().text_xl().child("👥"))
                    .child(
                        div()
                            .child(
                                div()
                                    .text_lg()
                                    .font_weight(FontWeight::BOLD)
                                    .text_color(theme.primary)
                                    .child("Employee Manager"),
                            )
                            .child(
                                div()
                                    .text_xs()
                                    .text_color(theme.foreground_muted)
                                    .child(SharedString::from(
                                        self.api_client.collection_url(),
                                    )),
                            ),
                    ),
            )
            .child(
                div()
                    .text_sm()
                    .text_color(theme.foreground_muted)
                    .child(SharedString::from(match count {
                        1 => "1 employee".to_string(),
                        n => format!("{} employees", n),
                    })),
            )
    }
}
