//! Alert overlay and notice history panel

use gpui::{
    div, px, Context, FontWeight, Hsla, InteractiveElement, IntoElement, ParentElement,
    SharedString, StatefulInteractiveElement, Styled,
};

use employee_manager::{Notice, NoticeKind};

use crate::app::App;
use crate::theme::MonokaiTheme;

fn notice_style(theme: &MonokaiTheme, kind: NoticeKind) -> (&'static str, Hsla) {
    match kind {
        NoticeKind::Success => ("✓", theme.success),
        NoticeKind::Failure => ("⚠️", theme.error),
        NoticeKind::Invalid => ("!", theme.warning),
    }
}

impl App {
    /// Blocks the window until the user acknowledges it
    pub fn render_alert(&self, notice: &Notice, cx: &Context<Self>) -> impl IntoElement {
        let theme = &self.theme;
        let (icon, color) = notice_style(theme, notice.kind);

        div()
            .id("alert-overlay")
            .occlude()
            .absolute()
            .top_0()
            .left_0()
            .size_full()
            .bg(theme.background_secondary.opacity(0.7))
            .flex()
            .items_center()
            .justify_center()
            .child(
                div()
                    .w(px(420.))
                    .p_4()
                    .rounded_lg()
                    .bg(theme.background_elevated)
                    .border_1()
                    .border_color(color)
                    .flex()
                    .flex_col()
                    .gap_3()
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_2()
                            .child(div().text_color(color).child(icon))
                            .child(
                                div()
                                    .text_sm()
                                    .font_weight(FontWeight::MEDIUM)
                                    .child(SharedString::from(notice.text.clone())),
                            ),
                    )
                    .child(
                        div().flex().justify_end().child(
                            div()
                                .id("alert-ok-btn")
                                .cursor_pointer()
                                .px_4()
                                .py_1()
                                .rounded_lg()
                                .bg(theme.primary)
                                .text_sm()
                                .text_color(theme.background)
                                .hover(|style| style.bg(theme.primary.opacity(0.8)))
                                .on_click(cx.listener(|this, _event, _window, cx| {
                                    this.dismiss_alert(cx);
                                }))
                                .child("OK"),
                        ),
                    ),
            )
    }

    pub fn render_notice_history(&self) -> impl IntoElement {
        let theme = &self.theme;
        let notices = self.manager.notices();

        div()
            .w(px(280.))
            .h_full()
            .bg(theme.background_secondary)
            .border_l_1()
            .border_color(theme.border)
            .flex()
            .flex_col()
            .child(
                div()
                    .px_4()
                    .py_3()
                    .border_b_1()
                    .border_color(theme.border)
                    .text_sm()
                    .font_weight(FontWeight::SEMIBOLD)
                    .child("Activity"),
            )
            .child(
                div()
                    .id("notice-history")
                    .flex_1()
                    .overflow_y_scroll()
                    .p_3()
                    .flex()
                    .flex_col()
                    .gap_2()
                    .children(notices.iter().rev().map(|notice| {
                        let (icon, color) = notice_style(theme, notice.kind);
                        div()
                            .flex()
                            .gap_2()
                            .child(div().text_xs().text_color(color).child(icon))
                            .child(
                                div()
                                    .flex_1()
                                    .text_xs()
                                    .child(SharedString::from(notice.text.clone())),
                            )
                            .child(
                                div()
                                    .text_xs()
                                    .text_color(theme.foreground_muted)
                                    .child(SharedString::from(notice.timestamp.clone())),
                            )
                    })),
            )
    }
}
