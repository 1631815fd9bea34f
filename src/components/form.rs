//! Add/edit form

use gpui::{
    div, prelude::FluentBuilder, Context, Entity, FontWeight, InteractiveElement, IntoElement,
    ParentElement, StatefulInteractiveElement, Styled, Window,
};
use gpui_component::input::{Input, InputState};

use employee_manager::FormMode;

use crate::app::App;

impl App {
    pub fn render_form(&self, _window: &Window, cx: &Context<Self>) -> impl IntoElement {
        let theme = &self.theme;
        let is_loading = self.manager.is_loading();
        let is_editing = self.manager.mode() == FormMode::Update;

        div()
            .w_full()
            .p_4()
            .rounded_lg()
            .bg(theme.background_secondary)
            .border_1()
            .border_color(theme.border)
            .flex()
            .flex_col()
            .gap_3()
            .child(
                div()
                    .text_lg()
                    .font_weight(FontWeight::SEMIBOLD)
                    .text_color(theme.primary)
                    .child("Add/Edit Employee"),
            )
            .child(self.render_field("Employee Name", &self.name_input))
            .child(self.render_field("Employee Salary", &self.salary_input))
            .child(self.render_field("Employee City", &self.city_input))
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .child(
                        div()
                            .id("submit-btn")
                            .px_4()
                            .py_2()
                            .rounded_lg()
                            .bg(if is_loading {
                                theme.foreground_muted
                            } else {
                                theme.primary
                            })
                            .text_sm()
                            .font_weight(FontWeight::MEDIUM)
                            .text_color(theme.background)
                            .when(!is_loading, |el| {
                                el.cursor_pointer()
                                    .hover(|style| style.bg(theme.primary.opacity(0.8)))
                                    .on_click(cx.listener(Self::handle_submit_click))
                            })
                            .child(self.manager.submit_label()),
                    )
                    .when(is_editing && !is_loading, |el| {
                        el.child(
                            div()
                                .id("cancel-edit-btn")
                                .cursor_pointer()
                                .px_4()
                                .py_2()
                                .rounded_lg()
                                .border_1()
                                .border_color(theme.border)
                                .text_sm()
                                .text_color(theme.foreground_muted)
                                .hover(|style| style.bg(theme.background_highlight))
                                .on_click(cx.listener(|this, _event, window, cx| {
                                    this.cancel_edit(window, cx);
                                }))
                                .child("Cancel"),
                        )
                    }),
            )
    }

    fn render_field(&self, label: &'static str, input: &Entity<InputState>) -> impl IntoElement {
        let theme = &self.theme;

        div()
            .flex()
            .flex_col()
            .gap_1()
            .child(
                div()
                    .text_xs()
                    .text_color(theme.foreground_muted)
                    .child(label),
            )
            .child(Input::new(input))
    }
}
