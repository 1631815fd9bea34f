//! Employee list with edit/delete controls and the delete confirmation bar

use gpui::{
    div, prelude::FluentBuilder, Context, FontWeight, InteractiveElement, IntoElement,
    ParentElement, SharedString, StatefulInteractiveElement, Styled,
};

use employee_manager::manager::CONFIRM_DELETE_PROMPT;

use crate::app::App;

impl App {
    pub fn render_employee_list(&self, cx: &Context<Self>) -> impl IntoElement {
        let theme = &self.theme;
        let employees = self.manager.employees();
        let pending_delete = self.manager.pending_delete();
        let is_loading = self.manager.is_loading();

        div()
            .w_full()
            .flex()
            .flex_col()
            .gap_3()
            .child(
                div()
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(
                        div()
                            .text_lg()
                            .font_weight(FontWeight::SEMIBOLD)
                            .text_color(theme.primary)
                            .child("Employee List"),
                    )
                    .child(
                        div()
                            .id("load-all-btn")
                            .cursor_pointer()
                            .px_3()
                            .py_1()
                            .rounded_lg()
                            .border_1()
                            .border_color(theme.primary)
                            .text_sm()
                            .text_color(theme.primary)
                            .hover(|style| style.bg(theme.primary.opacity(0.15)))
                            .on_click(cx.listener(|this, _event, _window, cx| {
                                this.load_all(cx);
                            }))
                            .child("Get All Employees"),
                    ),
            )
            .when_some(pending_delete, |el, id| el.child(self.render_confirm_bar(id, cx)))
            .when(employees.is_empty(), |el| {
                el.child(
                    div()
                        .text_sm()
                        .text_color(theme.foreground_muted)
                        .child("No employees loaded."),
                )
            })
            .children(employees.iter().enumerate().map(|(idx, employee)| {
                let edit_target = employee.clone();
                let delete_id = employee.id;
                let is_pending = delete_id.is_some() && delete_id == pending_delete;

                div()
                    .w_full()
                    .p_3()
                    .rounded_md()
                    .bg(theme.background_secondary)
                    .border_1()
                    .border_color(if is_pending { theme.danger } else { theme.border })
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(
                        div()
                            .flex()
                            .flex_col()
                            .gap_1()
                            .child(
                                div()
                                    .text_sm()
                                    .font_weight(FontWeight::MEDIUM)
                                    .child(SharedString::from(format!("Name: {}", employee.name))),
                            )
                            .child(
                                div()
                                    .text_xs()
                                    .text_color(theme.foreground_muted)
                                    .child(SharedString::from(format!(
                                        "Salary: {}",
                                        employee.salary_text()
                                    ))),
                            )
                            .child(
                                div()
                                    .text_xs()
                                    .text_color(theme.foreground_muted)
                                    .child(SharedString::from(format!("City: {}", employee.city))),
                            ),
                    )
                    .child(
                        div()
                            .flex()
                            .gap_2()
                            .child(
                                div()
                                    .id(SharedString::from(format!("edit-{}", idx)))
                                    .px_3()
                                    .py_1()
                                    .rounded_lg()
                                    .bg(if is_loading {
                                        theme.foreground_muted
                                    } else {
                                        theme.secondary
                                    })
                                    .text_sm()
                                    .text_color(theme.background)
                                    .when(!is_loading, |el| {
                                        el.cursor_pointer()
                                            .hover(|style| style.bg(theme.secondary.opacity(0.8)))
                                            .on_click(cx.listener(move |this, _event, window, cx| {
                                                this.begin_edit(&edit_target, window, cx);
                                            }))
                                    })
                                    .child("Edit"),
                            )
                            .child(
                                div()
                                    .id(SharedString::from(format!("delete-{}", idx)))
                                    .px_3()
                                    .py_1()
                                    .rounded_lg()
                                    .text_sm()
                                    .text_color(theme.background)
                                    .bg(if delete_id.is_some() {
                                        theme.danger
                                    } else {
                                        theme.foreground_muted
                                    })
                                    .when_some(delete_id, |el, id| {
                                        el.cursor_pointer()
                                            .hover(|style| style.bg(theme.danger.opacity(0.8)))
                                            .on_click(cx.listener(move |this, _event, _window, cx| {
                                                this.request_remove(id, cx);
                                            }))
                                    })
                                    .child("Delete"),
                            ),
                    )
            }))
    }

    fn render_confirm_bar(&self, id: i64, cx: &Context<Self>) -> impl IntoElement {
        let theme = &self.theme;
        let name = self
            .manager
            .employees()
            .iter()
            .find(|e| e.id == Some(id))
            .map(|e| e.name.clone())
            .unwrap_or_else(|| format!("#{}", id));

        div()
            .w_full()
            .p_3()
            .rounded_md()
            .bg(theme.danger.opacity(0.15))
            .border_1()
            .border_color(theme.danger)
            .flex()
            .items_center()
            .justify_between()
            .child(
                div()
                    .flex()
                    .flex_col()
                    .child(div().text_sm().child(CONFIRM_DELETE_PROMPT))
                    .child(
                        div()
                            .text_xs()
                            .text_color(theme.foreground_muted)
                            .child(SharedString::from(name)),
                    ),
            )
            .child(
                div()
                    .flex()
                    .gap_2()
                    .child(
                        div()
                            .id("confirm-delete-btn")
                            .cursor_pointer()
                            .px_3()
                            .py_1()
                            .rounded_lg()
                            .bg(theme.danger)
                            .text_sm()
                            .text_color(theme.background)
                            .on_click(cx.listener(|this, _event, _window, cx| {
                                this.confirm_remove(cx);
                            }))
                            .child("Delete"),
                    )
                    .child(
                        div()
                            .id("cancel-delete-btn")
                            .cursor_pointer()
                            .px_3()
                            .py_1()
                            .rounded_lg()
                            .border_1()
                            .border_color(theme.border)
                            .text_sm()
                            .hover(|style| style.bg(theme.background_highlight))
                            .on_click(cx.listener(|this, _event, _window, cx| {
                                this.cancel_remove(cx);
                            }))
                            .child("Cancel"),
                    ),
            )
    }
}
