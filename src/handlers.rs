//! User actions: each one runs its HTTP call on the background executor

use gpui::{AppContext as _, ClickEvent, Context, Window};

use employee_manager::{Employee, EmployeeApi, FollowUp};

use crate::app::App;

impl App {
    /// Re-fetch the whole list, replacing the cache on success
    pub fn load_all(&mut self, cx: &mut Context<Self>) {
        let api_client = self.api_client.clone();
        cx.spawn(async move |this, cx| {
            let result = cx
                .background_spawn(async move { api_client.list() })
                .await;

            let _ = this.update(cx, |app, cx| {
                app.manager.apply_list(result);
                cx.notify();
            });
        })
        .detach();
    }

    pub fn submit(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if self.manager.is_loading() {
            return;
        }

        self.read_draft_from_inputs(cx);
        let request = match self.manager.begin_submit() {
            Ok(request) => request,
            Err(_) => {
                cx.notify();
                return;
            }
        };
        self.write_draft_to_inputs(window, cx);
        cx.notify();

        let api_client = self.api_client.clone();
        cx.spawn(async move |this, cx| {
            let outgoing = request.clone();
            let outcome = cx
                .background_spawn(async move { outgoing.send(&api_client) })
                .await;

            let _ = this.update(cx, |app, cx| {
                if app.manager.complete_submit(&request, outcome) == FollowUp::Reload {
                    app.load_all(cx);
                }
                cx.notify();
            });
        })
        .detach();
    }

    pub fn handle_submit_click(
        &mut self,
        _event: &ClickEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.submit(window, cx);
    }

    pub fn begin_edit(&mut self, employee: &Employee, window: &mut Window, cx: &mut Context<Self>) {
        if !self.manager.begin_edit(employee) {
            return;
        }
        self.write_draft_to_inputs(window, cx);
        cx.notify();
    }

    pub fn cancel_edit(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        self.manager.cancel_edit();
        self.write_draft_to_inputs(window, cx);
        cx.notify();
    }

    /// First step of a delete: show the confirmation bar
    pub fn request_remove(&mut self, id: i64, cx: &mut Context<Self>) {
        self.manager.request_remove(id);
        cx.notify();
    }

    pub fn cancel_remove(&mut self, cx: &mut Context<Self>) {
        self.manager.cancel_remove();
        cx.notify();
    }

    pub fn confirm_remove(&mut self, cx: &mut Context<Self>) {
        let Some(id) = self.manager.confirm_remove() else {
            return;
        };
        cx.notify();

        let api_client = self.api_client.clone();
        cx.spawn(async move |this, cx| {
            let outcome = cx
                .background_spawn(async move { api_client.delete(id) })
                .await;

            let _ = this.update(cx, |app, cx| {
                if app.manager.complete_remove(id, outcome) == FollowUp::Reload {
                    app.load_all(cx);
                }
                cx.notify();
            });
        })
        .detach();
    }

    pub fn dismiss_alert(&mut self, cx: &mut Context<Self>) {
        self.manager.dismiss_alert();
        cx.notify();
    }

    fn read_draft_from_inputs(&mut self, cx: &mut Context<Self>) {
        let name = self.name_input.read(cx).value().to_string();
        let salary = self.salary_input.read(cx).value().to_string();
        let city = self.city_input.read(cx).value().to_string();

        let draft = self.manager.draft_mut();
        draft.name = name;
        draft.salary = salary;
        draft.city = city;
    }

    fn write_draft_to_inputs(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let draft = self.manager.draft().clone();
        self.name_input.update(cx, |state, cx| {
            state.set_value(draft.name, window, cx);
        });
        self.salary_input.update(cx, |state, cx| {
            state.set_value(draft.salary, window, cx);
        });
        self.city_input.update(cx, |state, cx| {
            state.set_value(draft.city, window, cx);
        });
    }
}
