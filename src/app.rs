//! Core App state and initialization

use gpui::{
    div, AppContext as _, Context, Entity, InteractiveElement, IntoElement, ParentElement,
    Render, StatefulInteractiveElement, Styled, Window,
};
use gpui_component::input::{InputEvent, InputState};

use employee_manager::{ApiClient, AppConfig, EmployeeManager};

use crate::theme::MonokaiTheme;

/// Main window state
pub struct App {
    pub theme: MonokaiTheme,
    pub config: AppConfig,

    // API client
    pub api_client: ApiClient,

    // Cached list, draft and pending prompts
    pub manager: EmployeeManager,

    // Form inputs
    pub name_input: Entity<InputState>,
    pub salary_input: Entity<InputState>,
    pub city_input: Entity<InputState>,
}

impl App {
    pub fn new(
        config: AppConfig,
        api_client: ApiClient,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let name_input = cx.new(|cx| InputState::new(window, cx).placeholder("Employee Name"));
        let salary_input =
            cx.new(|cx| InputState::new(window, cx).placeholder("Employee Salary"));
        let city_input = cx.new(|cx| InputState::new(window, cx).placeholder("Employee City"));

        // Enter in any field submits the form
        for input in [&name_input, &salary_input, &city_input] {
            cx.subscribe_in(
                input,
                window,
                |this, _input: &Entity<InputState>, event: &InputEvent, window, cx| {
                    if let InputEvent::PressEnter { .. } = event {
                        this.submit(window, cx);
                    }
                },
            )
            .detach();
        }

        Self {
            theme: MonokaiTheme::new(),
            config,
            api_client,
            manager: EmployeeManager::new(),
            name_input,
            salary_input,
            city_input,
        }
    }

    pub fn initialize(&mut self, cx: &mut Context<Self>) {
        if self.config.load_on_start {
            self.load_all(cx);
        }
    }
}

impl Render for App {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = &self.theme;
        let alert = self.manager.alert().map(|notice| self.render_alert(notice, cx));

        div()
            .size_full()
            .relative()
            .bg(theme.background)
            .text_color(theme.foreground)
            .flex()
            .flex_col()
            .child(self.render_header())
            .child(
                div()
                    .flex_1()
                    .flex()
                    .overflow_hidden()
                    .child(
                        div()
                            .id("workspace")
                            .flex_1()
                            .flex()
                            .flex_col()
                            .gap_4()
                            .p_4()
                            .overflow_y_scroll()
                            .child(self.render_form(window, cx))
                            .child(self.render_employee_list(cx)),
                    )
                    .child(self.render_notice_history()),
            )
            .children(alert)
    }
}
