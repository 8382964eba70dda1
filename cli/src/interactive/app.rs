//! Interactive dashboard application
//!
//! Key handling is a plain reducer over [`DashboardState`] and the router so
//! it can be tested without a terminal; the iocraft component only wires
//! terminal events into it and draws the result.

use super::components::{rgb_color, HelpBar, Sidebar};
use super::pages::PageContent;
use super::router::{RouteNotFound, RouterHandle};
use anyhow::Result;
use hms_core::form::{Age, Choice, FormField, PatientForm};
use hms_core::{
    theme, Acknowledgement, DashboardConfig, Page, PageRegistry, PendingBackend, Predictor,
    RenderContext, RouteId, Router,
};
use iocraft::prelude::*;
use tracing::{debug, info, warn};

/// Longest diagnosis accepted from the keyboard
pub const MAX_DIAGNOSIS_LEN: usize = 80;

/// Where key presses go
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Sidebar,
    Form(FormField),
}

/// Per-session UI state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    /// Route on screen, mirrored from the router
    pub route: RouteId,
    pub can_go_back: bool,
    /// Highlighted sidebar entry
    pub cursor: usize,
    pub focus: Focus,
    pub form: PatientForm,
    pub acknowledgement: Option<Acknowledgement>,
    /// Blocks of the current page scrolled past
    pub scroll: usize,
    pub exit: bool,
}

impl DashboardState {
    /// Fresh state with the sidebar cursor on the router's current page
    pub fn for_router(router: &Router) -> Self {
        let route = router.current_route_id().clone();
        Self {
            cursor: Page::from_route_id(&route).map(|page| page.index()).unwrap_or(0),
            can_go_back: router.can_go_back(),
            route,
            ..Self::default()
        }
    }

    pub fn page(&self) -> Option<Page> {
        Page::from_route_id(&self.route)
    }

    fn highlighted(&self) -> RouteId {
        Page::ALL[self.cursor % Page::ALL.len()].route_id()
    }

    fn move_cursor(&mut self, target: Option<&RouteId>) {
        if let Some(page) = target.and_then(Page::from_route_id) {
            self.cursor = page.index();
        }
    }

    pub fn render_context(&self) -> RenderContext {
        RenderContext {
            form: self.form.clone(),
            acknowledgement: self.acknowledgement.clone(),
        }
    }

    pub fn focused_field(&self) -> Option<FormField> {
        match self.focus {
            Focus::Form(field) => Some(field),
            Focus::Sidebar => None,
        }
    }

    /// Forget page-local state after the route changed
    fn page_changed(&mut self, router: &Router) {
        let exit = self.exit;
        *self = Self::for_router(router);
        self.exit = exit;
    }
}

fn open(state: &mut DashboardState, router: &mut Router, page: Page) {
    let before = router.current_route_id().clone();
    match router.navigate(page) {
        Ok(()) if *router.current_route_id() != before => state.page_changed(router),
        Ok(()) => state.cursor = page.index(),
        Err(e) => warn!("Navigation failed: {}", e),
    }
}

fn block_count(registry: &PageRegistry, router: &Router, state: &DashboardState) -> usize {
    router
        .render_current(registry, &state.render_context())
        .map(|view| view.blocks.len())
        .unwrap_or(0)
}

/// Apply one key press
pub fn handle_key(
    state: &mut DashboardState,
    router: &mut Router,
    registry: &PageRegistry,
    code: KeyCode,
    predictor: &dyn Predictor,
) {
    match code {
        KeyCode::PageDown => {
            let last = block_count(registry, router, state).saturating_sub(1);
            state.scroll = (state.scroll + 1).min(last);
            return;
        }
        KeyCode::PageUp => {
            state.scroll = state.scroll.saturating_sub(1);
            return;
        }
        _ => {}
    }

    match state.focus {
        Focus::Sidebar => sidebar_key(state, router, code),
        Focus::Form(field) => form_key(state, field, code, predictor),
    }
}

fn sidebar_key(state: &mut DashboardState, router: &mut Router, code: KeyCode) {
    match code {
        KeyCode::Up | KeyCode::Char('k') => {
            state.move_cursor(router.config().route_before(&state.highlighted()))
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.move_cursor(router.config().route_after(&state.highlighted()))
        }
        KeyCode::Enter => open(state, router, Page::ALL[state.cursor % Page::ALL.len()]),
        KeyCode::Char(c @ '1'..='9') => {
            let idx = c as usize - '1' as usize;
            if let Some(page) = Page::ALL.get(idx) {
                open(state, router, *page);
            }
        }
        KeyCode::Char('b') | KeyCode::Backspace => {
            if router.go_back() {
                state.page_changed(router);
            }
        }
        KeyCode::Tab => {
            if state.page() == Some(Page::PatientPredictions) {
                state.focus = Focus::Form(FormField::default());
            }
        }
        KeyCode::Char('q') | KeyCode::Esc => state.exit = true,
        _ => {}
    }
}

fn form_key(state: &mut DashboardState, field: FormField, code: KeyCode, predictor: &dyn Predictor) {
    let form = &mut state.form;
    match (field, code) {
        (_, KeyCode::Esc) => state.focus = Focus::Sidebar,
        (_, KeyCode::Tab) => state.focus = Focus::Form(field.next()),
        (_, KeyCode::BackTab) => state.focus = Focus::Form(field.previous()),

        (FormField::Age, KeyCode::Up | KeyCode::Right) => form.age = form.age.increment(),
        (FormField::Age, KeyCode::Down | KeyCode::Left) => form.age = form.age.decrement(),
        (FormField::Age, KeyCode::Char(c)) if c.is_ascii_digit() => {
            let typed = i64::from(form.age.value()) * 10 + i64::from(c as u8 - b'0');
            form.age = Age::clamped(typed);
        }
        (FormField::Age, KeyCode::Backspace) => {
            form.age = Age::clamped(i64::from(form.age.value() / 10));
        }

        (FormField::Gender, KeyCode::Right | KeyCode::Down) => form.gender = form.gender.next(),
        (FormField::Gender, KeyCode::Left | KeyCode::Up) => {
            form.gender = form.gender.previous()
        }
        (FormField::AdmissionType, KeyCode::Right | KeyCode::Down) => {
            form.admission_type = form.admission_type.next()
        }
        (FormField::AdmissionType, KeyCode::Left | KeyCode::Up) => {
            form.admission_type = form.admission_type.previous()
        }

        (FormField::Diagnosis, KeyCode::Char(c)) if !c.is_control() => {
            if form.diagnosis.chars().count() < MAX_DIAGNOSIS_LEN {
                form.diagnosis.push(c);
            }
        }
        (FormField::Diagnosis, KeyCode::Backspace) => {
            form.diagnosis.pop();
        }

        (FormField::Predict, KeyCode::Enter) => {
            let ack = predictor.predict(form);
            info!("Form submitted: {}", ack.message());
            state.acknowledgement = Some(ack);
        }
        (_, KeyCode::Enter) => state.focus = Focus::Form(field.next()),
        _ => {}
    }
}

/// Run one key press against the shared router
///
/// Returns the new state when anything on screen changed, `None` otherwise.
pub fn apply_key(
    handle: &RouterHandle,
    registry: &PageRegistry,
    current: &DashboardState,
    code: KeyCode,
    predictor: &dyn Predictor,
) -> Option<DashboardState> {
    let mut next = current.clone();
    handle.with(|router| handle_key(&mut next, router, registry, code, predictor));
    (next != *current).then_some(next)
}

#[derive(Default, Props)]
pub struct DashboardAppProps {
    pub config: DashboardConfig,
    pub handle: Option<RouterHandle>,
}

/// Root component: sidebar, active page and key help
#[component]
pub fn DashboardApp(mut hooks: Hooks, props: &DashboardAppProps) -> impl Into<AnyElement<'static>> {
    let mut system = hooks.use_context_mut::<SystemContext>();
    let handle = props.handle.clone();
    let state = hooks.use_state(|| {
        handle
            .as_ref()
            .map(|h| h.with(|router| DashboardState::for_router(router)))
            .unwrap_or_default()
    });

    hooks.use_terminal_events({
        let handle = handle.clone();
        let mut state = state;
        move |event| match event {
            TerminalEvent::Key(KeyEvent { code, kind, .. }) if kind != KeyEventKind::Release => {
                let Some(handle) = &handle else {
                    state.write().exit = true;
                    return;
                };
                let registry = PageRegistry::standard();
                let current = state.read().clone();
                if let Some(next) = apply_key(handle, &registry, &current, code, &PendingBackend) {
                    debug!(?code, route = %next.route, focus = ?next.focus, "key handled");
                    state.set(next);
                }
            }
            _ => {}
        }
    });

    if state.read().exit {
        system.exit();
    }

    let theme = theme();
    let current = state.read().clone();

    let body: AnyElement<'static> = match PageRegistry::standard()
        .render(&current.route, &current.render_context())
    {
        Ok(view) => element! {
            PageContent(
                view: Some(view),
                focus: current.focused_field(),
                skip: current.scroll,
                chart_width: props.config.chart_width,
                chart_height: props.config.chart_height,
            )
        }
        .into(),
        Err(e) => {
            debug!("Rendering fallback: {}", e);
            element! { RouteNotFound(route: current.route.0.clone()) }.into()
        }
    };

    element! {
        View(
            width: 100pct,
            height: 100pct,
            flex_direction: FlexDirection::Column,
            background_color: rgb_color(theme.background),
        ) {
            View(flex_direction: FlexDirection::Row, flex_grow: 1.0) {
                Sidebar(
                    cursor: current.cursor,
                    current: current.page(),
                    focused: current.focus == Focus::Sidebar,
                )
                View(
                    flex_direction: FlexDirection::Column,
                    flex_grow: 1.0,
                    padding_left: 2,
                    padding_right: 2,
                    padding_top: 1,
                ) {
                    #(body)
                }
            }
            HelpBar(
                form_focused: current.focused_field().is_some(),
                form_available: current.page() == Some(Page::PatientPredictions),
                can_go_back: current.can_go_back,
            )
        }
    }
}

/// Run the full-screen dashboard until the user quits
pub async fn run_dashboard(config: DashboardConfig) -> Result<()> {
    let registry = PageRegistry::standard();
    let handle = RouterHandle::standard(&registry, config.start_page, config.max_history)?;
    info!("Starting dashboard on {}", config.start_page);

    element! {
        DashboardApp(config: config, handle: Some(handle))
    }
    .fullscreen()
    .await?;

    info!("Dashboard closed");
    Ok(())
}
