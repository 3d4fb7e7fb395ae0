// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::{Agency, AppMode, DEFAULT_SALES_YEAR, PageKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub mode: AppMode,
    pub active_page: PageKind,
    pub sales_year: i32,
    pub agency: Agency,
    pub status_line: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            mode: AppMode::Nav,
            active_page: PageKind::Plan,
            sales_year: DEFAULT_SALES_YEAR,
            agency: Agency::Midwest,
            status_line: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    NextPage,
    PrevPage,
    ShowPage(PageKind),
    EnterEditMode,
    EnterSearchMode,
    ExitToNav,
    SetStatus(String),
    ClearStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    ModeChanged(AppMode),
    PageChanged(PageKind),
    StatusUpdated(String),
    StatusCleared,
}

impl AppState {
    pub fn dispatch(&mut self, command: AppCommand) -> Vec<AppEvent> {
        match command {
            AppCommand::NextPage => self.rotate_page(1),
            AppCommand::PrevPage => self.rotate_page(-1),
            AppCommand::ShowPage(page) => self.show_page(page),
            AppCommand::EnterEditMode => self.set_mode(AppMode::Edit),
            AppCommand::EnterSearchMode => self.set_mode(AppMode::Search),
            AppCommand::ExitToNav => self.set_mode(AppMode::Nav),
            AppCommand::SetStatus(message) => vec![self.set_status(&message)],
            AppCommand::ClearStatus => {
                self.status_line = None;
                vec![AppEvent::StatusCleared]
            }
        }
    }

    fn rotate_page(&mut self, delta: isize) -> Vec<AppEvent> {
        let pages = PageKind::ALL;
        let current = pages
            .iter()
            .position(|page| *page == self.active_page)
            .unwrap_or(0) as isize;
        let len = pages.len() as isize;
        let next = (current + delta).rem_euclid(len) as usize;
        self.show_page(pages[next])
    }

    fn show_page(&mut self, page: PageKind) -> Vec<AppEvent> {
        if page == self.active_page {
            return Vec::new();
        }
        self.active_page = page;
        let mut events = Vec::new();
        if self.mode != AppMode::Nav {
            self.mode = AppMode::Nav;
            events.push(AppEvent::ModeChanged(self.mode));
        }
        events.push(AppEvent::PageChanged(self.active_page));
        events
    }

    fn set_mode(&mut self, mode: AppMode) -> Vec<AppEvent> {
        if mode == self.mode {
            return Vec::new();
        }
        self.mode = mode;
        vec![AppEvent::ModeChanged(self.mode)]
    }

    fn set_status(&mut self, message: &str) -> AppEvent {
        self.status_line = Some(message.to_owned());
        AppEvent::StatusUpdated(message.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::{AppCommand, AppEvent, AppState};
    use crate::{AppMode, PageKind};

    #[test]
    fn page_rotation_wraps() {
        let mut state = AppState {
            active_page: PageKind::Deliver,
            ..AppState::default()
        };

        let events = state.dispatch(AppCommand::NextPage);
        assert_eq!(state.active_page, PageKind::Plan);
        assert_eq!(events, vec![AppEvent::PageChanged(PageKind::Plan)]);

        state.dispatch(AppCommand::PrevPage);
        assert_eq!(state.active_page, PageKind::Deliver);
    }

    #[test]
    fn showing_current_page_is_a_no_op() {
        let mut state = AppState::default();
        assert!(state.dispatch(AppCommand::ShowPage(PageKind::Plan)).is_empty());
    }

    #[test]
    fn leaving_a_page_returns_to_nav_mode() {
        let mut state = AppState::default();
        state.dispatch(AppCommand::EnterEditMode);
        assert_eq!(state.mode, AppMode::Edit);

        let events = state.dispatch(AppCommand::ShowPage(PageKind::Deliver));
        assert_eq!(state.mode, AppMode::Nav);
        assert_eq!(
            events,
            vec![
                AppEvent::ModeChanged(AppMode::Nav),
                AppEvent::PageChanged(PageKind::Deliver),
            ]
        );
    }

    #[test]
    fn mode_transitions() {
        let mut state = AppState::default();

        let events = state.dispatch(AppCommand::EnterSearchMode);
        assert_eq!(state.mode, AppMode::Search);
        assert_eq!(events, vec![AppEvent::ModeChanged(AppMode::Search)]);

        state.dispatch(AppCommand::ExitToNav);
        assert_eq!(state.mode, AppMode::Nav);
        assert!(state.dispatch(AppCommand::ExitToNav).is_empty());
    }

    #[test]
    fn status_set_and_clear() {
        let mut state = AppState::default();

        let events = state.dispatch(AppCommand::SetStatus("units updated".to_owned()));
        assert_eq!(state.status_line.as_deref(), Some("units updated"));
        assert_eq!(
            events,
            vec![AppEvent::StatusUpdated("units updated".to_owned())]
        );

        assert_eq!(
            state.dispatch(AppCommand::ClearStatus),
            vec![AppEvent::StatusCleared]
        );
        assert!(state.status_line.is_none());
    }
}
