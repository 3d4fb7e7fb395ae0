// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Tabs, Wrap};
use seedflow_app::{
    AppCommand, AppEvent, AppMode, AppState, CommitOutcome, Customer, DeliveryBoard,
    DeliveryOrder, DeliveryStatus, LineItem, PageKind, PlanTable, Priority, StatusFilter, Trend,
};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;
use time::Date;
use time::macros::format_description;

const HALF_PAGE_ROWS: isize = 10;
const STATUS_CLEAR_AFTER: Duration = Duration::from_secs(4);
const EDIT_CURSOR: &str = "▏";
const NOT_ASSIGNED: &str = "not assigned";
const NOT_AVAILABLE: &str = "not available";

/// Data source for the pages. Each call returns a fresh copy, so reloading a
/// page drops any in-memory edits.
pub trait AppRuntime {
    fn load_customers(&mut self) -> Result<Vec<Customer>>;
    fn load_delivery_orders(&mut self) -> Result<Vec<DeliveryOrder>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InternalEvent {
    ClearStatus { token: u64 },
}

#[derive(Debug, Clone, PartialEq, Default)]
struct ViewData {
    plan: PlanTable,
    delivery: DeliveryBoard,
    plan_cursor: usize,
    delivery_cursor: usize,
    help_visible: bool,
    status_token: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Neutral,
    Good,
    Bad,
    Info,
    Warn,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct SummaryCard {
    title: &'static str,
    value: String,
    caption: String,
    tone: Tone,
}

pub fn run_app<R: AppRuntime>(state: &mut AppState, runtime: &mut R) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let mut view_data = ViewData::default();
    let (internal_tx, internal_rx) = mpsc::channel();

    if let Err(error) = refresh_view_data(state, runtime, &mut view_data) {
        tracing::warn!(%error, page = state.active_page.as_str(), "initial load failed");
        state.dispatch(AppCommand::SetStatus(format!("load failed: {error}")));
    }
    tracing::info!(page = state.active_page.as_str(), "tui started");

    let mut result = Ok(());
    loop {
        process_internal_events(state, &view_data, &internal_rx);

        if let Err(error) = terminal.draw(|frame| render(frame, state, &view_data)) {
            result = Err(error).context("draw frame");
            break;
        }

        let has_event = event::poll(Duration::from_millis(120)).context("poll event")?;
        if has_event
            && let Event::Key(key) = event::read().context("read event")?
            && handle_key_event(state, runtime, &mut view_data, &internal_tx, key)
        {
            break;
        }
    }

    disable_raw_mode().context("disable raw mode")?;
    execute!(io::stdout(), terminal::LeaveAlternateScreen).context("leave alternate screen")?;
    tracing::info!("tui stopped");
    result
}

fn process_internal_events(
    state: &mut AppState,
    view_data: &ViewData,
    rx: &Receiver<InternalEvent>,
) {
    while let Ok(event) = rx.try_recv() {
        match event {
            InternalEvent::ClearStatus { token } if token == view_data.status_token => {
                state.dispatch(AppCommand::ClearStatus);
            }
            InternalEvent::ClearStatus { .. } => {}
        }
    }
}

fn schedule_status_clear(internal_tx: &Sender<InternalEvent>, token: u64) {
    let sender = internal_tx.clone();
    thread::spawn(move || {
        thread::sleep(STATUS_CLEAR_AFTER);
        let _ = sender.send(InternalEvent::ClearStatus { token });
    });
}

fn emit_status(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    message: impl Into<String>,
) {
    state.dispatch(AppCommand::SetStatus(message.into()));
    view_data.status_token = view_data.status_token.saturating_add(1);
    schedule_status_clear(internal_tx, view_data.status_token);
}

/// Returns true when the app should quit.
fn handle_key_event<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) -> bool {
    if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    if view_data.help_visible {
        if key.code == KeyCode::Esc || key.code == KeyCode::Char('?') {
            view_data.help_visible = false;
        }
        return false;
    }

    match state.mode {
        AppMode::Edit => {
            handle_edit_key(state, view_data, internal_tx, key);
            return false;
        }
        AppMode::Search => {
            handle_search_key(state, view_data, key);
            return false;
        }
        AppMode::Nav => {}
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('?'), _) => {
            view_data.help_visible = true;
            return false;
        }
        (KeyCode::Tab, _) | (KeyCode::Char('f'), KeyModifiers::NONE) => {
            dispatch_and_refresh(state, runtime, view_data, AppCommand::NextPage, internal_tx);
            return false;
        }
        (KeyCode::BackTab, _) | (KeyCode::Char('b'), KeyModifiers::NONE) => {
            dispatch_and_refresh(state, runtime, view_data, AppCommand::PrevPage, internal_tx);
            return false;
        }
        _ => {}
    }

    match state.active_page {
        PageKind::Plan => handle_plan_nav_key(state, view_data, key),
        PageKind::Deliver => handle_delivery_nav_key(state, view_data, internal_tx, key),
    }
    false
}

fn handle_plan_nav_key(state: &mut AppState, view_data: &mut ViewData, key: KeyEvent) {
    let rows = view_data.plan.customers().len();
    match (key.code, key.modifiers) {
        (KeyCode::Char('j'), _) | (KeyCode::Down, _) => {
            view_data.plan_cursor = step_cursor(view_data.plan_cursor, 1, rows);
        }
        (KeyCode::Char('k'), _) | (KeyCode::Up, _) => {
            view_data.plan_cursor = step_cursor(view_data.plan_cursor, -1, rows);
        }
        (KeyCode::Char('d'), modifiers) if modifiers.contains(KeyModifiers::CONTROL) => {
            view_data.plan_cursor = step_cursor(view_data.plan_cursor, HALF_PAGE_ROWS, rows);
        }
        (KeyCode::Char('u'), modifiers) if modifiers.contains(KeyModifiers::CONTROL) => {
            view_data.plan_cursor = step_cursor(view_data.plan_cursor, -HALF_PAGE_ROWS, rows);
        }
        (KeyCode::Char('g'), _) => view_data.plan_cursor = 0,
        (KeyCode::Char('G'), _) => view_data.plan_cursor = rows.saturating_sub(1),
        (KeyCode::Char('e'), KeyModifiers::NONE) | (KeyCode::Enter, _) => {
            if begin_edit_at_cursor(view_data) {
                state.dispatch(AppCommand::EnterEditMode);
            }
        }
        _ => {}
    }
}

fn begin_edit_at_cursor(view_data: &mut ViewData) -> bool {
    let Some(id) = view_data
        .plan
        .customers()
        .get(view_data.plan_cursor)
        .map(|customer| customer.id.clone())
    else {
        return false;
    };
    view_data.plan.begin_edit(&id)
}

fn handle_edit_key(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    match (key.code, key.modifiers) {
        (KeyCode::Enter, _) => {
            let outcome = view_data.plan.commit_active_edit();
            state.dispatch(AppCommand::ExitToNav);
            if let CommitOutcome::Applied {
                customer_id,
                previous,
                current,
            } = outcome
            {
                tracing::debug!(customer = %customer_id, previous, current, "units updated");
                let name = view_data
                    .plan
                    .customer(&customer_id)
                    .map(|customer| customer.name.clone())
                    .unwrap_or_else(|| customer_id.to_string());
                emit_status(
                    state,
                    view_data,
                    internal_tx,
                    format!(
                        "{name}: {} -> {}",
                        format_units(previous),
                        format_units(current)
                    ),
                );
            }
        }
        (KeyCode::Esc, _) => {
            view_data.plan.cancel_edit();
            state.dispatch(AppCommand::ExitToNav);
        }
        (KeyCode::Up, _) | (KeyCode::Down, _) => {
            let delta = if key.code == KeyCode::Up { -1 } else { 1 };
            let rows = view_data.plan.customers().len();
            view_data.plan_cursor = step_cursor(view_data.plan_cursor, delta, rows);
            begin_edit_at_cursor(view_data);
        }
        (KeyCode::Backspace, _) => view_data.plan.pop_char(),
        (KeyCode::Char('u'), modifiers) if modifiers.contains(KeyModifiers::CONTROL) => {
            view_data.plan.clear_buffer();
        }
        (KeyCode::Char(value), modifiers)
            if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            view_data.plan.push_char(value);
        }
        _ => {}
    }
}

fn handle_search_key(state: &mut AppState, view_data: &mut ViewData, key: KeyEvent) {
    match (key.code, key.modifiers) {
        (KeyCode::Enter, _) | (KeyCode::Esc, _) => {
            state.dispatch(AppCommand::ExitToNav);
        }
        (KeyCode::Backspace, _) => view_data.delivery.pop_search_char(),
        (KeyCode::Char('u'), modifiers) if modifiers.contains(KeyModifiers::CONTROL) => {
            view_data.delivery.clear_search();
        }
        (KeyCode::Char(value), modifiers)
            if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            view_data.delivery.push_search_char(value);
        }
        _ => {}
    }
    clamp_delivery_cursor(view_data);
}

fn handle_delivery_nav_key(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    let rows = view_data.delivery.visible().len();
    match (key.code, key.modifiers) {
        (KeyCode::Char('j'), _) | (KeyCode::Down, _) => {
            view_data.delivery_cursor = step_cursor(view_data.delivery_cursor, 1, rows);
        }
        (KeyCode::Char('k'), _) | (KeyCode::Up, _) => {
            view_data.delivery_cursor = step_cursor(view_data.delivery_cursor, -1, rows);
        }
        (KeyCode::Char('g'), _) => view_data.delivery_cursor = 0,
        (KeyCode::Char('G'), _) => view_data.delivery_cursor = rows.saturating_sub(1),
        (KeyCode::Char('/'), _) => {
            state.dispatch(AppCommand::EnterSearchMode);
        }
        (KeyCode::Char('s'), KeyModifiers::NONE) => {
            cycle_status_filter(state, view_data, internal_tx, 1);
        }
        (KeyCode::Char('S'), _) => {
            cycle_status_filter(state, view_data, internal_tx, -1);
        }
        (KeyCode::Char('0'), _) => {
            view_data.delivery.set_status_filter(StatusFilter::All);
            clamp_delivery_cursor(view_data);
            emit_status(state, view_data, internal_tx, "status: all statuses");
        }
        (KeyCode::Char('c'), KeyModifiers::NONE) => {
            view_data.delivery.clear_search();
            clamp_delivery_cursor(view_data);
            emit_status(state, view_data, internal_tx, "search cleared");
        }
        (KeyCode::Enter, _) => {
            let Some(id) = view_data
                .delivery
                .visible()
                .get(view_data.delivery_cursor)
                .map(|order| order.id.clone())
            else {
                return;
            };
            if view_data.delivery.select_order(&id) {
                tracing::debug!(order = %id, "order selected");
            }
        }
        (KeyCode::Esc, _) => view_data.delivery.dismiss_order(),
        _ => {}
    }
}

fn cycle_status_filter(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    delta: isize,
) {
    let next = view_data.delivery.status_filter().rotate(delta);
    view_data.delivery.set_status_filter(next);
    clamp_delivery_cursor(view_data);
    emit_status(
        state,
        view_data,
        internal_tx,
        format!("status: {}", next.label()),
    );
}

fn step_cursor(cursor: usize, delta: isize, rows: usize) -> usize {
    if rows == 0 {
        return 0;
    }
    let max = rows as isize - 1;
    (cursor as isize + delta).clamp(0, max) as usize
}

fn clamp_delivery_cursor(view_data: &mut ViewData) {
    let rows = view_data.delivery.visible().len();
    view_data.delivery_cursor = view_data.delivery_cursor.min(rows.saturating_sub(1));
}

fn dispatch_and_refresh<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    command: AppCommand,
    internal_tx: &Sender<InternalEvent>,
) {
    let events = state.dispatch(command);
    if should_refresh_view(&events) {
        tracing::info!(page = state.active_page.as_str(), "page changed");
        if let Err(error) = refresh_view_data(state, runtime, view_data) {
            tracing::warn!(%error, page = state.active_page.as_str(), "page load failed");
            emit_status(
                state,
                view_data,
                internal_tx,
                format!("load failed: {error}"),
            );
        }
    }
}

fn should_refresh_view(events: &[AppEvent]) -> bool {
    events
        .iter()
        .any(|event| matches!(event, AppEvent::PageChanged(_)))
}

/// Reloads the active page from the runtime, discarding edits and filters.
fn refresh_view_data<R: AppRuntime>(
    state: &AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
) -> Result<()> {
    match state.active_page {
        PageKind::Plan => {
            view_data.plan = PlanTable::new(runtime.load_customers().context("load customers")?);
            view_data.plan_cursor = 0;
        }
        PageKind::Deliver => {
            view_data.delivery = DeliveryBoard::new(
                runtime
                    .load_delivery_orders()
                    .context("load delivery orders")?,
            );
            view_data.delivery_cursor = 0;
        }
    }
    Ok(())
}

fn render(frame: &mut ratatui::Frame<'_>, state: &AppState, view_data: &ViewData) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let selected = PageKind::ALL
        .iter()
        .position(|page| *page == state.active_page)
        .unwrap_or(0);
    let titles = PageKind::ALL
        .iter()
        .map(|page| page.label().to_owned())
        .collect::<Vec<String>>();
    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .title(header_title(state))
                .borders(Borders::ALL),
        )
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .select(selected);
    frame.render_widget(tabs, layout[0]);

    match state.active_page {
        PageKind::Plan => render_plan_page(frame, layout[1], state, view_data),
        PageKind::Deliver => render_delivery_page(frame, layout[1], state, view_data),
    }

    let status = Paragraph::new(status_text(state, view_data))
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, layout[2]);

    if view_data.help_visible {
        let area = centered_rect(70, 50, frame.area());
        frame.render_widget(Clear, area);
        let help = Paragraph::new(help_overlay_text())
            .block(Block::default().title("help").borders(Borders::ALL));
        frame.render_widget(help, area);
    }
}

fn header_title(state: &AppState) -> String {
    format!(
        "seedflow | {} | sales year {}",
        state.agency.label(),
        state.sales_year
    )
}

fn render_cards(frame: &mut ratatui::Frame<'_>, area: Rect, cards: &[SummaryCard]) {
    let count = cards.len().max(1) as u32;
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, count); cards.len()])
        .split(area);

    for (card, column) in cards.iter().zip(columns.iter()) {
        let body = Paragraph::new(format!("{}\n{}", card.value, card.caption))
            .style(Style::default().fg(tone_color(card.tone)))
            .block(Block::default().title(card.title).borders(Borders::ALL));
        frame.render_widget(body, *column);
    }
}

fn render_plan_page(
    frame: &mut ratatui::Frame<'_>,
    area: Rect,
    state: &AppState,
    view_data: &ViewData,
) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    render_cards(frame, layout[0], &plan_cards(&view_data.plan));

    let header = Row::new(
        ["customer", "products", "prev yr units", "current yr units", "variance"]
            .into_iter()
            .map(|label| {
                Cell::from(label).style(
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )
            }),
    );

    let rows = view_data
        .plan
        .customers()
        .iter()
        .enumerate()
        .map(|(index, customer)| {
            let selected = index == view_data.plan_cursor;
            let editing = view_data.plan.is_editing(&customer.id);
            let current = match view_data.plan.editing() {
                Some(edit) if editing => format!("{}{EDIT_CURSOR}", edit.buffer),
                _ => format_units(customer.current_year_units),
            };
            let mut row_style = Style::default();
            if selected {
                row_style = row_style.bg(Color::DarkGray);
            }
            let current_style = if editing && state.mode == AppMode::Edit {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                row_style
            };
            Row::new(vec![
                Cell::from(customer.name.clone()).style(row_style),
                Cell::from(customer.products.join(", ")).style(row_style),
                Cell::from(format_units(customer.previous_year_units)).style(row_style),
                Cell::from(current).style(current_style),
                Cell::from(customer.variance_label())
                    .style(row_style.fg(trend_color(customer.trend()))),
            ])
        });

    let widths = [
        Constraint::Percentage(28),
        Constraint::Percentage(32),
        Constraint::Percentage(13),
        Constraint::Percentage(15),
        Constraint::Percentage(12),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(1)
        .block(
            Block::default()
                .title("seed product demand plan")
                .borders(Borders::ALL),
        );
    frame.render_widget(table, layout[1]);

    let footer = Paragraph::new(plan_footer_text(&view_data.plan))
        .style(Style::default().fg(Color::Gray));
    frame.render_widget(footer, layout[2]);
}

fn plan_cards(plan: &PlanTable) -> Vec<SummaryCard> {
    let summary = plan.summary();
    let totals = summary.totals;
    let tone = match totals.trend() {
        Trend::Down => Tone::Bad,
        Trend::Up | Trend::Flat => Tone::Good,
    };
    vec![
        SummaryCard {
            title: "total customers",
            value: summary.customers.to_string(),
            caption: "active accounts".to_owned(),
            tone: Tone::Neutral,
        },
        SummaryCard {
            title: "product lines",
            value: summary.product_lines.len().to_string(),
            caption: "seed varieties".to_owned(),
            tone: Tone::Neutral,
        },
        SummaryCard {
            title: "current units",
            value: format_units(totals.current),
            caption: format!(
                "{} from last year",
                format_signed_units(totals.variance())
            ),
            tone,
        },
        SummaryCard {
            title: "growth rate",
            value: totals.growth_label(),
            caption: "year-over-year".to_owned(),
            tone,
        },
    ]
}

fn plan_footer_text(plan: &PlanTable) -> String {
    let totals = plan.totals();
    format!(
        "showing {} customers | total current units: {} | total previous units: {}",
        plan.customers().len(),
        format_units(totals.current),
        format_units(totals.previous),
    )
}

fn render_delivery_page(
    frame: &mut ratatui::Frame<'_>,
    area: Rect,
    state: &AppState,
    view_data: &ViewData,
) {
    let selected_order = view_data.delivery.selected();
    let detail_height = if selected_order.is_some() { 9 } else { 0 };
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(detail_height),
        ])
        .split(area);

    render_cards(frame, layout[0], &delivery_cards(&view_data.delivery));

    let filter_style = if state.mode == AppMode::Search {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };
    let filter = Paragraph::new(filter_line_text(&view_data.delivery, state.mode))
        .style(filter_style);
    frame.render_widget(filter, layout[1]);

    let header = Row::new(
        [
            "order",
            "customer",
            "products",
            "status",
            "priority",
            "scheduled",
            "tracking",
        ]
        .into_iter()
        .map(|label| {
            Cell::from(label).style(
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
        }),
    );

    let visible = view_data.delivery.visible();
    let rows = visible.iter().enumerate().map(|(index, order)| {
        let mut style = Style::default();
        if index == view_data.delivery_cursor {
            style = style.bg(Color::DarkGray);
        }
        if selected_order.is_some_and(|selected| selected.id == order.id) {
            style = style.add_modifier(Modifier::BOLD);
        }
        Row::new(vec![
            Cell::from(order.order_number.clone()).style(style),
            Cell::from(format!("{} | {}", order.customer_name, order.contact.street()))
                .style(style),
            Cell::from(format_line_items(&order.line_items)).style(style),
            Cell::from(order.status.label()).style(style.fg(status_color(order.status))),
            Cell::from(order.priority.label()).style(style.fg(priority_color(order.priority))),
            Cell::from(format_schedule(order)).style(style),
            Cell::from(format_tracking(order)).style(style),
        ])
    });

    let widths = [
        Constraint::Percentage(11),
        Constraint::Percentage(24),
        Constraint::Percentage(24),
        Constraint::Percentage(9),
        Constraint::Percentage(7),
        Constraint::Percentage(11),
        Constraint::Percentage(14),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(1)
        .block(
            Block::default()
                .title(format!(
                    "delivery orders ({} of {})",
                    visible.len(),
                    view_data.delivery.orders().len()
                ))
                .borders(Borders::ALL),
        );
    frame.render_widget(table, layout[2]);

    if let Some(order) = selected_order {
        let detail = Paragraph::new(render_order_detail_text(order))
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .title(format!("order details - {}", order.order_number))
                    .borders(Borders::ALL)
                    .style(Style::default().fg(Color::Cyan)),
            );
        frame.render_widget(detail, layout[3]);
    }
}

fn delivery_cards(board: &DeliveryBoard) -> Vec<SummaryCard> {
    let counts = board.status_counts();
    vec![
        SummaryCard {
            title: "total orders",
            value: counts.total.to_string(),
            caption: String::new(),
            tone: Tone::Neutral,
        },
        SummaryCard {
            title: "pending",
            value: counts.pending.to_string(),
            caption: String::new(),
            tone: Tone::Neutral,
        },
        SummaryCard {
            title: "in transit",
            value: counts.in_transit.to_string(),
            caption: String::new(),
            tone: Tone::Info,
        },
        SummaryCard {
            title: "delivered",
            value: counts.delivered.to_string(),
            caption: String::new(),
            tone: Tone::Good,
        },
        SummaryCard {
            title: "delayed",
            value: counts.delayed.to_string(),
            caption: String::new(),
            tone: Tone::Warn,
        },
    ]
}

fn filter_line_text(board: &DeliveryBoard, mode: AppMode) -> String {
    let cursor = if mode == AppMode::Search {
        EDIT_CURSOR
    } else {
        ""
    };
    let search = if board.search().is_empty() && mode != AppMode::Search {
        "(customer or order number)".to_owned()
    } else {
        format!("{}{cursor}", board.search())
    };
    format!(
        "search: {search} | status: {}",
        board.status_filter().label()
    )
}

fn render_order_detail_text(order: &DeliveryOrder) -> String {
    let mut lines = vec![
        format!("name: {}", order.customer_name),
        format!("phone: {}", order.contact.phone),
        format!("email: {}", order.contact.email),
        format!("address: {}", order.contact.address),
        format!(
            "status: {} | priority: {}",
            order.status.label(),
            order.priority.label()
        ),
        format!(
            "driver: {} | truck: {} | tracking: {}",
            order.driver.as_deref().unwrap_or(NOT_ASSIGNED),
            order.truck.as_deref().unwrap_or(NOT_ASSIGNED),
            order.tracking_number.as_deref().unwrap_or(NOT_AVAILABLE),
        ),
    ];
    if let Some(notes) = order.notes.as_deref() {
        lines.push(format!("notes: {notes}"));
    }
    lines.join("\n")
}

fn format_line_items(items: &[LineItem]) -> String {
    items
        .iter()
        .map(|item| format!("{} {} {}", item.quantity, item.unit, item.name))
        .collect::<Vec<_>>()
        .join("; ")
}

fn format_schedule(order: &DeliveryOrder) -> String {
    match order.actual_date {
        Some(actual) => format!(
            "{} (delivered {})",
            format_date(order.scheduled_date),
            format_date(actual)
        ),
        None => format_date(order.scheduled_date),
    }
}

fn format_tracking(order: &DeliveryOrder) -> String {
    match (&order.tracking_number, &order.driver) {
        (Some(tracking), Some(driver)) => format!("{tracking} ({driver})"),
        (Some(tracking), None) => tracking.clone(),
        (None, _) => NOT_ASSIGNED.to_owned(),
    }
}

fn format_date(date: Date) -> String {
    let format = format_description!("[month padding:none]/[day padding:none]/[year]");
    date.format(&format).unwrap_or_else(|_| date.to_string())
}

fn format_units(value: impl Into<u128>) -> String {
    group_thousands(&value.into().to_string())
}

fn format_signed_units(value: i128) -> String {
    let grouped = group_thousands(&value.unsigned_abs().to_string());
    if value < 0 {
        format!("-{grouped}")
    } else {
        format!("+{grouped}")
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Neutral => Color::White,
        Tone::Good => Color::Green,
        Tone::Bad => Color::Red,
        Tone::Info => Color::Blue,
        Tone::Warn => Color::Yellow,
    }
}

fn trend_color(trend: Trend) -> Color {
    match trend {
        Trend::Up => Color::Green,
        Trend::Down => Color::Red,
        Trend::Flat => Color::Gray,
    }
}

fn status_color(status: DeliveryStatus) -> Color {
    match status {
        DeliveryStatus::Delivered => Color::Green,
        DeliveryStatus::InTransit => Color::Blue,
        DeliveryStatus::Pending => Color::Gray,
        DeliveryStatus::Delayed => Color::Yellow,
        DeliveryStatus::Failed => Color::Red,
    }
}

fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::Urgent => Color::Red,
        Priority::High => Color::LightRed,
        Priority::Medium => Color::Yellow,
        Priority::Low => Color::Green,
    }
}

fn status_text(state: &AppState, view_data: &ViewData) -> String {
    if view_data.help_visible {
        return String::new();
    }

    let mode = match state.mode {
        AppMode::Nav => "NAV",
        AppMode::Edit => "EDIT",
        AppMode::Search => "SEARCH",
    };
    let hints = match (state.mode, state.active_page) {
        (AppMode::Edit, _) => "type units | enter save | esc cancel | up/down move | ctrl+u clear",
        (AppMode::Search, _) => "type to search | backspace | ctrl+u clear | enter/esc done",
        (AppMode::Nav, PageKind::Plan) => "j/k g/G | e/enter edit | tab page | ? help | ctrl+q",
        (AppMode::Nav, PageKind::Deliver) => {
            "j/k g/G | / search | s/S status | 0 all | c clear | enter details | esc close | tab page | ? help | ctrl+q"
        }
    };
    match &state.status_line {
        Some(status) => format!("{mode} | {status} | {hints}"),
        None => format!("{mode} | {hints}"),
    }
}

fn help_overlay_text() -> &'static str {
    "global: ctrl+q quit | ? help | tab/shift+tab or f/b switch page\n\
plan: j/k move | g/G first/last | ctrl+d/ctrl+u half page | e or enter edit units\n\
edit: type digits | backspace | ctrl+u clear | enter save | esc cancel | up/down edit neighbour\n\
deliver: j/k move | / search | s/S next/prev status | 0 all statuses | c clear search\n\
deliver: enter show order details | esc close details\n\
search: type | backspace | ctrl+u clear | enter or esc done"
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
