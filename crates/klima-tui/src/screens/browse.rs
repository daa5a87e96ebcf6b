//! Browse screen — the filterable conditioner table with a detail panel.
//!
//! Reads everything from the shared store on each render: the filtered
//! view, the lookup resolvers, and the loading/error flags. Filter keys
//! mutate the store's filter state, so the view narrows live and the
//! filters survive switching to the form and back.

use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, TableState},
};
use throbber_widgets_tui::{Throbber, ThrobberState};
use tui_input::Input;
use tui_input::backend::crossterm::EventHandler;

use klima_core::{Conditioner, Console};

use crate::theme;

/// What the browse screen asks the app to do.
pub enum BrowseAction {
    Quit,
    Refetch,
    OpenCreate,
    OpenEdit(Conditioner),
    ConfirmDelete(Conditioner),
}

pub struct BrowseScreen {
    console: Console,
    table_state: TableState,
    search: Input,
    search_active: bool,
    throbber: ThrobberState,
}

impl BrowseScreen {
    pub fn new(console: Console) -> Self {
        Self {
            console,
            table_state: TableState::default(),
            search: Input::default(),
            search_active: false,
            throbber: ThrobberState::default(),
        }
    }

    /// The currently highlighted record, out of the filtered view.
    pub fn selected(&self) -> Option<Conditioner> {
        let filtered = self.console.store().filtered();
        let index = self.table_state.selected()?;
        filtered.get(index).cloned()
    }

    pub fn on_tick(&mut self) {
        self.throbber.calc_next();
    }

    // ── Input handling ───────────────────────────────────────────────

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<BrowseAction> {
        if self.search_active {
            match key.code {
                KeyCode::Esc | KeyCode::Enter => self.search_active = false,
                _ => {
                    self.search.handle_event(&CrosstermEvent::Key(key));
                    let value = self.search.value().to_owned();
                    self.console.store().update_filters(|f| f.search = value);
                }
            }
            return None;
        }

        match key.code {
            KeyCode::Char('q') => return Some(BrowseAction::Quit),
            KeyCode::Char('/') => self.search_active = true,
            KeyCode::Char('r') => return Some(BrowseAction::Refetch),
            KeyCode::Char('n') => return Some(BrowseAction::OpenCreate),
            KeyCode::Char('e') => {
                if let Some(selected) = self.selected() {
                    return Some(BrowseAction::OpenEdit(selected));
                }
            }
            KeyCode::Char('d') => {
                if let Some(selected) = self.selected() {
                    return Some(BrowseAction::ConfirmDelete(selected));
                }
            }

            // Filter cycling
            KeyCode::Char('s') => self.cycle_status(),
            KeyCode::Char('t') => self.cycle_type(),
            KeyCode::Char('m') => self.cycle_manufacturer(),
            KeyCode::Char('c') => {
                self.search = Input::default();
                self.console.store().reset_filters();
            }

            // Navigation
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            KeyCode::Char('g') => self.table_state.select(Some(0)),
            KeyCode::Char('G') => {
                let len = self.console.store().filtered().len();
                if len > 0 {
                    self.table_state.select(Some(len - 1));
                }
            }
            _ => {}
        }

        None
    }

    fn select_next(&mut self) {
        let len = self.console.store().filtered().len();
        if len == 0 {
            self.table_state.select(None);
            return;
        }
        let next = self.table_state.selected().map_or(0, |i| i + 1);
        self.table_state.select(Some(next.min(len - 1)));
    }

    fn select_prev(&mut self) {
        let len = self.console.store().filtered().len();
        if len == 0 {
            self.table_state.select(None);
            return;
        }
        let prev = self.table_state.selected().map_or(0, |i| i.saturating_sub(1));
        self.table_state.select(Some(prev.min(len - 1)));
    }

    // Each `s`/`t`/`m` press advances the matching filter through
    // "no filter" plus every lookup row, in lookup order.
    fn cycle_status(&mut self) {
        let ids: Vec<i64> = self
            .console
            .store()
            .lookups()
            .statuses
            .iter()
            .map(|s| s.id)
            .collect();
        self.console
            .store()
            .update_filters(|f| f.status_id = next_option(f.status_id, &ids));
    }

    fn cycle_type(&mut self) {
        let ids: Vec<i64> = self
            .console
            .store()
            .lookups()
            .types
            .iter()
            .map(|t| t.id)
            .collect();
        self.console
            .store()
            .update_filters(|f| f.type_id = next_option(f.type_id, &ids));
    }

    fn cycle_manufacturer(&mut self) {
        let ids: Vec<i64> = self
            .console
            .store()
            .lookups()
            .manufacturers
            .iter()
            .map(|m| m.id)
            .collect();
        self.console
            .store()
            .update_filters(|f| f.manufacturer_id = next_option(f.manufacturer_id, &ids));
    }

    // ── Rendering ────────────────────────────────────────────────────

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let layout = Layout::vertical([
            Constraint::Length(3), // search + filter bar
            Constraint::Min(3),    // table + details
            Constraint::Length(1), // status bar
        ])
        .split(area);

        self.render_filter_bar(frame, layout[0]);

        let main = Layout::horizontal([Constraint::Percentage(62), Constraint::Percentage(38)])
            .split(layout[1]);
        self.render_table(frame, main[0]);
        self.render_details(frame, main[1]);

        self.render_status_bar(frame, layout[2]);
    }

    fn render_filter_bar(&self, frame: &mut Frame, area: Rect) {
        let store = self.console.store();
        let filters = store.filters();

        let border = if self.search_active {
            theme::border_focused()
        } else {
            theme::border()
        };

        let mut spans = vec![
            Span::styled(" / ", theme::key_hint_key()),
            Span::raw(self.search.value().to_owned()),
        ];
        if self.search_active {
            spans.push(Span::styled("▏", theme::border_focused()));
        }

        spans.push(Span::styled("   status: ", theme::label()));
        spans.push(chip(filters.status_id.map(|id| store.status_name(Some(id)))));
        spans.push(Span::styled("  type: ", theme::label()));
        spans.push(chip(filters.type_id.map(|id| store.type_name(Some(id)))));
        spans.push(Span::styled("  manufacturer: ", theme::label()));
        spans.push(chip(
            filters
                .manufacturer_id
                .and_then(|id| store.manufacturer(Some(id)))
                .map(|m| m.name),
        ));

        let block = Block::default()
            .title(" Filters ")
            .title_style(theme::title())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border);

        frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
    }

    fn render_table(&mut self, frame: &mut Frame, area: Rect) {
        let store = self.console.store();
        let filtered = store.filtered();

        // Keep the highlight inside the (possibly shrunken) view.
        match self.table_state.selected() {
            Some(_) if filtered.is_empty() => self.table_state.select(None),
            Some(i) if i >= filtered.len() => self.table_state.select(Some(filtered.len() - 1)),
            None if !filtered.is_empty() => self.table_state.select(Some(0)),
            _ => {}
        }

        let header = Row::new(vec!["ID", "Name", "Model", "Serial", "Status"])
            .style(theme::title());

        let rows: Vec<Row> = filtered
            .iter()
            .map(|c| {
                Row::new(vec![
                    Cell::from(c.id.to_string()),
                    Cell::from(c.name.clone().unwrap_or_else(|| "-".into())),
                    Cell::from(c.model.clone().unwrap_or_else(|| "-".into())),
                    Cell::from(c.serial_number.clone().unwrap_or_else(|| "-".into())),
                    Cell::from(store.status_name(c.status_id)),
                ])
            })
            .collect();

        let title = format!(
            " Conditioners ({} of {}) ",
            filtered.len(),
            store.conditioners().len()
        );

        let table = Table::new(
            rows,
            [
                Constraint::Length(5),
                Constraint::Min(14),
                Constraint::Min(10),
                Constraint::Min(10),
                Constraint::Min(10),
            ],
        )
        .header(header)
        .row_highlight_style(theme::selected_row())
        .block(
            Block::default()
                .title(title)
                .title_style(theme::title())
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(theme::border()),
        );

        frame.render_stateful_widget(table, area, &mut self.table_state);
    }

    fn render_details(&self, frame: &mut Frame, area: Rect) {
        let store = self.console.store();

        let lines = match self.selected() {
            Some(c) => {
                let manufacturer = store.manufacturer(c.manufacturer_id).map_or_else(
                    || "Unknown".to_owned(),
                    |m| match m.country {
                        Some(country) => format!("{} ({country})", m.name),
                        None => m.name,
                    },
                );

                vec![
                    detail_line("Name", c.name.as_deref().unwrap_or("-")),
                    detail_line("Model", c.model.as_deref().unwrap_or("-")),
                    detail_line("Serial", c.serial_number.as_deref().unwrap_or("-")),
                    detail_line("Location", c.location.as_deref().unwrap_or("-")),
                    detail_line(
                        "Installed",
                        &c.installation_date
                            .map_or_else(|| "-".into(), |d| d.to_string()),
                    ),
                    detail_line("Status", &store.status_name(c.status_id)),
                    detail_line("Type", &store.type_name(c.type_id)),
                    detail_line("Manufacturer", &manufacturer),
                ]
            }
            None => vec![Line::from(Span::styled(
                "Nothing selected",
                theme::label(),
            ))],
        };

        let block = Block::default()
            .title(" Details ")
            .title_style(theme::title())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border());

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_status_bar(&mut self, frame: &mut Frame, area: Rect) {
        let store = self.console.store();

        if store.loading() || self.console.saving() {
            let split =
                Layout::horizontal([Constraint::Length(12), Constraint::Min(1)]).split(area);
            let throbber = Throbber::default()
                .label("working…")
                .throbber_style(Style::default().fg(theme::WARNING));
            frame.render_stateful_widget(throbber, split[0], &mut self.throbber);
            self.render_hints(frame, split[1]);
            return;
        }

        if let Some(error) = store.error() {
            frame.render_widget(
                Paragraph::new(Line::from(vec![
                    Span::styled(" ✗ ", Style::default().fg(theme::ERROR)),
                    Span::styled(error, Style::default().fg(theme::ERROR)),
                    Span::styled("  (r to retry)", theme::key_hint()),
                ])),
                area,
            );
            return;
        }

        self.render_hints(frame, area);
    }

    fn render_hints(&self, frame: &mut Frame, area: Rect) {
        let hints = Line::from(vec![
            Span::styled(" /", theme::key_hint_key()),
            Span::styled(" search ", theme::key_hint()),
            Span::styled("s/t/m", theme::key_hint_key()),
            Span::styled(" filter ", theme::key_hint()),
            Span::styled("c", theme::key_hint_key()),
            Span::styled(" clear ", theme::key_hint()),
            Span::styled("n", theme::key_hint_key()),
            Span::styled(" new ", theme::key_hint()),
            Span::styled("e", theme::key_hint_key()),
            Span::styled(" edit ", theme::key_hint()),
            Span::styled("d", theme::key_hint_key()),
            Span::styled(" delete ", theme::key_hint()),
            Span::styled("r", theme::key_hint_key()),
            Span::styled(" refresh ", theme::key_hint()),
            Span::styled("q", theme::key_hint_key()),
            Span::styled(" quit", theme::key_hint()),
        ]);
        frame.render_widget(Paragraph::new(hints), area);
    }
}

// ── Helpers ──────────────────────────────────────────────────────────

/// Advance an optional filter through `None -> ids[0] -> … -> None`.
fn next_option(current: Option<i64>, ids: &[i64]) -> Option<i64> {
    match current {
        None => ids.first().copied(),
        Some(id) => {
            let pos = ids.iter().position(|&i| i == id);
            match pos {
                Some(p) if p + 1 < ids.len() => Some(ids[p + 1]),
                _ => None,
            }
        }
    }
}

fn chip(value: Option<String>) -> Span<'static> {
    match value {
        Some(name) => Span::styled(name, theme::border_focused()),
        None => Span::styled("all".to_owned(), theme::label()),
    }
}

fn detail_line<'a>(label: &'a str, value: &str) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{label:>13}: "), theme::label()),
        Span::raw(value.to_owned()),
    ])
}

#[cfg(test)]
mod tests {
    use super::next_option;

    #[test]
    fn cycles_through_none_and_every_id() {
        let ids = [1, 5, 9];
        assert_eq!(next_option(None, &ids), Some(1));
        assert_eq!(next_option(Some(1), &ids), Some(5));
        assert_eq!(next_option(Some(5), &ids), Some(9));
        assert_eq!(next_option(Some(9), &ids), None);
    }

    #[test]
    fn unknown_or_empty_wraps_to_none() {
        assert_eq!(next_option(Some(42), &[1, 2]), None);
        assert_eq!(next_option(None, &[]), None);
    }
}
