//! Create/edit form — one overlay for both flows.
//!
//! Text fields are free-typed; the three foreign keys are pickers cycled
//! with Left/Right out of the loaded lookup collections. Submission runs
//! the shared field validation first, so an invalid draft never leaves
//! this screen, and the screen stays open when the server rejects a valid
//! one (the error arrives as a toast).

use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};
use tui_input::Input;
use tui_input::backend::crossterm::EventHandler;

use klima_core::{Conditioner, ConditionerDraft, Console, DraftInput, FieldError, validation};

use crate::theme;
use crate::widgets::centered_rect;

#[derive(Debug, Clone, Copy)]
pub enum FormMode {
    Create,
    Edit(i64),
}

pub enum FormAction {
    Cancel,
    Submit { mode: FormMode, draft: ConditionerDraft },
}

/// Field order: five text inputs, then the three pickers.
const FIELD_COUNT: usize = 8;

pub struct FormScreen {
    console: Console,
    mode: FormMode,
    name: Input,
    model: Input,
    serial_number: Input,
    location: Input,
    installation_date: Input,
    status_id: Option<i64>,
    type_id: Option<i64>,
    manufacturer_id: Option<i64>,
    focus: usize,
    errors: Vec<FieldError>,
}

impl FormScreen {
    pub fn create(console: Console) -> Self {
        // New units default to today, like a fresh paper form would.
        let today = chrono::Local::now().date_naive().to_string();
        Self {
            console,
            mode: FormMode::Create,
            name: Input::default(),
            model: Input::default(),
            serial_number: Input::default(),
            location: Input::default(),
            installation_date: Input::new(today),
            status_id: None,
            type_id: None,
            manufacturer_id: None,
            focus: 0,
            errors: Vec::new(),
        }
    }

    pub fn edit(console: Console, conditioner: &Conditioner) -> Self {
        let prefill = DraftInput::from_conditioner(conditioner);
        Self {
            console,
            mode: FormMode::Edit(conditioner.id),
            name: Input::new(prefill.name),
            model: Input::new(prefill.model),
            serial_number: Input::new(prefill.serial_number),
            location: Input::new(prefill.location),
            installation_date: Input::new(prefill.installation_date),
            status_id: prefill.status_id,
            type_id: prefill.type_id,
            manufacturer_id: prefill.manufacturer_id,
            focus: 0,
            errors: Vec::new(),
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    // ── Input handling ───────────────────────────────────────────────

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<FormAction> {
        match key.code {
            KeyCode::Esc => return Some(FormAction::Cancel),
            KeyCode::Tab | KeyCode::Down => self.focus = (self.focus + 1) % FIELD_COUNT,
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = (self.focus + FIELD_COUNT - 1) % FIELD_COUNT;
            }
            KeyCode::Enter => return self.submit(),
            _ => self.edit_focused(key),
        }
        None
    }

    fn edit_focused(&mut self, key: KeyEvent) {
        match self.focus {
            0..=4 => {
                let input = match self.focus {
                    0 => &mut self.name,
                    1 => &mut self.model,
                    2 => &mut self.serial_number,
                    3 => &mut self.location,
                    _ => &mut self.installation_date,
                };
                input.handle_event(&CrosstermEvent::Key(key));
            }
            5 => self.status_id = self.cycle_picker(key, self.status_id, PickerKind::Status),
            6 => self.type_id = self.cycle_picker(key, self.type_id, PickerKind::Type),
            7 => {
                self.manufacturer_id =
                    self.cycle_picker(key, self.manufacturer_id, PickerKind::Manufacturer);
            }
            _ => {}
        }
    }

    fn cycle_picker(&self, key: KeyEvent, current: Option<i64>, kind: PickerKind) -> Option<i64> {
        let bundle = self.console.store().lookups();
        let ids: Vec<i64> = match kind {
            PickerKind::Status => bundle.statuses.iter().map(|s| s.id).collect(),
            PickerKind::Type => bundle.types.iter().map(|t| t.id).collect(),
            PickerKind::Manufacturer => bundle.manufacturers.iter().map(|m| m.id).collect(),
        };

        match key.code {
            KeyCode::Right | KeyCode::Char(' ') => step(current, &ids, 1),
            KeyCode::Left => step(current, &ids, -1),
            _ => current,
        }
    }

    fn submit(&mut self) -> Option<FormAction> {
        if self.console.saving() {
            return None;
        }

        let input = DraftInput {
            name: self.name.value().to_owned(),
            model: self.model.value().to_owned(),
            serial_number: self.serial_number.value().to_owned(),
            location: self.location.value().to_owned(),
            installation_date: self.installation_date.value().to_owned(),
            status_id: self.status_id,
            type_id: self.type_id,
            manufacturer_id: self.manufacturer_id,
        };

        match validation::validate(&input) {
            Ok(draft) => {
                self.errors.clear();
                Some(FormAction::Submit {
                    mode: self.mode,
                    draft,
                })
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    fn error_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    // ── Rendering ────────────────────────────────────────────────────

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let rect = centered_rect(area, 64, 15);

        let title = match self.mode {
            FormMode::Create => " New conditioner ".to_owned(),
            FormMode::Edit(id) => format!(" Edit conditioner #{id} "),
        };

        let block = Block::default()
            .title(title)
            .title_style(theme::title())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_focused());

        let store = self.console.store();
        let status = self.status_id.map(|id| store.status_name(Some(id)));
        let unit_type = self.type_id.map(|id| store.type_name(Some(id)));
        let manufacturer = self
            .manufacturer_id
            .and_then(|id| store.manufacturer(Some(id)))
            .map(|m| m.name);

        let mut lines = vec![
            self.text_line(0, "Name", self.name.value(), "name"),
            self.text_line(1, "Model", self.model.value(), "model"),
            self.text_line(2, "Serial number", self.serial_number.value(), "serialNumber"),
            self.text_line(3, "Location", self.location.value(), "location"),
            self.text_line(
                4,
                "Installed",
                self.installation_date.value(),
                "installationDate",
            ),
            self.picker_line(5, "Status", status, "statusId"),
            self.picker_line(6, "Type", unit_type, "typeId"),
            self.picker_line(7, "Manufacturer", manufacturer, "manufacturerId"),
            Line::from(""),
        ];

        if self.console.saving() {
            lines.push(Line::from(Span::styled("Saving…", theme::label())));
        } else {
            lines.push(Line::from(vec![
                Span::styled("Tab", theme::key_hint_key()),
                Span::styled(" next  ", theme::key_hint()),
                Span::styled("←/→", theme::key_hint_key()),
                Span::styled(" pick  ", theme::key_hint()),
                Span::styled("Enter", theme::key_hint_key()),
                Span::styled(" save  ", theme::key_hint()),
                Span::styled("Esc", theme::key_hint_key()),
                Span::styled(" cancel", theme::key_hint()),
            ]));
        }

        frame.render_widget(Clear, rect);
        frame.render_widget(Paragraph::new(lines).block(block), rect);
    }

    fn text_line<'a>(&self, index: usize, label: &'a str, value: &'a str, field: &str) -> Line<'a> {
        let focused = self.focus == index;
        let mut spans = vec![
            Span::styled(
                format!("{label:>14}: "),
                if focused {
                    theme::border_focused()
                } else {
                    theme::label()
                },
            ),
            Span::raw(value),
        ];
        if focused {
            spans.push(Span::styled("▏", theme::border_focused()));
        }
        if let Some(message) = self.error_for(field) {
            spans.push(Span::styled(format!("  {message}"), theme::field_error()));
        }
        Line::from(spans)
    }

    fn picker_line<'a>(
        &self,
        index: usize,
        label: &'a str,
        value: Option<String>,
        field: &str,
    ) -> Line<'a> {
        let focused = self.focus == index;
        let mut spans = vec![Span::styled(
            format!("{label:>14}: "),
            if focused {
                theme::border_focused()
            } else {
                theme::label()
            },
        )];

        match value {
            Some(name) => spans.push(Span::raw(name)),
            None => spans.push(Span::styled("(select)".to_owned(), theme::label())),
        }
        if focused {
            spans.push(Span::styled(" ◂ ▸", theme::key_hint_key()));
        }
        if let Some(message) = self.error_for(field) {
            spans.push(Span::styled(format!("  {message}"), theme::field_error()));
        }
        Line::from(spans)
    }
}

enum PickerKind {
    Status,
    Type,
    Manufacturer,
}

/// Step through the lookup ids, wrapping at both ends. `None` enters at
/// the first entry; an empty lookup stays unselected.
fn step(current: Option<i64>, ids: &[i64], direction: i64) -> Option<i64> {
    if ids.is_empty() {
        return None;
    }
    let Some(id) = current else {
        return ids.first().copied();
    };
    let Some(pos) = ids.iter().position(|&i| i == id) else {
        return ids.first().copied();
    };

    let len = ids.len();
    let next = if direction >= 0 {
        (pos + 1) % len
    } else {
        (pos + len - 1) % len
    };
    Some(ids[next])
}

#[cfg(test)]
mod tests {
    use super::step;

    #[test]
    fn step_wraps_both_directions() {
        let ids = [1, 2, 3];
        assert_eq!(step(None, &ids, 1), Some(1));
        assert_eq!(step(Some(3), &ids, 1), Some(1));
        assert_eq!(step(Some(1), &ids, -1), Some(3));
        assert_eq!(step(Some(2), &ids, 1), Some(3));
    }

    #[test]
    fn step_handles_empty_and_stale_ids() {
        assert_eq!(step(Some(1), &[], 1), None);
        assert_eq!(step(Some(99), &[4, 5], 1), Some(4));
    }
}
