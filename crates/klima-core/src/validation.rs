// ── Client-side draft validation ──
//
// Field-level checks run before submission; a failing draft never reaches
// the network layer. Inputs arrive as raw form strings and selections, and
// a successful validation produces the typed, ready-to-send draft.

use chrono::NaiveDate;

use crate::model::{Conditioner, ConditionerDraft};

/// Raw form input for a conditioner draft, as typed/selected by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftInput {
    pub name: String,
    pub model: String,
    pub serial_number: String,
    pub location: String,
    /// ISO date as typed, `YYYY-MM-DD`.
    pub installation_date: String,
    pub status_id: Option<i64>,
    pub type_id: Option<i64>,
    pub manufacturer_id: Option<i64>,
}

impl DraftInput {
    /// Prefill a form from an existing record (edit flow). Missing fields
    /// come through as empty strings.
    pub fn from_conditioner(conditioner: &Conditioner) -> Self {
        Self {
            name: conditioner.name.clone().unwrap_or_default(),
            model: conditioner.model.clone().unwrap_or_default(),
            serial_number: conditioner.serial_number.clone().unwrap_or_default(),
            location: conditioner.location.clone().unwrap_or_default(),
            installation_date: conditioner
                .installation_date
                .map(|d| d.to_string())
                .unwrap_or_default(),
            status_id: conditioner.status_id,
            type_id: conditioner.type_id,
            manufacturer_id: conditioner.manufacturer_id,
        }
    }
}

/// One failed field with its display message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: &str) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Validate raw input into a sendable draft, or report every failing field.
pub fn validate(input: &DraftInput) -> Result<ConditionerDraft, Vec<FieldError>> {
    let mut errors = Vec::new();

    check_text(&mut errors, "name", &input.name, "Name", 100);
    check_text(&mut errors, "model", &input.model, "Model", 50);
    check_text(
        &mut errors,
        "serialNumber",
        &input.serial_number,
        "Serial number",
        50,
    );
    check_text(&mut errors, "location", &input.location, "Location", 200);

    let installation_date = if input.installation_date.is_empty() {
        errors.push(FieldError::new(
            "installationDate",
            "Installation date is required",
        ));
        None
    } else {
        match NaiveDate::parse_from_str(&input.installation_date, "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(_) => {
                errors.push(FieldError::new("installationDate", "Invalid date format"));
                None
            }
        }
    };

    let status_id = check_selection(&mut errors, "statusId", input.status_id, "Status");
    let type_id = check_selection(&mut errors, "typeId", input.type_id, "Type");
    let manufacturer_id = check_selection(
        &mut errors,
        "manufacturerId",
        input.manufacturer_id,
        "Manufacturer",
    );

    if !errors.is_empty() {
        return Err(errors);
    }

    // Every check pushed an error or produced a value, so these all hold.
    let (Some(installation_date), Some(status_id), Some(type_id), Some(manufacturer_id)) =
        (installation_date, status_id, type_id, manufacturer_id)
    else {
        return Err(errors);
    };

    Ok(ConditionerDraft {
        name: input.name.clone(),
        model: input.model.clone(),
        serial_number: input.serial_number.clone(),
        location: input.location.clone(),
        installation_date,
        status_id,
        type_id,
        manufacturer_id,
    })
}

fn check_text(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    value: &str,
    label: &str,
    max_len: usize,
) {
    if value.is_empty() {
        errors.push(FieldError {
            field,
            message: format!("{label} is required"),
        });
    } else if value.chars().count() > max_len {
        errors.push(FieldError {
            field,
            message: format!("{label} must be less than {max_len} characters"),
        });
    }
}

fn check_selection(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    value: Option<i64>,
    label: &str,
) -> Option<i64> {
    match value {
        Some(id) if id > 0 => Some(id),
        _ => {
            errors.push(FieldError {
                field,
                message: format!("{label} is required"),
            });
            None
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn valid_input() -> DraftInput {
        DraftInput {
            name: "Unit A".into(),
            model: "X-1000".into(),
            serial_number: "SN-0001".into(),
            location: "Server room".into(),
            installation_date: "2024-03-01".into(),
            status_id: Some(1),
            type_id: Some(2),
            manufacturer_id: Some(3),
        }
    }

    #[test]
    fn valid_input_builds_a_draft() {
        let draft = validate(&valid_input()).unwrap();
        assert_eq!(draft.name, "Unit A");
        assert_eq!(draft.installation_date.to_string(), "2024-03-01");
        assert_eq!(draft.manufacturer_id, 3);
    }

    #[test]
    fn empty_input_reports_every_field() {
        let errors = validate(&DraftInput::default()).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![
                "name",
                "model",
                "serialNumber",
                "location",
                "installationDate",
                "statusId",
                "typeId",
                "manufacturerId"
            ]
        );
        assert_eq!(errors[0].message, "Name is required");
        assert_eq!(errors[4].message, "Installation date is required");
        assert_eq!(errors[5].message, "Status is required");
    }

    #[test]
    fn overlong_fields_are_rejected() {
        let mut input = valid_input();
        input.name = "x".repeat(101);
        input.model = "y".repeat(51);

        let errors = validate(&input).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].message, "Name must be less than 100 characters");
        assert_eq!(errors[1].message, "Model must be less than 50 characters");
    }

    #[test]
    fn garbage_date_is_invalid_not_missing() {
        let mut input = valid_input();
        input.installation_date = "03/01/2024".into();

        let errors = validate(&input).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "Invalid date format");
    }

    #[test]
    fn unselected_and_nonpositive_ids_are_rejected() {
        let mut input = valid_input();
        input.status_id = None;
        input.type_id = Some(0);

        let errors = validate(&input).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["statusId", "typeId"]);
    }

    #[test]
    fn edit_prefill_round_trips_through_validation() {
        let conditioner = Conditioner {
            id: 7,
            name: Some("Unit A".into()),
            model: Some("X-1000".into()),
            serial_number: Some("SN-0001".into()),
            location: Some("Roof".into()),
            installation_date: NaiveDate::from_ymd_opt(2023, 7, 15),
            status_id: Some(1),
            type_id: Some(2),
            manufacturer_id: Some(3),
            created_at: None,
            updated_at: None,
        };

        let input = DraftInput::from_conditioner(&conditioner);
        assert_eq!(input.installation_date, "2023-07-15");

        let draft = validate(&input).unwrap();
        assert_eq!(draft.location, "Roof");
        assert_eq!(draft.status_id, 1);
    }
}
