use crux_core::Command;

use crate::events::{Event, FormEvent};
use crate::model::Model;
use crate::update_field;
use crate::Effect;

/// Handle form field edits.
///
/// Values are stored verbatim, a missing value from the shell becomes an
/// empty string. Validation happens on submit only.
pub fn handle(event: FormEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        FormEvent::TimezoneChanged(value) => {
            update_field!(model.draft.timezone, Some(value.unwrap_or_default()))
        }
        FormEvent::EmailChanged(value) => {
            update_field!(model.draft.email, Some(value.unwrap_or_default()))
        }
        FormEvent::PasswordChanged(value) => {
            update_field!(model.draft.password, Some(value.unwrap_or_default()))
        }
        FormEvent::ServerChanged(value) => {
            update_field!(model.draft.server, Some(value.unwrap_or_default()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DraftFields;

    #[test]
    fn fields_start_unset() {
        let model = Model::default();

        assert_eq!(model.current_draft(), &DraftFields::default());
        assert_eq!(model.draft.password, None);
    }

    #[test]
    fn edits_are_stored_verbatim() {
        let mut model = Model::default();

        let _ = handle(
            FormEvent::TimezoneChanged(Some("Not/A_Zone".to_string())),
            &mut model,
        );
        let _ = handle(FormEvent::EmailChanged(Some("a@".to_string())), &mut model);
        let _ = handle(
            FormEvent::PasswordChanged(Some(" x ".to_string())),
            &mut model,
        );
        let _ = handle(
            FormEvent::ServerChanged(Some("https://x".to_string())),
            &mut model,
        );

        assert_eq!(
            model.current_draft(),
            &DraftFields {
                timezone: Some("Not/A_Zone".to_string()),
                email: Some("a@".to_string()),
                password: Some(" x ".to_string()),
                server: Some("https://x".to_string()),
            }
        );
    }

    #[test]
    fn missing_input_becomes_empty_not_unset() {
        let mut model = Model::default();

        let _ = handle(FormEvent::PasswordChanged(None), &mut model);
        let _ = handle(FormEvent::TimezoneChanged(None), &mut model);

        assert_eq!(model.draft.password, Some(String::new()));
        assert_eq!(model.draft.timezone, Some(String::new()));
        assert_eq!(model.draft.email, None);
    }

    #[test]
    fn cleared_field_is_empty_string() {
        let mut model = Model::default();

        let _ = handle(FormEvent::EmailChanged(Some("a".to_string())), &mut model);
        let _ = handle(FormEvent::EmailChanged(Some(String::new())), &mut model);

        assert_eq!(model.draft.email, Some(String::new()));
    }

    #[test]
    fn edits_do_not_report_validation_errors() {
        let mut model = Model::default();

        let _ = handle(FormEvent::EmailChanged(Some("a".to_string())), &mut model);

        assert_eq!(model.validation_error, None);
        assert_eq!(model.error_message, None);
    }

    #[test]
    fn unchanged_value_does_not_render() {
        let mut model = Model::default();
        let _ = handle(FormEvent::ServerChanged(Some("s".to_string())), &mut model);

        let mut command = handle(FormEvent::ServerChanged(Some("s".to_string())), &mut model);

        assert!(command.effects().next().is_none());
    }
}
