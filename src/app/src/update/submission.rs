use crux_core::{render::render, Command};

use crate::device_request;
use crate::events::{Event, SubmissionEvent};
use crate::handle_response;
use crate::model::Model;
use crate::types::{CommitMode, Credentials};
use crate::{DeviceCmd, Effect};

/// Handle form submission and the outcomes of the operations it issues
pub fn handle(event: SubmissionEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        SubmissionEvent::Submit => handle_submit(model),

        SubmissionEvent::CredentialsUploadResponse(result) => {
            handle_response!(model, result, "Upload credentials", {
                success_message: "Credentials uploaded",
            })
        }

        SubmissionEvent::ConfigurationPushResponse(result) => {
            handle_response!(model, result, "Push configuration", {
                success_message: "Configuration pushed",
            })
        }

        SubmissionEvent::LoginResponse(result) => handle_response!(model, result, "Login", {
            on_success: |model, _| {
                model.is_logged_in = true;
            },
            success_message: "Logged in",
        }),
    }
}

/// Run the submit pipeline.
///
/// 1. timezone gate, then merge into the document
/// 2. credential gate, then upload credentials
/// 3. push the document, then try to log in
///
/// A failed gate stops everything after it. Operations that pass are issued
/// back to back and none of them waits for another one to complete.
fn handle_submit(model: &mut Model) -> Command<Effect, Event> {
    // every attempt consumes the draft, whatever the outcome
    let draft = std::mem::take(&mut model.draft);

    model.clear_error();
    model.success_message = None;

    let timezone = match draft.timezone() {
        Ok(timezone) => timezone,
        Err(e) => return model.reject_submission(e),
    };

    if model.settings.commit_mode == CommitMode::PreservePartial {
        model.session.set_timezone(timezone);
    }

    let Credentials {
        email,
        password,
        server,
    } = match draft.credentials() {
        Ok(credentials) => credentials,
        Err(e) => return model.reject_submission(e),
    };

    if model.settings.commit_mode == CommitMode::Atomic {
        model.session.set_timezone(timezone);
    }

    let document = match model.session.to_json() {
        Ok(document) => document,
        Err(e) => {
            log::error!("Failed to serialize configuration: {e}");
            return model.set_error_and_render(format!("Failed to serialize configuration: {e}"));
        }
    };

    log::info!("Submitting configuration (timezone {timezone}, server {server})");
    model.is_logged_in = false;

    Command::all([
        render(),
        device_request!(
            Submission,
            SubmissionEvent,
            DeviceCmd::upload_credentials(email, password, server),
            CredentialsUploadResponse
        ),
        device_request!(
            Submission,
            SubmissionEvent,
            DeviceCmd::push_configuration(document),
            ConfigurationPushResponse
        ),
        device_request!(
            Submission,
            SubmissionEvent,
            DeviceCmd::try_log_in(),
            LoginResponse
        ),
    ])
}
