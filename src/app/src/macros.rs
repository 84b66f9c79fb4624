/// Macro for model field updates with automatic rendering.
/// Supports both single and multiple field updates.
///
/// # Examples
///
/// Single field update:
/// ```ignore
/// update_field!(model.is_connected, true)
/// ```
///
/// Multiple field updates:
/// ```ignore
/// update_field!(
///     model.is_connected, false;
///     model.is_logged_in, false
/// )
/// ```
#[macro_export]
macro_rules! update_field {
    // Multiple field updates (must come first to match the pattern)
    ($($model_field:expr, $value:expr);+ $(;)?) => {{
        let mut changed = false;
        $(
            let value = $value;
            if $model_field != value {
                $model_field = value;
                changed = true;
            }
        )+
        if changed {
            crux_core::render::render()
        } else {
            crux_core::Command::done()
        }
    }};

    // Single field update
    ($model_field:expr, $value:expr) => {{
        update_field!($model_field, $value;)
    }};
}

/// Macro for issuing a device operation whose output carries no payload.
/// The output is mapped into `Result<(), String>` and wrapped into the given
/// domain response event.
///
/// # Example
/// ```ignore
/// device_request!(Submission, SubmissionEvent, DeviceCmd::try_log_in(), LoginResponse)
/// ```
#[macro_export]
macro_rules! device_request {
    ($domain:ident, $domain_event:ident, $request:expr, $response_event:ident) => {
        $request.build().then_send(|output| {
            $crate::events::Event::$domain($crate::events::$domain_event::$response_event(
                output.into_result(),
            ))
        })
    };
}

/// Macro for handling response events with standard error handling.
/// Failures are logged and stored as transport errors.
///
/// # Patterns
///
/// Pattern 1: Only success message (for `Result<(), String>`)
/// ```ignore
/// handle_response!(model, result, "Push configuration", {
///     success_message: "Configuration pushed",
/// })
/// ```
///
/// Pattern 2: Custom success handling
/// ```ignore
/// handle_response!(model, result, "Scan", {
///     on_success: |m, value| {
///         m.some_field = value;
///     },
/// })
/// ```
///
/// Pattern 3: Custom success handler + success message
/// ```ignore
/// handle_response!(model, result, "Login", {
///     on_success: |m, _| {
///         m.is_logged_in = true;
///     },
///     success_message: "Logged in",
/// })
/// ```
#[macro_export]
macro_rules! handle_response {
    // Pattern 1: Only success message (for Result<(), String>)
    ($model:expr, $result:expr, $action:expr, {
        success_message: $msg:expr $(,)?
    }) => {{
        match $result {
            Ok(()) => {
                $model.success_message = Some($msg.to_string());
            }
            Err(e) => {
                log::error!("{} failed: {e}", $action);
                $model.set_error(format!("{} failed: {e}", $action));
            }
        }
        crux_core::render::render()
    }};

    // Pattern 2: Only custom success handler
    ($model:expr, $result:expr, $action:expr, {
        on_success: |$success_model:ident, $value:tt| $success_body:block $(,)?
    }) => {{
        match $result {
            Ok($value) => {
                let $success_model = &mut *$model;
                $success_body
            }
            Err(e) => {
                log::error!("{} failed: {e}", $action);
                $model.set_error(format!("{} failed: {e}", $action));
            }
        }
        crux_core::render::render()
    }};

    // Pattern 3: Custom success handler + success message
    ($model:expr, $result:expr, $action:expr, {
        on_success: |$success_model:ident, $value:tt| $success_body:block,
        success_message: $msg:expr $(,)?
    }) => {{
        match $result {
            Ok($value) => {
                let $success_model = &mut *$model;
                $success_body
                $model.success_message = Some($msg.to_string());
            }
            Err(e) => {
                log::error!("{} failed: {e}", $action);
                $model.set_error(format!("{} failed: {e}", $action));
            }
        }
        crux_core::render::render()
    }};
}
