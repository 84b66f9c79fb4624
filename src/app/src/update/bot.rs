use crux_core::{render::render, Command};

use crate::events::{BotEvent, Event};
use crate::model::Model;
use crate::types::ConfigurationSession;
use crate::update_field;
use crate::Effect;

/// Handle events from the device link (connection, logs, stored configuration)
pub fn handle(event: BotEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        BotEvent::Connected => update_field!(model.is_connected, true),
        BotEvent::Disconnected => update_field!(
            model.is_connected, false;
            model.is_logged_in, false
        ),
        BotEvent::ConfigurationLoaded { config } => {
            match ConfigurationSession::from_json(&config) {
                Ok(session) => {
                    log::info!("Configuration loaded");
                    model.session = session;
                    model.drop_stale_ssids();
                    render()
                }
                Err(e) => {
                    log::error!("Failed to parse configuration: {e}");
                    model.set_error_and_render(format!("Failed to parse configuration: {e}"))
                }
            }
        }
        BotEvent::LogReceived(log_message) => update_field!(model.last_log, Some(log_message)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ConfigFile, InterfaceDescriptor, LogMessage};

    #[test]
    fn loaded_configuration_replaces_document() {
        let mut model = Model::default();
        let config = r#"{
            "timezone": "Europe/Berlin",
            "network": { "interfaces": { "eth0": { "wired": { "default": "manual" } } } }
        }"#
        .to_string();

        let _ = handle(BotEvent::ConfigurationLoaded { config }, &mut model);

        assert_eq!(model.document().timezone.as_deref(), Some("Europe/Berlin"));
        assert_eq!(
            model.document().interface("eth0"),
            Some(&InterfaceDescriptor::wired("manual"))
        );
        assert_eq!(model.error_message, None);
    }

    #[test]
    fn malformed_configuration_keeps_document() {
        let document = ConfigFile {
            timezone: Some("GMT".to_string()),
            network: None,
        };
        let mut model = Model {
            session: ConfigurationSession::new(document.clone()),
            ..Default::default()
        };

        let _ = handle(
            BotEvent::ConfigurationLoaded {
                config: "{ not json".to_string(),
            },
            &mut model,
        );

        assert_eq!(model.document(), &document);
        assert!(model
            .error_message
            .as_deref()
            .is_some_and(|e| e.starts_with("Failed to parse configuration")));
    }

    #[test]
    fn reload_forgets_ssids_of_vanished_interfaces() {
        let mut model = Model::default();
        for interface in ["wlan0", "wlan1"] {
            model
                .discovered_ssids
                .insert(interface.to_string(), vec!["farm".to_string()]);
            model
                .selected_ssids
                .insert(interface.to_string(), "farm".to_string());
        }
        let config = r#"{
            "network": {
                "interfaces": {
                    "wlan0": { "wireless": {} },
                    "wlan1": { "wired": { "default": "manual" } }
                }
            }
        }"#
        .to_string();

        let _ = handle(BotEvent::ConfigurationLoaded { config }, &mut model);

        assert!(model.discovered_ssids.contains_key("wlan0"));
        assert!(model.selected_ssids.contains_key("wlan0"));
        assert!(!model.discovered_ssids.contains_key("wlan1"));
        assert!(!model.selected_ssids.contains_key("wlan1"));
    }

    #[test]
    fn disconnect_drops_login_state() {
        let mut model = Model {
            is_connected: true,
            is_logged_in: true,
            ..Default::default()
        };

        let _ = handle(BotEvent::Disconnected, &mut model);

        assert!(!model.is_connected);
        assert!(!model.is_logged_in);
    }

    #[test]
    fn keeps_latest_log_line() {
        let mut model = Model::default();

        let _ = handle(
            BotEvent::LogReceived(LogMessage {
                message: "booting".to_string(),
                created_at: None,
            }),
            &mut model,
        );
        let _ = handle(
            BotEvent::LogReceived(LogMessage {
                message: "ready".to_string(),
                created_at: Some(1_700_000_000),
            }),
            &mut model,
        );

        assert_eq!(
            model.last_log.as_ref().map(|log| log.message.as_str()),
            Some("ready")
        );
    }
}
