use crux_core::{render::render, Command};

use crate::events::{Event, NetworkEvent};
use crate::handle_response;
use crate::model::Model;
use crate::types::InterfaceError;
use crate::{DeviceCmd, Effect};

/// Handle network interface actions.
///
/// These edit the live document directly and are not part of the submit
/// pipeline.
pub fn handle(event: NetworkEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        NetworkEvent::EnableWired { interface } => {
            let result = model.session.enable_wired(&interface);
            apply_interface_action(model, result)
        }

        NetworkEvent::Scan { interface } => {
            if let Err(e) = model.session.ensure_wireless(&interface) {
                return reject_interface_action(model, e);
            }

            log::debug!("Scanning for WiFi networks on {interface}");
            DeviceCmd::scan(interface.clone())
                .build()
                .then_send(move |output| {
                    Event::Network(NetworkEvent::ScanResponse {
                        interface,
                        result: output.into_ssids(),
                    })
                })
        }

        NetworkEvent::ScanResponse { interface, result } => {
            // the document may have been reloaded while the scan was running
            if let Err(e) = model.session.ensure_wireless(&interface) {
                log::warn!("Ignoring scan result: {e}");
                return Command::done();
            }

            handle_response!(model, result, format!("Scan on {interface}"), {
                on_success: |model, ssids| {
                    if model
                        .selected_ssids
                        .get(&interface)
                        .is_some_and(|selected| !ssids.contains(selected))
                    {
                        model.selected_ssids.remove(&interface);
                    }
                    model.discovered_ssids.insert(interface, ssids);
                },
            })
        }

        NetworkEvent::SsidSelected { interface, ssid } => {
            if let Err(e) = model.session.ensure_wireless(&interface) {
                return reject_interface_action(model, e);
            }
            model.selected_ssids.insert(interface, ssid);
            render()
        }

        NetworkEvent::WirelessSsidChanged { interface, ssid } => {
            let result = model.session.set_wireless_ssid(&interface, ssid);
            apply_interface_action(model, result)
        }

        NetworkEvent::WirelessKeyChanged { interface, key } => {
            let result = model.session.set_wireless_key(&interface, key);
            apply_interface_action(model, result)
        }
    }
}

fn apply_interface_action(
    model: &mut Model,
    result: Result<(), InterfaceError>,
) -> Command<Effect, Event> {
    match result {
        Ok(()) => render(),
        Err(e) => reject_interface_action(model, e),
    }
}

fn reject_interface_action(model: &mut Model, error: InterfaceError) -> Command<Effect, Event> {
    log::error!("Rejected interface action: {error}");
    model.set_error_and_render(format!("Invalid interface action: {error}"))
}
