mod bot;
mod form;
mod network;
mod submission;
mod ui;

use crux_core::{render::render, Command};

use crate::events::Event;
use crate::model::Model;
use crate::Effect;

/// Main update dispatcher - routes events to domain-specific handlers
pub fn update(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        Event::Initialize(settings) => {
            model.settings = settings;
            render()
        }
        Event::Form(form_event) => form::handle(form_event, model),
        Event::Submission(submission_event) => submission::handle(submission_event, model),
        Event::Network(network_event) => network::handle(network_event, model),
        Event::Bot(bot_event) => bot::handle(bot_event, model),
        Event::Ui(ui_event) => ui::handle(ui_event, model),
    }
}
