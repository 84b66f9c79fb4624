use anyhow::Result;
use configurator_core::{
    events::{BotEvent, FormEvent, NetworkEvent, SubmissionEvent, UiEvent},
    types::{CommitMode, InterfaceDescriptor, ValidationError},
    App, DeviceOperation, DeviceOutput,
};
use crux_core::typegen::TypeGen;
use std::path::PathBuf;

fn main() -> Result<()> {
    println!("cargo:rerun-if-changed=../app");

    let mut gen = TypeGen::new();

    gen.register_app::<App>()?;

    // Explicitly register domain event enums to ensure all variants are traced
    gen.register_type::<FormEvent>()?;
    gen.register_type::<SubmissionEvent>()?;
    gen.register_type::<NetworkEvent>()?;
    gen.register_type::<BotEvent>()?;
    gen.register_type::<UiEvent>()?;

    // Device operations travel through the Shell in both directions
    gen.register_type::<DeviceOperation>()?;
    gen.register_type::<DeviceOutput>()?;

    gen.register_type::<CommitMode>()?;
    gen.register_type::<InterfaceDescriptor>()?;
    gen.register_type::<ValidationError>()?;

    let output_root = PathBuf::from("./generated");

    gen.typescript("shared_types", output_root.join("typescript"))?;

    Ok(())
}
