//! Generated TypeScript bindings for the configurator core live in `generated/`.
