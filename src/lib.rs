//! Portfolio desktop shell and its OAuth relay.

pub mod app;
pub mod io;
pub mod layout;
pub mod logging;
pub mod model;
pub mod relay;
pub mod shell;
pub mod ui;
