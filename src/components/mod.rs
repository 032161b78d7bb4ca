pub(crate) mod layout;
pub(crate) mod ui;

pub(crate) use layout::{AppShell, PortalLayout};
pub(crate) use ui::{Alert, AlertKind, Button, Spinner};
