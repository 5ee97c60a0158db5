// Module layout (Clean Architecture style)
// - bootstrap: configuration and startup wiring
// - infrastructure: filesystem and in-memory store adapters
// - presentation: HTTP handlers and routing
// - application: ports, use cases and the markdown link-collection codec
// - domain: core models

pub mod application;
pub mod bootstrap;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
