//! Service Layer
//!
//! Abstraction over the remote stats/prediction backend: an HTTP client
//! plus a hub that executes round trips on a background tokio runtime and
//! reports outcomes to the UI layer as events.
//!
//! ## Architecture
//!
//! ```text
//! UI (pages, controllers)
//!        │ ServiceCommand
//!        ▼
//! ┌─────────────────────────────┐
//! │         ServiceHub          │
//! │  background thread + tokio  │
//! │   ┌──────────────────────┐  │
//! │   │      BackendApi      │  │
//! │   │  GET /stats          │  │
//! │   │  POST /predict       │  │
//! │   └──────────────────────┘  │
//! └─────────────────────────────┘
//!        │ AppEvent
//!        ▼
//! Workspace event pump -> state entities
//! ```

pub mod backend_api;
pub mod service_hub;
