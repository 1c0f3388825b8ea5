#![deny(missing_docs)]

//! # People In Space Models
//!
//! Core data types shared by the People In Space data layer and the
//! terminal front-end.
//!
//! ## Data flow
//!
//! ```text
//! open-notify API
//! ├── /astros.json  → AstrosResponse  → Vec<PersonRecord>
//! └── /iss-now.json → IssNowResponse  → PositionRecord
//!
//! host shell
//! └── "PersonList" | "PersonDetails/{name}" → Route
//! ```
//!
//! ## Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`person`] | `PersonName`, `PersonRecord` |
//! | [`position`] | `PositionRecord` and coordinate formatting |
//! | [`remote`] | Wire formats of the open-notify endpoints |
//! | [`route`] | Screen routes addressable by path |
//! | [`error`] | `ModelError` |

pub mod error;
pub mod person;
pub mod position;
pub mod remote;
pub mod route;

// Re-export all public types at crate root for convenience.
pub use error::*;
pub use person::*;
pub use position::*;
pub use remote::*;
pub use route::*;
