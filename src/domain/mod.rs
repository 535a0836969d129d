//! Domain Layer
//!
//! The value-object model of the deployment service - pure data without I/O.
//!
//! ## Structure
//!
//! - `value_objects/` - Enumerations and leaf values (statuses, Tag)
//! - `entities/` - Nested composites and service descriptions
//! - `operations/` - Request/result pairs, one module per remote operation
//! - `ports/` - The `DeploymentService` trait and its `ServiceError`
//! - `support/` - Stable hashing and textual rendering shared by every type
//!
//! ## Design Principles
//!
//! 1. **No I/O** - Nothing here touches the network or the file system
//! 2. **Absence is a value** - Every field is optional and `None` never means empty
//! 3. **Ports & Adapters** - The transport lives behind `DeploymentService`

pub mod entities;
pub mod operations;
pub mod ports;
pub mod support;
pub mod value_objects;
