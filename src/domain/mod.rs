//! Domain Layer
//!
//! This is the core of Wardrobe - pure business logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Core domain entities (Hierarchy, Selection, BuildResult, Ledger)
//! - `value_objects/` - Immutable value types (ObjectPath, ArtifactId, ContentHash)
//! - `services/` - Domain services (ExclusiveSelectorBuilder)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O and host access goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
