//! Document-node seams for the migration core.
//!
//! The core never owns the project document: it classifies nodes exposed by
//! an orchestration layer through the traits defined here. Plain data
//! implementations are provided for orchestrators that build documents in
//! memory, and for tests.

mod data;
mod node;
mod workspace;

pub use data::ItemData;
pub use data::ItemGroupData;
pub use data::ProjectRootData;
pub use data::PropertyData;
pub use data::PropertyGroupData;
pub use node::Conditioned;
pub use node::ItemGroup;
pub use node::ProjectItem;
pub use node::ProjectProperty;
pub use node::ProjectRoot;
pub use node::PropertyGroup;
pub use workspace::BaselineProject;
pub use workspace::WorkspaceDescriptor;
