//! Plain data shared between the murmuration engine and its consumers.

pub mod data;

pub use data::agent::{AgentId, AgentKind};
pub use data::render::{FrameSnapshot, RenderRecord, TickReport};
