//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers per focused panel
//! - `input`: Mode switching, file selection and text editing
//! - `submission`: Submit, completion and result display
//! - `history`: Loading and navigating stored analyses

pub(crate) mod history;
pub(crate) mod input;
pub(crate) mod keys;
pub(crate) mod submission;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use crate::message::Message;
use mailtriage_client::ClassifyPayload;

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Send the payload to the classification service
    Classify { payload: ClassifyPayload },

    /// Query the service health endpoint
    CheckHealth,

    /// Write text to the system clipboard
    CopyToClipboard { text: String },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
