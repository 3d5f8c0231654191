//! Custom widget components

mod header;
mod history_list;
mod input_panel;
mod key_hints;
mod result_view;
mod toast;

pub use header::MainHeader;
pub use history_list::HistoryList;
pub use input_panel::InputPanel;
pub use key_hints::KeyHints;
pub use result_view::{spinner_frame, ResultPanel, SPINNER};
pub use toast::ToastView;
