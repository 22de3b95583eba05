use crate::utils::error::Result;

/// How a notice should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// The presentation layer that drives the conversion core.
pub trait Interaction {
    /// Ask for a line of text. `Ok(None)` means the prompt was dismissed.
    fn prompt(&mut self, message: &str) -> Result<Option<String>>;

    fn notify(&mut self, level: NoticeLevel, message: &str) -> Result<()>;
}

pub trait ConfigProvider {
    fn output_format(&self) -> &str;
    fn exit_notice(&self) -> bool;
    fn show_menu(&self) -> bool;
    fn log_level(&self) -> &str;
}
