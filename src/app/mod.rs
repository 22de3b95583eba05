// Application layer: the interactive shell, its terminal adapter and one-shot runs.

pub mod console;
pub mod oneshot;
pub mod shell;

pub use console::Console;
pub use oneshot::convert_once;
pub use shell::{MenuChoice, Shell, ShellSignal};
