use crate::core::engine::{render_record, ConversionEngine};
use crate::core::{ConfigProvider, ConversionKind, ConversionOutcome, Interaction, NoticeLevel};
use crate::utils::error::Result;
use std::str::FromStr;

pub const EXIT_NOTICE: &str = "The window is now closing.";
pub const MENU_PROMPT: &str = "Select an option:";

/// What the user picked from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Convert(ConversionKind),
    Exit,
}

impl FromStr for MenuChoice {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "distance" => Ok(MenuChoice::Convert(ConversionKind::Distance)),
            "2" | "temperature" => Ok(MenuChoice::Convert(ConversionKind::Temperature)),
            "3" | "exit" | "quit" => Ok(MenuChoice::Exit),
            _ => Err(()),
        }
    }
}

/// Why the shell stopped. Returned to the caller instead of ending the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellSignal {
    /// The user chose Exit.
    Close,
    /// Input ended while the menu was waiting.
    EndOfInput,
}

pub struct Shell<I: Interaction> {
    interaction: I,
    engine: ConversionEngine,
    exit_notice: bool,
    show_menu: bool,
    json: bool,
}

impl<I: Interaction> Shell<I> {
    pub fn new(interaction: I) -> Self {
        Self {
            interaction,
            engine: ConversionEngine::new(),
            exit_notice: true,
            show_menu: true,
            json: false,
        }
    }

    pub fn with_config<C: ConfigProvider>(interaction: I, config: &C) -> Self {
        Self {
            exit_notice: config.exit_notice(),
            show_menu: config.show_menu(),
            json: config.output_format().eq_ignore_ascii_case("json"),
            ..Self::new(interaction)
        }
    }

    pub fn into_inner(self) -> I {
        self.interaction
    }

    /// Menu loop: one conversion per choice until Exit or end of input.
    pub fn run(&mut self) -> Result<ShellSignal> {
        tracing::info!("Interactive shell started");

        loop {
            if self.show_menu {
                self.display_menu()?;
            }

            let Some(answer) = self.interaction.prompt(MENU_PROMPT)? else {
                tracing::info!("Input closed, leaving shell");
                return Ok(ShellSignal::EndOfInput);
            };

            match answer.parse::<MenuChoice>() {
                Ok(MenuChoice::Convert(kind)) => {
                    self.run_conversion(kind)?;
                }
                Ok(MenuChoice::Exit) => {
                    if self.exit_notice {
                        self.interaction.notify(NoticeLevel::Info, EXIT_NOTICE)?;
                    }
                    tracing::info!("Exit chosen, closing shell");
                    return Ok(ShellSignal::Close);
                }
                Err(()) => {
                    let message = format!("Unknown option '{}'.", answer.trim());
                    self.interaction.notify(NoticeLevel::Error, &message)?;
                }
            }
        }
    }

    /// Prompt for one value and show the outcome.
    ///
    /// Returns `None` when the prompt was dismissed; nothing is shown then.
    pub fn run_conversion(&mut self, kind: ConversionKind) -> Result<Option<ConversionOutcome>> {
        let Some(raw) = self.interaction.prompt(kind.prompt())? else {
            tracing::debug!("{} prompt dismissed", kind);
            return Ok(None);
        };

        let outcome = self.engine.run(kind, &raw);
        match &outcome {
            ConversionOutcome::Success(record) => {
                let rendered = render_record(record, self.json)?;
                self.interaction.notify(NoticeLevel::Info, &rendered)?;
            }
            ConversionOutcome::Failure(e) => {
                self.interaction.notify(NoticeLevel::Error, &e.to_string())?;
            }
        }

        Ok(Some(outcome))
    }

    fn display_menu(&mut self) -> Result<()> {
        for (index, kind) in ConversionKind::ALL.iter().enumerate() {
            let line = format!("{}) {}", index + 1, kind.label());
            self.interaction.notify(NoticeLevel::Info, &line)?;
        }
        let exit_line = format!("{}) Exit", ConversionKind::ALL.len() + 1);
        self.interaction.notify(NoticeLevel::Info, &exit_line)
    }
}
