use crate::error::Result;
use crate::prompt::LinePrompter;
use crate::prompt_rl::RustylinePrompter;

pub enum Backend {
    Rustyline,
}

pub fn open_prompter(backend: Backend) -> Result<Box<dyn LinePrompter>> {
    match backend {
        Backend::Rustyline => Ok(Box::new(RustylinePrompter::new()?)),
    }
}
