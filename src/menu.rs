//! Metadata collection
//!
//! Four free-text strings identify a paper: Publisher, Level, Subject
//! and Year. They are collected once before processing starts and used
//! verbatim in file and folder names, so the operator must avoid
//! path-unsafe characters. The [`Prompt`] trait is the seam that keeps
//! collection scriptable in tests.

use crate::error::Result;
use std::io::{BufRead, Write};

/// A synchronous prompt-and-answer source.
pub trait Prompt {
    fn ask(&mut self, question: &str) -> Result<String>;
}

/// Prompts on stdout and reads answers from stdin.
pub struct StdinPrompt;

impl Prompt for StdinPrompt {
    fn ask(&mut self, question: &str) -> Result<String> {
        print!("{} ", question);
        std::io::stdout().flush()?;

        let mut answer = String::new();
        std::io::stdin().lock().read_line(&mut answer)?;
        Ok(answer.trim().to_string())
    }
}

/// Paper metadata used to name the output folder and image files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExamMeta {
    pub publisher: String,
    pub level: String,
    pub subject: String,
    pub year: String,
}

impl ExamMeta {
    /// Collect the four metadata values interactively. Called exactly
    /// once, before any page is processed.
    pub fn collect(prompt: &mut dyn Prompt) -> Result<Self> {
        Ok(Self {
            publisher: prompt.ask("What Publisher?")?,
            level: prompt.ask("What Level?")?,
            subject: prompt.ask("What Subject?")?,
            year: prompt.ask("What Year?")?,
        })
    }

    /// Common prefix of every exported image filename.
    pub fn file_prefix(&self) -> String {
        format!(
            "{}_{}_{}_{}",
            self.publisher, self.level, self.subject, self.year
        )
    }

    /// Name of the folder the images are written into.
    pub fn folder_name(&self) -> String {
        format!("{}_{}_{}", self.publisher, self.subject, self.year)
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::ScriptedPrompt;
    use super::*;
    use pretty_assertions::assert_eq;

    fn meta() -> ExamMeta {
        ExamMeta {
            publisher: "Pearson".to_string(),
            level: "ALevel".to_string(),
            subject: "Maths".to_string(),
            year: "2023".to_string(),
        }
    }

    #[test]
    fn test_collect_asks_in_order() {
        let mut prompt = ScriptedPrompt::new(&["Pearson", "ALevel", "Maths", "2023"]);
        let collected = ExamMeta::collect(&mut prompt).unwrap();
        assert_eq!(collected, meta());
    }

    #[test]
    fn test_file_prefix() {
        assert_eq!(meta().file_prefix(), "Pearson_ALevel_Maths_2023");
    }

    #[test]
    fn test_folder_name_omits_level() {
        assert_eq!(meta().folder_name(), "Pearson_Maths_2023");
    }
}
