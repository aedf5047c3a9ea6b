use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use anyhow::{Result, anyhow};

use super::{Prompt, Validator};

/// Scripted prompt. Each `input` call consumes answers until one
/// passes validation, mirroring dialoguer's re-prompt loop.
#[derive(Clone, Default)]
pub struct TestPrompt {
    selections: Arc<Mutex<VecDeque<Option<Vec<usize>>>>>,
    answers: Arc<Mutex<VecDeque<Option<String>>>>,
    shown_items: Arc<Mutex<Vec<Vec<String>>>>,
    rejected: Arc<Mutex<Vec<String>>>,
    input_calls: Arc<Mutex<usize>>,
}

impl TestPrompt {
    pub fn selecting(indices: Vec<usize>) -> Self {
        let prompt = Self::default();
        prompt.push_selection(Some(indices));
        prompt
    }

    pub fn cancelling_selection() -> Self {
        let prompt = Self::default();
        prompt.push_selection(None);
        prompt
    }

    pub fn answering(self, answers: &[&str]) -> Self {
        self.answers
            .lock()
            .expect("lock poisoned")
            .extend(answers.iter().map(|answer| Some(answer.to_string())));
        self
    }

    pub fn cancelling_input(self) -> Self {
        self.answers.lock().expect("lock poisoned").push_back(None);
        self
    }

    fn push_selection(&self, selection: Option<Vec<usize>>) {
        self.selections
            .lock()
            .expect("lock poisoned")
            .push_back(selection);
    }

    pub fn shown_items(&self) -> Vec<Vec<String>> {
        self.shown_items.lock().expect("lock poisoned").clone()
    }

    pub fn rejected(&self) -> Vec<String> {
        self.rejected.lock().expect("lock poisoned").clone()
    }

    pub fn input_calls(&self) -> usize {
        *self.input_calls.lock().expect("lock poisoned")
    }
}

impl Prompt for TestPrompt {
    fn multi_select(&self, _message: &str, items: &[String]) -> Result<Option<Vec<usize>>> {
        self.shown_items
            .lock()
            .expect("lock poisoned")
            .push(items.to_vec());
        let selection = self
            .selections
            .lock()
            .expect("lock poisoned")
            .pop_front()
            .ok_or_else(|| anyhow!("no selections remaining"))?;
        if let Some(indices) = &selection {
            if let Some(index) = indices.iter().find(|index| **index >= items.len()) {
                return Err(anyhow!("selected index {index} out of bounds"));
            }
        }
        Ok(selection)
    }

    fn input(&self, _message: &str, validate: Validator<'_>) -> Result<Option<String>> {
        *self.input_calls.lock().expect("lock poisoned") += 1;
        let mut answers = self.answers.lock().expect("lock poisoned");
        loop {
            match answers.pop_front() {
                None => return Err(anyhow!("no answers remaining")),
                Some(None) => return Ok(None),
                Some(Some(answer)) => match validate(&answer) {
                    Ok(()) => return Ok(Some(answer)),
                    Err(_) => self.rejected.lock().expect("lock poisoned").push(answer),
                },
            }
        }
    }
}
