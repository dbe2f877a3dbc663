//! Prompt templates for AI tasks.

pub mod recipe_ideas;
