pub mod ai_parser;
pub mod ai_prompt;
pub mod catalog;
pub mod media;
pub mod plan_assembler;
pub mod profile;
pub mod templates;
pub mod training_plan;
