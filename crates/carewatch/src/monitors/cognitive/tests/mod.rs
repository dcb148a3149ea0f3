mod common;
mod evaluation;
mod guidance;
