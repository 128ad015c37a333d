//! Cross-crate integration tests for the toolbelt workspace.

#[cfg(test)]
mod scan;
#[cfg(test)]
mod settings;
