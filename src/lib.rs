//! Workspace-level integration tests for trigsum live in `tests/`.
