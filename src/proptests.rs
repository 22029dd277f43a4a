//! Property-based tests for the keystroke state machine.
